//! Name command: nearest CSS color.

use crate::NameArgs;
use anyhow::Result;
use huepick_color::NamingService;
use huepick_core::Color;

/// Prints the nearest name, plus distance when verbose.
pub fn run(args: NameArgs, verbose: bool) -> Result<()> {
    let color = super::parse_hex(&args.color)?;
    let names = NamingService::css();
    println!("{}", names.name(color, args.precise));
    if verbose {
        let m = names.find(color);
        println!("  {} ΔE76 {:.2}", Color::from_rgb8(m.entry.rgb).to_hex(), m.distance);
    }
    Ok(())
}
