//! Watch command: a scripted picking session.
//!
//! The pointer walks the given path, one point per tick. The session is
//! driven by a simulated clock advancing one refresh interval per step, so
//! the output does not depend on machine speed.

use crate::WatchArgs;
use anyhow::Result;
use huepick_sample::{ImageScreen, Session};
use std::time::{Duration, Instant};
use tracing::warn;

/// Runs the session and prints one line per tick.
pub fn run(args: WatchArgs, verbose: bool) -> Result<()> {
    let settings = super::load_settings(args.config.as_deref())?;
    let path = super::parse_path(&args.path)?;
    let ticks = args.ticks.unwrap_or(path.len());
    let interval = Duration::from_secs_f64(1.0 / settings.refresh_rate as f64);

    let screen = ImageScreen::from_png(&args.input)?;
    let mut session = Session::new(screen, settings)?;

    let start = Instant::now();
    for i in 0..ticks {
        let p = path[i % path.len()];
        session.screen_mut().move_pointer(p);
        let now = start + interval * i as u32;
        let Some(result) = session.poll(now) else {
            continue;
        };
        match result {
            Ok(sample) => {
                println!(
                    "{i:>4} {p}  {}  {}",
                    sample.text.hex,
                    sample.name
                );
                if verbose {
                    super::print_models(&sample.text);
                }
                if args.store {
                    session.store();
                }
            }
            Err(e) if e.is_capture_error() => warn!(tick = i, "{e}"),
            Err(e) => return Err(e.into()),
        }
    }

    if args.store {
        let swatch = session.swatch();
        println!("swatch (active {}):", swatch.active());
        for (idx, color) in swatch.slots().iter().enumerate() {
            println!("  {}: {}", idx + 1, color.to_hex());
        }
    }
    Ok(())
}
