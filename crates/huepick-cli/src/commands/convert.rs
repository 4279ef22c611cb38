//! Convert command: one color shown in every model.

use crate::ConvertArgs;
use anyhow::{Context, Result, bail};
use huepick_color::{
    ColorModel, GamutAnalyzer, LabContext, ModelColor, NamingService, model_text, model_to_rgb,
};
use huepick_primaries::{Illuminant, Observer};

/// Parses the input in its model, reports gamut, prints every model and
/// the nearest name.
pub fn run(args: ConvertArgs, verbose: bool) -> Result<()> {
    let model: ColorModel = args.from.parse()?;
    let illuminant: Illuminant = match &args.illuminant {
        Some(s) => s.parse()?,
        None => Illuminant::default(),
    };
    let observer: Observer = match &args.observer {
        Some(s) => s.parse()?,
        None => Observer::default(),
    };
    let ctx = LabContext::new(illuminant, observer);

    let value = parse_model_color(&args.color, model)?;
    let report = GamutAnalyzer::new(ctx).analyze(value);
    let rgb = model_to_rgb(value, &ctx);

    if verbose {
        println!("{} ({model}, {illuminant}/{observer})", args.color);
    }
    if report.any() {
        let channels: Vec<&str> = [("red", report.red), ("green", report.green), ("blue", report.blue)]
            .into_iter()
            .filter_map(|(n, out)| out.then_some(n))
            .collect();
        println!("  out of gamut: {} (clamped)", channels.join(", "));
    }
    super::print_models(&model_text(rgb, &ctx));
    println!("  name: {}", NamingService::css().name(rgb, true));
    Ok(())
}

/// Reads `s` as channels of `model`. RGB also accepts hex.
fn parse_model_color(s: &str, model: ColorModel) -> Result<ModelColor> {
    if model == ColorModel::Rgb && !s.contains(',') {
        return Ok(ModelColor::Rgb(super::parse_hex(s)?));
    }
    let values = s
        .split(',')
        .map(|v| {
            v.trim()
                .trim_end_matches(['%', '°'])
                .parse::<f32>()
                .with_context(|| format!("bad channel '{v}'"))
        })
        .collect::<Result<Vec<_>>>()?;
    if values.len() != model.channel_count() {
        bail!(
            "{model} takes {} channels, got {}",
            model.channel_count(),
            values.len()
        );
    }
    let mut ch = [0.0f32; 4];
    ch[..values.len()].copy_from_slice(&values);
    if let Some(h) = model.hue_channel() {
        ch[h] /= 360.0;
    }
    Ok(ModelColor::from_channels(model, ch))
}
