//! Sample command: fixed picks on a screenshot.
//!
//! Picks are independent, so they run in parallel over one shared,
//! immutable snapshot.

use crate::SampleArgs;
use anyhow::{Context, Result};
use huepick_color::{
    Deficiency, LabContext, NamingService, TransformationChain, heuristic_contrast, model_text,
};
use huepick_core::Point;
use huepick_sample::{Falloff, compute_sample_rect, png, sample};
use rayon::prelude::*;
use tracing::debug;

/// Samples every `--at` point and prints the results in argument order.
pub fn run(args: SampleArgs, verbose: bool) -> Result<()> {
    let mut settings = super::load_settings(args.config.as_deref())?;
    if let Some(r) = args.oversample {
        settings.oversample = r;
    }
    if let Some(f) = &args.falloff {
        settings.falloff = f.parse::<Falloff>()?;
    }
    settings.validate()?;

    let mut chain = TransformationChain::from_specs(&settings.transformations);
    if let Some(kind) = &args.simulate {
        let kind = parse_deficiency(kind)?;
        chain = chain.vision_deficiency(kind, 1.0);
    }

    let shot = png::read(&args.input)
        .with_context(|| format!("Failed to load: {}", args.input.display()))?;
    let points = args
        .at
        .iter()
        .map(|s| super::parse_point(s))
        .collect::<Result<Vec<Point>>>()?;
    debug!(points = points.len(), rect = %shot.rect(), "sampling");

    let ctx = LabContext::new(settings.illuminant, settings.observer);
    let names = NamingService::css();

    let results: Vec<_> = points
        .par_iter()
        .map(|&p| -> Result<_> {
            let region = compute_sample_rect(p, shot.rect(), settings.oversample)?;
            let color = sample(&shot, &region, settings.falloff)?;
            Ok((p, region, color))
        })
        .collect();

    for result in results {
        let (p, region, color) = result?;
        let display = chain.apply(color);
        println!("{p}  {}", names.name(color, settings.imprecision_postfix));
        if verbose {
            println!("  region: {}", region.rect);
        }
        super::print_models(&model_text(color, &ctx));
        if !chain.is_empty() {
            println!("  display: {}", display.to_hex());
        }
        println!(
            "  contrast vs {}: {:.1}",
            settings.contrast_reference.to_hex(),
            heuristic_contrast(color, settings.contrast_reference)
        );
    }
    Ok(())
}

fn parse_deficiency(s: &str) -> Result<Deficiency> {
    let kind = match s.to_ascii_lowercase().as_str() {
        "protanomaly" | "protanopia" | "protan" => Deficiency::Protanomaly,
        "deuteranomaly" | "deuteranopia" | "deutan" => Deficiency::Deuteranomaly,
        "tritanomaly" | "tritanopia" | "tritan" => Deficiency::Tritanomaly,
        other => anyhow::bail!("unknown vision deficiency '{other}'"),
    };
    Ok(kind)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_deficiency() {
        assert_eq!(parse_deficiency("Deutan").unwrap(), Deficiency::Deuteranomaly);
        assert!(parse_deficiency("achromatopsia").is_err());
    }
}
