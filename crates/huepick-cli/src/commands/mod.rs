//! CLI command implementations

pub mod convert;
pub mod name;
pub mod sample;
pub mod watch;

use anyhow::{Context, Result, bail};
use huepick_color::{ColorModel, ModelText};
use huepick_core::{Color, Point};
use huepick_sample::Settings;
use std::path::Path;

/// Load settings from an optional YAML file
pub fn load_settings(path: Option<&Path>) -> Result<Settings> {
    match path {
        Some(p) => Settings::from_file(p)
            .with_context(|| format!("Failed to load settings: {}", p.display())),
        None => Ok(Settings::default()),
    }
}

/// Parse "X,Y"
pub fn parse_point(s: &str) -> Result<Point> {
    let Some((x, y)) = s.split_once(',') else {
        bail!("expected X,Y, got '{s}'");
    };
    let x = x.trim().parse().with_context(|| format!("bad X in '{s}'"))?;
    let y = y.trim().parse().with_context(|| format!("bad Y in '{s}'"))?;
    Ok(Point::new(x, y))
}

/// Parse "X,Y;X,Y;..."
pub fn parse_path(s: &str) -> Result<Vec<Point>> {
    let points = s
        .split(';')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(parse_point)
        .collect::<Result<Vec<_>>>()?;
    if points.is_empty() {
        bail!("pointer path is empty");
    }
    Ok(points)
}

/// Parse a hex color
pub fn parse_hex(s: &str) -> Result<Color> {
    Ok(Color::from_hex(s)?)
}

/// Print every model line of a color, indented
pub fn print_models(text: &ModelText) {
    println!("  hex:  {}", text.hex);
    for model in ColorModel::ALL {
        if let Some(line) = text.get(model) {
            println!("  {:<5} {}", format!("{model}:"), line);
        }
    }
}
