//! Text forms of a color for display and copy-out.

use crate::context::LabContext;
use crate::convert::{rgb_to_cmyk, rgb_to_hsl, rgb_to_hsv, rgb_to_lab, rgb_to_lch};
use crate::model::{Cmyk, ColorModel, Hsl, Hsv, Lab, Lch};
use huepick_core::Color;
use serde::Serialize;
use std::collections::BTreeMap;

/// Color code of a color in every model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModelText {
    /// `#rrggbb`
    pub hex: String,
    /// One entry per [`ColorModel`].
    pub models: BTreeMap<ColorModel, String>,
}

impl ModelText {
    /// Text for a single model.
    pub fn get(&self, model: ColorModel) -> Option<&str> {
        self.models.get(&model).map(String::as_str)
    }
}

fn pct(v: f32) -> i32 {
    (v * 100.0).round() as i32
}

/// Hue in degrees rounded to `1 / scale`, wrapped into `[0, 360)`.
fn deg(turns: f32, scale: f32) -> f32 {
    let d = (turns * 360.0 * scale).round() / scale;
    if d >= 360.0 { d - 360.0 } else { d }
}

/// `rgb(255, 0, 0)`
pub fn format_rgb(c: Color) -> String {
    let p = c.to_rgb8();
    format!("rgb({}, {}, {})", p.r, p.g, p.b)
}

/// `hsl(0, 100%, 50%)`
pub fn format_hsl(v: Hsl) -> String {
    format!("hsl({}, {}%, {}%)", deg(v.h, 1.0) as i32, pct(v.s), pct(v.l))
}

/// `hsv(0, 100%, 100%)`
pub fn format_hsv(v: Hsv) -> String {
    format!("hsv({}, {}%, {}%)", deg(v.h, 1.0) as i32, pct(v.s), pct(v.v))
}

/// `cmyk(0%, 100%, 100%, 0%)`
pub fn format_cmyk(v: Cmyk) -> String {
    format!("cmyk({}%, {}%, {}%, {}%)", pct(v.c), pct(v.m), pct(v.y), pct(v.k))
}

/// `lab(54.29, 80.81, 69.89)`
pub fn format_lab(v: Lab) -> String {
    format!("lab({:.2}, {:.2}, {:.2})", v.l, v.a, v.b)
}

/// `lch(54.29, 106.84, 40.85°)`
pub fn format_lch(v: Lch) -> String {
    format!("lch({:.2}, {:.2}, {:.2}°)", v.l, v.c, deg(v.h, 100.0))
}

/// Formats `color` in every model.
///
/// ```rust
/// use huepick_color::{model_text, ColorModel, LabContext};
/// use huepick_core::Color;
///
/// let text = model_text(Color::new(1.0, 0.0, 0.0), &LabContext::d50());
/// assert_eq!(text.hex, "#ff0000");
/// assert_eq!(text.get(ColorModel::Hsl), Some("hsl(0, 100%, 50%)"));
/// assert!(text.get(ColorModel::Lab).unwrap().starts_with("lab(54.29, 80.81, "));
/// ```
pub fn model_text(color: Color, ctx: &LabContext) -> ModelText {
    let color = color.sanitized();
    let models = ColorModel::ALL
        .into_iter()
        .map(|model| {
            let text = match model {
                ColorModel::Rgb => format_rgb(color),
                ColorModel::Hsl => format_hsl(rgb_to_hsl(color)),
                ColorModel::Hsv => format_hsv(rgb_to_hsv(color)),
                ColorModel::Cmyk => format_cmyk(rgb_to_cmyk(color)),
                ColorModel::Lab => format_lab(rgb_to_lab(color, ctx)),
                ColorModel::Lch => format_lch(rgb_to_lch(color, ctx)),
            };
            (model, text)
        })
        .collect();
    ModelText {
        hex: color.to_hex(),
        models,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_red_all_models() {
        let t = model_text(Color::new(1.0, 0.0, 0.0), &LabContext::d50());
        assert_eq!(t.get(ColorModel::Rgb), Some("rgb(255, 0, 0)"));
        assert_eq!(t.get(ColorModel::Hsv), Some("hsv(0, 100%, 100%)"));
        assert_eq!(t.get(ColorModel::Cmyk), Some("cmyk(0%, 100%, 100%, 0%)"));
        assert_eq!(t.get(ColorModel::Lch), Some("lch(54.29, 106.84, 40.85°)"));
        assert_eq!(t.models.len(), ColorModel::ALL.len());
    }

    #[test]
    fn test_black_cmyk() {
        let t = model_text(Color::BLACK, &LabContext::d50());
        assert_eq!(t.hex, "#000000");
        assert_eq!(t.get(ColorModel::Cmyk), Some("cmyk(0%, 0%, 0%, 100%)"));
    }

    #[test]
    fn test_hue_degrees() {
        assert_eq!(format_hsl(Hsl::new(0.5, 1.0, 0.5)), "hsl(180, 100%, 50%)");
    }

    #[test]
    fn test_hue_wraps_after_rounding() {
        let t = model_text(Color::new(1.0, 0.0, 0.001), &LabContext::d50());
        assert_eq!(t.get(ColorModel::Hsl), Some("hsl(0, 100%, 50%)"));
        assert_eq!(t.get(ColorModel::Hsv), Some("hsv(0, 100%, 100%)"));
        assert_eq!(format_hsv(Hsv::new(0.9999, 0.5, 0.5)), "hsv(0, 50%, 50%)");
        assert_eq!(format_lch(Lch::new(50.0, 10.0, 0.999999)), "lch(50.00, 10.00, 0.00°)");
    }
}
