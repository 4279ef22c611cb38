//! Typed views of a color in each supported model.
//!
//! Hue is expressed in turns (`[0, 1)`) everywhere, including LCH, so that
//! the wrap logic is shared. Lightness/saturation/value and CMYK channels
//! are `[0, 1]`; Lab L is `[0, 100]`.

use huepick_core::{Color, Error, clamp_unit};
use huepick_math::Vec3;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lab a/b (and LCH chroma) magnitude beyond which input is clamped.
pub const AB_LIMIT: f32 = 200.0;

/// Wraps a hue into `[0, 1)`, mapping NaN to 0.
///
/// ```rust
/// use huepick_color::wrap_hue;
///
/// assert_eq!(wrap_hue(1.25), 0.25);
/// assert_eq!(wrap_hue(-0.25), 0.75);
/// assert_eq!(wrap_hue(1.0), 0.0);
/// ```
#[inline]
pub fn wrap_hue(h: f32) -> f32 {
    if !h.is_finite() {
        return 0.0;
    }
    let w = h.rem_euclid(1.0);
    // rem_euclid of a tiny negative rounds up to exactly 1.0
    if w >= 1.0 { 0.0 } else { w }
}

#[inline]
fn finite_or_zero(v: f32) -> f32 {
    if v.is_finite() { v } else { 0.0 }
}

/// Hue, saturation, lightness.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Hsl {
    /// Hue in turns
    pub h: f32,
    /// Saturation
    pub s: f32,
    /// Lightness
    pub l: f32,
}

impl Hsl {
    /// Creates an HSL value.
    pub const fn new(h: f32, s: f32, l: f32) -> Self {
        Self { h, s, l }
    }

    /// Wraps hue and clamps the other channels.
    pub fn sanitized(self) -> Self {
        Self::new(wrap_hue(self.h), clamp_unit(self.s), clamp_unit(self.l))
    }
}

/// Hue, saturation, value.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Hsv {
    /// Hue in turns
    pub h: f32,
    /// Saturation
    pub s: f32,
    /// Value
    pub v: f32,
}

impl Hsv {
    /// Creates an HSV value.
    pub const fn new(h: f32, s: f32, v: f32) -> Self {
        Self { h, s, v }
    }

    /// Wraps hue and clamps the other channels.
    pub fn sanitized(self) -> Self {
        Self::new(wrap_hue(self.h), clamp_unit(self.s), clamp_unit(self.v))
    }
}

/// Cyan, magenta, yellow, key.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Cmyk {
    /// Cyan
    pub c: f32,
    /// Magenta
    pub m: f32,
    /// Yellow
    pub y: f32,
    /// Key (black)
    pub k: f32,
}

impl Cmyk {
    /// Creates a CMYK value.
    pub const fn new(c: f32, m: f32, y: f32, k: f32) -> Self {
        Self { c, m, y, k }
    }

    /// Clamps every channel.
    pub fn sanitized(self) -> Self {
        Self::new(
            clamp_unit(self.c),
            clamp_unit(self.m),
            clamp_unit(self.y),
            clamp_unit(self.k),
        )
    }
}

/// CIE XYZ relative to the context's reference white (`Y = 1` at white).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Xyz {
    /// X
    pub x: f32,
    /// Y (relative luminance)
    pub y: f32,
    /// Z
    pub z: f32,
}

impl Xyz {
    /// Creates an XYZ value.
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

/// CIE L*a*b*.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Lab {
    /// Lightness, `[0, 100]`
    pub l: f32,
    /// Green-red axis
    pub a: f32,
    /// Blue-yellow axis
    pub b: f32,
}

impl Lab {
    /// Creates a Lab value.
    pub const fn new(l: f32, a: f32, b: f32) -> Self {
        Self { l, a, b }
    }

    /// Clamps L to `[0, 100]` and a/b to `±AB_LIMIT`, NaN to 0.
    pub fn sanitized(self) -> Self {
        Self::new(
            finite_or_zero(self.l).clamp(0.0, 100.0),
            finite_or_zero(self.a).clamp(-AB_LIMIT, AB_LIMIT),
            finite_or_zero(self.b).clamp(-AB_LIMIT, AB_LIMIT),
        )
    }

    /// CIE76 color difference.
    pub fn delta_e(self, other: Lab) -> f32 {
        Vec3::new(self.l, self.a, self.b).distance(Vec3::new(other.l, other.a, other.b))
    }
}

/// Polar Lab: lightness, chroma, hue.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Lch {
    /// Lightness, `[0, 100]`
    pub l: f32,
    /// Chroma, `>= 0`
    pub c: f32,
    /// Hue in turns
    pub h: f32,
}

impl Lch {
    /// Creates an LCH value.
    pub const fn new(l: f32, c: f32, h: f32) -> Self {
        Self { l, c, h }
    }

    /// Clamps L and C, wraps hue.
    pub fn sanitized(self) -> Self {
        Self::new(
            finite_or_zero(self.l).clamp(0.0, 100.0),
            finite_or_zero(self.c).clamp(0.0, AB_LIMIT),
            wrap_hue(self.h),
        )
    }
}

/// Supported color models.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ColorModel {
    /// Gamma-encoded sRGB (the pivot)
    Rgb,
    /// Hue, saturation, lightness
    Hsl,
    /// Hue, saturation, value
    Hsv,
    /// Cyan, magenta, yellow, key
    Cmyk,
    /// CIE L*a*b*
    Lab,
    /// CIE LCh(ab)
    Lch,
}

impl ColorModel {
    /// All models in display order.
    pub const ALL: [ColorModel; 6] = [
        ColorModel::Rgb,
        ColorModel::Hsl,
        ColorModel::Hsv,
        ColorModel::Cmyk,
        ColorModel::Lab,
        ColorModel::Lch,
    ];

    /// Lowercase name.
    pub const fn name(self) -> &'static str {
        match self {
            ColorModel::Rgb => "rgb",
            ColorModel::Hsl => "hsl",
            ColorModel::Hsv => "hsv",
            ColorModel::Cmyk => "cmyk",
            ColorModel::Lab => "lab",
            ColorModel::Lch => "lch",
        }
    }

    /// Number of meaningful channels (3 or 4).
    pub const fn channel_count(self) -> usize {
        match self {
            ColorModel::Cmyk => 4,
            _ => 3,
        }
    }

    /// Legal range of each channel; unused channels are `(0, 0)`.
    pub const fn channel_ranges(self) -> [(f32, f32); 4] {
        const UNIT: (f32, f32) = (0.0, 1.0);
        const NONE: (f32, f32) = (0.0, 0.0);
        match self {
            ColorModel::Rgb | ColorModel::Hsl | ColorModel::Hsv => [UNIT, UNIT, UNIT, NONE],
            ColorModel::Cmyk => [UNIT, UNIT, UNIT, UNIT],
            ColorModel::Lab => [(0.0, 100.0), (-128.0, 128.0), (-128.0, 128.0), NONE],
            ColorModel::Lch => [(0.0, 100.0), (0.0, 150.0), UNIT, NONE],
        }
    }

    /// Whether this model's hue channel is cyclic, and which index it is.
    pub const fn hue_channel(self) -> Option<usize> {
        match self {
            ColorModel::Hsl | ColorModel::Hsv => Some(0),
            ColorModel::Lch => Some(2),
            _ => None,
        }
    }
}

impl fmt::Display for ColorModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColorModel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        ColorModel::ALL
            .into_iter()
            .find(|m| m.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::invalid_config(format!("unknown color model '{s}'")))
    }
}

/// A color tagged with the model its channels belong to.
///
/// This is the polymorphic "four channels plus active model" value that
/// generic conversions and component editors pass around.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ModelColor {
    /// sRGB
    Rgb(Color),
    /// HSL
    Hsl(Hsl),
    /// HSV
    Hsv(Hsv),
    /// CMYK
    Cmyk(Cmyk),
    /// Lab
    Lab(Lab),
    /// LCH
    Lch(Lch),
}

impl ModelColor {
    /// Model of the channels.
    pub const fn model(&self) -> ColorModel {
        match self {
            ModelColor::Rgb(_) => ColorModel::Rgb,
            ModelColor::Hsl(_) => ColorModel::Hsl,
            ModelColor::Hsv(_) => ColorModel::Hsv,
            ModelColor::Cmyk(_) => ColorModel::Cmyk,
            ModelColor::Lab(_) => ColorModel::Lab,
            ModelColor::Lch(_) => ColorModel::Lch,
        }
    }

    /// Raw channels; the fourth is 0 for three-channel models.
    pub const fn channels(&self) -> [f32; 4] {
        match *self {
            ModelColor::Rgb(c) => [c.r, c.g, c.b, 0.0],
            ModelColor::Hsl(c) => [c.h, c.s, c.l, 0.0],
            ModelColor::Hsv(c) => [c.h, c.s, c.v, 0.0],
            ModelColor::Cmyk(c) => [c.c, c.m, c.y, c.k],
            ModelColor::Lab(c) => [c.l, c.a, c.b, 0.0],
            ModelColor::Lch(c) => [c.l, c.c, c.h, 0.0],
        }
    }

    /// Builds a value from raw channels.
    pub const fn from_channels(model: ColorModel, ch: [f32; 4]) -> Self {
        match model {
            ColorModel::Rgb => ModelColor::Rgb(Color::new(ch[0], ch[1], ch[2])),
            ColorModel::Hsl => ModelColor::Hsl(Hsl::new(ch[0], ch[1], ch[2])),
            ColorModel::Hsv => ModelColor::Hsv(Hsv::new(ch[0], ch[1], ch[2])),
            ColorModel::Cmyk => ModelColor::Cmyk(Cmyk::new(ch[0], ch[1], ch[2], ch[3])),
            ColorModel::Lab => ModelColor::Lab(Lab::new(ch[0], ch[1], ch[2])),
            ColorModel::Lch => ModelColor::Lch(Lch::new(ch[0], ch[1], ch[2])),
        }
    }

    /// Returns a copy with channel `index` replaced.
    pub fn with_channel(&self, index: usize, value: f32) -> Self {
        let mut ch = self.channels();
        if let Some(slot) = ch.get_mut(index) {
            *slot = value;
        }
        Self::from_channels(self.model(), ch)
    }

    /// Clamps channels to the model's domain.
    pub fn sanitized(&self) -> Self {
        match *self {
            ModelColor::Rgb(c) => ModelColor::Rgb(c.sanitized()),
            ModelColor::Hsl(c) => ModelColor::Hsl(c.sanitized()),
            ModelColor::Hsv(c) => ModelColor::Hsv(c.sanitized()),
            ModelColor::Cmyk(c) => ModelColor::Cmyk(c.sanitized()),
            ModelColor::Lab(c) => ModelColor::Lab(c.sanitized()),
            ModelColor::Lch(c) => ModelColor::Lch(c.sanitized()),
        }
    }
}

impl From<Color> for ModelColor {
    fn from(c: Color) -> Self {
        ModelColor::Rgb(c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_hue_edges() {
        assert_eq!(wrap_hue(0.0), 0.0);
        assert_eq!(wrap_hue(-1e-9), 0.0);
        assert_eq!(wrap_hue(f32::NAN), 0.0);
        assert_eq!(wrap_hue(f32::INFINITY), 0.0);
        assert!((wrap_hue(2.5) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_channels_roundtrip() {
        let values = [
            ModelColor::Rgb(Color::new(0.1, 0.2, 0.3)),
            ModelColor::Cmyk(Cmyk::new(0.1, 0.2, 0.3, 0.4)),
            ModelColor::Lch(Lch::new(50.0, 20.0, 0.5)),
        ];
        for v in values {
            assert_eq!(ModelColor::from_channels(v.model(), v.channels()), v);
        }
    }

    #[test]
    fn test_with_channel() {
        let v = ModelColor::Lab(Lab::new(50.0, 0.0, 0.0)).with_channel(1, 12.0);
        assert_eq!(v, ModelColor::Lab(Lab::new(50.0, 12.0, 0.0)));
        // Out-of-range index leaves the value untouched.
        assert_eq!(v.with_channel(7, 1.0), v);
    }

    #[test]
    fn test_model_parse() {
        assert_eq!("LAB".parse::<ColorModel>().unwrap(), ColorModel::Lab);
        assert!("yuv".parse::<ColorModel>().unwrap_err().is_config_error());
    }

    #[test]
    fn test_sanitized_lab() {
        let lab = Lab::new(f32::NAN, 1000.0, -1000.0).sanitized();
        assert_eq!(lab, Lab::new(0.0, AB_LIMIT, -AB_LIMIT));
    }

    #[test]
    fn test_delta_e() {
        let a = Lab::new(50.0, 3.0, 0.0);
        let b = Lab::new(50.0, 0.0, 4.0);
        assert!((a.delta_e(b) - 5.0).abs() < 1e-6);
    }
}
