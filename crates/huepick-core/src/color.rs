//! The canonical [`Color`] value.
//!
//! Every sampled or edited color is stored as gamma-encoded sRGB with
//! channels in `[0, 1]`. Other models (HSL, Lab, ...) are views computed on
//! demand from this value and never stored alongside it.

use crate::error::{Error, Result};
use crate::pixel::Rgb8;
use std::fmt;
use std::str::FromStr;

/// Gamma-encoded sRGB color, the single source of truth for a sample.
///
/// `Color` is a small `Copy` value: converters take it by value and return
/// fresh values, they never mutate in place.
///
/// ```rust
/// use huepick_core::Color;
///
/// let c: Color = "#ff8000".parse().unwrap();
/// assert_eq!(c.to_rgb8().g, 128);
/// assert_eq!(c.to_hex(), "#ff8000");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Color {
    /// Red in `[0, 1]`
    pub r: f32,
    /// Green in `[0, 1]`
    pub g: f32,
    /// Blue in `[0, 1]`
    pub b: f32,
}

impl Color {
    /// Black.
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);
    /// White.
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0);

    /// Creates a color from encoded sRGB channels.
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Creates a color with all channels set to `v`.
    #[inline]
    pub const fn gray(v: f32) -> Self {
        Self::new(v, v, v)
    }

    /// Creates a color from 8-bit channels.
    #[inline]
    pub fn from_u8(r: u8, g: u8, b: u8) -> Self {
        Self::new(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0)
    }

    /// Creates a color from a captured pixel.
    #[inline]
    pub fn from_rgb8(p: Rgb8) -> Self {
        Self::from_u8(p.r, p.g, p.b)
    }

    /// Quantizes to 8 bits with rounding, clamping out-of-range channels.
    #[inline]
    pub fn to_rgb8(self) -> Rgb8 {
        let q = |v: f32| (clamp_unit(v) * 255.0).round() as u8;
        Rgb8::new(q(self.r), q(self.g), q(self.b))
    }

    /// Channels as an array.
    #[inline]
    pub const fn to_array(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }

    /// Creates a color from an array.
    #[inline]
    pub const fn from_array(a: [f32; 3]) -> Self {
        Self::new(a[0], a[1], a[2])
    }

    /// Applies `f` to each channel.
    #[inline]
    pub fn map(self, f: impl Fn(f32) -> f32) -> Self {
        Self::new(f(self.r), f(self.g), f(self.b))
    }

    /// Returns `true` if all channels are finite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite()
    }

    /// Returns `true` if all channels lie in `[0, 1]`.
    #[inline]
    pub fn is_in_unit_range(self) -> bool {
        self.to_array().iter().all(|v| (0.0..=1.0).contains(v))
    }

    /// Replaces NaN with 0 and clamps every channel to `[0, 1]`.
    #[inline]
    pub fn sanitized(self) -> Self {
        self.map(clamp_unit)
    }

    /// Linear interpolation in encoded space.
    #[inline]
    pub fn lerp(self, other: Self, t: f32) -> Self {
        Self::new(
            self.r + (other.r - self.r) * t,
            self.g + (other.g - self.g) * t,
            self.b + (other.b - self.b) * t,
        )
    }

    /// Formats as `#rrggbb`.
    pub fn to_hex(self) -> String {
        let p = self.to_rgb8();
        format!("#{:02x}{:02x}{:02x}", p.r, p.g, p.b)
    }

    /// Parses `#rgb`, `#rrggbb` or the same without the leading `#`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidColor`] for any other input.
    pub fn from_hex(s: &str) -> Result<Self> {
        let digits = s.trim().trim_start_matches('#');
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(Error::invalid_color(s, "non-hex digit"));
        }
        let byte = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16);
        let nibble = |i: usize| u8::from_str_radix(&digits[i..i + 1], 16).map(|v| v * 17);
        let parsed = match digits.len() {
            6 => (byte(0), byte(2), byte(4)),
            3 => (nibble(0), nibble(1), nibble(2)),
            _ => return Err(Error::invalid_color(s, "expected 3 or 6 hex digits")),
        };
        match parsed {
            (Ok(r), Ok(g), Ok(b)) => Ok(Self::from_u8(r, g, b)),
            _ => Err(Error::invalid_color(s, "malformed hex")),
        }
    }
}

/// Clamps to `[0, 1]`, mapping NaN to 0.
#[inline]
pub fn clamp_unit(v: f32) -> f32 {
    if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) }
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl From<Rgb8> for Color {
    fn from(p: Rgb8) -> Self {
        Self::from_rgb8(p)
    }
}

impl From<[f32; 3]> for Color {
    fn from(a: [f32; 3]) -> Self {
        Self::from_array(a)
    }
}
