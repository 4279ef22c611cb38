//! # huepick-primaries
//!
//! The sRGB matrix, CIE reference whites and the RGB <-> XYZ matrices that
//! tie them together.
//!
//! Screen pixels are sRGB, whose primaries are defined against D65. Lab
//! needs XYZ relative to a chosen reference white, so the matrix for an
//! (illuminant, observer) pair is the sRGB matrix followed by a Bradford
//! adaptation from D65 to that white:
//!
//! ```rust
//! use huepick_primaries::{Illuminant, Observer, rgb_to_xyz};
//! use huepick_math::Vec3;
//!
//! let m = rgb_to_xyz(Illuminant::D50, Observer::Two);
//! let white = m * Vec3::ONE;
//! let d50 = Illuminant::D50.white(Observer::Two);
//! assert!((white.x - d50.x).abs() < 1e-4);
//! ```
//!
//! # Names
//!
//! Illuminants and observers parse from the strings a settings store keeps
//! (`"D50"`, `"d65"`, `"2"`, `"10°"`). Unknown names are rejected with
//! [`huepick_core::Error::InvalidConfiguration`].

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

use huepick_core::Error;
use huepick_math::{Mat3, Vec3, adapt_matrix};
use std::fmt;
use std::str::FromStr;

/// Published sRGB -> XYZ (D65) matrix.
pub const SRGB_TO_XYZ: Mat3 = Mat3::from_rows([
    [0.4124564, 0.3575761, 0.1804375],
    [0.2126729, 0.7151522, 0.0721750],
    [0.0193339, 0.1191920, 0.9503041],
]);

/// CIE standard observer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub enum Observer {
    /// CIE 1931 2° observer
    #[default]
    Two,
    /// CIE 1964 10° observer
    Ten,
}

impl Observer {
    /// All observers.
    pub const ALL: [Observer; 2] = [Observer::Two, Observer::Ten];

    /// Settings-store name (`"2"` or `"10"`).
    pub const fn name(self) -> &'static str {
        match self {
            Observer::Two => "2",
            Observer::Ten => "10",
        }
    }
}

impl FromStr for Observer {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        let trimmed = s.trim().trim_end_matches('°').trim_end_matches("deg").trim();
        match trimmed {
            "2" => Ok(Observer::Two),
            "10" => Ok(Observer::Ten),
            _ => Err(Error::invalid_config(format!("unknown observer '{s}'"))),
        }
    }
}

impl fmt::Display for Observer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°", self.name())
    }
}

/// CIE reference illuminant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub enum Illuminant {
    /// Incandescent, ~2856K
    A,
    /// Average daylight (obsolete), ~6774K
    C,
    /// Horizon light, ~5003K; the ICC profile connection white
    #[default]
    D50,
    /// Mid-morning daylight, ~5503K
    D55,
    /// Noon daylight, ~6504K; the sRGB white
    D65,
    /// North sky daylight, ~7504K
    D75,
    /// Cool white fluorescent
    F2,
    /// Broadband daylight fluorescent
    F7,
    /// Narrow tri-band fluorescent
    F11,
}

impl Illuminant {
    /// All illuminants in table order.
    pub const ALL: [Illuminant; 9] = [
        Illuminant::A,
        Illuminant::C,
        Illuminant::D50,
        Illuminant::D55,
        Illuminant::D65,
        Illuminant::D75,
        Illuminant::F2,
        Illuminant::F7,
        Illuminant::F11,
    ];

    /// Settings-store name.
    pub const fn name(self) -> &'static str {
        match self {
            Illuminant::A => "A",
            Illuminant::C => "C",
            Illuminant::D50 => "D50",
            Illuminant::D55 => "D55",
            Illuminant::D65 => "D65",
            Illuminant::D75 => "D75",
            Illuminant::F2 => "F2",
            Illuminant::F7 => "F7",
            Illuminant::F11 => "F11",
        }
    }

    /// Reference white in XYZ with `Y = 1`.
    pub const fn white(self, observer: Observer) -> Vec3 {
        let (x, z) = match observer {
            Observer::Two => match self {
                Illuminant::A => (1.09850, 0.35585),
                Illuminant::C => (0.98074, 1.18232),
                Illuminant::D50 => (0.96422, 0.82521),
                Illuminant::D55 => (0.95682, 0.92149),
                Illuminant::D65 => (0.95047, 1.08883),
                Illuminant::D75 => (0.94972, 1.22638),
                Illuminant::F2 => (0.99187, 0.67395),
                Illuminant::F7 => (0.95044, 1.08755),
                Illuminant::F11 => (1.00966, 0.64370),
            },
            Observer::Ten => match self {
                Illuminant::A => (1.11144, 0.35200),
                Illuminant::C => (0.97285, 1.16145),
                Illuminant::D50 => (0.96720, 0.81427),
                Illuminant::D55 => (0.95799, 0.90926),
                Illuminant::D65 => (0.94811, 1.07304),
                Illuminant::D75 => (0.94416, 1.20641),
                Illuminant::F2 => (1.03280, 0.69026),
                Illuminant::F7 => (0.95792, 1.07687),
                Illuminant::F11 => (1.03866, 0.65627),
            },
        };
        Vec3::new(x, 1.0, z)
    }
}

impl FromStr for Illuminant {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        let wanted = s.trim();
        Illuminant::ALL
            .into_iter()
            .find(|i| i.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| Error::invalid_config(format!("unknown illuminant '{s}'")))
    }
}

impl fmt::Display for Illuminant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// White the sRGB matrix is anchored to.
pub const SRGB_WHITE: Vec3 = Illuminant::D65.white(Observer::Two);

/// sRGB linear -> XYZ relative to the given reference white.
pub fn rgb_to_xyz(illuminant: Illuminant, observer: Observer) -> Mat3 {
    adapt_matrix(SRGB_WHITE, illuminant.white(observer)) * SRGB_TO_XYZ
}

/// XYZ relative to the given reference white -> sRGB linear.
pub fn xyz_to_rgb(illuminant: Illuminant, observer: Observer) -> Mat3 {
    rgb_to_xyz(illuminant, observer)
        .inverse()
        .unwrap_or(Mat3::IDENTITY)
}
