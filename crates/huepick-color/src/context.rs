//! Reference white selection for Lab conversions.

use huepick_math::{Mat3, Vec3};
use huepick_primaries::{Illuminant, Observer, rgb_to_xyz, xyz_to_rgb};

/// Illuminant/observer pair with its matrices precomputed.
///
/// Built once per session (or per settings change) and passed by reference
/// to every Lab/LCH conversion.
///
/// ```rust
/// use huepick_color::LabContext;
/// use huepick_primaries::{Illuminant, Observer};
///
/// let ctx = LabContext::new(Illuminant::D65, Observer::Ten);
/// assert_eq!(ctx.illuminant(), Illuminant::D65);
/// assert_eq!(LabContext::default(), LabContext::d50());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabContext {
    illuminant: Illuminant,
    observer: Observer,
    white: Vec3,
    to_xyz: Mat3,
    from_xyz: Mat3,
}

impl LabContext {
    /// Builds the context for the given white.
    pub fn new(illuminant: Illuminant, observer: Observer) -> Self {
        Self {
            illuminant,
            observer,
            white: illuminant.white(observer),
            to_xyz: rgb_to_xyz(illuminant, observer),
            from_xyz: xyz_to_rgb(illuminant, observer),
        }
    }

    /// D50 / 2°, the default for display and naming.
    pub fn d50() -> Self {
        Self::new(Illuminant::D50, Observer::Two)
    }

    /// Selected illuminant.
    pub fn illuminant(&self) -> Illuminant {
        self.illuminant
    }

    /// Selected observer.
    pub fn observer(&self) -> Observer {
        self.observer
    }

    /// Reference white in XYZ.
    pub fn white(&self) -> Vec3 {
        self.white
    }

    /// Linear sRGB -> XYZ.
    pub fn rgb_to_xyz_matrix(&self) -> &Mat3 {
        &self.to_xyz
    }

    /// XYZ -> linear sRGB.
    pub fn xyz_to_rgb_matrix(&self) -> &Mat3 {
        &self.from_xyz
    }
}

impl Default for LabContext {
    fn default() -> Self {
        Self::d50()
    }
}
