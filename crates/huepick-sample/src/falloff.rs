//! Radial weighting kernels for oversampled picks.

use huepick_core::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Steepness `k` of the exponential kernel `exp(-k * d)`.
pub const EXPONENTIAL_STEEPNESS: f32 = 3.0;

/// Falloff kernel applied across the oversampling square.
///
/// `d` is the distance from the pointer pixel normalized to `[0, 1]`.
/// Every kernel is non-increasing in `d`, weighs the pointer pixel at 1 and
/// gives 0 beyond `d = 1`.
///
/// ```rust
/// use huepick_sample::Falloff;
///
/// assert_eq!(Falloff::Linear.weight(0.25), 0.75);
/// assert_eq!(Falloff::Quadratic.weight(0.5), 0.25);
/// assert_eq!(Falloff::None.weight(0.1), 0.0);
/// assert_eq!(Falloff::Cubic.weight(1.5), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Falloff {
    /// Only the pointer pixel counts.
    #[default]
    None,
    /// `1 - d`
    Linear,
    /// `(1 - d)^2`
    Quadratic,
    /// `(1 - d)^3`
    Cubic,
    /// `exp(-k d)`
    Exponential,
}

impl Falloff {
    /// All kernels.
    pub const ALL: [Falloff; 5] = [
        Falloff::None,
        Falloff::Linear,
        Falloff::Quadratic,
        Falloff::Cubic,
        Falloff::Exponential,
    ];

    /// Weight at normalized distance `d`. NaN and `d > 1` give 0.
    #[inline]
    pub fn weight(self, d: f32) -> f32 {
        if d.is_nan() || d > 1.0 {
            return 0.0;
        }
        let d = d.max(0.0);
        let inv = 1.0 - d;
        match self {
            Falloff::None => {
                if d == 0.0 {
                    1.0
                } else {
                    0.0
                }
            }
            Falloff::Linear => inv,
            Falloff::Quadratic => inv * inv,
            Falloff::Cubic => inv * inv * inv,
            Falloff::Exponential => (-EXPONENTIAL_STEEPNESS * d).exp(),
        }
    }

    /// Lowercase name.
    pub const fn name(self) -> &'static str {
        match self {
            Falloff::None => "none",
            Falloff::Linear => "linear",
            Falloff::Quadratic => "quadratic",
            Falloff::Cubic => "cubic",
            Falloff::Exponential => "exponential",
        }
    }
}

impl fmt::Display for Falloff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Falloff {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        Falloff::ALL
            .into_iter()
            .find(|k| k.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                Error::invalid_config(format!(
                    "unknown falloff '{s}' (expected none, linear, quadratic, cubic or exponential)"
                ))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_center_weight() {
        for k in Falloff::ALL {
            assert_eq!(k.weight(0.0), 1.0, "{k}");
        }
    }

    #[test]
    fn test_out_of_range() {
        for k in Falloff::ALL {
            assert_eq!(k.weight(f32::NAN), 0.0);
            assert_eq!(k.weight(1.0001), 0.0);
            assert_eq!(k.weight(f32::INFINITY), 0.0);
        }
    }

    #[test]
    fn test_exponential() {
        let w = Falloff::Exponential.weight(1.0);
        assert!((w - (-3.0f32).exp()).abs() < 1e-7);
    }

    #[test]
    fn test_parse() {
        assert_eq!("Cubic".parse::<Falloff>().unwrap(), Falloff::Cubic);
        assert!("gaussian".parse::<Falloff>().unwrap_err().is_config_error());
    }

    proptest! {
        #[test]
        fn prop_monotone(a in 0.0f32..=1.0, b in 0.0f32..=1.0) {
            let (near, far) = if a <= b { (a, b) } else { (b, a) };
            for k in Falloff::ALL {
                prop_assert!(k.weight(near) >= k.weight(far));
                prop_assert!((0.0..=1.0).contains(&k.weight(near)));
            }
        }
    }
}
