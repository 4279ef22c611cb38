//! sRGB transfer function (IEC 61966-2-1).
//!
//! Piecewise: a linear toe near black and a 2.4 power segment above it.
//! Inputs outside `[0, 1]` are mirrored around zero so that unclamped
//! intermediate values survive a decode/encode round trip.

use huepick_math::Vec3;

/// Encoded value at which the linear toe ends.
pub const DECODE_THRESHOLD: f32 = 0.04045;
/// Linear value at which the linear toe ends.
pub const ENCODE_THRESHOLD: f32 = 0.0031308;

/// Decodes an sRGB value to linear light.
///
/// ```rust
/// use huepick_transfer::srgb::eotf;
///
/// assert!((eotf(0.5) - 0.214).abs() < 0.01);
/// ```
#[inline]
pub fn eotf(v: f32) -> f32 {
    let a = v.abs();
    let l = if a <= DECODE_THRESHOLD {
        a / 12.92
    } else {
        ((a + 0.055) / 1.055).powf(2.4)
    };
    l.copysign(v)
}

/// Encodes linear light to sRGB.
///
/// ```rust
/// use huepick_transfer::srgb::oetf;
///
/// assert!((oetf(0.214) - 0.5).abs() < 0.01);
/// ```
#[inline]
pub fn oetf(l: f32) -> f32 {
    let a = l.abs();
    let v = if a <= ENCODE_THRESHOLD {
        a * 12.92
    } else {
        1.055 * a.powf(1.0 / 2.4) - 0.055
    };
    v.copysign(l)
}

/// Decodes an encoded triplet.
#[inline]
pub fn decode(rgb: Vec3) -> Vec3 {
    rgb.map(eotf)
}

/// Encodes a linear triplet.
#[inline]
pub fn encode(linear: Vec3) -> Vec3 {
    linear.map(oetf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_roundtrip() {
        for i in 0..=1000 {
            let v = i as f32 / 1000.0;
            let back = oetf(eotf(v));
            assert!((v - back).abs() < 1e-5, "v={}, back={}", v, back);
        }
    }

    #[test]
    fn test_boundaries() {
        assert_eq!(eotf(0.0), 0.0);
        assert_abs_diff_eq!(eotf(1.0), 1.0, epsilon = 1e-6);
        assert_eq!(oetf(0.0), 0.0);
        assert_abs_diff_eq!(oetf(1.0), 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_segments_meet() {
        let below = DECODE_THRESHOLD / 12.92;
        let above = ((DECODE_THRESHOLD + 0.055) / 1.055).powf(2.4);
        assert_abs_diff_eq!(below, above, epsilon = 1e-6);
    }

    #[test]
    fn test_negative_mirrors() {
        assert_abs_diff_eq!(eotf(-0.5), -eotf(0.5), epsilon = 1e-7);
        assert_abs_diff_eq!(oetf(eotf(-0.3)), -0.3, epsilon = 1e-5);
    }

    #[test]
    fn test_vector_helpers() {
        let v = Vec3::new(0.2, 0.5, 0.9);
        let back = encode(decode(v));
        assert_abs_diff_eq!(back.x, v.x, epsilon = 1e-5);
        assert_abs_diff_eq!(back.y, v.y, epsilon = 1e-5);
        assert_abs_diff_eq!(back.z, v.z, epsilon = 1e-5);
    }
}
