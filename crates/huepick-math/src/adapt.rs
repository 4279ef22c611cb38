//! Bradford chromatic adaptation.
//!
//! Lab is defined relative to a reference white. The sRGB matrix is
//! anchored at D65, so reaching any other white means adapting XYZ through
//! the Bradford cone space:
//!
//! ```text
//! M_adapt = B^-1 * diag(B * dst / B * src) * B
//! ```
//!
//! ```rust
//! use huepick_math::{adapt_matrix, Vec3};
//!
//! let d65 = Vec3::new(0.95047, 1.0, 1.08883);
//! let d50 = Vec3::new(0.96422, 1.0, 0.82521);
//! let m = adapt_matrix(d65, d50);
//! let white = m * d65;
//! assert!((white.z - d50.z).abs() < 1e-4);
//! ```

use crate::{Mat3, Vec3};

/// Bradford cone response matrix (Lam, 1985).
pub const BRADFORD: Mat3 = Mat3::from_rows([
    [0.8951, 0.2664, -0.1614],
    [-0.7502, 1.7135, 0.0367],
    [0.0389, -0.0685, 1.0296],
]);

/// XYZ adaptation matrix taking `src_white` to `dst_white`.
pub fn adapt_matrix(src_white: Vec3, dst_white: Vec3) -> Mat3 {
    let inv = BRADFORD.inverse().unwrap_or(Mat3::IDENTITY);
    let src_cone = BRADFORD * src_white;
    let dst_cone = BRADFORD * dst_white;
    let scale = dst_cone.div_elem(src_cone);
    inv * Mat3::diagonal(scale.x, scale.y, scale.z) * BRADFORD
}

#[cfg(test)]
mod tests {
    use super::*;

    const D65: Vec3 = Vec3::new(0.95047, 1.0, 1.08883);
    const D50: Vec3 = Vec3::new(0.96422, 1.0, 0.82521);
    const A: Vec3 = Vec3::new(1.09850, 1.0, 0.35585);

    #[test]
    fn test_white_maps_to_white() {
        for dst in [D50, A] {
            let w = adapt_matrix(D65, dst) * D65;
            assert!((w.x - dst.x).abs() < 1e-4);
            assert!((w.y - dst.y).abs() < 1e-4);
            assert!((w.z - dst.z).abs() < 1e-4);
        }
    }

    #[test]
    fn test_known_d65_to_d50() {
        // Published Bradford D65 -> D50 matrix.
        let m = adapt_matrix(D65, D50);
        assert!((m.m[0][0] - 1.0478112).abs() < 1e-4);
        assert!((m.m[0][2] + 0.0501270).abs() < 1e-4);
        assert!((m.m[2][2] - 0.7521316).abs() < 1e-4);
    }

    #[test]
    fn test_same_white_is_identity() {
        let m = adapt_matrix(D65, D65);
        for i in 0..3 {
            for j in 0..3 {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert!((m.m[i][j] - expected).abs() < 1e-5);
            }
        }
    }
}
