//! 3x3 matrix for linear color transforms.
//!
//! Storage is row-major and vectors are columns:
//!
//! ```text
//! | m00 m01 m02 |   | x |   | m00*x + m01*y + m02*z |
//! | m10 m11 m12 | * | y | = | m10*x + m11*y + m12*z |
//! | m20 m21 m22 |   | z |   | m20*x + m21*y + m22*z |
//! ```

use crate::Vec3;
use std::ops::Mul;

/// A row-major 3x3 matrix.
///
/// ```rust
/// use huepick_math::{Mat3, Vec3};
///
/// let v = Vec3::new(1.0, 2.0, 3.0);
/// assert_eq!(Mat3::IDENTITY * v, v);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mat3 {
    /// Elements as `[row0, row1, row2]`
    pub m: [[f32; 3]; 3],
}

impl Mat3 {
    /// Zero matrix.
    pub const ZERO: Self = Self { m: [[0.0; 3]; 3] };

    /// Identity matrix.
    pub const IDENTITY: Self = Self::diagonal(1.0, 1.0, 1.0);

    /// Creates a matrix from row arrays.
    #[inline]
    pub const fn from_rows(rows: [[f32; 3]; 3]) -> Self {
        Self { m: rows }
    }

    /// Creates a matrix whose columns are the given arrays.
    #[inline]
    pub const fn from_cols(cols: [[f32; 3]; 3]) -> Self {
        Self {
            m: [
                [cols[0][0], cols[1][0], cols[2][0]],
                [cols[0][1], cols[1][1], cols[2][1]],
                [cols[0][2], cols[1][2], cols[2][2]],
            ],
        }
    }

    /// Creates a diagonal matrix.
    #[inline]
    pub const fn diagonal(d0: f32, d1: f32, d2: f32) -> Self {
        Self::from_rows([[d0, 0.0, 0.0], [0.0, d1, 0.0], [0.0, 0.0, d2]])
    }

    /// Determinant.
    #[inline]
    pub fn determinant(&self) -> f32 {
        self.to_glam().determinant()
    }

    /// Inverse, or `None` if the matrix is singular.
    pub fn inverse(&self) -> Option<Self> {
        let g = self.to_glam();
        if g.determinant().abs() < 1e-10 {
            return None;
        }
        Some(Self::from_glam(g.inverse()))
    }

    /// `self * v`.
    #[inline]
    pub fn transform(&self, v: Vec3) -> Vec3 {
        (self.to_glam() * glam::Vec3::from(v)).into()
    }

    /// `self * other`.
    #[inline]
    pub fn mul_mat(&self, other: &Self) -> Self {
        Self::from_glam(self.to_glam() * other.to_glam())
    }

    /// Element-wise interpolation, `t = 0` gives `self`.
    #[inline]
    pub fn lerp(&self, other: &Self, t: f32) -> Self {
        let mut result = *self;
        for (row, other_row) in result.m.iter_mut().zip(other.m.iter()) {
            for (a, b) in row.iter_mut().zip(other_row.iter()) {
                *a += (b - *a) * t;
            }
        }
        result
    }

    /// Returns true if no element is NaN or infinite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.m.iter().flatten().all(|x| x.is_finite())
    }

    /// Converts to a column-major glam matrix.
    #[inline]
    pub fn to_glam(&self) -> glam::Mat3 {
        glam::Mat3::from_cols_array_2d(&self.transposed_rows())
    }

    /// Creates from a glam matrix.
    #[inline]
    pub fn from_glam(m: glam::Mat3) -> Self {
        Self::from_cols(m.to_cols_array_2d())
    }

    fn transposed_rows(&self) -> [[f32; 3]; 3] {
        let m = &self.m;
        [
            [m[0][0], m[1][0], m[2][0]],
            [m[0][1], m[1][1], m[2][1]],
            [m[0][2], m[1][2], m[2][2]],
        ]
    }
}

impl Default for Mat3 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul<Vec3> for Mat3 {
    type Output = Vec3;

    #[inline]
    fn mul(self, rhs: Vec3) -> Vec3 {
        self.transform(rhs)
    }
}

impl Mul for Mat3 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self.mul_mat(&rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_identity(m: &Mat3, tol: f32) {
        for i in 0..3 {
            for j in 0..3 {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert!(
                    (m.m[i][j] - expected).abs() < tol,
                    "m[{}][{}] = {}",
                    i,
                    j,
                    m.m[i][j]
                );
            }
        }
    }

    #[test]
    fn test_mat3_determinant() {
        let m = Mat3::from_rows([[1.0, 2.0, 3.0], [0.0, 1.0, 4.0], [5.0, 6.0, 0.0]]);
        assert!((m.determinant() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_mat3_inverse() {
        let m = Mat3::from_rows([[1.0, 2.0, 3.0], [0.0, 1.0, 4.0], [5.0, 6.0, 0.0]]);
        let inv = m.inverse().unwrap();
        assert_identity(&(m * inv), 1e-5);
    }

    #[test]
    fn test_mat3_singular() {
        let m = Mat3::from_rows([[1.0, 2.0, 3.0], [2.0, 4.0, 6.0], [1.0, 1.0, 1.0]]);
        assert!(m.inverse().is_none());
    }

    #[test]
    fn test_mat3_products() {
        let m = Mat3::from_rows([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]]);
        assert_eq!(m * Vec3::new(1.0, 0.0, 1.0), Vec3::new(4.0, 10.0, 16.0));
        let d = Mat3::diagonal(2.0, 1.0, 0.0);
        assert_eq!(
            d * m,
            Mat3::from_rows([[2.0, 4.0, 6.0], [4.0, 5.0, 6.0], [0.0, 0.0, 0.0]])
        );
        assert_eq!(m * Mat3::IDENTITY, m);
    }

    #[test]
    fn test_mat3_lerp() {
        let full = Mat3::diagonal(3.0, 3.0, 3.0);
        assert_eq!(Mat3::IDENTITY.lerp(&full, 0.0), Mat3::IDENTITY);
        assert_eq!(Mat3::IDENTITY.lerp(&full, 1.0), full);
        assert_eq!(Mat3::IDENTITY.lerp(&full, 0.5), Mat3::diagonal(2.0, 2.0, 2.0));
    }

    #[test]
    fn test_glam_roundtrip() {
        let m = Mat3::from_rows([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]]);
        let g = m.to_glam();
        let v = glam::Vec3::new(1.0, 0.0, 0.0);
        // First column of the row-major matrix.
        assert_eq!(g * v, glam::Vec3::new(1.0, 4.0, 7.0));
        assert_eq!(Mat3::from_glam(g), m);
    }
}
