//! # huepick-math
//!
//! Small linear-algebra layer under the color conversions.
//!
//! - [`Mat3`] - row-major 3x3 matrix, column vectors (`m * v`)
//! - [`Vec3`] - RGB/XYZ/Lab triplet
//! - [`adapt_matrix`] - Bradford chromatic adaptation between white points
//!
//! ```rust
//! use huepick_math::{Mat3, Vec3};
//!
//! let m = Mat3::diagonal(2.0, 1.0, 0.5);
//! assert_eq!(m * Vec3::ONE, Vec3::new(2.0, 1.0, 0.5));
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod adapt;
mod mat3;
mod vec3;

pub use adapt::*;
pub use mat3::*;
pub use vec3::*;
