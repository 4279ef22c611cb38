//! # huepick-core
//!
//! Core types for the huepick color sampling engine.
//!
//! - [`Color`] - canonical gamma-encoded sRGB value, the pivot every other
//!   color model is computed from
//! - [`Point`], [`Rect`] - signed screen geometry
//! - [`PixelBuffer`], [`Rgb8`] - immutable capture snapshots
//! - [`Error`], [`Result`] - the shared error taxonomy
//!
//! ## Crate Structure
//!
//! ```text
//! huepick-core (this crate)
//!    ^
//!    +-- huepick-math (matrices, chromatic adaptation)
//!    +-- huepick-primaries (illuminants, RGB/XYZ matrices)
//!    +-- huepick-color (models, gamut, chain, naming)
//!    +-- huepick-sample (falloff, sampler, session)
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod color;
pub mod error;
pub mod pixel;
pub mod rect;

pub use color::{Color, clamp_unit};
pub use error::{Error, Result};
pub use pixel::{PixelBuffer, Rgb8};
pub use rect::{Point, Rect};

/// Prelude module for convenient imports.
///
/// ```
/// use huepick_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::color::Color;
    pub use crate::error::{Error, Result};
    pub use crate::pixel::{PixelBuffer, Rgb8};
    pub use crate::rect::{Point, Rect};
}
