//! # huepick-transfer
//!
//! Transfer functions between encoded display values and linear light.
//!
//! Only sRGB is needed: screen captures are treated as sRGB-encoded, and
//! every linear-light step (XYZ, Lab, vision simulation) goes through
//! [`srgb::eotf`] and back through [`srgb::oetf`].

#![warn(missing_docs)]

pub mod srgb;
