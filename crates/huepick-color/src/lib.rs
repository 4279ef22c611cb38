//! # huepick-color
//!
//! Color models and everything computed from a picked color.
//!
//! - **Models** - RGB, HSL, HSV, CMYK, Lab, LCH with total, clamping
//!   conversions through the RGB pivot
//! - **Gamut** - out-of-gamut detection for values edited outside RGB
//! - **Transformation chain** - display-only transforms such as
//!   color-vision deficiency simulation
//! - **Naming** - nearest CSS color name
//! - **Contrast** and **formatting** helpers
//!
//! # Architecture
//!
//! ```text
//!                 huepick-color
//!                       |
//!       +---------------+---------------+
//!       |               |               |
//! huepick-transfer huepick-primaries    |
//!       |               |               |
//!       +-------+-------+               |
//!               |                       |
//!          huepick-math                 |
//!               |                       |
//!               +-----------------------+
//!                           |
//!                      huepick-core
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use huepick_color::{GamutAnalyzer, LabContext, ModelColor, NamingService, rgb_to_lch};
//! use huepick_core::Color;
//!
//! let ctx = LabContext::d50();
//! let picked = Color::from_hex("#4682b4").unwrap();
//!
//! let lch = rgb_to_lch(picked, &ctx);
//! let pushed = ModelColor::Lch(huepick_color::Lch { c: 140.0, ..lch });
//! assert!(GamutAnalyzer::new(ctx).is_out_of_gamut(pushed));
//!
//! assert_eq!(NamingService::css().name(picked, true), "steelblue");
//! ```
//!
//! # Color Models
//!
//! | Model | Channels | Ranges |
//! |-------|----------|--------|
//! | RGB | r, g, b | `[0, 1]` |
//! | HSL | h, s, l | hue in turns, `[0, 1]` |
//! | HSV | h, s, v | hue in turns, `[0, 1]` |
//! | CMYK | c, m, y, k | `[0, 1]` |
//! | Lab | L, a, b | L `[0, 100]`, a/b about `±128` |
//! | LCH | L, C, h | hue in turns |

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod context;
mod contrast;
mod convert;
mod format;
mod gamut;
mod model;
mod naming;
mod pipeline;

pub use context::LabContext;
pub use contrast::{COMPLEMENTARY_WEIGHT, heuristic_contrast};
pub use convert::*;
pub use format::{
    ModelText, format_cmyk, format_hsl, format_hsv, format_lab, format_lch, format_rgb,
    model_text,
};
pub use gamut::{GAMUT_EPSILON, GamutAnalyzer, GamutReport};
pub use model::{AB_LIMIT, Cmyk, ColorModel, Hsl, Hsv, Lab, Lch, ModelColor, Xyz, wrap_hue};
pub use naming::{APPROXIMATION_MARKER, ColorMatch, NamedColor, NamingService};
pub use pipeline::{ColorFn, Deficiency, MIN_GAMMA, Transform, TransformSpec, TransformationChain};

/// Re-export of the illuminant and observer types used by [`LabContext`].
pub use huepick_primaries::{Illuminant, Observer};
