//! # huepick-sample
//!
//! Turns screen pixels under the pointer into a picked color.
//!
//! - [`compute_sample_rect`] / [`sample`] - clipped neighborhood and its
//!   falloff-weighted average
//! - [`Falloff`] - radial kernels
//! - [`Screen`] / [`ImageScreen`] - pixel sources
//! - [`Settings`] - validated YAML settings
//! - [`Session`] - tick loop tying it all together
//!
//! # Example
//!
//! ```rust
//! use huepick_core::{PixelBuffer, Point, Rect, Rgb8};
//! use huepick_sample::{Falloff, compute_sample_rect, sample};
//!
//! let shot = PixelBuffer::filled(Rect::from_size(64, 64), Rgb8::new(10, 20, 30));
//! let region = compute_sample_rect(Point::new(63, 0), shot.rect(), 4).unwrap();
//! let color = sample(&shot, &region, Falloff::Cubic).unwrap();
//! assert_eq!(color.to_rgb8(), Rgb8::new(10, 20, 30));
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod capture;
pub mod config;
pub mod falloff;
pub mod png;
pub mod sampler;
pub mod session;
pub mod swatch;
pub mod ticker;

pub use capture::{ImageScreen, PointerState, Screen};
pub use config::{MAX_REFRESH_RATE, Settings, SettingsError, SettingsResult, ZOOM_RANGE};
pub use falloff::{EXPONENTIAL_STEEPNESS, Falloff};
pub use sampler::{MAX_OVERSAMPLE, SampleRegion, compute_sample_rect, sample};
pub use session::{GamutMasks, MASK_STEPS, Sample, Session};
pub use swatch::{SLOT_COUNT, Swatch};
pub use ticker::{TickInfo, TickScheduler};
