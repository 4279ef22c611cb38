//! Error types shared by every huepick crate.
//!
//! The taxonomy is deliberately small:
//!
//! - [`Error::CaptureUnavailable`] - the pixel source could not deliver the
//!   requested region (provider failure, or a buffer that does not cover it)
//! - [`Error::InvalidConfiguration`] - an unknown illuminant/observer name,
//!   a negative oversample, or any other rejected setting
//! - [`Error::ConversionDomain`] - reserved for non-finite inputs; color
//!   conversions are total and never return it in normal operation
//!
//! # Usage
//!
//! ```rust
//! use huepick_core::{Error, Rect, Result};
//!
//! fn require_cover(have: Rect, want: Rect) -> Result<()> {
//!     if !have.contains_rect(&want) {
//!         return Err(Error::uncovered(want, have));
//!     }
//!     Ok(())
//! }
//!
//! assert!(require_cover(Rect::new(0, 0, 4, 4), Rect::new(2, 2, 4, 4)).is_err());
//! ```

use crate::rect::Rect;
use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while sampling, configuring or converting colors.
#[derive(Debug, Error)]
pub enum Error {
    /// The pixel source is unreachable or did not cover the requested rect.
    ///
    /// Never fatal to a session: the caller retries on the next tick.
    #[error("capture unavailable: {reason}")]
    CaptureUnavailable {
        /// What went wrong
        reason: String,
    },

    /// A configuration value was rejected.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A conversion received input outside its domain.
    #[error("conversion domain error: {0}")]
    ConversionDomain(String),

    /// A textual color could not be parsed.
    #[error("invalid color '{input}': {reason}")]
    InvalidColor {
        /// Text that failed to parse
        input: String,
        /// Why it failed
        reason: String,
    },

    /// Buffer dimensions do not match the supplied data.
    #[error("invalid dimensions: {width}x{height} ({reason})")]
    InvalidDimensions {
        /// Requested width
        width: u32,
        /// Requested height
        height: u32,
        /// Reason why dimensions are invalid
        reason: String,
    },

    /// I/O error while reading a capture source or settings file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error with custom message.
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Creates an [`Error::CaptureUnavailable`] error.
    #[inline]
    pub fn capture_unavailable(reason: impl Into<String>) -> Self {
        Self::CaptureUnavailable {
            reason: reason.into(),
        }
    }

    /// Capture failure for a buffer that does not cover the requested rect.
    #[inline]
    pub fn uncovered(requested: Rect, available: Rect) -> Self {
        Self::capture_unavailable(format!(
            "buffer {available} does not cover requested {requested}"
        ))
    }

    /// Creates an [`Error::InvalidConfiguration`] error.
    #[inline]
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfiguration(msg.into())
    }

    /// Creates an [`Error::InvalidColor`] error.
    #[inline]
    pub fn invalid_color(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidColor {
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// Creates an [`Error::InvalidDimensions`] error.
    #[inline]
    pub fn invalid_dimensions(width: u32, height: u32, reason: impl Into<String>) -> Self {
        Self::InvalidDimensions {
            width,
            height,
            reason: reason.into(),
        }
    }

    /// Creates an [`Error::Other`] error.
    #[inline]
    pub fn other(msg: impl Into<String>) -> Self {
        Self::Other(msg.into())
    }

    /// Returns `true` if this error should be retried on the next tick.
    #[inline]
    pub fn is_capture_error(&self) -> bool {
        matches!(self, Self::CaptureUnavailable { .. })
    }

    /// Returns `true` if a setting was rejected.
    #[inline]
    pub fn is_config_error(&self) -> bool {
        matches!(self, Self::InvalidConfiguration(_))
    }

    /// Returns `true` if this is an I/O error.
    #[inline]
    pub fn is_io_error(&self) -> bool {
        matches!(self, Self::Io(_))
    }
}
