//! Session settings.
//!
//! Settings come from a YAML document in two stages. It is first read into
//! a loose raw struct where every key is optional. It is then validated into
//! [`Settings`], with defaults filled in. Unknown keys are ignored so newer
//! files still load.
//!
//! ```yaml
//! oversample: 3
//! falloff: quadratic
//! illuminant: D65
//! observer: 10
//! refresh_rate: 60
//! transformations:
//!   - type: vision_deficiency
//!     kind: deuteranomaly
//!     strength: 0.6
//! ```

use crate::falloff::Falloff;
use crate::sampler::MAX_OVERSAMPLE;
use huepick_color::TransformSpec;
use huepick_core::Color;
use huepick_primaries::{Illuminant, Observer};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Highest accepted refresh rate in Hz.
pub const MAX_REFRESH_RATE: f32 = 240.0;

/// Accepted magnifier zoom range.
pub const ZOOM_RANGE: (f32, f32) = (1.0, 100.0);

/// Result type for settings operations.
pub type SettingsResult<T> = std::result::Result<T, SettingsError>;

/// Errors raised while loading or validating settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// I/O error reading a settings file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error.
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Settings file not found.
    #[error("settings file not found: {path}")]
    NotFound {
        /// Path that was searched.
        path: PathBuf,
    },

    /// A key holds a value outside its domain.
    #[error("invalid value for '{key}': {reason}")]
    Invalid {
        /// Offending key
        key: &'static str,
        /// Why it was rejected
        reason: String,
    },
}

impl SettingsError {
    fn invalid(key: &'static str, reason: impl ToString) -> Self {
        Self::Invalid {
            key,
            reason: reason.to_string(),
        }
    }
}

impl From<SettingsError> for huepick_core::Error {
    fn from(e: SettingsError) -> Self {
        match e {
            SettingsError::Io(io) => huepick_core::Error::Io(io),
            other => huepick_core::Error::invalid_config(other.to_string()),
        }
    }
}

/// Validated session settings.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Neighborhood radius in pixels; 0 samples one pixel.
    pub oversample: u32,
    /// Kernel across the neighborhood.
    pub falloff: Falloff,
    /// Reference white for Lab/LCH.
    pub illuminant: Illuminant,
    /// Standard observer for the reference white.
    pub observer: Observer,
    /// Magnifier zoom factor.
    pub zoom: f32,
    /// Sampling rate in Hz.
    pub refresh_rate: f32,
    /// Compute out-of-gamut masks for the Lab/LCH sliders.
    pub out_of_gamut_mask: bool,
    /// Append the approximation marker to inexact color names.
    pub imprecision_postfix: bool,
    /// Advance the active swatch slot after storing a sample.
    pub rotate_swatch_after_sample: bool,
    /// Color the contrast heuristic compares against.
    pub contrast_reference: Color,
    /// Display transforms, in application order.
    pub transformations: Vec<TransformSpec>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            oversample: 0,
            falloff: Falloff::None,
            illuminant: Illuminant::D50,
            observer: Observer::Two,
            zoom: 20.0,
            refresh_rate: 30.0,
            out_of_gamut_mask: true,
            imprecision_postfix: false,
            rotate_swatch_after_sample: true,
            contrast_reference: Color::WHITE,
            transformations: Vec::new(),
        }
    }
}

impl Settings {
    /// Loads settings from a YAML file.
    pub fn from_file(path: impl AsRef<Path>) -> SettingsResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(SettingsError::NotFound {
                path: path.to_path_buf(),
            });
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Loads settings from a YAML string. An empty document yields defaults.
    pub fn from_yaml_str(yaml: &str) -> SettingsResult<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let raw: RawSettings = serde_yaml::from_str(yaml)?;
        Self::from_raw(raw)
    }

    fn from_raw(raw: RawSettings) -> SettingsResult<Self> {
        let d = Self::default();

        let oversample = match raw.oversample {
            None => d.oversample,
            Some(v) if v < 0 => {
                return Err(SettingsError::invalid("oversample", format!("{v} is negative")));
            }
            Some(v) => u32::try_from(v).map_err(|e| SettingsError::invalid("oversample", e))?,
        };
        let falloff = match raw.falloff {
            Some(s) => s.parse().map_err(|e| SettingsError::invalid("falloff", e))?,
            None => d.falloff,
        };
        let illuminant = match raw.illuminant {
            Some(s) => s.parse().map_err(|e| SettingsError::invalid("illuminant", e))?,
            None => d.illuminant,
        };
        let observer = match raw.observer {
            Some(v) => v
                .to_string()
                .parse()
                .map_err(|e| SettingsError::invalid("observer", e))?,
            None => d.observer,
        };
        let contrast_reference = match raw.contrast_reference {
            Some(s) => Color::from_hex(&s).map_err(|e| SettingsError::invalid("contrast_reference", e))?,
            None => d.contrast_reference,
        };

        let settings = Self {
            oversample,
            falloff,
            illuminant,
            observer,
            zoom: raw.zoom.unwrap_or(d.zoom),
            refresh_rate: raw.refresh_rate.unwrap_or(d.refresh_rate),
            out_of_gamut_mask: raw.out_of_gamut_mask.unwrap_or(d.out_of_gamut_mask),
            imprecision_postfix: raw.imprecision_postfix.unwrap_or(d.imprecision_postfix),
            rotate_swatch_after_sample: raw
                .rotate_swatch_after_sample
                .unwrap_or(d.rotate_swatch_after_sample),
            contrast_reference,
            transformations: raw.transformations.unwrap_or_default(),
        };
        settings.validate()?;
        Ok(settings)
    }

    /// Checks the numeric ranges of settings built in code.
    pub fn validate(&self) -> SettingsResult<()> {
        if self.oversample > MAX_OVERSAMPLE {
            return Err(SettingsError::invalid(
                "oversample",
                format!("{} exceeds the maximum of {MAX_OVERSAMPLE}", self.oversample),
            ));
        }
        if !(self.refresh_rate > 0.0 && self.refresh_rate <= MAX_REFRESH_RATE) {
            return Err(SettingsError::invalid(
                "refresh_rate",
                format!("{} Hz is outside (0, {MAX_REFRESH_RATE}]", self.refresh_rate),
            ));
        }
        let (lo, hi) = ZOOM_RANGE;
        if !(lo..=hi).contains(&self.zoom) {
            return Err(SettingsError::invalid(
                "zoom",
                format!("{} is outside [{lo}, {hi}]", self.zoom),
            ));
        }
        for spec in &self.transformations {
            match *spec {
                TransformSpec::VisionDeficiency { strength, .. } if !(0.0..=1.0).contains(&strength) => {
                    return Err(SettingsError::invalid(
                        "transformations",
                        format!("strength {strength} is outside [0, 1]"),
                    ));
                }
                TransformSpec::Gamma { value } if !(value.is_finite() && value > 0.0) => {
                    return Err(SettingsError::invalid(
                        "transformations",
                        format!("gamma {value} must be positive"),
                    ));
                }
                _ => {}
            }
        }
        Ok(())
    }
}

// ============================================================================
// Raw YAML structures for serde
// ============================================================================

#[derive(Debug, Deserialize)]
struct RawSettings {
    oversample: Option<i64>,
    falloff: Option<String>,
    illuminant: Option<String>,
    observer: Option<RawScalar>,
    zoom: Option<f32>,
    refresh_rate: Option<f32>,
    out_of_gamut_mask: Option<bool>,
    imprecision_postfix: Option<bool>,
    rotate_swatch_after_sample: Option<bool>,
    contrast_reference: Option<String>,
    transformations: Option<Vec<TransformSpec>>,
}

/// Accepts `observer: 2` as well as `observer: "10°"`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawScalar {
    Int(i64),
    Text(String),
}

impl std::fmt::Display for RawScalar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RawScalar::Int(v) => write!(f, "{v}"),
            RawScalar::Text(s) => f.write_str(s),
        }
    }
}
