//! Out-of-gamut detection.
//!
//! A color edited in Lab or LCH can describe something the screen cannot
//! show. The analyzer converts to RGB *without* the final clamp and reports
//! which channels left `[0, 1]`. It never changes the value it inspects;
//! clamping for display is the consumer's job.

use crate::context::LabContext;
use crate::convert::model_to_rgb_unclamped;
use crate::model::ModelColor;
use huepick_core::Color;

/// Slack absorbed before a channel counts as out of gamut.
///
/// Round trips through XYZ land a few 1e-6 outside `[0, 1]` for colors on
/// the gamut boundary.
pub const GAMUT_EPSILON: f32 = 1e-4;

/// Per-channel out-of-gamut flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GamutReport {
    /// Red left `[0, 1]`
    pub red: bool,
    /// Green left `[0, 1]`
    pub green: bool,
    /// Blue left `[0, 1]`
    pub blue: bool,
}

impl GamutReport {
    /// Flags channels of an unclamped RGB value.
    pub fn from_unclamped(rgb: Color, epsilon: f32) -> Self {
        let out = |v: f32| !(-epsilon..=1.0 + epsilon).contains(&v);
        Self {
            red: out(rgb.r),
            green: out(rgb.g),
            blue: out(rgb.b),
        }
    }

    /// Returns `true` if any channel is out of gamut.
    pub fn any(&self) -> bool {
        self.red || self.green || self.blue
    }
}

/// Answers "can this color be displayed?" for any model.
///
/// ```rust
/// use huepick_color::{GamutAnalyzer, LabContext, Lab, ModelColor};
///
/// let gamut = GamutAnalyzer::new(LabContext::d50());
/// assert!(!gamut.is_out_of_gamut(ModelColor::Lab(Lab::new(50.0, 0.0, 0.0))));
/// assert!(gamut.is_out_of_gamut(ModelColor::Lab(Lab::new(60.0, -150.0, 90.0))));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GamutAnalyzer {
    ctx: LabContext,
    epsilon: f32,
}

impl GamutAnalyzer {
    /// Analyzer using [`GAMUT_EPSILON`].
    pub fn new(ctx: LabContext) -> Self {
        Self {
            ctx,
            epsilon: GAMUT_EPSILON,
        }
    }

    /// Overrides the tolerance.
    pub fn with_epsilon(mut self, epsilon: f32) -> Self {
        self.epsilon = epsilon.max(0.0);
        self
    }

    /// Per-channel report.
    pub fn analyze(&self, value: ModelColor) -> GamutReport {
        GamutReport::from_unclamped(model_to_rgb_unclamped(value, &self.ctx), self.epsilon)
    }

    /// Aggregate predicate.
    pub fn is_out_of_gamut(&self, value: ModelColor) -> bool {
        self.analyze(value).any()
    }

    /// Sweeps one channel of `base` across its legal range.
    ///
    /// Returns one flag per step (`true` = out of gamut), which is what a
    /// component slider paints as its mask. Returns an empty vector for a
    /// channel the model does not have or when `steps < 2`.
    pub fn mask(&self, base: ModelColor, channel: usize, steps: usize) -> Vec<bool> {
        let model = base.model();
        if channel >= model.channel_count() || steps < 2 {
            return Vec::new();
        }
        let (lo, hi) = model.channel_ranges()[channel];
        (0..steps)
            .map(|i| {
                let t = i as f32 / (steps - 1) as f32;
                self.is_out_of_gamut(base.with_channel(channel, lo + (hi - lo) * t))
            })
            .collect()
    }
}

impl Default for GamutAnalyzer {
    fn default() -> Self {
        Self::new(LabContext::default())
    }
}
