//! Display transformation chain.
//!
//! A chain is an ordered list of color-to-color transforms applied right
//! before a color is shown: the swatch, the color code, the contrast
//! preview. It never touches the stored or sampled color.
//!
//! Chains are built once with a consuming builder and then shared
//! read-only (typically as `Arc<TransformationChain>`). Changing the active
//! transforms means building a new chain and swapping the reference.
//!
//! ```rust
//! use huepick_color::{Deficiency, TransformationChain};
//! use huepick_core::Color;
//!
//! let chain = TransformationChain::new()
//!     .vision_deficiency(Deficiency::Deuteranomaly, 1.0)
//!     .quantize(16);
//!
//! let shown = chain.apply(Color::new(1.0, 0.0, 0.0));
//! assert!(shown.g > 0.3); // red reads as olive to a deuteranope
//! ```

use huepick_core::Color;
use huepick_math::{Mat3, Vec3};
use huepick_transfer::srgb;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Plain color function usable as a transform.
pub type ColorFn = fn(Color) -> Color;

/// Kind of color-vision deficiency to simulate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Deficiency {
    /// Reduced L-cone sensitivity (red-weak)
    #[serde(alias = "protanopia")]
    Protanomaly,
    /// Reduced M-cone sensitivity (green-weak)
    #[serde(alias = "deuteranopia")]
    Deuteranomaly,
    /// Reduced S-cone sensitivity (blue-weak)
    #[serde(alias = "tritanopia")]
    Tritanomaly,
}

impl Deficiency {
    /// Full-severity simulation matrix in linear RGB (Machado et al. 2009).
    pub const fn matrix(self) -> Mat3 {
        match self {
            Deficiency::Protanomaly => Mat3::from_rows([
                [0.152286, 1.052583, -0.204868],
                [0.114503, 0.786281, 0.099216],
                [-0.003882, -0.048116, 1.051998],
            ]),
            Deficiency::Deuteranomaly => Mat3::from_rows([
                [0.367322, 0.860646, -0.227968],
                [0.280085, 0.672501, 0.047413],
                [-0.011820, 0.042940, 0.968881],
            ]),
            Deficiency::Tritanomaly => Mat3::from_rows([
                [1.255528, -0.076749, -0.178779],
                [-0.078411, 0.930809, 0.147602],
                [0.004733, 0.691367, 0.303900],
            ]),
        }
    }

    /// Lowercase name.
    pub const fn name(self) -> &'static str {
        match self {
            Deficiency::Protanomaly => "protanomaly",
            Deficiency::Deuteranomaly => "deuteranomaly",
            Deficiency::Tritanomaly => "tritanomaly",
        }
    }
}

impl fmt::Display for Deficiency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single display transform.
#[derive(Clone)]
pub enum Transform {
    /// Color-vision deficiency simulation.
    ///
    /// Interpolates between identity (`strength = 0`) and the full-severity
    /// matrix (`strength = 1`) in linear light.
    VisionDeficiency {
        /// Which cone type is affected.
        kind: Deficiency,
        /// Severity in `[0, 1]`.
        strength: f32,
    },

    /// Per-channel power curve, `v' = v^(1/gamma)`.
    Gamma(f32),

    /// Rounds each channel to `levels` evenly spaced values.
    Quantize(u32),

    /// Caller-supplied pure function.
    Function(ColorFn),
}

impl Transform {
    fn apply(&self, c: Color) -> Color {
        match *self {
            Transform::VisionDeficiency { kind, strength } => {
                let m = Mat3::IDENTITY.lerp(&kind.matrix(), strength.clamp(0.0, 1.0));
                let linear = srgb::decode(Vec3::from_array(c.to_array()));
                Color::from_array(srgb::encode(m * linear).to_array())
            }
            Transform::Gamma(gamma) => {
                let exp = 1.0 / gamma.max(MIN_GAMMA);
                c.map(|v| v.max(0.0).powf(exp))
            }
            Transform::Quantize(levels) => {
                if levels < 2 {
                    return c;
                }
                let steps = (levels - 1) as f32;
                c.map(|v| (v * steps).round() / steps)
            }
            Transform::Function(f) => f(c),
        }
    }
}

/// Smallest accepted gamma; keeps the exponent finite.
pub const MIN_GAMMA: f32 = 0.01;

impl fmt::Debug for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::VisionDeficiency { kind, strength } => f
                .debug_struct("VisionDeficiency")
                .field("kind", kind)
                .field("strength", strength)
                .finish(),
            Self::Gamma(g) => f.debug_tuple("Gamma").field(g).finish(),
            Self::Quantize(n) => f.debug_tuple("Quantize").field(n).finish(),
            Self::Function(_) => f.write_str("Function(fn)"),
        }
    }
}

/// Serializable description of a transform, as kept in settings.
///
/// ```rust
/// use huepick_color::TransformSpec;
///
/// let yaml = "- type: vision_deficiency\n  kind: protanopia\n- type: gamma\n  value: 2.2\n";
/// let specs: Vec<TransformSpec> = serde_yaml::from_str(yaml).unwrap();
/// assert_eq!(specs.len(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TransformSpec {
    /// See [`Transform::VisionDeficiency`].
    VisionDeficiency {
        /// Which cone type is affected.
        kind: Deficiency,
        /// Severity in `[0, 1]`, default 1.
        #[serde(default = "full_strength")]
        strength: f32,
    },
    /// See [`Transform::Gamma`].
    Gamma {
        /// Gamma value.
        value: f32,
    },
    /// See [`Transform::Quantize`].
    Quantize {
        /// Number of levels per channel.
        levels: u32,
    },
}

fn full_strength() -> f32 {
    1.0
}

impl From<TransformSpec> for Transform {
    fn from(spec: TransformSpec) -> Self {
        match spec {
            TransformSpec::VisionDeficiency { kind, strength } => {
                Transform::VisionDeficiency { kind, strength }
            }
            TransformSpec::Gamma { value } => Transform::Gamma(value),
            TransformSpec::Quantize { levels } => Transform::Quantize(levels),
        }
    }
}

/// Ordered, immutable list of display transforms.
///
/// An empty chain is the identity. Order is kept exactly as pushed; nothing
/// is reordered or merged.
#[derive(Debug, Clone, Default)]
pub struct TransformationChain {
    ops: Vec<Transform>,
}

impl TransformationChain {
    /// Creates an empty chain.
    pub fn new() -> Self {
        Self { ops: Vec::new() }
    }

    /// Builds a chain from settings entries, preserving their order.
    pub fn from_specs<'a>(specs: impl IntoIterator<Item = &'a TransformSpec>) -> Self {
        specs
            .into_iter()
            .fold(Self::new(), |chain, spec| chain.push((*spec).into()))
    }

    /// Appends a transform.
    pub fn push(mut self, op: Transform) -> Self {
        self.ops.push(op);
        self
    }

    /// Appends a vision-deficiency simulation.
    pub fn vision_deficiency(self, kind: Deficiency, strength: f32) -> Self {
        self.push(Transform::VisionDeficiency { kind, strength })
    }

    /// Appends a gamma modification.
    pub fn gamma(self, gamma: f32) -> Self {
        self.push(Transform::Gamma(gamma))
    }

    /// Appends a quantization.
    pub fn quantize(self, levels: u32) -> Self {
        self.push(Transform::Quantize(levels))
    }

    /// Appends a plain function.
    pub fn function(self, f: ColorFn) -> Self {
        self.push(Transform::Function(f))
    }

    /// Number of transforms.
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    /// Returns true if the chain is the identity.
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Transforms in application order.
    pub fn ops(&self) -> &[Transform] {
        &self.ops
    }

    /// Applies every transform in order and clamps the result for display.
    pub fn apply(&self, color: Color) -> Color {
        if self.ops.is_empty() {
            return color;
        }
        self.ops
            .iter()
            .fold(color.sanitized(), |c, op| op.apply(c).sanitized())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn invert(c: Color) -> Color {
        c.map(|v| 1.0 - v)
    }

    #[test]
    fn test_empty_chain_is_identity() {
        let chain = TransformationChain::new();
        let c = Color::new(0.5, 0.3, 0.2);
        assert_eq!(chain.apply(c), c);
        assert!(chain.is_empty());
    }

    #[test]
    fn test_order_preserved() {
        let c = Color::gray(0.3);
        let gamma_first = TransformationChain::new().gamma(2.0).quantize(2);
        let quantize_first = TransformationChain::new().quantize(2).gamma(2.0);
        // 0.3^(1/2) = 0.548 rounds up; 0.3 rounds down to 0.
        assert_eq!(gamma_first.apply(c), Color::WHITE);
        assert_eq!(quantize_first.apply(c), Color::BLACK);
    }

    #[test]
    fn test_function_op() {
        let chain = TransformationChain::new().function(invert).function(invert);
        let c = Color::new(0.25, 0.5, 0.75);
        let out = chain.apply(c);
        assert_abs_diff_eq!(out.r, c.r, epsilon = 1e-6);
        assert_eq!(chain.len(), 2);
    }

    #[test]
    fn test_zero_strength_is_identity() {
        let c = Color::new(0.8, 0.1, 0.4);
        let out = TransformationChain::new()
            .vision_deficiency(Deficiency::Protanomaly, 0.0)
            .apply(c);
        assert_abs_diff_eq!(out.r, c.r, epsilon = 1e-5);
        assert_abs_diff_eq!(out.g, c.g, epsilon = 1e-5);
        assert_abs_diff_eq!(out.b, c.b, epsilon = 1e-5);
    }

    #[test]
    fn test_deficiency_keeps_grays() {
        for kind in [Deficiency::Protanomaly, Deficiency::Deuteranomaly, Deficiency::Tritanomaly] {
            let out = TransformationChain::new()
                .vision_deficiency(kind, 1.0)
                .apply(Color::gray(0.5));
            assert_abs_diff_eq!(out.r, 0.5, epsilon = 1e-3);
            assert_abs_diff_eq!(out.g, 0.5, epsilon = 1e-3);
            assert_abs_diff_eq!(out.b, 0.5, epsilon = 1e-3);
        }
    }

    #[test]
    fn test_protanomaly_merges_red_green() {
        let chain = TransformationChain::new().vision_deficiency(Deficiency::Protanomaly, 1.0);
        let red = chain.apply(Color::new(1.0, 0.0, 0.0));
        let green = chain.apply(Color::new(0.0, 1.0, 0.0));
        // Both collapse onto the yellow-blue axis: red and green channels track.
        assert!((red.r - red.g).abs() < 0.35);
        assert!((green.r - green.g).abs() < 0.2);
        assert!(red.is_in_unit_range());
    }

    #[test]
    fn test_quantize_levels() {
        let out = TransformationChain::new().quantize(5).apply(Color::new(0.1, 0.3, 0.9));
        assert_eq!(out, Color::new(0.0, 0.25, 1.0));
        // Degenerate level counts pass through.
        let c = Color::gray(0.33);
        assert_eq!(TransformationChain::new().quantize(1).apply(c), c);
    }

    #[test]
    fn test_from_specs() {
        let specs = [
            TransformSpec::Gamma { value: 2.0 },
            TransformSpec::VisionDeficiency {
                kind: Deficiency::Tritanomaly,
                strength: 0.5,
            },
        ];
        let chain = TransformationChain::from_specs(&specs);
        assert_eq!(chain.len(), 2);
        assert!(matches!(chain.ops()[0], Transform::Gamma(g) if g == 2.0));
        assert!(format!("{:?}", chain.ops()[1]).contains("Tritanomaly"));
    }
}
