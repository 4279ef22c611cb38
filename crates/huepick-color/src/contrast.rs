//! Contrast heuristic between two colors.
//!
//! This is a heuristic, not a validated contrast metric (it is not WCAG
//! contrast ratio). It rewards lightness difference and adds a bonus for
//! saturated, mid-lightness colors with opposing hues. The formula is kept
//! stable so picked values compare with earlier ones.

use crate::context::LabContext;
use crate::convert::{rgb_to_hsl, rgb_to_lab};
use huepick_core::Color;
use std::f32::consts::{FRAC_PI_2, PI};

/// Weight of the complementary-hue bonus.
pub const COMPLEMENTARY_WEIGHT: f32 = 50.0;

/// Heuristic contrast between `a` and `b`.
///
/// `|L_a - L_b| + 50 * complementary`, where L is D50/2° Lab lightness and
/// `complementary` in `[0, 1]` combines the HSL hue distance with
/// lightness and saturation weights. Symmetric in its arguments.
///
/// ```rust
/// use huepick_color::heuristic_contrast;
/// use huepick_core::Color;
///
/// let bw = heuristic_contrast(Color::BLACK, Color::WHITE);
/// assert!((bw - 100.0).abs() < 0.01);
/// assert_eq!(heuristic_contrast(Color::WHITE, Color::WHITE), 0.0);
/// ```
pub fn heuristic_contrast(a: Color, b: Color) -> f32 {
    let ctx = LabContext::d50();
    let (la, lb) = (rgb_to_lab(a, &ctx).l, rgb_to_lab(b, &ctx).l);
    let (ha, hb) = (rgb_to_hsl(a), rgb_to_hsl(b));

    let complementary = (ha.h - hb.h).abs().fract()
        * (PI * ha.l).sin()
        * (PI * hb.l).sin()
        * (FRAC_PI_2 * ha.s).sin()
        * (FRAC_PI_2 * hb.s).sin();

    (la - lb).abs() + complementary * COMPLEMENTARY_WEIGHT
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_symmetric() {
        let a = Color::new(0.9, 0.2, 0.1);
        let b = Color::new(0.1, 0.6, 0.8);
        assert_abs_diff_eq!(heuristic_contrast(a, b), heuristic_contrast(b, a), epsilon = 1e-5);
    }

    #[test]
    fn test_grays_are_lightness_only() {
        let c = heuristic_contrast(Color::gray(0.2), Color::gray(0.8));
        let ctx = LabContext::d50();
        let expected = rgb_to_lab(Color::gray(0.8), &ctx).l - rgb_to_lab(Color::gray(0.2), &ctx).l;
        assert_abs_diff_eq!(c, expected, epsilon = 1e-4);
    }

    #[test]
    fn test_hue_bonus() {
        // Same lightness, different hue: only the bonus separates them.
        let red = Color::new(1.0, 0.0, 0.0);
        let cyan_ish = Color::new(0.0, 0.5, 0.5);
        let plain = heuristic_contrast(red, red);
        assert_eq!(plain, 0.0);
        assert!(heuristic_contrast(red, cyan_ish) > 10.0);
    }
}
