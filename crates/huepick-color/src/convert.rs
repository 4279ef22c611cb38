//! Conversions between the RGB pivot and every other model.
//!
//! All functions are pure and total: out-of-domain input (NaN, channels
//! far outside their range) is clamped to the nearest valid value first,
//! so no conversion ever fails or produces NaN.
//!
//! # Routing
//!
//! ```text
//!            ┌── HSL
//!            ├── HSV
//!  RGB ──────┼── CMYK
//!   │        └── XYZ ── Lab ── LCH
//! ```
//!
//! Non-RGB pairs go through RGB, except Lab <-> LCH which is a direct polar
//! transform and never touches RGB (so it cannot clip).
//!
//! ```rust
//! use huepick_color::{convert, ColorModel, LabContext, ModelColor};
//! use huepick_core::Color;
//!
//! let ctx = LabContext::d50();
//! let lab = convert(ModelColor::Rgb(Color::new(1.0, 0.0, 0.0)), ColorModel::Lab, &ctx);
//! let ModelColor::Lab(lab) = lab else { unreachable!() };
//! assert!((lab.l - 54.29).abs() < 0.01);
//! ```

use crate::context::LabContext;
use crate::model::{Cmyk, ColorModel, Hsl, Hsv, Lab, Lch, ModelColor, Xyz, wrap_hue};
use huepick_core::Color;
use huepick_math::Vec3;
use huepick_transfer::srgb;
use std::f32::consts::TAU;

/// Chroma at or below which a color is treated as achromatic.
pub const ACHROMATIC_EPSILON: f32 = 1e-6;

/// LCH chroma at or below which hue is pinned to 0.
///
/// Gray RGB lands slightly off the Lab neutral axis in single precision;
/// this keeps its hue from becoming noise.
pub const LCH_ACHROMATIC_CHROMA: f32 = 1e-3;

// CIE constants: ε = (6/29)^3, κ = (29/3)^3.
const LAB_EPSILON: f32 = 216.0 / 24389.0;
const LAB_KAPPA: f32 = 24389.0 / 27.0;
const LAB_DELTA: f32 = 6.0 / 29.0;

/// Max, min and hue shared by the HSL and HSV forward paths.
fn hue_and_extrema(c: Color) -> (f32, f32, f32) {
    let max = c.r.max(c.g).max(c.b);
    let min = c.r.min(c.g).min(c.b);
    let d = max - min;
    if d <= ACHROMATIC_EPSILON {
        return (0.0, max, min);
    }
    let sector = if max == c.r {
        (c.g - c.b) / d
    } else if max == c.g {
        (c.b - c.r) / d + 2.0
    } else {
        (c.r - c.g) / d + 4.0
    };
    (wrap_hue(sector / 6.0), max, min)
}

/// RGB for a hue at full chroma `chroma` with offset `m`.
fn from_hue(h: f32, chroma: f32, m: f32) -> Color {
    let h6 = wrap_hue(h) * 6.0;
    let x = chroma * (1.0 - ((h6 % 2.0) - 1.0).abs());
    let (r, g, b) = match h6 as u32 {
        0 => (chroma, x, 0.0),
        1 => (x, chroma, 0.0),
        2 => (0.0, chroma, x),
        3 => (0.0, x, chroma),
        4 => (x, 0.0, chroma),
        _ => (chroma, 0.0, x),
    };
    Color::new(r + m, g + m, b + m).sanitized()
}

/// RGB -> HSL.
///
/// ```rust
/// use huepick_color::rgb_to_hsl;
/// use huepick_core::Color;
///
/// let hsl = rgb_to_hsl(Color::gray(0.5));
/// assert_eq!((hsl.h, hsl.s), (0.0, 0.0));
/// ```
pub fn rgb_to_hsl(c: Color) -> Hsl {
    let c = c.sanitized();
    let (h, max, min) = hue_and_extrema(c);
    let d = max - min;
    let l = (max + min) / 2.0;
    let denom = 1.0 - (2.0 * l - 1.0).abs();
    let s = if d <= ACHROMATIC_EPSILON || denom <= 0.0 {
        0.0
    } else {
        (d / denom).min(1.0)
    };
    Hsl::new(h, s, l)
}

/// HSL -> RGB.
pub fn hsl_to_rgb(hsl: Hsl) -> Color {
    let hsl = hsl.sanitized();
    let chroma = (1.0 - (2.0 * hsl.l - 1.0).abs()) * hsl.s;
    from_hue(hsl.h, chroma, hsl.l - chroma / 2.0)
}

/// RGB -> HSV.
pub fn rgb_to_hsv(c: Color) -> Hsv {
    let c = c.sanitized();
    let (h, max, min) = hue_and_extrema(c);
    let d = max - min;
    let s = if d <= ACHROMATIC_EPSILON || max <= 0.0 {
        0.0
    } else {
        d / max
    };
    Hsv::new(h, s, max)
}

/// HSV -> RGB.
pub fn hsv_to_rgb(hsv: Hsv) -> Color {
    let hsv = hsv.sanitized();
    let chroma = hsv.v * hsv.s;
    from_hue(hsv.h, chroma, hsv.v - chroma)
}

/// RGB -> CMYK. Pure black is `(0, 0, 0, 1)`.
pub fn rgb_to_cmyk(c: Color) -> Cmyk {
    let c = c.sanitized();
    let k = 1.0 - c.r.max(c.g).max(c.b);
    let ink = 1.0 - k;
    if ink <= 0.0 {
        return Cmyk::new(0.0, 0.0, 0.0, 1.0);
    }
    Cmyk::new(
        (ink - c.r) / ink,
        (ink - c.g) / ink,
        (ink - c.b) / ink,
        k,
    )
    .sanitized()
}

/// CMYK -> RGB.
pub fn cmyk_to_rgb(cmyk: Cmyk) -> Color {
    let cmyk = cmyk.sanitized();
    let ink = 1.0 - cmyk.k;
    Color::new(
        (1.0 - cmyk.c) * ink,
        (1.0 - cmyk.m) * ink,
        (1.0 - cmyk.y) * ink,
    )
}

/// RGB -> XYZ relative to the context white.
pub fn rgb_to_xyz(c: Color, ctx: &LabContext) -> Xyz {
    let linear = srgb::decode(Vec3::from_array(c.sanitized().to_array()));
    let v = *ctx.rgb_to_xyz_matrix() * linear;
    Xyz::new(v.x, v.y, v.z)
}

/// XYZ -> RGB without clamping; channels may leave `[0, 1]`.
pub fn xyz_to_rgb_unclamped(xyz: Xyz, ctx: &LabContext) -> Color {
    let linear = *ctx.xyz_to_rgb_matrix() * Vec3::new(xyz.x, xyz.y, xyz.z);
    Color::from_array(srgb::encode(linear).to_array())
}

/// XYZ -> RGB, clamped to the displayable range.
pub fn xyz_to_rgb(xyz: Xyz, ctx: &LabContext) -> Color {
    xyz_to_rgb_unclamped(xyz, ctx).sanitized()
}

#[inline]
fn lab_f(t: f32) -> f32 {
    if t > LAB_EPSILON {
        t.cbrt()
    } else {
        (LAB_KAPPA * t + 16.0) / 116.0
    }
}

#[inline]
fn lab_f_inv(f: f32) -> f32 {
    if f > LAB_DELTA {
        f * f * f
    } else {
        (116.0 * f - 16.0) / LAB_KAPPA
    }
}

/// XYZ -> Lab.
pub fn xyz_to_lab(xyz: Xyz, ctx: &LabContext) -> Lab {
    let w = ctx.white();
    let fx = lab_f(xyz.x / w.x);
    let fy = lab_f(xyz.y / w.y);
    let fz = lab_f(xyz.z / w.z);
    Lab::new(116.0 * fy - 16.0, 500.0 * (fx - fy), 200.0 * (fy - fz))
}

/// Lab -> XYZ.
pub fn lab_to_xyz(lab: Lab, ctx: &LabContext) -> Xyz {
    let lab = lab.sanitized();
    let w = ctx.white();
    let fy = (lab.l + 16.0) / 116.0;
    let fx = fy + lab.a / 500.0;
    let fz = fy - lab.b / 200.0;
    Xyz::new(lab_f_inv(fx) * w.x, lab_f_inv(fy) * w.y, lab_f_inv(fz) * w.z)
}

/// RGB -> Lab.
pub fn rgb_to_lab(c: Color, ctx: &LabContext) -> Lab {
    xyz_to_lab(rgb_to_xyz(c, ctx), ctx)
}

/// Lab -> RGB, clamped to the displayable range.
pub fn lab_to_rgb(lab: Lab, ctx: &LabContext) -> Color {
    xyz_to_rgb(lab_to_xyz(lab, ctx), ctx)
}

/// Lab -> RGB before the final clamp; used for gamut analysis.
pub fn lab_to_rgb_unclamped(lab: Lab, ctx: &LabContext) -> Color {
    xyz_to_rgb_unclamped(lab_to_xyz(lab, ctx), ctx)
}

/// Lab -> LCH. Hue is in turns.
pub fn lab_to_lch(lab: Lab) -> Lch {
    let lab = lab.sanitized();
    let c = lab.a.hypot(lab.b);
    let h = if c <= LCH_ACHROMATIC_CHROMA {
        0.0
    } else {
        wrap_hue(lab.b.atan2(lab.a) / TAU)
    };
    Lch::new(lab.l, c, h)
}

/// LCH -> Lab.
pub fn lch_to_lab(lch: Lch) -> Lab {
    let lch = lch.sanitized();
    let angle = lch.h * TAU;
    Lab::new(lch.l, lch.c * angle.cos(), lch.c * angle.sin())
}

/// RGB -> LCH (via Lab).
pub fn rgb_to_lch(c: Color, ctx: &LabContext) -> Lch {
    lab_to_lch(rgb_to_lab(c, ctx))
}

/// LCH -> RGB (via Lab), clamped.
pub fn lch_to_rgb(lch: Lch, ctx: &LabContext) -> Color {
    lab_to_rgb(lch_to_lab(lch), ctx)
}

/// View of an RGB color in `model`.
pub fn rgb_to_model(c: Color, model: ColorModel, ctx: &LabContext) -> ModelColor {
    match model {
        ColorModel::Rgb => ModelColor::Rgb(c.sanitized()),
        ColorModel::Hsl => ModelColor::Hsl(rgb_to_hsl(c)),
        ColorModel::Hsv => ModelColor::Hsv(rgb_to_hsv(c)),
        ColorModel::Cmyk => ModelColor::Cmyk(rgb_to_cmyk(c)),
        ColorModel::Lab => ModelColor::Lab(rgb_to_lab(c, ctx)),
        ColorModel::Lch => ModelColor::Lch(rgb_to_lch(c, ctx)),
    }
}

/// Back to the RGB pivot, clamped.
pub fn model_to_rgb(value: ModelColor, ctx: &LabContext) -> Color {
    match value {
        ModelColor::Rgb(c) => c.sanitized(),
        ModelColor::Hsl(v) => hsl_to_rgb(v),
        ModelColor::Hsv(v) => hsv_to_rgb(v),
        ModelColor::Cmyk(v) => cmyk_to_rgb(v),
        ModelColor::Lab(v) => lab_to_rgb(v, ctx),
        ModelColor::Lch(v) => lch_to_rgb(v, ctx),
    }
}

/// Back to RGB without the final clamp.
///
/// RGB input is returned untouched and Lab/LCH skip the final clamp. The
/// cylindrical models and CMYK cannot leave the gamut, so they are returned
/// exactly as [`model_to_rgb`] would.
pub fn model_to_rgb_unclamped(value: ModelColor, ctx: &LabContext) -> Color {
    match value {
        ModelColor::Rgb(c) => c,
        ModelColor::Lab(v) => lab_to_rgb_unclamped(v, ctx),
        ModelColor::Lch(v) => lab_to_rgb_unclamped(lch_to_lab(v), ctx),
        other => model_to_rgb(other, ctx),
    }
}

/// Converts between any two models.
///
/// Same-model conversion only sanitizes. Lab <-> LCH is direct; everything
/// else goes through RGB.
pub fn convert(value: ModelColor, to: ColorModel, ctx: &LabContext) -> ModelColor {
    match (value, to) {
        (v, m) if v.model() == m => v.sanitized(),
        (ModelColor::Lab(lab), ColorModel::Lch) => ModelColor::Lch(lab_to_lch(lab)),
        (ModelColor::Lch(lch), ColorModel::Lab) => ModelColor::Lab(lch_to_lab(lch)),
        (v, m) => rgb_to_model(model_to_rgb(v, ctx), m, ctx),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use huepick_primaries::{Illuminant, Observer};

    fn assert_color_eq(a: Color, b: Color, eps: f32) {
        assert_abs_diff_eq!(a.r, b.r, epsilon = eps);
        assert_abs_diff_eq!(a.g, b.g, epsilon = eps);
        assert_abs_diff_eq!(a.b, b.b, epsilon = eps);
    }

    #[test]
    fn test_red_lab_d50() {
        let ctx = LabContext::d50();
        let lab = rgb_to_lab(Color::new(1.0, 0.0, 0.0), &ctx);
        assert_abs_diff_eq!(lab.l, 54.29, epsilon = 0.01);
        assert_abs_diff_eq!(lab.a, 80.81, epsilon = 0.01);
        assert_abs_diff_eq!(lab.b, 69.89, epsilon = 0.01);

        let back = lab_to_rgb(lab, &ctx);
        assert_color_eq(back, Color::new(1.0, 0.0, 0.0), 1e-4);
    }

    #[test]
    fn test_white_is_neutral() {
        for ill in Illuminant::ALL {
            for obs in Observer::ALL {
                let ctx = LabContext::new(ill, obs);
                let lab = rgb_to_lab(Color::WHITE, &ctx);
                assert_abs_diff_eq!(lab.l, 100.0, epsilon = 1e-3);
                assert_abs_diff_eq!(lab.a, 0.0, epsilon = 1e-2);
                assert_abs_diff_eq!(lab.b, 0.0, epsilon = 1e-2);
            }
        }
    }

    #[test]
    fn test_red_lch() {
        let lch = rgb_to_lch(Color::new(1.0, 0.0, 0.0), &LabContext::d50());
        assert_abs_diff_eq!(lch.c, 106.84, epsilon = 0.01);
        assert_abs_diff_eq!(lch.h * 360.0, 40.85, epsilon = 0.01);
    }

    #[test]
    fn test_lab_breakpoint_continuous() {
        let below = lab_f(LAB_EPSILON);
        let above = LAB_EPSILON.cbrt();
        assert_abs_diff_eq!(below, above, epsilon = 1e-6);
        assert_abs_diff_eq!(lab_f_inv(lab_f(0.001)), 0.001, epsilon = 1e-7);
        assert_abs_diff_eq!(lab_f_inv(lab_f(0.5)), 0.5, epsilon = 1e-6);
    }

    #[test]
    fn test_cmyk_black() {
        assert_eq!(rgb_to_cmyk(Color::BLACK), Cmyk::new(0.0, 0.0, 0.0, 1.0));
        assert_eq!(cmyk_to_rgb(Cmyk::new(0.0, 0.0, 0.0, 1.0)), Color::BLACK);
        // Any ink with full key is still black.
        assert_eq!(cmyk_to_rgb(Cmyk::new(0.3, 0.7, 0.1, 1.0)), Color::BLACK);
    }

    #[test]
    fn test_cmyk_known() {
        let cmyk = rgb_to_cmyk(Color::new(1.0, 0.5, 0.0));
        assert_abs_diff_eq!(cmyk.c, 0.0, epsilon = 1e-6);
        assert_abs_diff_eq!(cmyk.m, 0.5, epsilon = 1e-6);
        assert_abs_diff_eq!(cmyk.y, 1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(cmyk.k, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn test_hsl_known() {
        let hsl = rgb_to_hsl(Color::new(0.0, 0.0, 1.0));
        assert_abs_diff_eq!(hsl.h, 2.0 / 3.0, epsilon = 1e-6);
        assert_abs_diff_eq!(hsl.s, 1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(hsl.l, 0.5, epsilon = 1e-6);
    }

    #[test]
    fn test_hsv_known() {
        let hsv = rgb_to_hsv(Color::new(1.0, 0.0, 1.0));
        assert_abs_diff_eq!(hsv.h, 5.0 / 6.0, epsilon = 1e-6);
        assert_abs_diff_eq!(hsv.s, 1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(hsv.v, 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_achromatic_hue_zero() {
        for v in [0.0, 0.25, 0.5, 1.0] {
            let c = Color::gray(v);
            let hsl = rgb_to_hsl(c);
            let hsv = rgb_to_hsv(c);
            assert_eq!((hsl.h, hsl.s), (0.0, 0.0));
            assert_eq!((hsv.h, hsv.s), (0.0, 0.0));
            assert_eq!(rgb_to_lch(c, &LabContext::d50()).h, 0.0);
        }
    }

    #[test]
    fn test_hue_wraps() {
        let a = hsl_to_rgb(Hsl::new(1.0, 1.0, 0.5));
        let b = hsl_to_rgb(Hsl::new(0.0, 1.0, 0.5));
        assert_color_eq(a, b, 1e-6);
        let c = hsv_to_rgb(Hsv::new(-0.5, 1.0, 1.0));
        assert_color_eq(c, hsv_to_rgb(Hsv::new(0.5, 1.0, 1.0)), 1e-6);
    }

    #[test]
    fn test_nan_input_is_clamped() {
        let c = Color::new(f32::NAN, 2.0, -1.0);
        let hsl = rgb_to_hsl(c);
        assert!(hsl.h.is_finite() && hsl.s.is_finite() && hsl.l.is_finite());
        let lab = rgb_to_lab(c, &LabContext::d50());
        assert!(lab.l.is_finite());
        let rgb = lab_to_rgb(Lab::new(f32::NAN, f32::INFINITY, 0.0), &LabContext::d50());
        assert!(rgb.is_finite() && rgb.is_in_unit_range());
    }

    #[test]
    fn test_lab_lch_direct() {
        // Far outside sRGB; a round trip through RGB would clip it.
        let lab = Lab::new(60.0, -150.0, 90.0);
        let ModelColor::Lch(lch) = convert(ModelColor::Lab(lab), ColorModel::Lch, &LabContext::d50())
        else {
            panic!("expected lch");
        };
        let ModelColor::Lab(back) = convert(ModelColor::Lch(lch), ColorModel::Lab, &LabContext::d50())
        else {
            panic!("expected lab");
        };
        assert_abs_diff_eq!(back.a, lab.a, epsilon = 1e-3);
        assert_abs_diff_eq!(back.b, lab.b, epsilon = 1e-3);
    }

    #[test]
    fn test_unclamped_out_of_gamut() {
        let ctx = LabContext::d50();
        let rgb = lab_to_rgb_unclamped(Lab::new(60.0, -150.0, 90.0), &ctx);
        assert!(!rgb.is_in_unit_range());
        assert!(lab_to_rgb(Lab::new(60.0, -150.0, 90.0), &ctx).is_in_unit_range());
    }

    #[test]
    fn test_convert_through_rgb() {
        let ctx = LabContext::d50();
        let hsl = ModelColor::Hsl(Hsl::new(1.0 / 3.0, 1.0, 0.5));
        let ModelColor::Cmyk(cmyk) = convert(hsl, ColorModel::Cmyk, &ctx) else {
            panic!("expected cmyk");
        };
        assert_abs_diff_eq!(cmyk.c, 1.0, epsilon = 1e-5);
        assert_abs_diff_eq!(cmyk.m, 0.0, epsilon = 1e-5);
        assert_abs_diff_eq!(cmyk.y, 1.0, epsilon = 1e-5);
    }
}
