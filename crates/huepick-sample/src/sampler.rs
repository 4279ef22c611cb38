//! Weighted averaging of a captured neighborhood.
//!
//! Sampling happens in two steps. [`compute_sample_rect`] decides which
//! pixels to capture around the pointer, clipped to the monitor. [`sample`]
//! then averages a captured buffer with the falloff kernel.
//!
//! ```text
//!   oversample = 2, pointer at the right edge
//!
//!   +-----------+ monitor
//!   |     . . . |. .      full 5x5 square
//!   |     . . . |. .      clipped to 3x5
//!   |     . . P |. .      P keeps weight 1
//!   |     . . . |. .
//!   |     . . . |. .
//!   +-----------+
//! ```
//!
//! The kernel is centered on the pointer pixel and normalized by the
//! half-diagonal of the *unclipped* square, so a pick at the screen edge
//! weighs the surviving pixels exactly as it would in the middle.

use crate::falloff::Falloff;
use glam::Vec2;
use huepick_core::{Color, Error, PixelBuffer, Point, Rect, Result};
use tracing::trace;

/// Largest accepted oversample radius.
pub const MAX_OVERSAMPLE: u32 = 16;

/// The pixels one pick reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleRegion {
    /// Rect to capture, already clipped to the monitor.
    pub rect: Rect,
    /// Pointer pixel (absolute), the kernel center.
    pub pointer: Point,
    /// Radius the kernel is normalized against.
    pub oversample: u32,
}

impl SampleRegion {
    /// Pointer position relative to the rect origin.
    pub fn offset(&self) -> Point {
        self.pointer.offset_from(self.rect.origin())
    }

    /// Half-diagonal of the unclipped square, the kernel's `d = 1`.
    pub fn half_diagonal(&self) -> f32 {
        self.oversample as f32 * std::f32::consts::SQRT_2
    }
}

/// Rect to capture for a pick at `pointer` on a monitor with bounds `screen`.
///
/// A pointer outside `screen` is first moved onto the nearest edge pixel.
/// The square of radius `oversample` is then clipped to `screen`.
///
/// # Errors
///
/// Returns [`Error::CaptureUnavailable`] when `screen` is empty.
///
/// ```rust
/// use huepick_core::{Point, Rect};
/// use huepick_sample::compute_sample_rect;
///
/// let screen = Rect::from_size(1920, 1080);
/// let region = compute_sample_rect(Point::new(0, 540), screen, 3).unwrap();
/// assert_eq!(region.rect, Rect::new(0, 537, 4, 7));
/// assert_eq!(region.offset(), Point::new(0, 3));
/// ```
pub fn compute_sample_rect(pointer: Point, screen: Rect, oversample: u32) -> Result<SampleRegion> {
    let pointer = screen
        .clamp_point(pointer)
        .ok_or_else(|| Error::capture_unavailable(format!("monitor bounds {screen} are empty")))?;
    let rect = Rect::centered(pointer, oversample)
        .intersect(&screen)
        .ok_or_else(|| Error::capture_unavailable("sample square misses the monitor"))?;
    Ok(SampleRegion {
        rect,
        pointer,
        oversample,
    })
}

/// Weighted average of `region` in `buffer`.
///
/// Accumulates row by row in `f64`, so identical input always yields the
/// identical color.
///
/// # Errors
///
/// Returns [`Error::CaptureUnavailable`] if `buffer` does not cover the whole
/// region. No color is computed from partial data.
pub fn sample(buffer: &PixelBuffer, region: &SampleRegion, falloff: Falloff) -> Result<Color> {
    if !buffer.covers(&region.rect) {
        return Err(Error::uncovered(region.rect, buffer.rect()));
    }

    if region.oversample == 0 {
        let p = buffer
            .get(region.pointer)
            .ok_or_else(|| Error::uncovered(region.rect, buffer.rect()))?;
        return Ok(Color::from_rgb8(p));
    }

    let center = Vec2::new(region.pointer.x as f32, region.pointer.y as f32);
    let norm = region.half_diagonal();

    let mut acc = [0.0f64; 3];
    let mut total = 0.0f64;
    for p in region.rect.iter_coords() {
        let d = Vec2::new(p.x as f32, p.y as f32).distance(center) / norm;
        let w = falloff.weight(d);
        if w <= 0.0 {
            continue;
        }
        let px = buffer
            .get(p)
            .ok_or_else(|| Error::uncovered(region.rect, buffer.rect()))?;
        let w = w as f64;
        acc[0] += w * px.r as f64;
        acc[1] += w * px.g as f64;
        acc[2] += w * px.b as f64;
        total += w;
    }

    // The pointer pixel always weighs 1, so total is never 0 here.
    if total <= 0.0 {
        return Err(Error::other("falloff produced zero total weight"));
    }
    trace!(rect = %region.rect, %falloff, total, "sampled region");
    let scale = 1.0 / (total * 255.0);
    Ok(Color::new(
        (acc[0] * scale) as f32,
        (acc[1] * scale) as f32,
        (acc[2] * scale) as f32,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use huepick_core::Rgb8;

    fn checker(rect: Rect) -> PixelBuffer {
        PixelBuffer::from_fn(rect, |p| {
            if (p.x + p.y) % 2 == 0 {
                Rgb8::new(255, 255, 255)
            } else {
                Rgb8::new(0, 0, 0)
            }
        })
    }

    #[test]
    fn test_single_pixel() {
        let screen = Rect::from_size(10, 10);
        let region = compute_sample_rect(Point::new(4, 4), screen, 0).unwrap();
        assert_eq!(region.rect, Rect::new(4, 4, 1, 1));
        let buf = PixelBuffer::filled(screen, Rgb8::new(255, 0, 0));
        assert_eq!(sample(&buf, &region, Falloff::Linear).unwrap(), Color::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_rect_clipped_never_exceeds_screen() {
        let screen = Rect::new(-1920, 0, 1920, 1080);
        for (p, r) in [
            (Point::new(-1920, 0), 5),
            (Point::new(-1, 1079), 5),
            (Point::new(-960, 540), 16),
            (Point::new(5000, -30), 2),
        ] {
            let region = compute_sample_rect(p, screen, r).unwrap();
            assert!(screen.contains_rect(&region.rect), "{p}");
            assert!(region.rect.contains(region.pointer));
        }
    }

    #[test]
    fn test_corner_pointer_clips_to_screen() {
        let screen = Rect::from_size(1920, 1080);
        let region = compute_sample_rect(Point::new(0, 0), screen, 10).unwrap();
        assert!(screen.contains_rect(&region.rect));
        assert_eq!(region.rect, Rect::new(0, 0, 11, 11));
        assert_eq!(region.pointer, Point::new(0, 0));
    }

    #[test]
    fn test_pointer_clamped() {
        let screen = Rect::from_size(100, 100);
        let region = compute_sample_rect(Point::new(-5, 250), screen, 1).unwrap();
        assert_eq!(region.pointer, Point::new(0, 99));
        assert_eq!(region.rect, Rect::new(0, 98, 2, 2));
    }

    #[test]
    fn test_empty_screen() {
        let err = compute_sample_rect(Point::new(0, 0), Rect::from_size(0, 10), 2).unwrap_err();
        assert!(err.is_capture_error());
    }

    #[test]
    fn test_uniform_region_any_falloff() {
        let screen = Rect::from_size(20, 20);
        let buf = PixelBuffer::filled(screen, Rgb8::new(51, 102, 204));
        let region = compute_sample_rect(Point::new(10, 10), screen, 4).unwrap();
        for k in Falloff::ALL {
            let c = sample(&buf, &region, k).unwrap();
            assert_abs_diff_eq!(c.r, 0.2, epsilon = 1e-6);
            assert_abs_diff_eq!(c.g, 0.4, epsilon = 1e-6);
            assert_abs_diff_eq!(c.b, 0.8, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_none_falloff_is_pointer_pixel() {
        let screen = Rect::from_size(9, 9);
        let buf = checker(screen);
        let region = compute_sample_rect(Point::new(4, 4), screen, 3).unwrap();
        assert_eq!(sample(&buf, &region, Falloff::None).unwrap(), Color::WHITE);
    }

    #[test]
    fn test_checker_average() {
        // 3x3 checker, linear falloff: center white (w=1), 4 edge-adjacent
        // black at d=1/sqrt2, 4 diagonal white at d=1 (w=0).
        let screen = Rect::from_size(3, 3);
        let buf = checker(screen);
        let region = compute_sample_rect(Point::new(1, 1), screen, 1).unwrap();
        let c = sample(&buf, &region, Falloff::Linear).unwrap();
        let w_edge = 1.0 - std::f32::consts::FRAC_1_SQRT_2;
        let expected = 1.0 / (1.0 + 4.0 * w_edge);
        assert_abs_diff_eq!(c.r, expected, epsilon = 1e-5);
    }

    #[test]
    fn test_uncovered_buffer_fails() {
        let screen = Rect::from_size(10, 10);
        let region = compute_sample_rect(Point::new(5, 5), screen, 2).unwrap();
        let partial = PixelBuffer::filled(Rect::new(4, 4, 2, 2), Rgb8::default());
        let err = sample(&partial, &region, Falloff::Linear).unwrap_err();
        assert!(err.is_capture_error());
    }

    #[test]
    fn test_deterministic() {
        let screen = Rect::from_size(40, 40);
        let buf = PixelBuffer::from_fn(screen, |p| {
            Rgb8::new((p.x * 6) as u8, (p.y * 6) as u8, ((p.x ^ p.y) * 4) as u8)
        });
        let region = compute_sample_rect(Point::new(20, 17), screen, 8).unwrap();
        let a = sample(&buf, &region, Falloff::Exponential).unwrap();
        let b = sample(&buf.clone(), &region, Falloff::Exponential).unwrap();
        assert_eq!(a, b);
    }
}
