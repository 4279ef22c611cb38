//! Shared inputs for the huepick benchmarks.

use huepick_core::{Color, PixelBuffer, Rect, Rgb8};

/// A deterministic 1920x1080 "screenshot" with gradients and edges.
pub fn screenshot() -> PixelBuffer {
    PixelBuffer::from_fn(Rect::from_size(1920, 1080), |p| {
        let band = if (p.x / 64 + p.y / 64) % 2 == 0 { 0 } else { 40 };
        Rgb8::new(
            ((p.x * 255 / 1919) as u8).saturating_sub(band),
            (p.y * 255 / 1079) as u8,
            ((p.x ^ p.y) & 0xff) as u8,
        )
    })
}

/// `n` colors spread over the RGB cube.
pub fn colors(n: usize) -> Vec<Color> {
    (0..n)
        .map(|i| {
            let t = i as f32 / n.max(1) as f32;
            Color::new(t, (t * 7.0).fract(), (t * 13.0).fract())
        })
        .collect()
}
