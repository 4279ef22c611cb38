//! Captured screen pixels.
//!
//! [`PixelBuffer`] is an immutable RGB8 snapshot of a screen region. The
//! pixel data sits behind an [`Arc`], so a capture can be handed to another
//! thread by cloning without copying, and nothing can observe it while a
//! capture is still being written.

use crate::error::{Error, Result};
use crate::rect::{Point, Rect};
use std::sync::Arc;

/// An 8-bit RGB pixel as delivered by a capture provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb8 {
    /// Red
    pub r: u8,
    /// Green
    pub g: u8,
    /// Blue
    pub b: u8,
}

impl Rgb8 {
    /// Creates a pixel.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Immutable RGB8 pixels covering a screen rectangle.
///
/// Positions are absolute screen coordinates; the buffer's [`rect`](Self::rect)
/// says which part of the screen it holds.
///
/// ```rust
/// use huepick_core::{PixelBuffer, Point, Rect, Rgb8};
///
/// let buf = PixelBuffer::filled(Rect::new(100, 100, 4, 4), Rgb8::new(255, 0, 0));
/// assert_eq!(buf.get(Point::new(101, 102)), Some(Rgb8::new(255, 0, 0)));
/// assert_eq!(buf.get(Point::new(0, 0)), None);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    rect: Rect,
    pixels: Arc<[Rgb8]>,
}

impl PixelBuffer {
    /// Creates a buffer from packed `RGBRGB...` bytes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if `data.len() != width * height * 3`.
    pub fn from_data(rect: Rect, data: &[u8]) -> Result<Self> {
        let expected = rect.area() as usize * 3;
        if data.len() != expected {
            return Err(Error::invalid_dimensions(
                rect.width,
                rect.height,
                format!("expected {} bytes, got {}", expected, data.len()),
            ));
        }
        let pixels: Vec<Rgb8> = data
            .chunks_exact(3)
            .map(|p| Rgb8::new(p[0], p[1], p[2]))
            .collect();
        Ok(Self {
            rect,
            pixels: pixels.into(),
        })
    }

    /// Creates a buffer from pixels in row-major order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] on a length mismatch.
    pub fn from_pixels(rect: Rect, pixels: Vec<Rgb8>) -> Result<Self> {
        let expected = rect.area() as usize;
        if pixels.len() != expected {
            return Err(Error::invalid_dimensions(
                rect.width,
                rect.height,
                format!("expected {} pixels, got {}", expected, pixels.len()),
            ));
        }
        Ok(Self {
            rect,
            pixels: pixels.into(),
        })
    }

    /// Creates a buffer where every pixel is `value`.
    pub fn filled(rect: Rect, value: Rgb8) -> Self {
        Self {
            rect,
            pixels: vec![value; rect.area() as usize].into(),
        }
    }

    /// Creates a buffer by evaluating `f` at every absolute position.
    pub fn from_fn(rect: Rect, mut f: impl FnMut(Point) -> Rgb8) -> Self {
        let pixels: Vec<Rgb8> = rect.iter_coords().map(&mut f).collect();
        Self {
            rect,
            pixels: pixels.into(),
        }
    }

    /// Screen region held by this buffer.
    #[inline]
    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.rect.width
    }

    /// Height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.rect.height
    }

    /// Row-major pixel slice.
    #[inline]
    pub fn pixels(&self) -> &[Rgb8] {
        &self.pixels
    }

    /// Returns `true` if every pixel of `rect` is present.
    #[inline]
    pub fn covers(&self, rect: &Rect) -> bool {
        self.rect.contains_rect(rect)
    }

    /// Pixel at an absolute screen position.
    #[inline]
    pub fn get(&self, p: Point) -> Option<Rgb8> {
        if !self.rect.contains(p) {
            return None;
        }
        let col = (p.x - self.rect.x) as usize;
        let row = (p.y - self.rect.y) as usize;
        self.pixels
            .get(row * self.rect.width as usize + col)
            .copied()
    }

    /// Copies out the sub-region `rect`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CaptureUnavailable`] if this buffer does not cover `rect`.
    pub fn region(&self, rect: Rect) -> Result<PixelBuffer> {
        if !self.covers(&rect) {
            return Err(Error::uncovered(rect, self.rect));
        }
        let pixels = rect
            .iter_coords()
            .map(|p| self.get(p).ok_or_else(|| Error::uncovered(rect, self.rect)))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            rect,
            pixels: pixels.into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_data_length_check() {
        let rect = Rect::new(0, 0, 2, 2);
        assert!(PixelBuffer::from_data(rect, &[0; 12]).is_ok());

        let err = PixelBuffer::from_data(rect, &[0; 11]).unwrap_err();
        assert!(err.to_string().contains("expected 12 bytes"));
    }

    #[test]
    fn test_get_uses_absolute_coords() {
        let rect = Rect::new(-2, 5, 3, 2);
        let buf = PixelBuffer::from_fn(rect, |p| Rgb8::new((p.x + 10) as u8, p.y as u8, 0));
        assert_eq!(buf.get(Point::new(-2, 5)), Some(Rgb8::new(8, 5, 0)));
        assert_eq!(buf.get(Point::new(0, 6)), Some(Rgb8::new(10, 6, 0)));
        assert_eq!(buf.get(Point::new(1, 6)), None);
    }

    #[test]
    fn test_region() {
        let buf = PixelBuffer::from_fn(Rect::new(0, 0, 8, 8), |p| Rgb8::new(p.x as u8, p.y as u8, 7));
        let sub = buf.region(Rect::new(2, 3, 2, 2)).unwrap();
        assert_eq!(sub.rect(), Rect::new(2, 3, 2, 2));
        assert_eq!(
            sub.pixels(),
            &[
                Rgb8::new(2, 3, 7),
                Rgb8::new(3, 3, 7),
                Rgb8::new(2, 4, 7),
                Rgb8::new(3, 4, 7)
            ]
        );

        let err = buf.region(Rect::new(6, 6, 4, 4)).unwrap_err();
        assert!(err.is_capture_error());
    }

    #[test]
    fn test_clone_shares_pixels() {
        let buf = PixelBuffer::filled(Rect::new(0, 0, 64, 64), Rgb8::new(1, 2, 3));
        let copy = buf.clone();
        assert!(std::ptr::eq(buf.pixels().as_ptr(), copy.pixels().as_ptr()));
    }
}
