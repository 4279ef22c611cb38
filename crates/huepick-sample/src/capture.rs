//! Pixel sources.
//!
//! [`Screen`] is the seam to whatever owns real pixels: a desktop capture
//! backend, a remote frame, or a still image. Implementations only need to
//! report the pointer and hand out immutable snapshots.

use huepick_core::{Error, PixelBuffer, Point, Rect, Result};
use std::path::Path;

/// Pointer position and the bounds of the monitor it is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerState {
    /// Absolute pointer position.
    pub position: Point,
    /// Bounds of the monitor under the pointer.
    pub monitor: Rect,
}

/// A source of pointer state and screen pixels.
pub trait Screen {
    /// Current pointer state, or `None` if it cannot be queried.
    fn pointer(&self) -> Option<PointerState>;

    /// Captures `rect` as an immutable snapshot.
    ///
    /// # Errors
    ///
    /// [`Error::CaptureUnavailable`] when the region cannot be read.
    fn capture(&self, rect: Rect) -> Result<PixelBuffer>;
}

impl<S: Screen + ?Sized> Screen for &S {
    fn pointer(&self) -> Option<PointerState> {
        (**self).pointer()
    }

    fn capture(&self, rect: Rect) -> Result<PixelBuffer> {
        (**self).capture(rect)
    }
}

impl<S: Screen + ?Sized> Screen for Box<S> {
    fn pointer(&self) -> Option<PointerState> {
        (**self).pointer()
    }

    fn capture(&self, rect: Rect) -> Result<PixelBuffer> {
        (**self).capture(rect)
    }
}

/// A still image acting as a single-monitor screen.
///
/// ```rust
/// use huepick_core::{PixelBuffer, Point, Rect, Rgb8};
/// use huepick_sample::{ImageScreen, Screen};
///
/// let img = PixelBuffer::filled(Rect::from_size(8, 8), Rgb8::new(0, 128, 255));
/// let mut screen = ImageScreen::new(img);
/// assert!(screen.pointer().is_none());
///
/// screen.move_pointer(Point::new(3, 3));
/// let snap = screen.capture(Rect::new(2, 2, 3, 3)).unwrap();
/// assert_eq!(snap.get(Point::new(3, 3)), Some(Rgb8::new(0, 128, 255)));
/// ```
#[derive(Debug, Clone)]
pub struct ImageScreen {
    image: PixelBuffer,
    pointer: Option<Point>,
}

impl ImageScreen {
    /// Wraps an in-memory image. The pointer starts hidden.
    pub fn new(image: PixelBuffer) -> Self {
        Self {
            image,
            pointer: None,
        }
    }

    /// Loads a PNG screenshot.
    pub fn from_png<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Self::new(crate::png::read(path)?))
    }

    /// Builder form of [`move_pointer`](Self::move_pointer).
    pub fn with_pointer(mut self, position: Point) -> Self {
        self.pointer = Some(position);
        self
    }

    /// Moves the scripted pointer.
    pub fn move_pointer(&mut self, position: Point) {
        self.pointer = Some(position);
    }

    /// Hides the pointer; [`Screen::pointer`] then returns `None`.
    pub fn hide_pointer(&mut self) {
        self.pointer = None;
    }

    /// Whole image.
    pub fn image(&self) -> &PixelBuffer {
        &self.image
    }
}

impl Screen for ImageScreen {
    fn pointer(&self) -> Option<PointerState> {
        self.pointer.map(|position| PointerState {
            position,
            monitor: self.image.rect(),
        })
    }

    fn capture(&self, rect: Rect) -> Result<PixelBuffer> {
        if rect.is_empty() {
            return Err(Error::capture_unavailable(format!("empty capture rect {rect}")));
        }
        self.image.region(rect)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use huepick_core::Rgb8;

    #[test]
    fn test_pointer_reports_monitor() {
        let img = PixelBuffer::filled(Rect::new(-100, 0, 100, 50), Rgb8::default());
        let screen = ImageScreen::new(img).with_pointer(Point::new(-10, 10));
        let state = screen.pointer().unwrap();
        assert_eq!(state.monitor, Rect::new(-100, 0, 100, 50));
        assert_eq!(state.position, Point::new(-10, 10));
    }

    #[test]
    fn test_capture_outside_fails() {
        let screen = ImageScreen::new(PixelBuffer::filled(Rect::from_size(4, 4), Rgb8::default()));
        assert!(screen.capture(Rect::new(3, 3, 2, 2)).unwrap_err().is_capture_error());
        assert!(screen.capture(Rect::new(0, 0, 0, 0)).unwrap_err().is_capture_error());
    }

    #[test]
    fn test_hide_pointer() {
        let mut screen = ImageScreen::new(PixelBuffer::filled(Rect::from_size(2, 2), Rgb8::default()))
            .with_pointer(Point::new(1, 1));
        screen.hide_pointer();
        assert!(screen.pointer().is_none());
    }
}
