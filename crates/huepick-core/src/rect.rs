//! Screen-space geometry: [`Point`] and [`Rect`].
//!
//! Coordinates are signed because virtual desktops place monitors at
//! negative offsets. The convention is the usual screen one:
//!
//! ```text
//! (0,0) ────────► X
//!   │
//!   │   ┌──────────┐
//!   │   │  Sample  │
//!   │   │  Region  │
//!   │   └──────────┘
//!   ▼
//!   Y
//! ```
//!
//! Rectangles are inclusive on the left/top edges and exclusive on the
//! right/bottom edges.
//!
//! ```rust
//! use huepick_core::{Point, Rect};
//!
//! let screen = Rect::new(0, 0, 1920, 1080);
//! let square = Rect::centered(Point::new(2, 2), 4);
//! let clipped = square.intersect(&screen).unwrap();
//! assert_eq!(clipped, Rect::new(0, 0, 7, 7));
//! ```

/// A pixel position on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    /// Column
    pub x: i32,
    /// Row
    pub y: i32,
}

impl Point {
    /// Creates a point.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Component-wise difference `self - other`.
    #[inline]
    pub const fn offset_from(&self, other: Point) -> Point {
        Point::new(self.x - other.x, self.y - other.y)
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A rectangle defined by origin (x, y) and dimensions (width, height).
///
/// A rectangle with zero width or height is empty.
///
/// ```rust
/// use huepick_core::Rect;
///
/// let rect = Rect::new(-10, 20, 100, 50);
/// assert_eq!(rect.right(), 90);
/// assert_eq!(rect.bottom(), 70);
/// assert_eq!(rect.area(), 5000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    /// X coordinate of the left edge (inclusive)
    pub x: i32,
    /// Y coordinate of the top edge (inclusive)
    pub y: i32,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl Rect {
    /// Creates a new rectangle with the given origin and dimensions.
    #[inline]
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Creates a rectangle from origin (0, 0) with given dimensions.
    #[inline]
    pub const fn from_size(width: u32, height: u32) -> Self {
        Self::new(0, 0, width, height)
    }

    /// Square of side `2 * radius + 1` centered on `center`.
    ///
    /// `radius == 0` yields the single pixel under `center`.
    #[inline]
    pub fn centered(center: Point, radius: u32) -> Self {
        let r = radius.min(i32::MAX as u32 / 2) as i32;
        let side = (2 * r + 1) as u32;
        Self::new(center.x - r, center.y - r, side, side)
    }

    /// Top-left corner.
    #[inline]
    pub const fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Returns the X coordinate of the right edge (exclusive).
    #[inline]
    pub fn right(&self) -> i32 {
        self.x.saturating_add(self.width as i32)
    }

    /// Returns the Y coordinate of the bottom edge (exclusive).
    #[inline]
    pub fn bottom(&self) -> i32 {
        self.y.saturating_add(self.height as i32)
    }

    /// Returns the area of the rectangle in pixels.
    #[inline]
    pub const fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    /// Returns `true` if the rectangle has zero area.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Returns `true` if the point is inside this rectangle.
    ///
    /// ```rust
    /// use huepick_core::{Point, Rect};
    ///
    /// let rect = Rect::new(10, 10, 100, 100);
    /// assert!(rect.contains(Point::new(10, 10)));
    /// assert!(rect.contains(Point::new(109, 109)));
    /// assert!(!rect.contains(Point::new(110, 110)));
    /// ```
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x < self.right() && p.y >= self.y && p.y < self.bottom()
    }

    /// Returns `true` if this rectangle fully contains another.
    ///
    /// Empty rectangles are contained by anything.
    #[inline]
    pub fn contains_rect(&self, other: &Rect) -> bool {
        if other.is_empty() {
            return true;
        }
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }

    /// Returns the intersection of this rectangle with another.
    ///
    /// Returns `None` if the rectangles don't overlap.
    #[inline]
    pub fn intersect(&self, other: &Rect) -> Option<Rect> {
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());

        if x < right && y < bottom {
            Some(Rect::new(x, y, (right - x) as u32, (bottom - y) as u32))
        } else {
            None
        }
    }

    /// Returns the bounding box that contains both rectangles.
    #[inline]
    pub fn union(&self, other: &Rect) -> Rect {
        if self.is_empty() {
            return *other;
        }
        if other.is_empty() {
            return *self;
        }
        let x = self.x.min(other.x);
        let y = self.y.min(other.y);
        let right = self.right().max(other.right());
        let bottom = self.bottom().max(other.bottom());
        Rect::new(x, y, (right - x) as u32, (bottom - y) as u32)
    }

    /// Nearest point inside this rectangle.
    ///
    /// Returns `None` for an empty rectangle.
    #[inline]
    pub fn clamp_point(&self, p: Point) -> Option<Point> {
        if self.is_empty() {
            return None;
        }
        Some(Point::new(
            p.x.clamp(self.x, self.right() - 1),
            p.y.clamp(self.y, self.bottom() - 1),
        ))
    }

    /// Iterates all pixel positions, row by row, left to right.
    ///
    /// ```rust
    /// use huepick_core::{Point, Rect};
    ///
    /// let coords: Vec<_> = Rect::new(0, 0, 2, 2).iter_coords().collect();
    /// assert_eq!(coords, vec![
    ///     Point::new(0, 0), Point::new(1, 0),
    ///     Point::new(0, 1), Point::new(1, 1),
    /// ]);
    /// ```
    #[inline]
    pub fn iter_coords(&self) -> impl Iterator<Item = Point> + use<> {
        let r = *self;
        (r.y..r.bottom()).flat_map(move |y| (r.x..r.right()).map(move |x| Point::new(x, y)))
    }
}

impl std::fmt::Display for Rect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Rect({}, {}, {}x{})",
            self.x, self.y, self.width, self.height
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_edges() {
        let r = Rect::new(-10, 20, 100, 50);
        assert_eq!(r.right(), 90);
        assert_eq!(r.bottom(), 70);
    }

    #[test]
    fn test_rect_contains() {
        let r = Rect::new(10, 10, 100, 100);
        assert!(r.contains(Point::new(10, 10)));
        assert!(r.contains(Point::new(50, 50)));
        assert!(!r.contains(Point::new(110, 50)));
        assert!(!r.contains(Point::new(5, 50)));
    }

    #[test]
    fn test_rect_intersect() {
        let a = Rect::new(0, 0, 100, 100);
        let b = Rect::new(50, 50, 100, 100);
        assert_eq!(a.intersect(&b), Some(Rect::new(50, 50, 50, 50)));

        let c = Rect::new(200, 200, 50, 50);
        assert!(a.intersect(&c).is_none());
    }

    #[test]
    fn test_rect_intersect_negative_origin() {
        let monitor = Rect::new(-1920, 0, 1920, 1080);
        let square = Rect::centered(Point::new(-1, 5), 3);
        let clipped = square.intersect(&monitor).unwrap();
        assert_eq!(clipped, Rect::new(-4, 2, 4, 7));
    }

    #[test]
    fn test_centered() {
        assert_eq!(Rect::centered(Point::new(5, 5), 0), Rect::new(5, 5, 1, 1));
        assert_eq!(Rect::centered(Point::new(5, 5), 2), Rect::new(3, 3, 5, 5));
    }

    #[test]
    fn test_contains_rect() {
        let outer = Rect::new(0, 0, 100, 100);
        assert!(outer.contains_rect(&Rect::new(10, 10, 50, 50)));
        assert!(outer.contains_rect(&outer));
        assert!(!outer.contains_rect(&Rect::new(-1, 0, 10, 10)));
        assert!(outer.contains_rect(&Rect::new(500, 500, 0, 0)));
    }

    #[test]
    fn test_union() {
        let a = Rect::new(0, 0, 50, 50);
        let b = Rect::new(100, 100, 50, 50);
        assert_eq!(a.union(&b), Rect::new(0, 0, 150, 150));
        assert_eq!(Rect::default().union(&b), b);
    }

    #[test]
    fn test_clamp_point() {
        let r = Rect::new(0, 0, 10, 10);
        assert_eq!(r.clamp_point(Point::new(-5, 20)), Some(Point::new(0, 9)));
        assert_eq!(r.clamp_point(Point::new(3, 4)), Some(Point::new(3, 4)));
        assert_eq!(Rect::default().clamp_point(Point::new(0, 0)), None);
    }

    #[test]
    fn test_iter_coords_count() {
        let r = Rect::new(-1, -1, 3, 2);
        assert_eq!(r.iter_coords().count(), 6);
        assert_eq!(r.iter_coords().next(), Some(Point::new(-1, -1)));
    }
}
