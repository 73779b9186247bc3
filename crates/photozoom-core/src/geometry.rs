//! Geometric primitives: Point, Size, `ScrollOffset`.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

/// A 2D point with x and y coordinates, in page pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// X coordinate
    pub x: f32,
    /// Y coordinate
    pub y: f32,
}

impl Point {
    /// Origin point (0, 0)
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    /// Create a new point.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// True when both axes differ from `other` by less than `slop`.
    #[must_use]
    pub fn within(&self, other: &Self, slop: f32) -> bool {
        (self.x - other.x).abs() < slop && (self.y - other.y).abs() < slop
    }
}

impl Default for Point {
    fn default() -> Self {
        Self::ORIGIN
    }
}

impl Add for Point {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// A 2D size with width and height.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    /// Width
    pub width: f32,
    /// Height
    pub height: f32,
}

impl Size {
    /// Zero size
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    /// Create a new size.
    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Height over width, the way image aspect is measured from a thumbnail.
    ///
    /// `None` while either side is zero (an image that has not been laid out yet).
    #[must_use]
    pub fn aspect(&self) -> Option<f32> {
        let aspect = self.height / self.width;
        (self.width != 0.0 && self.height != 0.0 && aspect.is_finite()).then_some(aspect)
    }
}

impl Default for Size {
    fn default() -> Self {
        Self::ZERO
    }
}

/// Scroll position of the two document scroll containers.
///
/// Older engines scroll `body`, newer ones scroll `documentElement`; whichever is
/// non-zero on an axis wins, `documentElement` first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScrollOffset {
    /// `document.documentElement.scrollLeft/scrollTop`
    pub document: Point,
    /// `document.body.scrollLeft/scrollTop`
    pub body: Point,
}

impl ScrollOffset {
    /// Create a scroll offset from both containers.
    #[must_use]
    pub const fn new(document: Point, body: Point) -> Self {
        Self { document, body }
    }

    /// The effective scroll of the page.
    #[must_use]
    pub fn resolve(&self) -> Point {
        let pick = |document: f32, body: f32| if document == 0.0 { body } else { document };
        Point::new(
            pick(self.document.x, self.body.x),
            pick(self.document.y, self.body.y),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_default() {
        assert_eq!(Point::default(), Point::ORIGIN);
    }

    #[test]
    fn test_point_sub() {
        let delta = Point::new(200.0, 100.0) - Point::new(100.0, 100.0);
        assert_eq!(delta, Point::new(100.0, 0.0));
    }

    #[test]
    fn test_point_within() {
        let a = Point::new(50.0, 50.0);
        assert!(a.within(&Point::new(59.0, 41.0), 10.0));
        assert!(!a.within(&Point::new(60.0, 50.0), 10.0));
        assert!(!a.within(&Point::new(50.0, 40.0), 10.0));
    }

    #[test]
    fn test_size_aspect() {
        assert_eq!(Size::new(200.0, 100.0).aspect(), Some(0.5));
        assert_eq!(Size::new(0.0, 100.0).aspect(), None);
        assert_eq!(Size::ZERO.aspect(), None);
    }

    #[test]
    fn test_scroll_prefers_document_element() {
        let scroll = ScrollOffset::new(Point::new(30.0, 0.0), Point::new(5.0, 7.0));
        assert_eq!(scroll.resolve(), Point::new(30.0, 7.0));
    }

    #[test]
    fn test_scroll_default_is_origin() {
        assert_eq!(ScrollOffset::default().resolve(), Point::ORIGIN);
    }
}
