//! Axis-aligned 2D bounding box.

use crate::point::{Coord, Point2};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An axis-aligned 2D bounding box in fixed-point units.
///
/// # Example
///
/// ```
/// use poly_types::{Aabb2, Point2};
///
/// let aabb = Aabb2::new(Point2::new(0, 0), Point2::new(100, 50));
/// assert!(aabb.contains(Point2::new(50, 25)));
/// assert_eq!(aabb.width(), 100);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Aabb2 {
    /// Minimum corner (smallest x and y).
    pub min: Point2,
    /// Maximum corner (largest x and y).
    pub max: Point2,
}

impl Aabb2 {
    /// Create a bounding box from two corners, correcting a swapped pair.
    #[must_use]
    pub fn new(a: Point2, b: Point2) -> Self {
        Self {
            min: Point2::new(a.x.min(b.x), a.y.min(b.y)),
            max: Point2::new(a.x.max(b.x), a.y.max(b.y)),
        }
    }

    /// Create an empty (inverted) bounding box.
    ///
    /// Empty boxes have min > max and can be grown point by point.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            min: Point2::new(Coord::MAX, Coord::MAX),
            max: Point2::new(Coord::MIN, Coord::MIN),
        }
    }

    /// Compute the bounding box of an iterator of points.
    ///
    /// Returns an empty box for an empty iterator.
    #[must_use]
    pub fn from_points<'a>(points: impl Iterator<Item = &'a Point2>) -> Self {
        let mut aabb = Self::empty();
        for &p in points {
            aabb.expand_to_include(p);
        }
        aabb
    }

    /// Whether the box contains no area (min > max on either axis).
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y
    }

    /// Grow the box to include a point.
    pub fn expand_to_include(&mut self, p: Point2) {
        self.min.x = self.min.x.min(p.x);
        self.min.y = self.min.y.min(p.y);
        self.max.x = self.max.x.max(p.x);
        self.max.y = self.max.y.max(p.y);
    }

    /// Width of the box (0 when empty).
    #[inline]
    #[must_use]
    pub const fn width(&self) -> Coord {
        if self.is_empty() {
            0
        } else {
            self.max.x - self.min.x
        }
    }

    /// Height of the box (0 when empty).
    #[inline]
    #[must_use]
    pub const fn height(&self) -> Coord {
        if self.is_empty() {
            0
        } else {
            self.max.y - self.min.y
        }
    }

    /// Whether a point lies inside the box (boundary inclusive).
    #[inline]
    #[must_use]
    pub const fn contains(&self, p: Point2) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    /// Whether two boxes overlap (boundary touching counts).
    #[inline]
    #[must_use]
    pub const fn intersects(&self, other: &Self) -> bool {
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
    }
}

impl Default for Aabb2 {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_corrects_corners() {
        let aabb = Aabb2::new(Point2::new(10, 0), Point2::new(0, 10));
        assert_eq!(aabb.min, Point2::new(0, 0));
        assert_eq!(aabb.max, Point2::new(10, 10));
    }

    #[test]
    fn test_empty_and_expand() {
        let mut aabb = Aabb2::empty();
        assert!(aabb.is_empty());
        assert_eq!(aabb.width(), 0);

        aabb.expand_to_include(Point2::new(5, -5));
        assert!(!aabb.is_empty());
        aabb.expand_to_include(Point2::new(-5, 5));
        assert_eq!(aabb.min, Point2::new(-5, -5));
        assert_eq!(aabb.max, Point2::new(5, 5));
        assert_eq!(aabb.width(), 10);
        assert_eq!(aabb.height(), 10);
    }

    #[test]
    fn test_from_points() {
        let pts = [Point2::new(1, 2), Point2::new(-3, 8), Point2::new(4, 0)];
        let aabb = Aabb2::from_points(pts.iter());
        assert_eq!(aabb.min, Point2::new(-3, 0));
        assert_eq!(aabb.max, Point2::new(4, 8));
    }

    #[test]
    fn test_contains_and_intersects() {
        let a = Aabb2::new(Point2::new(0, 0), Point2::new(10, 10));
        let b = Aabb2::new(Point2::new(10, 10), Point2::new(20, 20));
        let c = Aabb2::new(Point2::new(11, 11), Point2::new(20, 20));
        assert!(a.contains(Point2::new(0, 10)));
        assert!(!a.contains(Point2::new(11, 5)));
        assert!(a.intersects(&b));
        assert!(!a.intersects(&c));
    }
}
