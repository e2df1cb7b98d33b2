//! Open polyline fragments.

use crate::point::Point2;
use crate::polygon::Polygon;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An open polyline: a point sequence with no closing edge.
///
/// The slicer emits these where a layer's cross-section could not be
/// closed (holes in the mesh, surface-mode models). The stitching stage
/// joins fragments whose endpoints are within tolerance and promotes
/// closed chains to [`Polygon`]s.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OpenPolyline {
    /// The polyline vertices, in order.
    pub points: Vec<Point2>,
}

impl OpenPolyline {
    /// Create a polyline from a vertex list.
    #[inline]
    #[must_use]
    pub const fn new(points: Vec<Point2>) -> Self {
        Self { points }
    }

    /// Number of vertices.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the polyline has no vertices.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// First vertex, if any.
    #[inline]
    #[must_use]
    pub fn first(&self) -> Option<Point2> {
        self.points.first().copied()
    }

    /// Last vertex, if any.
    #[inline]
    #[must_use]
    pub fn last(&self) -> Option<Point2> {
        self.points.last().copied()
    }

    /// Total arc length in units.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.points
            .windows(2)
            .map(|w| (w[1] - w[0]).length())
            .sum()
    }

    /// Reverse the direction in place.
    pub fn reverse(&mut self) {
        self.points.reverse();
    }

    /// Append a vertex.
    pub fn push(&mut self, p: Point2) {
        self.points.push(p);
    }

    /// Convert into a closed polygon, dropping a duplicated end vertex.
    #[must_use]
    pub fn into_polygon(mut self) -> Polygon {
        if self.points.len() > 1 && self.points.first() == self.points.last() {
            self.points.pop();
        }
        Polygon::new(self.points)
    }
}

impl From<Vec<Point2>> for OpenPolyline {
    fn from(points: Vec<Point2>) -> Self {
        Self::new(points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length() {
        let line = OpenPolyline::from(vec![
            Point2::new(0, 0),
            Point2::new(30, 40),
            Point2::new(30, 140),
        ]);
        assert!((line.length() - 150.0).abs() < 1e-9);
    }

    #[test]
    fn test_into_polygon_drops_duplicate_end() {
        let line = OpenPolyline::from(vec![
            Point2::new(0, 0),
            Point2::new(10, 0),
            Point2::new(10, 10),
            Point2::new(0, 0),
        ]);
        let poly = line.into_polygon();
        assert_eq!(poly.len(), 3);
    }

    #[test]
    fn test_endpoints() {
        let line = OpenPolyline::from(vec![Point2::new(1, 2), Point2::new(3, 4)]);
        assert_eq!(line.first(), Some(Point2::new(1, 2)));
        assert_eq!(line.last(), Some(Point2::new(3, 4)));
        assert_eq!(OpenPolyline::default().first(), None);
    }
}
