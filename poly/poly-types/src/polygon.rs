//! Closed polygon contour.

use crate::line_alg::{rightward_ray_hit, RayHit};
use crate::point::{units2_to_mm2, Coord, Point2};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Result of testing a point against a single polygon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Containment {
    /// The point is strictly outside.
    Outside,
    /// The point is strictly inside (even-odd rule).
    Inside,
    /// The point lies exactly on the boundary.
    OnBoundary,
}

/// A closed polygon: an ordered point sequence with an implicit closing
/// edge from the last point back to the first.
///
/// The sign of the shoelace area encodes the conventional orientation:
/// positive (counter-clockwise) for outer contours, negative (clockwise)
/// for holes. This is only a convention; actual membership in a multi-
/// polygon region is always decided by a fill rule over the whole
/// [`Shape`](https://docs.rs/poly-shape), never by per-polygon sign.
///
/// A polygon with fewer than 3 points is degenerate and treated as empty.
///
/// # Example
///
/// ```
/// use poly_types::{Point2, Polygon};
///
/// let tri = Polygon::from(vec![(0, 0), (10, 0), (0, 10)]);
/// assert_eq!(tri.signed_area2(), 100);
/// assert!(tri.is_ccw());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Polygon {
    /// The contour vertices, in order.
    pub points: Vec<Point2>,
}

impl Polygon {
    /// Create a polygon from a vertex list.
    #[inline]
    #[must_use]
    pub const fn new(points: Vec<Point2>) -> Self {
        Self { points }
    }

    /// Create an empty polygon.
    #[inline]
    #[must_use]
    pub const fn empty() -> Self {
        Self { points: Vec::new() }
    }

    /// Number of vertices.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the polygon has no vertices.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Whether the polygon encloses any region at all (at least 3 points).
    #[inline]
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.points.len() < 3
    }

    /// Iterate over the vertices.
    pub fn iter(&self) -> std::slice::Iter<'_, Point2> {
        self.points.iter()
    }

    /// Twice the signed shoelace area, exact.
    ///
    /// Positive for counter-clockwise contours. Degenerate polygons have
    /// zero area.
    #[must_use]
    pub fn signed_area2(&self) -> i128 {
        if self.is_degenerate() {
            return 0;
        }
        let mut sum: i128 = 0;
        let mut prev = self.points[self.points.len() - 1];
        for &p in &self.points {
            sum += prev.cross(p);
            prev = p;
        }
        sum
    }

    /// Signed area in square units.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn area(&self) -> f64 {
        self.signed_area2() as f64 / 2.0
    }

    /// Signed area in square millimeters.
    #[must_use]
    pub fn area_mm2(&self) -> f64 {
        units2_to_mm2(self.area())
    }

    /// Whether the contour winds counter-clockwise (signed area >= 0).
    #[inline]
    #[must_use]
    pub fn is_ccw(&self) -> bool {
        self.signed_area2() >= 0
    }

    /// Reverse the winding direction in place.
    pub fn reverse(&mut self) {
        self.points.reverse();
    }

    /// Translate all vertices by `delta`.
    pub fn translate(&mut self, delta: Point2) {
        if delta != Point2::ZERO {
            for p in &mut self.points {
                *p += delta;
            }
        }
    }

    /// Scale all vertices about the origin.
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
    pub fn scale(&mut self, factor: f64) {
        if (factor - 1.0).abs() < f64::EPSILON {
            return;
        }
        for p in &mut self.points {
            *p = Point2::new(
                (p.x as f64 * factor).round() as Coord,
                (p.y as f64 * factor).round() as Coord,
            );
        }
    }

    /// Even-odd point containment with exact boundary detection.
    ///
    /// Degenerate polygons contain nothing.
    #[must_use]
    pub fn contains_point(&self, p: Point2) -> Containment {
        if self.is_degenerate() {
            return Containment::Outside;
        }
        let mut crossings = 0usize;
        let mut prev = self.points[self.points.len() - 1];
        for &cur in &self.points {
            match rightward_ray_hit(p, prev, cur) {
                RayHit::OnBoundary => return Containment::OnBoundary,
                RayHit::Cross { .. } => crossings += 1,
                RayHit::Miss => {}
            }
            prev = cur;
        }
        if crossings % 2 == 1 {
            Containment::Inside
        } else {
            Containment::Outside
        }
    }

    /// Whether `p` is inside this polygon, counting the boundary as inside.
    #[inline]
    #[must_use]
    pub fn inside(&self, p: Point2) -> bool {
        self.contains_point(p) != Containment::Outside
    }

    /// Remove vertices whose incident edges are collinear within
    /// `max_deviation_angle` radians.
    ///
    /// Repeats until stable. The polygon may end up degenerate; callers
    /// drop such results.
    pub fn remove_colinear_edges(&mut self, max_deviation_angle: f64) {
        loop {
            if self.points.len() < 3 {
                return;
            }
            let n = self.points.len();
            let mut keep = Vec::with_capacity(n);
            let mut removed_any = false;
            for i in 0..n {
                let prev = self.points[(i + n - 1) % n];
                let cur = self.points[i];
                let next = self.points[(i + 1) % n];
                if removed_any {
                    // One removal per pass keeps neighbor indices valid.
                    keep.push(cur);
                    continue;
                }
                let a = cur - prev;
                let b = next - cur;
                if a == Point2::ZERO || b == Point2::ZERO {
                    removed_any = true;
                    continue;
                }
                #[allow(clippy::cast_precision_loss)]
                let angle = (a.cross(b) as f64).atan2(a.dot(b) as f64);
                if angle.abs() <= max_deviation_angle {
                    removed_any = true;
                    continue;
                }
                keep.push(cur);
            }
            if !removed_any {
                return;
            }
            self.points = keep;
        }
    }
}

impl From<Vec<Point2>> for Polygon {
    fn from(points: Vec<Point2>) -> Self {
        Self::new(points)
    }
}

impl From<Vec<(Coord, Coord)>> for Polygon {
    fn from(points: Vec<(Coord, Coord)>) -> Self {
        Self::new(points.into_iter().map(Point2::from).collect())
    }
}

impl<'a> IntoIterator for &'a Polygon {
    type Item = &'a Point2;
    type IntoIter = std::slice::Iter<'a, Point2>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_square() -> Polygon {
        Polygon::from(vec![(0, 0), (100, 0), (100, 100), (0, 100)])
    }

    #[test]
    fn test_signed_area_orientation() {
        let ccw = unit_square();
        assert_eq!(ccw.signed_area2(), 20_000);
        assert!(ccw.is_ccw());

        let mut cw = unit_square();
        cw.reverse();
        assert_eq!(cw.signed_area2(), -20_000);
        assert!(!cw.is_ccw());
    }

    #[test]
    fn test_degenerate_is_empty_area() {
        let line = Polygon::from(vec![(0, 0), (10, 10)]);
        assert!(line.is_degenerate());
        assert_eq!(line.signed_area2(), 0);
        assert_eq!(line.contains_point(Point2::new(5, 5)), Containment::Outside);
    }

    #[test]
    fn test_containment() {
        let sq = unit_square();
        assert_eq!(sq.contains_point(Point2::new(50, 50)), Containment::Inside);
        assert_eq!(
            sq.contains_point(Point2::new(150, 50)),
            Containment::Outside
        );
        assert_eq!(
            sq.contains_point(Point2::new(100, 50)),
            Containment::OnBoundary
        );
        assert_eq!(
            sq.contains_point(Point2::new(0, 0)),
            Containment::OnBoundary
        );
    }

    #[test]
    fn test_containment_concave() {
        // U-shape: point in the notch is outside.
        let u = Polygon::from(vec![
            (0, 0),
            (30, 0),
            (30, 30),
            (20, 30),
            (20, 10),
            (10, 10),
            (10, 30),
            (0, 30),
        ]);
        assert_eq!(u.contains_point(Point2::new(15, 20)), Containment::Outside);
        assert_eq!(u.contains_point(Point2::new(5, 20)), Containment::Inside);
        assert_eq!(u.contains_point(Point2::new(25, 20)), Containment::Inside);
    }

    #[test]
    fn test_inside_counts_boundary() {
        let sq = unit_square();
        assert!(sq.inside(Point2::new(0, 50)));
        assert!(sq.inside(Point2::new(50, 50)));
        assert!(!sq.inside(Point2::new(-1, 50)));
    }

    #[test]
    fn test_translate_scale() {
        let mut sq = unit_square();
        sq.translate(Point2::new(10, -10));
        assert_eq!(sq.points[0], Point2::new(10, -10));
        sq.scale(2.0);
        assert_eq!(sq.points[0], Point2::new(20, -20));
        assert_eq!(sq.signed_area2(), 4 * 20_000);
    }

    #[test]
    fn test_remove_colinear_edges() {
        let mut poly = Polygon::from(vec![
            (0, 0),
            (50, 0), // collinear
            (100, 0),
            (100, 100),
            (0, 100),
        ]);
        poly.remove_colinear_edges(0.001);
        assert_eq!(poly.len(), 4);
        assert_eq!(poly.signed_area2(), 20_000);
    }

    #[test]
    fn test_remove_colinear_keeps_real_corners() {
        let mut sq = unit_square();
        sq.remove_colinear_edges(0.001);
        assert_eq!(sq.len(), 4);
    }
}
