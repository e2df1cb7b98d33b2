//! The `Shape` container.

use std::ops::{Index, IndexMut};

use poly_types::{Aabb2, Point2, Polygon};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An ordered collection of polygons forming one multiply-connected
/// region.
///
/// No containment tree is stored: which points are "inside" is defined by
/// evaluating a fill rule (even-odd or non-zero) over *all* member
/// polygons. Positive-area contours conventionally wind counter-clockwise
/// and holes clockwise, but membership never depends on a single
/// polygon's sign.
///
/// The shape owns its polygons; polygons are plain values.
///
/// # Example
///
/// ```
/// use poly_shape::Shape;
/// use poly_types::Polygon;
///
/// let mut shape = Shape::new();
/// shape.push(Polygon::from(vec![(0, 0), (100, 0), (100, 100), (0, 100)]));
/// shape.push(Polygon::from(vec![(25, 25), (25, 75), (75, 75), (75, 25)])); // hole (cw)
///
/// // Signed areas sum: outline minus hole.
/// assert!((shape.area() - (10_000.0 - 2_500.0)).abs() < f64::EPSILON);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Shape {
    polygons: Vec<Polygon>,
}

impl Shape {
    /// Create an empty shape.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            polygons: Vec::new(),
        }
    }

    /// Number of member polygons.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.polygons.len()
    }

    /// Whether the shape has no polygons.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }

    /// The member polygons as a slice.
    #[inline]
    #[must_use]
    pub fn polygons(&self) -> &[Polygon] {
        &self.polygons
    }

    /// Iterate over the member polygons.
    pub fn iter(&self) -> std::slice::Iter<'_, Polygon> {
        self.polygons.iter()
    }

    /// Iterate mutably over the member polygons.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Polygon> {
        self.polygons.iter_mut()
    }

    /// Append a polygon.
    pub fn push(&mut self, polygon: Polygon) {
        self.polygons.push(polygon);
    }

    /// Append copies of all polygons of another shape.
    pub fn add(&mut self, other: &Self) {
        self.polygons.extend(other.polygons.iter().cloned());
    }

    /// Remove the polygon at `index`, swapping the last one into its
    /// place. Sibling order carries no meaning, so this is the default
    /// removal strategy.
    pub fn swap_remove(&mut self, index: usize) -> Polygon {
        self.polygons.swap_remove(index)
    }

    /// Keep only the polygons satisfying the predicate.
    pub fn retain(&mut self, f: impl FnMut(&Polygon) -> bool) {
        self.polygons.retain(f);
    }

    /// Remove all polygons.
    pub fn clear(&mut self) {
        self.polygons.clear();
    }

    /// Take the polygons out of the shape, leaving it empty.
    #[must_use]
    pub fn take_polygons(&mut self) -> Vec<Polygon> {
        std::mem::take(&mut self.polygons)
    }

    /// Total vertex count over all polygons.
    #[must_use]
    pub fn point_count(&self) -> usize {
        self.polygons.iter().map(Polygon::len).sum()
    }

    /// Signed area in square units: the sum of each member polygon's
    /// shoelace area. Holes (clockwise) contribute negatively.
    #[must_use]
    pub fn area(&self) -> f64 {
        self.polygons.iter().map(Polygon::area).sum()
    }

    /// Signed area in square millimeters.
    #[must_use]
    pub fn area_mm2(&self) -> f64 {
        self.polygons.iter().map(Polygon::area_mm2).sum()
    }

    /// Bounding box over all vertices.
    #[must_use]
    pub fn bounds(&self) -> Aabb2 {
        Aabb2::from_points(self.polygons.iter().flat_map(Polygon::iter))
    }

    /// Translate all polygons by `delta`.
    pub fn translate(&mut self, delta: Point2) {
        for poly in &mut self.polygons {
            poly.translate(delta);
        }
    }

    /// Scale all polygons about the origin.
    pub fn scale(&mut self, factor: f64) {
        if (factor - 1.0).abs() < f64::EPSILON {
            return;
        }
        for poly in &mut self.polygons {
            poly.scale(factor);
        }
    }
}

impl From<Vec<Polygon>> for Shape {
    fn from(polygons: Vec<Polygon>) -> Self {
        Self { polygons }
    }
}

impl From<Polygon> for Shape {
    fn from(polygon: Polygon) -> Self {
        Self {
            polygons: vec![polygon],
        }
    }
}

impl FromIterator<Polygon> for Shape {
    fn from_iter<I: IntoIterator<Item = Polygon>>(iter: I) -> Self {
        Self {
            polygons: iter.into_iter().collect(),
        }
    }
}

impl Index<usize> for Shape {
    type Output = Polygon;

    fn index(&self, index: usize) -> &Polygon {
        &self.polygons[index]
    }
}

impl IndexMut<usize> for Shape {
    fn index_mut(&mut self, index: usize) -> &mut Polygon {
        &mut self.polygons[index]
    }
}

impl<'a> IntoIterator for &'a Shape {
    type Item = &'a Polygon;
    type IntoIter = std::slice::Iter<'a, Polygon>;

    fn into_iter(self) -> Self::IntoIter {
        self.polygons.iter()
    }
}

impl IntoIterator for Shape {
    type Item = Polygon;
    type IntoIter = std::vec::IntoIter<Polygon>;

    fn into_iter(self) -> Self::IntoIter {
        self.polygons.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(x0: i64, y0: i64, size: i64) -> Polygon {
        Polygon::from(vec![
            (x0, y0),
            (x0 + size, y0),
            (x0 + size, y0 + size),
            (x0, y0 + size),
        ])
    }

    #[test]
    fn test_area_is_signed_sum() {
        let mut hole = square(25, 25, 50);
        hole.reverse();
        let shape = Shape::from(vec![square(0, 0, 100), hole]);
        assert!((shape.area() - (10_000.0 - 2_500.0)).abs() < f64::EPSILON);
    }

    #[test]
    fn test_bounds() {
        let shape = Shape::from(vec![square(0, 0, 10), square(100, 100, 10)]);
        let b = shape.bounds();
        assert_eq!(b.min, Point2::new(0, 0));
        assert_eq!(b.max, Point2::new(110, 110));
    }

    #[test]
    fn test_add_and_point_count() {
        let mut a = Shape::from(square(0, 0, 10));
        let b = Shape::from(square(20, 20, 10));
        a.add(&b);
        assert_eq!(a.len(), 2);
        assert_eq!(a.point_count(), 8);
    }

    #[test]
    fn test_translate() {
        let mut shape = Shape::from(square(0, 0, 10));
        shape.translate(Point2::new(5, 5));
        assert_eq!(shape[0].points[0], Point2::new(5, 5));
    }
}
