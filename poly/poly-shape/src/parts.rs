//! Part types produced by nesting decomposition.

use std::ops::Deref;

use poly_types::Polygon;

use crate::shape::Shape;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A shape known to be one connected part: the first polygon is the
/// outline and every following polygon is a hole directly inside it.
///
/// The invariant is established by [`Shape::split_into_parts`]
/// (or by construction from a bare outline); it is positional, not
/// re-checked on access.
///
/// [`Shape::split_into_parts`]: crate::Shape::split_into_parts
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SingleShape {
    shape: Shape,
}

impl SingleShape {
    /// Wrap a shape whose polygons are already in outline-then-holes
    /// order.
    #[must_use]
    pub fn from_shape(shape: Shape) -> Self {
        Self { shape }
    }

    /// A part consisting of a single outline with no holes.
    #[must_use]
    pub fn from_outline(outline: Polygon) -> Self {
        Self {
            shape: Shape::from(outline),
        }
    }

    /// The outline polygon, or `None` for an empty part.
    #[must_use]
    pub fn outline(&self) -> Option<&Polygon> {
        self.shape.polygons().first()
    }

    /// The hole polygons.
    #[must_use]
    pub fn holes(&self) -> &[Polygon] {
        if self.shape.is_empty() {
            &[]
        } else {
            &self.shape.polygons()[1..]
        }
    }

    /// Give up the part structure and return the plain shape.
    #[must_use]
    pub fn into_shape(self) -> Shape {
        self.shape
    }
}

impl Deref for SingleShape {
    type Target = Shape;

    fn deref(&self) -> &Shape {
        &self.shape
    }
}

impl AsRef<Shape> for SingleShape {
    fn as_ref(&self) -> &Shape {
        &self.shape
    }
}

/// Index view over a shape grouped into parts.
///
/// Produced by [`Shape::split_into_parts_view`]: each entry lists the
/// polygon indices of one part (outline first, then its holes) into the
/// reordered shape the view was built against.
///
/// The view stores bare indices. Any mutation of the underlying shape's
/// polygon list invalidates it; rebuild the view after such edits.
///
/// [`Shape::split_into_parts_view`]: crate::Shape::split_into_parts_view
#[derive(Debug, Clone, Default)]
pub struct PartsView {
    parts: Vec<Vec<usize>>,
}

impl PartsView {
    /// Number of parts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    /// Whether the view holds no parts.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// The polygon indices of part `part`, outline first.
    ///
    /// # Panics
    ///
    /// Panics if `part` is out of bounds.
    #[must_use]
    pub fn part_indices(&self, part: usize) -> &[usize] {
        &self.parts[part]
    }

    /// The part containing polygon index `polygon_index`, if any.
    #[must_use]
    pub fn part_containing(&self, polygon_index: usize) -> Option<usize> {
        self.parts
            .iter()
            .position(|indices| indices.contains(&polygon_index))
    }

    /// Materialize part `part` from the shape the view was built against.
    ///
    /// # Panics
    ///
    /// Panics if `part` is out of bounds or the view is stale for
    /// `shape`.
    #[must_use]
    pub fn assemble_part(&self, shape: &Shape, part: usize) -> SingleShape {
        SingleShape::from_shape(
            self.parts[part]
                .iter()
                .map(|&i| shape[i].clone())
                .collect(),
        )
    }

    /// Iterate over the per-part index lists.
    pub fn iter(&self) -> std::slice::Iter<'_, Vec<usize>> {
        self.parts.iter()
    }

    pub(crate) fn start_part(&mut self) -> usize {
        self.parts.push(Vec::new());
        self.parts.len() - 1
    }

    pub(crate) fn push_index(&mut self, part: usize, polygon_index: usize) {
        self.parts[part].push(polygon_index);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use poly_types::Polygon;

    fn square(x0: i64, y0: i64, size: i64) -> Polygon {
        Polygon::from(vec![
            (x0, y0),
            (x0 + size, y0),
            (x0 + size, y0 + size),
            (x0, y0 + size),
        ])
    }

    #[test]
    fn test_single_shape_accessors() {
        let mut hole = square(10, 10, 10);
        hole.reverse();
        let part = SingleShape::from_shape(Shape::from(vec![square(0, 0, 100), hole.clone()]));
        assert_eq!(part.outline(), Some(&square(0, 0, 100)));
        assert_eq!(part.holes(), &[hole]);
        assert_eq!(part.len(), 2);
    }

    #[test]
    fn test_empty_part() {
        let part = SingleShape::default();
        assert_eq!(part.outline(), None);
        assert!(part.holes().is_empty());
    }

    #[test]
    fn test_parts_view_split_reorders_shape() {
        // Two separate squares plus a hole in the first; after the split
        // each part's polygons are contiguous.
        let mut hole = square(10, 10, 30);
        hole.reverse();
        let mut shape = Shape::from(vec![square(0, 0, 100), square(300, 0, 50), hole]);
        let view = shape.split_into_parts_view(false).unwrap();

        assert_eq!(view.len(), 2);
        let with_hole = (0..view.len())
            .find(|&p| view.part_indices(p).len() == 2)
            .unwrap();
        let part = view.assemble_part(&shape, with_hole);
        assert_eq!(part.holes().len(), 1);
        assert!(part.area() > 0.0);
        assert_eq!(
            view.part_containing(view.part_indices(with_hole)[1]),
            Some(with_hole)
        );
    }
}
