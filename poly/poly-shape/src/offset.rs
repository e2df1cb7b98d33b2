//! Uniform polygon offsetting.

use poly_types::Coord;

use crate::clip;
use crate::shape::Shape;

/// Corner treatment for offset operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JoinKind {
    /// Chamfer convex corners with a single edge.
    Square,
    /// Approximate convex corners with an arc.
    Round,
    /// Extend edges to their intersection, clamped by the miter limit.
    #[default]
    Miter,
}

impl JoinKind {
    fn to_backend(self) -> clipper2::JoinType {
        match self {
            Self::Square => clipper2::JoinType::Square,
            Self::Round => clipper2::JoinType::Round,
            Self::Miter => clipper2::JoinType::Miter,
        }
    }
}

impl Shape {
    /// Offset every contour outward by `distance` units (inward for a
    /// negative distance). Holes move the opposite way, preserving wall
    /// thickness.
    ///
    /// A zero distance returns a clone; contours shrunk out of existence
    /// disappear from the result.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn offset(&self, distance: Coord, join: JoinKind) -> Self {
        if distance == 0 || self.is_empty() {
            return self.clone();
        }
        clip::inflate_paths(self, distance as f64, join.to_backend())
    }
}
