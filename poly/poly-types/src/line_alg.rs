//! Exact 2D orientation and ray-casting predicates.
//!
//! All predicates widen to `i128` internally so they are exact for the
//! full `i64` coordinate range.

use crate::point::{Coord, Point2};

/// Orientation of point `p` relative to the directed line `a -> b`.
///
/// Returns a positive value when `p` lies to the left of the line,
/// negative to the right, and zero when collinear.
#[inline]
#[must_use]
pub fn point_is_left_of_line(p: Point2, a: Point2, b: Point2) -> i128 {
    (b - a).cross(p - a)
}

/// Outcome of casting a horizontal ray from a point towards +X against one
/// polygon edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RayHit {
    /// The ray strictly crosses the edge at the given X coordinate.
    Cross {
        /// X coordinate of the crossing (>= the ray origin's X).
        x: Coord,
    },
    /// The ray origin lies exactly on the edge.
    OnBoundary,
    /// The ray does not cross this edge.
    Miss,
}

/// Cast a horizontal ray from `p` towards +X against the segment
/// `p0 -> p1`.
///
/// Uses the half-open rule (an edge spans the ray iff exactly one endpoint
/// is strictly above `p.y`), so a ray passing through a shared vertex of
/// two chained edges is counted exactly once.
#[must_use]
pub fn rightward_ray_hit(p: Point2, p0: Point2, p1: Point2) -> RayHit {
    // Exact on-segment test first: boundary membership must win over
    // crossing parity.
    let d = p1 - p0;
    if d.cross(p - p0) == 0
        && p.x >= p0.x.min(p1.x)
        && p.x <= p0.x.max(p1.x)
        && p.y >= p0.y.min(p1.y)
        && p.y <= p0.y.max(p1.y)
    {
        return RayHit::OnBoundary;
    }

    if (p0.y > p.y) == (p1.y > p.y) {
        return RayHit::Miss;
    }

    // X of the intersection with the horizontal line through p, truncated
    // like the fixed-point convention everywhere else.
    let x = if p1.y == p0.y {
        p0.x
    } else {
        let num = i128::from(p1.x - p0.x) * i128::from(p.y - p0.y);
        #[allow(clippy::cast_possible_truncation)]
        let x = p0.x + (num / i128::from(p1.y - p0.y)) as Coord;
        x
    };

    if x > p.x {
        RayHit::Cross { x }
    } else if x == p.x {
        // Numerically on the edge; treated as boundary, not parity.
        RayHit::OnBoundary
    } else {
        RayHit::Miss
    }
}
