//! Exact and approximate convex hulls.

use poly_types::{Coord, Point2, Polygon, UNITS_PER_MM};

use crate::error::ShapeResult;
use crate::offset::JoinKind;
use crate::shape::Shape;

/// Overshoot used by the approximate hull: large enough that the rounded
/// offsets of all contours merge into one blob.
const HULL_OVERSHOOT: Coord = 100 * UNITS_PER_MM;

impl Shape {
    /// An approximation of the convex hull, computed by offsetting every
    /// contour outward by a large round margin, merging the blobs, and
    /// offsetting back.
    ///
    /// Concavities narrower than twice the overshoot (100 mm) are
    /// swallowed; the result is convex for any realistically sized input
    /// but carries the arc tessellation of the round offsets. Use
    /// [`Shape::make_convex`] for an exact hull. `extra_outset` is added
    /// to the return offset, growing the hull outward.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ShapeError::ClipFailed`] if the backend rejects
    /// the geometry during the merging union.
    pub fn approx_convex_hull(&self, extra_outset: Coord) -> ShapeResult<Self> {
        let mut blobs = Self::new();
        for poly in self.iter() {
            blobs.add(&Self::from(poly.clone()).offset(HULL_OVERSHOOT, JoinKind::Round));
        }
        Ok(blobs
            .union_all()?
            .offset(-HULL_OVERSHOOT + extra_outset, JoinKind::Round))
    }

    /// Replace the shape with the exact convex hull of all its vertices,
    /// as a single counter-clockwise polygon with no collinear vertices.
    ///
    /// Shapes with fewer than 3 vertices are left unchanged.
    pub fn make_convex(&mut self) {
        let mut points: Vec<Point2> = self.iter().flat_map(Polygon::iter).copied().collect();
        if points.len() < 3 {
            return;
        }
        points.sort_unstable();
        points.dedup();
        if points.len() < 3 {
            return;
        }

        // Andrew's monotone chain. Non-left turns are popped, so collinear
        // runs collapse to their endpoints. The two chains are built
        // independently; each ends at the other's starting point, so the
        // last vertex of each is dropped before joining.
        let mut lower = half_hull(points.iter().copied());
        let mut upper = half_hull(points.iter().rev().copied());
        lower.pop();
        upper.pop();
        lower.append(&mut upper);

        *self = Self::from(Polygon::new(lower));
    }
}

fn half_hull(points: impl Iterator<Item = Point2>) -> Vec<Point2> {
    let mut chain: Vec<Point2> = Vec::new();
    for p in points {
        while chain.len() >= 2 {
            let a = chain[chain.len() - 2];
            let b = chain[chain.len() - 1];
            if (b - a).cross(p - b) <= 0 {
                chain.pop();
            } else {
                break;
            }
        }
        chain.push(p);
    }
    chain
}
