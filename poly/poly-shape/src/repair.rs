//! Robustness repairs for marginal geometry.

use std::collections::HashSet;

use geo::BooleanOps;
use poly_types::{Containment, Coord, Point2, Polygon};

use crate::boolean::FillRule;
use crate::error::{ShapeError, ShapeResult};
use crate::shape::Shape;
use crate::smooth::DEFAULT_COLINEAR_DEVIATION;

/// Diamond cutout half-width used by manifold enforcement.
const MANIFOLD_DOT: Coord = 5;

/// Edges shorter than this are skipped by the variable offset; their
/// perpendicular direction is numerically meaningless.
const OFFSET_MIN_EDGE: i128 = 10 * 10;

impl Shape {
    /// Cut a tiny diamond out of every location where two vertices
    /// coincide, so that contours touching in a single point become
    /// properly separated.
    ///
    /// A vertex shared between two contours (or visited twice by one) is
    /// a non-manifold pinch that downstream wall generation cannot order
    /// consistently.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::ClipFailed`] if the backend rejects the
    /// geometry while subtracting the cutouts.
    pub fn ensure_manifold(&mut self) -> ShapeResult<()> {
        let mut seen: HashSet<Point2> = HashSet::new();
        let mut duplicates = Vec::new();
        for poly in self.iter() {
            for &p in poly.iter() {
                if !seen.insert(p) {
                    duplicates.push(p);
                }
            }
        }
        if duplicates.is_empty() {
            return Ok(());
        }

        let cutouts: Shape = duplicates
            .into_iter()
            .map(|p| {
                Polygon::from(vec![
                    p + Point2::new(0, MANIFOLD_DOT),
                    p + Point2::new(MANIFOLD_DOT, 0),
                    p + Point2::new(0, -MANIFOLD_DOT),
                    p + Point2::new(-MANIFOLD_DOT, 0),
                ])
            })
            .collect();
        *self = self.difference(&cutouts)?;
        Ok(())
    }

    /// Drop polygons enclosing less than `min_area_mm2` square
    /// millimeters.
    ///
    /// With `remove_holes` every small polygon goes, holes included,
    /// leaving solid filled regions. Without it only small outlines are
    /// dropped; a small hole is removed just when its first vertex lies
    /// strictly inside one of the dropped outlines, since a hole whose
    /// outline survived still shapes the part.
    pub fn remove_small_areas(&mut self, min_area_mm2: f64, remove_holes: bool) {
        if remove_holes {
            self.retain(|poly| poly.area_mm2().abs() >= min_area_mm2);
            return;
        }

        let mut kept = Vec::new();
        let mut dropped_outlines = Vec::new();
        let mut small_holes = Vec::new();
        for poly in self.take_polygons() {
            let area = poly.area_mm2();
            if area.abs() >= min_area_mm2 {
                kept.push(poly);
            } else if area >= 0.0 {
                dropped_outlines.push(poly);
            } else {
                small_holes.push(poly);
            }
        }
        for hole in small_holes {
            // Strict containment: a first vertex exactly on a dropped
            // outline's boundary does not orphan the hole.
            let orphaned = hole.points.first().is_some_and(|&first| {
                dropped_outlines
                    .iter()
                    .any(|outline| outline.contains_point(first) == Containment::Inside)
            });
            if !orphaned {
                kept.push(hole);
            }
        }
        *self = Self::from(kept);
    }

    /// Resolve vertices that sit almost exactly on another edge of the
    /// same part.
    ///
    /// Such near-degenerate pinches survive an ordinary clipping pass
    /// unchanged but destabilize later offsets. Downscaling by 4 snaps
    /// them together; re-running the union through the independent `geo`
    /// backend then resolves the now-exact intersections, and upscaling
    /// restores the coordinate range with a worst-case error of a few
    /// units.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::ClipFailed`] if either backend rejects the
    /// geometry.
    pub fn remove_near_self_intersections(&mut self) -> ShapeResult<()> {
        let parts = self.split_into_parts(false)?;
        let mut merged: geo::MultiPolygon<f64> = geo::MultiPolygon::new(Vec::new());
        for part in &parts {
            let Some(outline) = part.outline() else {
                continue;
            };
            let holes = part.holes().iter().map(ring_down).collect();
            let part_mp = geo::MultiPolygon::new(vec![geo::Polygon::new(ring_down(outline), holes)]);
            merged = merged.union(&part_mp);
        }

        let mut out = Shape::new();
        for poly in &merged {
            push_ring_up(poly.exterior(), &mut out);
            for interior in poly.interiors() {
                push_ring_up(interior, &mut out);
            }
        }
        *self = out.simplified(FillRule::NonZero)?;
        self.remove_colinear_edges(DEFAULT_COLINEAR_DEVIATION);
        Ok(())
    }

    /// Offset each vertex individually: vertex `i` of the flattened
    /// vertex sequence moves perpendicular to its incoming edge by
    /// `offset_dists[i]` units.
    ///
    /// Each edge becomes a quad spanned by the two displaced endpoints;
    /// the quads are then resolved under the positive fill rule into a
    /// clean shape. Edges shorter than 10 units are skipped. Unlike
    /// [`Shape::offset`] this supports a different distance per vertex,
    /// at the cost of corner quality.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::OffsetCountMismatch`] when `offset_dists`
    /// does not hold exactly one distance per vertex, and
    /// [`ShapeError::ClipFailed`] if the backend rejects the resolving
    /// pass.
    pub fn offset_multi(&self, offset_dists: &[Coord]) -> ShapeResult<Self> {
        if offset_dists.len() != self.point_count() {
            return Err(ShapeError::OffsetCountMismatch {
                given: offset_dists.len(),
                expected: self.point_count(),
            });
        }

        let mut strips = Shape::new();
        let mut i = 0;
        for poly in self.iter() {
            let mut strip = Vec::new();
            if !poly.is_empty() {
                let mut prev_p = poly.points[poly.len() - 1];
                let mut prev_dist = offset_dists[i + poly.len() - 1];
                for &p in poly.iter() {
                    let offset_dist = offset_dists[i];
                    let vec_dir = prev_p - p;
                    if vec_dir.norm_squared() > OFFSET_MIN_EDGE {
                        strip.push(prev_p + vec_dir.scaled_to(prev_dist).turned_90_ccw());
                        strip.push(p + vec_dir.scaled_to(offset_dist).turned_90_ccw());
                    }
                    prev_p = p;
                    prev_dist = offset_dist;
                    i += 1;
                }
            }
            strips.push(Polygon::new(strip));
        }
        strips.simplified(FillRule::Positive)
    }
}

/// Convert a fixed-point ring to a `geo` ring at quarter scale.
#[allow(clippy::cast_precision_loss)]
fn ring_down(poly: &Polygon) -> geo::LineString<f64> {
    geo::LineString::from(
        poly.iter()
            .map(|p| ((p.x / 4) as f64, (p.y / 4) as f64))
            .collect::<Vec<_>>(),
    )
}

/// Convert a `geo` ring back to fixed-point at full scale, skipping the
/// duplicated closing coordinate.
#[allow(clippy::cast_possible_truncation)]
fn push_ring_up(ring: &geo::LineString<f64>, out: &mut Shape) {
    let coords = &ring.0;
    let closed = coords.len() > 1 && coords.first() == coords.last();
    let take = if closed { coords.len() - 1 } else { coords.len() };
    out.push(Polygon::new(
        coords[..take]
            .iter()
            .map(|c| Point2::new((c.x * 4.0).round() as Coord, (c.y * 4.0).round() as Coord))
            .collect(),
    ));
}
