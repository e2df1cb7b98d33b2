//! Vertex-reduction smoothing.
//!
//! All three variants share the same guards: polygons under 4 vertices
//! pass through or are skipped untouched (removing anything from a
//! triangle destroys it), and any polygon reduced below 3 vertices is
//! discarded as degenerate.

use poly_types::{Coord, Point2, Polygon};

use crate::shape::Shape;

/// Default angular tolerance (radians) below which an edge counts as
/// collinear with its neighbor.
pub(crate) const DEFAULT_COLINEAR_DEVIATION: f64 = 0.0005;

impl Shape {
    /// Remove short zigzag wiggles: a segment shorter than
    /// `remove_length` whose endpoints turn in opposite directions is
    /// collapsed to its midpoint.
    ///
    /// Triangles pass through unchanged; polygons reduced below 3
    /// vertices are dropped.
    #[must_use]
    pub fn smooth(&self, remove_length: Coord) -> Self {
        let mut ret = Self::new();
        for poly in self.iter() {
            if poly.is_degenerate() {
                continue;
            }
            if poly.len() == 3 {
                ret.push(poly.clone());
                continue;
            }
            let smoothed = smooth_polygon(poly, remove_length);
            if !smoothed.is_degenerate() {
                ret.push(smoothed);
            }
        }
        ret
    }

    /// Cut sharp convex corners with a short outward-facing shortcut.
    ///
    /// A corner is cut when it is convex with respect to the filled side
    /// and its interior angle is below `max_angle_deg`; the replacement
    /// chord is at most `shortcut_length` units long and never consumes
    /// more than half of either adjacent edge. Concave corners are left
    /// alone so the result always covers the input region.
    #[must_use]
    pub fn smooth_outward(&self, max_angle_deg: f64, shortcut_length: Coord) -> Self {
        let mut ret = Self::new();
        for poly in self.iter() {
            if poly.is_degenerate() {
                continue;
            }
            if poly.len() == 3 {
                ret.push(poly.clone());
                continue;
            }
            let smoothed = smooth_outward_polygon(poly, max_angle_deg, shortcut_length);
            if !smoothed.is_degenerate() {
                ret.push(smoothed);
            }
        }
        ret
    }

    /// Distance-based decimation: a vertex whose two incident edges are
    /// both shorter than `remove_length` is removed, together with the
    /// vertex after it, so removal never cascades along a dense run.
    ///
    /// Polygons with area below `min_area` square units or at most 5
    /// vertices pass through unchanged; decimating those any further
    /// would leave nothing worth keeping.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn smooth2(&self, remove_length: Coord, min_area: Coord) -> Self {
        let mut ret = Self::new();
        for poly in self.iter() {
            if poly.is_empty() {
                continue;
            }
            if poly.area() < min_area as f64 || poly.len() <= 5 {
                ret.push(poly.clone());
                continue;
            }
            ret.push(smooth2_polygon(poly, remove_length));
        }
        ret
    }

    /// Remove vertices whose incident edges deviate from a straight line
    /// by less than `max_deviation_angle` radians; polygons left with
    /// fewer than 3 vertices are dropped.
    pub fn remove_colinear_edges(&mut self, max_deviation_angle: f64) {
        for poly in self.iter_mut() {
            poly.remove_colinear_edges(max_deviation_angle);
        }
        self.retain(|poly| !poly.is_degenerate());
    }
}

fn shorter_than(v: Point2, len: Coord) -> bool {
    v.norm_squared() < i128::from(len) * i128::from(len)
}

fn smooth_polygon(poly: &Polygon, remove_length: Coord) -> Polygon {
    let n = poly.len();
    let mut out = Vec::with_capacity(n);
    let mut idx = 0;
    while idx < n {
        let prev = poly.points[(idx + n - 1) % n];
        let cur = poly.points[idx];
        let next = poly.points[(idx + 1) % n];
        let after = poly.points[(idx + 2) % n];

        // A wiggle: a short middle segment whose two corners turn in
        // opposite directions. Collapsing it to the midpoint removes the
        // artifact without shifting the outline.
        let turn_in = (cur - prev).cross(next - cur);
        let turn_out = (next - cur).cross(after - next);
        if shorter_than(next - cur, remove_length)
            && turn_in.signum() != 0
            && turn_in.signum() == -turn_out.signum()
        {
            let mid = Point2::new((cur.x + next.x) / 2, (cur.y + next.y) / 2);
            out.push(mid);
            idx += 2;
        } else {
            out.push(cur);
            idx += 1;
        }
    }
    Polygon::new(out)
}

fn smooth2_polygon(poly: &Polygon, remove_length: Coord) -> Polygon {
    let n = poly.len();
    let mut out = Vec::with_capacity(n);
    out.push(poly.points[0]);
    let mut idx = 1;
    while idx < n {
        let last = poly.points[idx - 1];
        let now = poly.points[idx];
        let next = poly.points[(idx + 1) % n];
        if shorter_than(now - last, remove_length) && shorter_than(next - now, remove_length) {
            // Skip this vertex and the next, so one removal cannot
            // trigger a chain of removals along a finely sampled curve.
            idx += 1;
            if idx < n {
                out.push(poly.points[idx]);
            }
        } else {
            out.push(now);
        }
        idx += 1;
    }
    Polygon::new(out)
}

#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
fn smooth_outward_polygon(poly: &Polygon, max_angle_deg: f64, shortcut_length: Coord) -> Polygon {
    let n = poly.len();
    // Convexity is judged against the filled side, which flips for holes.
    let orientation: i128 = if poly.is_ccw() { 1 } else { -1 };
    let mut out = Vec::with_capacity(n * 2);

    for idx in 0..n {
        let prev = poly.points[(idx + n - 1) % n];
        let cur = poly.points[idx];
        let next = poly.points[(idx + 1) % n];

        let incoming = cur - prev;
        let outgoing = next - cur;
        let convex = incoming.cross(outgoing).signum() == orientation.signum();
        let angle = corner_angle(incoming, outgoing);
        if !convex || angle >= max_angle_deg.to_radians() {
            out.push(cur);
            continue;
        }

        // Symmetric truncation: back off along both edges so the cut
        // chord has length shortcut_length, clamped to half of either
        // edge so neighboring cuts cannot collide.
        let half_angle = angle / 2.0;
        let backoff = if half_angle.sin() < 1e-9 {
            shortcut_length as f64
        } else {
            shortcut_length as f64 / (2.0 * half_angle.sin())
        };
        let backoff = backoff
            .min(incoming.length() / 2.0)
            .min(outgoing.length() / 2.0)
            .round() as Coord;
        if backoff == 0 {
            out.push(cur);
            continue;
        }
        out.push(cur - incoming.scaled_to(backoff));
        out.push(cur + outgoing.scaled_to(backoff));
    }
    Polygon::new(out)
}

/// Interior angle at a corner, in radians: pi for a straight-through
/// corner, approaching 0 for a hairpin.
fn corner_angle(incoming: Point2, outgoing: Point2) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    let turn = (incoming.cross(outgoing) as f64).atan2(incoming.dot(outgoing) as f64);
    std::f64::consts::PI - turn.abs()
}
