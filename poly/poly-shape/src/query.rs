//! Containment queries over whole shapes.

use poly_types::line_alg::{rightward_ray_hit, RayHit};
use poly_types::{Coord, Point2, Polygon};

use crate::shape::Shape;

impl Shape {
    /// Even-odd membership of `p` over all polygons together.
    ///
    /// `border_result` is returned verbatim when `p` lies exactly on any
    /// contour.
    #[must_use]
    pub fn inside(&self, p: Point2, border_result: bool) -> bool {
        let mut crossings = 0_usize;
        for poly in self.iter() {
            if poly.is_degenerate() {
                continue;
            }
            let mut prev = poly.points[poly.len() - 1];
            for &cur in poly.iter() {
                match rightward_ray_hit(p, prev, cur) {
                    RayHit::Cross { .. } => crossings += 1,
                    RayHit::OnBoundary => return border_result,
                    RayHit::Miss => {}
                }
                prev = cur;
            }
        }
        crossings % 2 == 1
    }

    /// Find the polygon whose region immediately encloses `p`.
    ///
    /// Each polygon is tested independently by ray parity; among those
    /// with an odd crossing count the one whose nearest rightward crossing
    /// is closest wins, since a nearer boundary means a more deeply nested
    /// contour. If the number of odd-parity polygons is itself even, `p`
    /// is in a hole or outside everything and no index is returned.
    ///
    /// When `p` lies exactly on a contour, that polygon's index is
    /// returned immediately if `border_result` is set; otherwise the
    /// touched edge contributes no crossing and the scan continues, so a
    /// point on one contour that is strictly inside another still finds
    /// the enclosing contour.
    #[must_use]
    pub fn find_inside(&self, p: Point2, border_result: bool) -> Option<usize> {
        if self.is_empty() {
            return None;
        }
        let mut min_x = vec![Coord::MAX; self.len()];
        let mut crossings = vec![0_usize; self.len()];

        for (idx, poly) in self.iter().enumerate() {
            if poly.is_degenerate() {
                continue;
            }
            let mut prev = poly.points[poly.len() - 1];
            for &cur in poly.iter() {
                match rightward_ray_hit(p, prev, cur) {
                    RayHit::Cross { x } => {
                        crossings[idx] += 1;
                        min_x[idx] = min_x[idx].min(x);
                    }
                    RayHit::OnBoundary => {
                        if border_result {
                            return Some(idx);
                        }
                        // A touched edge counts as no crossing.
                    }
                    RayHit::Miss => {}
                }
                prev = cur;
            }
        }

        let mut best: Option<usize> = None;
        let mut best_x = Coord::MAX;
        let mut odd_count = 0_usize;
        for idx in 0..self.len() {
            if crossings[idx] % 2 == 1 {
                odd_count += 1;
                if min_x[idx] < best_x {
                    best_x = min_x[idx];
                    best = Some(idx);
                }
            }
        }
        // An even number of enclosing contours means even-odd parity puts
        // p in unfilled space; the candidate is then meaningless.
        if odd_count % 2 == 0 {
            return None;
        }
        best
    }

    /// Remove every polygon that matches one in `to_remove`.
    ///
    /// Two polygons match when they have the same vertex count and, after
    /// rotational alignment on the vertex nearest this polygon's first
    /// point, every vertex pair lies within `same_distance` units.
    #[must_use]
    pub fn remove_matching(&self, to_remove: &Self, same_distance: Coord) -> Self {
        self.iter()
            .filter(|keep| {
                !to_remove
                    .iter()
                    .any(|rem| polygons_match(keep, rem, same_distance))
            })
            .cloned()
            .collect()
    }
}

fn polygons_match(keep: &Polygon, rem: &Polygon, same_distance: Coord) -> bool {
    if keep.is_empty() || rem.is_empty() || keep.len() != rem.len() {
        return false;
    }
    let limit2 = i128::from(same_distance) * i128::from(same_distance);

    // Align on the candidate vertex closest to our first vertex.
    let first = keep.points[0];
    let mut closest_idx = 0;
    let mut closest_dist2 = i128::MAX;
    for (i, &p) in rem.iter().enumerate() {
        let dist2 = (p - first).norm_squared();
        if dist2 < closest_dist2 {
            closest_dist2 = dist2;
            closest_idx = i;
        }
    }
    if closest_dist2 > limit2 {
        return false;
    }

    keep.iter().enumerate().all(|(i, &p)| {
        let q = rem.points[(closest_idx + i) % rem.len()];
        (q - p).norm_squared() <= limit2
    })
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

    fn cw(mut poly: Polygon) -> Polygon {
        poly.reverse();
        poly
    }

    #[test]
    fn test_inside_with_hole() {
        let shape = Shape::from(vec![square(0, 0, 100), cw(square(25, 25, 50))]);
        assert!(shape.inside(Point2::new(10, 10), false));
        assert!(!shape.inside(Point2::new(50, 50), false)); // in the hole
        assert!(!shape.inside(Point2::new(200, 50), false));
    }

    #[test]
    fn test_inside_border_result() {
        let shape = Shape::from(square(0, 0, 100));
        assert!(shape.inside(Point2::new(0, 50), true));
        assert!(!shape.inside(Point2::new(0, 50), false));
    }

    #[test]
    fn test_find_inside_picks_innermost() {
        // Nested squares: the inner one has the nearer rightward boundary.
        let shape = Shape::from(vec![square(0, 0, 100), square(20, 20, 60)]);
        // A point inside both is inside an even number of contours: the
        // even-odd region there is unfilled.
        assert_eq!(shape.find_inside(Point2::new(50, 50), false), None);
        // A point between the two is only inside the outer square.
        assert_eq!(shape.find_inside(Point2::new(10, 50), false), Some(0));
    }

    #[test]
    fn test_find_inside_on_border() {
        let shape = Shape::from(square(0, 0, 100));
        assert_eq!(shape.find_inside(Point2::new(0, 50), true), Some(0));
        // Without border_result the touched edge is skipped; the far edge
        // still crosses, so the square is found by ordinary parity.
        assert_eq!(shape.find_inside(Point2::new(0, 50), false), Some(0));
    }

    #[test]
    fn test_find_inside_on_border_of_nested_contour() {
        let shape = Shape::from(vec![square(0, 0, 100), square(20, 20, 50)]);
        // On the inner square's right edge, strictly inside the outer.
        let p = Point2::new(70, 50);
        assert_eq!(shape.find_inside(p, true), Some(1));
        // The inner contour drops out (its only rightward hit is the
        // touched edge); the outer one still encloses p.
        assert_eq!(shape.find_inside(p, false), Some(0));
    }

    #[test]
    fn test_find_inside_outside_everything() {
        let shape = Shape::from(square(0, 0, 100));
        assert_eq!(shape.find_inside(Point2::new(500, 500), false), None);
    }

    #[test]
    fn test_remove_matching_with_tolerance() {
        let shape = Shape::from(vec![square(0, 0, 100), square(300, 0, 100)]);
        // Same square, rotated start vertex and nudged by 3 units.
        let candidate = Polygon::from(vec![(103, 0), (103, 100), (3, 100), (3, 0)]);
        let removed = shape.remove_matching(&Shape::from(candidate), 5);
        assert_eq!(removed.len(), 1);
        assert_eq!(removed[0], square(300, 0, 100));

        // Below the tolerance nothing matches.
        let kept = shape.remove_matching(&Shape::from(square(1, 0, 100)), 0);
        assert_eq!(kept.len(), 2);
    }
}
