//! Stitching open slicer fragments into closed polygons.
//!
//! The slicer emits open polylines where a layer's cross-section failed
//! to close, usually because the mesh has small holes. Endpoints of
//! different fragments then lie almost on top of each other; chaining
//! fragments whose endpoints are within a line-width tolerance recovers
//! the intended loops.

use poly_shape::Shape;
use poly_types::{Coord, OpenPolyline};

/// Joint vertices closer than this are merged into one; keeping both
/// would create a micro-edge that later offsets choke on.
const SNAP_DISTANCE: Coord = 10;

/// Outcome of one stitching pass.
#[derive(Debug, Clone, Default)]
pub struct StitchResult {
    /// Chains that closed onto themselves, promoted to polygons.
    pub closed: Shape,
    /// Chains that stayed open.
    pub remaining: Vec<OpenPolyline>,
}

/// Join fragments whose endpoints lie within `stitch_distance` units.
///
/// Greedy chaining: each chain grows from its tail end toward the
/// nearest unused fragment endpoint, reversing fragments as needed, until
/// no fragment is in reach. A finished chain whose own endpoints are
/// within the tolerance (and which has at least 3 vertices) is closed
/// into a polygon; the rest remain open. Joint vertices within the snap
/// distance collapse to one, and fragments with fewer than 2 points are
/// discarded.
#[must_use]
pub fn stitch_polylines(fragments: Vec<OpenPolyline>, stitch_distance: Coord) -> StitchResult {
    let limit2 = i128::from(stitch_distance) * i128::from(stitch_distance);
    let mut pool: Vec<Option<OpenPolyline>> = fragments
        .into_iter()
        .map(|f| (f.len() >= 2).then_some(f))
        .collect();
    let mut result = StitchResult::default();

    for start in 0..pool.len() {
        let Some(mut chain) = pool[start].take() else {
            continue;
        };

        loop {
            let Some(tail) = chain.last() else { break };
            // Nearest unused fragment endpoint to the chain's tail.
            let mut best: Option<(usize, bool, i128)> = None;
            for (idx, slot) in pool.iter().enumerate() {
                let Some(frag) = slot else { continue };
                let (Some(head), Some(end)) = (frag.first(), frag.last()) else {
                    continue;
                };
                let d_forward = (head - tail).norm_squared();
                let d_reversed = (end - tail).norm_squared();
                let (reversed, d) = if d_forward <= d_reversed {
                    (false, d_forward)
                } else {
                    (true, d_reversed)
                };
                if d <= limit2 && best.is_none_or(|(_, _, best_d)| d < best_d) {
                    best = Some((idx, reversed, d));
                }
            }

            let Some((idx, reversed, _)) = best else { break };
            let Some(mut frag) = pool[idx].take() else {
                break;
            };
            if reversed {
                frag.reverse();
            }
            // Merge near-coincident joints into one vertex.
            let mut points = frag.points.into_iter();
            if joint_snaps(&chain, points.as_slice()) {
                points.next();
            }
            chain.points.extend(points);
        }

        finish_chain(chain, limit2, &mut result);
    }
    result
}

fn joint_snaps(chain: &OpenPolyline, frag_points: &[poly_types::Point2]) -> bool {
    match (chain.last(), frag_points.first()) {
        (Some(tail), Some(&head)) => {
            (head - tail).norm_squared() <= i128::from(SNAP_DISTANCE) * i128::from(SNAP_DISTANCE)
        }
        _ => false,
    }
}

fn finish_chain(chain: OpenPolyline, limit2: i128, result: &mut StitchResult) {
    let closes = match (chain.first(), chain.last()) {
        (Some(head), Some(tail)) => chain.len() >= 3 && (tail - head).norm_squared() <= limit2,
        _ => false,
    };
    if closes {
        let polygon = chain.into_polygon();
        if !polygon.is_degenerate() {
            result.closed.push(polygon);
            return;
        }
        // Closed but degenerate: nothing worth keeping.
        return;
    }
    result.remaining.push(chain);
}

#[cfg(test)]
mod tests {
    use super::*;
    use poly_types::Point2;

    fn line(pts: &[(i64, i64)]) -> OpenPolyline {
        OpenPolyline::from(pts.iter().map(|&(x, y)| Point2::new(x, y)).collect::<Vec<_>>())
    }

    #[test]
    fn test_two_halves_close_into_square() {
        // Two half-square fragments with endpoints 4 units apart.
        let fragments = vec![
            line(&[(0, 0), (1000, 0), (1000, 1000)]),
            line(&[(996, 1000), (0, 1000), (0, 4)]),
        ];
        let result = stitch_polylines(fragments, 10);
        assert_eq!(result.closed.len(), 1);
        assert!(result.remaining.is_empty());
        assert!((result.closed.area() - 1_000_000.0).abs() < 10_000.0);
    }

    #[test]
    fn test_reversed_fragment_is_flipped() {
        let fragments = vec![
            line(&[(0, 0), (1000, 0), (1000, 1000)]),
            // Same second half, but traversed the other way round.
            line(&[(0, 4), (0, 1000), (996, 1000)]),
        ];
        let result = stitch_polylines(fragments, 10);
        assert_eq!(result.closed.len(), 1);
        assert!(result.remaining.is_empty());
    }

    #[test]
    fn test_far_fragments_stay_open() {
        let fragments = vec![
            line(&[(0, 0), (1000, 0)]),
            line(&[(5000, 5000), (6000, 5000)]),
        ];
        let result = stitch_polylines(fragments, 10);
        assert!(result.closed.is_empty());
        assert_eq!(result.remaining.len(), 2);
    }

    #[test]
    fn test_exact_joint_vertex_is_merged() {
        let fragments = vec![
            line(&[(0, 0), (1000, 0)]),
            line(&[(1000, 0), (1000, 1000), (0, 1000), (0, 0)]),
        ];
        let result = stitch_polylines(fragments, 10);
        assert_eq!(result.closed.len(), 1);
        assert_eq!(result.closed[0].len(), 4);
    }

    #[test]
    fn test_single_point_fragments_are_dropped() {
        let fragments = vec![line(&[(0, 0)]), OpenPolyline::default()];
        let result = stitch_polylines(fragments, 10);
        assert!(result.closed.is_empty());
        assert!(result.remaining.is_empty());
    }

    #[test]
    fn test_open_chain_grows_but_does_not_close() {
        let fragments = vec![
            line(&[(0, 0), (1000, 0)]),
            line(&[(1004, 0), (2000, 0)]),
        ];
        let result = stitch_polylines(fragments, 10);
        assert!(result.closed.is_empty());
        assert_eq!(result.remaining.len(), 1);
        // The near-coincident joint vertex snaps away.
        assert_eq!(result.remaining[0].len(), 3);
    }
}
