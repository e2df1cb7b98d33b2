//! Bridge to the Clipper2 clipping primitive.
//!
//! All conversions between fixed-point [`Shape`] data and the backend's
//! path representation live here, so the rest of the crate never sees a
//! floating-point coordinate from the clipping side.

use poly_types::{Coord, Point2, Polygon};

use crate::boolean::FillRule;
use crate::error::{ShapeError, ShapeResult};
use crate::shape::Shape;

/// The boolean operation to delegate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ClipOp {
    Union,
    Intersection,
    Difference,
    Xor,
}

/// Convert a shape to backend paths, skipping degenerate polygons.
///
/// Unit coordinates pass through the f64 interface losslessly for any
/// geometry within a few kilometers of the origin.
pub(crate) fn shape_to_paths(shape: &Shape) -> Vec<Vec<(f64, f64)>> {
    shape
        .iter()
        .filter(|poly| !poly.is_degenerate())
        .map(polygon_to_path)
        .collect()
}

#[allow(clippy::cast_precision_loss)]
pub(crate) fn polygon_to_path(poly: &Polygon) -> Vec<(f64, f64)> {
    poly.iter().map(|p| (p.x as f64, p.y as f64)).collect()
}

/// Convert backend paths back to a shape, rounding to unit coordinates
/// and dropping degenerate output.
pub(crate) fn paths_to_shape(paths: Vec<Vec<(f64, f64)>>) -> Shape {
    paths
        .into_iter()
        .filter(|path| path.len() >= 3)
        .map(|path| {
            Polygon::new(
                path.into_iter()
                    .map(|(x, y)| Point2::new(round_coord(x), round_coord(y)))
                    .collect(),
            )
        })
        .collect()
}

#[allow(clippy::cast_possible_truncation)]
fn round_coord(v: f64) -> Coord {
    v.round() as Coord
}

fn to_backend_fill(fill: FillRule) -> clipper2::FillRule {
    match fill {
        FillRule::EvenOdd => clipper2::FillRule::EvenOdd,
        FillRule::NonZero => clipper2::FillRule::NonZero,
        FillRule::Positive => clipper2::FillRule::Positive,
    }
}

/// Run one boolean operation against the backend.
///
/// For [`ClipOp::Union`] the clip shape (if any) is merged into the
/// subject list; Clipper2 treats union as a single-set operation.
pub(crate) fn boolean_op(
    op: ClipOp,
    subject: &Shape,
    clip: Option<&Shape>,
    fill: FillRule,
) -> ShapeResult<Shape> {
    let mut subject_paths = shape_to_paths(subject);
    let mut clip_paths = clip.map(shape_to_paths).unwrap_or_default();
    let backend_fill = to_backend_fill(fill);

    if op == ClipOp::Union {
        subject_paths.append(&mut clip_paths);
    }
    if subject_paths.is_empty() && clip_paths.is_empty() {
        return Ok(Shape::new());
    }

    let result = match op {
        ClipOp::Union => clipper2::union::<clipper2::Centi>(
            subject_paths,
            Vec::<Vec<(f64, f64)>>::new(),
            backend_fill,
        ),
        ClipOp::Intersection => {
            clipper2::intersect::<clipper2::Centi>(subject_paths, clip_paths, backend_fill)
        }
        ClipOp::Difference => {
            clipper2::difference::<clipper2::Centi>(subject_paths, clip_paths, backend_fill)
        }
        ClipOp::Xor => clipper2::xor::<clipper2::Centi>(subject_paths, clip_paths, backend_fill),
    }
    .map_err(|e| ShapeError::ClipFailed {
        details: format!("{e:?}"),
    })?;

    let paths: Vec<Vec<(f64, f64)>> = result.into();
    Ok(paths_to_shape(paths))
}

/// Offset all closed paths of a shape by `delta` units.
pub(crate) fn inflate_paths(
    shape: &Shape,
    delta: f64,
    join_type: clipper2::JoinType,
) -> Shape {
    let paths = shape_to_paths(shape);
    if paths.is_empty() {
        return Shape::new();
    }
    let paths: clipper2::Paths<clipper2::Centi> = paths.into();
    let result = clipper2::inflate(paths, delta, join_type, clipper2::EndType::Polygon, 2.0);
    let out: Vec<Vec<(f64, f64)>> = result.into();
    paths_to_shape(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degenerate_polygons_are_skipped() {
        let shape = Shape::from(vec![
            Polygon::from(vec![(0, 0), (10, 0)]),
            Polygon::from(vec![(0, 0), (10, 0), (10, 10)]),
        ]);
        let paths = shape_to_paths(&shape);
        assert_eq!(paths.len(), 1);
    }

    #[test]
    fn test_paths_round_trip_exact() {
        let shape = Shape::from(Polygon::from(vec![(0, 0), (1_000_000, 0), (0, 1_000_000)]));
        let back = paths_to_shape(shape_to_paths(&shape));
        assert_eq!(back, shape);
    }

    #[test]
    fn test_union_of_nothing_is_empty() {
        let out = boolean_op(ClipOp::Union, &Shape::new(), None, FillRule::NonZero);
        assert!(out.is_ok_and(|s| s.is_empty()));
    }
}
