//! Open-polyline simplification.

use poly_types::{OpenPolyline, Point2};

use crate::settings::SimplifySettings;

/// Decimate polylines under a resolution/deviation budget.
///
/// A vertex is removed when the segment leading to it is shorter than
/// `max_resolution` and skipping it deviates from the original line by at
/// most `max_deviation` units. Endpoints are always kept; polylines left
/// with fewer than 2 points are dropped.
#[must_use]
pub fn simplify_polylines(
    lines: Vec<OpenPolyline>,
    settings: &SimplifySettings,
) -> Vec<OpenPolyline> {
    lines
        .into_iter()
        .filter_map(|line| {
            let simplified = simplify_polyline(line, settings);
            (simplified.len() >= 2).then_some(simplified)
        })
        .collect()
}

fn simplify_polyline(line: OpenPolyline, settings: &SimplifySettings) -> OpenPolyline {
    if line.len() < 3 {
        return line;
    }
    let resolution2 =
        i128::from(settings.max_resolution) * i128::from(settings.max_resolution);

    let mut kept: Vec<Point2> = Vec::with_capacity(line.len());
    kept.push(line.points[0]);
    for idx in 1..line.len() - 1 {
        let last = kept[kept.len() - 1];
        let cur = line.points[idx];
        let next = line.points[idx + 1];
        let short = (cur - last).norm_squared() < resolution2;
        if !(short && within_deviation(last, next, cur, settings.max_deviation)) {
            kept.push(cur);
        }
    }
    kept.push(line.points[line.len() - 1]);
    OpenPolyline::new(kept)
}

/// Whether `p` lies within `max_deviation` units of the segment `a`-`b`,
/// measured perpendicular to the infinite line through them.
fn within_deviation(a: Point2, b: Point2, p: Point2, max_deviation: i64) -> bool {
    let ab = b - a;
    let len2 = ab.norm_squared();
    if len2 == 0 {
        return (p - a).norm_squared() <= i128::from(max_deviation) * i128::from(max_deviation);
    }
    let cross = ab.cross(p - a);
    // dist = |cross| / |ab|; compare squared to stay in integers.
    cross * cross <= i128::from(max_deviation) * i128::from(max_deviation) * len2
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(pts: &[(i64, i64)]) -> OpenPolyline {
        OpenPolyline::from(pts.iter().map(|&(x, y)| Point2::new(x, y)).collect::<Vec<_>>())
    }

    #[test]
    fn test_dense_collinear_run_collapses() {
        let noisy = line(&[(0, 0), (100, 1), (200, 0), (300, 1), (10_000, 0)]);
        let out = simplify_polylines(vec![noisy], &SimplifySettings::default());
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].len(), 2);
        assert_eq!(out[0].first(), Some(Point2::new(0, 0)));
        assert_eq!(out[0].last(), Some(Point2::new(10_000, 0)));
    }

    #[test]
    fn test_large_deviation_is_kept() {
        let bent = line(&[(0, 0), (100, 400), (200, 0)]);
        let out = simplify_polylines(vec![bent], &SimplifySettings::default());
        assert_eq!(out[0].len(), 3);
    }

    #[test]
    fn test_long_segments_are_kept() {
        let coarse = line(&[(0, 0), (10_000, 1), (20_000, 0)]);
        let out = simplify_polylines(vec![coarse], &SimplifySettings::default());
        assert_eq!(out[0].len(), 3);
    }

    #[test]
    fn test_short_lines_pass_through() {
        let stub = line(&[(0, 0), (50, 0)]);
        let out = simplify_polylines(vec![stub.clone()], &SimplifySettings::default());
        assert_eq!(out, vec![stub]);

        let dot = line(&[(0, 0)]);
        assert!(simplify_polylines(vec![dot], &SimplifySettings::default()).is_empty());
    }
}
