//! End-to-end tests for the layer-part pipeline.

use poly_parts::{
    create_layer_parts, create_layer_with_parts, LayerPartsSettings, SlicedLayer, SurfaceMode,
};
use poly_shape::Shape;
use poly_types::{OpenPolyline, Point2, Polygon};

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

fn layer_of(polygons: Vec<Polygon>) -> SlicedLayer {
    SlicedLayer {
        polygons: Shape::from(polygons),
        open_polylines: Vec::new(),
    }
}

#[test]
fn test_single_square_becomes_one_part() {
    let parted =
        create_layer_with_parts(&LayerPartsSettings::default(), layer_of(vec![square(0, 0, 10_000)]))
            .unwrap();
    assert_eq!(parted.parts.len(), 1);
    let part = &parted.parts[0];
    assert!(part.outline.holes().is_empty());
    assert_eq!(part.bounds.width(), 10_000);
}

#[test]
fn test_island_in_hole_becomes_own_part() {
    let parted = create_layer_with_parts(
        &LayerPartsSettings::default(),
        layer_of(vec![
            square(0, 0, 100_000),
            cw(square(25_000, 25_000, 50_000)),
            square(45_000, 45_000, 10_000),
        ]),
    )
    .unwrap();
    assert_eq!(parted.parts.len(), 2);
    // Bounding boxes distinguish the island from the ring.
    let widths: Vec<i64> = parted.parts.iter().map(|p| p.bounds.width()).collect();
    assert!(widths.contains(&10_000));
    assert!(widths.contains(&100_000));
}

#[test]
fn test_union_all_remove_holes_fills_cavities() {
    let settings = LayerPartsSettings {
        union_all_remove_holes: true,
        ..LayerPartsSettings::default()
    };
    let parted = create_layer_with_parts(
        &settings,
        layer_of(vec![square(0, 0, 100_000), cw(square(25_000, 25_000, 50_000))]),
    )
    .unwrap();
    assert_eq!(parted.parts.len(), 1);
    assert!(parted.parts[0].outline.holes().is_empty());
    assert!((parted.parts[0].outline.area() - 100_000.0 * 100_000.0).abs() < 1.0);
}

#[test]
fn test_surface_mode_makes_trivial_parts() {
    let settings = LayerPartsSettings {
        surface_mode: SurfaceMode::Surface,
        ..LayerPartsSettings::default()
    };
    // Two overlapping squares stay two separate parts: no boolean
    // processing in surface mode.
    let parted = create_layer_with_parts(
        &settings,
        layer_of(vec![square(0, 0, 10_000), square(5_000, 0, 10_000)]),
    )
    .unwrap();
    assert_eq!(parted.parts.len(), 2);
    for part in &parted.parts {
        assert!(part.outline.holes().is_empty());
    }
}

#[test]
fn test_stitched_fragments_feed_into_parts() {
    let layer = SlicedLayer {
        polygons: Shape::new(),
        open_polylines: vec![
            OpenPolyline::from(vec![
                Point2::new(0, 0),
                Point2::new(10_000, 0),
                Point2::new(10_000, 10_000),
            ]),
            OpenPolyline::from(vec![
                Point2::new(9_950, 10_000),
                Point2::new(0, 10_000),
                Point2::new(0, 50),
            ]),
        ],
    };
    let parted = create_layer_with_parts(&LayerPartsSettings::default(), layer).unwrap();
    assert_eq!(parted.parts.len(), 1);
    assert!(parted.open_polylines.is_empty());
}

#[test]
fn test_unstitchable_fragments_stay_open() {
    let layer = SlicedLayer {
        polygons: Shape::new(),
        open_polylines: vec![OpenPolyline::from(vec![
            Point2::new(0, 0),
            Point2::new(50_000, 0),
        ])],
    };
    let parted = create_layer_with_parts(&LayerPartsSettings::default(), layer).unwrap();
    assert!(parted.parts.is_empty());
    assert_eq!(parted.open_polylines.len(), 1);
}

#[test]
fn test_mesh_records_highest_filled_layer() {
    let layers = vec![
        layer_of(vec![square(0, 0, 10_000)]),
        layer_of(vec![square(0, 0, 8_000)]),
        layer_of(Vec::new()),
        layer_of(Vec::new()),
    ];
    let mesh = create_layer_parts(&LayerPartsSettings::default(), layers).unwrap();
    assert_eq!(mesh.layers.len(), 4);
    assert_eq!(mesh.max_filled_layer, Some(1));
}

#[test]
fn test_empty_mesh_has_no_filled_layer() {
    let mesh = create_layer_parts(
        &LayerPartsSettings::default(),
        vec![layer_of(Vec::new()), layer_of(Vec::new())],
    )
    .unwrap();
    assert_eq!(mesh.max_filled_layer, None);
}

#[test]
fn test_open_polylines_count_in_surface_mode() {
    let mut settings = LayerPartsSettings::default();
    let open_layer = SlicedLayer {
        polygons: Shape::new(),
        open_polylines: vec![OpenPolyline::from(vec![
            Point2::new(0, 0),
            Point2::new(50_000, 0),
        ])],
    };

    // Normal mode ignores loose polylines for the fill scan.
    let mesh = create_layer_parts(&settings, vec![open_layer.clone()]).unwrap();
    assert_eq!(mesh.max_filled_layer, None);

    settings.surface_mode = SurfaceMode::Both;
    let mesh = create_layer_parts(&settings, vec![open_layer]).unwrap();
    assert_eq!(mesh.max_filled_layer, Some(0));
}

#[test]
fn test_degenerate_polygons_are_filtered() {
    let parted = create_layer_with_parts(
        &LayerPartsSettings::default(),
        layer_of(vec![Polygon::from(vec![(0, 0), (100, 0)])]),
    )
    .unwrap();
    assert!(parted.parts.is_empty());
}
