//! The layer-part pipeline.

use rayon::prelude::*;
use tracing::{debug, info};

use poly_shape::SingleShape;

use crate::error::{PartsError, PartsResult};
use crate::layer::{LayerPart, PartedLayer, PartedMesh, SlicedLayer};
use crate::settings::{LayerPartsSettings, SurfaceMode};
use crate::simplify::simplify_polylines;
use crate::stitch::stitch_polylines;

/// Process one layer: stitch open fragments, simplify the leftovers, and
/// group the closed polygons into printable parts.
///
/// Part grouping follows the settings: in surface-only mode (without
/// `union_all`) every polygon becomes its own trivial part with no
/// boolean processing; otherwise the polygons are decomposed into
/// islands, unioned first when `union_all` or `union_all_remove_holes`
/// is set. With `union_all_remove_holes` every polygon is first
/// normalized to one winding so nested holes dissolve into solid
/// material.
///
/// # Errors
///
/// Returns [`PartsError::Shape`] if the polygon algebra rejects the
/// layer's geometry.
pub fn create_layer_with_parts(
    settings: &LayerPartsSettings,
    layer: SlicedLayer,
) -> PartsResult<PartedLayer> {
    extract_parts(settings, layer).map_err(PartsError::from)
}

fn extract_parts(
    settings: &LayerPartsSettings,
    layer: SlicedLayer,
) -> Result<PartedLayer, poly_shape::ShapeError> {
    let SlicedLayer {
        mut polygons,
        open_polylines,
    } = layer;

    let stitched = stitch_polylines(open_polylines, settings.line_width);
    polygons.add(&stitched.closed);
    let open_polylines = simplify_polylines(stitched.remaining, &settings.simplify);

    if settings.union_all_remove_holes {
        // One uniform winding makes the non-zero union treat all nested
        // structure as solid.
        for poly in polygons.iter_mut() {
            if poly.is_ccw() {
                poly.reverse();
            }
        }
    }

    let split: Vec<SingleShape> =
        if settings.surface_mode == SurfaceMode::Surface && !settings.union_all {
            polygons
                .iter()
                .filter(|poly| !poly.is_empty())
                .map(|poly| SingleShape::from_outline(poly.clone()))
                .collect()
        } else {
            polygons.split_into_parts(settings.union_all || settings.union_all_remove_holes)?
        };

    let parts: Vec<LayerPart> = split
        .into_iter()
        .filter(|part| part.outline().is_some_and(|outline| !outline.is_empty()))
        .map(LayerPart::new)
        .collect();

    debug!(
        parts = parts.len(),
        open_polylines = open_polylines.len(),
        closed_by_stitching = stitched.closed.len(),
        "layer parts extracted"
    );
    Ok(PartedLayer {
        parts,
        open_polylines,
    })
}

/// Process every layer of a mesh and record the highest filled layer.
///
/// Layers are independent and processed in parallel; each task owns its
/// layer's output slot. After the join, layers are scanned from the top
/// down for the highest one holding parts (or, outside normal surface
/// mode, leftover open polylines).
///
/// # Errors
///
/// Returns [`PartsError::Layer`] naming the first layer whose geometry
/// the polygon algebra rejected; one failed layer is fatal to the mesh.
pub fn create_layer_parts(
    settings: &LayerPartsSettings,
    layers: Vec<SlicedLayer>,
) -> PartsResult<PartedMesh> {
    let total_layers = layers.len();
    let layers: Vec<PartedLayer> = layers
        .into_par_iter()
        .enumerate()
        .map(|(layer_nr, layer)| {
            extract_parts(settings, layer).map_err(|source| PartsError::Layer {
                layer: layer_nr,
                source,
            })
        })
        .collect::<PartsResult<_>>()?;

    let count_open = settings.surface_mode != SurfaceMode::Normal;
    let max_filled_layer = layers
        .iter()
        .rposition(|layer| !layer.parts.is_empty() || (count_open && !layer.open_polylines.is_empty()));

    info!(
        total_layers,
        max_filled_layer, "layer parts created for all layers"
    );
    Ok(PartedMesh {
        layers,
        max_filled_layer,
    })
}
