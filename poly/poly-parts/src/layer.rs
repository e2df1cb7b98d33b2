//! Layer input and output records.

use poly_shape::{Shape, SingleShape};
use poly_types::{Aabb2, OpenPolyline};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Raw slicer output for one layer: an unordered bag of closed polygons
/// and open polyline fragments in the same coordinate space.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SlicedLayer {
    /// Closed polygon loops.
    pub polygons: Shape,
    /// Open fragments that did not close during slicing.
    pub open_polylines: Vec<OpenPolyline>,
}

/// One printable island of a layer.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LayerPart {
    /// The part's outline with its holes.
    pub outline: SingleShape,
    /// Bounding box of the outline, cached for downstream overlap tests.
    pub bounds: Aabb2,
}

impl LayerPart {
    /// Wrap a part and compute its bounding box.
    #[must_use]
    pub fn new(outline: SingleShape) -> Self {
        let bounds = outline.bounds();
        Self { outline, bounds }
    }
}

/// The processed result for one layer.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PartedLayer {
    /// Printable parts, islands first where nested.
    pub parts: Vec<LayerPart>,
    /// Stitched and simplified polylines that never closed.
    pub open_polylines: Vec<OpenPolyline>,
}

impl PartedLayer {
    /// Whether the layer holds neither parts nor open polylines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty() && self.open_polylines.is_empty()
    }
}

/// All layers of one mesh after part extraction.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PartedMesh {
    /// Per-layer results, index-aligned with the slicer layers.
    pub layers: Vec<PartedLayer>,
    /// Highest layer index that still holds geometry, or `None` for a
    /// completely empty mesh. In surface modes loose polylines count as
    /// geometry.
    pub max_filled_layer: Option<usize>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use poly_types::Polygon;

    #[test]
    fn test_layer_part_caches_bounds() {
        let part = LayerPart::new(SingleShape::from_outline(Polygon::from(vec![
            (0, 0),
            (100, 0),
            (100, 50),
            (0, 50),
        ])));
        assert_eq!(part.bounds.width(), 100);
        assert_eq!(part.bounds.height(), 50);
    }

    #[test]
    fn test_parted_layer_emptiness() {
        let mut layer = PartedLayer::default();
        assert!(layer.is_empty());
        layer.open_polylines.push(OpenPolyline::default());
        assert!(!layer.is_empty());
    }
}
