//! Pipeline configuration.
//!
//! The pipeline takes an explicit settings value instead of consulting an
//! ambient settings store, so the core stays testable without one.

use poly_types::{Coord, UNITS_PER_MM};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Which surfaces of the mesh are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SurfaceMode {
    /// Closed volumes only; open polylines are discarded downstream.
    #[default]
    Normal,
    /// Print the surface only: every polygon becomes its own trivial
    /// part, with no boolean processing.
    Surface,
    /// Closed volumes plus loose surface polylines.
    Both,
}

/// Budget for open-polyline simplification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SimplifySettings {
    /// Segments shorter than this are candidates for removal.
    pub max_resolution: Coord,
    /// Maximum distance a removed vertex may deviate from the shortcut
    /// replacing it.
    pub max_deviation: Coord,
}

impl Default for SimplifySettings {
    fn default() -> Self {
        Self {
            max_resolution: UNITS_PER_MM / 2,
            max_deviation: 25,
        }
    }
}

/// Settings consumed by the layer-part pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LayerPartsSettings {
    /// Outer wall line width; doubles as the stitching tolerance for
    /// open polyline fragments.
    pub line_width: Coord,
    /// Union all layer polygons before splitting into parts, merging
    /// overlapping model pieces.
    pub union_all: bool,
    /// Normalize every polygon to a single winding before the union, so
    /// nested structure dissolves and internal holes disappear.
    pub union_all_remove_holes: bool,
    /// Which surfaces are printed.
    pub surface_mode: SurfaceMode,
    /// Simplification budget for leftover open polylines.
    pub simplify: SimplifySettings,
}

impl Default for LayerPartsSettings {
    fn default() -> Self {
        Self {
            line_width: 400,
            union_all: false,
            union_all_remove_holes: false,
            surface_mode: SurfaceMode::Normal,
            simplify: SimplifySettings::default(),
        }
    }
}
