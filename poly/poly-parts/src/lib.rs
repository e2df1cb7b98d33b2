//! Per-layer part extraction on top of the polygon algebra.
//!
//! This crate turns the raw per-layer output of a slicer - an unordered
//! bag of closed polygons plus open polyline fragments - into printable
//! parts:
//!
//! - **Stitching**: open fragments whose endpoints lie within a
//!   line-width tolerance are joined into longer polylines and, where
//!   they close, promoted to polygons
//! - **Simplification**: leftover open polylines are decimated under a
//!   resolution/deviation budget
//! - **Part decomposition**: polygons are grouped into isolated islands
//!   (outline plus holes) via [`poly_shape::Shape::split_into_parts`],
//!   with settings-driven variants for hole removal and surface-only
//!   printing
//! - **Mesh fan-out**: [`create_layer_parts`] processes all layers of a
//!   mesh in parallel and records the highest layer that still holds
//!   geometry
//!
//! Everything here is synchronous CPU-bound work; the only concurrency
//! boundary is the per-layer fan-out, where each task owns exactly one
//! layer's output slot.
//!
//! # Example
//!
//! ```
//! use poly_parts::{create_layer_with_parts, LayerPartsSettings, SlicedLayer};
//! use poly_shape::Shape;
//! use poly_types::Polygon;
//!
//! let layer = SlicedLayer {
//!     polygons: Shape::from(Polygon::from(vec![
//!         (0, 0), (10_000, 0), (10_000, 10_000), (0, 10_000),
//!     ])),
//!     open_polylines: Vec::new(),
//! };
//! let parted = create_layer_with_parts(&LayerPartsSettings::default(), layer)?;
//! assert_eq!(parted.parts.len(), 1);
//! # Ok::<(), poly_parts::PartsError>(())
//! ```
//!
//! # Quality Standards
//!
//! - Zero clippy/doc warnings
//! - No unwrap/expect in library code

#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod error;
mod layer;
mod pipeline;
mod settings;
mod simplify;
mod stitch;

pub use error::{PartsError, PartsResult};
pub use layer::{LayerPart, PartedLayer, PartedMesh, SlicedLayer};
pub use pipeline::{create_layer_parts, create_layer_with_parts};
pub use settings::{LayerPartsSettings, SimplifySettings, SurfaceMode};
pub use simplify::simplify_polylines;
pub use stitch::{stitch_polylines, StitchResult};
