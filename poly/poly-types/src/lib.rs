//! Fixed-precision 2D geometry primitives for the slicing pipeline.
//!
//! This crate provides the foundational value types that every later stage
//! (boolean algebra, part extraction, infill, walls) builds on:
//!
//! - [`Point2`] - A 2D point in signed 64-bit fixed-point units
//! - [`Polygon`] - A closed contour (implicit edge from last to first point)
//! - [`OpenPolyline`] - An open polyline fragment from the slicer
//! - [`Aabb2`] - Axis-aligned 2D bounding box
//! - [`line_alg`] - Exact orientation and ray-casting predicates
//!
//! # Fixed-Point Coordinates
//!
//! All coordinates are `i64` micrometers ([`UNITS_PER_MM`] = 1000). The
//! pipeline commits to integer coordinates for determinism: the same input
//! produces bit-identical output on every platform. Predicates that need
//! exact arithmetic widen to `i128` internally; `f64` appears only in
//! derived metrics (areas, lengths).
//!
//! # Degenerate Geometry
//!
//! A polygon with fewer than 3 points encloses nothing. Every operation in
//! this workspace treats such polygons as empty and filters them silently;
//! malformed local geometry must never abort a slice.
//!
//! # Example
//!
//! ```
//! use poly_types::{Point2, Polygon};
//!
//! let square = Polygon::from(vec![(0, 0), (100, 0), (100, 100), (0, 100)]);
//! assert!(square.is_ccw());
//! assert_eq!(square.signed_area2(), 2 * 100 * 100);
//! assert!(square.inside(Point2::new(50, 50)));
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

mod aabb;
pub mod line_alg;
mod point;
mod polygon;
mod polyline;

pub use aabb::Aabb2;
pub use point::{mm_to_units, units_to_mm, units2_to_mm2, Coord, Point2, UNITS_PER_MM};
pub use polygon::{Containment, Polygon};
pub use polyline::OpenPolyline;
