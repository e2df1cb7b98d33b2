//! Error types for part extraction.

use thiserror::Error;

/// Errors that can occur while extracting layer parts.
///
/// A failed layer is fatal to the whole mesh: a missing part list cannot
/// be substituted, so per-layer failures are propagated instead of
/// skipped.
#[derive(Debug, Error)]
pub enum PartsError {
    /// The polygon algebra failed on one layer's geometry.
    #[error("layer {layer}: {source}")]
    Layer {
        /// Index of the failing layer.
        layer: usize,
        /// Underlying shape operation failure.
        source: poly_shape::ShapeError,
    },

    /// A shape operation failed outside the per-layer fan-out.
    #[error(transparent)]
    Shape(#[from] poly_shape::ShapeError),
}

/// Result type for part extraction.
pub type PartsResult<T> = Result<T, PartsError>;
