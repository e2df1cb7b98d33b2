//! Error types for shape operations.

use thiserror::Error;

/// Errors that can occur during shape operations.
///
/// Degenerate input geometry is never an error; it is filtered silently.
/// These variants cover the clipping backend misbehaving and caller
/// contract violations.
#[derive(Debug, Error)]
pub enum ShapeError {
    /// The polygon clipping backend rejected the operation.
    #[error("polygon clipping failed: {details}")]
    ClipFailed {
        /// Backend error description.
        details: String,
    },

    /// `offset_multi` was called with a distance list that does not match
    /// the shape's total vertex count.
    #[error("offset distance count {given} does not match vertex count {expected}")]
    OffsetCountMismatch {
        /// Number of distances supplied.
        given: usize,
        /// Total vertex count of the shape.
        expected: usize,
    },
}

/// Result type for shape operations.
pub type ShapeResult<T> = Result<T, ShapeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ShapeError::OffsetCountMismatch {
            given: 3,
            expected: 8,
        };
        let msg = format!("{err}");
        assert!(msg.contains('3'));
        assert!(msg.contains('8'));
    }
}
