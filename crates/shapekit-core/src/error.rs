//! Error handling for ShapeKit
//!
//! Provides the error type for shape operations: scaling, degenerate
//! geometry and index lookups.
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Shape error type
///
/// Represents recoverable failures of shape operations. None of these
/// abort the program; the console reports them and keeps running.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ShapeError {
    /// Index outside the collection bounds
    #[error("Index {index} out of range for {len} shapes")]
    OutOfRange {
        /// The requested index.
        index: usize,
        /// The number of shapes at the time of the request.
        len: usize,
    },

    /// Scaling divisor of zero
    #[error("Division by zero: cannot scale down by a factor of 0")]
    DivisionByZero,

    /// Geometry that has no defined area or perimeter
    #[error("Invalid geometry: {reason}")]
    InvalidGeometry {
        /// Why the geometry was rejected.
        reason: String,
    },

    /// A bulk scale stopped at the given shape
    #[error("Scaling stopped at shape {index}: {source}")]
    ScaleFailed {
        /// Index of the shape that failed to scale.
        index: usize,
        /// The underlying failure.
        #[source]
        source: Box<ShapeError>,
    },
}

impl ShapeError {
    /// Create an invalid geometry error from a message
    pub fn invalid_geometry(reason: impl Into<String>) -> Self {
        ShapeError::InvalidGeometry {
            reason: reason.into(),
        }
    }

    /// Returns the innermost error, unwrapping bulk-operation context.
    pub fn root_cause(&self) -> &ShapeError {
        match self {
            ShapeError::ScaleFailed { source, .. } => source.root_cause(),
            other => other,
        }
    }

    /// Check if this is (or wraps) a division by zero
    pub fn is_division_by_zero(&self) -> bool {
        matches!(self.root_cause(), ShapeError::DivisionByZero)
    }
}

/// Result type for shape operations
pub type ShapeResult<T> = std::result::Result<T, ShapeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_error_display() {
        let err = ShapeError::OutOfRange { index: 7, len: 2 };
        assert_eq!(err.to_string(), "Index 7 out of range for 2 shapes");

        let err = ShapeError::invalid_geometry("negative radicand");
        assert_eq!(err.to_string(), "Invalid geometry: negative radicand");
    }

    #[test]
    fn test_scale_failed_wraps_source() {
        let err = ShapeError::ScaleFailed {
            index: 0,
            source: Box::new(ShapeError::DivisionByZero),
        };
        assert!(err.to_string().starts_with("Scaling stopped at shape 0"));
        assert!(err.is_division_by_zero());
        assert_eq!(err.root_cause(), &ShapeError::DivisionByZero);
    }
}
