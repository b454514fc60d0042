//! Error types for geometry construction and validation.
//!
//! Errors in this workspace are reserved for things that can genuinely be
//! wrong at construction time: an invalid point handed to a manifold
//! constructor, mismatched dimensions, or line-search parameters that violate
//! their mathematical constraints. The optimization loop itself never raises;
//! a stalled or converged run is reported structurally through the line
//! search's non-positive step sentinel.

use thiserror::Error;

/// Errors that can occur while constructing or validating geometric objects.
#[derive(Debug, Clone, Error)]
pub enum GeometryError {
    /// Point does not satisfy the manifold constraints.
    #[error("Point is not on the manifold: {reason}")]
    InvalidPoint {
        /// Description of why the point is invalid
        reason: String,
    },

    /// Dimension mismatch between operands.
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Expected dimensions
        expected: String,
        /// Actual dimensions
        actual: String,
    },

    /// A configuration parameter violates its mathematical constraints.
    #[error("Invalid parameter: {reason}")]
    InvalidParameter {
        /// Description of the constraint violation
        reason: String,
    },
}

impl GeometryError {
    /// Create an InvalidPoint error with a custom reason.
    pub fn invalid_point<S: Into<String>>(reason: S) -> Self {
        Self::InvalidPoint {
            reason: reason.into(),
        }
    }

    /// Create a DimensionMismatch error.
    pub fn dimension_mismatch<S1, S2>(expected: S1, actual: S2) -> Self
    where
        S1: std::fmt::Display,
        S2: std::fmt::Display,
    {
        Self::DimensionMismatch {
            expected: expected.to_string(),
            actual: actual.to_string(),
        }
    }

    /// Create an InvalidParameter error with a custom reason.
    pub fn invalid_parameter<S: Into<String>>(reason: S) -> Self {
        Self::InvalidParameter {
            reason: reason.into(),
        }
    }
}

/// Result type alias for operations that can produce a [`GeometryError`].
pub type Result<T> = std::result::Result<T, GeometryError>;
