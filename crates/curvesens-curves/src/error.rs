//! Error types for curve operations.

use curvesens_math::MathError;
use thiserror::Error;

/// A specialized Result type for curve operations.
pub type CurveResult<T> = Result<T, CurveError>;

/// Error types for curve operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CurveError {
    /// No curve registered under the requested name.
    #[error("Curve not found: {name}")]
    CurveNotFound {
        /// The requested curve name.
        name: String,
    },

    /// No curve registered for the requested forward index.
    #[error("No curve registered for index: {index}")]
    IndexNotFound {
        /// The requested index name.
        index: String,
    },

    /// Invalid curve data.
    #[error("Invalid curve data: {reason}")]
    InvalidData {
        /// Description of what's wrong.
        reason: String,
    },

    /// A vector has the wrong number of entries.
    #[error("Shape mismatch: expected {expected} entries, got {got}")]
    ShapeMismatch {
        /// Expected length.
        expected: usize,
        /// Actual length.
        got: usize,
    },

    /// Underlying mathematical failure.
    #[error("Math error: {0}")]
    Math(#[from] MathError),
}

impl CurveError {
    /// Creates an invalid data error.
    #[must_use]
    pub fn invalid_data(reason: impl Into<String>) -> Self {
        Self::InvalidData {
            reason: reason.into(),
        }
    }

    /// Creates a curve-not-found error.
    #[must_use]
    pub fn curve_not_found(name: impl Into<String>) -> Self {
        Self::CurveNotFound { name: name.into() }
    }

    /// Returns true for lookup misses (unknown curve or index).
    #[must_use]
    pub fn is_lookup_miss(&self) -> bool {
        matches!(self, Self::CurveNotFound { .. } | Self::IndexNotFound { .. })
    }
}
