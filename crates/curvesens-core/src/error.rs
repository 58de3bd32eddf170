//! Error types for the Curvesens value types.
//!
//! This module defines the error raised when a value type is constructed
//! from invalid input.

use thiserror::Error;

/// A specialized Result type for value-type construction.
pub type SensitivityResult<T> = Result<T, SensitivityError>;

/// Errors raised while building or parsing core value types.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SensitivityError {
    /// An argument violates the contract of the operation.
    #[error("Invalid argument: {reason}")]
    InvalidArgument {
        /// Description of the violation.
        reason: String,
    },

    /// Currency code not recognised.
    #[error("Unknown currency code: {code}")]
    UnknownCurrency {
        /// The unrecognised code.
        code: String,
    },

    /// Curve name is empty or blank.
    #[error("Curve name must not be empty")]
    EmptyCurveName,
}

impl SensitivityError {
    /// Creates an invalid argument error.
    #[must_use]
    pub fn invalid_argument(reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            reason: reason.into(),
        }
    }

    /// Creates an unknown currency error.
    #[must_use]
    pub fn unknown_currency(code: impl Into<String>) -> Self {
        Self::UnknownCurrency { code: code.into() }
    }
}
