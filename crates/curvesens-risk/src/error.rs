//! Error types for sensitivity aggregation and projection.

use curvesens_core::{Currency, SensitivityError};
use curvesens_curves::CurveError;
use thiserror::Error;

/// A specialized Result type for risk operations.
pub type RiskResult<T> = Result<T, RiskError>;

/// Error type for risk operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RiskError {
    /// No FX rate available for a currency pair.
    #[error("FX rate not found: {from}/{to}")]
    FxRateNotFound {
        /// Source currency.
        from: Currency,
        /// Target currency.
        to: Currency,
    },

    /// An argument is outside its valid domain.
    #[error("Invalid argument: {reason}")]
    InvalidArgument {
        /// Description of the problem.
        reason: String,
    },

    /// Two parameter vectors for the same curve have different lengths.
    #[error("Shape mismatch for {curve}: {left} vs {right} parameters")]
    ShapeMismatch {
        /// Curve whose vectors disagree.
        curve: String,
        /// Length on the left-hand side.
        left: usize,
        /// Length on the right-hand side.
        right: usize,
    },

    /// Failure in the curve layer, including curve lookup misses.
    #[error(transparent)]
    Curve(#[from] CurveError),
}

impl RiskError {
    /// Creates an invalid argument error.
    #[must_use]
    pub fn invalid_argument(reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            reason: reason.into(),
        }
    }

    /// Returns true for lookup misses: unknown curve, index or FX pair.
    #[must_use]
    pub fn is_lookup_miss(&self) -> bool {
        match self {
            Self::FxRateNotFound { .. } => true,
            Self::Curve(err) => err.is_lookup_miss(),
            _ => false,
        }
    }
}

impl From<SensitivityError> for RiskError {
    fn from(err: SensitivityError) -> Self {
        Self::invalid_argument(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = RiskError::FxRateNotFound {
            from: Currency::EUR,
            to: Currency::JPY,
        };
        assert_eq!(err.to_string(), "FX rate not found: EUR/JPY");

        let err: RiskError = CurveError::curve_not_found("USD-OIS").into();
        assert_eq!(err.to_string(), "Curve not found: USD-OIS");
    }

    #[test]
    fn test_lookup_miss() {
        let err: RiskError = CurveError::curve_not_found("X").into();
        assert!(err.is_lookup_miss());
        assert!(!RiskError::invalid_argument("bad").is_lookup_miss());
    }
}
