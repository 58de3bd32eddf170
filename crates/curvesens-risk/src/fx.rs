//! Spot FX rates used to convert sensitivities between currencies.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::warn;

use curvesens_core::Currency;

use crate::error::{RiskError, RiskResult};

/// Spot FX rates between currency pairs.
///
/// A rate stored for `(from, to)` is the number of units of `to` per unit of
/// `from`. Lookups resolve identity pairs to `1.0` and fall back to the
/// inverse of the opposite pair.
///
/// # Example
///
/// ```rust
/// use curvesens_core::Currency;
/// use curvesens_risk::FxMatrix;
///
/// let fx = FxMatrix::new().with_rate(Currency::EUR, Currency::USD, 1.25).unwrap();
///
/// assert_eq!(fx.rate(Currency::EUR, Currency::USD).unwrap(), 1.25);
/// assert_eq!(fx.rate(Currency::USD, Currency::EUR).unwrap(), 0.8);
/// assert_eq!(fx.rate(Currency::GBP, Currency::GBP).unwrap(), 1.0);
/// assert!(fx.rate(Currency::GBP, Currency::USD).is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FxMatrix {
    #[serde(with = "pair_keys")]
    rates: BTreeMap<(Currency, Currency), f64>,
}

impl FxMatrix {
    /// Creates an empty matrix.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a rate, consuming and returning the matrix.
    pub fn with_rate(mut self, from: Currency, to: Currency, rate: f64) -> RiskResult<Self> {
        self.add_rate(from, to, rate)?;
        Ok(self)
    }

    /// Stores the rate for `from` to `to`, replacing any rate for either
    /// direction of the pair.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if the rate is not finite and strictly
    /// positive, or if `from == to`.
    pub fn add_rate(&mut self, from: Currency, to: Currency, rate: f64) -> RiskResult<()> {
        if from == to {
            return Err(RiskError::invalid_argument(format!(
                "cannot set an FX rate from {from} to itself"
            )));
        }
        if !rate.is_finite() || rate <= 0.0 {
            return Err(RiskError::invalid_argument(format!(
                "FX rate {from}/{to} must be positive, got {rate}"
            )));
        }
        self.rates.remove(&(to, from));
        self.rates.insert((from, to), rate);
        Ok(())
    }

    /// Returns the number of units of `to` per unit of `from`.
    ///
    /// # Errors
    ///
    /// Returns `FxRateNotFound` if neither direction of the pair is stored.
    pub fn rate(&self, from: Currency, to: Currency) -> RiskResult<f64> {
        if from == to {
            return Ok(1.0);
        }
        if let Some(rate) = self.rates.get(&(from, to)) {
            return Ok(*rate);
        }
        if let Some(rate) = self.rates.get(&(to, from)) {
            return Ok(1.0 / rate);
        }
        warn!(%from, %to, "FX rate not found");
        Err(RiskError::FxRateNotFound { from, to })
    }

    /// Number of stored pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rates.len()
    }

    /// Returns true if no pair is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}

/// Serializes the pair-keyed map as a list, since JSON and TOML keys must be
/// strings.
mod pair_keys {
    use std::collections::BTreeMap;

    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use curvesens_core::Currency;

    #[derive(Serialize, Deserialize)]
    struct Entry {
        from: Currency,
        to: Currency,
        rate: f64,
    }

    pub(super) fn serialize<S: Serializer>(
        rates: &BTreeMap<(Currency, Currency), f64>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        let entries: Vec<Entry> = rates
            .iter()
            .map(|(&(from, to), &rate)| Entry { from, to, rate })
            .collect();
        entries.serialize(serializer)
    }

    pub(super) fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<BTreeMap<(Currency, Currency), f64>, D::Error> {
        let entries = Vec::<Entry>::deserialize(deserializer)?;
        Ok(entries
            .into_iter()
            .map(|e| ((e.from, e.to), e.rate))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_inverse_lookup() {
        let fx = FxMatrix::new()
            .with_rate(Currency::GBP, Currency::USD, 1.27)
            .unwrap();
        assert_relative_eq!(fx.rate(Currency::USD, Currency::GBP).unwrap(), 1.0 / 1.27);
    }

    #[test]
    fn test_replacing_opposite_direction() {
        let mut fx = FxMatrix::new();
        fx.add_rate(Currency::EUR, Currency::USD, 1.25).unwrap();
        fx.add_rate(Currency::USD, Currency::EUR, 0.5).unwrap();
        assert_eq!(fx.len(), 1);
        assert_relative_eq!(fx.rate(Currency::EUR, Currency::USD).unwrap(), 2.0);
    }

    #[test]
    fn test_invalid_rates() {
        let mut fx = FxMatrix::new();
        assert!(fx.add_rate(Currency::EUR, Currency::USD, 0.0).is_err());
        assert!(fx.add_rate(Currency::EUR, Currency::USD, f64::NAN).is_err());
        assert!(fx.add_rate(Currency::EUR, Currency::EUR, 1.0).is_err());
        assert!(fx.is_empty());
    }

    #[test]
    fn test_missing_rate() {
        let err = FxMatrix::new().rate(Currency::JPY, Currency::CHF).unwrap_err();
        assert_eq!(
            err,
            RiskError::FxRateNotFound {
                from: Currency::JPY,
                to: Currency::CHF
            }
        );
        assert!(err.is_lookup_miss());
    }

    #[test]
    fn test_serde_roundtrip() {
        let fx = FxMatrix::new()
            .with_rate(Currency::EUR, Currency::USD, 1.25)
            .unwrap();
        let json = serde_json::to_string(&fx).unwrap();
        let parsed: FxMatrix = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, fx);
    }
}
