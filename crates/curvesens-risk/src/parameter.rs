//! Sensitivities to curve parameters.

use std::collections::BTreeMap;

use nalgebra::DVector;
use serde::{Deserialize, Serialize};

use curvesens_core::{Currency, CurveName};

use crate::error::{RiskError, RiskResult};
use crate::fx::FxMatrix;

/// Key of a parameter sensitivity: the curve and the currency of the values.
pub type ParameterKey = (CurveName, Currency);

/// Sensitivity vectors keyed by curve and currency.
///
/// Each vector has one entry per curve parameter, in the curve's parameter
/// order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParameterSensitivity {
    #[serde(with = "entries")]
    sensitivities: BTreeMap<ParameterKey, DVector<f64>>,
}

impl ParameterSensitivity {
    /// Creates an empty sensitivity.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a sensitivity with a single vector.
    #[must_use]
    pub fn of(curve: impl Into<CurveName>, currency: Currency, vector: DVector<f64>) -> Self {
        let mut sensitivities = BTreeMap::new();
        sensitivities.insert((curve.into(), currency), vector);
        Self { sensitivities }
    }

    /// Returns the vector for a curve and currency.
    #[must_use]
    pub fn get(&self, curve: &str, currency: Currency) -> Option<&DVector<f64>> {
        self.sensitivities.get(&(CurveName::from(curve), currency))
    }

    /// Iterates over entries in `(curve, currency)` order.
    pub fn iter(&self) -> impl Iterator<Item = (&ParameterKey, &DVector<f64>)> {
        self.sensitivities.iter()
    }

    /// Number of `(curve, currency)` entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sensitivities.len()
    }

    /// Returns true if there are no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sensitivities.is_empty()
    }

    /// Adds a vector into the entry for `key`, creating it if absent.
    ///
    /// # Errors
    ///
    /// Returns `ShapeMismatch` if an existing vector has a different length.
    pub fn accumulate(&mut self, key: ParameterKey, vector: &DVector<f64>) -> RiskResult<()> {
        match self.sensitivities.get_mut(&key) {
            Some(existing) => {
                if existing.len() != vector.len() {
                    return Err(RiskError::ShapeMismatch {
                        curve: key.0.to_string(),
                        left: existing.len(),
                        right: vector.len(),
                    });
                }
                *existing += vector;
            }
            None => {
                self.sensitivities.insert(key, vector.clone());
            }
        }
        Ok(())
    }

    /// Elementwise sum. Entries present on one side only are copied.
    ///
    /// # Errors
    ///
    /// Returns `ShapeMismatch` if a shared entry has vectors of different
    /// lengths. No partial result is produced.
    pub fn plus(&self, other: &Self) -> RiskResult<Self> {
        let mut result = self.clone();
        for (key, vector) in &other.sensitivities {
            result.accumulate(key.clone(), vector)?;
        }
        Ok(result)
    }

    /// Multiplies every entry by `factor`.
    #[must_use]
    pub fn multiplied_by(&self, factor: f64) -> Self {
        Self {
            sensitivities: self
                .sensitivities
                .iter()
                .map(|(k, v)| (k.clone(), v * factor))
                .collect(),
        }
    }

    /// Expresses every entry in `target`, summing entries for the same curve.
    ///
    /// # Errors
    ///
    /// Returns `FxRateNotFound` for a currency with no rate to `target`, or
    /// `ShapeMismatch` if two currencies of one curve have different lengths.
    pub fn converted(&self, target: Currency, fx: &FxMatrix) -> RiskResult<Self> {
        let mut result = Self::new();
        for ((curve, currency), vector) in &self.sensitivities {
            let rate = fx.rate(*currency, target)?;
            result.accumulate((curve.clone(), target), &(vector * rate))?;
        }
        Ok(result)
    }

    /// Sum of every entry of every vector, expressed in `target`.
    ///
    /// # Errors
    ///
    /// Returns `FxRateNotFound` for a currency with no rate to `target`.
    pub fn total_sensitivity(&self, fx: &FxMatrix, target: Currency) -> RiskResult<f64> {
        self.sensitivities
            .iter()
            .map(|((_, currency), vector)| -> RiskResult<f64> {
                Ok(vector.sum() * fx.rate(*currency, target)?)
            })
            .sum()
    }

    /// Compares entry by entry.
    ///
    /// Returns false if the key sets differ or any pair of vectors differs in
    /// length or in some element by more than `tolerance`.
    #[must_use]
    pub fn approximately_equal(&self, other: &Self, tolerance: f64) -> bool {
        self.sensitivities.keys().eq(other.sensitivities.keys())
            && self
                .sensitivities
                .values()
                .zip(other.sensitivities.values())
                .all(|(a, b)| {
                    a.len() == b.len()
                        && a.iter().zip(b.iter()).all(|(x, y)| (x - y).abs() <= tolerance)
                })
    }
}

/// Serializes the tuple-keyed map as a list of entries.
mod entries {
    use std::collections::BTreeMap;

    use nalgebra::DVector;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use curvesens_core::{Currency, CurveName};

    use super::ParameterKey;

    #[derive(Serialize, Deserialize)]
    struct Entry {
        curve: CurveName,
        currency: Currency,
        sensitivity: Vec<f64>,
    }

    pub(super) fn serialize<S: Serializer>(
        map: &BTreeMap<ParameterKey, DVector<f64>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        let list: Vec<Entry> = map
            .iter()
            .map(|((curve, currency), v)| Entry {
                curve: curve.clone(),
                currency: *currency,
                sensitivity: v.as_slice().to_vec(),
            })
            .collect();
        list.serialize(serializer)
    }

    pub(super) fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<BTreeMap<ParameterKey, DVector<f64>>, D::Error> {
        let list = Vec::<Entry>::deserialize(deserializer)?;
        Ok(list
            .into_iter()
            .map(|e| ((e.curve, e.currency), DVector::from_vec(e.sensitivity)))
            .collect())
    }
}
