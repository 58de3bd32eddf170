//! Sensitivities in several currencies.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use curvesens_core::Currency;

use crate::bundle::CurveSensitivityBundle;
use crate::error::RiskResult;
use crate::fx::FxMatrix;

/// Curve sensitivity bundles keyed by the currency they are expressed in.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MultipleCurrencySensitivity {
    bundles: BTreeMap<Currency, CurveSensitivityBundle>,
}

impl MultipleCurrencySensitivity {
    /// Creates an empty sensitivity.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a sensitivity with one bundle in one currency.
    #[must_use]
    pub fn of(currency: Currency, bundle: CurveSensitivityBundle) -> Self {
        let mut bundles = BTreeMap::new();
        bundles.insert(currency, bundle);
        Self { bundles }
    }

    /// Returns the bundle for a currency.
    #[must_use]
    pub fn sensitivity(&self, currency: Currency) -> Option<&CurveSensitivityBundle> {
        self.bundles.get(&currency)
    }

    /// Currencies present, in sorted order.
    pub fn currencies(&self) -> impl Iterator<Item = Currency> + '_ {
        self.bundles.keys().copied()
    }

    /// Iterates over `(currency, bundle)` pairs in currency order.
    pub fn iter(&self) -> impl Iterator<Item = (Currency, &CurveSensitivityBundle)> {
        self.bundles.iter().map(|(c, b)| (*c, b))
    }

    /// Returns true if there is no currency.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bundles.is_empty()
    }

    /// Concatenates per currency, `self`'s bundle first.
    #[must_use]
    pub fn plus(&self, other: &Self) -> Self {
        let mut bundles = self.bundles.clone();
        for (currency, bundle) in &other.bundles {
            let merged = match bundles.get(currency) {
                Some(existing) => existing.plus(bundle),
                None => bundle.clone(),
            };
            bundles.insert(*currency, merged);
        }
        Self { bundles }
    }

    /// Multiplies every value in every currency by `factor`.
    #[must_use]
    pub fn multiplied_by(&self, factor: f64) -> Self {
        self.map_bundles(|b| b.multiplied_by(factor))
    }

    /// Cleans every bundle.
    #[must_use]
    pub fn cleaned(&self) -> Self {
        self.map_bundles(CurveSensitivityBundle::cleaned)
    }

    /// Expresses everything in `target`.
    ///
    /// Each bundle is multiplied by the rate from its currency to `target`,
    /// then all bundles are concatenated in currency order. The result holds a
    /// single currency, or none if `self` is empty.
    ///
    /// # Errors
    ///
    /// Returns `FxRateNotFound` if any currency has no rate to `target`.
    pub fn converted(&self, target: Currency, fx: &FxMatrix) -> RiskResult<Self> {
        if self.bundles.is_empty() {
            return Ok(Self::new());
        }
        let rates = self
            .bundles
            .keys()
            .map(|&currency| fx.rate(currency, target))
            .collect::<RiskResult<Vec<f64>>>()?;

        let converted = self
            .bundles
            .values()
            .zip(rates)
            .fold(CurveSensitivityBundle::new(), |acc, (bundle, rate)| {
                acc.plus(&bundle.multiplied_by(rate))
            });
        debug!(
            %target,
            currencies = self.bundles.len(),
            "converted multi-currency sensitivity"
        );
        Ok(Self::of(target, converted))
    }

    /// Compares bundle by bundle.
    ///
    /// Returns false if the currency sets differ. Each pair of bundles is
    /// compared with [`CurveSensitivityBundle::approximately_equal`], so both
    /// sides should be cleaned first.
    #[must_use]
    pub fn approximately_equal(&self, other: &Self, tolerance: f64) -> bool {
        self.bundles.keys().eq(other.bundles.keys())
            && self
                .bundles
                .values()
                .zip(other.bundles.values())
                .all(|(a, b)| a.approximately_equal(b, tolerance))
    }

    fn map_bundles(&self, f: impl Fn(&CurveSensitivityBundle) -> CurveSensitivityBundle) -> Self {
        Self {
            bundles: self.bundles.iter().map(|(c, b)| (*c, f(b))).collect(),
        }
    }
}

impl FromIterator<(Currency, CurveSensitivityBundle)> for MultipleCurrencySensitivity {
    fn from_iter<I: IntoIterator<Item = (Currency, CurveSensitivityBundle)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::new(), |acc, (currency, bundle)| acc.plus(&Self::of(currency, bundle)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use curvesens_core::PointSensitivity;

    fn usd() -> CurveSensitivityBundle {
        CurveSensitivityBundle::of_yield_discounting("USD-OIS", vec![PointSensitivity::new(1.0, 10.0)])
    }

    #[test]
    fn test_plus_merges_same_currency() {
        let a = MultipleCurrencySensitivity::of(Currency::USD, usd());
        let b = MultipleCurrencySensitivity::of(Currency::USD, usd().multiplied_by(2.0));
        let total = a.plus(&b);
        let points = &total.sensitivity(Currency::USD).unwrap().yield_discounting()["USD-OIS"];
        assert_eq!(
            points,
            &vec![PointSensitivity::new(1.0, 10.0), PointSensitivity::new(1.0, 20.0)]
        );
    }

    #[test]
    fn test_from_iterator() {
        let sens: MultipleCurrencySensitivity = vec![
            (Currency::EUR, usd()),
            (Currency::USD, usd()),
            (Currency::EUR, usd()),
        ]
        .into_iter()
        .collect();
        let currencies: Vec<_> = sens.currencies().collect();
        assert_eq!(currencies, vec![Currency::USD, Currency::EUR]);
        assert_eq!(sens.sensitivity(Currency::EUR).unwrap().point_count(), 2);
    }

    #[test]
    fn test_convert_empty() {
        let converted = MultipleCurrencySensitivity::new()
            .converted(Currency::USD, &FxMatrix::new())
            .unwrap();
        assert!(converted.is_empty());
    }

    #[test]
    fn test_currency_sets_must_match() {
        let a = MultipleCurrencySensitivity::of(Currency::USD, usd());
        let b = MultipleCurrencySensitivity::of(Currency::EUR, usd());
        assert!(!a.approximately_equal(&b, 1.0));
        assert!(a.approximately_equal(&a.clone(), 0.0));
    }
}
