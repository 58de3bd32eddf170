//! Curve sensitivity bundle.

use serde::{Deserialize, Serialize};
use tracing::debug;

use curvesens_core::{CurveName, ForwardPointSensitivity, PointSensitivity, SensitivityPoint};

use crate::aggregator::{
    clean_map, clean_map_within, concat_maps, maps_approximately_equal, scale_map, PointMap,
};
use crate::error::RiskResult;

/// Point sensitivities of one quantity to a set of curves, in one currency.
///
/// Three categories are held independently, each keyed by curve name:
///
/// - **yield discounting**: sensitivities to zero rates used for discounting
/// - **forward**: sensitivities to forward rates projected off a curve
/// - **price curve**: sensitivities to price index curves
///
/// A curve name may appear in several categories. The bundle is immutable:
/// every operation returns a new bundle and leaves its inputs untouched.
///
/// Lists are kept in insertion order until [`cleaned`](Self::cleaned) is
/// called, which sums points at identical locations and sorts them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurveSensitivityBundle {
    yield_discounting: PointMap<PointSensitivity>,
    forward: PointMap<ForwardPointSensitivity>,
    price_curve: PointMap<PointSensitivity>,
}

impl CurveSensitivityBundle {
    /// Creates an empty bundle.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a bundle that takes ownership of the three maps.
    ///
    /// The caller gives the maps up, so they cannot be changed behind the
    /// bundle afterwards. Use [`from_borrowed_maps`](Self::from_borrowed_maps)
    /// to keep the originals.
    #[must_use]
    pub fn from_maps(
        yield_discounting: PointMap<PointSensitivity>,
        forward: PointMap<ForwardPointSensitivity>,
        price_curve: PointMap<PointSensitivity>,
    ) -> Self {
        Self {
            yield_discounting,
            forward,
            price_curve,
        }
    }

    /// Creates a bundle from copies of the three maps.
    #[must_use]
    pub fn from_borrowed_maps(
        yield_discounting: &PointMap<PointSensitivity>,
        forward: &PointMap<ForwardPointSensitivity>,
        price_curve: &PointMap<PointSensitivity>,
    ) -> Self {
        Self::from_maps(yield_discounting.clone(), forward.clone(), price_curve.clone())
    }

    /// Creates a bundle with discounting sensitivities to one curve.
    #[must_use]
    pub fn of_yield_discounting(
        curve: impl Into<CurveName>,
        points: Vec<PointSensitivity>,
    ) -> Self {
        let mut bundle = Self::new();
        bundle.yield_discounting.insert(curve.into(), points);
        bundle
    }

    /// Creates a bundle with forward sensitivities to one curve.
    #[must_use]
    pub fn of_forward(curve: impl Into<CurveName>, points: Vec<ForwardPointSensitivity>) -> Self {
        let mut bundle = Self::new();
        bundle.forward.insert(curve.into(), points);
        bundle
    }

    /// Creates a bundle with price curve sensitivities to one curve.
    #[must_use]
    pub fn of_price_curve(curve: impl Into<CurveName>, points: Vec<PointSensitivity>) -> Self {
        let mut bundle = Self::new();
        bundle.price_curve.insert(curve.into(), points);
        bundle
    }

    /// Discounting sensitivities by curve.
    #[must_use]
    pub fn yield_discounting(&self) -> &PointMap<PointSensitivity> {
        &self.yield_discounting
    }

    /// Forward sensitivities by curve.
    #[must_use]
    pub fn forward(&self) -> &PointMap<ForwardPointSensitivity> {
        &self.forward
    }

    /// Price curve sensitivities by curve.
    #[must_use]
    pub fn price_curve(&self) -> &PointMap<PointSensitivity> {
        &self.price_curve
    }

    /// Every curve named in any category, sorted and without duplicates.
    #[must_use]
    pub fn curve_names(&self) -> Vec<&CurveName> {
        let mut names: Vec<&CurveName> = self
            .yield_discounting
            .keys()
            .chain(self.forward.keys())
            .chain(self.price_curve.keys())
            .collect();
        names.sort();
        names.dedup();
        names
    }

    /// Returns true if no category has any curve.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.yield_discounting.is_empty() && self.forward.is_empty() && self.price_curve.is_empty()
    }

    /// Number of points across all categories.
    #[must_use]
    pub fn point_count(&self) -> usize {
        count(&self.yield_discounting) + count(&self.forward) + count(&self.price_curve)
    }

    /// Sum of every sensitivity value across all categories.
    #[must_use]
    pub fn total_value(&self) -> f64 {
        total(&self.yield_discounting) + total(&self.forward) + total(&self.price_curve)
    }

    /// Concatenates per curve and category: `self`'s points, then `other`'s.
    ///
    /// No values are summed; use [`cleaned`](Self::cleaned) for that.
    #[must_use]
    pub fn plus(&self, other: &Self) -> Self {
        Self {
            yield_discounting: concat_maps(&self.yield_discounting, &other.yield_discounting),
            forward: concat_maps(&self.forward, &other.forward),
            price_curve: concat_maps(&self.price_curve, &other.price_curve),
        }
    }

    /// Multiplies every value by `factor`.
    ///
    /// Locations are unchanged, and every curve key survives even when
    /// `factor` is zero.
    #[must_use]
    pub fn multiplied_by(&self, factor: f64) -> Self {
        Self {
            yield_discounting: scale_map(&self.yield_discounting, factor),
            forward: scale_map(&self.forward, factor),
            price_curve: scale_map(&self.price_curve, factor),
        }
    }

    /// Sums values at identical locations and sorts every list by location.
    ///
    /// Locations match only when bit-identical, so `1.0` and
    /// `1.0 + f64::EPSILON` stay separate. See
    /// [`cleaned_within`](Self::cleaned_within) for a tolerance-based merge.
    #[must_use]
    pub fn cleaned(&self) -> Self {
        let cleaned = Self {
            yield_discounting: clean_map(&self.yield_discounting),
            forward: clean_map(&self.forward),
            price_curve: clean_map(&self.price_curve),
        };
        debug!(
            points_in = self.point_count(),
            points_out = cleaned.point_count(),
            "cleaned sensitivity bundle"
        );
        cleaned
    }

    /// Like [`cleaned`](Self::cleaned), but merges points whose location
    /// components are all within `tolerance` of a group's first point.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `tolerance` is negative or NaN.
    pub fn cleaned_within(&self, tolerance: f64) -> RiskResult<Self> {
        let cleaned = Self {
            yield_discounting: clean_map_within(&self.yield_discounting, tolerance)?,
            forward: clean_map_within(&self.forward, tolerance)?,
            price_curve: clean_map_within(&self.price_curve, tolerance)?,
        };
        debug!(
            tolerance,
            points_in = self.point_count(),
            points_out = cleaned.point_count(),
            "cleaned sensitivity bundle within tolerance"
        );
        Ok(cleaned)
    }

    /// Compares discounting and forward sensitivities within `tolerance`.
    ///
    /// Both bundles **must be cleaned first**: lists are compared position by
    /// position, not matched by location.
    ///
    /// Returns false if either category has different curve names, or if any
    /// pair of lists differs in length. Price curve sensitivities are not
    /// compared.
    #[must_use]
    pub fn approximately_equal(&self, other: &Self, tolerance: f64) -> bool {
        maps_approximately_equal(&self.yield_discounting, &other.yield_discounting, tolerance)
            && maps_approximately_equal(&self.forward, &other.forward, tolerance)
    }
}

fn count<P>(map: &PointMap<P>) -> usize {
    map.values().map(Vec::len).sum()
}

fn total<P: SensitivityPoint>(map: &PointMap<P>) -> f64 {
    map.values().flatten().map(SensitivityPoint::value).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn sample() -> CurveSensitivityBundle {
        CurveSensitivityBundle::of_yield_discounting(
            "USD-OIS",
            vec![PointSensitivity::new(1.0, 100.0), PointSensitivity::new(2.0, 200.0)],
        )
        .plus(&CurveSensitivityBundle::of_forward(
            "USD-LIBOR3M",
            vec![ForwardPointSensitivity::new(0.25, 0.5, 0.25, -50.0)],
        ))
        .plus(&CurveSensitivityBundle::of_price_curve(
            "USD-CPI",
            vec![PointSensitivity::new(5.0, 10.0)],
        ))
    }

    #[test]
    fn test_curve_names_deduplicated() {
        let bundle = sample().plus(&CurveSensitivityBundle::of_price_curve(
            "USD-OIS",
            vec![PointSensitivity::new(1.0, 1.0)],
        ));
        let names: Vec<&str> = bundle.curve_names().into_iter().map(CurveName::as_str).collect();
        assert_eq!(names, vec!["USD-CPI", "USD-LIBOR3M", "USD-OIS"]);
    }

    #[test]
    fn test_total_and_count() {
        let bundle = sample();
        assert_eq!(bundle.point_count(), 4);
        assert_relative_eq!(bundle.total_value(), 260.0);
        assert!(!bundle.is_empty());
        assert!(CurveSensitivityBundle::new().is_empty());
    }

    #[test]
    fn test_from_borrowed_maps_copies() {
        let mut discounting = PointMap::new();
        discounting.insert(CurveName::from("X"), vec![PointSensitivity::new(1.0, 1.0)]);
        let bundle =
            CurveSensitivityBundle::from_borrowed_maps(&discounting, &PointMap::new(), &PointMap::new());

        discounting
            .get_mut("X")
            .unwrap()
            .push(PointSensitivity::new(2.0, 2.0));
        assert_eq!(bundle.yield_discounting()["X"].len(), 1);
    }

    #[test]
    fn test_serde_roundtrip() {
        let bundle = sample();
        let json = serde_json::to_string(&bundle).unwrap();
        let parsed: CurveSensitivityBundle = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, bundle);

        let empty: CurveSensitivityBundle = serde_json::from_str("{}").unwrap();
        assert!(empty.is_empty());
    }

    #[test]
    fn test_cleaned_within_propagates_error() {
        assert!(sample().cleaned_within(-1.0).is_err());
    }
}
