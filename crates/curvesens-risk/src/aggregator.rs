//! Aggregation of curve sensitivity bundles.
//!
//! The four bundle operations ([`add`], [`scale`], [`clean`],
//! [`approximately_equal`]) are written once over [`SensitivityPoint`] and
//! applied to each sensitivity category. The per-map routines are public so
//! that callers holding bare maps can use them directly.
//!
//! # Example
//!
//! ```rust
//! use curvesens_core::PointSensitivity;
//! use curvesens_risk::aggregator;
//! use curvesens_risk::CurveSensitivityBundle;
//!
//! let a = CurveSensitivityBundle::of_yield_discounting(
//!     "USD-OIS",
//!     vec![PointSensitivity::new(1.0, 3.0), PointSensitivity::new(2.0, 5.0)],
//! );
//! let b = CurveSensitivityBundle::of_yield_discounting(
//!     "USD-OIS",
//!     vec![PointSensitivity::new(1.0, -1.0)],
//! );
//!
//! let total = aggregator::clean(&aggregator::add(&a, &b));
//! assert_eq!(
//!     total.yield_discounting()["USD-OIS"],
//!     vec![PointSensitivity::new(1.0, 2.0), PointSensitivity::new(2.0, 5.0)],
//! );
//! ```

use std::collections::BTreeMap;

use curvesens_core::{CurveName, SensitivityPoint};
use tracing::trace;

use crate::bundle::CurveSensitivityBundle;
use crate::error::{RiskError, RiskResult};

/// Point sensitivities keyed by curve.
pub type PointMap<P> = BTreeMap<CurveName, Vec<P>>;

// =============================================================================
// Bundle operations
// =============================================================================

/// Concatenates two bundles category by category, `a`'s points first.
#[must_use]
pub fn add(a: &CurveSensitivityBundle, b: &CurveSensitivityBundle) -> CurveSensitivityBundle {
    a.plus(b)
}

/// Multiplies every sensitivity value by `factor`.
#[must_use]
pub fn scale(bundle: &CurveSensitivityBundle, factor: f64) -> CurveSensitivityBundle {
    bundle.multiplied_by(factor)
}

/// Sums points at identical locations and sorts each list by location.
#[must_use]
pub fn clean(bundle: &CurveSensitivityBundle) -> CurveSensitivityBundle {
    bundle.cleaned()
}

/// Compares the discounting and forward sensitivities of two cleaned bundles.
///
/// See [`CurveSensitivityBundle::approximately_equal`].
#[must_use]
pub fn approximately_equal(
    a: &CurveSensitivityBundle,
    b: &CurveSensitivityBundle,
    tolerance: f64,
) -> bool {
    a.approximately_equal(b, tolerance)
}

// =============================================================================
// Generic map routines
// =============================================================================

/// Concatenates per-curve lists: for every curve in either map, `a`'s list
/// followed by `b`'s list.
#[must_use]
pub fn concat_maps<P: SensitivityPoint>(a: &PointMap<P>, b: &PointMap<P>) -> PointMap<P> {
    let mut result = a.clone();
    for (curve, points) in b {
        result
            .entry(curve.clone())
            .or_default()
            .extend_from_slice(points);
    }
    result
}

/// Multiplies every value in the map by `factor`, keeping every key.
#[must_use]
pub fn scale_map<P: SensitivityPoint>(map: &PointMap<P>, factor: f64) -> PointMap<P> {
    map.iter()
        .map(|(curve, points)| {
            let scaled = points
                .iter()
                .map(|p| p.with_value(p.value() * factor))
                .collect();
            (curve.clone(), scaled)
        })
        .collect()
}

/// Cleans every list in the map with [`clean_points`].
#[must_use]
pub fn clean_map<P: SensitivityPoint>(map: &PointMap<P>) -> PointMap<P> {
    map.iter()
        .map(|(curve, points)| (curve.clone(), clean_points(points)))
        .collect()
}

/// Cleans every list in the map with [`clean_points_within`].
///
/// # Errors
///
/// Returns `InvalidArgument` if `tolerance` is negative or NaN.
pub fn clean_map_within<P: SensitivityPoint>(
    map: &PointMap<P>,
    tolerance: f64,
) -> RiskResult<PointMap<P>> {
    map.iter()
        .map(|(curve, points)| -> RiskResult<(CurveName, Vec<P>)> {
            Ok((curve.clone(), clean_points_within(points, tolerance)?))
        })
        .collect()
}

/// Sums values at bit-identical locations and sorts ascending by location.
///
/// Locations that differ in any bit stay separate, however close they are.
#[must_use]
pub fn clean_points<P: SensitivityPoint>(points: &[P]) -> Vec<P> {
    merge_sorted(points, SensitivityPoint::same_location)
}

/// Like [`clean_points`], but a point merges into the current group when
/// every location component is within `tolerance` of the group's first point.
///
/// The merged point keeps the location of the group's first point.
///
/// # Errors
///
/// Returns `InvalidArgument` if `tolerance` is negative or NaN.
pub fn clean_points_within<P: SensitivityPoint>(
    points: &[P],
    tolerance: f64,
) -> RiskResult<Vec<P>> {
    check_tolerance(tolerance)?;
    Ok(merge_sorted(points, |p, q| p.location_distance(q) <= tolerance))
}

/// Positional comparison of two maps with identical key sets.
#[must_use]
pub fn maps_approximately_equal<P: SensitivityPoint>(
    a: &PointMap<P>,
    b: &PointMap<P>,
    tolerance: f64,
) -> bool {
    if !a.keys().eq(b.keys()) {
        return false;
    }
    a.iter().zip(b.values()).all(|((curve, left), right)| {
        let equal = lists_approximately_equal(left, right, tolerance);
        if !equal {
            trace!(curve = %curve, "sensitivity lists differ");
        }
        equal
    })
}

fn lists_approximately_equal<P: SensitivityPoint>(left: &[P], right: &[P], tolerance: f64) -> bool {
    left.len() == right.len()
        && left.iter().zip(right).all(|(p, q)| {
            p.location_distance(q) <= tolerance && (p.value() - q.value()).abs() <= tolerance
        })
}

fn check_tolerance(tolerance: f64) -> RiskResult<()> {
    if tolerance.is_nan() || tolerance < 0.0 {
        return Err(RiskError::invalid_argument(format!(
            "tolerance must be non-negative, got {tolerance}"
        )));
    }
    Ok(())
}

/// Sorts by location then folds each point into the current group when
/// `joins(group_anchor, point)` holds.
fn merge_sorted<P, F>(points: &[P], joins: F) -> Vec<P>
where
    P: SensitivityPoint,
    F: Fn(&P, &P) -> bool,
{
    let mut sorted = points.to_vec();
    sorted.sort_by(SensitivityPoint::cmp_location);

    let mut merged: Vec<P> = Vec::with_capacity(sorted.len());
    for point in sorted {
        match merged.last_mut() {
            Some(group) if joins(&*group, &point) => {
                *group = group.with_value(group.value() + point.value());
            }
            _ => merged.push(point),
        }
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use curvesens_core::{ForwardPointSensitivity, PointSensitivity};

    fn pts(raw: &[(f64, f64)]) -> Vec<PointSensitivity> {
        raw.iter().copied().map(PointSensitivity::from).collect()
    }

    #[test]
    fn test_clean_points_sums_and_sorts() {
        let cleaned = clean_points(&pts(&[(2.0, 5.0), (1.0, 3.0), (1.0, -1.0)]));
        assert_eq!(cleaned, pts(&[(1.0, 2.0), (2.0, 5.0)]));
    }

    #[test]
    fn test_clean_points_signed_zero_is_two_locations() {
        let cleaned = clean_points(&pts(&[(0.0, 1.0), (-0.0, 1.0)]));
        assert_eq!(cleaned.len(), 2);
        assert!(cleaned[0].time.is_sign_negative());
    }

    #[test]
    fn test_clean_forward_lexicographic() {
        let points = vec![
            ForwardPointSensitivity::new(1.0, 2.0, 1.0, 1.0),
            ForwardPointSensitivity::new(0.5, 1.0, 0.5, 2.0),
            ForwardPointSensitivity::new(1.0, 1.5, 0.5, 3.0),
            ForwardPointSensitivity::new(1.0, 2.0, 1.0, 4.0),
        ];
        let cleaned = clean_points(&points);
        assert_eq!(
            cleaned,
            vec![
                ForwardPointSensitivity::new(0.5, 1.0, 0.5, 2.0),
                ForwardPointSensitivity::new(1.0, 1.5, 0.5, 3.0),
                ForwardPointSensitivity::new(1.0, 2.0, 1.0, 5.0),
            ]
        );
    }

    #[test]
    fn test_clean_within_groups_on_first_point() {
        let points = pts(&[(1.0, 1.0), (1.05, 1.0), (1.15, 1.0)]);
        let cleaned = clean_points_within(&points, 0.1).unwrap();
        assert_eq!(cleaned, pts(&[(1.0, 2.0), (1.15, 1.0)]));
    }

    #[test]
    fn test_clean_within_rejects_bad_tolerance() {
        assert!(clean_points_within(&pts(&[(1.0, 1.0)]), -1e-9).is_err());
        assert!(clean_points_within(&pts(&[(1.0, 1.0)]), f64::NAN).is_err());
        assert!(clean_points_within(&pts(&[(1.0, 1.0)]), 0.0).is_ok());
    }

    #[test]
    fn test_concat_maps_keeps_order() {
        let mut a = PointMap::new();
        a.insert(CurveName::from("X"), pts(&[(2.0, 1.0)]));
        let mut b = PointMap::new();
        b.insert(CurveName::from("X"), pts(&[(1.0, 1.0)]));
        b.insert(CurveName::from("Y"), pts(&[(3.0, 1.0)]));

        let c = concat_maps(&a, &b);
        assert_eq!(c["X"], pts(&[(2.0, 1.0), (1.0, 1.0)]));
        assert_eq!(c["Y"], pts(&[(3.0, 1.0)]));
        assert_eq!(a["X"].len(), 1);
    }

    #[test]
    fn test_length_mismatch_is_not_equal() {
        let mut a = PointMap::new();
        a.insert(CurveName::from("X"), pts(&[(1.0, 1.0)]));
        let mut b = PointMap::new();
        b.insert(CurveName::from("X"), pts(&[(1.0, 1.0), (2.0, 0.0)]));
        assert!(!maps_approximately_equal(&a, &b, 1e-6));
        assert!(!maps_approximately_equal(&b, &a, 1e-6));
    }

    #[test]
    fn test_key_mismatch_is_not_equal() {
        let mut a = PointMap::new();
        a.insert(CurveName::from("X"), pts(&[(1.0, 1.0)]));
        let mut b = PointMap::new();
        b.insert(CurveName::from("Y"), pts(&[(1.0, 1.0)]));
        assert!(!maps_approximately_equal(&a, &b, 1e-6));
    }
}
