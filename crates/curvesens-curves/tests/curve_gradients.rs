//! Integration test: parameter sensitivities agree with bump-and-reprice.
//!
//! Every curve type reports the gradient of its zero rate in its parameters.
//! These tests bump each parameter in turn through `with_parameters` and
//! compare the finite difference against the analytic gradient.

use curvesens_curves::prelude::*;
use proptest::prelude::*;

const BUMP: f64 = 1e-7;

// =============================================================================
// HELPERS
// =============================================================================

fn finite_difference_gradient(curve: &dyn ParameterizedCurve, t: f64) -> Vec<f64> {
    let base_params = curve.parameters();
    let base = curve.zero_rate(t).unwrap();
    (0..curve.number_of_parameters())
        .map(|i| {
            let mut bumped = base_params.as_slice().to_vec();
            bumped[i] += BUMP;
            let rate = curve.with_parameters(&bumped).unwrap().zero_rate(t).unwrap();
            (rate - base) / BUMP
        })
        .collect()
}

fn assert_gradient_matches(curve: &dyn ParameterizedCurve, t: f64, tolerance: f64) {
    let analytic = curve.checked_parameter_sensitivity(t).unwrap();
    let numeric = finite_difference_gradient(curve, t);
    for (i, (a, n)) in analytic.iter().zip(&numeric).enumerate() {
        assert!(
            (a - n).abs() < tolerance,
            "t={t}, parameter {i}: analytic {a} vs numeric {n}"
        );
    }
}

fn usd_provider() -> CurveProvider {
    CurveProvider::new()
        .with_curve("USD-FLAT", FlatZeroCurve::new(0.03))
        .with_curve(
            "USD-OIS",
            InterpolatedZeroCurve::new(
                vec![0.25, 1.0, 2.0, 5.0, 10.0, 30.0],
                vec![0.036, 0.035, 0.034, 0.036, 0.040, 0.046],
            )
            .unwrap(),
        )
        .with_curve(
            "USD-DF",
            DiscountFactorCurve::new(vec![0.5, 1.0, 3.0, 10.0], vec![0.982, 0.965, 0.90, 0.69])
                .unwrap(),
        )
        .with_curve(
            "USD-NS",
            NelsonSiegelCurve::new(0.045, -0.012, 0.006, 1.8).unwrap(),
        )
        .with_index_alias("USD-SOFR", "USD-OIS")
}

// =============================================================================
// TESTS
// =============================================================================

#[test]
fn test_all_curves_match_finite_differences() {
    let provider = usd_provider();
    for name in ["USD-FLAT", "USD-OIS", "USD-DF", "USD-NS"] {
        let curve = provider.curve(name).unwrap();
        for t in [0.1, 0.75, 2.5, 7.0, 15.0, 40.0] {
            assert_gradient_matches(curve, t, 1e-5);
        }
    }
}

#[test]
fn test_index_alias_resolves_to_same_curve() {
    let provider = usd_provider();
    let by_index = provider.curve_for_index("USD-SOFR").unwrap();
    let by_name = provider.curve("USD-OIS").unwrap();
    assert_eq!(by_index.parameters(), by_name.parameters());
}

#[test]
fn test_missing_curve_is_reported_by_name() {
    let provider = usd_provider();
    let err = provider.curve("EUR-ESTR").unwrap_err();
    assert!(err.is_lookup_miss());
    assert_eq!(err.to_string(), "Curve not found: EUR-ESTR");
}

proptest! {
    #[test]
    fn prop_linear_zero_weights_sum_to_one(t in -5.0f64..50.0) {
        let provider = usd_provider();
        let grad = provider.curve("USD-OIS").unwrap().parameter_sensitivity(t).unwrap();
        let total: f64 = grad.iter().sum();
        prop_assert!((total - 1.0).abs() < 1e-12);
        prop_assert!(grad.iter().all(|w| *w >= 0.0));
    }

    #[test]
    fn prop_discount_curve_is_consistent_with_zero_rate(t in 0.01f64..25.0) {
        let provider = usd_provider();
        let curve = provider.curve("USD-DF").unwrap();
        let df = curve.discount_factor(t).unwrap();
        let r = curve.zero_rate(t).unwrap();
        prop_assert!((df - (-r * t).exp()).abs() < 1e-12);
    }
}
