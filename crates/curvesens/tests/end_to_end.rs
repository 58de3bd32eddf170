//! End-to-end: from trade-level point sensitivities to a parameter report.

use approx::assert_relative_eq;
use curvesens::prelude::*;

fn provider() -> CurveProvider {
    CurveProvider::new()
        .with_curve(
            "USD-SOFR",
            DiscountFactorCurve::new(vec![1.0, 2.0, 5.0], vec![0.97, 0.94, 0.85]).unwrap(),
        )
        .with_curve("EUR-ESTR", FlatZeroCurve::new(0.025))
        .with_index_alias("SOFR", "USD-SOFR")
}

#[test]
fn test_trade_to_parameter_report() {
    let config = SensitivityConfig::from_toml_str(
        r#"
        name = "eod"
        reporting_currency = "USD"
        "#,
    )
    .unwrap();

    let usd_trade_1 = CurveSensitivityBundle::of_yield_discounting(
        "USD-SOFR",
        vec![PointSensitivity::new(2.0, -180.0)],
    )
    .plus(&CurveSensitivityBundle::of_forward(
        "USD-SOFR",
        vec![ForwardPointSensitivity::new(1.0, 2.0, 1.0, 95.0)],
    ));
    let usd_trade_2 =
        CurveSensitivityBundle::of_yield_discounting("USD-SOFR", vec![PointSensitivity::new(2.0, -20.0)]);
    let eur_trade =
        CurveSensitivityBundle::of_yield_discounting("EUR-ESTR", vec![PointSensitivity::new(3.0, 40.0)]);

    let usd = config.clean(&usd_trade_1.plus(&usd_trade_2)).unwrap();
    assert_eq!(usd.yield_discounting()["USD-SOFR"], vec![PointSensitivity::new(2.0, -200.0)]);

    let portfolio = MultipleCurrencySensitivity::of(Currency::USD, usd)
        .plus(&MultipleCurrencySensitivity::of(Currency::EUR, eur_trade));
    let fx = FxMatrix::new().with_rate(Currency::EUR, Currency::USD, 1.1).unwrap();

    let report = config
        .projector()
        .point_to_parameter(&config.to_reporting_currency(&portfolio, &fx).unwrap(), &provider())
        .unwrap();
    let native = config.projector().point_to_parameter(&portfolio, &provider()).unwrap();

    assert_eq!(report.len(), 2);
    assert_relative_eq!(report.get("EUR-ESTR", Currency::USD).unwrap()[0], 44.0, epsilon = 1e-12);
    assert_relative_eq!(
        report.total_sensitivity(&fx, Currency::USD).unwrap(),
        native.total_sensitivity(&fx, Currency::USD).unwrap(),
        epsilon = 1e-9
    );
}

#[test]
fn test_index_lookup_through_facade() {
    let provider = provider();
    let curve = provider.curve_for_index("SOFR").unwrap();
    assert_eq!(curve.number_of_parameters(), 3);
    assert!(provider.curve_for_index("ESTR").unwrap_err().is_lookup_miss());
}
