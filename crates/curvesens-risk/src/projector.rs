//! Projection of point sensitivities onto curve parameters.
//!
//! A point sensitivity says how a quantity moves with the curve value at one
//! location. A curve's parameter sensitivity says how the curve value at that
//! location moves with each parameter. The chain rule combines the two:
//!
//! ```text
//! dV/dp_i = Σ_points v_point · d(curve value at point)/dp_i
//! ```

use std::collections::BTreeSet;

use nalgebra::DVector;
use tracing::{debug, trace};

use curvesens_core::{Currency, CurveName, ForwardPointSensitivity, PointSensitivity};
use curvesens_curves::{CurveError, CurveProvider, CurveResult, ParameterizedCurve};

use crate::aggregator::PointMap;
use crate::bundle::CurveSensitivityBundle;
use crate::error::RiskResult;
use crate::multi_currency::MultipleCurrencySensitivity;
use crate::parameter::ParameterSensitivity;

/// Projects point sensitivities onto the parameters of the curves they refer to.
///
/// Curves listed as excluded are skipped by
/// [`point_to_parameter`](Self::point_to_parameter); use this for curves held
/// fixed during calibration.
///
/// # Example
///
/// ```rust
/// use curvesens_core::PointSensitivity;
/// use curvesens_curves::FlatZeroCurve;
/// use curvesens_risk::ParameterSensitivityProjector;
///
/// let curve = FlatZeroCurve::new(0.03);
/// let points = [PointSensitivity::new(1.0, 100.0), PointSensitivity::new(2.0, 50.0)];
///
/// let projected = ParameterSensitivityProjector::project_discounting(&curve, &points).unwrap();
/// assert_eq!(projected.as_slice(), &[150.0]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ParameterSensitivityProjector {
    excluded_curves: BTreeSet<CurveName>,
}

impl ParameterSensitivityProjector {
    /// Creates a projector with no excluded curves.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the curves to skip.
    #[must_use]
    pub fn with_excluded_curves<I, N>(mut self, curves: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<CurveName>,
    {
        self.excluded_curves = curves.into_iter().map(Into::into).collect();
        self
    }

    /// Adds one curve to skip.
    #[must_use]
    pub fn excluding(mut self, curve: impl Into<CurveName>) -> Self {
        self.excluded_curves.insert(curve.into());
        self
    }

    /// Curves skipped by projection.
    #[must_use]
    pub fn excluded_curves(&self) -> &BTreeSet<CurveName> {
        &self.excluded_curves
    }

    /// Returns true if the curve is skipped.
    #[must_use]
    pub fn is_excluded(&self, curve: &str) -> bool {
        self.excluded_curves.contains(curve)
    }

    /// Projects zero-rate point sensitivities onto curve parameters.
    ///
    /// For each point `(t, v)`, adds `v * curve.parameter_sensitivity(t)`.
    /// An empty slice gives a zero vector of length
    /// `curve.number_of_parameters()`.
    ///
    /// # Errors
    ///
    /// Propagates curve errors, including `ShapeMismatch` when the curve
    /// reports a gradient of the wrong length.
    pub fn project_discounting<C>(
        curve: &C,
        points: &[PointSensitivity],
    ) -> CurveResult<DVector<f64>>
    where
        C: ParameterizedCurve + ?Sized,
    {
        let mut result = DVector::zeros(curve.number_of_parameters());
        for point in points {
            let gradient = curve.checked_parameter_sensitivity(point.time)?;
            trace!(time = point.time, value = point.value, "projecting discounting point");
            result.axpy(point.value, &gradient, 1.0);
        }
        Ok(result)
    }

    /// Projects forward-rate point sensitivities onto curve parameters.
    ///
    /// For the forward rate `F = (DF(s) / DF(e) - 1) / a` and a point
    /// `(s, e, a, v)`:
    ///
    /// ```text
    /// d_start = -s * DF(s) / (DF(e) * a)
    /// d_end   =  e * DF(s) / (DF(e) * a)
    /// result += (d_start * grad(s) + d_end * grad(e)) * v
    /// ```
    ///
    /// The `s` and `e` factors come from `dDF(t)/dp = -t * DF(t) * dr(t)/dp`,
    /// so this is exact when `parameter_sensitivity` is the zero-rate gradient.
    /// An empty slice gives a zero vector.
    ///
    /// # Errors
    ///
    /// Returns `InvalidData` for a point whose accrual factor is zero or not
    /// finite, and propagates curve errors.
    pub fn project_forward<C>(
        curve: &C,
        points: &[ForwardPointSensitivity],
    ) -> CurveResult<DVector<f64>>
    where
        C: ParameterizedCurve + ?Sized,
    {
        let mut result = DVector::zeros(curve.number_of_parameters());
        for point in points {
            if point.accrual_factor == 0.0 || !point.accrual_factor.is_finite() {
                return Err(CurveError::invalid_data(format!(
                    "accrual factor must be non-zero and finite, got {}",
                    point.accrual_factor
                )));
            }
            let df_start = curve.discount_factor(point.start_time)?;
            let df_end = curve.discount_factor(point.end_time)?;
            let denominator = df_end * point.accrual_factor;
            let d_start = -point.start_time * df_start / denominator;
            let d_end = point.end_time * df_start / denominator;

            let grad_start = curve.checked_parameter_sensitivity(point.start_time)?;
            let grad_end = curve.checked_parameter_sensitivity(point.end_time)?;
            trace!(
                start = point.start_time,
                end = point.end_time,
                d_start,
                d_end,
                "projecting forward point"
            );
            result.axpy(d_start * point.value, &grad_start, 1.0);
            result.axpy(d_end * point.value, &grad_end, 1.0);
        }
        Ok(result)
    }

    /// Projects a single-currency bundle.
    ///
    /// Discounting and price curve points use the discounting rule, forward
    /// points the forward rule. Results for the same curve are summed.
    ///
    /// # Errors
    ///
    /// Returns `CurveNotFound` for a curve missing from `provider`; a missing
    /// curve is never treated as zero sensitivity.
    pub fn project_bundle(
        &self,
        bundle: &CurveSensitivityBundle,
        currency: Currency,
        provider: &CurveProvider,
    ) -> RiskResult<ParameterSensitivity> {
        let mut result = ParameterSensitivity::new();
        self.project_map(
            &mut result,
            bundle.yield_discounting(),
            currency,
            provider,
            |curve, points| Self::project_discounting(curve, points),
        )?;
        self.project_map(
            &mut result,
            bundle.forward(),
            currency,
            provider,
            |curve, points| Self::project_forward(curve, points),
        )?;
        self.project_map(
            &mut result,
            bundle.price_curve(),
            currency,
            provider,
            |curve, points| Self::project_discounting(curve, points),
        )?;
        Ok(result)
    }

    /// Projects a multi-currency sensitivity onto the parameters of every
    /// curve it refers to, keeping one vector per curve and currency.
    ///
    /// # Errors
    ///
    /// Returns `CurveNotFound` for a curve missing from `provider`, or any
    /// error raised by the curves themselves.
    pub fn point_to_parameter(
        &self,
        sensitivity: &MultipleCurrencySensitivity,
        provider: &CurveProvider,
    ) -> RiskResult<ParameterSensitivity> {
        let mut result = ParameterSensitivity::new();
        for (currency, bundle) in sensitivity.iter() {
            let projected = self.project_bundle(bundle, currency, provider)?;
            result = result.plus(&projected)?;
        }
        debug!(
            entries = result.len(),
            excluded = self.excluded_curves.len(),
            "projected point sensitivities onto curve parameters"
        );
        Ok(result)
    }

    fn project_map<P>(
        &self,
        result: &mut ParameterSensitivity,
        map: &PointMap<P>,
        currency: Currency,
        provider: &CurveProvider,
        project: impl Fn(&dyn ParameterizedCurve, &[P]) -> CurveResult<DVector<f64>>,
    ) -> RiskResult<()> {
        for (name, points) in map {
            if self.is_excluded(name.as_str()) {
                trace!(curve = %name, "skipping excluded curve");
                continue;
            }
            let curve = provider.curve(name.as_str())?;
            let projected = project(curve, points)?;
            debug!(curve = %name, %currency, points = points.len(), "projected curve");
            result.accumulate((name.clone(), currency), &projected)?;
        }
        Ok(())
    }
}
