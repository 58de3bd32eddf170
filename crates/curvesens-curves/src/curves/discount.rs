//! Discount-factor curve with log-linear interpolation.

use nalgebra::DVector;

use curvesens_math::interpolation::{Interpolator, LogLinearInterpolator, NodeSensitivity};

use crate::error::{CurveError, CurveResult};
use crate::traits::{check_parameter_count, ParameterizedCurve};

/// A curve defined by discount factors at node times.
///
/// Discount factors are interpolated log-linearly, anchored at `DF(0) = 1`.
/// Before the first node and beyond the last node the zero rate is held flat,
/// and `DF(t) = exp(-r(t) * t)` holds for every `t`. The parameters are the
/// node discount factors; the parameter sensitivity is the gradient of the
/// zero rate with respect to them:
///
/// ```text
/// r(t) = -ln DF(t) / t
/// dr(t)/dD_i = -(1 / t) * (dDF(t)/dD_i) / DF(t)
/// ```
#[derive(Debug, Clone)]
pub struct DiscountFactorCurve {
    times: Vec<f64>,
    discount_factors: Vec<f64>,
    /// Interpolator over the anchored nodes `[0, t_1, ..., t_n]`.
    interpolator: LogLinearInterpolator,
}

impl DiscountFactorCurve {
    /// Creates a curve from node times and discount factors.
    ///
    /// # Errors
    ///
    /// Returns an error if no nodes are given, the lengths differ, any input is
    /// not finite, any time is not strictly positive and increasing, or any
    /// discount factor is not strictly positive.
    pub fn new(times: Vec<f64>, discount_factors: Vec<f64>) -> CurveResult<Self> {
        if times.is_empty() {
            return Err(CurveError::invalid_data("discount curve needs at least one node"));
        }
        if times.iter().chain(discount_factors.iter()).any(|x| !x.is_finite()) {
            return Err(CurveError::invalid_data(
                "node times and discount factors must be finite",
            ));
        }
        if times[0] <= 0.0 {
            return Err(CurveError::invalid_data(format!(
                "first node time must be positive, got {}",
                times[0]
            )));
        }

        let mut xs = Vec::with_capacity(times.len() + 1);
        xs.push(0.0);
        xs.extend_from_slice(&times);
        let mut ys = Vec::with_capacity(discount_factors.len() + 1);
        ys.push(1.0);
        ys.extend_from_slice(&discount_factors);
        let interpolator = LogLinearInterpolator::new(xs, ys)?;

        Ok(Self {
            times,
            discount_factors,
            interpolator,
        })
    }

    /// Returns the node times.
    #[must_use]
    pub fn times(&self) -> &[f64] {
        &self.times
    }

    /// Returns the node discount factors.
    #[must_use]
    pub fn discount_factors(&self) -> &[f64] {
        &self.discount_factors
    }

    fn last_node(&self) -> (usize, f64, f64) {
        let n = self.times.len() - 1;
        (n, self.times[n], self.discount_factors[n])
    }

    /// Gradient of a flat-held node rate `-ln(D_i) / t_i` with respect to `D_i`.
    fn node_rate_gradient(&self, i: usize) -> DVector<f64> {
        let mut gradient = DVector::zeros(self.times.len());
        gradient[i] = -1.0 / (self.times[i] * self.discount_factors[i]);
        gradient
    }
}

impl ParameterizedCurve for DiscountFactorCurve {
    fn number_of_parameters(&self) -> usize {
        self.times.len()
    }

    fn parameters(&self) -> DVector<f64> {
        DVector::from_column_slice(&self.discount_factors)
    }

    fn zero_rate(&self, t: f64) -> CurveResult<f64> {
        let (_, t_n, d_n) = self.last_node();
        if t <= 0.0 {
            return Ok(-self.discount_factors[0].ln() / self.times[0]);
        }
        if t > t_n {
            return Ok(-d_n.ln() / t_n);
        }
        Ok(-self.interpolator.interpolate(t)?.ln() / t)
    }

    fn discount_factor(&self, t: f64) -> CurveResult<f64> {
        let (_, t_n, _) = self.last_node();
        if t <= 0.0 || t > t_n {
            let r = self.zero_rate(t)?;
            return Ok((-r * t).exp());
        }
        Ok(self.interpolator.interpolate(t)?)
    }

    fn parameter_sensitivity(&self, t: f64) -> CurveResult<DVector<f64>> {
        let (n, t_n, _) = self.last_node();
        if t <= 0.0 {
            return Ok(self.node_rate_gradient(0));
        }
        if t > t_n {
            return Ok(self.node_rate_gradient(n));
        }

        let df = self.interpolator.interpolate(t)?;
        let weights = self.interpolator.node_sensitivity(t)?;
        // weights[0] is the fixed DF(0) = 1 anchor, not a parameter.
        let gradient = weights[1..].iter().map(|w| -w / (t * df)).collect();
        Ok(DVector::from_vec(gradient))
    }

    fn with_parameters(&self, parameters: &[f64]) -> CurveResult<Box<dyn ParameterizedCurve>> {
        check_parameter_count(self.number_of_parameters(), parameters)?;
        Ok(Box::new(Self::new(self.times.clone(), parameters.to_vec())?))
    }
}
