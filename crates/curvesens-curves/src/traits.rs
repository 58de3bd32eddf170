//! Core trait for parameterized curves.
//!
//! This module defines [`ParameterizedCurve`], the contract every curve must
//! satisfy to take part in parameter sensitivity projection.

use std::fmt;

use nalgebra::DVector;

use crate::error::{CurveError, CurveResult};

/// A yield curve driven by a finite vector of parameters.
///
/// # Parameter sensitivity contract
///
/// [`parameter_sensitivity`](ParameterizedCurve::parameter_sensitivity) returns
/// the gradient of the continuously compounded **zero rate** at `t` with
/// respect to each curve parameter, not the gradient of the discount factor.
/// Projection of forward-rate sensitivities relies on this: the chain rule
/// `dDF/dp = -t * DF * dr/dp` supplies the `t` factors in the projection
/// formula.
///
/// All methods must be deterministic functions of the curve's current
/// parameters.
///
/// # Example
///
/// ```rust
/// use curvesens_curves::{FlatZeroCurve, ParameterizedCurve};
///
/// let curve = FlatZeroCurve::new(0.05);
/// assert_eq!(curve.number_of_parameters(), 1);
/// assert!((curve.discount_factor(1.0).unwrap() - (-0.05_f64).exp()).abs() < 1e-15);
/// assert_eq!(curve.parameter_sensitivity(7.0).unwrap()[0], 1.0);
/// ```
pub trait ParameterizedCurve: fmt::Debug + Send + Sync {
    /// Number of underlying parameters.
    fn number_of_parameters(&self) -> usize;

    /// Current parameter values, in parameter order.
    fn parameters(&self) -> DVector<f64>;

    /// Returns the continuously compounded zero rate at time `t`.
    fn zero_rate(&self, t: f64) -> CurveResult<f64>;

    /// Returns the gradient of the zero rate at `t` with respect to the parameters.
    fn parameter_sensitivity(&self, t: f64) -> CurveResult<DVector<f64>>;

    /// Returns a copy of this curve with different parameter values.
    ///
    /// # Errors
    ///
    /// Returns `ShapeMismatch` if `parameters` has the wrong length, or an
    /// error if the new parameters do not describe a valid curve.
    fn with_parameters(&self, parameters: &[f64]) -> CurveResult<Box<dyn ParameterizedCurve>>;

    /// Returns the discount factor at time `t`.
    ///
    /// # Default Implementation
    ///
    /// `DF(t) = exp(-r(t) * t)`
    fn discount_factor(&self, t: f64) -> CurveResult<f64> {
        let r = self.zero_rate(t)?;
        Ok((-r * t).exp())
    }

    /// Returns the simply-compounded forward rate over `[start, end]`.
    ///
    /// # Formula
    ///
    /// `F = (DF(start) / DF(end) - 1) / accrual_factor`
    fn forward_rate(&self, start: f64, end: f64, accrual_factor: f64) -> CurveResult<f64> {
        if accrual_factor == 0.0 || !accrual_factor.is_finite() {
            return Err(CurveError::invalid_data("accrual factor must be non-zero and finite"));
        }
        let df_start = self.discount_factor(start)?;
        let df_end = self.discount_factor(end)?;
        Ok((df_start / df_end - 1.0) / accrual_factor)
    }

    /// Returns the parameter sensitivity, failing if its length is wrong.
    ///
    /// Projection code calls this rather than
    /// [`parameter_sensitivity`](ParameterizedCurve::parameter_sensitivity) so
    /// that a misbehaving curve cannot silently corrupt a gradient.
    fn checked_parameter_sensitivity(&self, t: f64) -> CurveResult<DVector<f64>> {
        let gradient = self.parameter_sensitivity(t)?;
        let expected = self.number_of_parameters();
        if gradient.len() != expected {
            return Err(CurveError::ShapeMismatch {
                expected,
                got: gradient.len(),
            });
        }
        Ok(gradient)
    }
}

/// Checks a replacement parameter vector against the expected length.
pub(crate) fn check_parameter_count(expected: usize, parameters: &[f64]) -> CurveResult<()> {
    if parameters.len() != expected {
        return Err(CurveError::ShapeMismatch {
            expected,
            got: parameters.len(),
        });
    }
    Ok(())
}
