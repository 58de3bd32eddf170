//! Flat zero-rate curve.

use nalgebra::DVector;
use serde::{Deserialize, Serialize};

use crate::error::CurveResult;
use crate::traits::{check_parameter_count, ParameterizedCurve};

/// A curve with a single constant zero rate.
///
/// The only parameter is the rate itself, so the parameter sensitivity is
/// `[1.0]` at every time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlatZeroCurve {
    rate: f64,
}

impl FlatZeroCurve {
    /// Creates a flat curve at the given continuously compounded rate.
    #[must_use]
    pub fn new(rate: f64) -> Self {
        Self { rate }
    }

    /// Returns the rate.
    #[must_use]
    pub fn rate(&self) -> f64 {
        self.rate
    }
}

impl ParameterizedCurve for FlatZeroCurve {
    fn number_of_parameters(&self) -> usize {
        1
    }

    fn parameters(&self) -> DVector<f64> {
        DVector::from_element(1, self.rate)
    }

    fn zero_rate(&self, _t: f64) -> CurveResult<f64> {
        Ok(self.rate)
    }

    fn parameter_sensitivity(&self, _t: f64) -> CurveResult<DVector<f64>> {
        Ok(DVector::from_element(1, 1.0))
    }

    fn with_parameters(&self, parameters: &[f64]) -> CurveResult<Box<dyn ParameterizedCurve>> {
        check_parameter_count(1, parameters)?;
        Ok(Box::new(Self::new(parameters[0])))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_flat_forward_equals_simple_rate() {
        let curve = FlatZeroCurve::new(0.03);
        let fwd = curve.forward_rate(1.0, 2.0, 1.0).unwrap();
        assert_relative_eq!(fwd, 0.03_f64.exp() - 1.0, epsilon = 1e-14);
    }

    #[test]
    fn test_with_parameters() {
        let curve = FlatZeroCurve::new(0.03);
        let bumped = curve.with_parameters(&[0.04]).unwrap();
        assert_relative_eq!(bumped.zero_rate(5.0).unwrap(), 0.04);
        assert!(curve.with_parameters(&[0.04, 0.05]).is_err());
    }
}
