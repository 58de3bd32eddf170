//! Interpolated zero-rate curve.

use nalgebra::DVector;

use curvesens_math::interpolation::{Interpolator, LinearInterpolator, NodeSensitivity};

use crate::error::{CurveError, CurveResult};
use crate::traits::{check_parameter_count, ParameterizedCurve};

/// A zero-rate curve linearly interpolated between nodes.
///
/// The parameters are the node zero rates. Outside the node range the rate is
/// held flat at the nearest node, so sensitivities there load entirely on the
/// first or last node.
///
/// # Example
///
/// ```rust
/// use curvesens_curves::{InterpolatedZeroCurve, ParameterizedCurve};
///
/// let curve = InterpolatedZeroCurve::new(
///     vec![1.0, 2.0, 5.0],
///     vec![0.02, 0.025, 0.03],
/// ).unwrap();
///
/// let grad = curve.parameter_sensitivity(1.5).unwrap();
/// assert_eq!(grad.as_slice(), &[0.5, 0.5, 0.0]);
/// ```
#[derive(Debug, Clone)]
pub struct InterpolatedZeroCurve {
    interpolator: LinearInterpolator,
}

impl InterpolatedZeroCurve {
    /// Creates a curve from node times and zero rates.
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than two nodes are given, the lengths differ,
    /// the times are not strictly increasing, or any input is not finite.
    pub fn new(times: Vec<f64>, rates: Vec<f64>) -> CurveResult<Self> {
        if times.iter().chain(rates.iter()).any(|x| !x.is_finite()) {
            return Err(CurveError::invalid_data("node times and rates must be finite"));
        }
        let interpolator = LinearInterpolator::new(times, rates)?;
        Ok(Self { interpolator })
    }

    /// Returns the node times.
    #[must_use]
    pub fn times(&self) -> &[f64] {
        self.interpolator.x_values()
    }

    /// Returns the node zero rates.
    #[must_use]
    pub fn rates(&self) -> &[f64] {
        self.interpolator.y_values()
    }

    fn clamp(&self, t: f64) -> f64 {
        t.clamp(self.interpolator.min_x(), self.interpolator.max_x())
    }
}

impl ParameterizedCurve for InterpolatedZeroCurve {
    fn number_of_parameters(&self) -> usize {
        self.interpolator.node_count()
    }

    fn parameters(&self) -> DVector<f64> {
        DVector::from_column_slice(self.rates())
    }

    fn zero_rate(&self, t: f64) -> CurveResult<f64> {
        Ok(self.interpolator.interpolate(self.clamp(t))?)
    }

    fn parameter_sensitivity(&self, t: f64) -> CurveResult<DVector<f64>> {
        let weights = self.interpolator.node_sensitivity(self.clamp(t))?;
        Ok(DVector::from_vec(weights))
    }

    fn with_parameters(&self, parameters: &[f64]) -> CurveResult<Box<dyn ParameterizedCurve>> {
        check_parameter_count(self.number_of_parameters(), parameters)?;
        Ok(Box::new(Self::new(self.times().to_vec(), parameters.to_vec())?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn sample_curve() -> InterpolatedZeroCurve {
        InterpolatedZeroCurve::new(
            vec![0.25, 0.5, 1.0, 2.0, 5.0, 10.0],
            vec![0.030, 0.031, 0.033, 0.035, 0.038, 0.040],
        )
        .unwrap()
    }

    #[test]
    fn test_flat_extrapolation() {
        let curve = sample_curve();
        assert_relative_eq!(curve.zero_rate(0.0).unwrap(), 0.030);
        assert_relative_eq!(curve.zero_rate(30.0).unwrap(), 0.040);

        let grad = curve.parameter_sensitivity(30.0).unwrap();
        assert_eq!(grad[5], 1.0);
        assert_eq!(grad.iter().sum::<f64>(), 1.0);
    }

    #[test]
    fn test_gradient_matches_bump() {
        let curve = sample_curve();
        let t = 3.7;
        let grad = curve.parameter_sensitivity(t).unwrap();
        let h = 1e-7;

        let base = curve.zero_rate(t).unwrap();
        for i in 0..curve.number_of_parameters() {
            let mut p = curve.rates().to_vec();
            p[i] += h;
            let bumped = curve.with_parameters(&p).unwrap();
            let fd = (bumped.zero_rate(t).unwrap() - base) / h;
            assert_relative_eq!(grad[i], fd, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_invalid_inputs() {
        assert!(InterpolatedZeroCurve::new(vec![1.0], vec![0.02]).is_err());
        assert!(InterpolatedZeroCurve::new(vec![1.0, 2.0], vec![0.02, f64::NAN]).is_err());
        assert!(InterpolatedZeroCurve::new(vec![2.0, 1.0], vec![0.02, 0.03]).is_err());
    }
}
