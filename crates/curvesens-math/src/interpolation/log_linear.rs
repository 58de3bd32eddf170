//! Log-linear interpolation.
//!
//! Interpolates the logarithm of values, which is useful for discount factors
//! as it ensures positive values and piecewise constant forward rates.

use crate::error::{MathError, MathResult};
use crate::interpolation::{check_range, find_segment, validate_nodes, Interpolator, NodeSensitivity};

/// Log-linear interpolation between data points.
///
/// ```text
/// y(x) = exp((1 - w) * ln(y_i) + w * ln(y_{i+1}))
/// ```
///
/// The node sensitivities follow directly:
///
/// ```text
/// dy/dy_i     = (1 - w) * y(x) / y_i
/// dy/dy_{i+1} = w * y(x) / y_{i+1}
/// ```
///
/// # Example
///
/// ```rust
/// use curvesens_math::interpolation::{LogLinearInterpolator, Interpolator};
///
/// let times = vec![0.0, 1.0, 2.0, 3.0];
/// let discount_factors = vec![1.0, 0.97, 0.94, 0.91];
///
/// let interp = LogLinearInterpolator::new(times, discount_factors).unwrap();
/// let df = interp.interpolate(1.5).unwrap();
/// assert!(df > 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct LogLinearInterpolator {
    xs: Vec<f64>,
    ys: Vec<f64>,
    /// Precomputed log(y) values
    log_ys: Vec<f64>,
}

impl LogLinearInterpolator {
    /// Creates a new log-linear interpolator.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - There are fewer than 2 points
    /// - Lengths differ
    /// - Any x or y value is not finite
    /// - Any y value is non-positive
    pub fn new(xs: Vec<f64>, ys: Vec<f64>) -> MathResult<Self> {
        validate_nodes(&xs, &ys)?;

        let mut log_ys = Vec::with_capacity(ys.len());
        for (i, &y) in ys.iter().enumerate() {
            if !(y > 0.0 && y.is_finite()) {
                return Err(MathError::invalid_input(format!(
                    "y[{i}] = {y} is not positive and finite; log-linear requires positive values"
                )));
            }
            log_ys.push(y.ln());
        }

        Ok(Self { xs, ys, log_ys })
    }

    /// Returns the original y values.
    #[must_use]
    pub fn y_values(&self) -> &[f64] {
        &self.ys
    }

    fn segment_weight(&self, x: f64) -> (usize, f64) {
        let i = find_segment(&self.xs, x);
        let w = (x - self.xs[i]) / (self.xs[i + 1] - self.xs[i]);
        (i, w)
    }

    fn log_value(&self, i: usize, w: f64) -> f64 {
        (1.0 - w) * self.log_ys[i] + w * self.log_ys[i + 1]
    }
}

impl Interpolator for LogLinearInterpolator {
    fn interpolate(&self, x: f64) -> MathResult<f64> {
        check_range(&self.xs, x)?;
        let (i, w) = self.segment_weight(x);
        Ok(self.log_value(i, w).exp())
    }

    fn min_x(&self) -> f64 {
        self.xs[0]
    }

    fn max_x(&self) -> f64 {
        self.xs[self.xs.len() - 1]
    }
}

impl NodeSensitivity for LogLinearInterpolator {
    fn node_sensitivity(&self, x: f64) -> MathResult<Vec<f64>> {
        check_range(&self.xs, x)?;
        let (i, w) = self.segment_weight(x);
        let y = self.log_value(i, w).exp();
        let mut weights = vec![0.0; self.xs.len()];
        weights[i] = (1.0 - w) * y / self.ys[i];
        weights[i + 1] = w * y / self.ys[i + 1];
        Ok(weights)
    }

    fn node_count(&self) -> usize {
        self.xs.len()
    }
}
