//! Linear interpolation.

use crate::error::MathResult;
use crate::interpolation::{check_range, find_segment, validate_nodes, Interpolator, NodeSensitivity};

/// Linear interpolation between data points.
///
/// Connects consecutive nodes with straight lines. The node sensitivity at `x`
/// is the pair of barycentric weights of the segment containing `x`; all other
/// nodes have zero weight.
///
/// # Example
///
/// ```rust
/// use curvesens_math::interpolation::{LinearInterpolator, Interpolator, NodeSensitivity};
///
/// let interp = LinearInterpolator::new(vec![0.0, 1.0, 2.0], vec![0.0, 1.0, 4.0]).unwrap();
/// assert_eq!(interp.interpolate(1.5).unwrap(), 2.5);
/// assert_eq!(interp.node_sensitivity(1.5).unwrap(), vec![0.0, 0.5, 0.5]);
/// ```
#[derive(Debug, Clone)]
pub struct LinearInterpolator {
    xs: Vec<f64>,
    ys: Vec<f64>,
}

impl LinearInterpolator {
    /// Creates a new linear interpolator.
    ///
    /// # Arguments
    ///
    /// * `xs` - X coordinates (must be strictly increasing)
    /// * `ys` - Y coordinates
    ///
    /// # Errors
    ///
    /// Returns an error if there are fewer than 2 points or if lengths differ.
    pub fn new(xs: Vec<f64>, ys: Vec<f64>) -> MathResult<Self> {
        validate_nodes(&xs, &ys)?;
        Ok(Self { xs, ys })
    }

    /// Returns the node abscissae.
    #[must_use]
    pub fn x_values(&self) -> &[f64] {
        &self.xs
    }

    /// Returns the node ordinates.
    #[must_use]
    pub fn y_values(&self) -> &[f64] {
        &self.ys
    }

    /// Segment index and the weight of its right node at x.
    fn segment_weight(&self, x: f64) -> (usize, f64) {
        let i = find_segment(&self.xs, x);
        let w = (x - self.xs[i]) / (self.xs[i + 1] - self.xs[i]);
        (i, w)
    }
}

impl Interpolator for LinearInterpolator {
    fn interpolate(&self, x: f64) -> MathResult<f64> {
        check_range(&self.xs, x)?;
        let (i, w) = self.segment_weight(x);
        Ok(self.ys[i] + w * (self.ys[i + 1] - self.ys[i]))
    }

    fn min_x(&self) -> f64 {
        self.xs[0]
    }

    fn max_x(&self) -> f64 {
        self.xs[self.xs.len() - 1]
    }
}

impl NodeSensitivity for LinearInterpolator {
    fn node_sensitivity(&self, x: f64) -> MathResult<Vec<f64>> {
        check_range(&self.xs, x)?;
        let (i, w) = self.segment_weight(x);
        let mut weights = vec![0.0; self.xs.len()];
        weights[i] = 1.0 - w;
        weights[i + 1] = w;
        Ok(weights)
    }

    fn node_count(&self) -> usize {
        self.xs.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_linear_interpolation() {
        let interp = LinearInterpolator::new(vec![0.0, 1.0, 2.0], vec![0.0, 2.0, 4.0]).unwrap();

        assert_relative_eq!(interp.interpolate(0.0).unwrap(), 0.0, epsilon = 1e-10);
        assert_relative_eq!(interp.interpolate(1.0).unwrap(), 2.0, epsilon = 1e-10);
        assert_relative_eq!(interp.interpolate(0.5).unwrap(), 1.0, epsilon = 1e-10);
        assert_relative_eq!(interp.interpolate(1.5).unwrap(), 3.0, epsilon = 1e-10);
    }

    #[test]
    fn test_out_of_range_is_error() {
        let interp = LinearInterpolator::new(vec![0.0, 1.0, 2.0], vec![0.0, 1.0, 2.0]).unwrap();

        assert!(interp.interpolate(-0.5).is_err());
        assert!(interp.node_sensitivity(2.5).is_err());
        assert!(interp.interpolate(f64::NAN).is_err());
    }

    #[test]
    fn test_node_weights_sum_to_one() {
        let interp =
            LinearInterpolator::new(vec![0.25, 1.0, 2.0, 5.0], vec![0.01, 0.02, 0.03, 0.04])
                .unwrap();
        for x in [0.25, 0.6, 1.0, 3.3, 5.0] {
            let sum: f64 = interp.node_sensitivity(x).unwrap().iter().sum();
            assert_relative_eq!(sum, 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_node_weight_at_node() {
        let interp = LinearInterpolator::new(vec![0.0, 1.0, 2.0], vec![5.0, 6.0, 7.0]).unwrap();
        assert_eq!(interp.node_sensitivity(1.0).unwrap(), vec![0.0, 1.0, 0.0]);
        assert_eq!(interp.node_sensitivity(2.0).unwrap(), vec![0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_insufficient_points() {
        assert!(LinearInterpolator::new(vec![0.0], vec![1.0]).is_err());
    }

    #[test]
    fn test_unsorted_error() {
        assert!(LinearInterpolator::new(vec![1.0, 0.0, 2.0], vec![1.0, 0.0, 2.0]).is_err());
    }
}
