//! Interpolation methods with node sensitivities.
//!
//! Curve parameter sensitivities need more than interpolated values: they need
//! to know how an interpolated value moves when each input node moves. The
//! [`NodeSensitivity`] trait exposes exactly that, as a dense vector with one
//! entry per node.
//!
//! # Available Methods
//!
//! - [`LinearInterpolator`]: Linear interpolation (typically on zero rates)
//! - [`LogLinearInterpolator`]: Log-linear interpolation (typically on discount factors)
//! - [`NelsonSiegel`]: Parametric zero-rate form
//!
//! | Method | Node weights | Positive values | Use Case |
//! |--------|--------------|-----------------|----------|
//! | Linear | Constant per segment | No | Zero-rate curves |
//! | Log-Linear | Scale with value | Yes | Discount factor curves |
//! | Nelson-Siegel | n/a (parametric) | Usually | Smooth fitted curves |

mod linear;
mod log_linear;
mod parametric;

pub use linear::LinearInterpolator;
pub use log_linear::LogLinearInterpolator;
pub use parametric::NelsonSiegel;

use std::cmp::Ordering;

use crate::error::{MathError, MathResult};

/// Trait for interpolation methods.
pub trait Interpolator: Send + Sync {
    /// Returns the interpolated value at x.
    fn interpolate(&self, x: f64) -> MathResult<f64>;

    /// Returns the minimum x value in the data.
    fn min_x(&self) -> f64;

    /// Returns the maximum x value in the data.
    fn max_x(&self) -> f64;
}

/// Interpolators that can report the sensitivity of a value to each node.
pub trait NodeSensitivity: Interpolator {
    /// Returns `d y(x) / d y_i` for every node `i`.
    ///
    /// The returned vector has one entry per node, in node order.
    fn node_sensitivity(&self, x: f64) -> MathResult<Vec<f64>>;

    /// Number of nodes.
    fn node_count(&self) -> usize;
}

/// Validates node abscissae and ordinates shared by the node-based interpolators.
pub(crate) fn validate_nodes(xs: &[f64], ys: &[f64]) -> MathResult<()> {
    if xs.len() < 2 {
        return Err(MathError::insufficient_data(2, xs.len()));
    }
    if xs.len() != ys.len() {
        return Err(MathError::invalid_input(format!(
            "xs and ys must have same length: {} vs {}",
            xs.len(),
            ys.len()
        )));
    }
    if xs.iter().any(|x| !x.is_finite()) {
        return Err(MathError::invalid_input("x values must be finite"));
    }
    if xs.windows(2).any(|w| w[1] <= w[0]) {
        return Err(MathError::invalid_input(
            "x values must be strictly increasing",
        ));
    }
    Ok(())
}

/// Finds the index i such that xs[i] <= x < xs[i+1], clamped to a valid segment.
pub(crate) fn find_segment(xs: &[f64], x: f64) -> usize {
    match xs.binary_search_by(|probe| probe.partial_cmp(&x).unwrap_or(Ordering::Equal)) {
        Ok(i) => i.min(xs.len() - 2),
        Err(i) => (i.saturating_sub(1)).min(xs.len() - 2),
    }
}

/// Fails with `ExtrapolationNotAllowed` when x is outside the node range.
pub(crate) fn check_range(xs: &[f64], x: f64) -> MathResult<()> {
    let min = xs[0];
    let max = xs[xs.len() - 1];
    if !(min..=max).contains(&x) {
        return Err(MathError::ExtrapolationNotAllowed { x, min, max });
    }
    Ok(())
}
