//! Parametric yield curve forms.

use crate::error::{MathError, MathResult};
use crate::interpolation::Interpolator;

/// Nelson-Siegel yield curve model.
///
/// The model parameterizes the zero rate curve as:
/// ```text
/// z(t) = β₀ + β₁ * ((1 - e^(-t/τ)) / (t/τ))
///           + β₂ * ((1 - e^(-t/τ)) / (t/τ) - e^(-t/τ))
/// ```
///
/// The rate is linear in the betas, so its gradient with respect to
/// `(β₀, β₁, β₂)` is the vector of loadings `(1, L1, L2)`, independent of the
/// betas themselves. The decay `τ` is treated as fixed.
///
/// # Example
///
/// ```rust
/// use curvesens_math::interpolation::{NelsonSiegel, Interpolator};
///
/// let ns = NelsonSiegel::new(0.045, -0.02, 0.01, 2.0).unwrap();
///
/// let short_rate = ns.interpolate(0.25).unwrap();
/// let long_rate = ns.interpolate(30.0).unwrap();
/// assert!(short_rate < long_rate);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct NelsonSiegel {
    /// Long-term level
    beta0: f64,
    /// Short-term component
    beta1: f64,
    /// Medium-term component
    beta2: f64,
    /// Decay factor
    tau: f64,
}

impl NelsonSiegel {
    /// Creates a new Nelson-Siegel curve.
    ///
    /// # Errors
    ///
    /// Returns an error if tau is not positive.
    pub fn new(beta0: f64, beta1: f64, beta2: f64, tau: f64) -> MathResult<Self> {
        if tau <= 0.0 || !tau.is_finite() {
            return Err(MathError::invalid_input(format!(
                "tau must be positive, got {tau}"
            )));
        }

        Ok(Self {
            beta0,
            beta1,
            beta2,
            tau,
        })
    }

    /// Returns the model parameters as (β₀, β₁, β₂, τ).
    pub fn parameters(&self) -> (f64, f64, f64, f64) {
        (self.beta0, self.beta1, self.beta2, self.tau)
    }

    /// Returns `dz(t)/dβ` for `β = (β₀, β₁, β₂)`.
    pub fn beta_gradient(&self, t: f64) -> [f64; 3] {
        if t <= 0.0 {
            return [1.0, 1.0, 0.0];
        }
        let x = t / self.tau;
        [1.0, Self::loading_factor_1(x), Self::loading_factor_2(x)]
    }

    /// Helper function: (1 - e^(-x)) / x
    fn loading_factor_1(x: f64) -> f64 {
        if x.abs() < 1e-10 {
            1.0 - x / 2.0 + x * x / 6.0 // Taylor expansion for numerical stability
        } else {
            (1.0 - (-x).exp()) / x
        }
    }

    /// Helper function: (1 - e^(-x)) / x - e^(-x)
    fn loading_factor_2(x: f64) -> f64 {
        if x.abs() < 1e-10 {
            x / 2.0 - x * x / 3.0 // Taylor expansion for numerical stability
        } else {
            Self::loading_factor_1(x) - (-x).exp()
        }
    }
}

impl Interpolator for NelsonSiegel {
    fn interpolate(&self, t: f64) -> MathResult<f64> {
        let [g0, g1, g2] = self.beta_gradient(t);
        Ok(self.beta0 * g0 + self.beta1 * g1 + self.beta2 * g2)
    }

    fn min_x(&self) -> f64 {
        0.0
    }

    fn max_x(&self) -> f64 {
        f64::INFINITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_short_and_long_limits() {
        let ns = NelsonSiegel::new(0.05, -0.02, 0.01, 2.0).unwrap();
        assert_relative_eq!(ns.interpolate(0.0).unwrap(), 0.03, epsilon = 1e-12);
        assert_relative_eq!(ns.interpolate(500.0).unwrap(), 0.05, epsilon = 1e-3);
    }

    #[test]
    fn test_beta_gradient_matches_bump() {
        let base = NelsonSiegel::new(0.04, -0.015, 0.02, 1.5).unwrap();
        let t = 3.0;
        let grad = base.beta_gradient(t);
        let h = 1e-6;

        let bumped = [
            NelsonSiegel::new(0.04 + h, -0.015, 0.02, 1.5).unwrap(),
            NelsonSiegel::new(0.04, -0.015 + h, 0.02, 1.5).unwrap(),
            NelsonSiegel::new(0.04, -0.015, 0.02 + h, 1.5).unwrap(),
        ];
        for (k, ns) in bumped.iter().enumerate() {
            let fd = (ns.interpolate(t).unwrap() - base.interpolate(t).unwrap()) / h;
            assert_relative_eq!(grad[k], fd, epsilon = 1e-8);
        }
    }

    #[test]
    fn test_invalid_tau() {
        assert!(NelsonSiegel::new(0.04, 0.0, 0.0, 0.0).is_err());
        assert!(NelsonSiegel::new(0.04, 0.0, 0.0, -1.0).is_err());
    }
}
