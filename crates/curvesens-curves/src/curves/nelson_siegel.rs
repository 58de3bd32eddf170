//! Nelson-Siegel parametric curve.

use nalgebra::DVector;

use curvesens_math::interpolation::{Interpolator, NelsonSiegel};

use crate::error::CurveResult;
use crate::traits::{check_parameter_count, ParameterizedCurve};

/// A zero-rate curve in Nelson-Siegel form.
///
/// The parameters are `(β₀, β₁, β₂)`. The decay `τ` is part of the curve's
/// definition, not a parameter, so it is carried over unchanged by
/// [`with_parameters`](ParameterizedCurve::with_parameters).
#[derive(Debug, Clone, Copy)]
pub struct NelsonSiegelCurve {
    model: NelsonSiegel,
}

impl NelsonSiegelCurve {
    /// Creates a Nelson-Siegel curve.
    ///
    /// # Errors
    ///
    /// Returns an error if `tau` is not strictly positive and finite.
    pub fn new(beta0: f64, beta1: f64, beta2: f64, tau: f64) -> CurveResult<Self> {
        Ok(Self {
            model: NelsonSiegel::new(beta0, beta1, beta2, tau)?,
        })
    }

    /// Returns the decay factor.
    #[must_use]
    pub fn tau(&self) -> f64 {
        self.model.parameters().3
    }
}

impl ParameterizedCurve for NelsonSiegelCurve {
    fn number_of_parameters(&self) -> usize {
        3
    }

    fn parameters(&self) -> DVector<f64> {
        let (b0, b1, b2, _) = self.model.parameters();
        DVector::from_vec(vec![b0, b1, b2])
    }

    fn zero_rate(&self, t: f64) -> CurveResult<f64> {
        Ok(self.model.interpolate(t)?)
    }

    fn parameter_sensitivity(&self, t: f64) -> CurveResult<DVector<f64>> {
        Ok(DVector::from_row_slice(&self.model.beta_gradient(t)))
    }

    fn with_parameters(&self, parameters: &[f64]) -> CurveResult<Box<dyn ParameterizedCurve>> {
        check_parameter_count(3, parameters)?;
        Ok(Box::new(Self::new(
            parameters[0],
            parameters[1],
            parameters[2],
            self.tau(),
        )?))
    }
}
