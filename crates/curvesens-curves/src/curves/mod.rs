//! Concrete curve implementations.
//!
//! - [`FlatZeroCurve`]: single constant rate
//! - [`InterpolatedZeroCurve`]: linearly interpolated zero rates
//! - [`DiscountFactorCurve`]: log-linear discount factors
//! - [`NelsonSiegelCurve`]: parametric level, slope and curvature

mod discount;
mod flat;
mod nelson_siegel;
mod zero;

pub use discount::DiscountFactorCurve;
pub use flat::FlatZeroCurve;
pub use nelson_siegel::NelsonSiegelCurve;
pub use zero::InterpolatedZeroCurve;
