//! # Curvesens Curves
//!
//! Parameterized yield curves for the Curvesens curve-sensitivity library.
//!
//! This crate provides:
//!
//! - **Curve Trait**: [`ParameterizedCurve`], a curve driven by a parameter
//!   vector that reports the gradient of its zero rate in those parameters
//! - **Curve Types**: Flat, interpolated zero, discount factor and
//!   Nelson-Siegel curves
//! - **Provider**: [`CurveProvider`], the named curve set that sensitivity
//!   projection looks curves up in
//!
//! ## Quick Start
//!
//! ```rust
//! use curvesens_curves::prelude::*;
//!
//! let curve = InterpolatedZeroCurve::new(
//!     vec![1.0, 2.0, 5.0, 10.0],
//!     vec![0.030, 0.032, 0.035, 0.037],
//! ).unwrap();
//!
//! let provider = CurveProvider::new().with_curve("USD-OIS", curve);
//! let grad = provider.curve("USD-OIS").unwrap().parameter_sensitivity(3.0).unwrap();
//! assert_eq!(grad.len(), 4);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]

pub mod curves;
pub mod error;
pub mod provider;
pub mod traits;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::curves::{
        DiscountFactorCurve, FlatZeroCurve, InterpolatedZeroCurve, NelsonSiegelCurve,
    };
    pub use crate::error::{CurveError, CurveResult};
    pub use crate::provider::CurveProvider;
    pub use crate::traits::ParameterizedCurve;
}

pub use curves::{DiscountFactorCurve, FlatZeroCurve, InterpolatedZeroCurve, NelsonSiegelCurve};
pub use error::{CurveError, CurveResult};
pub use provider::CurveProvider;
pub use traits::ParameterizedCurve;
