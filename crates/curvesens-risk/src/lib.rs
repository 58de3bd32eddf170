//! # Curvesens Risk
//!
//! Aggregation of curve sensitivities and their projection onto curve
//! parameters.
//!
//! This crate provides:
//!
//! - **Bundles**: [`CurveSensitivityBundle`], point sensitivities keyed by
//!   curve in three categories (discounting, forward, price curve)
//! - **Aggregation**: concatenation, scaling, cleaning and comparison of
//!   bundles, see [`aggregator`]
//! - **Multi-currency**: [`MultipleCurrencySensitivity`] and [`FxMatrix`]
//!   for conversion to a reporting currency
//! - **Projection**: [`ParameterSensitivityProjector`], which turns point
//!   sensitivities into [`ParameterSensitivity`] vectors via the chain rule
//!
//! ## Quick Start
//!
//! ```rust
//! use curvesens_core::{Currency, ForwardPointSensitivity, PointSensitivity};
//! use curvesens_curves::{CurveProvider, InterpolatedZeroCurve};
//! use curvesens_risk::prelude::*;
//!
//! let ois = InterpolatedZeroCurve::new(vec![1.0, 2.0, 5.0], vec![0.03, 0.032, 0.035]).unwrap();
//! let provider = CurveProvider::new().with_curve("USD-OIS", ois);
//!
//! let swap = CurveSensitivityBundle::of_yield_discounting(
//!     "USD-OIS",
//!     vec![PointSensitivity::new(1.0, -95.0), PointSensitivity::new(2.0, -190.0)],
//! )
//! .plus(&CurveSensitivityBundle::of_forward(
//!     "USD-OIS",
//!     vec![ForwardPointSensitivity::new(1.0, 2.0, 1.0, 97.0)],
//! ));
//!
//! let sensitivity = MultipleCurrencySensitivity::of(Currency::USD, swap.cleaned());
//! let by_parameter = ParameterSensitivityProjector::new()
//!     .point_to_parameter(&sensitivity, &provider)
//!     .unwrap();
//!
//! assert_eq!(by_parameter.get("USD-OIS", Currency::USD).unwrap().len(), 3);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::similar_names)]

pub mod aggregator;
pub mod bundle;
pub mod error;
pub mod fx;
pub mod multi_currency;
pub mod parameter;
pub mod projector;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::aggregator::{self, PointMap};
    pub use crate::bundle::CurveSensitivityBundle;
    pub use crate::error::{RiskError, RiskResult};
    pub use crate::fx::FxMatrix;
    pub use crate::multi_currency::MultipleCurrencySensitivity;
    pub use crate::parameter::{ParameterKey, ParameterSensitivity};
    pub use crate::projector::ParameterSensitivityProjector;
}

pub use bundle::CurveSensitivityBundle;
pub use error::{RiskError, RiskResult};
pub use fx::FxMatrix;
pub use multi_currency::MultipleCurrencySensitivity;
pub use parameter::{ParameterKey, ParameterSensitivity};
pub use projector::ParameterSensitivityProjector;
