//! # Curvesens
//!
//! Curve sensitivity aggregation and projection.
//!
//! This crate re-exports the public API of the Curvesens workspace:
//!
//! - [`core`]: currencies, curve names and point sensitivities
//! - [`math`]: interpolators and parametric forms with node gradients
//! - [`curves`]: parameterized curves and the curve provider
//! - [`risk`]: bundle arithmetic, FX conversion and parameter projection
//! - [`config`]: reporting configuration
//!
//! ## Quick Start
//!
//! ```rust
//! use curvesens::prelude::*;
//!
//! let curve = InterpolatedZeroCurve::new(vec![1.0, 2.0], vec![0.03, 0.035]).unwrap();
//! let provider = CurveProvider::new().with_curve("USD-OIS", curve);
//!
//! let swap = CurveSensitivityBundle::of_yield_discounting(
//!     "USD-OIS",
//!     vec![PointSensitivity::new(1.5, 100.0), PointSensitivity::new(1.5, 50.0)],
//! );
//! let sensitivity = MultipleCurrencySensitivity::of(Currency::USD, swap.cleaned());
//!
//! let parameters = ParameterSensitivityProjector::new()
//!     .point_to_parameter(&sensitivity, &provider)
//!     .unwrap();
//! assert_eq!(parameters.get("USD-OIS", Currency::USD).unwrap().as_slice(), &[75.0, 75.0]);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub use curvesens_config as config;
pub use curvesens_core as core;
pub use curvesens_curves as curves;
pub use curvesens_math as math;
pub use curvesens_risk as risk;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use curvesens_config::prelude::*;
    pub use curvesens_core::prelude::*;
    pub use curvesens_curves::prelude::*;
    pub use curvesens_risk::prelude::*;
}
