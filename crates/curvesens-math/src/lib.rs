//! # Curvesens Math
//!
//! Mathematical utilities for the Curvesens curve-sensitivity library.
//!
//! This crate provides:
//!
//! - **Interpolation**: Linear and log-linear interpolators
//! - **Node Sensitivities**: The weight of every node in an interpolated value,
//!   which is what curve parameter sensitivities are built from
//! - **Parametric Forms**: Nelson-Siegel with its gradient in the level,
//!   slope and curvature parameters

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::similar_names)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::unreadable_literal)]
#![allow(clippy::uninlined_format_args)]

pub mod error;
pub mod interpolation;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{MathError, MathResult};
    pub use crate::interpolation::{
        Interpolator, LinearInterpolator, LogLinearInterpolator, NelsonSiegel, NodeSensitivity,
    };
}

pub use error::{MathError, MathResult};
