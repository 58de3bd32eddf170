//! # Curvesens Core
//!
//! Core value types for the Curvesens curve-sensitivity library.
//!
//! This crate provides the building blocks shared by every other Curvesens crate:
//!
//! - **Types**: [`CurveName`], [`Currency`], [`PointSensitivity`] and
//!   [`ForwardPointSensitivity`]
//! - **Point abstraction**: the [`SensitivityPoint`] trait that lets aggregation
//!   code treat discounting and forward sensitivities with one generic routine
//! - **Errors**: [`SensitivityError`] for value-type validation
//!
//! ## Design Philosophy
//!
//! - **Type Safety**: Curve names are a newtype, not bare strings
//! - **Exact Locations**: Point locations compare by IEEE bit pattern, never by tolerance
//! - **Immutable Values**: All point types are `Copy` value types
//!
//! ## Example
//!
//! ```rust
//! use curvesens_core::prelude::*;
//!
//! let discounting = PointSensitivity::new(2.0, -150.0);
//! let forward = ForwardPointSensitivity::new(0.5, 0.75, 0.25, 42.0);
//!
//! assert_eq!(discounting.time, 2.0);
//! assert_eq!(forward.location(), (0.5, 0.75, 0.25));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::float_cmp)]
#![allow(clippy::uninlined_format_args)]

pub mod error;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{SensitivityError, SensitivityResult};
    pub use crate::types::{
        Currency, CurveName, ForwardPointSensitivity, PointSensitivity, SensitivityPoint,
    };
}

// Re-export commonly used types at crate root
pub use error::{SensitivityError, SensitivityResult};
pub use types::{Currency, CurveName, ForwardPointSensitivity, PointSensitivity, SensitivityPoint};
