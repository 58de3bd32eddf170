//! Curvesens Configuration Layer
//!
//! This crate provides the reporting configuration for the Curvesens
//! curve-sensitivity library: how bundles are cleaned and compared, which
//! curves are left out of parameter projection, and which currency reports are
//! expressed in.
//!
//! # Features
//!
//! - **Formats**: TOML and JSON, chosen by file extension when loading
//! - **Validation**: every parsed configuration is checked through [`Validate`]
//! - **Application**: a configuration builds the projector and cleans,
//!   compares and converts sensitivities directly
//!
//! # Example
//!
//! ```rust
//! use curvesens_config::{SensitivityConfig, Validate};
//! use curvesens_core::Currency;
//!
//! let config = SensitivityConfig::new("EOD.RATES")
//!     .with_reporting_currency(Currency::EUR)
//!     .with_clean_tolerance(1e-12)
//!     .with_excluded_curve("EUR-ESTR");
//! assert!(config.is_valid());
//!
//! let toml = config.to_toml_string().unwrap();
//! let parsed = SensitivityConfig::from_toml_str(&toml).unwrap();
//! assert_eq!(parsed, config);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod error;
mod sensitivity;

// Re-export core types
pub use error::{ConfigError, ConfigResult, Validate, ValidationError};
pub use sensitivity::SensitivityConfig;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{ConfigError, ConfigResult, Validate};
    pub use crate::sensitivity::SensitivityConfig;
}
