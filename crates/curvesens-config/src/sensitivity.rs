//! Sensitivity reporting configuration.
//!
//! This module defines how sensitivities are cleaned, compared, projected and
//! converted for reporting.

use std::collections::{BTreeSet, HashMap};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use curvesens_core::{Currency, CurveName};
use curvesens_risk::{
    CurveSensitivityBundle, FxMatrix, MultipleCurrencySensitivity, ParameterSensitivityProjector,
    RiskResult,
};

use crate::error::{ConfigError, ConfigResult, Validate, ValidationError};

// =============================================================================
// SENSITIVITY CONFIGURATION
// =============================================================================

/// Configuration for sensitivity reporting.
///
/// # Example
///
/// ```rust
/// use curvesens_config::SensitivityConfig;
///
/// let config = SensitivityConfig::from_toml_str(r#"
///     name = "eod-rates"
///     comparison_tolerance = 1e-6
///     excluded_curves = ["USD-FED-FUNDS"]
/// "#).unwrap();
///
/// assert_eq!(config.comparison_tolerance, 1e-6);
/// assert!(config.projector().is_excluded("USD-FED-FUNDS"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensitivityConfig {
    /// Configuration name/identifier.
    pub name: String,

    /// Tolerance used when comparing cleaned bundles.
    #[serde(default = "default_comparison_tolerance")]
    pub comparison_tolerance: f64,

    /// Tolerance for merging nearby points when cleaning; `None` merges only
    /// identical locations.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clean_tolerance: Option<f64>,

    /// Currency reports are expressed in.
    #[serde(default)]
    pub reporting_currency: Currency,

    /// Curves left out of parameter projection.
    #[serde(default)]
    pub excluded_curves: BTreeSet<CurveName>,

    /// Configuration metadata.
    #[serde(default)]
    pub metadata: HashMap<String, String>,
}

fn default_comparison_tolerance() -> f64 {
    1e-8
}

impl Default for SensitivityConfig {
    fn default() -> Self {
        Self::new("default")
    }
}

impl SensitivityConfig {
    /// Creates a configuration with default settings.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            comparison_tolerance: default_comparison_tolerance(),
            clean_tolerance: None,
            reporting_currency: Currency::default(),
            excluded_curves: BTreeSet::new(),
            metadata: HashMap::new(),
        }
    }

    /// Sets the comparison tolerance.
    #[must_use]
    pub fn with_comparison_tolerance(mut self, tolerance: f64) -> Self {
        self.comparison_tolerance = tolerance;
        self
    }

    /// Sets the cleaning tolerance.
    #[must_use]
    pub fn with_clean_tolerance(mut self, tolerance: f64) -> Self {
        self.clean_tolerance = Some(tolerance);
        self
    }

    /// Sets the reporting currency.
    #[must_use]
    pub fn with_reporting_currency(mut self, currency: Currency) -> Self {
        self.reporting_currency = currency;
        self
    }

    /// Adds a curve to leave out of projection.
    #[must_use]
    pub fn with_excluded_curve(mut self, curve: impl Into<CurveName>) -> Self {
        self.excluded_curves.insert(curve.into());
        self
    }

    /// Adds a metadata entry.
    #[must_use]
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    /// Parses and validates a TOML configuration.
    pub fn from_toml_str(s: &str) -> ConfigResult<Self> {
        let config: Self = toml::from_str(s)?;
        config.validate_or_error()?;
        Ok(config)
    }

    /// Parses and validates a JSON configuration.
    pub fn from_json_str(s: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(s)?;
        config.validate_or_error()?;
        Ok(config)
    }

    /// Loads a configuration file; the extension (`.toml` or `.json`) selects
    /// the format.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let path_display = path.display().to_string();
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);

        let parse: fn(&str) -> ConfigResult<Self> = match extension.as_deref() {
            Some("toml") => Self::from_toml_str,
            Some("json") => Self::from_json_str,
            _ => return Err(ConfigError::UnsupportedFormat { path: path_display }),
        };
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path_display.clone(),
            message: e.to_string(),
        })?;

        let config = parse(&contents)?;
        debug!(path = %path_display, name = %config.name, "loaded sensitivity configuration");
        Ok(config)
    }

    /// Serializes to TOML.
    pub fn to_toml_string(&self) -> ConfigResult<String> {
        Ok(toml::to_string(self)?)
    }

    /// Serializes to pretty-printed JSON.
    pub fn to_json_string(&self) -> ConfigResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Cleans a bundle with the configured mode.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if the cleaning tolerance is invalid.
    pub fn clean(&self, bundle: &CurveSensitivityBundle) -> RiskResult<CurveSensitivityBundle> {
        match self.clean_tolerance {
            Some(tolerance) => bundle.cleaned_within(tolerance),
            None => Ok(bundle.cleaned()),
        }
    }

    /// Cleans both bundles and compares them with the comparison tolerance.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if the cleaning tolerance is invalid.
    pub fn approximately_equal(
        &self,
        a: &CurveSensitivityBundle,
        b: &CurveSensitivityBundle,
    ) -> RiskResult<bool> {
        let a = self.clean(a)?;
        let b = self.clean(b)?;
        Ok(a.approximately_equal(&b, self.comparison_tolerance))
    }

    /// Builds a projector that skips the excluded curves.
    #[must_use]
    pub fn projector(&self) -> ParameterSensitivityProjector {
        ParameterSensitivityProjector::new().with_excluded_curves(self.excluded_curves.iter().cloned())
    }

    /// Converts a multi-currency sensitivity to the reporting currency.
    ///
    /// # Errors
    ///
    /// Returns `FxRateNotFound` if any currency has no rate to the reporting
    /// currency.
    pub fn to_reporting_currency(
        &self,
        sensitivity: &MultipleCurrencySensitivity,
        fx: &FxMatrix,
    ) -> RiskResult<MultipleCurrencySensitivity> {
        sensitivity.converted(self.reporting_currency, fx)
    }
}

impl Validate for SensitivityConfig {
    fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if self.name.trim().is_empty() {
            errors.push(ValidationError::new("name", "Name cannot be empty"));
        }

        if !self.comparison_tolerance.is_finite() || self.comparison_tolerance < 0.0 {
            errors.push(ValidationError::with_rule(
                "comparison_tolerance",
                format!(
                    "Comparison tolerance must be finite and non-negative, got {}",
                    self.comparison_tolerance
                ),
                "valid_tolerance",
            ));
        }

        if let Some(tolerance) = self.clean_tolerance {
            if !tolerance.is_finite() || tolerance < 0.0 {
                errors.push(ValidationError::with_rule(
                    "clean_tolerance",
                    format!("Clean tolerance must be finite and non-negative, got {tolerance}"),
                    "valid_tolerance",
                ));
            }
        }

        if self.excluded_curves.iter().any(|c| c.as_str().trim().is_empty()) {
            errors.push(ValidationError::new(
                "excluded_curves",
                "Excluded curve names cannot be empty",
            ));
        }

        errors
    }
}
