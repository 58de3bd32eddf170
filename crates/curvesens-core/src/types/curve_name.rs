//! Curve identifier.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

use crate::error::{SensitivityError, SensitivityResult};

/// Name of a curve in a curve collection.
///
/// Sensitivity maps are keyed by `CurveName`. The name borrows as `str`, so
/// maps can be queried with string literals.
///
/// # Example
///
/// ```rust
/// use curvesens_core::CurveName;
/// use std::collections::BTreeMap;
///
/// let mut map = BTreeMap::new();
/// map.insert(CurveName::new("USD-OIS"), 1.0);
/// assert_eq!(map.get("USD-OIS"), Some(&1.0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CurveName(String);

impl CurveName {
    /// Creates a curve name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Creates a curve name, rejecting empty or blank names.
    pub fn parse(name: impl Into<String>) -> SensitivityResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(SensitivityError::EmptyCurveName);
        }
        Ok(Self(name))
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CurveName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CurveName {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl From<String> for CurveName {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl AsRef<str> for CurveName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for CurveName {
    fn borrow(&self) -> &str {
        &self.0
    }
}
