//! Named curve container.
//!
//! A [`CurveProvider`] maps curve names to curves and forward index names to
//! curve names. Projection looks every curve up here.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use tracing::warn;

use curvesens_core::CurveName;

use crate::error::{CurveError, CurveResult};
use crate::traits::ParameterizedCurve;

/// A set of named curves.
///
/// Curves are held behind `Arc`, so cloning a provider is cheap and the
/// provider is safe to share across threads for read access.
///
/// # Example
///
/// ```rust
/// use curvesens_curves::{CurveProvider, FlatZeroCurve};
///
/// let provider = CurveProvider::new()
///     .with_curve("USD-OIS", FlatZeroCurve::new(0.03))
///     .with_curve("USD-LIBOR3M", FlatZeroCurve::new(0.035))
///     .with_index_alias("USD-LIBOR-3M", "USD-LIBOR3M");
///
/// assert!(provider.curve("USD-OIS").is_ok());
/// assert!(provider.curve_for_index("USD-LIBOR-3M").is_ok());
/// assert!(provider.curve("EUR-OIS").is_err());
/// ```
#[derive(Clone, Default)]
pub struct CurveProvider {
    curves: BTreeMap<CurveName, Arc<dyn ParameterizedCurve>>,
    index_aliases: BTreeMap<String, CurveName>,
}

impl fmt::Debug for CurveProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CurveProvider")
            .field("curves", &self.curves.keys().collect::<Vec<_>>())
            .field("index_aliases", &self.index_aliases)
            .finish()
    }
}

impl CurveProvider {
    /// Creates an empty provider.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a curve, consuming and returning the provider.
    #[must_use]
    pub fn with_curve(
        mut self,
        name: impl Into<CurveName>,
        curve: impl ParameterizedCurve + 'static,
    ) -> Self {
        self.insert(name, Arc::new(curve));
        self
    }

    /// Maps a forward index name onto a curve name.
    #[must_use]
    pub fn with_index_alias(mut self, index: impl Into<String>, curve: impl Into<CurveName>) -> Self {
        self.alias_index(index, curve);
        self
    }

    /// Inserts a curve, returning the one it replaced.
    pub fn insert(
        &mut self,
        name: impl Into<CurveName>,
        curve: Arc<dyn ParameterizedCurve>,
    ) -> Option<Arc<dyn ParameterizedCurve>> {
        self.curves.insert(name.into(), curve)
    }

    /// Maps a forward index name onto a curve name.
    ///
    /// The target curve does not need to exist yet; it is resolved on lookup.
    pub fn alias_index(&mut self, index: impl Into<String>, curve: impl Into<CurveName>) {
        self.index_aliases.insert(index.into(), curve.into());
    }

    /// Returns the curve with the given name.
    ///
    /// # Errors
    ///
    /// Returns `CurveNotFound` if no curve has that name.
    pub fn curve(&self, name: &str) -> CurveResult<&dyn ParameterizedCurve> {
        match self.curves.get(name) {
            Some(curve) => Ok(curve.as_ref()),
            None => {
                warn!(curve = name, "curve not found in provider");
                Err(CurveError::curve_not_found(name))
            }
        }
    }

    /// Returns the curve a forward index projects off.
    ///
    /// # Errors
    ///
    /// Returns `IndexNotFound` if the index has no alias, or `CurveNotFound`
    /// if the alias points at a missing curve.
    pub fn curve_for_index(&self, index: &str) -> CurveResult<&dyn ParameterizedCurve> {
        let Some(name) = self.index_aliases.get(index) else {
            warn!(index, "no curve registered for index");
            return Err(CurveError::IndexNotFound {
                index: index.to_string(),
            });
        };
        self.curve(name.as_str())
    }

    /// Returns true if a curve with this name exists.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.curves.contains_key(name)
    }

    /// Returns the curve names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &CurveName> {
        self.curves.keys()
    }

    /// Number of curves.
    #[must_use]
    pub fn len(&self) -> usize {
        self.curves.len()
    }

    /// Returns true if there are no curves.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.curves.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curves::FlatZeroCurve;

    #[test]
    fn test_insert_replaces() {
        let mut provider = CurveProvider::new();
        assert!(provider.insert("A", Arc::new(FlatZeroCurve::new(0.01))).is_none());
        assert!(provider.insert("A", Arc::new(FlatZeroCurve::new(0.02))).is_some());
        assert_eq!(provider.len(), 1);
        assert_eq!(provider.curve("A").unwrap().zero_rate(1.0).unwrap(), 0.02);
    }

    #[test]
    fn test_lookup_errors() {
        let provider = CurveProvider::new()
            .with_curve("A", FlatZeroCurve::new(0.01))
            .with_index_alias("IDX", "B");

        assert_eq!(
            provider.curve("B").unwrap_err(),
            CurveError::curve_not_found("B")
        );
        assert_eq!(
            provider.curve_for_index("IDX").unwrap_err(),
            CurveError::curve_not_found("B")
        );
        assert!(matches!(
            provider.curve_for_index("OTHER").unwrap_err(),
            CurveError::IndexNotFound { .. }
        ));
    }

    #[test]
    fn test_names_sorted() {
        let provider = CurveProvider::new()
            .with_curve("Z", FlatZeroCurve::new(0.01))
            .with_curve("A", FlatZeroCurve::new(0.01));
        let names: Vec<_> = provider.names().map(CurveName::as_str).collect();
        assert_eq!(names, vec!["A", "Z"]);
        assert!(provider.contains("Z"));
        assert!(!provider.is_empty());
    }
}
