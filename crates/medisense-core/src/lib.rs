//! Core domain types and the rule-based symptom resolver for medisense.
//!
//! - [`DiseaseRecord`] — static description/treatment bundle for a condition
//! - [`SymptomQuery`] — the raw symptom strings of one request
//! - [`Catalog`] — disease table plus symptom index, with [`Catalog::resolve`]
//! - [`ResolveError`] and [`CatalogError`] — lookup outcomes and configuration errors
//!
//! # Example
//!
//! ```rust
//! use medisense_core::{Catalog, DiseaseRecord, ResolveError};
//!
//! let catalog = Catalog::new(
//!     vec![DiseaseRecord::new("Rosacea", "Redness of the face.", "Topical medications.")],
//!     [("redness", "Rosacea")],
//! );
//!
//! let record = catalog.resolve(&["Redness"]).unwrap();
//! assert_eq!(record.name, "Rosacea");
//!
//! let miss = catalog.resolve(&["redness", "itching"]);
//! assert!(matches!(miss, Err(ResolveError::NotRecognized)));
//! ```

mod catalog;
mod resolver;

pub use catalog::Catalog;
pub use resolver::{lookup_key, normalize_symptom};

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ─────────────────────────────────────────────────────────────────────────────
// Errors
// ─────────────────────────────────────────────────────────────────────────────

/// Outcome of a lookup that did not produce a disease record.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// The normalized query has no entry in the symptom index.
    #[error("Symptoms not recognized. Please consult a doctor.")]
    NotRecognized,

    /// The symptom index names a disease that the disease table does not contain.
    #[error("No matching disease found for predicted class.")]
    NoMatchingRecord(String),
}

/// Inconsistencies found while validating a catalog.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("symptom '{symptom}' maps to unknown disease '{disease}'")]
    DanglingSymptom { symptom: String, disease: String },

    #[error("symptom '{symptom}' is mapped to both '{first}' and '{second}'")]
    ConflictingSymptom {
        symptom: String,
        first: String,
        second: String,
    },

    #[error("disease '{0}' is defined more than once")]
    DuplicateDisease(String),

    #[error("empty symptom phrase mapped to disease '{0}'")]
    EmptySymptom(String),
}

// ─────────────────────────────────────────────────────────────────────────────
// Types
// ─────────────────────────────────────────────────────────────────────────────

/// Description and treatment for one condition, keyed by `name`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiseaseRecord {
    pub name: String,
    pub description: String,
    pub treatment: String,
}

impl DiseaseRecord {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        treatment: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            treatment: treatment.into(),
        }
    }
}

/// Ordered symptom strings as supplied by a caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SymptomQuery(Vec<String>);

impl SymptomQuery {
    pub fn new(symptoms: Vec<String>) -> Self {
        Self(symptoms)
    }

    pub fn symptoms(&self) -> &[String] {
        &self.0
    }

    /// The single phrase this query is matched on.
    pub fn key(&self) -> String {
        lookup_key(&self.0)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<String>> for SymptomQuery {
    fn from(symptoms: Vec<String>) -> Self {
        Self(symptoms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_key_joins_normalized_terms() {
        let query = SymptomQuery::new(vec!["Fever ".into(), " COUGH".into()]);
        assert_eq!(query.key(), "fever, cough");
        assert_eq!(query.symptoms().len(), 2);
    }

    #[test]
    fn test_empty_query() {
        let query = SymptomQuery::default();
        assert!(query.is_empty());
        assert_eq!(query.key(), "");
    }

    #[test]
    fn test_resolve_error_messages() {
        assert_eq!(
            ResolveError::NotRecognized.to_string(),
            "Symptoms not recognized. Please consult a doctor."
        );
        assert_eq!(
            ResolveError::NoMatchingRecord("Gout".into()).to_string(),
            "No matching disease found for predicted class."
        );
    }
}
