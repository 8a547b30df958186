//! Query normalization and exact-phrase lookup.

use tracing::debug;

use crate::{Catalog, DiseaseRecord, ResolveError};

const SEPARATOR: &str = ", ";

/// Trims and lower-cases a single symptom phrase.
pub fn normalize_symptom(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Builds the lookup key for a sequence of raw symptoms.
///
/// Every element is normalized and the results are joined with `", "`, so the
/// key for `["Fever", "Cough"]` is `"fever, cough"`. An empty sequence yields
/// the empty string.
pub fn lookup_key<S: AsRef<str>>(symptoms: &[S]) -> String {
    symptoms
        .iter()
        .map(|s| normalize_symptom(s.as_ref()))
        .collect::<Vec<_>>()
        .join(SEPARATOR)
}

impl Catalog {
    /// Resolves a symptom sequence to its disease record.
    ///
    /// Matching is on the whole joined phrase: a multi-symptom query only
    /// matches when that exact joined phrase is itself indexed.
    pub fn resolve<S: AsRef<str>>(&self, symptoms: &[S]) -> Result<&DiseaseRecord, ResolveError> {
        let key = lookup_key(symptoms);
        debug!(key = %key, terms = symptoms.len(), "resolving symptoms");

        let name = self.disease_for(&key).ok_or(ResolveError::NotRecognized)?;

        self.disease(name)
            .ok_or_else(|| ResolveError::NoMatchingRecord(name.to_string()))
    }
}
