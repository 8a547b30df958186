//! JSON catalog files.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use medisense_core::{Catalog, DiseaseRecord};
use serde::Deserialize;

use crate::ConfigError;

/// On-disk catalog layout.
///
/// ```json
/// {
///   "diseases": [{ "name": "Flu", "description": "...", "treatment": "..." }],
///   "symptoms": { "fever": "Flu" }
/// }
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogFile {
    pub diseases: Vec<DiseaseRecord>,
    #[serde(default)]
    pub symptoms: BTreeMap<String, String>,
}

impl CatalogFile {
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn read(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn into_catalog(self) -> Catalog {
        Catalog::new(self.diseases, self.symptoms)
    }
}
