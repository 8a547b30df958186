//! Catalog loading and server settings for medisense.
//!
//! The catalog comes from a JSON file when `MEDISENSE_CATALOG` is set and from
//! the built-in table otherwise. Either way it is validated before use.

mod builtin;
mod file;

pub use builtin::builtin_catalog;
pub use file::CatalogFile;

use std::env;
use std::path::{Path, PathBuf};

use medisense_core::{Catalog, CatalogError};
use tracing::info;

// ─────────────────────────────────────────────────────────────────────────────
// Error
// ─────────────────────────────────────────────────────────────────────────────

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid catalog: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Invalid port: {0}")]
    InvalidPort(String),
}

// ─────────────────────────────────────────────────────────────────────────────
// Server Settings
// ─────────────────────────────────────────────────────────────────────────────

pub const HOST_VAR: &str = "MEDISENSE_HOST";
pub const PORT_VAR: &str = "MEDISENSE_PORT";
pub const CATALOG_VAR: &str = "MEDISENSE_CATALOG";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 5000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub catalog_path: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.into(),
            port: DEFAULT_PORT,
            catalog_path: None,
        }
    }
}

impl ServerConfig {
    /// Reads settings from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Reads settings through `lookup`, falling back to defaults for unset keys.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let host = lookup(HOST_VAR)
            .filter(|h| !h.trim().is_empty())
            .unwrap_or(defaults.host);

        let port = match lookup(PORT_VAR) {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort(raw.clone()))?,
            None => defaults.port,
        };

        let catalog_path = lookup(CATALOG_VAR)
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self { host, port, catalog_path })
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Loads and validates the catalog these settings point at.
    pub fn load_catalog(&self) -> Result<Catalog, ConfigError> {
        match &self.catalog_path {
            Some(path) => load_catalog_file(path),
            None => {
                let catalog = builtin_catalog();
                catalog.validate()?;
                info!(
                    "Loaded built-in catalog: {} diseases, {} symptom phrases",
                    catalog.disease_count(),
                    catalog.symptom_count()
                );
                Ok(catalog)
            }
        }
    }
}

/// Reads a catalog file and validates it.
pub fn load_catalog_file(path: &Path) -> Result<Catalog, ConfigError> {
    let catalog = CatalogFile::read(path)?.into_catalog();
    catalog.validate()?;
    info!(
        "Loaded catalog from {}: {} diseases, {} symptom phrases",
        path.display(),
        catalog.disease_count(),
        catalog.symptom_count()
    );
    Ok(catalog)
}
