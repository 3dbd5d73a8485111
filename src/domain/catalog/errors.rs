//! Catalog construction and loading errors.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::foundation::ValidationError;

/// Errors raised while building, validating or loading a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Catalog table '{0}' is empty")]
    EmptyTable(&'static str),

    #[error("Duplicate id '{id}' in catalog table '{table}'")]
    DuplicateId { table: &'static str, id: String },

    #[error("Invalid {table} entry '{id}': {source}")]
    InvalidEntry {
        table: &'static str,
        id: String,
        #[source]
        source: ValidationError,
    },

    #[error("Default {table} '{id}' is not in the catalog")]
    UnknownDefault { table: &'static str, id: String },

    #[error("Failed to read catalog file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse catalog: {0}")]
    Parse(String),

    #[error("Unsupported catalog file format: {0} (expected .yaml, .yml or .json)")]
    UnsupportedFormat(PathBuf),
}

impl CatalogError {
    pub fn invalid_entry(table: &'static str, id: impl Into<String>, source: ValidationError) -> Self {
        CatalogError::InvalidEntry {
            table,
            id: id.into(),
            source,
        }
    }
}

impl From<serde_yaml::Error> for CatalogError {
    fn from(err: serde_yaml::Error) -> Self {
        CatalogError::Parse(err.to_string())
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        CatalogError::Parse(err.to_string())
    }
}
