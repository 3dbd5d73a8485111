//! Configuration error types

use thiserror::Error;

use crate::domain::catalog::CatalogError;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),

    #[error("Catalog loading failed: {0}")]
    Catalog(#[from] CatalogError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Invalid intake timeout (must be 1-120 seconds)")]
    InvalidTimeout,

    #[error("Intake endpoint must be an http(s) URL")]
    InvalidEndpoint,

    #[error("Catalog file must be .yaml, .yml or .json")]
    UnsupportedCatalogFormat,

    #[error("Invalid log filter: {0}")]
    InvalidLogFilter(String),
}
