//! Catalog source configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;
use crate::domain::catalog::{Catalog, CatalogError};

/// Where catalog tables come from
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogConfig {
    /// YAML or JSON catalog file; the built-in tables are used when unset
    pub path: Option<PathBuf>,
}

impl CatalogConfig {
    /// Loads the configured catalog, or the built-in one when no path is set
    pub fn load(&self) -> Result<Catalog, CatalogError> {
        match &self.path {
            Some(path) => Catalog::load(path),
            None => Ok(Catalog::builtin().clone()),
        }
    }

    /// Validate catalog configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);
        match extension.as_deref() {
            Some("yaml" | "yml" | "json") => Ok(()),
            _ => Err(ValidationError::UnsupportedCatalogFormat),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_path_is_valid() {
        assert!(CatalogConfig::default().validate().is_ok());
    }

    #[test]
    fn accepts_yaml_and_json_extensions() {
        for file in ["catalog.yaml", "catalog.YML", "/etc/quotes/catalog.json"] {
            let config = CatalogConfig {
                path: Some(PathBuf::from(file)),
            };
            assert!(config.validate().is_ok(), "{file} should be accepted");
        }
    }

    #[test]
    fn load_without_path_returns_builtin() {
        let catalog = CatalogConfig::default().load().unwrap();
        assert_eq!(catalog.categories().len(), 5);
        assert_eq!(catalog.features().len(), 8);
    }

    #[test]
    fn load_missing_file_fails() {
        let config = CatalogConfig {
            path: Some(PathBuf::from("/nonexistent/catalog.yaml")),
        };
        assert!(matches!(config.load(), Err(CatalogError::Io { .. })));
    }

    #[test]
    fn rejects_other_extensions() {
        for file in ["catalog.toml", "catalog"] {
            let config = CatalogConfig {
                path: Some(PathBuf::from(file)),
            };
            assert_eq!(
                config.validate(),
                Err(ValidationError::UnsupportedCatalogFormat)
            );
        }
    }
}
