//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `QUOTE_ESTIMATOR` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use quote_estimator::config::EstimatorConfig;
//!
//! let config = EstimatorConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! let catalog = config.catalog.load().expect("Failed to load catalog");
//! ```

mod catalog;
mod error;
mod intake;
mod logging;

pub use catalog::CatalogConfig;
pub use error::{ConfigError, ValidationError};
pub use intake::{IntakeConfig, IntakeMode};
pub use logging::LoggingConfig;

use serde::Deserialize;

/// Root estimator configuration
///
/// Every section has defaults, so an empty environment yields a working
/// setup: built-in catalog, log intake, human-readable logs.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EstimatorConfig {
    /// Log filter and output format
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Where submitted quotes go
    #[serde(default)]
    pub intake: IntakeConfig,

    /// Catalog source
    #[serde(default)]
    pub catalog: CatalogConfig,
}

impl EstimatorConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `QUOTE_ESTIMATOR` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `QUOTE_ESTIMATOR__INTAKE__MODE=http` -> `intake.mode = http`
    /// - `QUOTE_ESTIMATOR__CATALOG__PATH=...` -> `catalog.path = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("QUOTE_ESTIMATOR")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.logging.validate()?;
        self.intake.validate()?;
        self.catalog.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::path::PathBuf;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: &[&str] = &[
        "QUOTE_ESTIMATOR__LOGGING__LEVEL",
        "QUOTE_ESTIMATOR__LOGGING__JSON",
        "QUOTE_ESTIMATOR__INTAKE__MODE",
        "QUOTE_ESTIMATOR__INTAKE__ENDPOINT",
        "QUOTE_ESTIMATOR__INTAKE__API_KEY",
        "QUOTE_ESTIMATOR__INTAKE__TIMEOUT_SECS",
        "QUOTE_ESTIMATOR__CATALOG__PATH",
    ];

    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_load_defaults_from_empty_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = EstimatorConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.intake.mode, IntakeMode::Log);
        assert_eq!(config.intake.timeout_secs, 10);
        assert!(config.catalog.path.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        env::set_var("QUOTE_ESTIMATOR__INTAKE__MODE", "http");
        env::set_var("QUOTE_ESTIMATOR__INTAKE__ENDPOINT", "https://leads.example.com/quotes");
        env::set_var("QUOTE_ESTIMATOR__INTAKE__API_KEY", "sk_test_xxx");
        env::set_var("QUOTE_ESTIMATOR__INTAKE__TIMEOUT_SECS", "30");
        env::set_var("QUOTE_ESTIMATOR__CATALOG__PATH", "/etc/quotes/catalog.yaml");
        let result = EstimatorConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.intake.mode, IntakeMode::Http);
        assert_eq!(
            config.intake.endpoint.as_deref(),
            Some("https://leads.example.com/quotes")
        );
        assert!(config.intake.api_key.is_some());
        assert_eq!(config.intake.timeout_secs, 30);
        assert_eq!(
            config.catalog.path,
            Some(PathBuf::from("/etc/quotes/catalog.yaml"))
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_http_without_endpoint() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        env::set_var("QUOTE_ESTIMATOR__INTAKE__MODE", "http");
        let result = EstimatorConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(
            config.validate(),
            Err(ValidationError::MissingRequired("INTAKE__ENDPOINT"))
        );
    }

    #[test]
    fn test_invalid_mode_fails_to_load() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        env::set_var("QUOTE_ESTIMATOR__INTAKE__MODE", "carrier_pigeon");
        let result = EstimatorConfig::load();
        clear_env();

        assert!(matches!(result, Err(ConfigError::LoadError(_))));
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(EstimatorConfig::default().validate().is_ok());
    }
}
