//! Quote intake configuration

use secrecy::Secret;
use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Which adapter receives submitted quotes
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum IntakeMode {
    /// Log the payload and acknowledge locally
    #[default]
    Log,
    /// POST the payload to `endpoint`
    Http,
}

/// Quote intake configuration
#[derive(Debug, Clone, Deserialize)]
pub struct IntakeConfig {
    #[serde(default)]
    pub mode: IntakeMode,

    /// Lead-capture endpoint (required in http mode)
    pub endpoint: Option<String>,

    /// Bearer token sent to the endpoint
    pub api_key: Option<Secret<String>>,

    /// Shared secret for the X-Quote-Signature header
    pub signing_secret: Option<Secret<String>>,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl IntakeConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Validate intake configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.timeout_secs == 0 || self.timeout_secs > 120 {
            return Err(ValidationError::InvalidTimeout);
        }

        if self.mode == IntakeMode::Http {
            let endpoint = self
                .endpoint
                .as_deref()
                .map(str::trim)
                .filter(|e| !e.is_empty())
                .ok_or(ValidationError::MissingRequired("INTAKE__ENDPOINT"))?;
            if !endpoint.starts_with("http://") && !endpoint.starts_with("https://") {
                return Err(ValidationError::InvalidEndpoint);
            }
        }

        Ok(())
    }
}

impl Default for IntakeConfig {
    fn default() -> Self {
        Self {
            mode: IntakeMode::default(),
            endpoint: None,
            api_key: None,
            signing_secret: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_timeout_secs() -> u64 {
    10
}

#[cfg(test)]
mod tests {
    use super::*;

    fn http(endpoint: &str) -> IntakeConfig {
        IntakeConfig {
            mode: IntakeMode::Http,
            endpoint: Some(endpoint.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn default_logs_with_ten_second_timeout() {
        let config = IntakeConfig::default();
        assert_eq!(config.mode, IntakeMode::Log);
        assert_eq!(config.timeout(), Duration::from_secs(10));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn http_mode_requires_endpoint() {
        let config = IntakeConfig {
            mode: IntakeMode::Http,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::MissingRequired("INTAKE__ENDPOINT"))
        );
        assert!(http("   ").validate().is_err());
    }

    #[test]
    fn http_mode_requires_http_scheme() {
        assert_eq!(
            http("ftp://leads.example.com").validate(),
            Err(ValidationError::InvalidEndpoint)
        );
        assert!(http("https://leads.example.com/quotes").validate().is_ok());
        assert!(http("http://localhost:9000").validate().is_ok());
    }

    #[test]
    fn timeout_bounds() {
        for secs in [0, 121] {
            let config = IntakeConfig {
                timeout_secs: secs,
                ..Default::default()
            };
            assert_eq!(config.validate(), Err(ValidationError::InvalidTimeout));
        }
        let config = IntakeConfig {
            timeout_secs: 120,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn log_mode_ignores_endpoint() {
        let config = IntakeConfig {
            endpoint: Some("not a url".to_string()),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }
}
