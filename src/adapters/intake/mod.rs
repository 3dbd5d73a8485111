//! Quote intake adapters.
//!
//! - `LoggingQuoteIntake` - logs payloads and acknowledges locally
//! - `HttpQuoteIntake` - POSTs payloads to a lead-capture endpoint
//! - `InMemoryQuoteIntake` - captures payloads for tests

mod http;
mod in_memory;
mod logging;
mod signature;

pub use http::{HttpIntakeConfig, HttpQuoteIntake};
pub use in_memory::InMemoryQuoteIntake;
pub use logging::LoggingQuoteIntake;
pub use signature::{PayloadSigner, SignatureError, SIGNATURE_HEADER};

use std::sync::Arc;

use crate::config::{IntakeConfig, IntakeMode};
use crate::ports::{IntakeError, QuoteIntake};

/// Builds the intake adapter selected by configuration.
///
/// # Errors
///
/// Returns `IntakeError::NotConfigured` when http mode lacks an endpoint or
/// the HTTP client cannot be created.
pub fn build_intake(config: &IntakeConfig) -> Result<Arc<dyn QuoteIntake>, IntakeError> {
    let intake: Arc<dyn QuoteIntake> = match config.mode {
        IntakeMode::Log => Arc::new(LoggingQuoteIntake::new()),
        IntakeMode::Http => {
            let endpoint = config
                .endpoint
                .clone()
                .ok_or_else(|| IntakeError::NotConfigured("intake endpoint".to_string()))?;

            let mut http = HttpIntakeConfig::new(endpoint).with_timeout(config.timeout());
            if let Some(api_key) = &config.api_key {
                http = http.with_api_key(api_key.clone());
            }
            if let Some(secret) = &config.signing_secret {
                http = http.with_signer(PayloadSigner::new(secret.clone()));
            }
            Arc::new(HttpQuoteIntake::new(http)?)
        }
    };

    tracing::info!(adapter = intake.name(), "Quote intake configured");
    Ok(intake)
}
