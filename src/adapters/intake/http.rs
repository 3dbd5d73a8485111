//! HTTP quote intake - POSTs payloads to a lead-capture endpoint.
//!
//! # Configuration
//!
//! ```ignore
//! let config = HttpIntakeConfig::new("https://leads.example.com/quotes")
//!     .with_api_key(Secret::new(key))
//!     .with_signer(PayloadSigner::new(Secret::new(signing_secret)))
//!     .with_timeout(Duration::from_secs(10));
//!
//! let intake = HttpQuoteIntake::new(config)?;
//! ```
//!
//! # Response
//!
//! Any 2xx status is an acceptance. If the body is JSON with `receiptId`
//! and/or `message`, those become the receipt id and notice; otherwise a
//! fresh id and the standard notice are used, and the parse failure is
//! logged at debug level.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use std::time::Duration;
use uuid::Uuid;

use super::signature::{PayloadSigner, SIGNATURE_HEADER};
use crate::domain::foundation::ReceiptId;
use crate::domain::quote::QuotePayload;
use crate::ports::{IntakeError, IntakeReceipt, QuoteIntake, DEFAULT_NOTICE};

/// Longest response body kept in a `Rejected` error.
const MAX_ERROR_BODY_CHARS: usize = 512;

/// Configuration for the HTTP intake adapter.
#[derive(Debug, Clone)]
pub struct HttpIntakeConfig {
    pub endpoint: String,
    api_key: Option<Secret<String>>,
    signer: Option<PayloadSigner>,
    pub timeout: Duration,
}

impl HttpIntakeConfig {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            api_key: None,
            signer: None,
            timeout: Duration::from_secs(10),
        }
    }

    /// Sends `Authorization: Bearer <key>` with every request.
    pub fn with_api_key(mut self, api_key: Secret<String>) -> Self {
        self.api_key = Some(api_key);
        self
    }

    /// Adds the `X-Quote-Signature` header to every request.
    pub fn with_signer(mut self, signer: PayloadSigner) -> Self {
        self.signer = Some(signer);
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct IntakeResponse {
    receipt_id: Option<Uuid>,
    message: Option<String>,
}

/// Quote intake backed by an HTTP endpoint.
pub struct HttpQuoteIntake {
    config: HttpIntakeConfig,
    client: Client,
}

impl HttpQuoteIntake {
    /// Creates the adapter and its HTTP client.
    ///
    /// # Errors
    ///
    /// Returns `IntakeError::NotConfigured` if the endpoint is blank or the
    /// client cannot be built.
    pub fn new(config: HttpIntakeConfig) -> Result<Self, IntakeError> {
        if config.endpoint.trim().is_empty() {
            return Err(IntakeError::NotConfigured("endpoint is empty".to_string()));
        }

        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| IntakeError::NotConfigured(format!("HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    pub fn endpoint(&self) -> &str {
        &self.config.endpoint
    }

    fn map_send_error(&self, err: reqwest::Error) -> IntakeError {
        if err.is_timeout() {
            IntakeError::transport(format!(
                "request timed out after {}s",
                self.config.timeout.as_secs()
            ))
        } else if err.is_connect() {
            IntakeError::transport(format!("connection failed: {}", err))
        } else {
            IntakeError::transport(err.to_string())
        }
    }
}

#[async_trait]
impl QuoteIntake for HttpQuoteIntake {
    async fn submit(&self, payload: &QuotePayload) -> Result<IntakeReceipt, IntakeError> {
        let body = payload.to_json()?;

        let mut request = self
            .client
            .post(&self.config.endpoint)
            .header(reqwest::header::CONTENT_TYPE, "application/json");

        if let Some(api_key) = &self.config.api_key {
            request = request.bearer_auth(api_key.expose_secret());
        }
        if let Some(signer) = &self.config.signer {
            let signature = signer
                .sign_now(body.as_bytes())
                .map_err(|e| IntakeError::NotConfigured(e.to_string()))?;
            request = request.header(SIGNATURE_HEADER, signature);
        }

        let response = request
            .body(body)
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| IntakeError::transport(format!("reading response: {}", e)))?;

        if !status.is_success() {
            tracing::warn!(
                endpoint = %self.config.endpoint,
                status = status.as_u16(),
                "Quote intake rejected request"
            );
            return Err(IntakeError::rejected(status.as_u16(), truncate(&text)));
        }

        let parsed: IntakeResponse = if status == StatusCode::NO_CONTENT || text.trim().is_empty() {
            IntakeResponse::default()
        } else {
            match serde_json::from_str(&text) {
                Ok(parsed) => parsed,
                Err(e) => {
                    tracing::debug!(
                        endpoint = %self.config.endpoint,
                        error = %e,
                        "Intake response body not understood, using defaults"
                    );
                    IntakeResponse::default()
                }
            }
        };

        let notice = parsed
            .message
            .unwrap_or_else(|| DEFAULT_NOTICE.to_string());
        let mut receipt = IntakeReceipt::accepted(notice);
        if let Some(id) = parsed.receipt_id {
            receipt.receipt_id = ReceiptId::from_uuid(id);
        }

        tracing::info!(
            endpoint = %self.config.endpoint,
            receipt_id = %receipt.receipt_id,
            "Quote request delivered"
        );
        Ok(receipt)
    }

    fn name(&self) -> &'static str {
        "http"
    }
}

fn truncate(body: &str) -> String {
    body.chars().take(MAX_ERROR_BODY_CHARS).collect()
}
