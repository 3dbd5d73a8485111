//! Logging quote intake - writes each payload to the tracing log.
//!
//! The reference intake: nothing leaves the process, the JSON payload is
//! logged and the user sees the standard confirmation.

use async_trait::async_trait;

use crate::domain::quote::QuotePayload;
use crate::ports::{IntakeError, IntakeReceipt, QuoteIntake, DEFAULT_NOTICE};

#[derive(Debug, Clone, Default)]
pub struct LoggingQuoteIntake {
    notice: Option<String>,
}

impl LoggingQuoteIntake {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the confirmation text returned in receipts.
    pub fn with_notice(mut self, notice: impl Into<String>) -> Self {
        self.notice = Some(notice.into());
        self
    }

    fn notice(&self) -> &str {
        self.notice.as_deref().unwrap_or(DEFAULT_NOTICE)
    }
}

#[async_trait]
impl QuoteIntake for LoggingQuoteIntake {
    async fn submit(&self, payload: &QuotePayload) -> Result<IntakeReceipt, IntakeError> {
        let json = payload.to_json()?;
        let receipt = IntakeReceipt::accepted(self.notice());

        tracing::info!(
            receipt_id = %receipt.receipt_id,
            category = %payload.website_type.id,
            price_min = %payload.price_range.min(),
            price_max = %payload.price_range.max(),
            payload = %json,
            "Quote request received"
        );

        Ok(receipt)
    }

    fn name(&self) -> &'static str {
        "log"
    }
}
