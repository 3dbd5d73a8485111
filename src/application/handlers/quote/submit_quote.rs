//! SubmitQuoteHandler - Command handler for quote-form submissions.

use std::sync::Arc;

use crate::domain::catalog::Catalog;
use crate::domain::foundation::Timestamp;
use crate::domain::quote::{prepare_quote, EstimatorSession, QuoteError, QuotePayload, WidgetMode};
use crate::domain::selection::SelectionState;
use crate::ports::{IntakeReceipt, QuoteIntake};

/// Command to submit the quote form.
#[derive(Debug, Clone)]
pub struct SubmitQuoteCommand {
    pub selection: SelectionState,
    pub mode: WidgetMode,
}

impl From<&EstimatorSession> for SubmitQuoteCommand {
    fn from(session: &EstimatorSession) -> Self {
        Self {
            selection: session.selection().clone(),
            mode: session.mode(),
        }
    }
}

/// Result of successful submission.
#[derive(Debug, Clone)]
pub struct SubmitQuoteResult {
    pub payload: QuotePayload,
    pub receipt: IntakeReceipt,
}

/// Handler for submitting quote requests.
pub struct SubmitQuoteHandler {
    catalog: Arc<Catalog>,
    intake: Arc<dyn QuoteIntake>,
}

impl SubmitQuoteHandler {
    pub fn new(catalog: Arc<Catalog>, intake: Arc<dyn QuoteIntake>) -> Self {
        Self { catalog, intake }
    }

    /// Validates, assembles and delivers a quote request.
    ///
    /// Nothing reaches intake unless the form is open and name and phone
    /// are filled in. The command is consumed but the caller's session is
    /// never modified, so a failed submission keeps all user input.
    pub async fn handle(&self, cmd: SubmitQuoteCommand) -> Result<SubmitQuoteResult, QuoteError> {
        // 1. Validate and assemble
        let payload = prepare_quote(&self.catalog, &cmd.selection, cmd.mode, Timestamp::now())
            .map_err(|e| {
                tracing::debug!(error = %e, "Quote submission rejected");
                e
            })?;

        // 2. Deliver
        let receipt = self.intake.submit(&payload).await.map_err(|e| {
            tracing::warn!(
                adapter = self.intake.name(),
                error = %e,
                retryable = e.is_retryable(),
                "Quote intake failed"
            );
            QuoteError::from(e)
        })?;

        tracing::info!(
            adapter = self.intake.name(),
            receipt_id = %receipt.receipt_id,
            price_range = %payload.price_range,
            features = payload.additional_features.len(),
            "Quote submitted"
        );

        Ok(SubmitQuoteResult { payload, receipt })
    }

    /// Submits the current state of a session.
    pub async fn submit_session(
        &self,
        session: &EstimatorSession,
    ) -> Result<SubmitQuoteResult, QuoteError> {
        self.handle(SubmitQuoteCommand::from(session)).await
    }
}
