//! Quote Intake Port - Interface for delivering quote requests.
//!
//! The estimator never stores leads itself. Once a submission passes
//! validation the assembled `QuotePayload` is handed to whatever system
//! follows up on it (a CRM webhook, an email relay, a log sink).
//!
//! # Example
//!
//! ```ignore
//! use async_trait::async_trait;
//!
//! struct NullIntake;
//!
//! #[async_trait]
//! impl QuoteIntake for NullIntake {
//!     async fn submit(&self, _payload: &QuotePayload) -> Result<IntakeReceipt, IntakeError> {
//!         Ok(IntakeReceipt::accepted("Thanks!"))
//!     }
//!
//!     fn name(&self) -> &'static str {
//!         "null"
//!     }
//! }
//! ```

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::foundation::{ReceiptId, Timestamp};
use crate::domain::quote::{QuoteError, QuotePayload};

/// Confirmation shown to the user after a successful submission.
pub const DEFAULT_NOTICE: &str = "Quote request submitted!";

/// Port for handing quote requests to an external collaborator.
#[async_trait]
pub trait QuoteIntake: Send + Sync {
    /// Delivers one payload. Called at most once per submit operation.
    async fn submit(&self, payload: &QuotePayload) -> Result<IntakeReceipt, IntakeError>;

    /// Short adapter name for logs.
    fn name(&self) -> &'static str;
}

/// Proof that intake accepted a quote request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntakeReceipt {
    pub receipt_id: ReceiptId,
    /// User-facing confirmation text.
    pub notice: String,
    pub accepted_at: Timestamp,
}

impl IntakeReceipt {
    /// Receipt with a fresh id, accepted now.
    pub fn accepted(notice: impl Into<String>) -> Self {
        Self {
            receipt_id: ReceiptId::new(),
            notice: notice.into(),
            accepted_at: Timestamp::now(),
        }
    }
}

/// Failures while delivering a payload.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntakeError {
    /// The request never got a response (DNS, connect, timeout).
    #[error("transport error: {0}")]
    Transport(String),

    /// The endpoint answered with a non-success status.
    #[error("intake rejected the request with status {status}: {body}")]
    Rejected { status: u16, body: String },

    /// The payload could not be encoded.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// The adapter is missing required settings.
    #[error("intake not configured: {0}")]
    NotConfigured(String),
}

impl IntakeError {
    pub fn transport(message: impl Into<String>) -> Self {
        IntakeError::Transport(message.into())
    }

    pub fn rejected(status: u16, body: impl Into<String>) -> Self {
        IntakeError::Rejected {
            status,
            body: body.into(),
        }
    }

    /// True for failures where sending the same payload again may succeed.
    ///
    /// Transport failures, throttling (429) and server errors (5xx) qualify.
    pub fn is_retryable(&self) -> bool {
        match self {
            IntakeError::Transport(_) => true,
            IntakeError::Rejected { status, .. } => *status == 429 || *status >= 500,
            IntakeError::Serialization(_) | IntakeError::NotConfigured(_) => false,
        }
    }
}

impl From<serde_json::Error> for IntakeError {
    fn from(err: serde_json::Error) -> Self {
        IntakeError::Serialization(err.to_string())
    }
}

impl From<IntakeError> for QuoteError {
    fn from(err: IntakeError) -> Self {
        let retryable = err.is_retryable();
        QuoteError::intake(err.to_string(), retryable)
    }
}
