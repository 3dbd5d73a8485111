//! In-memory quote intake for testing.
//!
//! Captures every payload it is handed and can be told to fail, so tests
//! can assert on exactly what a submission would have sent.
//!
//! # Security Note
//!
//! This adapter is for **testing only**. It uses `.expect()` on lock
//! operations which will panic if locks are poisoned.

use async_trait::async_trait;
use std::sync::RwLock;

use crate::domain::quote::QuotePayload;
use crate::ports::{IntakeError, IntakeReceipt, QuoteIntake, DEFAULT_NOTICE};

/// Capturing intake adapter.
///
/// # Example
///
/// ```ignore
/// let intake = Arc::new(InMemoryQuoteIntake::new());
/// handler.handle(cmd).await?;
/// assert_eq!(intake.submission_count(), 1);
/// ```
#[derive(Default)]
pub struct InMemoryQuoteIntake {
    submitted: RwLock<Vec<QuotePayload>>,
    failure: RwLock<Option<IntakeError>>,
}

impl InMemoryQuoteIntake {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an intake that rejects every submission with `error`.
    pub fn failing(error: IntakeError) -> Self {
        let intake = Self::new();
        intake.fail_with(error);
        intake
    }

    // === Test Helpers ===

    /// Makes subsequent submissions fail with `error`.
    pub fn fail_with(&self, error: IntakeError) {
        *self
            .failure
            .write()
            .expect("InMemoryQuoteIntake: failure lock poisoned") = Some(error);
    }

    /// Makes subsequent submissions succeed again.
    pub fn recover(&self) {
        *self
            .failure
            .write()
            .expect("InMemoryQuoteIntake: failure lock poisoned") = None;
    }

    /// Returns all accepted payloads in submission order.
    pub fn submitted(&self) -> Vec<QuotePayload> {
        self.submitted
            .read()
            .expect("InMemoryQuoteIntake: submitted lock poisoned")
            .clone()
    }

    pub fn submission_count(&self) -> usize {
        self.submitted
            .read()
            .expect("InMemoryQuoteIntake: submitted lock poisoned")
            .len()
    }

    pub fn last_submitted(&self) -> Option<QuotePayload> {
        self.submitted
            .read()
            .expect("InMemoryQuoteIntake: submitted lock poisoned")
            .last()
            .cloned()
    }

    /// Clears captured payloads (for test isolation).
    pub fn clear(&self) {
        self.submitted
            .write()
            .expect("InMemoryQuoteIntake: submitted lock poisoned")
            .clear();
    }
}

#[async_trait]
impl QuoteIntake for InMemoryQuoteIntake {
    async fn submit(&self, payload: &QuotePayload) -> Result<IntakeReceipt, IntakeError> {
        if let Some(error) = self
            .failure
            .read()
            .expect("InMemoryQuoteIntake: failure lock poisoned")
            .clone()
        {
            return Err(error);
        }

        self.submitted
            .write()
            .expect("InMemoryQuoteIntake: submitted lock poisoned")
            .push(payload.clone());

        Ok(IntakeReceipt::accepted(DEFAULT_NOTICE))
    }

    fn name(&self) -> &'static str {
        "in_memory"
    }
}
