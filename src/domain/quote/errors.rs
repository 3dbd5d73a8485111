//! Quote submission errors.
//!
//! Every variant leaves the user's selections and typed contact details
//! untouched; submission is all-or-nothing.

use thiserror::Error;

use crate::domain::selection::{ContactError, SelectionError};

/// Reasons a quote request could not be produced or delivered.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuoteError {
    /// The quote form is hidden, so there is nothing to submit.
    #[error("Quote form is not open")]
    FormHidden,

    /// A required contact field is empty.
    #[error(transparent)]
    Contact(#[from] ContactError),

    /// The selection references something the catalog does not contain.
    #[error(transparent)]
    Selection(#[from] SelectionError),

    /// The intake collaborator failed to accept the payload.
    #[error("Quote intake failed: {message}")]
    Intake { message: String, retryable: bool },
}

impl QuoteError {
    pub fn intake(message: impl Into<String>, retryable: bool) -> Self {
        QuoteError::Intake {
            message: message.into(),
            retryable,
        }
    }

    /// True when resubmitting the same payload may succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, QuoteError::Intake { retryable: true, .. })
    }

    /// True for failures the user fixes by editing the form.
    pub fn is_user_correctable(&self) -> bool {
        matches!(self, QuoteError::FormHidden | QuoteError::Contact(_))
    }
}
