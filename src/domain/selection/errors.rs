//! Selection errors.

use thiserror::Error;

use crate::domain::foundation::{BracketId, CategoryId, FeatureId, ValidationError};

/// A selection referenced something the catalog does not contain.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("Unknown website category '{0}'")]
    UnknownCategory(CategoryId),

    #[error("Unknown page bracket '{0}'")]
    UnknownBracket(BracketId),

    #[error("Unknown feature '{0}'")]
    UnknownFeature(FeatureId),

    #[error("Invalid selection: {0}")]
    Invalid(#[from] ValidationError),
}
