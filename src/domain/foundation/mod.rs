//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers and error types that form the
//! vocabulary of the estimator domain.

mod errors;
mod ids;
mod money;
mod price_range;
mod timestamp;

pub use errors::ValidationError;
pub use ids::{BracketId, CategoryId, FeatureId, ReceiptId};
pub use money::{Money, MAX_PRICE_UNITS};
pub use price_range::PriceRange;
pub use timestamp::Timestamp;
