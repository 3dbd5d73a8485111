//! Quote domain module.
//!
//! Turns a session's selections into a lead-capture quote.
//!
//! # Module Structure
//!
//! - `session` - Live calculator state and widget mode
//! - `summary` - Display lines for an estimate
//! - `submission` - Checks a submission must pass
//! - `payload` - The record handed to quote intake
//! - `errors` - Submission failures

mod errors;
mod payload;
mod session;
mod submission;
mod summary;

pub use errors::QuoteError;
pub use payload::{QuotePayload, QuotedBracket, QuotedCategory, QuotedFeature, QuotedSeo};
pub use session::{EstimatorSession, WidgetMode};
pub use submission::prepare_quote;
pub use summary::EstimateSummary;
