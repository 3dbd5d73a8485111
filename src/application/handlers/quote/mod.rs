//! Quote handlers.

mod estimate_price;
mod submit_quote;

pub use estimate_price::{EstimatePriceHandler, EstimatePriceQuery, EstimatePriceResult};
pub use submit_quote::{SubmitQuoteCommand, SubmitQuoteHandler, SubmitQuoteResult};
