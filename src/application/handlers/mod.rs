//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod quote;

pub use quote::{
    EstimatePriceHandler, EstimatePriceQuery, EstimatePriceResult, SubmitQuoteCommand,
    SubmitQuoteHandler, SubmitQuoteResult,
};
