//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (money, ranges, IDs, errors)
//! - `catalog` - Reference tables of categories, page brackets and features
//! - `selection` - What a user has chosen, including contact details
//! - `pricing` - Pure price range computation
//! - `quote` - Estimator session, summaries and quote payloads

pub mod catalog;
pub mod foundation;
pub mod pricing;
pub mod quote;
pub mod selection;
