//! Pricing domain module.
//!
//! Pure functions from (catalog, selection) to a price range. Nothing here
//! caches; callers recompute after every selection change.

mod calculator;

pub use calculator::PriceCalculator;
