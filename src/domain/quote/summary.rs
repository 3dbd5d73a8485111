//! Human-readable estimate lines shown under the calculator.

use serde::Serialize;

use crate::domain::catalog::{PageBracket, WebsiteCategory};
use crate::domain::foundation::PriceRange;

/// Display text derived from an estimate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EstimateSummary {
    /// "Pricing From $3,600 to $5,800"
    pub headline: String,
    /// "Based on 6-10 Pages for Brochure & Portfolio Website"
    pub basis: String,
    /// "Includes 2 additional features", absent when none are chosen.
    pub features_note: Option<String>,
}

impl EstimateSummary {
    pub fn new(
        price_range: PriceRange,
        category: &WebsiteCategory,
        bracket: &PageBracket,
        feature_count: usize,
    ) -> Self {
        let features_note = match feature_count {
            0 => None,
            1 => Some("Includes 1 additional feature".to_string()),
            n => Some(format!("Includes {} additional features", n)),
        };

        Self {
            headline: format!("Pricing From {} to {}", price_range.min(), price_range.max()),
            basis: format!("Based on {} for {}", bracket.name, category.name),
            features_note,
        }
    }
}
