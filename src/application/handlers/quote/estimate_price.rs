//! EstimatePriceHandler - Query handler for one-off price estimates.
//!
//! Prices a selection given as raw ids, e.g. from a query string, without
//! holding a session.

use std::sync::Arc;

use crate::domain::catalog::{Catalog, SeoChoice};
use crate::domain::foundation::{BracketId, CategoryId, FeatureId, PriceRange};
use crate::domain::pricing::PriceCalculator;
use crate::domain::quote::EstimateSummary;
use crate::domain::selection::{FeatureSelection, SelectionError, SelectionState};

/// Query to price a selection.
#[derive(Debug, Clone)]
pub struct EstimatePriceQuery {
    pub category: String,
    pub bracket: String,
    /// `"yes"` or `"no"`
    pub seo: String,
    /// Feature ids; duplicates are ignored.
    pub features: Vec<String>,
}

/// Result of a successful estimate.
#[derive(Debug, Clone, PartialEq)]
pub struct EstimatePriceResult {
    pub price_range: PriceRange,
    pub summary: EstimateSummary,
}

/// Handler for pricing a selection against the catalog.
pub struct EstimatePriceHandler {
    catalog: Arc<Catalog>,
}

impl EstimatePriceHandler {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    /// Prices the query.
    ///
    /// # Errors
    ///
    /// - `SelectionError::Invalid` - blank id or unrecognised SEO value
    /// - `SelectionError::Unknown*` - id not present in the catalog
    pub fn handle(&self, query: EstimatePriceQuery) -> Result<EstimatePriceResult, SelectionError> {
        // 1. Parse raw ids
        let features = query
            .features
            .into_iter()
            .map(FeatureId::new)
            .collect::<Result<FeatureSelection, _>>()?;

        let selection = SelectionState {
            category: CategoryId::new(query.category)?,
            bracket: BracketId::new(query.bracket)?,
            seo: query.seo.parse::<SeoChoice>()?,
            features,
            contact: Default::default(),
        };

        // 2. Reject ids the catalog does not offer
        selection.validate_against(&self.catalog)?;

        // 3. Price and summarise
        let resolved = selection.resolve(&self.catalog)?;
        let price_range = PriceCalculator::estimate(&self.catalog, &selection)?;
        let summary = EstimateSummary::new(
            price_range,
            resolved.category,
            resolved.bracket,
            selection.features.len(),
        );

        tracing::debug!(
            category = %selection.category,
            bracket = %selection.bracket,
            price_range = %price_range,
            "Estimated price"
        );

        Ok(EstimatePriceResult {
            price_range,
            summary,
        })
    }
}
