//! Price Calculator - Pure estimate of a project's price range.

use crate::domain::catalog::{Catalog, PageBracket, WebsiteCategory};
use crate::domain::foundation::{Money, PriceRange};
use crate::domain::selection::{FeatureSelection, SelectionError, SelectionState};

/// Stateless pricing rules.
///
/// ```text
/// min = base.min + per_page.min * avg_pages + seo + features
/// max = base.max + per_page.max * avg_pages + seo + features
/// ```
///
/// where `avg_pages` is the unrounded mean of the bracket's bounds.
pub struct PriceCalculator;

impl PriceCalculator {
    /// Prices an already resolved category and bracket.
    ///
    /// `min <= max` holds whenever the category's ranges are ordered, which
    /// `PriceRange` guarantees by construction.
    pub fn price_range(
        category: &WebsiteCategory,
        bracket: &PageBracket,
        seo_cost: Money,
        features_cost: Money,
    ) -> PriceRange {
        let pages = category
            .price_per_page
            .times_mean(bracket.min_pages, bracket.max_pages);
        category.base_price_range + pages + PriceRange::flat(seo_cost + features_cost)
    }

    /// Sums the prices of the chosen features.
    ///
    /// # Edge Cases
    /// - Ids missing from the catalog contribute nothing and are logged.
    pub fn features_cost(catalog: &Catalog, features: &FeatureSelection) -> Money {
        features
            .iter()
            .map(|id| match catalog.feature(id) {
                Some(feature) => feature.price,
                None => {
                    tracing::warn!(feature_id = %id, "Unknown feature priced at zero");
                    Money::ZERO
                }
            })
            .sum()
    }

    /// Prices a full selection against a catalog.
    ///
    /// # Errors
    ///
    /// Returns `SelectionError` if the category or bracket is not in the catalog.
    pub fn estimate(catalog: &Catalog, selection: &SelectionState) -> Result<PriceRange, SelectionError> {
        let resolved = selection.resolve(catalog)?;
        Ok(Self::price_range(
            resolved.category,
            resolved.bracket,
            catalog.seo_cost_for(selection.seo),
            Self::features_cost(catalog, &selection.features),
        ))
    }
}
