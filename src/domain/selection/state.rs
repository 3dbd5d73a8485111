//! The user's current choices.

use serde::{Deserialize, Serialize};

use super::{ContactInfo, FeatureSelection, SelectionError};
use crate::domain::catalog::{Catalog, PageBracket, SeoChoice, WebsiteCategory};
use crate::domain::foundation::{BracketId, CategoryId};

/// Everything the user has picked so far, plus their contact details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionState {
    pub category: CategoryId,
    pub bracket: BracketId,
    pub seo: SeoChoice,
    #[serde(default)]
    pub features: FeatureSelection,
    #[serde(default)]
    pub contact: ContactInfo,
}

/// Category and bracket of a selection, looked up in a catalog.
#[derive(Debug, Clone, Copy)]
pub struct ResolvedSelection<'a> {
    pub category: &'a WebsiteCategory,
    pub bracket: &'a PageBracket,
}

impl SelectionState {
    /// Starting selection for a catalog: its defaults, no features, empty contact.
    pub fn initial(catalog: &Catalog) -> Self {
        let defaults = catalog.defaults();
        Self {
            category: defaults.category.clone(),
            bracket: defaults.bracket.clone(),
            seo: defaults.seo,
            features: FeatureSelection::new(),
            contact: ContactInfo::default(),
        }
    }

    /// Looks up the chosen category and bracket.
    pub fn resolve<'a>(&self, catalog: &'a Catalog) -> Result<ResolvedSelection<'a>, SelectionError> {
        let category = catalog
            .category(&self.category)
            .ok_or_else(|| SelectionError::UnknownCategory(self.category.clone()))?;
        let bracket = catalog
            .bracket(&self.bracket)
            .ok_or_else(|| SelectionError::UnknownBracket(self.bracket.clone()))?;
        Ok(ResolvedSelection { category, bracket })
    }

    /// Checks every referenced id against the catalog.
    pub fn validate_against(&self, catalog: &Catalog) -> Result<(), SelectionError> {
        self.resolve(catalog)?;
        if let Some(unknown) = self.features.iter().find(|id| catalog.feature(id).is_none()) {
            return Err(SelectionError::UnknownFeature(unknown.clone()));
        }
        Ok(())
    }
}
