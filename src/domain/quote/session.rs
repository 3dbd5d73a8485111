//! Estimator session - one user's live calculator.
//!
//! Holds the selection state and widget mode. Every mutation validates ids
//! against the catalog before applying them, so the state is always
//! resolvable and the price range can be recomputed without failure.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::{prepare_quote, EstimateSummary, QuoteError, QuotePayload};
use crate::domain::catalog::{Catalog, PageBracket, SeoChoice, WebsiteCategory};
use crate::domain::foundation::{BracketId, CategoryId, FeatureId, PriceRange, Timestamp};
use crate::domain::pricing::PriceCalculator;
use crate::domain::selection::{ContactField, SelectionError, SelectionState};

/// The two observable widget modes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WidgetMode {
    /// Only the calculator and its price range are shown.
    #[default]
    CalculatorOnly,
    /// The lead-capture form is open under the calculator.
    WithQuoteForm,
}

impl WidgetMode {
    pub fn from_form_visible(visible: bool) -> Self {
        if visible {
            WidgetMode::WithQuoteForm
        } else {
            WidgetMode::CalculatorOnly
        }
    }

    pub fn shows_quote_form(&self) -> bool {
        matches!(self, WidgetMode::WithQuoteForm)
    }
}

/// A single user's calculator session.
///
/// Owned by one caller; mutations take `&mut self` and complete before the
/// next one starts.
#[derive(Debug, Clone)]
pub struct EstimatorSession {
    catalog: Arc<Catalog>,
    selection: SelectionState,
    mode: WidgetMode,
    category: WebsiteCategory,
    bracket: PageBracket,
}

impl EstimatorSession {
    /// Starts a session at the catalog's default selection.
    pub fn new(catalog: Arc<Catalog>) -> Result<Self, SelectionError> {
        let selection = SelectionState::initial(&catalog);
        Self::with_selection(catalog, selection)
    }

    /// Starts a session from an existing selection, checking every id.
    pub fn with_selection(
        catalog: Arc<Catalog>,
        selection: SelectionState,
    ) -> Result<Self, SelectionError> {
        selection.validate_against(&catalog)?;
        let resolved = selection.resolve(&catalog)?;
        let category = resolved.category.clone();
        let bracket = resolved.bracket.clone();

        Ok(Self {
            catalog,
            selection,
            mode: WidgetMode::default(),
            category,
            bracket,
        })
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn mode(&self) -> WidgetMode {
        self.mode
    }

    pub fn category(&self) -> &WebsiteCategory {
        &self.category
    }

    pub fn bracket(&self) -> &PageBracket {
        &self.bracket
    }

    pub fn select_category(&mut self, id: CategoryId) -> Result<(), SelectionError> {
        let category = self
            .catalog
            .category(&id)
            .ok_or_else(|| SelectionError::UnknownCategory(id.clone()))?
            .clone();
        tracing::debug!(category = %id, "Category selected");
        self.category = category;
        self.selection.category = id;
        Ok(())
    }

    pub fn select_bracket(&mut self, id: BracketId) -> Result<(), SelectionError> {
        let bracket = self
            .catalog
            .bracket(&id)
            .ok_or_else(|| SelectionError::UnknownBracket(id.clone()))?
            .clone();
        tracing::debug!(bracket = %id, "Page bracket selected");
        self.bracket = bracket;
        self.selection.bracket = id;
        Ok(())
    }

    pub fn select_seo(&mut self, seo: SeoChoice) {
        tracing::debug!(seo = seo.id(), "SEO option selected");
        self.selection.seo = seo;
    }

    /// Toggles a feature checkbox. Returns true if the feature is now chosen.
    ///
    /// # Errors
    ///
    /// Rejects ids the catalog does not offer; the selection is unchanged.
    pub fn toggle_feature(&mut self, id: FeatureId) -> Result<bool, SelectionError> {
        if self.catalog.feature(&id).is_none() {
            return Err(SelectionError::UnknownFeature(id));
        }
        let label = id.to_string();
        let selected = self.selection.features.toggle(id);
        tracing::debug!(feature = %label, selected, "Feature toggled");
        Ok(selected)
    }

    /// Replaces the text of one contact field.
    pub fn edit_contact(&mut self, field: ContactField, value: impl Into<String>) {
        self.selection.contact.set(field, value);
    }

    /// Shows or hides the quote form. Selections are kept either way.
    pub fn set_quote_form_visible(&mut self, visible: bool) {
        self.mode = WidgetMode::from_form_visible(visible);
        tracing::debug!(mode = ?self.mode, "Widget mode changed");
    }

    /// Freshly computed price range for the current selection.
    pub fn price_range(&self) -> PriceRange {
        PriceCalculator::price_range(
            &self.category,
            &self.bracket,
            self.catalog.seo_cost_for(self.selection.seo),
            PriceCalculator::features_cost(&self.catalog, &self.selection.features),
        )
    }

    /// Display lines for the current estimate.
    pub fn summary(&self) -> EstimateSummary {
        EstimateSummary::new(
            self.price_range(),
            &self.category,
            &self.bracket,
            self.selection.features.len(),
        )
    }

    /// Builds the quote payload if the form is open and complete.
    ///
    /// Never mutates the session, so a rejected submission keeps every
    /// selection and typed value.
    pub fn prepare_quote(&self, captured_at: Timestamp) -> Result<QuotePayload, QuoteError> {
        prepare_quote(&self.catalog, &self.selection, self.mode, captured_at)
    }
}
