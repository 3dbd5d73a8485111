//! Quote payload - the record handed to the quote-intake collaborator.
//!
//! Field names serialize in camelCase; this JSON shape is the contract any
//! intake endpoint must accept:
//!
//! ```json
//! {
//!   "websiteType": {"id", "name", "basePriceRange": {"min", "max"}, "pricePerPage": {"min", "max"}},
//!   "pageRange": {"id", "name", "minPages", "maxPages", "avgPages"},
//!   "seo": {"required", "cost"},
//!   "additionalFeatures": [{"id", "name", "price"}],
//!   "priceRange": {"min", "max"},
//!   "contactInfo": {"name", "email", "phone"},
//!   "timestamp": "2024-01-15T10:30:00.000Z",
//!   "totalFeaturesCost": 700
//! }
//! ```

use serde::{Deserialize, Serialize, Serializer};

use super::QuoteError;
use crate::domain::catalog::{Catalog, Feature, PageBracket, SeoChoice, WebsiteCategory};
use crate::domain::foundation::{BracketId, CategoryId, FeatureId, Money, PriceRange, Timestamp};
use crate::domain::selection::{ContactInfo, SelectionError, SelectionState};

/// Snapshot of the chosen category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuotedCategory {
    pub id: CategoryId,
    pub name: String,
    pub base_price_range: PriceRange,
    pub price_per_page: PriceRange,
}

impl From<&WebsiteCategory> for QuotedCategory {
    fn from(category: &WebsiteCategory) -> Self {
        Self {
            id: category.id.clone(),
            name: category.name.clone(),
            base_price_range: category.base_price_range,
            price_per_page: category.price_per_page,
        }
    }
}

/// Snapshot of the chosen page bracket with its average page count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuotedBracket {
    pub id: BracketId,
    pub name: String,
    pub min_pages: u32,
    pub max_pages: u32,
    #[serde(serialize_with = "serialize_pages")]
    pub avg_pages: f64,
}

impl From<&PageBracket> for QuotedBracket {
    fn from(bracket: &PageBracket) -> Self {
        Self {
            id: bracket.id.clone(),
            name: bracket.name.clone(),
            min_pages: bracket.min_pages,
            max_pages: bracket.max_pages,
            avg_pages: bracket.average_pages(),
        }
    }
}

/// Whole page averages go out as integers (`8`), halves as decimals (`15.5`).
fn serialize_pages<S: Serializer>(pages: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if pages.fract() == 0.0 && *pages >= 0.0 && *pages <= u32::MAX as f64 {
        serializer.serialize_u32(*pages as u32)
    } else {
        serializer.serialize_f64(*pages)
    }
}

/// SEO decision and what it added to both bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuotedSeo {
    pub required: bool,
    pub cost: Money,
}

impl QuotedSeo {
    pub fn new(choice: SeoChoice, catalog: &Catalog) -> Self {
        Self {
            required: choice.is_required(),
            cost: catalog.seo_cost_for(choice),
        }
    }
}

/// Snapshot of one chosen add-on feature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuotedFeature {
    pub id: FeatureId,
    pub name: String,
    pub price: Money,
}

impl From<&Feature> for QuotedFeature {
    fn from(feature: &Feature) -> Self {
        Self {
            id: feature.id.clone(),
            name: feature.name.clone(),
            price: feature.price,
        }
    }
}

/// Everything an intake endpoint needs to follow up on a lead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuotePayload {
    pub website_type: QuotedCategory,
    pub page_range: QuotedBracket,
    pub seo: QuotedSeo,
    pub additional_features: Vec<QuotedFeature>,
    pub price_range: PriceRange,
    pub contact_info: ContactInfo,
    pub timestamp: Timestamp,
    pub total_features_cost: Money,
}

impl QuotePayload {
    /// Assembles the payload from a selection and its computed price range.
    ///
    /// Features are listed in the order they were chosen, and
    /// `total_features_cost` is the sum of exactly those entries.
    ///
    /// # Errors
    ///
    /// Returns `QuoteError::Selection` if the category, bracket or any chosen
    /// feature is missing from the catalog. A feature that cannot be resolved
    /// fails the whole assembly instead of being dropped from the quote.
    pub fn assemble(
        catalog: &Catalog,
        selection: &SelectionState,
        price_range: PriceRange,
        captured_at: Timestamp,
    ) -> Result<Self, QuoteError> {
        let resolved = selection.resolve(catalog)?;

        let additional_features = selection
            .features
            .iter()
            .map(|id| {
                catalog
                    .feature(id)
                    .map(QuotedFeature::from)
                    .ok_or_else(|| SelectionError::UnknownFeature(id.clone()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let total_features_cost = additional_features.iter().map(|f| f.price).sum();

        Ok(Self {
            website_type: QuotedCategory::from(resolved.category),
            page_range: QuotedBracket::from(resolved.bracket),
            seo: QuotedSeo::new(selection.seo, catalog),
            additional_features,
            price_range,
            contact_info: selection.contact.clone(),
            timestamp: captured_at,
            total_features_cost,
        })
    }

    /// Serializes the payload as the JSON body sent to intake endpoints.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::pricing::PriceCalculator;
    use serde_json::json;

    fn ecommerce_selection() -> SelectionState {
        let mut selection = SelectionState::initial(Catalog::builtin());
        selection.category = CategoryId::new("ecommerce").unwrap();
        selection.bracket = BracketId::new("11-20").unwrap();
        selection.seo = SeoChoice::Required;
        selection.features.toggle(FeatureId::new("cart").unwrap());
        selection.features.toggle(FeatureId::new("chat").unwrap());
        selection.contact = ContactInfo::new("Ada Lovelace", "ada@example.com", "555-0100");
        selection
    }

    fn assemble(selection: &SelectionState) -> Result<QuotePayload, QuoteError> {
        let catalog = Catalog::builtin();
        let range = PriceCalculator::estimate(catalog, selection)?;
        QuotePayload::assemble(
            catalog,
            selection,
            range,
            Timestamp::from_unix_secs(1705314600).unwrap(),
        )
    }

    #[test]
    fn resolves_category_and_bracket() {
        let payload = assemble(&ecommerce_selection()).unwrap();
        assert_eq!(payload.website_type.name, "E-commerce Website");
        assert_eq!(
            payload.website_type.base_price_range,
            PriceRange::from_units(4000, 8000).unwrap()
        );
        assert_eq!(payload.page_range.avg_pages, 15.5);
        assert_eq!(payload.page_range.min_pages, 11);
        assert_eq!(payload.page_range.max_pages, 20);
    }

    #[test]
    fn seo_record_carries_flag_and_cost() {
        let payload = assemble(&ecommerce_selection()).unwrap();
        assert_eq!(
            payload.seo,
            QuotedSeo {
                required: true,
                cost: Money::from_units(500)
            }
        );

        let mut selection = ecommerce_selection();
        selection.seo = SeoChoice::NotRequired;
        let payload = assemble(&selection).unwrap();
        assert!(!payload.seo.required);
        assert_eq!(payload.seo.cost, Money::ZERO);
    }

    #[test]
    fn lists_features_in_selection_order_with_total() {
        let payload = assemble(&ecommerce_selection()).unwrap();
        let ids: Vec<&str> = payload
            .additional_features
            .iter()
            .map(|f| f.id.as_str())
            .collect();
        assert_eq!(ids, vec!["cart", "chat"]);
        assert_eq!(payload.total_features_cost, Money::from_units(700));
    }

    #[test]
    fn carries_price_range_and_contact_verbatim() {
        let payload = assemble(&ecommerce_selection()).unwrap();
        assert_eq!(payload.price_range, PriceRange::from_units(11400, 20050).unwrap());
        assert_eq!(payload.contact_info.email, "ada@example.com");
    }

    #[test]
    fn empty_feature_set_totals_zero() {
        let mut selection = ecommerce_selection();
        selection.features = Default::default();
        let payload = assemble(&selection).unwrap();
        assert!(payload.additional_features.is_empty());
        assert_eq!(payload.total_features_cost, Money::ZERO);
    }

    #[test]
    fn unknown_feature_fails_assembly() {
        let mut selection = ecommerce_selection();
        selection.features.toggle(FeatureId::new("jetpack").unwrap());
        let result = assemble(&selection);
        assert_eq!(
            result,
            Err(QuoteError::Selection(SelectionError::UnknownFeature(
                FeatureId::new("jetpack").unwrap()
            )))
        );
    }

    #[test]
    fn serializes_with_intake_field_names() {
        let payload = assemble(&ecommerce_selection()).unwrap();
        let value = serde_json::to_value(&payload).unwrap();

        assert_eq!(
            value["websiteType"],
            json!({
                "id": "ecommerce",
                "name": "E-commerce Website",
                "basePriceRange": {"min": 4000, "max": 8000},
                "pricePerPage": {"min": 400, "max": 700}
            })
        );
        assert_eq!(
            value["pageRange"],
            json!({
                "id": "11-20",
                "name": "11-20 Pages",
                "minPages": 11,
                "maxPages": 20,
                "avgPages": 15.5
            })
        );
        assert_eq!(value["seo"], json!({"required": true, "cost": 500}));
        assert_eq!(
            value["additionalFeatures"],
            json!([
                {"id": "cart", "name": "Cart Upsell (eCommerce Only)", "price": 500},
                {"id": "chat", "name": "Live Chat", "price": 200}
            ])
        );
        assert_eq!(value["priceRange"], json!({"min": 11400, "max": 20050}));
        assert_eq!(
            value["contactInfo"],
            json!({"name": "Ada Lovelace", "email": "ada@example.com", "phone": "555-0100"})
        );
        assert_eq!(value["timestamp"], json!("2024-01-15T10:30:00.000Z"));
        assert_eq!(value["totalFeaturesCost"], json!(700));
    }

    #[test]
    fn whole_average_pages_serialize_as_integer() {
        let mut selection = ecommerce_selection();
        selection.bracket = BracketId::new("6-10").unwrap();
        let value = serde_json::to_value(assemble(&selection).unwrap()).unwrap();
        assert_eq!(value["pageRange"]["avgPages"], json!(8));
    }

    #[test]
    fn payload_json_deserializes_back() {
        let payload = assemble(&ecommerce_selection()).unwrap();
        let json = payload.to_json().unwrap();
        let parsed: QuotePayload = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, payload);
    }
}
