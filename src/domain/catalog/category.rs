//! Website categories and their price parameters.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{CategoryId, PriceRange, ValidationError};

/// A class of website project with its own base and per-page pricing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebsiteCategory {
    pub id: CategoryId,
    pub name: String,
    /// Flat price span for the project regardless of size.
    pub base_price_range: PriceRange,
    /// Price span charged for each page of the average bracket size.
    pub price_per_page: PriceRange,
}

impl WebsiteCategory {
    /// Creates a category from whole-unit prices.
    pub fn new(
        id: &str,
        name: impl Into<String>,
        base: (u64, u64),
        per_page: (u64, u64),
    ) -> Result<Self, ValidationError> {
        let category = Self {
            id: CategoryId::new(id)?,
            name: name.into(),
            base_price_range: PriceRange::from_units(base.0, base.1)?,
            price_per_page: PriceRange::from_units(per_page.0, per_page.1)?,
        };
        category.validate()?;
        Ok(category)
    }

    /// Checks invariants that serde alone cannot enforce.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::empty_field("category_name"));
        }
        self.base_price_range.max().ensure_price("base_price_range")?;
        self.price_per_page.max().ensure_price("price_per_page")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::MAX_PRICE_UNITS;

    #[test]
    fn new_builds_category_from_units() {
        let category =
            WebsiteCategory::new("brochure", "Brochure & Portfolio Website", (1500, 2500), (200, 350))
                .unwrap();
        assert_eq!(category.id.as_str(), "brochure");
        assert_eq!(category.base_price_range, PriceRange::from_units(1500, 2500).unwrap());
        assert_eq!(category.price_per_page, PriceRange::from_units(200, 350).unwrap());
    }

    #[test]
    fn new_rejects_blank_name() {
        let result = WebsiteCategory::new("blog", "  ", (1, 2), (1, 2));
        assert!(matches!(result, Err(ValidationError::EmptyField { .. })));
    }

    #[test]
    fn rejects_per_page_price_above_ceiling() {
        let result = WebsiteCategory::new("huge", "Huge", (1, 2), (1, MAX_PRICE_UNITS + 1));
        assert!(matches!(
            result,
            Err(ValidationError::OutOfRange { ref field, .. }) if field == "price_per_page"
        ));
    }

    #[test]
    fn rejects_base_price_above_ceiling() {
        let result = WebsiteCategory::new("huge", "Huge", (1, MAX_PRICE_UNITS * 2), (1, 2));
        assert!(matches!(result, Err(ValidationError::OutOfRange { .. })));
    }

    #[test]
    fn accepts_prices_at_ceiling() {
        let result =
            WebsiteCategory::new("top", "Top", (MAX_PRICE_UNITS, MAX_PRICE_UNITS), (1, MAX_PRICE_UNITS));
        assert!(result.is_ok());
    }

    #[test]
    fn new_rejects_inverted_base_range() {
        let result = WebsiteCategory::new("blog", "Blog", (3500, 2000), (250, 400));
        assert!(matches!(result, Err(ValidationError::InvertedRange { .. })));
    }

    #[test]
    fn deserializes_from_yaml() {
        let yaml = r#"
id: business
name: Business Website
base_price_range: { min: 2500, max: 4000 }
price_per_page: { min: 300, max: 500 }
"#;
        let category: WebsiteCategory = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(category.name, "Business Website");
        assert_eq!(category.price_per_page.max().cents(), 50_000);
    }
}
