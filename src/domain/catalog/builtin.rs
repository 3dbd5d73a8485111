//! Built-in catalog tables.

use super::{
    Catalog, CatalogDefaults, CatalogError, CatalogFile, Feature, PageBracket, SeoChoice,
    WebsiteCategory, DEFAULT_SEO_COST,
};
use crate::domain::foundation::{BracketId, CategoryId};

/// `(id, name, base min, base max, per-page min, per-page max)`
const CATEGORIES: &[(&str, &str, u64, u64, u64, u64)] = &[
    ("brochure", "Brochure & Portfolio Website", 1500, 2500, 200, 350),
    ("business", "Business Website", 2500, 4000, 300, 500),
    ("ecommerce", "E-commerce Website", 4000, 8000, 400, 700),
    ("blog", "Blog & Content Website", 2000, 3500, 250, 400),
    ("custom", "Custom Web Application", 8000, 15000, 600, 1000),
];

/// `(id, name, min pages, max pages)`
const BRACKETS: &[(&str, &str, u32, u32)] = &[
    ("1-5", "1-5 Pages", 1, 5),
    ("6-10", "6-10 Pages", 6, 10),
    ("11-20", "11-20 Pages", 11, 20),
    ("21-50", "21-50 Pages", 21, 50),
    ("50+", "50+ Pages", 51, 100),
];

/// `(id, name, price)`
const FEATURES: &[(&str, &str, u64)] = &[
    ("crm", "CRM Integration", 800),
    ("forms", "Custom Forms", 300),
    ("cart", "Cart Upsell (eCommerce Only)", 500),
    ("chat", "Live Chat", 200),
    ("inventory", "Inventory Management", 600),
    ("booking", "Booking System", 400),
    ("lms", "LMS (Learning Management System)", 1200),
    ("reviews", "Review Systems", 250),
];

pub(super) fn catalog() -> Result<Catalog, CatalogError> {
    let categories = CATEGORIES
        .iter()
        .map(|&(id, name, base_min, base_max, page_min, page_max)| {
            WebsiteCategory::new(id, name, (base_min, base_max), (page_min, page_max))
                .map_err(|e| CatalogError::invalid_entry("categories", id, e))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let brackets = BRACKETS
        .iter()
        .map(|&(id, name, min, max)| {
            PageBracket::new(id, name, min, max)
                .map_err(|e| CatalogError::invalid_entry("brackets", id, e))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let features = FEATURES
        .iter()
        .map(|&(id, name, price)| {
            Feature::new(id, name, price).map_err(|e| CatalogError::invalid_entry("features", id, e))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let defaults = CatalogDefaults {
        category: CategoryId::new("brochure")
            .map_err(|e| CatalogError::invalid_entry("categories", "brochure", e))?,
        bracket: BracketId::new("6-10")
            .map_err(|e| CatalogError::invalid_entry("brackets", "6-10", e))?,
        seo: SeoChoice::Required,
    };

    Catalog::new(CatalogFile {
        categories,
        brackets,
        features,
        seo_cost: DEFAULT_SEO_COST,
        defaults: Some(defaults),
    })
}
