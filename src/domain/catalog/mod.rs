//! Catalog domain module.
//!
//! Static reference data the estimator prices against.
//!
//! # Module Structure
//!
//! - `category` - Website categories with base and per-page price spans
//! - `bracket` - Page-count brackets
//! - `seo` - The two-valued SEO choice
//! - `feature` - Flat-priced add-on features
//! - `aggregate` - Validated aggregate of all tables, file loading
//! - `builtin` - Tables shipped with the estimator

mod aggregate;
mod bracket;
mod builtin;
mod category;
mod errors;
mod feature;
mod seo;

pub use aggregate::{Catalog, CatalogDefaults, CatalogFile, DEFAULT_SEO_COST};
pub use bracket::{PageBracket, MAX_PAGES};
pub use category::WebsiteCategory;
pub use errors::CatalogError;
pub use feature::Feature;
pub use seo::SeoChoice;
