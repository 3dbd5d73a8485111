//! Catalog aggregate: the static reference tables every estimate prices against.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

use super::{CatalogError, Feature, PageBracket, SeoChoice, WebsiteCategory};
use crate::domain::foundation::{BracketId, CategoryId, FeatureId, Money};

/// Price added to both bounds when SEO is required.
pub const DEFAULT_SEO_COST: Money = Money::from_units(500);

/// Selection a fresh estimator session starts from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogDefaults {
    pub category: CategoryId,
    pub bracket: BracketId,
    #[serde(default)]
    pub seo: SeoChoice,
}

/// On-disk shape of a catalog file (YAML or JSON).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogFile {
    pub categories: Vec<WebsiteCategory>,
    pub brackets: Vec<PageBracket>,
    pub features: Vec<Feature>,
    #[serde(default = "default_seo_cost")]
    pub seo_cost: Money,
    #[serde(default)]
    pub defaults: Option<CatalogDefaults>,
}

fn default_seo_cost() -> Money {
    DEFAULT_SEO_COST
}

/// Validated set of catalog tables.
///
/// Construction checks every entry and every cross-reference, so lookups
/// by an id obtained from this catalog always succeed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    categories: Vec<WebsiteCategory>,
    brackets: Vec<PageBracket>,
    features: Vec<Feature>,
    seo_cost: Money,
    defaults: CatalogDefaults,
}

static BUILTIN: Lazy<Catalog> =
    Lazy::new(|| super::builtin::catalog().expect("built-in catalog tables are valid"));

impl Catalog {
    /// Returns the built-in catalog shipped with the estimator.
    pub fn builtin() -> &'static Catalog {
        &BUILTIN
    }

    /// Validates the tables and builds a catalog.
    ///
    /// When `defaults` is `None` the first category and bracket are used,
    /// with SEO required.
    pub fn new(file: CatalogFile) -> Result<Self, CatalogError> {
        let CatalogFile {
            categories,
            brackets,
            features,
            seo_cost,
            defaults,
        } = file;

        if categories.is_empty() {
            return Err(CatalogError::EmptyTable("categories"));
        }
        if brackets.is_empty() {
            return Err(CatalogError::EmptyTable("brackets"));
        }

        for category in &categories {
            category
                .validate()
                .map_err(|e| CatalogError::invalid_entry("categories", category.id.as_str(), e))?;
        }
        for bracket in &brackets {
            bracket
                .validate()
                .map_err(|e| CatalogError::invalid_entry("brackets", bracket.id.as_str(), e))?;
        }
        for feature in &features {
            feature
                .validate()
                .map_err(|e| CatalogError::invalid_entry("features", feature.id.as_str(), e))?;
        }

        seo_cost
            .ensure_price("seo_cost")
            .map_err(|e| CatalogError::invalid_entry("seo_cost", "seo_cost", e))?;

        ensure_unique("categories", categories.iter().map(|c| c.id.as_str()))?;
        ensure_unique("brackets", brackets.iter().map(|b| b.id.as_str()))?;
        ensure_unique("features", features.iter().map(|f| f.id.as_str()))?;

        let defaults = match defaults {
            Some(defaults) => defaults,
            None => CatalogDefaults {
                category: categories[0].id.clone(),
                bracket: brackets[0].id.clone(),
                seo: SeoChoice::default(),
            },
        };

        let catalog = Self {
            categories,
            brackets,
            features,
            seo_cost,
            defaults,
        };

        if catalog.category(&catalog.defaults.category).is_none() {
            return Err(CatalogError::UnknownDefault {
                table: "category",
                id: catalog.defaults.category.to_string(),
            });
        }
        if catalog.bracket(&catalog.defaults.bracket).is_none() {
            return Err(CatalogError::UnknownDefault {
                table: "bracket",
                id: catalog.defaults.bracket.to_string(),
            });
        }

        Ok(catalog)
    }

    /// Parses and validates a YAML catalog.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_yaml::from_str(yaml)?;
        Self::new(file)
    }

    /// Parses and validates a JSON catalog.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_json::from_str(json)?;
        Self::new(file)
    }

    /// Loads a catalog file, choosing the format from its extension.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        let contents = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let catalog = match extension.as_deref() {
            Some("yaml") | Some("yml") => Self::from_yaml_str(&contents)?,
            Some("json") => Self::from_json_str(&contents)?,
            _ => return Err(CatalogError::UnsupportedFormat(path.to_path_buf())),
        };

        tracing::info!(
            path = %path.display(),
            categories = catalog.categories.len(),
            brackets = catalog.brackets.len(),
            features = catalog.features.len(),
            "Loaded catalog file"
        );

        Ok(catalog)
    }

    /// Converts the catalog back into its file representation.
    pub fn to_file(&self) -> CatalogFile {
        CatalogFile {
            categories: self.categories.clone(),
            brackets: self.brackets.clone(),
            features: self.features.clone(),
            seo_cost: self.seo_cost,
            defaults: Some(self.defaults.clone()),
        }
    }

    pub fn categories(&self) -> &[WebsiteCategory] {
        &self.categories
    }

    pub fn brackets(&self) -> &[PageBracket] {
        &self.brackets
    }

    pub fn features(&self) -> &[Feature] {
        &self.features
    }

    /// Cost added to both bounds when SEO is required.
    pub fn seo_cost(&self) -> Money {
        self.seo_cost
    }

    /// Cost contributed by the given SEO choice.
    pub fn seo_cost_for(&self, seo: SeoChoice) -> Money {
        if seo.is_required() {
            self.seo_cost
        } else {
            Money::ZERO
        }
    }

    pub fn defaults(&self) -> &CatalogDefaults {
        &self.defaults
    }

    pub fn category(&self, id: &CategoryId) -> Option<&WebsiteCategory> {
        self.categories.iter().find(|c| &c.id == id)
    }

    pub fn bracket(&self, id: &BracketId) -> Option<&PageBracket> {
        self.brackets.iter().find(|b| &b.id == id)
    }

    pub fn feature(&self, id: &FeatureId) -> Option<&Feature> {
        self.features.iter().find(|f| &f.id == id)
    }
}

fn ensure_unique<'a>(
    table: &'static str,
    ids: impl Iterator<Item = &'a str>,
) -> Result<(), CatalogError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(CatalogError::DuplicateId {
                table,
                id: id.to_string(),
            });
        }
    }
    Ok(())
}
