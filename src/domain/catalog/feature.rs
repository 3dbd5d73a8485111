//! Optional add-on features.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{FeatureId, Money, ValidationError};

/// An independently selectable add-on with a flat price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feature {
    pub id: FeatureId,
    pub name: String,
    pub price: Money,
}

impl Feature {
    /// Creates a feature priced in whole units.
    pub fn new(id: &str, name: impl Into<String>, price: u64) -> Result<Self, ValidationError> {
        let feature = Self {
            id: FeatureId::new(id)?,
            name: name.into(),
            price: Money::from_units(price),
        };
        feature.validate()?;
        Ok(feature)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::empty_field("feature_name"));
        }
        self.price.ensure_price("feature_price")
    }
}
