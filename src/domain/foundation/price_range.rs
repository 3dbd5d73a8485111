//! Price range value object.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Add;

use super::{Money, ValidationError};

/// An inclusive `[min, max]` span of money with `min <= max`.
///
/// Used both for the price parameters a category carries and for the
/// estimate the pricing function derives from a selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawPriceRange")]
pub struct PriceRange {
    min: Money,
    max: Money,
}

#[derive(Deserialize)]
struct RawPriceRange {
    min: Money,
    max: Money,
}

impl TryFrom<RawPriceRange> for PriceRange {
    type Error = ValidationError;

    fn try_from(raw: RawPriceRange) -> Result<Self, Self::Error> {
        PriceRange::try_new(raw.min, raw.max)
    }
}

impl PriceRange {
    /// Zero-width range at zero.
    pub const ZERO: Self = Self {
        min: Money::ZERO,
        max: Money::ZERO,
    };

    /// Creates a range, rejecting `min > max`.
    pub fn try_new(min: Money, max: Money) -> Result<Self, ValidationError> {
        if min > max {
            return Err(ValidationError::inverted_range(
                "price_range",
                min.cents(),
                max.cents(),
            ));
        }
        Ok(Self { min, max })
    }

    /// Creates a range from whole currency units.
    pub fn from_units(min: u64, max: u64) -> Result<Self, ValidationError> {
        Self::try_new(Money::from_units(min), Money::from_units(max))
    }

    /// Creates a zero-width range where both bounds equal `amount`.
    pub fn flat(amount: Money) -> Self {
        Self {
            min: amount,
            max: amount,
        }
    }

    /// Lower bound.
    pub fn min(&self) -> Money {
        self.min
    }

    /// Upper bound.
    pub fn max(&self) -> Money {
        self.max
    }

    /// Scales both bounds by the mean of `low` and `high`.
    pub fn times_mean(&self, low: u32, high: u32) -> Self {
        Self {
            min: self.min.times_mean(low, high),
            max: self.max.times_mean(low, high),
        }
    }
}

impl Add for PriceRange {
    type Output = PriceRange;

    fn add(self, rhs: PriceRange) -> PriceRange {
        PriceRange {
            min: self.min + rhs.min,
            max: self.max + rhs.max,
        }
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for PriceRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.min, self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn try_new_accepts_ordered_bounds() {
        let range = PriceRange::from_units(1500, 2500).unwrap();
        assert_eq!(range.min(), Money::from_units(1500));
        assert_eq!(range.max(), Money::from_units(2500));
    }

    #[test]
    fn try_new_accepts_equal_bounds() {
        assert!(PriceRange::from_units(500, 500).is_ok());
    }

    #[test]
    fn try_new_rejects_inverted_bounds() {
        let result = PriceRange::from_units(2500, 1500);
        assert!(matches!(result, Err(ValidationError::InvertedRange { .. })));
    }

    #[test]
    fn add_sums_bounds_independently() {
        let a = PriceRange::from_units(1500, 2500).unwrap();
        let b = PriceRange::flat(Money::from_units(500));
        let sum = a + b;
        assert_eq!(sum, PriceRange::from_units(2000, 3000).unwrap());
    }

    #[test]
    fn times_mean_scales_both_bounds() {
        let per_page = PriceRange::from_units(200, 350).unwrap();
        assert_eq!(
            per_page.times_mean(6, 10),
            PriceRange::from_units(1600, 2800).unwrap()
        );
    }

    #[test]
    fn displays_as_currency_span() {
        let range = PriceRange::from_units(3100, 5300).unwrap();
        assert_eq!(range.to_string(), "$3,100 - $5,300");
    }

    #[test]
    fn serializes_min_and_max() {
        let range = PriceRange::from_units(3600, 5800).unwrap();
        let json = serde_json::to_value(range).unwrap();
        assert_eq!(json, serde_json::json!({"min": 3600, "max": 5800}));
    }

    #[test]
    fn deserialization_rejects_inverted_bounds() {
        let result: Result<PriceRange, _> = serde_json::from_str(r#"{"min": 10, "max": 5}"#);
        assert!(result.is_err());
    }
}
