//! Page-count brackets.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{BracketId, ValidationError};

/// Upper limit on pages any bracket may declare.
pub const MAX_PAGES: u32 = 10_000;

/// A page-count range the customer can pick, e.g. "11-20 Pages".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageBracket {
    pub id: BracketId,
    pub name: String,
    pub min_pages: u32,
    pub max_pages: u32,
}

impl PageBracket {
    /// Creates and validates a bracket.
    pub fn new(
        id: &str,
        name: impl Into<String>,
        min_pages: u32,
        max_pages: u32,
    ) -> Result<Self, ValidationError> {
        let bracket = Self {
            id: BracketId::new(id)?,
            name: name.into(),
            min_pages,
            max_pages,
        };
        bracket.validate()?;
        Ok(bracket)
    }

    /// Arithmetic mean of the bounds, not rounded (15.5 for 11-20).
    pub fn average_pages(&self) -> f64 {
        (f64::from(self.min_pages) + f64::from(self.max_pages)) / 2.0
    }

    /// Checks `1 <= min_pages <= max_pages <= MAX_PAGES` and a non-blank name.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::empty_field("bracket_name"));
        }
        if self.min_pages == 0 || self.min_pages > MAX_PAGES {
            return Err(ValidationError::out_of_range(
                "min_pages",
                1,
                u64::from(MAX_PAGES),
                u64::from(self.min_pages),
            ));
        }
        if self.max_pages > MAX_PAGES {
            return Err(ValidationError::out_of_range(
                "max_pages",
                1,
                u64::from(MAX_PAGES),
                u64::from(self.max_pages),
            ));
        }
        if self.min_pages > self.max_pages {
            return Err(ValidationError::inverted_range(
                "pages",
                u64::from(self.min_pages),
                u64::from(self.max_pages),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn average_pages_is_not_rounded() {
        let bracket = PageBracket::new("11-20", "11-20 Pages", 11, 20).unwrap();
        assert_eq!(bracket.average_pages(), 15.5);
    }

    #[test]
    fn average_pages_of_even_span() {
        let bracket = PageBracket::new("6-10", "6-10 Pages", 6, 10).unwrap();
        assert_eq!(bracket.average_pages(), 8.0);
    }

    #[test]
    fn rejects_zero_min_pages() {
        let result = PageBracket::new("0-5", "0-5 Pages", 0, 5);
        assert!(matches!(result, Err(ValidationError::OutOfRange { .. })));
    }

    #[test]
    fn rejects_inverted_pages() {
        let result = PageBracket::new("bad", "Bad", 20, 11);
        assert!(matches!(result, Err(ValidationError::InvertedRange { .. })));
    }

    #[test]
    fn rejects_excessive_max_pages() {
        let result = PageBracket::new("huge", "Huge", 1, MAX_PAGES + 1);
        assert!(matches!(result, Err(ValidationError::OutOfRange { .. })));
    }

    #[test]
    fn single_page_bracket_is_valid() {
        let bracket = PageBracket::new("1", "Landing Page", 1, 1).unwrap();
        assert_eq!(bracket.average_pages(), 1.0);
    }
}
