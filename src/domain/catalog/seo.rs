//! SEO option offered alongside every estimate.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Whether the customer wants SEO work included.
///
/// Exactly two values exist. Their ids (`"yes"` / `"no"`) are what the
/// selection controls emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SeoChoice {
    /// SEO work is included; adds the catalog's SEO cost to both bounds.
    #[serde(rename = "yes")]
    Required,

    /// No SEO work.
    #[serde(rename = "no")]
    NotRequired,
}

impl SeoChoice {
    /// Both choices in display order.
    pub const ALL: [SeoChoice; 2] = [SeoChoice::Required, SeoChoice::NotRequired];

    /// Returns the selection id for this choice.
    pub fn id(&self) -> &'static str {
        match self {
            SeoChoice::Required => "yes",
            SeoChoice::NotRequired => "no",
        }
    }

    /// Returns the display name for this choice.
    pub fn display_name(&self) -> &'static str {
        match self {
            SeoChoice::Required => "Yes",
            SeoChoice::NotRequired => "No",
        }
    }

    /// Returns true if SEO work is requested.
    pub fn is_required(&self) -> bool {
        matches!(self, SeoChoice::Required)
    }

    /// Maps a `required` flag back to a choice.
    pub fn from_required(required: bool) -> Self {
        if required {
            SeoChoice::Required
        } else {
            SeoChoice::NotRequired
        }
    }
}

impl Default for SeoChoice {
    fn default() -> Self {
        SeoChoice::Required
    }
}

impl fmt::Display for SeoChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for SeoChoice {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "yes" => Ok(SeoChoice::Required),
            "no" => Ok(SeoChoice::NotRequired),
            other => Err(ValidationError::invalid_format(
                "seo",
                format!("expected 'yes' or 'no', got '{}'", other),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_is_required() {
        assert!(SeoChoice::Required.is_required());
        assert!(!SeoChoice::NotRequired.is_required());
    }

    #[test]
    fn ids_and_display_names_are_correct() {
        assert_eq!(SeoChoice::Required.id(), "yes");
        assert_eq!(SeoChoice::NotRequired.id(), "no");
        assert_eq!(SeoChoice::Required.display_name(), "Yes");
        assert_eq!(SeoChoice::NotRequired.display_name(), "No");
    }

    #[test]
    fn parses_from_id() {
        assert_eq!("yes".parse::<SeoChoice>().unwrap(), SeoChoice::Required);
        assert_eq!("no".parse::<SeoChoice>().unwrap(), SeoChoice::NotRequired);
        assert!("maybe".parse::<SeoChoice>().is_err());
    }

    #[test]
    fn from_required_round_trips() {
        for choice in SeoChoice::ALL {
            assert_eq!(SeoChoice::from_required(choice.is_required()), choice);
        }
    }

    #[test]
    fn serializes_as_id() {
        let json = serde_json::to_string(&SeoChoice::NotRequired).unwrap();
        assert_eq!(json, "\"no\"");
    }

    #[test]
    fn default_is_required() {
        assert_eq!(SeoChoice::default(), SeoChoice::Required);
    }
}
