//! Lead contact details captured by the quote form.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Editable contact form fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactField {
    Name,
    Email,
    Phone,
}

impl ContactField {
    /// Fields the form refuses to submit while empty.
    pub const REQUIRED: [ContactField; 2] = [ContactField::Name, ContactField::Phone];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Phone => "phone",
        }
    }

    pub fn is_required(&self) -> bool {
        Self::REQUIRED.contains(self)
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Contact validation failure. Lists every empty required field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContactError {
    #[error("Required contact fields are empty: {}", join_fields(.0))]
    MissingRequired(Vec<ContactField>),
}

fn join_fields(fields: &[ContactField]) -> String {
    fields
        .iter()
        .map(ContactField::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Contact details as typed by the user. Carried into the quote verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl ContactInfo {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
        }
    }

    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Phone => &self.phone,
        }
    }

    /// Replaces one field's value.
    pub fn set(&mut self, field: ContactField, value: impl Into<String>) {
        let value = value.into();
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Phone => self.phone = value,
        }
    }

    /// Required fields that are empty or whitespace-only.
    pub fn missing_required(&self) -> Vec<ContactField> {
        ContactField::REQUIRED
            .into_iter()
            .filter(|field| self.get(*field).trim().is_empty())
            .collect()
    }

    /// Checks that name and phone are filled in. Email stays optional.
    pub fn validate_required(&self) -> Result<(), ContactError> {
        let missing = self.missing_required();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(ContactError::MissingRequired(missing))
        }
    }
}
