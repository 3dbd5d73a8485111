//! Selection domain module.
//!
//! What the user has chosen: category, bracket, SEO, add-on features and
//! contact details.

mod contact;
mod errors;
mod features;
mod state;

pub use contact::{ContactError, ContactField, ContactInfo};
pub use errors::SelectionError;
pub use features::FeatureSelection;
pub use state::{ResolvedSelection, SelectionState};
