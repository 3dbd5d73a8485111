//! Chosen add-on features with toggle semantics.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::FeatureId;

/// Set of chosen feature ids.
///
/// Keeps insertion order so a quote lists features the way they were
/// picked, but equality ignores order: pricing sums prices and does not
/// care which feature came first.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "Vec<FeatureId>", into = "Vec<FeatureId>")]
pub struct FeatureSelection(Vec<FeatureId>);

impl FeatureSelection {
    /// Creates an empty selection.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Returns a new selection with `id` removed if present, appended if absent.
    pub fn toggled(&self, id: &FeatureId) -> Self {
        let mut next = self.clone();
        next.toggle(id.clone());
        next
    }

    /// Toggles `id` in place. Returns true if the feature is now selected.
    pub fn toggle(&mut self, id: FeatureId) -> bool {
        if let Some(pos) = self.0.iter().position(|f| f == &id) {
            self.0.remove(pos);
            false
        } else {
            self.0.push(id);
            true
        }
    }

    pub fn contains(&self, id: &FeatureId) -> bool {
        self.0.contains(id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates chosen ids in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, FeatureId> {
        self.0.iter()
    }
}

impl PartialEq for FeatureSelection {
    fn eq(&self, other: &Self) -> bool {
        self.0.len() == other.0.len() && self.0.iter().all(|id| other.contains(id))
    }
}

impl Eq for FeatureSelection {}

impl FromIterator<FeatureId> for FeatureSelection {
    /// Collects ids, dropping duplicates after their first occurrence.
    fn from_iter<I: IntoIterator<Item = FeatureId>>(iter: I) -> Self {
        let mut ids = Vec::new();
        for id in iter {
            if !ids.contains(&id) {
                ids.push(id);
            }
        }
        Self(ids)
    }
}

impl From<Vec<FeatureId>> for FeatureSelection {
    fn from(ids: Vec<FeatureId>) -> Self {
        ids.into_iter().collect()
    }
}

impl From<FeatureSelection> for Vec<FeatureId> {
    fn from(selection: FeatureSelection) -> Self {
        selection.0
    }
}

impl<'a> IntoIterator for &'a FeatureSelection {
    type Item = &'a FeatureId;
    type IntoIter = std::slice::Iter<'a, FeatureId>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> FeatureId {
        FeatureId::new(s).unwrap()
    }

    #[test]
    fn toggle_adds_absent_feature() {
        let mut selection = FeatureSelection::new();
        assert!(selection.toggle(id("crm")));
        assert!(selection.contains(&id("crm")));
        assert_eq!(selection.len(), 1);
    }

    #[test]
    fn toggle_removes_present_feature() {
        let mut selection: FeatureSelection = vec![id("crm"), id("chat")].into();
        assert!(!selection.toggle(id("crm")));
        assert!(!selection.contains(&id("crm")));
        assert_eq!(selection.len(), 1);
    }

    #[test]
    fn toggled_leaves_original_untouched() {
        let original: FeatureSelection = vec![id("crm")].into();
        let next = original.toggled(&id("chat"));
        assert_eq!(original.len(), 1);
        assert_eq!(next.len(), 2);
    }

    #[test]
    fn toggling_twice_restores_contents() {
        let original: FeatureSelection = vec![id("crm"), id("chat"), id("lms")].into();
        let round_trip = original.toggled(&id("crm")).toggled(&id("crm"));
        assert_eq!(round_trip, original);
    }

    #[test]
    fn keeps_insertion_order() {
        let mut selection = FeatureSelection::new();
        selection.toggle(id("lms"));
        selection.toggle(id("crm"));
        selection.toggle(id("chat"));
        let order: Vec<&str> = selection.iter().map(|f| f.as_str()).collect();
        assert_eq!(order, vec!["lms", "crm", "chat"]);
    }

    #[test]
    fn equality_ignores_order() {
        let a: FeatureSelection = vec![id("crm"), id("chat")].into();
        let b: FeatureSelection = vec![id("chat"), id("crm")].into();
        assert_eq!(a, b);
    }

    #[test]
    fn collecting_drops_duplicates() {
        let selection: FeatureSelection = vec![id("crm"), id("crm"), id("chat")].into();
        assert_eq!(selection.len(), 2);
    }

    #[test]
    fn serializes_as_id_list() {
        let selection: FeatureSelection = vec![id("cart"), id("chat")].into();
        let json = serde_json::to_string(&selection).unwrap();
        assert_eq!(json, r#"["cart","chat"]"#);
    }
}
