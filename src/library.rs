//! Saved class lists
//!
//! Persisted under a single key as list-name -> names. Checked flags are
//! not stored; a loaded list always starts fresh.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::engine::RosterList;
use crate::error::{Result, RosterError, ValidationError};

/// All saved lists, ordered by name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SavedLists {
    pub lists: BTreeMap<String, Vec<String>>,
}

impl SavedLists {
    pub fn new() -> Self {
        Self {
            lists: BTreeMap::new(),
        }
    }

    /// Store the names of `list` under `name` (trimmed), replacing any list
    /// already saved there. Returns the trimmed name.
    pub fn insert(&mut self, name: &str, list: &RosterList) -> Result<String> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyListName.into());
        }
        if list.is_empty() {
            return Err(ValidationError::EmptyList.into());
        }
        self.lists.insert(name.to_string(), list.names());
        Ok(name.to_string())
    }

    /// A fresh, all-unchecked copy of the saved list
    pub fn get(&self, name: &str) -> Result<RosterList> {
        self.lists
            .get(name)
            .map(|names| RosterList::from_names(names.iter().cloned()))
            .ok_or_else(|| RosterError::not_found(name))
    }

    pub fn remove(&mut self, name: &str) -> Result<Vec<String>> {
        self.lists
            .remove(name)
            .ok_or_else(|| RosterError::not_found(name))
    }

    /// Saved list names, sorted
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.lists.keys().map(String::as_str)
    }

    /// First saved list (by name) holding the same names as `list`,
    /// ignoring order
    pub fn find_matching(&self, list: &RosterList) -> Option<&str> {
        if list.is_empty() {
            return None;
        }
        let wanted = list.sorted_names();
        self.lists.iter().find_map(|(name, names)| {
            let mut candidate: Vec<&str> = names.iter().map(String::as_str).collect();
            candidate.sort_unstable();
            (candidate == wanted).then_some(name.as_str())
        })
    }

    pub fn len(&self) -> usize {
        self.lists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_requires_name_and_entries() {
        let mut saved = SavedLists::new();
        let list = RosterList::from_names(["Ana"]);
        assert!(matches!(
            saved.insert("   ", &list),
            Err(RosterError::Validation(ValidationError::EmptyListName))
        ));
        assert!(matches!(
            saved.insert("Math", &RosterList::new()),
            Err(RosterError::Validation(ValidationError::EmptyList))
        ));
        assert!(saved.is_empty());
    }

    #[test]
    fn test_get_resets_checked_flags() {
        let mut saved = SavedLists::new();
        let mut list = RosterList::from_names(["Ana", "Ben", "Cy"]);
        list.set_checked(0, true);
        list.set_checked(2, true);
        assert_eq!(saved.insert(" Period 2 ", &list).unwrap(), "Period 2");

        let loaded = saved.get("Period 2").unwrap();
        assert_eq!(loaded.names(), vec!["Ana", "Ben", "Cy"]);
        assert_eq!(loaded.checked_count(), 0);
    }

    #[test]
    fn test_unknown_names_are_not_found() {
        let mut saved = SavedLists::new();
        assert!(matches!(saved.get("Nope"), Err(RosterError::NotFound { .. })));
        assert!(matches!(saved.remove("Nope"), Err(RosterError::NotFound { .. })));
    }

    #[test]
    fn test_names_are_sorted() {
        let mut saved = SavedLists::new();
        let list = RosterList::from_names(["Ana"]);
        for name in ["Zoology", "Art", "Math"] {
            saved.insert(name, &list).unwrap();
        }
        assert_eq!(saved.names().collect::<Vec<_>>(), vec!["Art", "Math", "Zoology"]);
    }

    #[test]
    fn test_find_matching_ignores_order() {
        let mut saved = SavedLists::new();
        saved
            .insert("Math", &RosterList::from_names(["Ana", "Ben", "Cy"]))
            .unwrap();
        saved
            .insert("Art", &RosterList::from_names(["Ana", "Ben"]))
            .unwrap();

        let shuffled = RosterList::from_names(["Cy", "Ana", "Ben"]);
        assert_eq!(saved.find_matching(&shuffled), Some("Math"));
        let other = RosterList::from_names(["Cy", "Dee"]);
        assert_eq!(saved.find_matching(&other), None);
        assert_eq!(saved.find_matching(&RosterList::new()), None);
    }

    #[test]
    fn test_serializes_as_plain_map() {
        let mut saved = SavedLists::new();
        saved
            .insert("Math", &RosterList::from_names(["Ana", "Ben"]))
            .unwrap();
        let json = serde_json::to_string(&saved).unwrap();
        assert_eq!(json, r#"{"Math":["Ana","Ben"]}"#);
    }
}
