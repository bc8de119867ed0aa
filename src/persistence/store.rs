//! Typed roster records on top of a raw key-value store

use super::KeyValueStore;
use crate::consts::{ALL_LISTS_KEY, CURRENT_LIST_KEY};
use crate::engine::RosterList;
use crate::error::Result;
use crate::library::SavedLists;

/// Reads and writes the working list and the saved-list library
#[derive(Debug)]
pub struct RosterStore<S> {
    inner: S,
}

impl<S: KeyValueStore> RosterStore<S> {
    pub fn new(inner: S) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }

    pub fn inner_mut(&mut self) -> &mut S {
        &mut self.inner
    }

    pub fn into_inner(self) -> S {
        self.inner
    }

    /// Working list with its checked flags. Missing means empty.
    pub fn load_current(&self) -> Result<RosterList> {
        match self.inner.get(CURRENT_LIST_KEY)? {
            Some(json) => Ok(serde_json::from_str(&json)?),
            None => Ok(RosterList::new()),
        }
    }

    pub fn save_current(&mut self, list: &RosterList) -> Result<()> {
        let json = serde_json::to_string(list)?;
        self.inner.set(CURRENT_LIST_KEY, &json)
    }

    /// All saved lists. Missing means none.
    pub fn load_saved(&self) -> Result<SavedLists> {
        match self.inner.get(ALL_LISTS_KEY)? {
            Some(json) => Ok(serde_json::from_str(&json)?),
            None => Ok(SavedLists::new()),
        }
    }

    pub fn save_saved(&mut self, saved: &SavedLists) -> Result<()> {
        let json = serde_json::to_string(saved)?;
        self.inner.set(ALL_LISTS_KEY, &json)
    }
}
