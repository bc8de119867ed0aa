//! Active list session and the commands that mutate it
//!
//! The session replaces a page-global "current list name": front ends keep
//! one `Session` value and thread it through every operation.

use super::roster::RosterList;
use crate::consts::UNSAVED_LABEL;

/// Which saved list, if any, the active list belongs to
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ListBinding {
    /// Nothing loaded or entered
    #[default]
    Empty,
    /// Freshly entered, not saved under a name
    Unsaved,
    /// Loaded from, or saved as, this name
    Saved(String),
}

impl ListBinding {
    /// Heading shown above the list
    pub fn label(&self) -> &str {
        match self {
            ListBinding::Saved(name) => name.as_str(),
            ListBinding::Empty | ListBinding::Unsaved => UNSAVED_LABEL,
        }
    }

    pub fn saved_name(&self) -> Option<&str> {
        match self {
            ListBinding::Saved(name) => Some(name.as_str()),
            _ => None,
        }
    }

    pub fn is_bound_to(&self, name: &str) -> bool {
        self.saved_name() == Some(name)
    }
}

/// UI action on the active list, decoupled from how it is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Checkbox at `index` changed
    SetChecked { index: usize, checked: bool },
    /// Drop the list and its binding
    Clear,
}

/// The active working list plus its binding
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub list: RosterList,
    pub binding: ListBinding,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// A freshly ingested list
    pub fn unsaved(list: RosterList) -> Self {
        Self {
            list,
            binding: ListBinding::Unsaved,
        }
    }

    /// A list loaded from (or just saved as) `name`
    pub fn bound(list: RosterList, name: impl Into<String>) -> Self {
        Self {
            list,
            binding: ListBinding::Saved(name.into()),
        }
    }

    /// Swap in a new list without touching the binding (regenerate)
    pub fn replace_list(&mut self, list: RosterList) {
        self.list = list;
    }

    pub fn clear(&mut self) {
        self.list = RosterList::new();
        self.binding = ListBinding::Empty;
    }

    /// Apply a command. Returns whether anything changed.
    pub fn dispatch(&mut self, command: Command) -> bool {
        match command {
            Command::SetChecked { index, checked } => self.list.set_checked(index, checked),
            Command::Clear => {
                let changed = !self.list.is_empty() || self.binding != ListBinding::Empty;
                self.clear();
                changed
            }
        }
    }
}
