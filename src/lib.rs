//! Roster Shuffle - A class roster randomizer
//!
//! Core modules:
//! - `engine`: Shuffle, regenerate and print-segment logic (pure, seedable)
//! - `library`: Saved class lists keyed by name
//! - `persistence`: Key-value storage of the working list and saved lists
//! - `platform`: Browser/native platform abstraction
//! - `settings`: Print/display preferences
//! - `app`: Session + storage facade consumed by the front ends

pub mod app;
pub mod engine;
pub mod error;
pub mod library;
pub mod persistence;
pub mod platform;
pub mod settings;

pub use app::RosterApp;
pub use engine::{Command, Entry, ListBinding, RosterList, Session};
pub use error::{RosterError, ValidationError};
pub use library::SavedLists;
pub use settings::{PrintLayout, Settings};

/// Roster configuration constants
pub mod consts {
    /// Characters shown per name in lists and printouts
    pub const NAME_WIDTH: usize = 12;
    /// Independently shuffled segments per printed page
    pub const PRINT_SEGMENTS: usize = 4;

    /// Storage key for the working list (with checked flags)
    pub const CURRENT_LIST_KEY: &str = "currentListState";
    /// Storage key for all saved lists (names only)
    pub const ALL_LISTS_KEY: &str = "allClassLists";
    /// Storage key for settings
    pub const SETTINGS_KEY: &str = "rosterSettings";

    /// Label shown for a list that isn't bound to a saved name
    pub const UNSAVED_LABEL: &str = "[Unsaved List]";
}

/// Cut a name to `width` characters and right-pad it with spaces.
///
/// Counts chars, not bytes, so accented names never split mid-codepoint.
pub fn fixed_width(name: &str, width: usize) -> String {
    let mut out: String = name.chars().take(width).collect();
    let len = out.chars().count();
    out.extend(std::iter::repeat_n(' ', width - len));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_width_pads_short_names() {
        assert_eq!(fixed_width("Bob", 12), "Bob         ");
        assert_eq!(fixed_width("", 4), "    ");
    }

    #[test]
    fn test_fixed_width_truncates_long_names() {
        assert_eq!(fixed_width("Bartholomew Jones", 12), "Bartholomew ");
        assert_eq!(fixed_width("Maximiliano-Ruiz", 12), "Maximiliano-");
    }

    #[test]
    fn test_fixed_width_counts_chars() {
        let out = fixed_width("Zoë Åkesson-Ørsted", 12);
        assert_eq!(out.chars().count(), 12);
        assert_eq!(out, "Zoë Åkesson-");
    }
}
