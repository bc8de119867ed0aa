//! Roster entries, ingestion and the regenerate policy

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::shuffle::shuffle;
use crate::error::ValidationError;

/// One name on the roster and whether it has been called on
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub name: String,
    /// Older saves wrote this field as `isChecked`
    #[serde(alias = "isChecked", default)]
    pub checked: bool,
}

impl Entry {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            checked: false,
        }
    }
}

/// Outcome of [`RosterList::regenerate`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Regenerated {
    pub list: RosterList,
    /// Entries that were still unchecked and stayed at the front
    pub kept_in_front: usize,
}

/// The active working list, in display order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RosterList {
    pub entries: Vec<Entry>,
}

impl RosterList {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Build an all-unchecked list from names, keeping their order
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            entries: names.into_iter().map(Entry::new).collect(),
        }
    }

    /// Parse newline-delimited text into trimmed, non-empty names
    pub fn parse_names(raw: &str) -> Vec<String> {
        raw.lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Fresh ingestion: parse `raw` into unchecked entries and shuffle them
    pub fn ingest<R: Rng + ?Sized>(raw: &str, rng: &mut R) -> Result<Self, ValidationError> {
        let names = Self::parse_names(raw);
        if names.is_empty() {
            return Err(ValidationError::NoNames);
        }
        let list = Self::from_names(names);
        Ok(Self {
            entries: shuffle(&list.entries, rng),
        })
    }

    /// Unchecked entries stay in front in their current order; checked
    /// entries are shuffled behind them. Every entry comes back unchecked.
    pub fn regenerate<R: Rng + ?Sized>(&self, rng: &mut R) -> Regenerated {
        let (checked, unchecked): (Vec<&Entry>, Vec<&Entry>) =
            self.entries.iter().partition(|e| e.checked);
        let kept_in_front = unchecked.len();

        let mut names: Vec<&str> = unchecked.iter().map(|e| e.name.as_str()).collect();
        let checked_names: Vec<&str> = checked.iter().map(|e| e.name.as_str()).collect();
        names.extend(shuffle(&checked_names, rng));

        Regenerated {
            list: Self::from_names(names),
            kept_in_front,
        }
    }

    /// Set one entry's checked flag. Returns false if `index` is out of range.
    pub fn set_checked(&mut self, index: usize, checked: bool) -> bool {
        match self.entries.get_mut(index) {
            Some(entry) => {
                entry.checked = checked;
                true
            }
            None => false,
        }
    }

    /// Trim names and drop blank ones. Returns how many entries were
    /// trimmed or dropped.
    pub fn normalize(&mut self) -> usize {
        let mut repaired = 0;
        self.entries.retain_mut(|entry| {
            let trimmed = entry.name.trim();
            if trimmed.len() == entry.name.len() && !trimmed.is_empty() {
                return true;
            }
            repaired += 1;
            let trimmed = trimmed.to_string();
            entry.name = trimmed;
            !entry.name.is_empty()
        });
        repaired
    }

    pub fn names(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.name.clone()).collect()
    }

    /// Names joined one per line, for the edit box
    pub fn to_text(&self) -> String {
        self.entries
            .iter()
            .map(|e| e.name.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn checked_count(&self) -> usize {
        self.entries.iter().filter(|e| e.checked).count()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sorted name multiset, used to recognise a saved list after reload
    pub fn sorted_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.entries.iter().map(|e| e.name.as_str()).collect();
        names.sort_unstable();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn entry(name: &str, checked: bool) -> Entry {
        Entry {
            name: name.to_string(),
            checked,
        }
    }

    #[test]
    fn test_parse_names_drops_blank_lines() {
        let names = RosterList::parse_names("Alice\n\nBob \n  \nCara");
        assert_eq!(names, vec!["Alice", "Bob", "Cara"]);
    }

    #[test]
    fn test_parse_names_handles_crlf() {
        let names = RosterList::parse_names("  Dee\r\nEli\r\n\r\n");
        assert_eq!(names, vec!["Dee", "Eli"]);
    }

    #[test]
    fn test_ingest_yields_trimmed_unchecked_names() {
        let mut rng = Pcg32::seed_from_u64(3);
        let list = RosterList::ingest("Alice\n\nBob \n  \nCara", &mut rng).unwrap();
        assert_eq!(list.len(), 3);
        assert!(list.entries.iter().all(|e| !e.checked));
        let mut names = list.names();
        names.sort();
        assert_eq!(names, vec!["Alice", "Bob", "Cara"]);
    }

    #[test]
    fn test_ingest_blank_input_fails() {
        let mut rng = Pcg32::seed_from_u64(3);
        assert_eq!(
            RosterList::ingest(" \n\n\t\n", &mut rng),
            Err(ValidationError::NoNames)
        );
    }

    #[test]
    fn test_regenerate_keeps_unchecked_in_front() {
        let list = RosterList {
            entries: vec![entry("A", true), entry("B", false), entry("C", true)],
        };
        for seed in 0..50 {
            let mut rng = Pcg32::seed_from_u64(seed);
            let out = list.regenerate(&mut rng);
            assert_eq!(out.kept_in_front, 1);
            assert_eq!(out.list.entries[0].name, "B");
            let mut tail: Vec<&str> = out.list.entries[1..].iter().map(|e| e.name.as_str()).collect();
            tail.sort_unstable();
            assert_eq!(tail, vec!["A", "C"]);
            assert_eq!(out.list.checked_count(), 0);
        }
    }

    #[test]
    fn test_regenerate_preserves_unchecked_order() {
        let list = RosterList {
            entries: vec![
                entry("D", false),
                entry("X", true),
                entry("A", false),
                entry("C", false),
            ],
        };
        let mut rng = Pcg32::seed_from_u64(11);
        let out = list.regenerate(&mut rng);
        assert_eq!(out.list.names(), vec!["D", "A", "C", "X"]);
    }

    #[test]
    fn test_regenerate_all_unchecked_is_identity() {
        let list = RosterList::from_names(["Q", "R", "S", "T"]);
        let mut rng = Pcg32::seed_from_u64(5);
        let out = list.regenerate(&mut rng);
        assert_eq!(out.list, list);
        assert_eq!(out.kept_in_front, 4);
    }

    #[test]
    fn test_regenerate_all_checked_is_full_shuffle() {
        let mut list = RosterList::from_names(["Q", "R", "S", "T"]);
        for i in 0..list.len() {
            list.set_checked(i, true);
        }
        let mut rng = Pcg32::seed_from_u64(5);
        let out = list.regenerate(&mut rng);
        assert_eq!(out.kept_in_front, 0);
        assert_eq!(out.list.checked_count(), 0);
        assert_eq!(out.list.sorted_names(), vec!["Q", "R", "S", "T"]);
    }

    #[test]
    fn test_set_checked_out_of_range() {
        let mut list = RosterList::from_names(["A"]);
        assert!(!list.set_checked(3, true));
        assert!(list.set_checked(0, true));
        assert_eq!(list.checked_count(), 1);
    }

    #[test]
    fn test_normalize_trims_and_drops_blank_names() {
        let mut list = RosterList {
            entries: vec![entry("  ", true), entry("Ana ", true), entry("Ben", false), entry("", false)],
        };
        assert_eq!(list.normalize(), 3);
        assert_eq!(list.entries, vec![entry("Ana", true), entry("Ben", false)]);
        assert_eq!(list.normalize(), 0);
    }

    #[test]
    fn test_entry_reads_legacy_field_name() {
        let json = r#"[{"name":"Ana","isChecked":true},{"name":"Ben","checked":false}]"#;
        let list: RosterList = serde_json::from_str(json).unwrap();
        assert_eq!(list.entries, vec![entry("Ana", true), entry("Ben", false)]);

        let out = serde_json::to_string(&list).unwrap();
        assert_eq!(out, r#"[{"name":"Ana","checked":true},{"name":"Ben","checked":false}]"#);
    }

    #[test]
    fn test_to_text_round_trips_through_parse() {
        let list = RosterList::from_names(["Ana", "Ben", "Cy"]);
        assert_eq!(list.to_text(), "Ana\nBen\nCy");
        assert_eq!(RosterList::parse_names(&list.to_text()), list.names());
    }
}
