//! Display and print preferences
//!
//! Persisted separately from the roster data in the same key-value store.

use serde::{Deserialize, Serialize};

use crate::consts::{NAME_WIDTH, PRINT_SEGMENTS, SETTINGS_KEY};
use crate::error::Result;
use crate::persistence::KeyValueStore;

/// Shape of a printed page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrintLayout {
    /// Independent shuffles per page
    pub segments: usize,
    /// Characters per name
    pub name_width: usize,
}

impl Default for PrintLayout {
    fn default() -> Self {
        Self {
            segments: PRINT_SEGMENTS,
            name_width: NAME_WIDTH,
        }
    }
}

/// User preferences
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Characters shown per name
    pub name_width: usize,
    /// Segments per printed page
    pub segment_count: usize,
    /// Ask before deleting a saved list
    pub confirm_delete: bool,
    /// Show a notice after save/load/regenerate
    pub notify: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            name_width: NAME_WIDTH,
            segment_count: PRINT_SEGMENTS,
            confirm_delete: true,
            notify: true,
        }
    }
}

impl Settings {
    pub const MIN_NAME_WIDTH: usize = 1;
    pub const MAX_NAME_WIDTH: usize = 64;
    pub const MIN_SEGMENTS: usize = 1;
    pub const MAX_SEGMENTS: usize = 8;

    /// Clamp numeric fields into their supported ranges
    pub fn sanitized(mut self) -> Self {
        self.name_width = self
            .name_width
            .clamp(Self::MIN_NAME_WIDTH, Self::MAX_NAME_WIDTH);
        self.segment_count = self
            .segment_count
            .clamp(Self::MIN_SEGMENTS, Self::MAX_SEGMENTS);
        self
    }

    pub fn print_layout(&self) -> PrintLayout {
        PrintLayout {
            segments: self.segment_count,
            name_width: self.name_width,
        }
    }

    /// Load settings, falling back to defaults when missing or unreadable
    pub fn load<S: KeyValueStore + ?Sized>(store: &S) -> Self {
        match store.get(SETTINGS_KEY) {
            Ok(Some(json)) => match serde_json::from_str::<Settings>(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings");
                    return settings.sanitized();
                }
                Err(e) => log::warn!("Ignoring unreadable settings: {}", e),
            },
            Ok(None) => {}
            Err(e) => log::warn!("Could not read settings: {}", e),
        }

        log::info!("Using default settings");
        Self::default()
    }

    pub fn save<S: KeyValueStore + ?Sized>(&self, store: &mut S) -> Result<()> {
        let json = serde_json::to_string(self)?;
        store.set(SETTINGS_KEY, &json)?;
        log::info!("Settings saved");
        Ok(())
    }
}
