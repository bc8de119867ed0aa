//! Error types surfaced to the user as blocking notifications

use thiserror::Error;

/// Input the user has to correct before retrying
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter a name for the class list.")]
    EmptyListName,
    #[error("The list is empty. Please enter names and shuffle first.")]
    EmptyList,
    #[error("No names found. Enter one name per line.")]
    NoNames,
    #[error("No entry {index}; the list has {len}.")]
    NoSuchEntry { index: usize, len: usize },
}

#[derive(Debug, Error)]
pub enum RosterError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("No saved list named \"{name}\".")]
    NotFound { name: String },
    #[error("Storage unavailable: {0}")]
    Storage(String),
    #[error("Stored data is unreadable: {0}")]
    Serde(#[from] serde_json::Error),
}

impl RosterError {
    pub fn not_found(name: impl Into<String>) -> Self {
        RosterError::NotFound { name: name.into() }
    }
}

pub type Result<T> = std::result::Result<T, RosterError>;
