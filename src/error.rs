//! Engine error types
//!
//! Persistence failures stay at the ledger boundary: none of these variants is
//! ever produced by a state change inside a [`GameSession`](crate::game::GameSession).

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by word selection, configuration and the history store
#[derive(Debug, Error)]
pub enum GameError {
    /// Malformed input such as an empty word list or a bad config value
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The history store is missing or could not be read
    #[error("History unavailable at {}: {reason}", path.display())]
    PersistenceUnavailable { path: PathBuf, reason: String },

    /// The history store could not be written
    #[error("Failed to save history to {}: {reason}", path.display())]
    PersistenceWriteFailed { path: PathBuf, reason: String },

    /// A stored date string is not a valid `YYYY-MM-DD` calendar date
    #[error("Invalid stored date '{value}': {reason}")]
    DateParseError { value: String, reason: String },
}

impl GameError {
    pub(crate) fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }
}
