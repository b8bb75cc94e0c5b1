/// Core error types for AI-Radio
use crate::types::SongId;
use thiserror::Error;

/// Result type alias using `CoreError`
pub type Result<T> = std::result::Result<T, CoreError>;

/// Core error type for AI-Radio
///
/// Only raised while constructing values (catalog loading, validation).
/// Runtime playlist and session commands are silent no-ops instead.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Two catalog entries share an id
    #[error("Duplicate song id: {0}")]
    DuplicateSong(SongId),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// I/O errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
}

impl CoreError {
    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}
