//! Error types for playback management

use thiserror::Error;

/// Playback errors
///
/// Raised by session construction and by bridge implementations. Session
/// commands themselves never fail; bridge errors are recorded as load failures.
#[derive(Debug, Error)]
pub enum PlaybackError {
    /// Audio bridge rejected a directive
    #[error("Audio bridge error: {0}")]
    Bridge(String),

    /// Invalid session configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Catalog or domain error
    #[error(transparent)]
    Core(#[from] airadio_core::CoreError),
}

impl PlaybackError {
    /// Create a bridge error
    pub fn bridge(msg: impl Into<String>) -> Self {
        Self::Bridge(msg.into())
    }
}

/// Result type for playback operations
pub type Result<T> = std::result::Result<T, PlaybackError>;
