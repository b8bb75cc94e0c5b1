/// ID types for AI-Radio entities
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Reserved id of the Favorites playlist
pub const FAVORITES_ID: &str = "favorites";

/// Song identifier
///
/// Stable across sessions; the routing layer builds song detail links from it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SongId(String);

impl SongId {
    /// Create a new song ID
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the inner string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SongId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for SongId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for SongId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Playlist identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlaylistId(String);

impl PlaylistId {
    /// Create a new playlist ID
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a new random playlist ID
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// The reserved Favorites id
    pub fn favorites() -> Self {
        Self(FAVORITES_ID.to_string())
    }

    /// Whether this is the reserved Favorites id
    pub fn is_favorites(&self) -> bool {
        self.0 == FAVORITES_ID
    }

    /// Get the inner string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlaylistId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for PlaylistId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_playlist_ids_are_unique() {
        let a = PlaylistId::generate();
        let b = PlaylistId::generate();
        assert_ne!(a, b);
        assert!(!a.is_favorites());
    }

    #[test]
    fn favorites_id_is_reserved_literal() {
        let id = PlaylistId::favorites();
        assert_eq!(id.as_str(), "favorites");
        assert!(id.is_favorites());
        assert!(PlaylistId::new("favorites").is_favorites());
    }

    #[test]
    fn song_id_serializes_transparently() {
        let id = SongId::new("12");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"12\"");
        assert_eq!(id.to_string(), "12");
    }
}
