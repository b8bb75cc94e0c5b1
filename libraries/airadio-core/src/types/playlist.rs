/// Playlist domain types
use super::ids::{PlaylistId, SongId};
use super::song::Song;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Cover shown for user-created playlists
pub(crate) const DEFAULT_PLAYLIST_COVER: &str = "/playlist-cover-music.jpg";

/// Cover of the Favorites playlist
pub(crate) const FAVORITES_COVER: &str = "/favorites-playlist-heart.jpg";

/// Playlist
///
/// Songs keep insertion order and are unique by id. Songs can only be added
/// through [`crate::PlaylistStore`], which enforces both.
///
/// A playlist deserialized from outside the store is trusted as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Playlist {
    /// Unique playlist identifier
    pub id: PlaylistId,

    /// Display name
    pub name: String,

    /// Songs in insertion order
    songs: Vec<Song>,

    /// Cover image reference
    pub cover: String,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl Playlist {
    /// Create an empty playlist with a fresh id
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: PlaylistId::generate(),
            name: name.into(),
            songs: Vec::new(),
            cover: DEFAULT_PLAYLIST_COVER.to_string(),
            created_at: Utc::now(),
        }
    }

    /// Create the reserved Favorites playlist
    pub(crate) fn favorites() -> Self {
        Self {
            id: PlaylistId::favorites(),
            name: "Favorites".to_string(),
            songs: Vec::new(),
            cover: FAVORITES_COVER.to_string(),
            created_at: Utc::now(),
        }
    }

    /// Songs in insertion order
    pub fn songs(&self) -> &[Song] {
        &self.songs
    }

    /// Whether a song with this id is in the playlist
    pub fn contains(&self, song_id: &SongId) -> bool {
        self.songs.iter().any(|s| &s.id == song_id)
    }

    /// Number of songs
    pub fn len(&self) -> usize {
        self.songs.len()
    }

    /// Whether the playlist has no songs
    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }

    /// Total running time in seconds
    pub fn total_duration_secs(&self) -> u64 {
        self.songs.iter().map(|s| u64::from(s.duration_secs)).sum()
    }

    /// Append unless already present. Returns true if added.
    pub(crate) fn push_unique(&mut self, song: Song) -> bool {
        if self.contains(&song.id) {
            return false;
        }
        self.songs.push(song);
        true
    }

    /// Remove by id. Returns true if something was removed.
    pub(crate) fn remove(&mut self, song_id: &SongId) -> bool {
        let before = self.songs.len();
        self.songs.retain(|s| &s.id != song_id);
        self.songs.len() != before
    }
}
