//! In-memory playlist store
//!
//! CRUD over named song collections. The Favorites playlist is created with the
//! store and can never be deleted. Every mutator is a silent no-op when its
//! target is missing; the returned `bool` says whether anything changed.

use crate::types::{Playlist, PlaylistId, Song, SongId};
use tracing::debug;

/// Playlist store
///
/// Playlists are kept in creation order, Favorites first.
#[derive(Debug, Clone)]
pub struct PlaylistStore {
    playlists: Vec<Playlist>,
}

impl PlaylistStore {
    /// Create a store holding only the Favorites playlist
    pub fn new() -> Self {
        Self {
            playlists: vec![Playlist::favorites()],
        }
    }

    // ===== Playlists =====

    /// Create an empty playlist and return its fresh id
    pub fn create(&mut self, name: impl Into<String>) -> PlaylistId {
        let playlist = Playlist::new(name);
        let id = playlist.id.clone();
        debug!("Created playlist {} ({})", playlist.name, id);
        self.playlists.push(playlist);
        id
    }

    /// Delete a playlist
    ///
    /// Deleting Favorites or an unknown id does nothing.
    pub fn delete(&mut self, playlist_id: &PlaylistId) -> bool {
        if playlist_id.is_favorites() {
            debug!("Ignoring delete of the Favorites playlist");
            return false;
        }

        let before = self.playlists.len();
        self.playlists.retain(|p| &p.id != playlist_id);
        self.playlists.len() != before
    }

    /// Rename a playlist (Favorites included)
    pub fn rename(&mut self, playlist_id: &PlaylistId, name: impl Into<String>) -> bool {
        match self.get_mut(playlist_id) {
            Some(playlist) => {
                playlist.name = name.into();
                true
            }
            None => false,
        }
    }

    // ===== Songs =====

    /// Append a song unless the playlist already holds its id
    pub fn add_song(&mut self, playlist_id: &PlaylistId, song: Song) -> bool {
        match self.get_mut(playlist_id) {
            Some(playlist) => playlist.push_unique(song),
            None => {
                debug!("add_song: unknown playlist {}", playlist_id);
                false
            }
        }
    }

    /// Remove a song by id
    pub fn remove_song(&mut self, playlist_id: &PlaylistId, song_id: &SongId) -> bool {
        self.get_mut(playlist_id)
            .is_some_and(|playlist| playlist.remove(song_id))
    }

    /// Whether the playlist holds the song
    pub fn contains(&self, playlist_id: &PlaylistId, song_id: &SongId) -> bool {
        self.get(playlist_id)
            .is_some_and(|playlist| playlist.contains(song_id))
    }

    // ===== Favorites =====

    /// The "like" button: add to Favorites
    pub fn add_to_favorites(&mut self, song: Song) -> bool {
        self.add_song(&PlaylistId::favorites(), song)
    }

    /// Whether the song is in Favorites
    pub fn is_favorite(&self, song_id: &SongId) -> bool {
        self.favorites().contains(song_id)
    }

    /// The Favorites playlist
    pub fn favorites(&self) -> &Playlist {
        // Favorites is inserted by `new` and `delete` refuses to remove it.
        &self.playlists[0]
    }

    // ===== Queries =====

    pub fn get(&self, playlist_id: &PlaylistId) -> Option<&Playlist> {
        self.playlists.iter().find(|p| &p.id == playlist_id)
    }

    fn get_mut(&mut self, playlist_id: &PlaylistId) -> Option<&mut Playlist> {
        self.playlists.iter_mut().find(|p| &p.id == playlist_id)
    }

    /// All playlists, Favorites first
    pub fn list(&self) -> &[Playlist] {
        &self.playlists
    }

    /// Number of playlists including Favorites
    pub fn len(&self) -> usize {
        self.playlists.len()
    }

    /// Always false: Favorites is always present
    pub fn is_empty(&self) -> bool {
        self.playlists.is_empty()
    }
}

impl Default for PlaylistStore {
    fn default() -> Self {
        Self::new()
    }
}
