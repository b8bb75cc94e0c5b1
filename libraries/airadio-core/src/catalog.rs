//! Song catalog
//!
//! The ordered, read-only song list loaded once at startup. Shared between the
//! playback session and the UI through `Arc<Catalog>`.

use crate::error::{CoreError, Result};
use crate::types::{Song, SongId};
use std::collections::{HashMap, HashSet};
use std::path::Path;

/// Genre filter value that matches every song
pub const ALL_GENRES: &str = "All";

/// Immutable ordered song catalog
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    songs: Vec<Song>,
    index: HashMap<SongId, usize>,
}

impl Catalog {
    /// Build a catalog, validating ids and durations
    ///
    /// Order is preserved. Fails on duplicate ids or zero-length songs.
    pub fn new(songs: Vec<Song>) -> Result<Self> {
        let mut index = HashMap::with_capacity(songs.len());

        for (position, song) in songs.iter().enumerate() {
            if song.duration_secs == 0 {
                return Err(CoreError::invalid_input(format!(
                    "song {} has zero duration",
                    song.id
                )));
            }
            if index.insert(song.id.clone(), position).is_some() {
                return Err(CoreError::DuplicateSong(song.id.clone()));
            }
        }

        tracing::debug!("Catalog loaded with {} songs", songs.len());

        Ok(Self { songs, index })
    }

    /// Parse a JSON array of songs
    pub fn from_json_str(json: &str) -> Result<Self> {
        let songs: Vec<Song> = serde_json::from_str(json)?;
        Self::new(songs)
    }

    /// Read and parse a JSON catalog file
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Look up a song by id
    pub fn get(&self, id: &SongId) -> Option<&Song> {
        self.index.get(id).map(|&i| &self.songs[i])
    }

    /// Whether a song with this id exists
    pub fn contains(&self, id: &SongId) -> bool {
        self.index.contains_key(id)
    }

    /// All songs in catalog order
    pub fn songs(&self) -> &[Song] {
        &self.songs
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Song> {
        self.songs.iter()
    }

    pub fn len(&self) -> usize {
        self.songs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }

    /// Songs with exactly this genre label
    ///
    /// `"All"` returns the whole catalog.
    pub fn by_genre(&self, genre: &str) -> Vec<&Song> {
        if genre == ALL_GENRES {
            return self.songs.iter().collect();
        }
        self.songs.iter().filter(|s| s.genre == genre).collect()
    }

    /// Distinct genres in order of first appearance
    pub fn genres(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.songs
            .iter()
            .map(|s| s.genre.as_str())
            .filter(|g| seen.insert(*g))
            .collect()
    }

    /// Top `limit` songs by play count
    ///
    /// Stable sort, so ties keep catalog order.
    pub fn trending(&self, limit: usize) -> Vec<&Song> {
        let mut songs: Vec<&Song> = self.songs.iter().collect();
        songs.sort_by(|a, b| b.plays.cmp(&a.plays));
        songs.truncate(limit);
        songs
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Song;
    type IntoIter = std::slice::Iter<'a, Song>;

    fn into_iter(self) -> Self::IntoIter {
        self.songs.iter()
    }
}

/// Format seconds as `m:ss`
pub fn format_duration(seconds: u64) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn song(id: &str, genre: &str, plays: u64) -> Song {
        let mut song = Song::new(id, format!("Song {}", id), "DJ FoamBot", genre, 120, format!("/{}.mp3", id));
        song.plays = plays;
        song
    }

    #[test]
    fn lookup_by_id() {
        let catalog = Catalog::new(vec![song("1", "Hip-Hop", 10), song("2", "Blues", 5)]).unwrap();

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get(&SongId::new("2")).unwrap().genre, "Blues");
        assert!(catalog.get(&SongId::new("3")).is_none());
        assert!(catalog.contains(&SongId::new("1")));
    }

    #[test]
    fn rejects_duplicate_ids() {
        let result = Catalog::new(vec![song("1", "Hip-Hop", 0), song("1", "Blues", 0)]);
        assert!(matches!(result, Err(CoreError::DuplicateSong(id)) if id.as_str() == "1"));
    }

    #[test]
    fn rejects_zero_duration() {
        let mut bad = song("1", "Hip-Hop", 0);
        bad.duration_secs = 0;
        assert!(matches!(Catalog::new(vec![bad]), Err(CoreError::InvalidInput(_))));
    }

    #[test]
    fn genre_filter() {
        let catalog = Catalog::new(vec![
            song("1", "Hip-Hop", 0),
            song("2", "Country", 0),
            song("3", "Hip-Hop", 0),
        ])
        .unwrap();

        let hip_hop: Vec<&str> = catalog.by_genre("Hip-Hop").iter().map(|s| s.id.as_str()).collect();
        assert_eq!(hip_hop, vec!["1", "3"]);
        assert_eq!(catalog.by_genre(ALL_GENRES).len(), 3);
        assert!(catalog.by_genre("Polka").is_empty());
        assert_eq!(catalog.genres(), vec!["Hip-Hop", "Country"]);
    }

    #[test]
    fn trending_sorts_by_plays_and_keeps_ties_in_order() {
        let catalog = Catalog::new(vec![
            song("1", "A", 100),
            song("2", "A", 500),
            song("3", "A", 100),
            song("4", "A", 900),
        ])
        .unwrap();

        let top: Vec<&str> = catalog.trending(3).iter().map(|s| s.id.as_str()).collect();
        assert_eq!(top, vec!["4", "2", "1"]);
        assert_eq!(catalog.trending(10).len(), 4);
    }

    #[test]
    fn empty_catalog_is_valid() {
        let catalog = Catalog::new(Vec::new()).unwrap();
        assert!(catalog.is_empty());
        assert!(catalog.trending(6).is_empty());
    }

    #[test]
    fn format_duration_pads_seconds() {
        assert_eq!(format_duration(185), "3:05");
        assert_eq!(format_duration(40), "0:40");
        assert_eq!(format_duration(0), "0:00");
    }
}
