//! Song domain types

use super::ids::SongId;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Placeholder cover used when the catalog entry has none
const DEFAULT_COVER: &str = "/placeholder.svg";

/// A catalog song
///
/// Immutable once loaded. Field names follow the catalog JSON
/// (`duration` in whole seconds, `plays`, `src`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Song {
    pub id: SongId,
    pub title: String,
    pub artist: String,
    /// Free-text genre label ("Hip-Hop", "Commercial/Jingle", ...)
    pub genre: String,
    /// Length in seconds, always positive
    #[serde(rename = "duration")]
    pub duration_secs: u32,
    #[serde(default = "default_cover")]
    pub cover: String,
    /// Display-only play counter
    #[serde(default)]
    pub plays: u64,
    /// Playable media locator handed to the audio bridge
    pub src: String,
}

fn default_cover() -> String {
    DEFAULT_COVER.to_string()
}

impl Song {
    /// Create a song with placeholder cover and zero plays
    pub fn new(
        id: impl Into<SongId>,
        title: impl Into<String>,
        artist: impl Into<String>,
        genre: impl Into<String>,
        duration_secs: u32,
        src: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            artist: artist.into(),
            genre: genre.into(),
            duration_secs,
            cover: default_cover(),
            plays: 0,
            src: src.into(),
        }
    }

    /// Song length as a `Duration`
    pub fn duration(&self) -> Duration {
        Duration::from_secs(u64::from(self.duration_secs))
    }

    /// Data handed to the share surface
    pub fn share_info(&self) -> ShareInfo {
        ShareInfo {
            id: self.id.clone(),
            title: self.title.clone(),
            artist: self.artist.clone(),
        }
    }
}

/// What the share menu needs to compose a message
///
/// URL building, clipboard and share intents live outside the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareInfo {
    pub id: SongId,
    pub title: String,
    pub artist: String,
}
