//! Core types for playback management

use crate::error::{PlaybackError, Result};
use airadio_core::SongId;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Promotional tracks of the shipped catalog (station idents and radio ads)
pub const DEFAULT_AD_SLOT_IDS: [&str; 7] = ["13", "14", "15", "16", "17", "18", "19"];

/// Regular songs played between two ad slots
pub const DEFAULT_AD_INTERVAL: usize = 3;

/// Initial volume (0.0-1.0)
pub const DEFAULT_VOLUME: f32 = 0.7;

/// Session state
///
/// `Loaded` and `Paused` both have the transport stopped; a paused song has
/// progressed past zero and resumes mid-track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionState {
    /// No current song
    Empty,

    /// Current song set, never started (elapsed 0)
    Loaded,

    /// Currently playing
    Playing,

    /// Paused mid-track
    Paused,
}

/// What the session does when the bridge reports a load failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadFailurePolicy {
    /// Record the failure and keep the current song and transport state
    #[default]
    Hold,

    /// Record the failure, then advance exactly like a skip
    SkipToNext,
}

/// A failure reported by the audio bridge
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadFailure {
    /// Song that was current when the failure arrived
    pub song_id: Option<SongId>,

    /// Bridge-provided reason
    pub reason: String,
}

/// Radio scheduler configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RadioConfig {
    /// Songs interleaved as ad slots (ids absent from the catalog are ignored)
    #[serde(default = "default_ad_slot_ids")]
    pub ad_slot_ids: Vec<SongId>,

    /// Regular songs between ad slots (default: 3)
    #[serde(default = "default_ad_interval")]
    pub ad_interval: usize,

    /// Fixed RNG seed for reproducible schedules (default: entropy)
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_ad_slot_ids() -> Vec<SongId> {
    DEFAULT_AD_SLOT_IDS.iter().copied().map(SongId::from).collect()
}

fn default_ad_interval() -> usize {
    DEFAULT_AD_INTERVAL
}

impl Default for RadioConfig {
    fn default() -> Self {
        Self {
            ad_slot_ids: default_ad_slot_ids(),
            ad_interval: default_ad_interval(),
            seed: None,
        }
    }
}

/// Configuration for the playback session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Initial volume (0.0-1.0, default: 0.7)
    #[serde(default = "default_volume")]
    pub volume: f32,

    /// Start in radio mode (default: true)
    #[serde(default = "default_radio_mode")]
    pub radio_mode: bool,

    /// Reaction to bridge load failures (default: Hold)
    #[serde(default)]
    pub load_failure_policy: LoadFailurePolicy,

    #[serde(default)]
    pub radio: RadioConfig,
}

fn default_volume() -> f32 {
    DEFAULT_VOLUME
}

fn default_radio_mode() -> bool {
    true
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            volume: default_volume(),
            radio_mode: default_radio_mode(),
            load_failure_policy: LoadFailurePolicy::default(),
            radio: RadioConfig::default(),
        }
    }
}

impl SessionConfig {
    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if !self.volume.is_finite() || !(0.0..=1.0).contains(&self.volume) {
            return Err(PlaybackError::InvalidConfig(format!(
                "volume must be within 0.0-1.0, got {}",
                self.volume
            )));
        }

        if self.radio.ad_interval == 0 {
            return Err(PlaybackError::InvalidConfig(
                "ad_interval must be at least 1".to_string(),
            ));
        }

        Ok(())
    }
}

/// Point-in-time view of the session for rendering and comparison
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub state: SessionState,
    pub current_song_id: Option<SongId>,
    pub queue: Vec<SongId>,
    pub is_playing: bool,
    pub radio_mode: bool,
    pub elapsed: Duration,
    pub volume: f32,
    pub is_muted: bool,
    pub radio_cursor: usize,
}
