//! Shared helpers for playback session tests

#![allow(dead_code)]

use airadio_core::{Catalog, Song};
use airadio_playback::{AudioBridge, PlaybackError, PlaybackSession, RadioConfig, SessionConfig};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// A directive the session sent to the bridge
#[derive(Debug, Clone, PartialEq)]
pub enum Directive {
    Load(String),
    Play,
    Pause,
    Seek(Duration),
    SetVolume(f32),
}

/// Bridge that records every directive into a shared log
///
/// Keep a clone of `log` before boxing the bridge into a session.
#[derive(Clone, Default)]
pub struct RecordingBridge {
    pub log: Arc<Mutex<Vec<Directive>>>,
    pub fail_loads: bool,
}

impl RecordingBridge {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bridge that rejects every `load`
    pub fn failing() -> Self {
        Self {
            fail_loads: true,
            ..Self::default()
        }
    }

    pub fn directives(&self) -> Vec<Directive> {
        self.log.lock().unwrap().clone()
    }

    pub fn clear(&self) {
        self.log.lock().unwrap().clear();
    }

    fn record(&self, directive: Directive) {
        self.log.lock().unwrap().push(directive);
    }
}

impl AudioBridge for RecordingBridge {
    fn load(&mut self, source: &str) -> airadio_playback::Result<()> {
        self.record(Directive::Load(source.to_string()));
        if self.fail_loads {
            return Err(PlaybackError::bridge(format!("cannot load {}", source)));
        }
        Ok(())
    }

    fn play(&mut self) -> airadio_playback::Result<()> {
        self.record(Directive::Play);
        Ok(())
    }

    fn pause(&mut self) -> airadio_playback::Result<()> {
        self.record(Directive::Pause);
        Ok(())
    }

    fn seek(&mut self, position: Duration) -> airadio_playback::Result<()> {
        self.record(Directive::Seek(position));
        Ok(())
    }

    fn set_volume(&mut self, volume: f32) -> airadio_playback::Result<()> {
        self.record(Directive::SetVolume(volume));
        Ok(())
    }
}

pub fn create_test_song(id: &str) -> Song {
    Song::new(
        id,
        format!("Track {}", id),
        "DJ FoamBot Productions",
        "Parody/Pop",
        180,
        format!("/music/{}.mp3", id),
    )
}

/// Catalog with songs "1"..="n"
pub fn create_catalog(n: usize) -> Arc<Catalog> {
    let songs = (1..=n).map(|i| create_test_song(&i.to_string())).collect();
    Arc::new(Catalog::new(songs).unwrap())
}

/// Seeded config so two sessions produce the same radio schedule
pub fn seeded_config(seed: u64, ad_slot_ids: &[&str]) -> SessionConfig {
    SessionConfig {
        radio: RadioConfig {
            ad_slot_ids: ad_slot_ids.iter().copied().map(Into::into).collect(),
            seed: Some(seed),
            ..RadioConfig::default()
        },
        ..SessionConfig::default()
    }
}

pub fn create_session(
    catalog: Arc<Catalog>,
    config: SessionConfig,
) -> (PlaybackSession, RecordingBridge) {
    let bridge = RecordingBridge::new();
    let session = PlaybackSession::new(catalog, Box::new(bridge.clone()), config).unwrap();
    (session, bridge)
}
