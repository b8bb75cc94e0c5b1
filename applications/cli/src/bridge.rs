//! Simulated audio bridge for headless runs
use airadio_playback::{AudioBridge, PlaybackError, Result};
use std::time::Duration;
use tracing::debug;

/// Bridge that renders nothing and logs every directive
///
/// Position and end-of-track are driven by the caller through
/// `PlaybackSession::handle_bridge_event`.
#[derive(Debug, Default)]
pub struct SimulatedBridge {
    source: Option<String>,
    playing: bool,
    volume: f32,
}

impl SimulatedBridge {
    pub fn new() -> Self {
        Self::default()
    }

    /// Locator of the last successful load
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn volume(&self) -> f32 {
        self.volume
    }
}

impl AudioBridge for SimulatedBridge {
    fn load(&mut self, source: &str) -> Result<()> {
        if source.is_empty() {
            return Err(PlaybackError::bridge("empty media locator"));
        }
        debug!("bridge: load {}", source);
        self.source = Some(source.to_string());
        Ok(())
    }

    fn play(&mut self) -> Result<()> {
        debug!("bridge: play {:?}", self.source);
        self.playing = true;
        Ok(())
    }

    fn pause(&mut self) -> Result<()> {
        debug!("bridge: pause");
        self.playing = false;
        Ok(())
    }

    fn seek(&mut self, position: Duration) -> Result<()> {
        debug!("bridge: seek to {:.1}s", position.as_secs_f32());
        Ok(())
    }

    fn set_volume(&mut self, volume: f32) -> Result<()> {
        debug!("bridge: volume {:.2}", volume);
        self.volume = volume;
        Ok(())
    }
}
