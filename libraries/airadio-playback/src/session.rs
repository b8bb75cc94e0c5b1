//! Playback session - core orchestration
//!
//! Single source of truth for what is playing and what plays next. Commands
//! from the UI and events from the audio bridge both land here; every one
//! completes before the next is processed.

use crate::{
    bridge::{AudioBridge, BridgeEvent},
    error::{PlaybackError, Result},
    events::SessionEvent,
    queue::ManualQueue,
    radio::RadioScheduler,
    types::{LoadFailure, LoadFailurePolicy, SessionConfig, SessionSnapshot, SessionState},
    volume::Volume,
};
use airadio_core::{Catalog, Playlist, Song, SongId};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Central playback session
///
/// Orchestrates:
/// - Current song and transport flag (playing/paused)
/// - Manual queue (always preferred over radio)
/// - Radio mode, backed by the [`RadioScheduler`]
/// - Elapsed time and volume
/// - Directives to the [`AudioBridge`] and reactions to its events
pub struct PlaybackSession {
    bridge: Box<dyn AudioBridge>,

    // State
    current: Option<Song>,
    playing: bool,
    elapsed: Duration,

    // Sources of the next song
    queue: ManualQueue,
    radio: RadioScheduler,
    radio_mode: bool,

    // Settings
    volume: Volume,
    load_failure_policy: LoadFailurePolicy,

    // Diagnostics
    last_error: Option<LoadFailure>,

    // Event queue for UI synchronization
    pending_events: Vec<SessionEvent>,
}

impl PlaybackSession {
    /// Create new playback session
    ///
    /// Nothing is sent to the bridge until [`start`](Self::start).
    pub fn new(
        catalog: Arc<Catalog>,
        bridge: Box<dyn AudioBridge>,
        config: SessionConfig,
    ) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            radio: RadioScheduler::new(catalog, &config.radio),
            bridge,
            current: None,
            playing: false,
            elapsed: Duration::ZERO,
            queue: ManualQueue::new(),
            radio_mode: config.radio_mode,
            volume: Volume::new(config.volume),
            load_failure_policy: config.load_failure_policy,
            last_error: None,
            pending_events: Vec::new(),
        })
    }

    /// Bring the session up
    ///
    /// Pushes the initial volume to the bridge and, in radio mode with nothing
    /// loaded yet, loads the first radio song without starting it.
    /// Calling it again changes nothing.
    pub fn start(&mut self) {
        let gain = self.volume.gain();
        self.send(|bridge| bridge.set_volume(gain));

        if self.current.is_none() && self.radio_mode {
            match self.radio.next() {
                Some(song) => self.change_song(song),
                None => debug!("Radio start skipped: catalog is empty"),
            }
        }
    }

    // ===== Transport =====

    /// Start or resume playback
    ///
    /// No-op without a current song.
    pub fn play(&mut self) {
        if self.current.is_none() {
            debug!("play ignored: no current song");
            return;
        }
        self.set_playing(true);
    }

    /// Pause playback
    pub fn pause(&mut self) {
        self.set_playing(false);
    }

    /// Play/pause button
    pub fn toggle_play(&mut self) {
        if self.playing {
            self.pause();
        } else {
            self.play();
        }
    }

    /// Advance to whatever plays next
    ///
    /// Manual queue head first, then the radio when radio mode is on; otherwise
    /// the transport stops and the current song stays. Explicit skips and the
    /// bridge's end-of-track event both come through here.
    pub fn play_next(&mut self) {
        if let Some(song) = self.queue.pop_front() {
            self.emit_queue_changed();
            self.change_song(song);
        } else if self.radio_mode {
            match self.radio.next() {
                Some(song) => self.change_song(song),
                None => {
                    debug!("Radio has nothing to play");
                    self.set_playing(false);
                }
            }
        } else {
            self.set_playing(false);
        }
    }

    /// Go back
    ///
    /// In radio mode, steps back through the radio pass when it has at least
    /// two served songs. Otherwise (and always outside radio mode) the current
    /// song restarts; there is no history for manual playback.
    pub fn play_previous(&mut self) {
        if self.radio_mode {
            if let Some(song) = self.radio.previous() {
                self.change_song(song);
                return;
            }
        }
        self.restart_current();
    }

    /// Play a playlist from its first song
    ///
    /// The rest of the playlist becomes the manual queue and radio mode turns
    /// off. An empty playlist leaves the session untouched.
    pub fn play_playlist(&mut self, playlist: &Playlist) {
        let Some((first, rest)) = playlist.songs().split_first() else {
            debug!("play_playlist ignored: {} is empty", playlist.id);
            return;
        };

        self.queue.replace(rest.to_vec());
        self.emit_queue_changed();
        self.set_radio_mode(false);
        self.playing = true;
        self.change_song(first.clone());
        self.emit_state_changed();
    }

    /// Play a song picked from the library
    ///
    /// Turns radio mode off and leaves the manual queue as it is.
    pub fn play_song(&mut self, song: Song) {
        self.set_radio_mode(false);
        self.playing = true;
        self.change_song(song);
        self.emit_state_changed();
    }

    // ===== Radio =====

    /// Turn radio mode on or off
    ///
    /// Does not change the current song; it only decides what `play_next`
    /// falls back to. The first activation builds the radio pass.
    pub fn set_radio_mode(&mut self, enabled: bool) {
        if self.radio_mode == enabled {
            return;
        }

        self.radio_mode = enabled;
        if enabled {
            self.radio.ensure_built();
        }
        self.pending_events
            .push(SessionEvent::RadioModeChanged { enabled });
    }

    /// Radio button: radio on, manual queue dropped, transport on
    ///
    /// Keeps the current song if there is one; otherwise the first radio
    /// song is loaded. With an empty catalog nothing plays.
    pub fn start_radio(&mut self) {
        self.set_radio_mode(true);
        self.clear_queue();

        if self.current.is_none() {
            match self.radio.next() {
                Some(song) => self.change_song(song),
                None => debug!("Radio start skipped: catalog is empty"),
            }
        }
        self.play();
    }

    // ===== Queue Management =====

    /// Add a song to the end of the manual queue
    pub fn enqueue(&mut self, song: Song) {
        self.queue.push(song);
        self.emit_queue_changed();
    }

    /// Remove a song from the manual queue by id
    pub fn dequeue(&mut self, song_id: &SongId) -> bool {
        let removed = self.queue.remove(song_id) > 0;
        if removed {
            self.emit_queue_changed();
        }
        removed
    }

    /// Empty the manual queue
    pub fn clear_queue(&mut self) {
        if !self.queue.is_empty() {
            self.queue.clear();
            self.emit_queue_changed();
        }
    }

    // ===== Seek =====

    /// Seek within the current song
    ///
    /// Elapsed time updates immediately, before the bridge confirms.
    /// The position is clamped to the song length; no-op without a song.
    pub fn seek(&mut self, position: Duration) {
        let Some(duration) = self.current.as_ref().map(Song::duration) else {
            debug!("seek ignored: no current song");
            return;
        };

        let position = position.min(duration);
        self.elapsed = position;
        self.send(|bridge| bridge.seek(position));
        self.emit_position_update();
    }

    /// Seek by fraction of the song (progress bar), clamped to 0.0-1.0
    pub fn seek_to_percent(&mut self, percent: f32) {
        let Some(duration) = self.current.as_ref().map(Song::duration) else {
            debug!("seek ignored: no current song");
            return;
        };

        if !percent.is_finite() {
            return;
        }
        self.seek(duration.mul_f32(percent.clamp(0.0, 1.0)));
    }

    // ===== Volume =====

    /// Set volume (0.0-1.0)
    pub fn set_volume(&mut self, level: f32) {
        if !self.volume.set_level(level) {
            debug!("set_volume ignored: {} is not a finite level", level);
            return;
        }
        self.apply_volume();
    }

    /// Volume button: mute, unmute, or restore from zero
    pub fn toggle_mute(&mut self) {
        self.volume.toggle_mute();
        self.apply_volume();
    }

    // ===== Bridge Events =====

    /// React to a notification from the audio bridge
    pub fn handle_bridge_event(&mut self, event: BridgeEvent) {
        match event {
            BridgeEvent::TimeAdvanced(position) => {
                let Some(duration) = self.current.as_ref().map(Song::duration) else {
                    return;
                };
                self.elapsed = position.min(duration);
                self.emit_position_update();
            }
            BridgeEvent::Ended => self.play_next(),
            BridgeEvent::Error(reason) => {
                self.record_failure(reason);
                if self.load_failure_policy == LoadFailurePolicy::SkipToNext {
                    self.play_next();
                }
            }
        }
    }

    // ===== State Queries =====

    /// Get current session state
    pub fn state(&self) -> SessionState {
        match (&self.current, self.playing) {
            (None, _) => SessionState::Empty,
            (Some(_), true) => SessionState::Playing,
            (Some(_), false) if self.elapsed.is_zero() => SessionState::Loaded,
            (Some(_), false) => SessionState::Paused,
        }
    }

    /// Get current song
    pub fn current_song(&self) -> Option<&Song> {
        self.current.as_ref()
    }

    /// Transport flag (intended state; the bridge may still be buffering)
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn is_radio_mode(&self) -> bool {
        self.radio_mode
    }

    /// Elapsed time in the current song
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Elapsed fraction of the current song (0.0 without a song)
    pub fn progress(&self) -> f32 {
        match self.current.as_ref().map(Song::duration) {
            Some(duration) if !duration.is_zero() => {
                (self.elapsed.as_secs_f32() / duration.as_secs_f32()).min(1.0)
            }
            _ => 0.0,
        }
    }

    /// Manual queue in play order
    pub fn queue(&self) -> &[Song] {
        self.queue.songs()
    }

    /// Volume level (0.0-1.0), independent of mute
    pub fn volume(&self) -> f32 {
        self.volume.level()
    }

    pub fn is_muted(&self) -> bool {
        self.volume.is_muted()
    }

    pub fn radio(&self) -> &RadioScheduler {
        &self.radio
    }

    /// Most recent failure reported by the bridge
    pub fn last_error(&self) -> Option<&LoadFailure> {
        self.last_error.as_ref()
    }

    pub fn load_failure_policy(&self) -> LoadFailurePolicy {
        self.load_failure_policy
    }

    pub fn set_load_failure_policy(&mut self, policy: LoadFailurePolicy) {
        self.load_failure_policy = policy;
    }

    /// Capture the observable state
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            state: self.state(),
            current_song_id: self.current.as_ref().map(|s| s.id.clone()),
            queue: self.queue.songs().iter().map(|s| s.id.clone()).collect(),
            is_playing: self.playing,
            radio_mode: self.radio_mode,
            elapsed: self.elapsed,
            volume: self.volume.level(),
            is_muted: self.volume.is_muted(),
            radio_cursor: self.radio.cursor(),
        }
    }

    // ===== Events =====

    /// Drain all pending events
    ///
    /// Returns all events emitted since the last drain, oldest first.
    pub fn drain_events(&mut self) -> Vec<SessionEvent> {
        std::mem::take(&mut self.pending_events)
    }

    /// Check if there are pending events
    pub fn has_pending_events(&self) -> bool {
        !self.pending_events.is_empty()
    }

    // ===== Internals =====

    /// Make `song` current: reset elapsed, load it, and play if the transport is on
    ///
    /// The new load supersedes any load still in flight on the bridge.
    fn change_song(&mut self, song: Song) {
        info!("Now playing: {} - {}", song.artist, song.title);

        let previous_song_id = self.current.as_ref().map(|s| s.id.clone());
        let song_id = song.id.clone();
        let source = song.src.clone();

        self.current = Some(song);
        self.elapsed = Duration::ZERO;

        self.send(|bridge| bridge.load(&source));
        if self.playing {
            self.send(|bridge| bridge.play());
        }

        self.pending_events.push(SessionEvent::SongChanged {
            song_id,
            previous_song_id,
        });
    }

    /// Rewind the current song to zero
    fn restart_current(&mut self) {
        self.elapsed = Duration::ZERO;
        if self.current.is_some() {
            self.send(|bridge| bridge.seek(Duration::ZERO));
            self.emit_position_update();
        }
    }

    fn set_playing(&mut self, playing: bool) {
        if self.playing == playing {
            return;
        }

        self.playing = playing;
        if playing {
            self.send(|bridge| bridge.play());
        } else {
            self.send(|bridge| bridge.pause());
        }
        self.emit_state_changed();
    }

    fn apply_volume(&mut self) {
        let gain = self.volume.gain();
        self.send(|bridge| bridge.set_volume(gain));
        self.pending_events.push(SessionEvent::VolumeChanged {
            level: self.volume.level(),
            is_muted: self.volume.is_muted(),
        });
    }

    /// Issue a directive; a rejected directive is recorded like a bridge error
    ///
    /// The skip policy is not applied here, so a bridge that rejects every
    /// load cannot spin the session through the whole radio pass.
    fn send(&mut self, directive: impl FnOnce(&mut dyn AudioBridge) -> Result<()>) {
        if let Err(err) = directive(self.bridge.as_mut()) {
            let reason = match err {
                PlaybackError::Bridge(reason) => reason,
                other => other.to_string(),
            };
            self.record_failure(reason);
        }
    }

    fn record_failure(&mut self, reason: String) {
        let song_id = self.current.as_ref().map(|s| s.id.clone());
        warn!(
            "Audio bridge failure on {}: {}",
            song_id.as_ref().map_or("<none>", SongId::as_str),
            reason
        );

        self.pending_events.push(SessionEvent::Error {
            song_id: song_id.clone(),
            message: reason.clone(),
        });
        self.last_error = Some(LoadFailure { song_id, reason });
    }

    fn emit_state_changed(&mut self) {
        self.pending_events.push(SessionEvent::StateChanged {
            state: self.state(),
        });
    }

    fn emit_queue_changed(&mut self) {
        self.pending_events.push(SessionEvent::QueueChanged {
            length: self.queue.len(),
        });
    }

    fn emit_position_update(&mut self) {
        if let Some(ref song) = self.current {
            self.pending_events.push(SessionEvent::PositionUpdate {
                elapsed_ms: self.elapsed.as_millis() as u64,
                duration_ms: song.duration().as_millis() as u64,
            });
        }
    }
}
