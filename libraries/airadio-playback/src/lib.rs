//! AI-Radio - Playback Session
//!
//! Platform-agnostic playback orchestration for AI-Radio.
//!
//! This crate provides:
//! - Radio scheduling (shuffled passes with an ad slot after every third song)
//! - Manual queue (always played before radio)
//! - Transport control (play, pause, next, previous, seek)
//! - Volume with mute
//! - Playlist and single-song playback
//! - Load-failure reporting with a configurable policy
//!
//! # Architecture
//!
//! `airadio-playback` never touches audio itself. It issues directives through
//! the [`AudioBridge`] trait and reacts to [`BridgeEvent`]s; the UI drains
//! [`SessionEvent`]s after every command to re-render.
//!
//! # Example: Radio Session
//!
//! ```rust
//! use airadio_core::{Catalog, Song};
//! use airadio_playback::{AudioBridge, BridgeEvent, PlaybackSession, Result, SessionConfig};
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! struct Silent;
//!
//! impl AudioBridge for Silent {
//!     fn load(&mut self, _source: &str) -> Result<()> { Ok(()) }
//!     fn play(&mut self) -> Result<()> { Ok(()) }
//!     fn pause(&mut self) -> Result<()> { Ok(()) }
//!     fn seek(&mut self, _position: Duration) -> Result<()> { Ok(()) }
//!     fn set_volume(&mut self, _volume: f32) -> Result<()> { Ok(()) }
//! }
//!
//! let catalog = Arc::new(Catalog::new(vec![
//!     Song::new("1", "Let It Foam", "DJ FoamBot", "Parody/Pop", 200, "/music/1.mp3"),
//!     Song::new("2", "Big Bad Foam", "DJ FoamBot", "Hip-Hop", 170, "/music/2.mp3"),
//! ])?);
//!
//! let mut session = PlaybackSession::new(catalog, Box::new(Silent), SessionConfig::default())?;
//! session.start();
//! session.play();
//! session.handle_bridge_event(BridgeEvent::Ended);
//!
//! assert!(session.is_playing());
//! # Ok::<(), airadio_playback::PlaybackError>(())
//! ```

#![forbid(unsafe_code)]

pub mod bridge;
pub mod error;
pub mod events;
pub mod queue;
pub mod radio;
pub mod session;
pub mod types;
pub mod volume;

// Re-export main types
pub use bridge::{AudioBridge, BridgeEvent};
pub use error::{PlaybackError, Result};
pub use events::SessionEvent;
pub use queue::ManualQueue;
pub use radio::{interleave, RadioScheduler};
pub use session::PlaybackSession;
pub use types::{
    LoadFailure, LoadFailurePolicy, RadioConfig, SessionConfig, SessionSnapshot, SessionState,
    DEFAULT_AD_INTERVAL, DEFAULT_AD_SLOT_IDS, DEFAULT_VOLUME,
};
pub use volume::Volume;
