//! Audio rendering bridge
//!
//! The session never decodes audio. It issues directives to whatever device or
//! API renders sound (an HTML audio element, a native player, a test double)
//! and reacts to the events that device reports back.

use crate::error::Result;
use std::time::Duration;

/// Platform audio renderer
///
/// Directives are fire-and-forget: the session records a returned error as a
/// load failure but never retries. Loading a new source supersedes any load
/// still in flight, so implementors must drop stale loads for a replaced source.
#[cfg_attr(test, mockall::automock)]
pub trait AudioBridge: Send {
    /// Load a media locator, replacing the current source
    fn load(&mut self, source: &str) -> Result<()>;

    /// Start or resume output
    fn play(&mut self) -> Result<()>;

    /// Pause output, keeping position
    fn pause(&mut self) -> Result<()>;

    /// Jump to a position in the current source
    fn seek(&mut self, position: Duration) -> Result<()>;

    /// Set output volume (0.0-1.0)
    fn set_volume(&mut self, volume: f32) -> Result<()>;
}

/// Notifications from the audio bridge, delivered in the order they occur
#[derive(Debug, Clone, PartialEq)]
pub enum BridgeEvent {
    /// Playback position advanced
    TimeAdvanced(Duration),

    /// Current source played to the end
    Ended,

    /// Loading or decoding failed
    Error(String),
}
