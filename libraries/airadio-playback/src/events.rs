//! Session Events
//!
//! Change notifications for UI synchronization. The session queues an event
//! for every observable change; the UI drains them after each command or
//! bridge event and re-renders.

use crate::types::SessionState;
use airadio_core::SongId;
use serde::{Deserialize, Serialize};

/// Events emitted by the playback session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SessionEvent {
    /// Transport state changed (playing, paused, ...)
    StateChanged {
        /// The new session state
        state: SessionState,
    },

    /// Current song changed
    SongChanged {
        /// ID of the new (current) song
        song_id: SongId,
        /// ID of the song it replaced (if any)
        previous_song_id: Option<SongId>,
    },

    /// Manual queue changed (songs added/removed/replaced)
    QueueChanged {
        /// New queue length
        length: usize,
    },

    /// Radio mode toggled
    RadioModeChanged { enabled: bool },

    /// Volume changed
    VolumeChanged {
        /// New volume level (0.0-1.0)
        level: f32,
        /// Whether audio is muted
        is_muted: bool,
    },

    /// Elapsed time changed (bridge tick, seek or restart)
    PositionUpdate { elapsed_ms: u64, duration_ms: u64 },

    /// The audio bridge reported a failure
    Error {
        song_id: Option<SongId>,
        message: String,
    },
}
