//! Volume control
//!
//! Linear 0.0-1.0 level handed to the audio bridge, with a mute that keeps the
//! level so unmuting restores it.

use crate::types::DEFAULT_VOLUME;

/// Volume controller
#[derive(Debug, Clone)]
pub struct Volume {
    /// Volume level (0.0-1.0)
    level: f32,

    /// Mute state (preserves volume level)
    muted: bool,
}

impl Volume {
    /// Create new volume controller
    ///
    /// Out-of-range levels are clamped; non-finite levels fall back to the default.
    pub fn new(level: f32) -> Self {
        Self {
            level: Self::sanitize(level).unwrap_or(DEFAULT_VOLUME),
            muted: false,
        }
    }

    /// Set volume level (0.0-1.0)
    ///
    /// Moving the slider also unmutes. Returns false for non-finite input.
    pub fn set_level(&mut self, level: f32) -> bool {
        match Self::sanitize(level) {
            Some(level) => {
                self.level = level;
                self.muted = false;
                true
            }
            None => false,
        }
    }

    /// Get current volume level (0.0-1.0)
    pub fn level(&self) -> f32 {
        self.level
    }

    /// Mute audio (preserves volume level)
    pub fn mute(&mut self) {
        self.muted = true;
    }

    /// Unmute audio (restores previous volume)
    pub fn unmute(&mut self) {
        self.muted = false;
    }

    /// Toggle mute state
    ///
    /// A slider dragged all the way down counts as muted: toggling restores
    /// the default level.
    pub fn toggle_mute(&mut self) {
        if self.muted {
            self.unmute();
        } else if self.level == 0.0 {
            self.level = DEFAULT_VOLUME;
        } else {
            self.mute();
        }
    }

    /// Check if muted
    pub fn is_muted(&self) -> bool {
        self.muted
    }

    /// Level sent to the audio bridge
    ///
    /// Returns 0.0 if muted
    pub fn gain(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.level
        }
    }

    fn sanitize(level: f32) -> Option<f32> {
        level.is_finite().then(|| level.clamp(0.0, 1.0))
    }
}

impl Default for Volume {
    fn default() -> Self {
        Self::new(DEFAULT_VOLUME)
    }
}
