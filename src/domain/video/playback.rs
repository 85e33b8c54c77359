// SPDX-License-Identifier: MPL-2.0
//! Video playback state machine.
//!
//! This module defines the playback states of the player surface.

/// Represents the current playback state of a video.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackState {
    /// Player session is being created; no frame yet.
    #[default]
    Opening,
    /// Video is currently playing.
    Playing,
    /// Video is paused at current position.
    Paused,
    /// Playback reached the end of the stream.
    Ended,
    /// The player reported an error; playback cannot continue.
    Failed,
}

impl PlaybackState {
    /// Returns true if the video is currently playing.
    #[must_use]
    pub fn is_playing(self) -> bool {
        matches!(self, Self::Playing)
    }

    /// Returns true if play/pause controls make sense in this state.
    #[must_use]
    pub fn accepts_controls(self) -> bool {
        matches!(self, Self::Playing | Self::Paused | Self::Ended)
    }

    /// State reached by pressing the play/pause toggle.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Playing => Self::Paused,
            Self::Paused | Self::Ended => Self::Playing,
            other => other,
        }
    }
}
