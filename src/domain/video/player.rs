// SPDX-License-Identifier: MPL-2.0
//! Commands accepted and events emitted by a player session.

use super::RawFrame;
use crate::domain::error::VideoError;

/// Commands sent from the UI to a running player.
#[derive(Debug, Clone, PartialEq)]
pub enum PlayerCommand {
    /// Start or resume playback.
    Play,

    /// Pause playback, keeping the current position.
    Pause,

    /// Seek to a timestamp (seconds). Playing players keep playing.
    Seek { target_secs: f64 },

    /// Stop decoding and release the media.
    Stop,
}

/// Events emitted by a running player.
#[derive(Debug, Clone)]
pub enum PlayerEvent {
    /// Media opened; the duration is known when the container reports it.
    Opened { duration_secs: Option<f64> },

    /// A new frame is ready for display.
    Frame(RawFrame),

    /// Playback reached the end of the video.
    EndOfStream,

    /// An error occurred while opening or decoding.
    Error(VideoError),
}
