// SPDX-License-Identifier: MPL-2.0
//! Playback engine port definition.
//!
//! This module defines the [`PlaybackEngine`] trait and the session types it
//! hands out. A session is a pair of channels: commands flow to the player
//! through a cloneable [`PlayerHandle`], events flow back through a bounded
//! receiver.
//!
//! # Design Notes
//!
//! - The player runs on its own thread; the engine only wires channels
//! - Dropping every [`PlayerHandle`] closes the command channel, which the
//!   player treats like [`PlayerCommand::Stop`]
//! - Uses domain types only (`SourceUri`, `PlayerEvent`, `VideoError`)

use crate::domain::error::VideoError;
use crate::domain::library::SourceUri;
use crate::domain::video::{PlayerCommand, PlayerEvent};
use tokio::sync::mpsc;

/// Port for creating players bound to a media source.
pub trait PlaybackEngine: Send + Sync {
    /// Creates a player for `source`. The player starts paused.
    ///
    /// Must be called from within a Tokio runtime.
    ///
    /// # Errors
    ///
    /// Returns a [`VideoError`] if the source cannot be opened at all.
    /// Decoding problems discovered later arrive as [`PlayerEvent::Error`].
    fn create_player(&self, source: &SourceUri) -> Result<PlayerSession, VideoError>;
}

/// A running player: a handle for commands and the stream of its events.
#[derive(Debug)]
pub struct PlayerSession {
    pub handle: PlayerHandle,
    pub events: mpsc::Receiver<PlayerEvent>,
}

/// Cloneable command side of a player session.
#[derive(Debug, Clone)]
pub struct PlayerHandle {
    commands: mpsc::UnboundedSender<PlayerCommand>,
}

impl PlayerHandle {
    #[must_use]
    pub fn new(commands: mpsc::UnboundedSender<PlayerCommand>) -> Self {
        Self { commands }
    }

    /// Starts or resumes playback.
    ///
    /// # Errors
    ///
    /// Returns [`VideoError::PlayerClosed`] if the player has exited.
    pub fn play(&self) -> Result<(), VideoError> {
        self.send(PlayerCommand::Play)
    }

    /// Pauses playback.
    ///
    /// # Errors
    ///
    /// Returns [`VideoError::PlayerClosed`] if the player has exited.
    pub fn pause(&self) -> Result<(), VideoError> {
        self.send(PlayerCommand::Pause)
    }

    /// Seeks to `target_secs`.
    ///
    /// # Errors
    ///
    /// Returns [`VideoError::PlayerClosed`] if the player has exited.
    pub fn seek(&self, target_secs: f64) -> Result<(), VideoError> {
        self.send(PlayerCommand::Seek {
            target_secs: target_secs.max(0.0),
        })
    }

    /// Asks the player to stop and release the media.
    ///
    /// # Errors
    ///
    /// Returns [`VideoError::PlayerClosed`] if the player has already exited.
    pub fn stop(&self) -> Result<(), VideoError> {
        self.send(PlayerCommand::Stop)
    }

    fn send(&self, command: PlayerCommand) -> Result<(), VideoError> {
        self.commands
            .send(command)
            .map_err(|_| VideoError::PlayerClosed)
    }
}
