// SPDX-License-Identifier: MPL-2.0
//! Iced subscription for video playback events.
//!
//! The subscription owns the player session: it creates the player when it
//! starts, hands the command handle to the UI, then forwards every player
//! event. When the UI stops asking for the subscription, iced drops the
//! stream together with the session's receiver, and the decoder thread exits
//! as soon as its next send fails.

use crate::application::port::{PlaybackEngine, PlayerHandle};
use crate::domain::library::SourceUri;
use crate::domain::video::PlayerEvent;
use iced::futures::{Sink, SinkExt};
use iced::stream;
use std::sync::Arc;

/// Capacity of the subscription's output channel.
const OUTPUT_CAPACITY: usize = 16;

/// Subscription ID for video playback.
/// Each playback session gets a unique ID so a new selection restarts it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlaybackSessionId(u64);

/// Messages emitted by the video playback subscription.
#[derive(Debug, Clone)]
pub enum PlaybackMessage {
    /// The player exists; use the handle for play/pause/seek.
    Ready(PlayerHandle),

    /// Something happened in the player.
    Event(PlayerEvent),
}

/// Creates a video playback subscription for `source`.
///
/// `session_id` identifies the playback session; changing it restarts the
/// player even for the same source.
pub fn video_playback(
    engine: Arc<dyn PlaybackEngine>,
    source: SourceUri,
    session_id: u64,
) -> iced::Subscription<PlaybackMessage> {
    iced::Subscription::run_with(
        SessionData {
            id: PlaybackSessionId(session_id),
            engine,
            source,
        },
        |data| {
            let engine = Arc::clone(&data.engine);
            let source = data.source.clone();
            stream::channel(OUTPUT_CAPACITY, move |mut output| async move {
                run_session(engine.as_ref(), &source, &mut output).await;

                // Keep subscription alive but idle
                std::future::pending::<()>().await;
            })
        },
    )
}

/// Subscription data; its identity is the session ID alone.
struct SessionData {
    id: PlaybackSessionId,
    engine: Arc<dyn PlaybackEngine>,
    source: SourceUri,
}

impl std::hash::Hash for SessionData {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// Creates the player and forwards its events to `output` until either side
/// goes away.
async fn run_session<S>(engine: &dyn PlaybackEngine, source: &SourceUri, output: &mut S)
where
    S: Sink<PlaybackMessage> + Unpin,
{
    let mut session = match engine.create_player(source) {
        Ok(session) => session,
        Err(error) => {
            tracing::warn!(%source, %error, "cannot create player");
            let _ = output
                .send(PlaybackMessage::Event(PlayerEvent::Error(error)))
                .await;
            return;
        }
    };

    tracing::debug!(%source, "player session started");

    if output
        .send(PlaybackMessage::Ready(session.handle.clone()))
        .await
        .is_err()
    {
        return;
    }

    while let Some(event) = session.events.recv().await {
        if output.send(PlaybackMessage::Event(event)).await.is_err() {
            break;
        }
    }

    tracing::debug!(%source, "player session ended");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::port::PlayerSession;
    use crate::domain::error::VideoError;
    use crate::domain::video::{PlayerCommand, RawFrame};
    use iced::futures::channel::mpsc;
    use iced::futures::StreamExt;

    /// Engine whose players emit a fixed script of events.
    struct ScriptedEngine;

    impl PlaybackEngine for ScriptedEngine {
        fn create_player(&self, _source: &SourceUri) -> Result<PlayerSession, VideoError> {
            let (command_tx, _command_rx) = tokio::sync::mpsc::unbounded_channel();
            let (event_tx, events) = tokio::sync::mpsc::channel(4);
            event_tx
                .try_send(PlayerEvent::Opened {
                    duration_secs: Some(3.0),
                })
                .unwrap();
            event_tx
                .try_send(PlayerEvent::Frame(RawFrame::from_rgba(1, 1, vec![0; 4], 0.0)))
                .unwrap();
            event_tx.try_send(PlayerEvent::EndOfStream).unwrap();
            Ok(PlayerSession {
                handle: PlayerHandle::new(command_tx),
                events,
            })
        }
    }

    struct BrokenEngine;

    impl PlaybackEngine for BrokenEngine {
        fn create_player(&self, _source: &SourceUri) -> Result<PlayerSession, VideoError> {
            Err(VideoError::NoVideoStream)
        }
    }

    #[tokio::test]
    async fn session_sends_handle_then_events() {
        let (mut tx, rx) = mpsc::channel(16);
        run_session(&ScriptedEngine, &SourceUri::new("a.mp4"), &mut tx).await;
        drop(tx);

        let messages: Vec<_> = rx.collect().await;
        assert_eq!(messages.len(), 4);
        assert!(matches!(messages[0], PlaybackMessage::Ready(_)));
        assert!(matches!(
            messages[1],
            PlaybackMessage::Event(PlayerEvent::Opened { .. })
        ));
        assert!(matches!(
            messages[2],
            PlaybackMessage::Event(PlayerEvent::Frame(_))
        ));
        assert!(matches!(
            messages[3],
            PlaybackMessage::Event(PlayerEvent::EndOfStream)
        ));
    }

    #[tokio::test]
    async fn creation_failure_is_forwarded_as_error_event() {
        let (mut tx, rx) = mpsc::channel(16);
        run_session(&BrokenEngine, &SourceUri::new("a.mp4"), &mut tx).await;
        drop(tx);

        let messages: Vec<_> = rx.collect().await;
        assert_eq!(messages.len(), 1);
        assert!(matches!(
            &messages[0],
            PlaybackMessage::Event(PlayerEvent::Error(VideoError::NoVideoStream))
        ));
    }

    #[test]
    fn ready_handle_still_reaches_its_player() {
        let (command_tx, mut command_rx) = tokio::sync::mpsc::unbounded_channel();
        let message = PlaybackMessage::Ready(PlayerHandle::new(command_tx));
        if let PlaybackMessage::Ready(handle) = message.clone() {
            handle.play().unwrap();
        }
        assert_eq!(command_rx.try_recv().unwrap(), PlayerCommand::Play);
    }

    #[test]
    fn subscription_id_is_consistent() {
        assert_eq!(PlaybackSessionId(42), PlaybackSessionId(42));
        assert_ne!(PlaybackSessionId(42), PlaybackSessionId(43));
    }
}
