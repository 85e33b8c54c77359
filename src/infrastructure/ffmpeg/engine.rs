// SPDX-License-Identifier: MPL-2.0
//! [`PlaybackEngine`] backed by the `FFmpeg` decoder thread.

use super::{decoder, source_path};
use crate::application::port::{PlaybackEngine, PlayerSession};
use crate::domain::error::VideoError;
use crate::domain::library::SourceUri;

/// Creates one decoder thread per player.
#[derive(Debug, Default, Clone, Copy)]
pub struct FfmpegEngine;

impl FfmpegEngine {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl PlaybackEngine for FfmpegEngine {
    fn create_player(&self, source: &SourceUri) -> Result<PlayerSession, VideoError> {
        let path = source_path(source);
        if !path.exists() {
            return Err(VideoError::IoError(format!(
                "Video file not found: {}",
                path.display()
            )));
        }
        Ok(decoder::spawn(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_source_is_rejected_up_front() {
        let result = FfmpegEngine::new().create_player(&SourceUri::new("/nonexistent/video.mp4"));
        assert!(matches!(result, Err(VideoError::IoError(_))));
    }

    #[tokio::test]
    async fn existing_source_yields_a_session() {
        let temp_dir = tempfile::tempdir().unwrap();
        let video_path = temp_dir.path().join("test.mp4");
        std::fs::write(&video_path, b"fake video data").unwrap();

        let mut session = FfmpegEngine::new()
            .create_player(&SourceUri::new(video_path.to_string_lossy()))
            .unwrap();
        let event = tokio::time::timeout(std::time::Duration::from_secs(5), session.events.recv())
            .await
            .expect("timeout waiting for decoder event");
        assert!(matches!(
            event,
            Some(crate::domain::video::PlayerEvent::Error(_))
        ));
    }
}
