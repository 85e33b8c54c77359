// SPDX-License-Identifier: MPL-2.0
//! Video decoder thread.
//!
//! Each player session runs [`decoder_loop`] on a Tokio blocking thread.
//! Commands arrive on an unbounded channel so the UI never blocks; events
//! leave on a bounded channel so a slow UI applies backpressure to decoding.

use super::{extract_rgba_data, open_video};
use crate::application::port::{PlayerHandle, PlayerSession};
use crate::domain::error::VideoError;
use crate::domain::video::{PlayerCommand, PlayerEvent, RawFrame};
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

/// Capacity of the event channel, in events.
const EVENT_CAPACITY: usize = 2;

/// Idle sleep while paused.
const IDLE_POLL: Duration = Duration::from_millis(10);

/// Frames this far before a seek target are still shown.
const SEEK_TOLERANCE_SECS: f64 = 0.04;

/// Spawns a decoder thread for `path` and returns its session.
///
/// The player starts paused and shows its first frame. Open failures are
/// reported as a [`PlayerEvent::Error`] on the session.
///
/// Must be called from within a Tokio runtime.
pub fn spawn(path: PathBuf) -> PlayerSession {
    let (command_tx, command_rx) = mpsc::unbounded_channel();
    let (event_tx, event_rx) = mpsc::channel(EVENT_CAPACITY);

    tokio::task::spawn_blocking(move || {
        if let Err(error) = decoder_loop(&path, command_rx, &event_tx) {
            tracing::warn!(path = %path.display(), %error, "decoder stopped");
            let _ = event_tx.blocking_send(PlayerEvent::Error(error));
        }
    });

    PlayerSession {
        handle: PlayerHandle::new(command_tx),
        events: event_rx,
    }
}

/// Wall-clock pacing anchored at the first frame shown after (re)starting.
#[derive(Debug, Default)]
struct Pacing {
    anchor: Option<(Instant, f64)>,
}

impl Pacing {
    fn reset(&mut self) {
        self.anchor = None;
    }

    /// Sleeps until the frame with `pts_secs` is due.
    fn wait_for(&mut self, pts_secs: f64) {
        let (start, first_pts) = *self.anchor.get_or_insert((Instant::now(), pts_secs));
        let delay = (pts_secs - first_pts).max(0.0);
        let target = start + Duration::from_secs_f64(delay);
        let now = Instant::now();
        if target > now {
            std::thread::sleep(target - now);
        }
    }
}

fn decoder_loop(
    path: &std::path::Path,
    mut command_rx: mpsc::UnboundedReceiver<PlayerCommand>,
    event_tx: &mpsc::Sender<PlayerEvent>,
) -> Result<(), VideoError> {
    let (mut ictx, mut decoder, video_stream_index) = open_video(path)?;

    let width = decoder.width();
    let height = decoder.height();

    let mut scaler = ffmpeg_next::software::scaling::Context::get(
        decoder.format(),
        width,
        height,
        ffmpeg_next::format::Pixel::RGBA,
        width,
        height,
        ffmpeg_next::software::scaling::Flags::BILINEAR,
    )
    .map_err(|e| VideoError::Other(format!("Failed to create scaler: {e}")))?;

    let time_base = ictx
        .stream(video_stream_index)
        .map(|s| s.time_base())
        .ok_or(VideoError::NoVideoStream)?;
    let time_base_f64 = f64::from(time_base.numerator()) / f64::from(time_base.denominator());

    #[allow(clippy::cast_precision_loss)]
    let duration_secs = (ictx.duration() > 0)
        .then(|| ictx.duration() as f64 / f64::from(ffmpeg_next::ffi::AV_TIME_BASE));

    if event_tx
        .blocking_send(PlayerEvent::Opened { duration_secs })
        .is_err()
    {
        return Ok(());
    }

    let mut is_playing = false;
    let mut pacing = Pacing::default();
    // Show the first frame while paused.
    let mut decode_single_frame = true;
    let mut seek_target: Option<f64> = None;
    // Set once every packet is read and the decoder has been sent EOF.
    let mut input_done = false;

    loop {
        match command_rx.try_recv() {
            Ok(PlayerCommand::Play) => {
                is_playing = true;
                pacing.reset();
            }
            Ok(PlayerCommand::Pause) => {
                is_playing = false;
                pacing.reset();
            }
            Ok(PlayerCommand::Seek { target_secs }) => {
                // AV_TIME_BASE is microseconds
                #[allow(clippy::cast_possible_truncation)]
                let timestamp = (target_secs * 1_000_000.0) as i64;
                // RangeTo lets FFmpeg land on the keyframe before the target
                match ictx.seek(timestamp, ..timestamp) {
                    Ok(()) => {
                        decoder.flush();
                        input_done = false;
                        pacing.reset();
                        seek_target = Some(target_secs);
                        if !is_playing {
                            decode_single_frame = true;
                        }
                    }
                    Err(e) => {
                        let error = VideoError::DecodingFailed(format!("Seek failed: {e}"));
                        if event_tx.blocking_send(PlayerEvent::Error(error)).is_err() {
                            break;
                        }
                    }
                }
            }
            Ok(PlayerCommand::Stop) | Err(mpsc::error::TryRecvError::Disconnected) => break,
            Err(mpsc::error::TryRecvError::Empty) => {}
        }

        if !is_playing && !decode_single_frame {
            std::thread::sleep(IDLE_POLL);
            continue;
        }

        let mut frame_decoded = false;
        let mut decoded_frame = ffmpeg_next::frame::Video::empty();

        while next_frame(
            &mut ictx,
            &mut decoder,
            video_stream_index,
            &mut input_done,
            &mut decoded_frame,
        ) {
            #[allow(clippy::cast_precision_loss)]
            let pts_secs = decoded_frame
                .timestamp()
                .map_or(0.0, |pts| pts as f64 * time_base_f64);

            // Skip frames between the keyframe and the seek target
            if let Some(target) = seek_target {
                if pts_secs + SEEK_TOLERANCE_SECS < target {
                    continue;
                }
                seek_target = None;
            }

            let mut rgb_frame = ffmpeg_next::frame::Video::empty();
            if let Err(e) = scaler.run(&decoded_frame, &mut rgb_frame) {
                tracing::debug!(error = %e, "frame scaling failed");
                continue;
            }

            if is_playing {
                pacing.wait_for(pts_secs);
            }

            let frame = RawFrame::from_rgba(width, height, extract_rgba_data(&rgb_frame), pts_secs);
            if event_tx.blocking_send(PlayerEvent::Frame(frame)).is_err() {
                return Ok(());
            }

            frame_decoded = true;
            decode_single_frame = false;
            break;
        }

        if !frame_decoded {
            if event_tx.blocking_send(PlayerEvent::EndOfStream).is_err() {
                break;
            }
            is_playing = false;
            decode_single_frame = false;
            seek_target = None;
            pacing.reset();
        }
    }

    Ok(())
}

/// Pulls the next decoded frame into `frame`, feeding video packets as needed.
///
/// At end of input the decoder is flushed so frames it still holds are
/// returned too. Returns `false` once the decoder is fully drained.
fn next_frame(
    ictx: &mut ffmpeg_next::format::context::Input,
    decoder: &mut ffmpeg_next::decoder::Video,
    video_stream_index: usize,
    input_done: &mut bool,
    frame: &mut ffmpeg_next::frame::Video,
) -> bool {
    loop {
        if decoder.receive_frame(frame).is_ok() {
            return true;
        }
        if *input_done {
            return false;
        }

        let packet = ictx
            .packets()
            .find(|(stream, _)| stream.index() == video_stream_index)
            .map(|(_, packet)| packet);

        match packet {
            Some(packet) => {
                if let Err(e) = decoder.send_packet(&packet) {
                    tracing::debug!(error = %e, "packet rejected by decoder");
                }
            }
            None => {
                *input_done = true;
                if let Err(e) = decoder.send_eof() {
                    tracing::debug!(error = %e, "decoder flush failed");
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn open_failure_is_reported_as_event() {
        let temp_dir = tempfile::tempdir().unwrap();
        let video_path = temp_dir.path().join("test.mp4");
        std::fs::write(&video_path, b"fake video data").unwrap();

        let mut session = spawn(video_path);
        let event = tokio::time::timeout(Duration::from_secs(5), session.events.recv())
            .await
            .expect("timeout waiting for decoder event");

        assert!(matches!(event, Some(PlayerEvent::Error(_))));
    }

    #[tokio::test]
    async fn missing_file_is_reported_as_event() {
        let mut session = spawn(PathBuf::from("/nonexistent/video.mp4"));
        let event = tokio::time::timeout(Duration::from_secs(5), session.events.recv())
            .await
            .expect("timeout waiting for decoder event");

        assert!(matches!(event, Some(PlayerEvent::Error(_))));
    }

    #[tokio::test]
    #[ignore = "requires tests/data/sample.mp4"]
    async fn sample_video_opens_then_shows_first_frame() {
        let video_path = PathBuf::from("tests/data/sample.mp4");
        let mut session = spawn(video_path);
        let first = tokio::time::timeout(Duration::from_secs(5), session.events.recv()).await;
        assert!(matches!(first, Ok(Some(PlayerEvent::Opened { .. }))));

        let second = tokio::time::timeout(Duration::from_secs(5), session.events.recv()).await;
        assert!(matches!(second, Ok(Some(PlayerEvent::Frame(_)))));

        session.handle.stop().unwrap();
    }

    #[tokio::test]
    #[ignore = "requires tests/data/sample.mp4"]
    async fn playing_to_the_end_emits_every_frame_before_end_of_stream() {
        let video_path = PathBuf::from("tests/data/sample.mp4");
        let expected = {
            let (ictx, _, index) = open_video(&video_path).unwrap();
            ictx.stream(index).unwrap().frames()
        };
        assert!(expected > 0, "fixture must declare its frame count");

        let mut session = spawn(video_path);
        session.handle.play().unwrap();

        let mut frames = 0_i64;
        loop {
            let event = tokio::time::timeout(Duration::from_secs(30), session.events.recv())
                .await
                .expect("timeout waiting for decoder event");
            match event {
                Some(PlayerEvent::Opened { .. }) => {}
                Some(PlayerEvent::Frame(_)) => frames += 1,
                Some(PlayerEvent::EndOfStream) => break,
                other => panic!("unexpected event: {other:?}"),
            }
        }

        assert_eq!(frames, expected);
        session.handle.stop().unwrap();
    }

    #[test]
    fn pacing_does_not_wait_for_first_frame() {
        let mut pacing = Pacing::default();
        let started = Instant::now();
        pacing.wait_for(42.0);
        assert!(started.elapsed() < Duration::from_millis(50));
    }
}
