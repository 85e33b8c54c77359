// SPDX-License-Identifier: MPL-2.0
//! `FFmpeg` adapters.
//!
//! - [`FfmpegEngine`]: implements [`PlaybackEngine`] with a decoder thread per
//!   session (see [`decoder`])
//! - [`FfmpegThumbnailer`]: implements [`ThumbnailExtractor`] by decoding
//!   the first frame
//! - [`probe_duration`]: container-level duration lookup used when listing
//!
//! `FFmpeg` contexts are not `Send`; every adapter opens its own input on
//! the thread that uses it.
//!
//! [`PlaybackEngine`]: crate::application::port::PlaybackEngine
//! [`ThumbnailExtractor`]: crate::application::port::ThumbnailExtractor

pub mod decoder;
mod engine;
mod thumbnail;

pub use engine::FfmpegEngine;
pub use thumbnail::FfmpegThumbnailer;

use crate::domain::error::VideoError;
use crate::domain::library::SourceUri;
use std::path::{Path, PathBuf};
use std::sync::Once;

/// Static flag to ensure `FFmpeg` is initialized only once.
static FFMPEG_INIT: Once = Once::new();

/// Initializes `FFmpeg` and lowers its log level to errors only.
///
/// Safe to call multiple times; only the first call does any work.
///
/// # Errors
///
/// Returns [`VideoError::Other`] if `FFmpeg` fails to initialize.
pub fn init_ffmpeg() -> Result<(), VideoError> {
    let mut init_result = Ok(());

    FFMPEG_INIT.call_once(|| {
        if let Err(e) = ffmpeg_next::init() {
            init_result = Err(VideoError::Other(format!(
                "FFmpeg initialization failed: {e}"
            )));
            return;
        }

        // SAFETY: av_log_set_level is thread-safe and only affects logging
        unsafe {
            ffmpeg_next::ffi::av_log_set_level(ffmpeg_next::ffi::AV_LOG_ERROR);
        }
    });

    init_result
}

/// Resolves a source locator to a filesystem path.
///
/// Accepts plain paths and `file://` URIs.
#[must_use]
pub fn source_path(source: &SourceUri) -> PathBuf {
    let raw = source.as_str();
    PathBuf::from(raw.strip_prefix("file://").unwrap_or(raw))
}

/// Reads the duration of a video from its container metadata.
///
/// Returns `None` when the file cannot be opened, has no video stream, or
/// reports no duration.
#[must_use]
pub fn probe_duration(path: &Path) -> Option<f64> {
    init_ffmpeg().ok()?;

    let ictx = match ffmpeg_next::format::input(&path) {
        Ok(ictx) => ictx,
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "cannot probe video");
            return None;
        }
    };

    let video_stream = ictx.streams().best(ffmpeg_next::media::Type::Video)?;

    #[allow(clippy::cast_precision_loss)]
    let duration_secs = if video_stream.duration() > 0 {
        let time_base = video_stream.time_base();
        video_stream.duration() as f64 * f64::from(time_base.numerator())
            / f64::from(time_base.denominator())
    } else if ictx.duration() > 0 {
        ictx.duration() as f64 / f64::from(ffmpeg_next::ffi::AV_TIME_BASE)
    } else {
        return None;
    };

    Some(duration_secs)
}

/// Opens `path` and builds a video decoder for its best video stream.
fn open_video(
    path: &Path,
) -> Result<
    (
        ffmpeg_next::format::context::Input,
        ffmpeg_next::decoder::Video,
        usize,
    ),
    VideoError,
> {
    init_ffmpeg()?;

    let ictx = ffmpeg_next::format::input(&path)
        .map_err(|e| VideoError::from_message(&format!("Failed to open video: {e}")))?;

    let input = ictx
        .streams()
        .best(ffmpeg_next::media::Type::Video)
        .ok_or(VideoError::NoVideoStream)?;
    let video_stream_index = input.index();

    let context_decoder = ffmpeg_next::codec::context::Context::from_parameters(input.parameters())
        .map_err(|e| VideoError::from_message(&format!("Failed to create codec context: {e}")))?;
    let decoder = context_decoder
        .decoder()
        .video()
        .map_err(|e| VideoError::from_message(&format!("Failed to create video decoder: {e}")))?;

    if decoder.width() == 0 || decoder.height() == 0 {
        return Err(VideoError::UnsupportedCodec(format!(
            "invalid dimensions {}x{}",
            decoder.width(),
            decoder.height()
        )));
    }

    Ok((ictx, decoder, video_stream_index))
}

/// Copies RGBA rows out of a scaled frame, dropping the stride padding.
#[allow(clippy::cast_possible_truncation)]
fn extract_rgba_data(frame: &ffmpeg_next::frame::Video) -> Vec<u8> {
    let width = frame.width();
    let height = frame.height();
    let data = frame.data(0);
    let stride = frame.stride(0);

    let mut rgba_bytes = Vec::with_capacity((width * height * 4) as usize);
    for y in 0..height {
        let row_start = (y * stride as u32) as usize;
        let row_end = row_start + (width * 4) as usize;
        rgba_bytes.extend_from_slice(&data[row_start..row_end]);
    }

    rgba_bytes
}
