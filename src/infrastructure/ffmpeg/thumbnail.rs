// SPDX-License-Identifier: MPL-2.0
//! First-frame thumbnail extraction.

use super::{extract_rgba_data, open_video, source_path};
use crate::application::port::ThumbnailExtractor;
use crate::domain::error::VideoError;
use crate::domain::library::SourceUri;
use crate::domain::video::RawFrame;

/// Decodes the first video frame and scales it down to the requested width.
#[derive(Debug, Default, Clone, Copy)]
pub struct FfmpegThumbnailer;

impl FfmpegThumbnailer {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

/// Scales `(width, height)` so the width does not exceed `max_width`.
/// Dimensions are kept even for the scaler and never drop below 2.
fn fit_width(width: u32, height: u32, max_width: u32) -> (u32, u32) {
    if max_width == 0 || width <= max_width {
        return (width, height);
    }
    let scaled_height = u64::from(height) * u64::from(max_width) / u64::from(width);
    let even = |v: u64| (u32::try_from(v).unwrap_or(u32::MAX) & !1).max(2);
    (even(u64::from(max_width)), even(scaled_height))
}

impl ThumbnailExtractor for FfmpegThumbnailer {
    fn extract(&self, source: &SourceUri, max_width: u32) -> Result<RawFrame, VideoError> {
        let path = source_path(source);
        let (mut ictx, mut decoder, video_stream_index) = open_video(&path)?;

        let (target_width, target_height) = fit_width(decoder.width(), decoder.height(), max_width);
        let mut scaler = ffmpeg_next::software::scaling::Context::get(
            decoder.format(),
            decoder.width(),
            decoder.height(),
            ffmpeg_next::format::Pixel::RGBA,
            target_width,
            target_height,
            ffmpeg_next::software::scaling::Flags::BILINEAR,
        )
        .map_err(|e| VideoError::Other(format!("Failed to create scaler: {e}")))?;

        let mut rgb_frame = ffmpeg_next::frame::Video::empty();
        let mut decoded = ffmpeg_next::frame::Video::empty();
        let mut got_frame = false;

        for (stream, packet) in ictx.packets() {
            if stream.index() != video_stream_index {
                continue;
            }
            decoder
                .send_packet(&packet)
                .map_err(|e| VideoError::DecodingFailed(format!("Failed to send packet: {e}")))?;

            if decoder.receive_frame(&mut decoded).is_ok() {
                scaler
                    .run(&decoded, &mut rgb_frame)
                    .map_err(|e| VideoError::DecodingFailed(format!("Failed to scale frame: {e}")))?;
                got_frame = true;
                break;
            }
        }

        if !got_frame {
            // Short clips can keep their only frame in the decoder until EOF.
            decoder
                .send_eof()
                .map_err(|e| VideoError::DecodingFailed(format!("Failed to flush decoder: {e}")))?;
            if decoder.receive_frame(&mut decoded).is_ok() {
                scaler
                    .run(&decoded, &mut rgb_frame)
                    .map_err(|e| VideoError::DecodingFailed(format!("Failed to scale frame: {e}")))?;
                got_frame = true;
            }
        }

        if !got_frame {
            return Err(VideoError::CorruptedFile);
        }

        let rgba_bytes = extract_rgba_data(&rgb_frame);
        Ok(RawFrame::from_rgba(
            rgb_frame.width(),
            rgb_frame.height(),
            rgba_bytes,
            0.0,
        ))
    }
}
