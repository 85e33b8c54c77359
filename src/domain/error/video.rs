// SPDX-License-Identifier: MPL-2.0
//! Video playback errors.

use std::fmt;

/// Specific error types for video playback issues.
/// Used to provide user-friendly, localized error messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VideoError {
    /// Video codec is not supported by the system's FFmpeg
    UnsupportedCodec(String),

    /// File appears corrupted or has invalid data
    CorruptedFile,

    /// File exists but contains no video stream
    NoVideoStream,

    /// Decoding failed during playback
    DecodingFailed(String),

    /// I/O error (file not found, permission denied, etc.)
    IoError(String),

    /// The player session is gone (decoder thread exited or view unmounted)
    PlayerClosed,

    /// Generic error with raw message
    Other(String),
}

impl VideoError {
    /// Returns the i18n message key for this error type.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            VideoError::UnsupportedCodec(_) => "error-video-unsupported-codec",
            VideoError::CorruptedFile => "error-video-corrupted",
            VideoError::NoVideoStream => "error-video-no-video-stream",
            VideoError::DecodingFailed(_) => "error-video-decoding-failed",
            VideoError::IoError(_) => "error-video-io",
            VideoError::PlayerClosed => "error-video-player-closed",
            VideoError::Other(_) => "error-video-general",
        }
    }

    /// Attempts to parse a raw error message into a specific `VideoError` type.
    /// This is used to categorize errors from FFmpeg/decoder.
    #[must_use]
    pub fn from_message(msg: &str) -> Self {
        let msg_lower = msg.to_lowercase();

        // Codec/decoder errors first, they may also contain "not found"
        if msg_lower.contains("codec") || msg_lower.contains("decoder") {
            if let Some(codec) = Self::extract_codec_name(&msg_lower) {
                return VideoError::UnsupportedCodec(codec);
            } else if msg_lower.contains("not found") || msg_lower.contains("unsupported") {
                return VideoError::DecodingFailed(msg.to_string());
            }
        }

        if msg_lower.contains("no such file")
            || msg_lower.contains("not found")
            || msg_lower.contains("permission denied")
            || msg_lower.contains("i/o error")
        {
            return VideoError::IoError(msg.to_string());
        }

        if msg_lower.contains("no video stream")
            || msg_lower.contains("no video track")
            || msg_lower.contains("invalid data found")
        {
            return VideoError::NoVideoStream;
        }

        if msg_lower.contains("corrupt")
            || msg_lower.contains("invalid")
            || msg_lower.contains("malformed")
        {
            return VideoError::CorruptedFile;
        }

        if msg_lower.contains("packet")
            || msg_lower.contains("scaling")
            || msg_lower.contains("scaler")
            || msg_lower.contains("seek")
            || msg_lower.contains("decode")
        {
            return VideoError::DecodingFailed(msg.to_string());
        }

        VideoError::Other(msg.to_string())
    }

    /// Tries to extract a codec name from an error message.
    fn extract_codec_name(msg: &str) -> Option<String> {
        // Common patterns: "codec 'xyz' not found", "decoder xyz not found"
        let codecs = [
            "h264", "hevc", "h265", "vp8", "vp9", "av1", "mpeg4", "mpeg2",
        ];
        codecs
            .iter()
            .find(|codec| msg.contains(*codec))
            .map(|codec| codec.to_uppercase())
    }
}

impl fmt::Display for VideoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VideoError::UnsupportedCodec(codec) => {
                write!(f, "Unsupported video codec: {codec}")
            }
            VideoError::CorruptedFile => write!(f, "Video file is corrupted"),
            VideoError::NoVideoStream => write!(f, "No video stream found"),
            VideoError::DecodingFailed(msg) => write!(f, "Decoding failed: {msg}"),
            VideoError::IoError(msg) => write!(f, "I/O error: {msg}"),
            VideoError::PlayerClosed => write!(f, "Player session is closed"),
            VideoError::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for VideoError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_message_classifies_missing_file_as_io() {
        let err = VideoError::from_message("No such file or directory");
        assert!(matches!(err, VideoError::IoError(_)));
    }

    #[test]
    fn from_message_classifies_missing_stream() {
        let err = VideoError::from_message("No video stream found in file");
        assert_eq!(err, VideoError::NoVideoStream);
    }

    #[test]
    fn from_message_extracts_codec_name() {
        let err = VideoError::from_message("Decoder h264 not found");
        assert!(matches!(err, VideoError::UnsupportedCodec(codec) if codec == "H264"));
    }

    #[test]
    fn from_message_classifies_corruption() {
        let err = VideoError::from_message("File is corrupt or invalid");
        assert_eq!(err, VideoError::CorruptedFile);
    }

    #[test]
    fn from_message_classifies_packet_errors_as_decoding() {
        let err = VideoError::from_message("Packet send failed: error");
        assert!(matches!(err, VideoError::DecodingFailed(_)));
    }

    #[test]
    fn unknown_messages_fall_back_to_other() {
        let err = VideoError::from_message("something odd happened");
        assert_eq!(err, VideoError::Other("something odd happened".into()));
        assert_eq!(err.i18n_key(), "error-video-general");
    }

    #[test]
    fn display_includes_codec() {
        let err = VideoError::UnsupportedCodec("H264".to_string());
        assert!(err.to_string().contains("H264"));
    }
}
