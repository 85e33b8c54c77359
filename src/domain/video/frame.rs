// SPDX-License-Identifier: MPL-2.0
//! Raw decoded pixel data.

use std::sync::Arc;

/// RGBA pixel data without presentation dependencies.
///
/// Used both for decoded video frames and for grid thumbnails. The
/// presentation layer converts it to an `iced::widget::image::Handle`.
///
/// # Example
///
/// ```
/// use reel_play::domain::video::RawFrame;
///
/// let frame = RawFrame::from_rgba(2, 2, vec![0u8; 16], 0.0);
/// assert_eq!(frame.width(), 2);
/// assert_eq!(frame.size_bytes(), 16);
/// ```
#[derive(Debug, Clone)]
pub struct RawFrame {
    width: u32,
    height: u32,
    rgba_bytes: Arc<Vec<u8>>,
    /// Presentation timestamp in seconds (0 for thumbnails).
    pts_secs: f64,
}

impl RawFrame {
    /// Creates a frame from shared RGBA data.
    ///
    /// # Panics
    ///
    /// Panics if the pixel data length doesn't match `width * height * 4`.
    #[must_use]
    pub fn new(width: u32, height: u32, rgba_bytes: Arc<Vec<u8>>, pts_secs: f64) -> Self {
        let expected_len = (width as usize) * (height as usize) * 4;
        assert_eq!(
            rgba_bytes.len(),
            expected_len,
            "RGBA data length mismatch: expected {expected_len}, got {}",
            rgba_bytes.len()
        );

        Self {
            width,
            height,
            rgba_bytes,
            pts_secs,
        }
    }

    /// Creates a frame from owned RGBA data.
    ///
    /// # Panics
    ///
    /// Panics if the pixel data length doesn't match `width * height * 4`.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, rgba_bytes: Vec<u8>, pts_secs: f64) -> Self {
        Self::new(width, height, Arc::new(rgba_bytes), pts_secs)
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn pts_secs(&self) -> f64 {
        self.pts_secs
    }

    /// Returns the shared pixel buffer.
    #[must_use]
    pub fn rgba_bytes(&self) -> &Arc<Vec<u8>> {
        &self.rgba_bytes
    }

    /// Returns the total size in bytes.
    #[must_use]
    pub fn size_bytes(&self) -> usize {
        self.rgba_bytes.len()
    }

    /// Consumes the frame, returning its pixels. The buffer is only copied
    /// when other frames still share it.
    #[must_use]
    pub fn into_rgba_bytes(self) -> Vec<u8> {
        Arc::try_unwrap(self.rgba_bytes).unwrap_or_else(|shared| (*shared).clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_reports_dimensions_and_size() {
        let frame = RawFrame::from_rgba(1920, 1080, vec![0u8; 1920 * 1080 * 4], 1.5);
        assert_eq!(frame.width(), 1920);
        assert_eq!(frame.height(), 1080);
        assert_eq!(frame.size_bytes(), 1920 * 1080 * 4);
        assert!((frame.pts_secs() - 1.5).abs() < f64::EPSILON);
    }

    #[test]
    fn into_rgba_bytes_keeps_shared_buffers_intact() {
        let frame = RawFrame::from_rgba(1, 1, vec![7u8; 4], 0.0);
        let shared = frame.clone();
        assert_eq!(frame.into_rgba_bytes(), vec![7u8; 4]);
        assert_eq!(shared.rgba_bytes().as_slice(), &[7u8; 4]);
    }

    #[test]
    #[should_panic(expected = "RGBA data length mismatch")]
    fn mismatched_buffer_panics() {
        let _ = RawFrame::from_rgba(2, 2, vec![0u8; 3], 0.0);
    }
}
