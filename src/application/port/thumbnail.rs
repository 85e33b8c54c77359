// SPDX-License-Identifier: MPL-2.0
//! Thumbnail extraction port definition.

use crate::domain::error::VideoError;
use crate::domain::library::SourceUri;
use crate::domain::video::RawFrame;

/// Port for producing a preview frame of a video source.
///
/// Implementations may block (they usually decode the first frame); run
/// them on a blocking thread.
pub trait ThumbnailExtractor: Send + Sync {
    /// Extracts a preview frame no wider than `max_width` pixels, keeping
    /// the aspect ratio.
    ///
    /// # Errors
    ///
    /// Returns a [`VideoError`] if the source cannot be opened or decoded.
    fn extract(&self, source: &SourceUri, max_width: u32) -> Result<RawFrame, VideoError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn _assert_object_safe(_: &dyn ThumbnailExtractor) {}
}
