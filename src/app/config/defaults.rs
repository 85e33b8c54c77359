// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Gallery**: Scroll proximity that triggers the next page
//! - **Video**: Playback behavior when a video is opened

// ==========================================================================
// Gallery Defaults
// ==========================================================================

/// Default load threshold, in visible viewport heights from the end of the
/// grid.
pub const DEFAULT_LOAD_THRESHOLD: f32 = crate::ui::gallery::layout::DEFAULT_LOAD_THRESHOLD;

/// Minimum allowed load threshold.
pub const MIN_LOAD_THRESHOLD: f32 = 0.05;

/// Maximum allowed load threshold.
pub const MAX_LOAD_THRESHOLD: f32 = 2.0;

// ==========================================================================
// Video Defaults
// ==========================================================================

/// Whether playback starts as soon as a video is opened.
pub const DEFAULT_AUTOPLAY: bool = true;

// ==========================================================================
// Compile-time validation
// ==========================================================================

const _: () = {
    assert!(MIN_LOAD_THRESHOLD > 0.0);
    assert!(MIN_LOAD_THRESHOLD < MAX_LOAD_THRESHOLD);
    assert!(DEFAULT_LOAD_THRESHOLD >= MIN_LOAD_THRESHOLD);
    assert!(DEFAULT_LOAD_THRESHOLD <= MAX_LOAD_THRESHOLD);
};
