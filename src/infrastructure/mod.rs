// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the port traits defined in
//! `application::port`. These adapters wrap external dependencies like `FFmpeg`
//! and the filesystem.
//!
//! # Available Adapters
//!
//! - [`directory_library`]: Video listing from a directory (implements [`MediaLibrary`])
//! - [`ffmpeg`]: Playback and thumbnails via `FFmpeg` (implements
//!   [`PlaybackEngine`] and [`ThumbnailExtractor`])
//!
//! [`MediaLibrary`]: crate::application::port::MediaLibrary
//! [`PlaybackEngine`]: crate::application::port::PlaybackEngine
//! [`ThumbnailExtractor`]: crate::application::port::ThumbnailExtractor

pub mod directory_library;
pub mod ffmpeg;

pub use directory_library::DirectoryLibrary;
pub use ffmpeg::{FfmpegEngine, FfmpegThumbnailer};
