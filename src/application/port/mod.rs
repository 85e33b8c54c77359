// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces that infrastructure adapters implement.
//! These traits use only domain types, ensuring the application layer remains
//! independent of concrete implementations.
//!
//! # Available Ports
//!
//! - [`library`]: Media library access and paginated listing
//! - [`playback`]: Player creation and control
//! - [`thumbnail`]: Preview frame extraction for grid cards
//!
//! # Design Notes
//!
//! - All traits use domain types only (no Iced handles, no `FFmpeg` types)
//! - Traits are `Send + Sync` so adapters can be shared behind an `Arc`
//! - Methods return `Result` with domain error types
//! - No `async fn` - callers move the blocking call onto a Tokio blocking
//!   thread and deliver the result through an Iced `Task`

pub mod library;
pub mod playback;
pub mod thumbnail;

pub use library::MediaLibrary;
pub use playback::{PlaybackEngine, PlayerHandle, PlayerSession};
pub use thumbnail::ThumbnailExtractor;
