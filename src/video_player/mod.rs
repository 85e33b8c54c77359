// SPDX-License-Identifier: MPL-2.0
//! Bridge between a [`PlaybackEngine`](crate::application::port::PlaybackEngine)
//! and the iced event loop.
//!
//! Decoding itself lives in the infrastructure adapters; this module only
//! turns a player session into a subscription.

pub mod subscription;

pub use subscription::{video_playback, PlaybackMessage, PlaybackSessionId};
