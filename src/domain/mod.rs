// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core types and rules with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and business rules.
//! It has no dependencies on external crates (except `std`) to ensure
//! testability and architectural purity.
//!
//! # Modules
//!
//! - [`error`]: Domain error types ([`VideoError`](error::VideoError),
//!   [`LibraryError`](error::LibraryError))
//! - [`library`]: Media library types ([`VideoAsset`](library::VideoAsset),
//!   [`PageCursor`](library::PageCursor), [`AssetPage`](library::AssetPage))
//! - [`video`]: Video playback types ([`PlaybackState`](video::PlaybackState),
//!   [`RawFrame`](video::RawFrame), [`PlayerCommand`](video::PlayerCommand))

pub mod error;
pub mod library;
pub mod video;
