// SPDX-License-Identifier: MPL-2.0
//! `reel_play` is a video gallery built with the Iced GUI framework.
//!
//! It lists the videos of a folder in a paginated two-column grid, loading
//! more as the user scrolls, and plays the selected video inside the window.
//!
//! # Layers
//!
//! - [`domain`] - Assets, cursors, frames and player vocabulary
//! - [`application`] - Capability ports and the pagination state machine
//! - [`infrastructure`] - Directory library and `FFmpeg` adapters
//! - [`ui`] - Grid and playback components
//! - [`app`] - Root state, routing, settings and paths

pub mod app;
pub mod application;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod infrastructure;
pub mod ui;
pub mod video_player;
