// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Screens follow the Elm-style "state down, messages up" pattern: each
//! component owns a `State`, consumes its own `Message`, and reports an
//! `Effect` for the application root to act on.
//!
//! # Screens
//!
//! - [`gallery`] - Paginated two-column video grid
//! - [`player`] - Full-window playback of one video
//!
//! # Shared Infrastructure
//!
//! - [`widgets`] - Custom Iced widgets (spinner, video canvas)
//! - [`styles`] - Centralized styling (buttons, containers, sliders)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod design_tokens;
pub mod gallery;
pub mod player;
pub mod styles;
pub mod widgets;
