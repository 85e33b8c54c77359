// SPDX-License-Identifier: MPL-2.0
//! Single-video playback screen.

pub mod component;
pub mod controls;

pub use component::{Effect, Message, State, ViewEnv};
