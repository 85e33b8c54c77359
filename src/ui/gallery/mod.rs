// SPDX-License-Identifier: MPL-2.0
//! Video grid screen.

pub mod card;
pub mod component;
pub mod layout;

pub use component::{Effect, Message, Services, State, Thumbnail, ViewEnv};
pub use layout::{should_load_more, GridLayout, ScrollMetrics};
