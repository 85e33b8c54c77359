// SPDX-License-Identifier: MPL-2.0
//! Screen enumeration for application navigation.

use crate::ui::player;

/// What the window currently shows. At most one video plays at a time.
#[derive(Debug)]
pub enum Screen {
    Grid,
    Playing(Box<player::State>),
}

impl Screen {
    #[must_use]
    pub fn is_grid(&self) -> bool {
        matches!(self, Screen::Grid)
    }

    /// The player state while a video is open.
    #[must_use]
    pub fn player(&self) -> Option<&player::State> {
        match self {
            Screen::Grid => None,
            Screen::Playing(state) => Some(state),
        }
    }
}
