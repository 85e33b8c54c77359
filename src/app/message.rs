// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::{gallery, player};
use iced::{window, Size};
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Gallery(gallery::Message),
    Player(player::Message),
    /// The window opened or changed size.
    WindowResized {
        id: window::Id,
        size: Size,
    },
    /// Escape reached the application without a widget consuming it.
    EscapePressed,
    /// The blocking permission dialog was dismissed.
    PermissionAlertClosed,
    Tick(Instant), // Spinner animation while a page loads
}

/// Runtime flags passed from the command line into the application.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g., `fr`).
    pub lang: Option<String>,
    /// Directory listed by the gallery instead of the configured one.
    pub library: Option<String>,
    /// Optional config directory override (for settings.toml).
    pub config_dir: Option<String>,
    /// Directory with extra `.ftl` files loaded over the embedded ones.
    pub i18n_dir: Option<String>,
}
