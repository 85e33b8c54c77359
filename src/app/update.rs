// SPDX-License-Identifier: MPL-2.0
//! Side effects the root triggers in response to component effects.

use super::Message;
use crate::i18n::fluent::I18n;
use iced::{window, Task};

/// Shows the blocking "permission required" dialog.
///
/// The dialog runs on its own task; the grid keeps its empty-state notice
/// after it closes.
pub fn permission_alert(i18n: &I18n) -> Task<Message> {
    let title = i18n.tr("window-title");
    let description = i18n.tr("permission-required");
    Task::perform(
        async move {
            rfd::AsyncMessageDialog::new()
                .set_level(rfd::MessageLevel::Warning)
                .set_title(title)
                .set_description(description)
                .set_buttons(rfd::MessageButtons::Ok)
                .show()
                .await
        },
        |_| Message::PermissionAlertClosed,
    )
}

/// Toggles fullscreen mode.
pub fn toggle_fullscreen(fullscreen: &mut bool, window_id: Option<&window::Id>) -> Task<Message> {
    let desired = !*fullscreen;
    update_fullscreen_mode(fullscreen, window_id, desired)
}

/// Updates fullscreen mode to the desired state.
pub fn update_fullscreen_mode(
    fullscreen: &mut bool,
    window_id: Option<&window::Id>,
    desired: bool,
) -> Task<Message> {
    if *fullscreen == desired {
        return Task::none();
    }

    let Some(window_id) = window_id else {
        return Task::none();
    };

    *fullscreen = desired;
    let mode = if desired {
        window::Mode::Fullscreen
    } else {
        window::Mode::Windowed
    };
    window::set_mode(*window_id, mode)
}
