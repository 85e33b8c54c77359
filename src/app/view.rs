// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! This module handles the `view()` function that renders the current screen
//! based on application state.

use super::{Message, Screen};
use crate::i18n::fluent::I18n;
use crate::ui::gallery::{self, GridLayout};
use crate::ui::{player, styles};
use iced::widget::Container;
use iced::{Element, Length, Size};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: &'a Screen,
    pub gallery: &'a gallery::State,
    pub window_size: Size,
    pub fullscreen: bool,
}

/// Renders the current application view based on the active screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let current_view: Element<'_, Message> = match ctx.screen {
        Screen::Grid => ctx
            .gallery
            .view(gallery::ViewEnv {
                i18n: ctx.i18n,
                layout: GridLayout::from_window_width(ctx.window_size.width),
            })
            .map(Message::Gallery),
        Screen::Playing(state) => state
            .view(player::ViewEnv {
                i18n: ctx.i18n,
                is_fullscreen: ctx.fullscreen,
            })
            .map(Message::Player),
    };

    Container::new(current_view)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::screen)
        .into()
}
