// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, BLACK, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Invisible button wrapping a whole card; dims slightly when pressed.
pub fn card(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered => Some(Background::Color(palette::GRAY_900)),
        button::Status::Pressed => Some(Background::Color(Color {
            a: opacity::OVERLAY_SUBTLE,
            ..WHITE
        })),
        _ => None,
    };

    button::Style {
        background,
        text_color: WHITE,
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Pill-shaped overlay button (back control, player controls).
pub fn overlay(_theme: &Theme, status: button::Status) -> button::Style {
    let alpha = match status {
        button::Status::Hovered => opacity::OVERLAY_PRESSED,
        button::Status::Pressed => opacity::OPAQUE,
        _ => opacity::OVERLAY_STRONG,
    };

    button::Style {
        background: Some(Background::Color(Color { a: alpha, ..BLACK })),
        text_color: WHITE,
        border: Border {
            radius: radius::PILL.into(),
            ..Default::default()
        },
        shadow: shadow::MD,
        snap: true,
    }
}

/// Flat text-only button used inside the controls bar.
pub fn control(_theme: &Theme, status: button::Status) -> button::Style {
    let text_color = match status {
        button::Status::Hovered | button::Status::Pressed => palette::ACCENT_400,
        button::Status::Disabled => palette::GRAY_700,
        button::Status::Active => WHITE,
    };

    button::Style {
        background: None,
        text_color,
        border: Border::default(),
        shadow: shadow::NONE,
        snap: true,
    }
}
