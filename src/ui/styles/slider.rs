// SPDX-License-Identifier: MPL-2.0
//! Slider-specific style definitions.

use crate::ui::design_tokens::{palette, sizing};
use iced::widget::slider;
use iced::{Background, Border, Color, Theme};

/// Timeline scrubber: accent on the played part, gray on the rest.
pub fn timeline(_theme: &Theme, status: slider::Status) -> slider::Style {
    let handle = match status {
        slider::Status::Hovered | slider::Status::Dragged => palette::ACCENT_400,
        slider::Status::Active => palette::WHITE,
    };

    slider::Style {
        rail: slider::Rail {
            backgrounds: (
                Background::Color(palette::ACCENT_500),
                Background::Color(palette::GRAY_700),
            ),
            width: sizing::TIMELINE_TRACK,
            border: Border {
                color: Color::TRANSPARENT,
                width: 0.0,
                radius: (sizing::TIMELINE_TRACK / 2.0).into(),
            },
        },
        handle: slider::Handle {
            shape: slider::HandleShape::Circle {
                radius: sizing::SCRUBBER_THUMB / 2.0,
            },
            background: Background::Color(handle),
            border_width: 0.0,
            border_color: Color::TRANSPARENT,
        },
    }
}
