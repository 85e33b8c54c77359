// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, BLACK, WHITE},
    radius,
};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Black full-window background.
pub fn screen(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(BLACK)),
        text_color: Some(WHITE),
        ..Default::default()
    }
}

/// Rounded card surface.
pub fn card(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::GRAY_950)),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Flat placeholder shown until a thumbnail arrives.
pub fn thumbnail_placeholder(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::GRAY_900)),
        ..Default::default()
    }
}

/// Dim layer over a thumbnail so the play indicator stands out.
pub fn thumbnail_scrim(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_SUBTLE,
            ..BLACK
        })),
        ..Default::default()
    }
}

/// White disc behind the play glyph.
pub fn play_disc(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::PLAY_DISC,
            ..WHITE
        })),
        text_color: Some(BLACK),
        border: Border {
            radius: radius::PILL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Small dark badge (durations).
pub fn badge(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_STRONG,
            ..BLACK
        })),
        text_color: Some(WHITE),
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Translucent bar behind the player controls and error messages.
pub fn overlay_panel(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_STRONG,
            ..BLACK
        })),
        text_color: Some(WHITE),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}
