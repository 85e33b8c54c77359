// SPDX-License-Identifier: MPL-2.0
//! Playback controls bar.
//!
//! Play/pause, a timeline scrubber, elapsed and total time, and the
//! fullscreen toggle.

use crate::domain::library::format_duration;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, slider, text, tooltip, Container, Row, Text};
use iced::{alignment, Element, Length};

/// Slider step in seconds (1ms precision).
const SLIDER_STEP_SECS: f64 = 0.001;

const PLAY_GLYPH: &str = "▶";
const PAUSE_GLYPH: &str = "❚❚";
const FULLSCREEN_GLYPH: &str = "⛶";

/// Messages emitted by the controls bar.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    TogglePlayback,

    /// Slider is being dragged; position in seconds. Visual only.
    SeekPreview(f64),

    /// Slider released; seek to the previewed position.
    SeekCommit,

    ToggleFullscreen,
}

/// What the controls display.
#[derive(Debug, Clone, Default)]
pub struct ControlsState {
    pub is_playing: bool,
    pub position_secs: f64,
    pub duration_secs: Option<f64>,
    /// Shown instead of the playback position while dragging.
    pub seek_preview_position: Option<f64>,
    pub enabled: bool,
    pub fullscreen: bool,
}

impl ControlsState {
    /// Position under the scrubber.
    #[must_use]
    pub fn timeline_position(&self) -> f64 {
        self.seek_preview_position.unwrap_or(self.position_secs)
    }

    /// Elapsed and total time, e.g. `0:42 / 2:05`.
    #[must_use]
    pub fn time_label(&self) -> String {
        format!(
            "{} / {}",
            format_duration(Some(self.timeline_position())),
            format_duration(self.duration_secs)
        )
    }
}

pub fn view<'a>(i18n: &I18n, state: &ControlsState) -> Element<'a, Message> {
    let (glyph, tip) = if state.is_playing {
        (PAUSE_GLYPH, i18n.tr("player-pause"))
    } else {
        (PLAY_GLYPH, i18n.tr("player-play"))
    };

    let mut play_pause = button(Text::new(glyph).size(typography::BODY_LG))
        .padding(spacing::XS)
        .height(Length::Fixed(sizing::BUTTON_HEIGHT))
        .style(styles::button::control);
    if state.enabled {
        play_pause = play_pause.on_press(Message::TogglePlayback);
    }
    let play_pause = tooltip(play_pause, Text::new(tip), tooltip::Position::Top).gap(4);

    let duration = state.duration_secs.filter(|d| d.is_finite() && *d > 0.0);
    let timeline: Element<'a, Message> = match duration {
        Some(total) if state.enabled => slider(
            0.0..=total,
            state.timeline_position().clamp(0.0, total),
            Message::SeekPreview,
        )
        .on_release(Message::SeekCommit)
        .step(SLIDER_STEP_SECS)
        .style(styles::slider::timeline)
        .width(Length::Fill)
        .into(),
        _ => slider(0.0..=1.0, 0.0, Message::SeekPreview)
            .style(styles::slider::timeline)
            .width(Length::Fill)
            .into(),
    };

    let time = text(state.time_label()).size(typography::CAPTION);

    let fullscreen_tip = if state.fullscreen {
        i18n.tr("player-exit-fullscreen")
    } else {
        i18n.tr("player-fullscreen")
    };
    let fullscreen = tooltip(
        button(Text::new(FULLSCREEN_GLYPH).size(typography::BODY_LG))
            .padding(spacing::XS)
            .height(Length::Fixed(sizing::BUTTON_HEIGHT))
            .style(styles::button::control)
            .on_press(Message::ToggleFullscreen),
        Text::new(fullscreen_tip),
        tooltip::Position::Top,
    )
    .gap(4);

    let bar = Row::new()
        .spacing(spacing::MD)
        .align_y(alignment::Vertical::Center)
        .push(play_pause)
        .push(timeline)
        .push(time)
        .push(fullscreen);

    Container::new(bar)
        .padding([spacing::XS, spacing::MD])
        .width(Length::Fill)
        .style(styles::container::overlay_panel)
        .into()
}
