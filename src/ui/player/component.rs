// SPDX-License-Identifier: MPL-2.0
//! Playback view: one video, full-bleed, with a back control.
//!
//! The view owns its player through the playback subscription. Leaving the
//! view drops the subscription, which closes the command channel and ends
//! the decoder.

use super::controls::{self, ControlsState};
use crate::application::port::{PlaybackEngine, PlayerHandle};
use crate::domain::error::VideoError;
use crate::domain::library::VideoAsset;
use crate::domain::video::{PlaybackState, PlayerEvent};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use crate::ui::widgets::VideoCanvas;
use crate::video_player::{video_playback, PlaybackMessage};
use iced::widget::{button, Column, Container, Stack, Text};
use iced::{alignment, Element, Length, Subscription, Task};
use std::sync::Arc;

#[derive(Debug, Clone)]
pub enum Message {
    Playback(PlaybackMessage),
    Controls(controls::Message),
    Back,
}

/// Outcomes the application root reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Return to the grid.
    Dismiss,
    ToggleFullscreen,
}

pub struct ViewEnv<'a> {
    pub i18n: &'a I18n,
    pub is_fullscreen: bool,
}

#[derive(Debug)]
pub struct State {
    asset: VideoAsset,
    session_id: u64,
    autoplay: bool,
    handle: Option<PlayerHandle>,
    canvas: VideoCanvas,
    playback: PlaybackState,
    position_secs: f64,
    duration_secs: Option<f64>,
    seek_preview: Option<f64>,
    error: Option<VideoError>,
}

impl State {
    /// `session_id` must differ from the previous session's so the playback
    /// subscription restarts.
    #[must_use]
    pub fn new(asset: VideoAsset, session_id: u64, autoplay: bool) -> Self {
        Self {
            duration_secs: asset.duration_secs,
            asset,
            session_id,
            autoplay,
            handle: None,
            canvas: VideoCanvas::new(),
            playback: PlaybackState::Opening,
            position_secs: 0.0,
            seek_preview: None,
            error: None,
        }
    }

    #[must_use]
    pub fn asset(&self) -> &VideoAsset {
        &self.asset
    }

    #[must_use]
    pub fn playback(&self) -> PlaybackState {
        self.playback
    }

    #[must_use]
    pub fn position_secs(&self) -> f64 {
        self.position_secs
    }

    #[must_use]
    pub fn error(&self) -> Option<&VideoError> {
        self.error.as_ref()
    }

    pub fn subscription(&self, engine: Arc<dyn PlaybackEngine>) -> Subscription<Message> {
        video_playback(engine, self.asset.source.clone(), self.session_id).map(Message::Playback)
    }

    pub fn handle_message(&mut self, message: Message) -> (Effect, Task<Message>) {
        match message {
            Message::Playback(PlaybackMessage::Ready(handle)) => {
                self.handle = Some(handle);
                if self.autoplay {
                    self.send(PlayerHandle::play);
                }
                (Effect::None, Task::none())
            }
            Message::Playback(PlaybackMessage::Event(event)) => {
                self.handle_event(event);
                (Effect::None, Task::none())
            }
            Message::Controls(message) => self.handle_controls(message),
            Message::Back => {
                self.send(PlayerHandle::stop);
                (Effect::Dismiss, Task::none())
            }
        }
    }

    fn handle_event(&mut self, event: PlayerEvent) {
        match event {
            PlayerEvent::Opened { duration_secs } => {
                if duration_secs.is_some() {
                    self.duration_secs = duration_secs;
                }
                self.playback = if self.autoplay {
                    PlaybackState::Playing
                } else {
                    PlaybackState::Paused
                };
            }
            PlayerEvent::Frame(frame) => {
                self.position_secs = frame.pts_secs();
                self.canvas.set_frame(frame);
            }
            PlayerEvent::EndOfStream => {
                if let Some(duration) = self.duration_secs {
                    self.position_secs = duration;
                }
                self.playback = PlaybackState::Ended;
            }
            PlayerEvent::Error(error) => {
                tracing::warn!(source = %self.asset.source, %error, "playback failed");
                self.error = Some(error);
                self.playback = PlaybackState::Failed;
            }
        }
    }

    fn handle_controls(&mut self, message: controls::Message) -> (Effect, Task<Message>) {
        match message {
            controls::Message::TogglePlayback => {
                if !self.playback.accepts_controls() {
                    return (Effect::None, Task::none());
                }
                match self.playback {
                    PlaybackState::Playing => self.send(PlayerHandle::pause),
                    PlaybackState::Ended => {
                        self.send(|h| h.seek(0.0));
                        self.position_secs = 0.0;
                        self.send(PlayerHandle::play);
                    }
                    _ => self.send(PlayerHandle::play),
                }
                self.playback = self.playback.toggled();
            }
            controls::Message::SeekPreview(position) => {
                if self.playback.accepts_controls() {
                    self.seek_preview = Some(position);
                }
            }
            controls::Message::SeekCommit => {
                if let Some(target) = self.seek_preview.take() {
                    self.send(|h| h.seek(target));
                    self.position_secs = target;
                    if self.playback == PlaybackState::Ended {
                        self.playback = PlaybackState::Paused;
                    }
                }
            }
            controls::Message::ToggleFullscreen => {
                return (Effect::ToggleFullscreen, Task::none());
            }
        }
        (Effect::None, Task::none())
    }

    /// Sends a command if the player is ready. A closed player is logged;
    /// the error event from the session reports the cause.
    fn send(&self, command: impl FnOnce(&PlayerHandle) -> Result<(), VideoError>) {
        if let Some(handle) = &self.handle {
            if let Err(error) = command(handle) {
                tracing::debug!(%error, "player command dropped");
            }
        }
    }

    fn controls_state(&self, is_fullscreen: bool) -> ControlsState {
        ControlsState {
            is_playing: self.playback.is_playing(),
            position_secs: self.position_secs,
            duration_secs: self.duration_secs,
            seek_preview_position: self.seek_preview,
            enabled: self.playback.accepts_controls(),
            fullscreen: is_fullscreen,
        }
    }

    pub fn view<'a>(&'a self, env: ViewEnv<'a>) -> Element<'a, Message> {
        let surface = Container::new(self.canvas.view::<Message>())
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::container::screen);

        let back = Container::new(
            button(Text::new(env.i18n.tr("player-back")).size(typography::BODY_LG))
                .padding([spacing::SM + spacing::XS, spacing::LG])
                .style(styles::button::overlay)
                .on_press(Message::Back),
        )
        .padding(spacing::LG)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Left)
        .align_y(alignment::Vertical::Top);

        let controls = Container::new(
            controls::view(env.i18n, &self.controls_state(env.is_fullscreen))
                .map(Message::Controls),
        )
        .padding(spacing::MD)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_y(alignment::Vertical::Bottom);

        let mut layers = Stack::new()
            .width(Length::Fill)
            .height(Length::Fill)
            .push(surface);

        if let Some(error) = &self.error {
            layers = layers.push(error_overlay(env.i18n, error));
        }

        layers.push(controls).push(back).into()
    }
}

fn error_overlay<'a>(i18n: &I18n, error: &VideoError) -> Element<'a, Message> {
    let message = Column::new()
        .spacing(spacing::XS)
        .align_x(alignment::Horizontal::Center)
        .push(
            Text::new(i18n.tr(error.i18n_key()))
                .size(typography::BODY_LG)
                .color(palette::ERROR_500),
        )
        .push(
            Text::new(error.to_string())
                .size(typography::CAPTION)
                .color(palette::GRAY_400),
        );

    Container::new(
        Container::new(message)
            .padding(spacing::MD)
            .style(styles::container::overlay_panel),
    )
    .center(Length::Fill)
    .into()
}
