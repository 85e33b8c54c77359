// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Window geometry feeds the grid layout, Escape leaves playback, a timer
//! animates the loading spinner, and the open player streams its events.

use super::{Message, Screen};
use crate::application::port::PlaybackEngine;
use iced::keyboard::{self, key};
use iced::{event, time, window, Event, Subscription};
use std::sync::Arc;
use std::time::Duration;

/// Interval of the spinner animation tick.
pub const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Routes native window and keyboard events to top-level messages.
///
/// Keyboard events are only forwarded when no widget captured them.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, window_id| match event {
        Event::Window(window::Event::Opened { size, .. } | window::Event::Resized(size)) => {
            Some(Message::WindowResized {
                id: window_id,
                size,
            })
        }
        Event::Keyboard(keyboard::Event::KeyPressed {
            key: keyboard::Key::Named(key::Named::Escape),
            ..
        }) => match status {
            event::Status::Ignored => Some(Message::EscapePressed),
            event::Status::Captured => None,
        },
        _ => None,
    })
}

/// Ticks only while the grid shows its loading indicator.
pub fn create_tick_subscription(screen: &Screen, is_loading: bool) -> Subscription<Message> {
    if screen.is_grid() && is_loading {
        time::every(TICK_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

/// The playback subscription of the open player, if any. Returning
/// `Subscription::none()` once the grid is back drops the player session.
pub fn create_video_subscription(
    screen: &Screen,
    engine: &Arc<dyn PlaybackEngine>,
) -> Subscription<Message> {
    match screen.player() {
        Some(player) => player
            .subscription(Arc::clone(engine))
            .map(Message::Player),
        None => Subscription::none(),
    }
}
