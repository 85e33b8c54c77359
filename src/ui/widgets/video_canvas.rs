// SPDX-License-Identifier: MPL-2.0
//! Widget for rendering video frames.
//!
//! Keeps the latest decoded frame as an `image::Handle` and renders it
//! letterboxed over a black surface.

use crate::domain::video::RawFrame;
use iced::widget::{container, image, Container};
use iced::{ContentFit, Element, Length};

/// Converts a decoded frame into an image handle.
#[must_use]
pub fn frame_handle(frame: RawFrame) -> image::Handle {
    let width = frame.width();
    let height = frame.height();
    image::Handle::from_rgba(width, height, frame.into_rgba_bytes())
}

/// Video frame surface.
#[derive(Debug, Default)]
pub struct VideoCanvas {
    frame_handle: Option<image::Handle>,
}

impl VideoCanvas {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the displayed frame.
    pub fn set_frame(&mut self, frame: RawFrame) {
        self.frame_handle = Some(frame_handle(frame));
    }

    /// Renders the frame scaled to fit the available space.
    pub fn view<Message: 'static>(&self) -> Element<'_, Message> {
        let content: Element<'_, Message> = match &self.frame_handle {
            Some(handle) => image::Image::new(handle.clone())
                .content_fit(ContentFit::Contain)
                .width(Length::Fill)
                .height(Length::Fill)
                .into(),
            None => iced::widget::Space::new().into(),
        };

        let surface: Container<'_, Message> = container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .center_y(Length::Fill);
        surface.into()
    }
}
