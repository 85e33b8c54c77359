// SPDX-License-Identifier: MPL-2.0
//! Gallery component: paginated video grid.
//!
//! Wraps the pure [`Gallery`] state machine with the iced plumbing: tasks
//! for access and page fetches, thumbnail extraction, scroll-driven
//! `load_more`, and the grid view itself.

use super::card;
use super::layout::{self, GridLayout, ScrollMetrics};
use crate::application::gallery::{
    tasks, AccessState, FetchTicket, Gallery, LoadOutcome, LoadState,
};
use crate::application::port::{MediaLibrary, ThumbnailExtractor};
use crate::domain::error::{LibraryError, VideoError};
use crate::domain::library::{AccessStatus, AssetPage, SourceUri, VideoAsset};
use crate::domain::video::RawFrame;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::widgets::{animated_spinner, video_canvas, AnimatedSpinner};
use iced::widget::scrollable::{AbsoluteOffset, Scrollable, Viewport};
use iced::widget::{image, operation, Column, Container, Id, Row, Text};
use iced::{alignment, Element, Length, Task};
use std::collections::HashMap;
use std::sync::Arc;

/// Identifier used for the grid scrollable widget.
pub const SCROLLABLE_ID: &str = "gallery-grid-scrollable";

/// Thumbnail extraction state for one source.
#[derive(Debug, Clone)]
pub enum Thumbnail {
    Pending,
    Ready(image::Handle),
    Failed,
}

#[derive(Debug, Clone)]
pub enum Message {
    AccessResolved(AccessStatus),
    PageLoaded {
        ticket: FetchTicket,
        result: Result<AssetPage, LibraryError>,
    },
    ThumbnailLoaded {
        source: SourceUri,
        result: Result<RawFrame, VideoError>,
    },
    Scrolled(ScrollMetrics),
    Select(usize),
    SpinnerTick,
}

/// Outcomes the application root reacts to.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    /// Access was refused; show the permission notice.
    AccessDenied,
    /// The user picked a video.
    PlayVideo(VideoAsset),
}

/// Capabilities the gallery calls into.
#[derive(Clone)]
pub struct Services {
    pub library: Arc<dyn MediaLibrary>,
    pub thumbnails: Arc<dyn ThumbnailExtractor>,
}

/// Everything the grid needs from the application to render.
pub struct ViewEnv<'a> {
    pub i18n: &'a I18n,
    pub layout: GridLayout,
}

#[derive(Debug, Clone)]
pub struct State {
    gallery: Gallery,
    thumbnails: HashMap<SourceUri, Thumbnail>,
    load_threshold: f32,
    spinner_rotation: f32,
    /// Last reported vertical scroll offset.
    scroll_offset: f32,
    /// Grid layout and visible grid height, once the window size is known.
    window: Option<(GridLayout, f32)>,
}

impl Default for State {
    fn default() -> Self {
        Self::new(layout::DEFAULT_LOAD_THRESHOLD)
    }
}

impl State {
    #[must_use]
    pub fn new(load_threshold: f32) -> Self {
        Self {
            gallery: Gallery::new(),
            thumbnails: HashMap::new(),
            load_threshold,
            spinner_rotation: 0.0,
            scroll_offset: 0.0,
            window: None,
        }
    }

    #[must_use]
    pub fn gallery(&self) -> &Gallery {
        &self.gallery
    }

    #[cfg(test)]
    pub(crate) fn gallery_mut(&mut self) -> &mut Gallery {
        &mut self.gallery
    }

    #[must_use]
    pub fn thumbnail(&self, source: &SourceUri) -> Option<&Thumbnail> {
        self.thumbnails.get(source)
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.gallery.is_loading()
    }

    /// Asks the library for access. The answer arrives as
    /// [`Message::AccessResolved`].
    pub fn initialize(&self, services: &Services) -> Task<Message> {
        Task::perform(
            tasks::request_access(Arc::clone(&services.library)),
            Message::AccessResolved,
        )
    }

    /// Requests the next page unless one is in flight, the library is
    /// exhausted, or access was not granted.
    pub fn load_more(&mut self, services: &Services) -> Task<Message> {
        match self.gallery.begin_load() {
            Some(ticket) => fetch(ticket, services),
            None => Task::none(),
        }
    }

    /// Scrolls the rebuilt grid back to where the user left it.
    pub fn restore_scroll(&self) -> Task<Message> {
        operation::scroll_to(
            Id::new(SCROLLABLE_ID),
            AbsoluteOffset {
                x: 0.0,
                y: self.scroll_offset,
            },
        )
    }

    /// Records the window geometry and loads more if the grid no longer
    /// fills the viewport.
    pub fn set_window(
        &mut self,
        layout: GridLayout,
        window_height: f32,
        services: &Services,
    ) -> Task<Message> {
        let visible = (window_height - layout::HEADER_HEIGHT).max(0.0);
        self.window = Some((layout, visible));
        self.top_up(services)
    }

    /// The grid only reports scroll positions once its content overflows,
    /// so a short grid is checked against its estimated height instead.
    fn top_up(&mut self, services: &Services) -> Task<Message> {
        let Some((layout, visible)) = self.window else {
            return Task::none();
        };
        let metrics = ScrollMetrics {
            offset_y: 0.0,
            viewport_height: visible,
            content_height: layout.content_height(self.gallery.len()),
        };
        if layout::should_load_more(&metrics, self.load_threshold) {
            self.load_more(services)
        } else {
            Task::none()
        }
    }

    pub fn handle_message(
        &mut self,
        message: Message,
        services: &Services,
    ) -> (Effect, Task<Message>) {
        match message {
            Message::AccessResolved(status) => {
                let ticket = self.gallery.resolve_access(status);
                if self.gallery.access() == AccessState::Denied {
                    tracing::warn!("media library access denied");
                    return (Effect::AccessDenied, Task::none());
                }
                let task = ticket.map_or_else(Task::none, |ticket| fetch(ticket, services));
                (Effect::None, task)
            }
            Message::PageLoaded { ticket, result } => {
                let task = match self.gallery.finish_load(ticket, result) {
                    LoadOutcome::Appended(range) => {
                        tracing::debug!(
                            appended = range.len(),
                            total = self.gallery.len(),
                            has_more = self.gallery.has_more(),
                            "page loaded"
                        );
                        if range.is_empty() {
                            return (Effect::None, Task::none());
                        }
                        let thumbnails = self.request_thumbnails(range, services);
                        Task::batch([thumbnails, self.top_up(services)])
                    }
                    LoadOutcome::Failed(error) => {
                        tracing::error!(%error, "failed to load videos");
                        Task::none()
                    }
                    LoadOutcome::Stale => {
                        tracing::debug!("ignoring stale page result");
                        Task::none()
                    }
                };
                (Effect::None, task)
            }
            Message::ThumbnailLoaded { source, result } => {
                let thumbnail = match result {
                    Ok(frame) => Thumbnail::Ready(video_canvas::frame_handle(frame)),
                    Err(error) => {
                        tracing::debug!(%source, %error, "thumbnail extraction failed");
                        Thumbnail::Failed
                    }
                };
                self.thumbnails.insert(source, thumbnail);
                (Effect::None, Task::none())
            }
            Message::Scrolled(metrics) => {
                self.scroll_offset = metrics.offset_y;
                let task = if layout::should_load_more(&metrics, self.load_threshold) {
                    self.load_more(services)
                } else {
                    Task::none()
                };
                (Effect::None, task)
            }
            Message::Select(index) => match self.gallery.asset(index) {
                Some(asset) => (Effect::PlayVideo(asset.clone()), Task::none()),
                None => (Effect::None, Task::none()),
            },
            Message::SpinnerTick => {
                self.spinner_rotation = animated_spinner::next_rotation(self.spinner_rotation);
                (Effect::None, Task::none())
            }
        }
    }

    /// Schedules one extraction per new asset that has none yet.
    fn request_thumbnails(
        &mut self,
        range: std::ops::Range<usize>,
        services: &Services,
    ) -> Task<Message> {
        let mut pending = Vec::new();
        for asset in &self.gallery.assets()[range] {
            if self.thumbnails.contains_key(&asset.source) {
                continue;
            }
            self.thumbnails.insert(asset.source.clone(), Thumbnail::Pending);
            pending.push(Task::perform(
                tasks::load_thumbnail(
                    Arc::clone(&services.thumbnails),
                    asset.source.clone(),
                    sizing::THUMBNAIL_EXTRACT_WIDTH,
                ),
                |(source, result)| Message::ThumbnailLoaded { source, result },
            ));
        }
        Task::batch(pending)
    }

    pub fn view<'a>(&'a self, env: ViewEnv<'a>) -> Element<'a, Message> {
        let header = self.header(env.i18n);

        let body: Element<'a, Message> = if self.gallery.access() == AccessState::Denied {
            permission_notice(env.i18n)
        } else {
            self.grid(&env)
        };

        Column::new()
            .width(Length::Fill)
            .height(Length::Fill)
            .push(header)
            .push(body)
            .into()
    }

    fn header<'a>(&self, i18n: &I18n) -> Element<'a, Message> {
        let count = self.gallery.len().to_string();
        let title = Text::new(i18n.tr("header-title"))
            .size(typography::TITLE_LG)
            .color(palette::WHITE);
        let subtitle = Text::new(i18n.tr_with_args("header-video-count", &[("count", &count)]))
            .size(typography::BODY_LG)
            .color(palette::GRAY_400);

        Container::new(Column::new().spacing(spacing::XS).push(title).push(subtitle))
            .padding([spacing::LG, spacing::MD])
            .width(Length::Fill)
            .into()
    }

    fn grid<'a>(&'a self, env: &ViewEnv<'a>) -> Element<'a, Message> {
        let layout = env.layout;
        let mut rows = Column::new()
            .spacing(layout.gutter())
            .padding([0.0, layout.gutter()])
            .width(Length::Fill);

        for (row_index, chunk) in self.gallery.assets().chunks(layout::COLUMNS).enumerate() {
            let mut row = Row::new().spacing(layout.gutter());
            for (column, asset) in chunk.iter().enumerate() {
                let index = row_index * layout::COLUMNS + column;
                row = row.push(card::view(
                    index,
                    asset,
                    self.thumbnails.get(&asset.source),
                    layout,
                    env.i18n,
                ));
            }
            for _ in chunk.len()..layout::COLUMNS {
                row = row.push(card::filler(layout));
            }
            rows = rows.push(row);
        }

        if self.gallery.load_state() == LoadState::Loading {
            rows = rows.push(self.footer(env.i18n));
        }

        Scrollable::new(rows)
            .id(Id::new(SCROLLABLE_ID))
            .width(Length::Fill)
            .height(Length::Fill)
            .on_scroll(|viewport: Viewport| {
                Message::Scrolled(ScrollMetrics::from_viewport(&viewport))
            })
            .into()
    }

    fn footer<'a>(&self, i18n: &I18n) -> Element<'a, Message> {
        let spinner = AnimatedSpinner::new(palette::ACCENT_500, self.spinner_rotation)
            .into_element();
        let label = Text::new(i18n.tr("loading-more"))
            .size(typography::BODY_LG)
            .color(palette::GRAY_400);

        Container::new(
            Column::new()
                .spacing(spacing::SM)
                .align_x(alignment::Horizontal::Center)
                .push(spinner)
                .push(label),
        )
        .padding(spacing::LG)
        .center_x(Length::Fill)
        .into()
    }
}

fn fetch(ticket: FetchTicket, services: &Services) -> Task<Message> {
    let request = ticket.request().clone();
    Task::perform(
        tasks::fetch_page(Arc::clone(&services.library), request),
        move |result| Message::PageLoaded { ticket, result },
    )
}

fn permission_notice<'a>(i18n: &I18n) -> Element<'a, Message> {
    let title = Text::new(i18n.tr("permission-required"))
        .size(typography::TITLE_SM)
        .color(palette::WHITE)
        .align_x(alignment::Horizontal::Center);
    let hint = Text::new(i18n.tr("permission-empty-state"))
        .size(typography::BODY_LG)
        .color(palette::GRAY_400)
        .align_x(alignment::Horizontal::Center);

    Container::new(
        Column::new()
            .spacing(spacing::SM)
            .align_x(alignment::Horizontal::Center)
            .push(title)
            .push(hint),
    )
    .padding(spacing::XL)
    .center(Length::Fill)
    .into()
}
