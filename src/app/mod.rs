// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the grid and the player.
//!
//! The `App` struct wires the gallery, the playback view, localization and
//! settings together, and turns component effects into side effects like
//! the permission dialog or window mode changes.

pub mod config;
mod message;
pub mod paths;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::application::port::PlaybackEngine;
use crate::domain::library::VideoAsset;
use crate::i18n::fluent::I18n;
use crate::infrastructure::{ffmpeg, DirectoryLibrary, FfmpegEngine, FfmpegThumbnailer};
use crate::ui::gallery::{self, GridLayout};
use crate::ui::player;
use config::Config;
use iced::{window, Element, Size, Subscription, Task, Theme};
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Capabilities the application hands to its screens.
#[derive(Clone)]
pub struct Services {
    pub gallery: gallery::Services,
    pub engine: Arc<dyn PlaybackEngine>,
}

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    gallery: gallery::State,
    services: Services,
    config: Config,
    fullscreen: bool,
    window_id: Option<window::Id>,
    window_size: Size,
    /// Identifies the next playback subscription.
    next_session_id: u64,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("videos", &self.gallery.gallery().len())
            .field("fullscreen", &self.fullscreen)
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 760;
pub const WINDOW_DEFAULT_WIDTH: u32 = 480;
pub const MIN_WINDOW_HEIGHT: u32 = 400;
pub const MIN_WINDOW_WIDTH: u32 = 320;

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: default_window_size(),
        min_size: Some(Size::new(MIN_WINDOW_WIDTH as f32, MIN_WINDOW_HEIGHT as f32)),
        ..window::Settings::default()
    }
}

fn default_window_size() -> Size {
    Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32)
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 boots through an `Fn`, but the flags are consumed once
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads settings and translations, builds the desktop adapters, and
    /// starts the gallery.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = config::load();

        let i18n = I18n::new(
            flags.lang.clone(),
            flags.i18n_dir.as_deref().map(Path::new),
            &config,
        );
        tracing::info!(locale = %i18n.current_locale(), "translations loaded");

        if let Err(error) = ffmpeg::init_ffmpeg() {
            tracing::error!(%error, "FFmpeg unavailable; thumbnails and playback will fail");
        }

        let directory = flags
            .library
            .map(PathBuf::from)
            .or_else(|| config.library_directory())
            .unwrap_or_default();
        tracing::info!(directory = %directory.display(), "opening video library");

        let services = Services {
            gallery: gallery::Services {
                library: Arc::new(DirectoryLibrary::new(directory)),
                thumbnails: Arc::new(FfmpegThumbnailer::new()),
            },
            engine: Arc::new(FfmpegEngine::new()),
        };

        Self::with_services(config, i18n, services)
    }

    /// Builds the application over the given capabilities and asks the
    /// library for access.
    pub fn with_services(config: Config, i18n: I18n, services: Services) -> (Self, Task<Message>) {
        let gallery = gallery::State::new(config.load_threshold());
        let app = Self {
            i18n,
            screen: Screen::Grid,
            gallery,
            services,
            config,
            fullscreen: false,
            window_id: None,
            window_size: default_window_size(),
            next_session_id: 0,
        };
        let task = app
            .gallery
            .initialize(&app.services.gallery)
            .map(Message::Gallery);
        (app, task)
    }

    #[must_use]
    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    #[must_use]
    pub fn gallery(&self) -> &gallery::State {
        &self.gallery
    }

    #[must_use]
    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    /// Replaces the grid with the playback view for `asset`.
    pub fn select_video(&mut self, asset: VideoAsset) {
        tracing::debug!(id = %asset.id, "opening video");
        let session_id = self.next_session_id;
        self.next_session_id = self.next_session_id.wrapping_add(1);
        self.screen = Screen::Playing(Box::new(player::State::new(
            asset,
            session_id,
            self.config.autoplay(),
        )));
    }

    /// Returns to the grid, which keeps its list, cursor and scroll position.
    pub fn dismiss_playback(&mut self) -> Task<Message> {
        if self.screen.is_grid() {
            return Task::none();
        }
        self.screen = Screen::Grid;
        let leave_fullscreen =
            update::update_fullscreen_mode(&mut self.fullscreen, self.window_id.as_ref(), false);
        let restore = self.gallery.restore_scroll().map(Message::Gallery);
        Task::batch([leave_fullscreen, restore])
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        match self.screen.player() {
            Some(player) => {
                let untitled = self.i18n.tr("untitled-video");
                let name = player.asset().display_name_or(&untitled);
                format!("{name} - {app_name}")
            }
            None => app_name,
        }
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_tick_subscription(&self.screen, self.gallery.is_loading()),
            subscription::create_video_subscription(&self.screen, &self.services.engine),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Gallery(message) => self.handle_gallery_message(message),
            Message::Player(message) => self.handle_player_message(message),
            Message::WindowResized { id, size } => {
                self.window_id = Some(id);
                self.window_size = size;
                self.gallery
                    .set_window(
                        GridLayout::from_window_width(size.width),
                        size.height,
                        &self.services.gallery,
                    )
                    .map(Message::Gallery)
            }
            Message::EscapePressed => {
                if self.screen.is_grid() {
                    Task::none()
                } else if self.fullscreen {
                    update::update_fullscreen_mode(
                        &mut self.fullscreen,
                        self.window_id.as_ref(),
                        false,
                    )
                } else {
                    self.dismiss_playback()
                }
            }
            Message::PermissionAlertClosed => Task::none(),
            Message::Tick(_) => self.handle_gallery_message(gallery::Message::SpinnerTick),
        }
    }

    fn handle_gallery_message(&mut self, message: gallery::Message) -> Task<Message> {
        let (effect, task) = self
            .gallery
            .handle_message(message, &self.services.gallery);
        let task = task.map(Message::Gallery);

        let follow_up = match effect {
            gallery::Effect::None => Task::none(),
            gallery::Effect::AccessDenied => update::permission_alert(&self.i18n),
            gallery::Effect::PlayVideo(asset) => {
                self.select_video(asset);
                Task::none()
            }
        };
        Task::batch([task, follow_up])
    }

    fn handle_player_message(&mut self, message: player::Message) -> Task<Message> {
        let Screen::Playing(state) = &mut self.screen else {
            tracing::debug!("dropping player message outside playback");
            return Task::none();
        };
        let (effect, task) = state.handle_message(message);
        let task = task.map(Message::Player);

        let follow_up = match effect {
            player::Effect::None => Task::none(),
            player::Effect::Dismiss => self.dismiss_playback(),
            player::Effect::ToggleFullscreen => {
                update::toggle_fullscreen(&mut self.fullscreen, self.window_id.as_ref())
            }
        };
        Task::batch([task, follow_up])
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            screen: &self.screen,
            gallery: &self.gallery,
            window_size: self.window_size,
            fullscreen: self.fullscreen,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::port::{MediaLibrary, PlayerSession, ThumbnailExtractor};
    use crate::domain::error::{LibraryError, VideoError};
    use crate::domain::library::{
        AccessStatus, AssetId, AssetPage, PageCursor, PageRequest, SourceUri, PAGE_SIZE,
    };
    use crate::domain::video::RawFrame;
    use crate::ui::player::controls;
    use std::time::{Duration, SystemTime};

    struct EmptyLibrary;

    impl MediaLibrary for EmptyLibrary {
        fn request_access(&self) -> AccessStatus {
            AccessStatus::Granted
        }

        fn list_assets(&self, _request: &PageRequest) -> Result<AssetPage, LibraryError> {
            Ok(AssetPage::empty())
        }
    }

    struct NoThumbnails;

    impl ThumbnailExtractor for NoThumbnails {
        fn extract(&self, _source: &SourceUri, _max_width: u32) -> Result<RawFrame, VideoError> {
            Err(VideoError::NoVideoStream)
        }
    }

    struct NoEngine;

    impl PlaybackEngine for NoEngine {
        fn create_player(&self, _source: &SourceUri) -> Result<PlayerSession, VideoError> {
            Err(VideoError::NoVideoStream)
        }
    }

    fn test_app() -> App {
        let services = Services {
            gallery: gallery::Services {
                library: Arc::new(EmptyLibrary),
                thumbnails: Arc::new(NoThumbnails),
            },
            engine: Arc::new(NoEngine),
        };
        let (app, _task) = App::with_services(Config::default(), I18n::default(), services);
        app
    }

    fn asset(i: usize) -> VideoAsset {
        VideoAsset {
            id: AssetId::new(format!("v{i}")),
            source: SourceUri::new(format!("/videos/v{i}.mp4")),
            display_name: Some(format!("Clip {i}")),
            created_at: SystemTime::UNIX_EPOCH + Duration::from_secs(50_000 - i as u64),
            duration_secs: Some(125.0),
        }
    }

    /// Grants access and delivers one full page through the root update.
    fn load_first_page(app: &mut App) {
        let ticket = app
            .gallery
            .gallery_mut()
            .resolve_access(AccessStatus::Granted)
            .expect("granted access starts a fetch");
        let page = AssetPage {
            items: (0..PAGE_SIZE).map(asset).collect(),
            next_cursor: Some(PageCursor::new("cursor-20")),
            has_more: true,
        };
        let _ = app.update(Message::Gallery(gallery::Message::PageLoaded {
            ticket,
            result: Ok(page),
        }));
    }

    #[test]
    fn starts_on_the_grid() {
        let app = test_app();
        assert!(app.screen().is_grid());
        assert!(app.gallery().gallery().is_empty());
        assert!(!app.is_fullscreen());
    }

    #[test]
    fn selecting_a_card_opens_the_player() {
        let mut app = test_app();
        load_first_page(&mut app);

        let _ = app.update(Message::Gallery(gallery::Message::Select(3)));

        let player = app.screen().player().expect("player open");
        assert_eq!(player.asset().id, AssetId::new("v3"));
    }

    #[test]
    fn select_then_dismiss_preserves_gallery_state() {
        let mut app = test_app();
        load_first_page(&mut app);
        let before = app.gallery().gallery().clone();

        app.select_video(asset(0));
        let _ = app.dismiss_playback();

        let after = app.gallery().gallery();
        assert!(app.screen().is_grid());
        assert_eq!(after.assets(), before.assets());
        assert_eq!(after.cursor(), before.cursor());
        assert_eq!(after.has_more(), before.has_more());
        assert_eq!(after.load_state(), before.load_state());
    }

    #[test]
    fn access_denied_leaves_the_grid_empty() {
        let mut app = test_app();

        let _ = app.update(Message::Gallery(gallery::Message::AccessResolved(
            AccessStatus::Denied,
        )));

        assert!(app.gallery().gallery().is_empty());
        assert!(!app.gallery().is_loading());
        assert!(app.screen().is_grid());
    }

    #[test]
    fn escape_dismisses_playback() {
        let mut app = test_app();
        app.select_video(asset(1));

        let _ = app.update(Message::EscapePressed);

        assert!(app.screen().is_grid());
    }

    #[test]
    fn escape_on_grid_does_nothing() {
        let mut app = test_app();
        load_first_page(&mut app);

        let _ = app.update(Message::EscapePressed);

        assert!(app.screen().is_grid());
        assert_eq!(app.gallery().gallery().len(), PAGE_SIZE);
    }

    #[test]
    fn escape_leaves_fullscreen_before_dismissing() {
        let mut app = test_app();
        let _ = app.update(Message::WindowResized {
            id: window::Id::unique(),
            size: Size::new(480.0, 760.0),
        });
        app.select_video(asset(2));

        let _ = app.update(Message::Player(player::Message::Controls(
            controls::Message::ToggleFullscreen,
        )));
        assert!(app.is_fullscreen());

        let _ = app.update(Message::EscapePressed);
        assert!(!app.is_fullscreen());
        assert!(app.screen().player().is_some());

        let _ = app.update(Message::EscapePressed);
        assert!(app.screen().is_grid());
    }

    #[test]
    fn back_control_dismisses_and_leaves_fullscreen() {
        let mut app = test_app();
        let _ = app.update(Message::WindowResized {
            id: window::Id::unique(),
            size: Size::new(480.0, 760.0),
        });
        app.select_video(asset(4));
        let _ = app.update(Message::Player(player::Message::Controls(
            controls::Message::ToggleFullscreen,
        )));

        let _ = app.update(Message::Player(player::Message::Back));

        assert!(app.screen().is_grid());
        assert!(!app.is_fullscreen());
    }

    #[test]
    fn player_messages_on_grid_are_dropped() {
        let mut app = test_app();
        let _ = app.update(Message::Player(player::Message::Back));
        assert!(app.screen().is_grid());
    }

    #[test]
    fn each_selection_gets_a_new_session() {
        let mut app = test_app();
        app.select_video(asset(0));
        let _ = app.dismiss_playback();
        app.select_video(asset(0));
        assert_eq!(app.next_session_id, 2);
    }

    #[test]
    fn title_names_the_playing_video() {
        let mut app = test_app();
        assert_eq!(app.title(), "ReelPlay");

        app.select_video(asset(7));
        assert_eq!(app.title(), "Clip 7 - ReelPlay");
    }
}
