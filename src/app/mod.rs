// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct wires the gallery component, localization, settings and
//! toast notifications together, and turns gallery effects into platform
//! work (opening a document, saving a copy).

pub mod config;
mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::i18n::fluent::I18n;
use crate::infrastructure::catalog;
use crate::ui::gallery;
use crate::ui::notifications::{self, Notification};
use crate::ui::theming::ThemeMode;
use config::Config;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::{Path, PathBuf};

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    gallery: gallery::State,
    theme_mode: ThemeMode,
    /// Cards per grid row, already clamped.
    columns: u16,
    /// Thumbnail height, already clamped.
    thumbnail_height: f32,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("documents", &self.gallery.catalog().len())
            .field("preview", &self.gallery.preview_state())
            .finish_non_exhaustive()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1024;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 640;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
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
    /// Loads settings and the catalog, then builds the initial state.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let base_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        let app = Self::from_parts(flags, &config, config_warning, &base_dir);
        (app, Task::none())
    }

    /// Builds the application from already-loaded settings.
    ///
    /// The catalog manifest comes from `--catalog`, then `gallery.catalog`;
    /// without either, the built-in documents under `base_dir` are used.
    fn from_parts(
        flags: Flags,
        config: &Config,
        config_warning: Option<String>,
        base_dir: &Path,
    ) -> Self {
        let i18n = I18n::new(flags.lang, config);

        let manifest = flags
            .catalog
            .map(PathBuf::from)
            .or_else(|| config.gallery.catalog.clone());
        let (catalog, catalog_warning) = catalog::resolve_catalog(manifest.as_deref(), base_dir);

        let mut notifications = notifications::Manager::new();
        for key in [config_warning, catalog_warning].into_iter().flatten() {
            notifications.push(Notification::warning(key));
        }

        Self {
            i18n,
            gallery: gallery::State::new(catalog, config.gallery.default_category),
            theme_mode: config.general.theme_mode,
            columns: config.gallery.columns(),
            thumbnail_height: config.gallery.thumbnail_height(),
            notifications,
        }
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        match self.gallery.previewed_record() {
            Some(record) => format!("{} - {app_name}", record.title()),
            None => app_name,
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        let keyboard_sub =
            subscription::create_keyboard_subscription(self.gallery.listens_for_keys());
        let tick_sub =
            subscription::create_tick_subscription(self.notifications.has_notifications());

        Subscription::batch([keyboard_sub, tick_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            gallery: &mut self.gallery,
            notifications: &mut self.notifications,
        };

        match message {
            Message::Gallery(gallery_message) => {
                update::handle_gallery_message(&mut ctx, gallery_message)
            }
            Message::DownloadFinished { file_name, result } => {
                update::handle_download_finished(&mut ctx, file_name, result)
            }
            Message::Notification(notification_message) => {
                self.notifications.handle_message(&notification_message);
                Task::none()
            }
            Message::Tick(now) => {
                self.notifications.tick(now);
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            gallery: &self.gallery,
            notifications: &self.notifications,
            columns: self.columns,
            thumbnail_height: self.thumbnail_height,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::document::CategoryFilter;
    use crate::navigator::{PreviewAction, PreviewState};
    use std::fs;
    use tempfile::tempdir;

    fn app_with(flags: Flags, config: &Config) -> App {
        App::from_parts(flags, config, None, Path::new("/base"))
    }

    #[test]
    fn starts_with_builtin_catalog_and_closed_preview() {
        let app = app_with(Flags::default(), &Config::default());
        assert_eq!(app.gallery.catalog().len(), 4);
        assert_eq!(app.gallery.filtered().len(), 4);
        assert_eq!(app.gallery.preview_state(), PreviewState::Closed);
        assert!(!app.notifications.has_notifications());
    }

    #[test]
    fn config_sets_initial_category_and_layout() {
        let mut config = Config::default();
        config.gallery.default_category = CategoryFilter::Offer;
        config.gallery.columns = Some(99);

        let app = app_with(Flags::default(), &config);
        assert_eq!(app.gallery.filter().category, CategoryFilter::Offer);
        assert_eq!(app.gallery.filtered().len(), 2);
        assert_eq!(app.columns, config::defaults::MAX_COLUMNS);
    }

    #[test]
    fn warnings_become_toasts() {
        let dir = tempdir().expect("create temp dir");
        let manifest = dir.path().join("catalog.toml");
        fs::write(&manifest, "[[documents]]\ntitle = 1").expect("write manifest");

        let flags = Flags {
            catalog: Some(manifest.to_string_lossy().into_owned()),
            ..Flags::default()
        };
        let app = App::from_parts(
            flags,
            &Config::default(),
            Some("notification-config-load-error".into()),
            dir.path(),
        );

        assert_eq!(app.gallery.catalog().len(), 4);
        let keys: Vec<_> = app
            .notifications
            .visible()
            .map(Notification::message_key)
            .collect();
        assert_eq!(
            keys,
            vec![
                "notification-catalog-parse-error",
                "notification-config-load-error"
            ]
        );
    }

    #[test]
    fn cli_catalog_overrides_config_catalog() {
        let dir = tempdir().expect("create temp dir");
        let manifest = dir.path().join("catalog.toml");
        fs::write(
            &manifest,
            "[[documents]]\ntitle = \"Only\"\ncategory = \"offer\"\nimage = \"a.jpg\"\nfile = \"a.pdf\"\n",
        )
        .expect("write manifest");

        let mut config = Config::default();
        config.gallery.catalog = Some(dir.path().join("missing.toml"));
        let flags = Flags {
            catalog: Some(manifest.to_string_lossy().into_owned()),
            ..Flags::default()
        };

        let app = app_with(flags, &config);
        assert_eq!(app.gallery.catalog().len(), 1);
        assert!(!app.notifications.has_notifications());
    }

    #[test]
    fn title_follows_preview() {
        let mut app = app_with(Flags::default(), &Config::default());
        assert_eq!(app.title(), "DocGallery");

        let _ = app.update(Message::Gallery(gallery::Message::ThumbnailPressed(1)));
        assert_eq!(app.title(), "Offer Letter - Company XYZ - DocGallery");

        let _ = app.update(Message::Gallery(gallery::Message::Preview(
            PreviewAction::Close,
        )));
        assert_eq!(app.title(), "DocGallery");
    }

    #[test]
    fn keyboard_scope_tracks_preview() {
        let mut app = app_with(Flags::default(), &Config::default());
        assert!(!app.gallery.listens_for_keys());

        let _ = app.update(Message::Gallery(gallery::Message::ThumbnailPressed(0)));
        assert!(app.gallery.listens_for_keys());

        let _ = app.update(Message::Gallery(gallery::Message::Preview(
            PreviewAction::Close,
        )));
        assert!(!app.gallery.listens_for_keys());
    }
}
