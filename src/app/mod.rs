// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the cover, the book and
//! the overlays.
//!
//! The `App` struct wires together the domains (diary, storage, localization)
//! and translates component events into side effects like saving, sharing or
//! image loading.

mod message;
pub mod paths;
pub mod persisted_state;
mod persistence;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::config::{self, Config};
use crate::domain::diary::{Diary, DiaryId};
use crate::i18n::fluent::I18n;
use crate::share::ShareLink;
use crate::storage::DiaryStore;
use crate::ui::book;
use crate::ui::diary_browser;
use crate::ui::notifications::{self, Notification};
use crate::ui::share_dialog;
use crate::ui::theming::{ColorScheme, ThemeMode};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    config: Config,
    store: DiaryStore,
    diary: Diary,
    /// The open diary came from a share link.
    shared: bool,
    book: book::State,
    share_dialog: Option<share_dialog::State>,
    diary_browser: diary_browser::State,
    theme_mode: ThemeMode,
    colors: ColorScheme,
    /// Persisted application state (last diary, last image directory).
    app_state: persisted_state::AppState,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("diary", &self.diary.id)
            .field("shared", &self.shared)
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1000;
pub const MIN_WINDOW_HEIGHT: u32 = 560;
pub const MIN_WINDOW_WIDTH: u32 = 720;

/// Builds the window settings
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

    // iced 0.14 requires an `Fn` boot; the flags are only consumed once.
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
    /// Loads configuration, state and the starting diary.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), flags.i18n_dir.clone(), &config);
        let (app_state, state_warning) = persisted_state::AppState::load();
        let (store, store_warning) = persistence::open_store(None);

        let mut notifications = notifications::Manager::new();
        for key in [config_warning, state_warning, store_warning]
            .into_iter()
            .flatten()
        {
            notifications.push(Notification::warning(key));
        }

        let requested: Option<DiaryId> = match flags.link.as_deref().map(ShareLink::parse) {
            Some(Ok(link)) => Some(link.into_diary_id()),
            Some(Err(err)) => {
                tracing::warn!(error = %err, "ignoring invalid share link");
                notifications.push(Notification::warning("notification-invalid-link"));
                None
            }
            None => None,
        };

        let opened = persistence::resolve_startup(
            &store,
            requested.as_ref(),
            app_state.last_diary_id.as_deref(),
            config.reopen_last(),
        );
        if let Some(notice) = opened.notice {
            notifications.push(notice);
        }

        // A link opens straight into the book.
        let screen = if requested.is_some() {
            Screen::Book
        } else {
            Screen::Cover
        };

        let theme_mode = config.general.theme_mode;
        let book = book::State::new(&opened.diary);

        tracing::info!(
            diary = %opened.diary.id,
            pages = opened.diary.page_count(),
            shared = opened.shared,
            "scrapbook ready"
        );

        let app = App {
            i18n,
            screen,
            config,
            store,
            diary: opened.diary,
            shared: opened.shared,
            book,
            share_dialog: None,
            diary_browser: diary_browser::State::default(),
            theme_mode,
            colors: theme_mode.colors(),
            app_state,
            notifications,
        };

        (app, Task::none())
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        match self.screen {
            Screen::Cover => app_name,
            Screen::Book => format!("{} - {app_name}", self.diary.id),
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription(self.screen);
        let tick_sub =
            subscription::create_tick_subscription(self.notifications.has_notifications());
        let book_sub = if self.screen == Screen::Book {
            self.book.subscription().map(Message::Book)
        } else {
            Subscription::none()
        };

        Subscription::batch([event_sub, tick_sub, book_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            screen: &mut self.screen,
            config: &self.config,
            store: &self.store,
            diary: &mut self.diary,
            shared: &mut self.shared,
            book: &mut self.book,
            share_dialog: &mut self.share_dialog,
            diary_browser: &mut self.diary_browser,
            persisted: &mut self.app_state,
            state_dir: None,
            notifications: &mut self.notifications,
        };

        match message {
            Message::Cover(cover_message) => update::handle_cover_message(&mut ctx, &cover_message),
            Message::Book(book_message) => update::handle_book_message(&mut ctx, book_message),
            Message::ShareDialog(dialog_message) => {
                update::handle_share_dialog_message(&mut ctx, dialog_message)
            }
            Message::DiaryBrowser(browser_message) => {
                update::handle_diary_browser_message(&mut ctx, browser_message)
            }
            Message::Notification(notification_message) => {
                ctx.notifications.handle_message(&notification_message);
                Task::none()
            }
            Message::ImagePicked { page, path } => {
                update::handle_image_picked(&mut ctx, page, path)
            }
            Message::ImageLoaded { page, path, result } => {
                update::handle_image_loaded(&mut ctx, &page, &path, result)
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            screen: self.screen,
            colors: &self.colors,
            cover_title: self.config.book.cover_title.as_deref(),
            diary: &self.diary,
            shared: self.shared,
            book: &self.book,
            share_dialog: self.share_dialog.as_ref(),
            diary_browser: &self.diary_browser,
            notifications: &self.notifications,
        })
    }
}
