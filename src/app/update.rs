// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Components report what happened through their `Event` types; the handlers
//! here turn those events into storage calls, dialogs and notifications.

use super::persisted_state::AppState;
use super::{persistence, Message, Screen};
use crate::config::Config;
use crate::domain::diary::{Diary, DiaryId, PageId};
use crate::error::Error;
use crate::media::{self, PageImage};
use crate::share::ShareLink;
use crate::storage::DiaryStore;
use crate::ui::book;
use crate::ui::cover;
use crate::ui::diary_browser;
use crate::ui::notifications::{self, Notification};
use crate::ui::share_dialog;
use iced::Task;
use std::path::{Path, PathBuf};

/// Context for update operations containing mutable references to app state.
pub struct UpdateContext<'a> {
    pub screen: &'a mut Screen,
    pub config: &'a Config,
    pub store: &'a DiaryStore,
    pub diary: &'a mut Diary,
    pub shared: &'a mut bool,
    pub book: &'a mut book::State,
    pub share_dialog: &'a mut Option<share_dialog::State>,
    pub diary_browser: &'a mut diary_browser::State,
    pub persisted: &'a mut AppState,
    /// Overrides where the persisted state is written.
    pub state_dir: Option<&'a Path>,
    pub notifications: &'a mut notifications::Manager,
}

impl UpdateContext<'_> {
    /// Replaces the open diary and resets the book view.
    fn replace_diary(&mut self, diary: Diary, shared: bool) {
        tracing::debug!(diary = %diary.id, shared, "switching diary");
        *self.diary = diary;
        *self.book = book::State::new(self.diary);
        *self.shared = shared;
        *self.screen = Screen::Book;
        self.remember_diary();
    }

    fn remember_diary(&mut self) {
        self.persisted.last_diary_id = Some(self.diary.id.as_str().to_string());
        self.persist_state();
    }

    fn persist_state(&mut self) {
        if let Some(key) = self.persisted.save_to(self.state_dir.map(Path::to_path_buf)) {
            self.notifications.push(Notification::warning(key));
        }
    }

    fn refresh_browser(&mut self) {
        match self.store.summaries() {
            Ok(entries) => self.diary_browser.set_entries(entries),
            Err(err) => {
                tracing::warn!(error = %err, "failed to list diaries");
                self.notifications.push(Notification::error(err.i18n_key()));
            }
        }
    }

    fn save(&mut self) -> bool {
        let notice = persistence::save_diary(self.store, self.diary);
        let saved = notice.severity() != notifications::Severity::Error;
        self.notifications.push(notice);
        if saved {
            self.remember_diary();
            if self.diary_browser.is_open() {
                self.refresh_browser();
            }
        }
        saved
    }
}

pub fn handle_cover_message(ctx: &mut UpdateContext<'_>, message: &cover::Message) -> Task<Message> {
    match cover::update(message) {
        cover::Event::None => {}
        cover::Event::OpenBook => *ctx.screen = Screen::Book,
    }
    Task::none()
}

pub fn handle_book_message(ctx: &mut UpdateContext<'_>, message: book::Message) -> Task<Message> {
    let event = ctx.book.update(
        message,
        book::UpdateContext {
            diary: &mut *ctx.diary,
            editor: &ctx.config.editor,
        },
    );

    match event {
        book::Event::None => Task::none(),
        book::Event::SaveRequested => {
            ctx.save();
            Task::none()
        }
        book::Event::ShareRequested => {
            ctx.save();
            *ctx.share_dialog = Some(share_dialog::State::new(ShareLink::new(
                ctx.diary.id.clone(),
            )));
            Task::none()
        }
        book::Event::PageAdded => {
            ctx.notifications
                .push(Notification::success("notification-page-added"));
            Task::none()
        }
        book::Event::ImageRequested(page) => {
            handle_open_image_dialog(page, ctx.persisted.last_image_directory.clone())
        }
        book::Event::CloseRequested => {
            *ctx.share_dialog = None;
            *ctx.screen = Screen::Cover;
            Task::none()
        }
    }
}

/// Opens the image picker for a page.
pub fn handle_open_image_dialog(page: PageId, last_directory: Option<PathBuf>) -> Task<Message> {
    Task::perform(
        async move {
            let mut dialog =
                rfd::AsyncFileDialog::new().add_filter("Images", &media::SUPPORTED_EXTENSIONS);

            if let Some(dir) = last_directory {
                if dir.exists() {
                    dialog = dialog.set_directory(&dir);
                }
            }

            dialog.pick_file().await.map(|h| h.path().to_path_buf())
        },
        move |path| Message::ImagePicked {
            page: page.clone(),
            path,
        },
    )
}

/// Handles the result of the image picker.
pub fn handle_image_picked(
    ctx: &mut UpdateContext<'_>,
    page: PageId,
    path: Option<PathBuf>,
) -> Task<Message> {
    let Some(path) = path else {
        ctx.book.image_request_finished();
        return Task::none();
    };

    let source = path.clone();
    Task::perform(
        async move { media::load_page_image(&source) },
        move |result| Message::ImageLoaded {
            page: page.clone(),
            path: path.clone(),
            result,
        },
    )
}

/// Handles a decoded (or failed) page image.
pub fn handle_image_loaded(
    ctx: &mut UpdateContext<'_>,
    page: &PageId,
    path: &Path,
    result: Result<PageImage, Error>,
) -> Task<Message> {
    match result {
        Ok(image) => {
            if ctx.book.apply_image(ctx.diary, page, image) {
                ctx.persisted.set_last_image_directory_from_file(path);
                ctx.persist_state();
            } else {
                tracing::debug!(page = %page.as_str(), "page vanished before its image loaded");
            }
        }
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "failed to load page image");
            ctx.book.image_request_finished();
            let name = path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default();
            ctx.notifications
                .push(Notification::error("notification-image-error").with_arg("name", name));
        }
    }
    Task::none()
}

pub fn handle_share_dialog_message(
    ctx: &mut UpdateContext<'_>,
    message: share_dialog::Message,
) -> Task<Message> {
    let Some(dialog) = ctx.share_dialog.as_mut() else {
        return Task::none();
    };

    match dialog.update(message) {
        share_dialog::Event::None => Task::none(),
        share_dialog::Event::Copy(text) => {
            ctx.notifications
                .push(Notification::success("notification-link-copied"));
            iced::clipboard::write(text)
        }
        share_dialog::Event::OpenLink(link) => {
            *ctx.share_dialog = None;
            open_link(ctx, &link);
            Task::none()
        }
        share_dialog::Event::Close => {
            *ctx.share_dialog = None;
            Task::none()
        }
    }
}

pub fn handle_diary_browser_message(
    ctx: &mut UpdateContext<'_>,
    message: diary_browser::Message,
) -> Task<Message> {
    match ctx.diary_browser.update(message) {
        diary_browser::Event::None => {}
        diary_browser::Event::RefreshRequested => ctx.refresh_browser(),
        diary_browser::Event::Open(id) => open_saved(ctx, &id),
        diary_browser::Event::Delete(id) => delete_diary(ctx, &id),
        diary_browser::Event::NewDiary => {
            ctx.replace_diary(Diary::new(), false);
            ctx.notifications
                .push(Notification::info("notification-diary-created"));
        }
        diary_browser::Event::OpenLink(input) => match ShareLink::parse(&input) {
            Ok(link) => open_link(ctx, &link),
            Err(_) => {
                ctx.notifications
                    .push(Notification::warning("notification-invalid-link"));
            }
        },
    }
    Task::none()
}

/// Opens the diary a share link points at, falling back like startup does.
fn open_link(ctx: &mut UpdateContext<'_>, link: &ShareLink) {
    let opened = persistence::open_shared(ctx.store, link.diary_id());
    if let Some(notice) = opened.notice {
        ctx.notifications.push(notice);
    }
    ctx.replace_diary(opened.diary, opened.shared);
}

/// Opens a saved diary the way its share link would.
fn open_saved(ctx: &mut UpdateContext<'_>, id: &DiaryId) {
    open_link(ctx, &ShareLink::new(id.clone()));
}

fn delete_diary(ctx: &mut UpdateContext<'_>, id: &DiaryId) {
    match ctx.store.delete(id) {
        Ok(_) => {
            tracing::info!(diary = %id, "diary deleted");
            ctx.notifications
                .push(Notification::info("notification-diary-deleted"));
        }
        Err(err) => {
            tracing::error!(diary = %id, error = %err, "failed to delete diary");
            ctx.notifications.push(Notification::error(err.i18n_key()));
        }
    }
    ctx.refresh_browser();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{Lookup, MemoryStore};

    struct Harness {
        screen: Screen,
        config: Config,
        store: DiaryStore,
        diary: Diary,
        shared: bool,
        book: book::State,
        share_dialog: Option<share_dialog::State>,
        diary_browser: diary_browser::State,
        persisted: AppState,
        state_dir: tempfile::TempDir,
        notifications: notifications::Manager,
    }

    impl Harness {
        fn new(store: DiaryStore) -> Self {
            let diary = Diary::with_id(DiaryId::parse("home").expect("id"));
            let book = book::State::new(&diary);
            Self {
                screen: Screen::Book,
                config: Config::default(),
                store,
                diary,
                shared: false,
                book,
                share_dialog: None,
                diary_browser: diary_browser::State::default(),
                persisted: AppState::default(),
                state_dir: tempfile::tempdir().expect("tempdir"),
                notifications: notifications::Manager::new(),
            }
        }

        fn ctx(&mut self) -> UpdateContext<'_> {
            UpdateContext {
                screen: &mut self.screen,
                config: &self.config,
                store: &self.store,
                diary: &mut self.diary,
                shared: &mut self.shared,
                book: &mut self.book,
                share_dialog: &mut self.share_dialog,
                diary_browser: &mut self.diary_browser,
                persisted: &mut self.persisted,
                state_dir: Some(self.state_dir.path()),
                notifications: &mut self.notifications,
            }
        }

        fn latest_key(&self) -> Option<String> {
            self.notifications
                .visible()
                .next()
                .map(|n| n.message_key().to_string())
        }
    }

    #[test]
    fn cover_opens_the_book() {
        let mut h = Harness::new(DiaryStore::in_memory());
        h.screen = Screen::Cover;
        let _ = handle_cover_message(&mut h.ctx(), &cover::Message::OpenBook);
        assert_eq!(h.screen, Screen::Book);
    }

    #[test]
    fn closing_the_book_returns_to_the_cover() {
        let mut h = Harness::new(DiaryStore::in_memory());
        let _ = handle_book_message(&mut h.ctx(), book::Message::Close);
        assert_eq!(h.screen, Screen::Cover);
    }

    #[test]
    fn opening_a_link_to_a_missing_diary_starts_fresh() {
        let mut h = Harness::new(DiaryStore::in_memory());
        let _ = handle_diary_browser_message(
            &mut h.ctx(),
            diary_browser::Message::LinkInputChanged("scrapbook://open?diary=ghost".into()),
        );
        let _ = handle_diary_browser_message(&mut h.ctx(), diary_browser::Message::SubmitLink);

        assert!(!h.shared);
        assert_ne!(h.diary.id.as_str(), "home");
        assert_eq!(h.latest_key().as_deref(), Some("notification-diary-not-found"));
    }

    #[test]
    fn opening_a_link_to_a_saved_diary_enters_shared_view() {
        let store = DiaryStore::in_memory();
        store
            .save(&Diary::with_id(DiaryId::parse("trip").expect("id")))
            .expect("save");
        let mut h = Harness::new(store);

        let _ = handle_diary_browser_message(
            &mut h.ctx(),
            diary_browser::Message::LinkInputChanged("trip".into()),
        );
        let _ = handle_diary_browser_message(&mut h.ctx(), diary_browser::Message::SubmitLink);

        assert!(h.shared);
        assert_eq!(h.diary.id.as_str(), "trip");
    }

    #[test]
    fn browser_new_diary_replaces_the_open_one() {
        let mut h = Harness::new(DiaryStore::in_memory());
        let _ = handle_diary_browser_message(&mut h.ctx(), diary_browser::Message::NewDiary);

        assert_ne!(h.diary.id.as_str(), "home");
        assert_eq!(h.diary.page_count(), 2);
        assert_eq!(h.book.current_page(), 0);
    }

    #[test]
    fn deleting_the_open_diary_keeps_it_open() {
        let mut h = Harness::new(DiaryStore::in_memory());
        h.store.save(&h.diary).expect("save");
        h.diary.pages[0].title = "Unsaved edit".to_string();
        let id = h.diary.id.clone();

        let _ = handle_diary_browser_message(&mut h.ctx(), diary_browser::Message::Delete(id.clone()));

        assert_eq!(h.diary.id, id);
        assert_eq!(h.diary.pages[0].title, "Unsaved edit");
        assert!(matches!(h.store.lookup(&id), Lookup::NotFound));
        assert!(h.diary_browser.entries().is_empty());
    }

    #[test]
    fn browser_open_loads_the_diary_as_shared() {
        let store = DiaryStore::in_memory();
        store
            .save(&Diary::with_id(DiaryId::parse("trip").expect("id")))
            .expect("save");
        let mut h = Harness::new(store);

        let id = DiaryId::parse("trip").expect("id");
        let _ = handle_diary_browser_message(&mut h.ctx(), diary_browser::Message::Open(id));

        assert!(h.shared);
        assert_eq!(h.diary.id.as_str(), "trip");
        assert_eq!(h.screen, Screen::Book);
        assert_eq!(h.latest_key().as_deref(), Some("notification-shared-loaded"));
    }

    #[test]
    fn failed_save_still_reports_and_keeps_the_diary() {
        let backend = MemoryStore::new();
        backend.set_simulate_write_error(true);
        let mut h = Harness::new(DiaryStore::new(backend));

        let saved = h.ctx().save();
        assert!(!saved);
        assert_eq!(h.diary.id.as_str(), "home");
        assert!(h.persisted.last_diary_id.is_none());
    }

    #[test]
    fn failed_image_load_notifies_and_releases_the_tool() {
        let mut h = Harness::new(DiaryStore::in_memory());
        let page = h.diary.pages[0].id.clone();
        let _ = handle_image_loaded(
            &mut h.ctx(),
            &page,
            Path::new("/tmp/broken.png"),
            Err(Error::Image("bad".into())),
        );

        assert_eq!(h.latest_key().as_deref(), Some("notification-image-error"));
        assert!(h.book.tool().is_none());
    }

    #[test]
    fn share_dialog_close_clears_it() {
        let mut h = Harness::new(DiaryStore::in_memory());
        h.share_dialog = Some(share_dialog::State::new(ShareLink::new(h.diary.id.clone())));
        let _ = handle_share_dialog_message(&mut h.ctx(), share_dialog::Message::Close);
        assert!(h.share_dialog.is_none());
    }
}
