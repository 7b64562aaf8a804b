// SPDX-License-Identifier: MPL-2.0
//! Diary loading and saving glue between the store and the application.
//!
//! Startup and link opening share one lookup path: a requested diary that is
//! found opens in shared-view mode, a missing one falls back to a fresh diary
//! with a "not found" notice, and a storage failure falls back the same way
//! with a generic error notice.

use super::paths;
use crate::domain::diary::{Diary, DiaryId};
use crate::storage::{DiaryStore, FsStore, Lookup};
use crate::ui::notifications::Notification;
use std::path::PathBuf;

/// Diary chosen at startup or after opening a link.
#[derive(Debug)]
pub struct Opened {
    pub diary: Diary,
    /// Opened from a share link.
    pub shared: bool,
    pub notice: Option<Notification>,
}

impl Opened {
    fn found(mut diary: Diary, shared: bool, notice: Option<Notification>) -> Self {
        diary.ensure_page();
        Self {
            diary,
            shared,
            notice,
        }
    }

    fn fresh(notice: Option<Notification>) -> Self {
        Self {
            diary: Diary::new(),
            shared: false,
            notice,
        }
    }
}

/// Opens the file-backed store under the data directory.
///
/// Falls back to an in-memory store, with a warning key, when no data
/// directory can be resolved.
pub fn open_store(base_dir: Option<PathBuf>) -> (DiaryStore, Option<String>) {
    match paths::get_storage_dir_with_override(base_dir) {
        Some(dir) => {
            tracing::debug!(dir = %dir.display(), "using diary storage");
            (DiaryStore::new(FsStore::new(dir)), None)
        }
        None => {
            tracing::warn!("no data directory; diaries will not outlive this session");
            (
                DiaryStore::in_memory(),
                Some("notification-storage-unavailable".to_string()),
            )
        }
    }
}

/// Looks up a diary requested through a share link.
pub fn open_shared(store: &DiaryStore, id: &DiaryId) -> Opened {
    match store.lookup(id) {
        Lookup::Found(diary) => {
            tracing::info!(diary = %id, pages = diary.page_count(), "shared diary loaded");
            Opened::found(
                diary,
                true,
                Some(Notification::success("notification-shared-loaded")),
            )
        }
        Lookup::NotFound => {
            tracing::info!(diary = %id, "shared diary not found");
            Opened::fresh(Some(
                Notification::warning("notification-diary-not-found").with_arg("id", id.as_str()),
            ))
        }
        Lookup::Failed(_) => Opened::fresh(Some(Notification::error(
            "notification-diary-load-error",
        ))),
    }
}

/// Picks the diary to show at startup.
///
/// A requested diary wins. Otherwise the last diary is reopened silently
/// when `reopen_last` is set; if it vanished, a fresh diary is started.
pub fn resolve_startup(
    store: &DiaryStore,
    requested: Option<&DiaryId>,
    last_diary: Option<&str>,
    reopen_last: bool,
) -> Opened {
    if let Some(id) = requested {
        return open_shared(store, id);
    }

    let last = last_diary
        .filter(|_| reopen_last)
        .and_then(DiaryId::parse);
    let Some(id) = last else {
        return Opened::fresh(None);
    };

    match store.lookup(&id) {
        Lookup::Found(diary) => {
            tracing::debug!(diary = %id, "reopened last diary");
            Opened::found(diary, false, None)
        }
        Lookup::NotFound => Opened::fresh(None),
        Lookup::Failed(_) => Opened::fresh(Some(Notification::error(
            "notification-diary-load-error",
        ))),
    }
}

/// Saves the diary, stamping its modification time first.
pub fn save_diary(store: &DiaryStore, diary: &mut Diary) -> Notification {
    diary.touch();
    match store.save(diary) {
        Ok(()) => Notification::success("notification-diary-saved"),
        Err(err) => {
            tracing::error!(diary = %diary.id, error = %err, "failed to save diary");
            Notification::error(err.i18n_key())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use crate::ui::notifications::Severity;

    fn id(raw: &str) -> DiaryId {
        DiaryId::parse(raw).expect("valid id")
    }

    fn store_with(diary: &Diary) -> DiaryStore {
        let store = DiaryStore::in_memory();
        store.save(diary).expect("save");
        store
    }

    #[test]
    fn found_shared_diary_opens_in_shared_view() {
        let mut diary = Diary::with_id(id("trip"));
        diary.pages[0].title = "Day one".to_string();
        let store = store_with(&diary);

        let opened = open_shared(&store, &id("trip"));
        assert!(opened.shared);
        assert_eq!(opened.diary.pages, diary.pages);
        let notice = opened.notice.expect("notice");
        assert_eq!(notice.message_key(), "notification-shared-loaded");
    }

    #[test]
    fn empty_saved_diary_opens_on_a_blank_page() {
        let mut diary = Diary::with_id(id("bare"));
        diary.pages.clear();
        let store = store_with(&diary);

        let opened = open_shared(&store, &id("bare"));
        assert_eq!(opened.diary.page_count(), 1);

        let reopened = resolve_startup(&store, None, Some("bare"), true);
        assert_eq!(reopened.diary.page_count(), 1);
    }

    #[test]
    fn missing_shared_diary_falls_back_to_a_fresh_one() {
        let store = DiaryStore::in_memory();
        let opened = open_shared(&store, &id("nope"));

        assert!(!opened.shared);
        assert_eq!(opened.diary.page_count(), 2);
        assert_ne!(opened.diary.id, id("nope"));
        let notice = opened.notice.expect("notice");
        assert_eq!(notice.message_key(), "notification-diary-not-found");
        assert_eq!(notice.severity(), Severity::Warning);
    }

    #[test]
    fn corrupted_record_reports_a_load_error() {
        let backend = MemoryStore::new();
        backend.insert_raw("scrapbook-broken", vec![0xff, 0x00, 0x13]);
        let store = DiaryStore::new(backend);

        let opened = open_shared(&store, &id("broken"));
        assert!(!opened.shared);
        assert_eq!(opened.diary.page_count(), 2);
        let notice = opened.notice.expect("notice");
        assert_eq!(notice.message_key(), "notification-diary-load-error");
        assert_eq!(notice.severity(), Severity::Error);
    }

    #[test]
    fn startup_reopens_the_last_diary_silently() {
        let diary = Diary::with_id(id("mine"));
        let store = store_with(&diary);

        let opened = resolve_startup(&store, None, Some("mine"), true);
        assert_eq!(opened.diary.id, id("mine"));
        assert!(!opened.shared);
        assert!(opened.notice.is_none());
    }

    #[test]
    fn startup_ignores_the_last_diary_when_disabled() {
        let store = store_with(&Diary::with_id(id("mine")));
        let opened = resolve_startup(&store, None, Some("mine"), false);
        assert_ne!(opened.diary.id, id("mine"));
    }

    #[test]
    fn requested_diary_wins_over_the_last_one() {
        let store = store_with(&Diary::with_id(id("mine")));
        store.save(&Diary::with_id(id("theirs"))).expect("save");

        let opened = resolve_startup(&store, Some(&id("theirs")), Some("mine"), true);
        assert_eq!(opened.diary.id, id("theirs"));
        assert!(opened.shared);
    }

    #[test]
    fn vanished_last_diary_starts_fresh_without_notice() {
        let store = DiaryStore::in_memory();
        let opened = resolve_startup(&store, None, Some("gone"), true);
        assert_eq!(opened.diary.page_count(), 2);
        assert!(opened.notice.is_none());
    }

    #[test]
    fn save_notifies_success_and_persists() {
        let store = DiaryStore::in_memory();
        let mut diary = Diary::with_id(id("saved"));
        let notice = save_diary(&store, &mut diary);

        assert_eq!(notice.message_key(), "notification-diary-saved");
        assert!(matches!(store.lookup(&id("saved")), Lookup::Found(_)));
    }

    #[test]
    fn failed_save_notifies_an_error() {
        let backend = MemoryStore::new();
        backend.set_simulate_write_error(true);
        let store = DiaryStore::new(backend);
        let mut diary = Diary::new();

        let notice = save_diary(&store, &mut diary);
        assert_eq!(notice.severity(), Severity::Error);
    }
}
