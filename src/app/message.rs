// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::domain::diary::PageId;
use crate::error::Error;
use crate::media::PageImage;
use crate::ui::book;
use crate::ui::cover;
use crate::ui::diary_browser;
use crate::ui::notifications;
use crate::ui::share_dialog;
use std::path::PathBuf;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Cover(cover::Message),
    Book(book::Message),
    ShareDialog(share_dialog::Message),
    DiaryBrowser(diary_browser::Message),
    Notification(notifications::NotificationMessage),
    /// The image picker closed; `None` when it was cancelled.
    ImagePicked {
        page: PageId,
        path: Option<PathBuf>,
    },
    /// A picked image finished decoding.
    ImageLoaded {
        page: PageId,
        path: PathBuf,
        result: Result<PageImage, Error>,
    },
}

/// Runtime flags passed in from the CLI or launcher to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional directory containing Fluent `.ftl` files for custom builds.
    pub i18n_dir: Option<String>,
    /// Optional data directory override (diary storage and state file).
    /// Takes precedence over `SCRAPBOOK_DATA_DIR` environment variable.
    pub data_dir: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `SCRAPBOOK_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Diary to open, as a bare id or a share link.
    pub link: Option<String>,
}
