// SPDX-License-Identifier: MPL-2.0
//! Toast notifications.
//!
//! Short messages about what just happened (diary saved, link copied, shared
//! diary not found) shown along the top edge without blocking the book.
//! Messages are i18n keys resolved when drawn.
//!
//! ```ignore
//! let mut manager = Manager::new();
//! manager.push(Notification::success("notification-diary-saved"));
//! let overlay = Toast::view_overlay(&manager, &i18n).map(Message::Notification);
//! ```

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, NotificationId, Severity};
pub use toast::Toast;
