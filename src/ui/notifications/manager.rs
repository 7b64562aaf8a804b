// SPDX-License-Identifier: MPL-2.0
//! Queue of toasts: at most a few on screen, the rest waiting.

use super::notification::{Notification, NotificationId};
use std::collections::VecDeque;
use std::time::Instant;

const MAX_VISIBLE: usize = 3;

#[derive(Debug, Clone)]
pub enum Message {
    Dismiss(NotificationId),
    Tick(Instant),
}

#[derive(Debug, Default)]
pub struct Manager {
    /// Newest first.
    visible: VecDeque<Notification>,
    queue: VecDeque<Notification>,
}

impl Manager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, notification: Notification) {
        tracing::debug!(
            key = notification.message_key(),
            severity = ?notification.severity(),
            "notification"
        );
        if self.visible.len() < MAX_VISIBLE {
            self.visible.push_front(notification);
        } else {
            self.queue.push_back(notification);
        }
    }

    /// Returns `true` if a notification with that id existed.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        if let Some(pos) = self.visible.iter().position(|n| n.id() == id) {
            self.visible.remove(pos);
            self.promote_from_queue();
            return true;
        }
        if let Some(pos) = self.queue.iter().position(|n| n.id() == id) {
            self.queue.remove(pos);
            return true;
        }
        false
    }

    pub fn tick(&mut self, now: Instant) {
        let before = self.visible.len();
        self.visible.retain(|n| !n.is_expired(now));
        if self.visible.len() < before {
            self.promote_from_queue();
        }
    }

    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(*id);
            }
            Message::Tick(now) => self.tick(*now),
        }
    }

    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.visible.iter()
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    #[must_use]
    pub fn queued_count(&self) -> usize {
        self.queue.len()
    }

    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.visible.is_empty() || !self.queue.is_empty()
    }

    fn promote_from_queue(&mut self) {
        while self.visible.len() < MAX_VISIBLE {
            match self.queue.pop_front() {
                Some(notification) => self.visible.push_front(notification),
                None => break,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn new_manager_is_empty() {
        let manager = Manager::new();
        assert!(!manager.has_notifications());
    }

    #[test]
    fn overflow_is_queued() {
        let mut manager = Manager::new();
        for i in 0..MAX_VISIBLE + 1 {
            manager.push(Notification::success(format!("n-{i}")));
        }
        assert_eq!(manager.visible_count(), MAX_VISIBLE);
        assert_eq!(manager.queued_count(), 1);
    }

    #[test]
    fn dismiss_promotes_from_queue() {
        let mut manager = Manager::new();
        let first = Notification::success("first");
        let first_id = first.id();
        manager.push(first);
        for i in 0..MAX_VISIBLE {
            manager.push(Notification::success(format!("n-{i}")));
        }

        assert!(manager.dismiss(first_id));
        assert_eq!(manager.visible_count(), MAX_VISIBLE);
        assert_eq!(manager.queued_count(), 0);
        assert!(!manager.dismiss(first_id));
    }

    #[test]
    fn tick_removes_expired_toasts() {
        let mut manager = Manager::new();
        manager.push(Notification::success("notification-diary-saved"));
        manager.push(Notification::error("notification-diary-load-error"));

        manager.handle_message(&Message::Tick(Instant::now() + Duration::from_secs(4)));
        assert_eq!(manager.visible_count(), 1);
        assert_eq!(
            manager.visible().next().map(Notification::message_key),
            Some("notification-diary-load-error")
        );

        manager.tick(Instant::now() + Duration::from_secs(60));
        assert!(!manager.has_notifications());
    }

    #[test]
    fn promoted_toast_is_shown_on_top() {
        let mut manager = Manager::new();
        let first = Notification::success("first");
        let first_id = first.id();
        manager.push(first);
        for i in 0..MAX_VISIBLE {
            manager.push(Notification::success(format!("n-{i}")));
        }

        manager.dismiss(first_id);
        let keys: Vec<&str> = manager.visible().map(Notification::message_key).collect();
        assert_eq!(keys, vec!["n-2", "n-1", "n-0"]);
    }
}
