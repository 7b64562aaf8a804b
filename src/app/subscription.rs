// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Keyboard shortcuts reach the book only when no widget consumed the key,
//! so typing in the title field or the text editor never turns a page.

use super::{Message, Screen};
use crate::config::NOTIFICATION_TICK;
use crate::ui::book::{self, Shortcut};
use crate::ui::notifications::NotificationMessage;
use iced::keyboard::{self, key::Named, Key};
use iced::{event, time, Subscription};

/// Creates the keyboard subscription for the current screen.
pub fn create_event_subscription(screen: Screen) -> Subscription<Message> {
    match screen {
        Screen::Book => event::listen_with(|event, status, _window| {
            if status == event::Status::Captured {
                return None;
            }
            let event::Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) = event
            else {
                return None;
            };
            book_shortcut(&key, modifiers).map(Message::Book)
        }),
        Screen::Cover => Subscription::none(),
    }
}

/// Maps a key press to a book message.
pub fn book_shortcut(key: &Key, modifiers: keyboard::Modifiers) -> Option<book::Message> {
    if modifiers.command() {
        return match key.as_ref() {
            Key::Character("s") => Some(book::Message::Save),
            _ => None,
        };
    }
    let shortcut = match key.as_ref() {
        Key::Named(Named::ArrowLeft | Named::PageUp) => Shortcut::TurnPrev,
        Key::Named(Named::ArrowRight | Named::PageDown) => Shortcut::TurnNext,
        Key::Named(Named::Delete | Named::Backspace) => Shortcut::DeleteSelection,
        Key::Named(Named::Escape) => Shortcut::Escape,
        _ => return None,
    };
    Some(book::Message::Shortcut(shortcut))
}

/// Creates a periodic tick subscription for notification auto-dismiss.
pub fn create_tick_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(NOTIFICATION_TICK)
            .map(|instant| Message::Notification(NotificationMessage::Tick(instant)))
    } else {
        Subscription::none()
    }
}
