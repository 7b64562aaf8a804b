// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The book screen is a stack: the book itself, the diary browser, the share
//! dialog when open, and the toasts on top.

use super::{Message, Screen};
use crate::domain::diary::Diary;
use crate::i18n::fluent::I18n;
use crate::ui::book;
use crate::ui::cover;
use crate::ui::diary_browser;
use crate::ui::notifications::{self, Toast};
use crate::ui::share_dialog;
use crate::ui::theming::ColorScheme;
use iced::widget::{opaque, Container, Stack};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
    pub colors: &'a ColorScheme,
    pub cover_title: Option<&'a str>,
    pub diary: &'a Diary,
    pub shared: bool,
    pub book: &'a book::State,
    pub share_dialog: Option<&'a share_dialog::State>,
    pub diary_browser: &'a diary_browser::State,
    pub notifications: &'a notifications::Manager,
}

/// Renders the current application view based on the active screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let current_view: Element<'_, Message> = match ctx.screen {
        Screen::Cover => cover::view(cover::ViewContext {
            i18n: ctx.i18n,
            colors: ctx.colors,
            title: ctx.cover_title,
        })
        .map(Message::Cover),
        Screen::Book => view_book(&ctx),
    };

    let toasts = Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification);

    Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(
            Container::new(current_view)
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .push(toasts)
        .into()
}

fn view_book<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let book = book::render(
        ctx.book,
        ctx.diary,
        book::ViewContext {
            i18n: ctx.i18n,
            colors: ctx.colors,
            shared: ctx.shared,
        },
    )
    .map(Message::Book);

    let browser = ctx
        .diary_browser
        .view(ctx.i18n, Some(&ctx.diary.id))
        .map(Message::DiaryBrowser);

    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(book)
        .push(browser);

    if let Some(dialog) = ctx.share_dialog {
        layers = layers.push(opaque(dialog.view(ctx.i18n).map(Message::ShareDialog)));
    }

    layers.into()
}
