// SPDX-License-Identifier: MPL-2.0
//! Modal showing the share link of the open diary.

use crate::i18n::fluent::I18n;
use crate::share::ShareLink;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, Column, Container, Row, Space, Text};
use iced::{alignment, Element, Length};

#[derive(Debug, Clone)]
pub struct State {
    link: ShareLink,
    copied: bool,
}

#[derive(Debug, Clone)]
pub enum Message {
    Copy,
    OpenLink,
    Close,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    /// Put the text on the clipboard.
    Copy(String),
    /// Open the link as if it had been received.
    OpenLink(ShareLink),
    Close,
}

impl State {
    #[must_use]
    pub fn new(link: ShareLink) -> Self {
        Self {
            link,
            copied: false,
        }
    }

    #[must_use]
    pub fn link(&self) -> &ShareLink {
        &self.link
    }

    #[must_use]
    pub fn copied(&self) -> bool {
        self.copied
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::Copy => {
                self.copied = true;
                Event::Copy(self.link.to_string())
            }
            Message::OpenLink => Event::OpenLink(self.link.clone()),
            Message::Close => Event::Close,
        }
    }

    pub fn view<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let link = Container::new(Text::new(self.link.to_string()).size(typography::BODY))
            .width(Length::Fill)
            .padding(spacing::SM)
            .style(styles::container::link_field);

        let copy_label = if self.copied {
            i18n.tr("share-copied")
        } else {
            i18n.tr("share-copy-button")
        };

        let buttons = Row::new()
            .spacing(spacing::SM)
            .push(
                button(Text::new(copy_label).size(typography::BODY))
                    .on_press(Message::Copy)
                    .style(styles::button::primary),
            )
            .push(
                button(Text::new(i18n.tr("share-open-button")).size(typography::BODY))
                    .on_press(Message::OpenLink)
                    .style(styles::button::unselected),
            )
            .push(Space::new().width(Length::Fill))
            .push(
                button(Text::new(i18n.tr("share-close-button")).size(typography::BODY))
                    .on_press(Message::Close)
                    .style(styles::button::plain),
            );

        let card = Column::new()
            .spacing(spacing::MD)
            .push(Text::new(i18n.tr("share-title")).size(typography::TITLE_SM))
            .push(Text::new(i18n.tr("share-description")).size(typography::CAPTION))
            .push(link)
            .push(buttons);

        let dialog = Container::new(card)
            .width(Length::Fixed(sizing::DIALOG_WIDTH))
            .padding(spacing::LG)
            .style(styles::container::dialog);

        Container::new(dialog)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center)
            .style(styles::container::backdrop)
            .into()
    }
}
