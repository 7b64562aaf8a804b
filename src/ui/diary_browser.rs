// SPDX-License-Identifier: MPL-2.0
//! Collapsible panel listing the diaries saved on this machine.
//!
//! It also accepts a pasted share link. The panel only reports what the user
//! picked; loading, deleting and listing go through the application.

use crate::domain::diary::DiaryId;
use crate::i18n::fluent::I18n;
use crate::storage::DiarySummary;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, scrollable, text_input, Column, Container, Row, Space, Text};
use iced::{alignment, Element, Length};

const LIST_MAX_HEIGHT: f32 = 260.0;

#[derive(Debug, Clone, Default)]
pub struct State {
    open: bool,
    entries: Vec<DiarySummary>,
    link_input: String,
}

#[derive(Debug, Clone)]
pub enum Message {
    Toggle,
    Open(DiaryId),
    Delete(DiaryId),
    NewDiary,
    LinkInputChanged(String),
    SubmitLink,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    /// The panel was opened; the listing should be refreshed.
    RefreshRequested,
    Open(DiaryId),
    Delete(DiaryId),
    NewDiary,
    OpenLink(String),
}

impl State {
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    #[must_use]
    pub fn entries(&self) -> &[DiarySummary] {
        &self.entries
    }

    /// Replaces the listing, newest first.
    pub fn set_entries(&mut self, mut entries: Vec<DiarySummary>) {
        entries.sort_by(|a, b| b.last_updated.cmp(&a.last_updated));
        self.entries = entries;
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::Toggle => {
                self.open = !self.open;
                if self.open {
                    Event::RefreshRequested
                } else {
                    Event::None
                }
            }
            Message::Open(id) => {
                self.open = false;
                Event::Open(id)
            }
            Message::Delete(id) => Event::Delete(id),
            Message::NewDiary => {
                self.open = false;
                Event::NewDiary
            }
            Message::LinkInputChanged(value) => {
                self.link_input = value;
                Event::None
            }
            Message::SubmitLink => {
                let link = std::mem::take(&mut self.link_input);
                if link.trim().is_empty() {
                    Event::None
                } else {
                    self.open = false;
                    Event::OpenLink(link)
                }
            }
        }
    }

    pub fn view<'a>(&'a self, i18n: &'a I18n, current: Option<&DiaryId>) -> Element<'a, Message> {
        let toggle_label = if self.open {
            i18n.tr("browser-hide")
        } else {
            i18n.tr("browser-show")
        };
        let toggle = button(Text::new(toggle_label).size(typography::CAPTION))
            .on_press(Message::Toggle)
            .style(styles::button::unselected);

        let mut panel = Column::new().spacing(spacing::XS);

        if self.open {
            panel = panel
                .push(Text::new(i18n.tr("browser-title")).size(typography::TITLE_SM))
                .push(self.list(i18n, current))
                .push(
                    button(Text::new(i18n.tr("browser-new-diary")).size(typography::BODY))
                        .on_press(Message::NewDiary)
                        .width(Length::Fill)
                        .style(styles::button::primary),
                )
                .push(
                    text_input(&i18n.tr("browser-link-placeholder"), &self.link_input)
                        .on_input(Message::LinkInputChanged)
                        .on_submit(Message::SubmitLink)
                        .size(typography::CAPTION),
                );
        }
        panel = panel.push(toggle);

        let panel: Element<'a, Message> = if self.open {
            Container::new(panel)
                .width(Length::Fixed(sizing::TOOLBAR_WIDTH))
                .padding(spacing::SM)
                .style(styles::container::panel)
                .into()
        } else {
            panel.into()
        };

        Container::new(panel)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Right)
            .align_y(alignment::Vertical::Bottom)
            .padding(spacing::MD)
            .into()
    }

    fn list<'a>(&'a self, i18n: &'a I18n, current: Option<&DiaryId>) -> Element<'a, Message> {
        if self.entries.is_empty() {
            return Text::new(i18n.tr("browser-empty"))
                .size(typography::CAPTION)
                .into();
        }

        let rows = self.entries.iter().map(|entry| {
            let details = match (entry.page_count, entry.last_updated) {
                (Some(pages), Some(updated)) => i18n.tr_with_args(
                    "browser-entry-details",
                    &[
                        ("pages", &pages.to_string()),
                        ("updated", &updated.format("%Y-%m-%d %H:%M").to_string()),
                    ],
                ),
                _ => i18n.tr("browser-entry-unreadable"),
            };
            let is_current = current == Some(&entry.id);

            let label = Column::new()
                .push(Text::new(entry.id.as_str()).size(typography::BODY))
                .push(Text::new(details).size(typography::CAPTION));

            let open = button(label)
                .on_press_maybe((!is_current).then(|| Message::Open(entry.id.clone())))
                .width(Length::Fill)
                .style(if is_current {
                    styles::button::selected
                } else {
                    styles::button::plain
                });

            let delete = button(Text::new("×").size(typography::BODY_LG))
                .on_press_maybe((!is_current).then(|| Message::Delete(entry.id.clone())))
                .style(styles::button::plain);

            Row::new()
                .spacing(spacing::XXS)
                .align_y(alignment::Vertical::Center)
                .push(open)
                .push(Space::new().width(Length::Fixed(spacing::XXS)))
                .push(delete)
                .into()
        });

        Container::new(scrollable(Column::with_children(rows).spacing(spacing::XXS)))
            .max_height(LIST_MAX_HEIGHT)
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn id(raw: &str) -> DiaryId {
        DiaryId::parse(raw).expect("valid id")
    }

    fn summary(raw: &str, day: u32) -> DiarySummary {
        DiarySummary {
            id: id(raw),
            page_count: Some(2),
            last_updated: Utc.with_ymd_and_hms(2024, 5, day, 12, 0, 0).single(),
        }
    }

    #[test]
    fn opening_the_panel_asks_for_a_refresh() {
        let mut browser = State::default();
        assert_eq!(browser.update(Message::Toggle), Event::RefreshRequested);
        assert!(browser.is_open());
        assert_eq!(browser.update(Message::Toggle), Event::None);
        assert!(!browser.is_open());
    }

    #[test]
    fn entries_are_sorted_newest_first() {
        let mut browser = State::default();
        browser.set_entries(vec![summary("old", 1), summary("new", 20), summary("mid", 10)]);
        let ids: Vec<&str> = browser.entries().iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, ["new", "mid", "old"]);
    }

    #[test]
    fn picking_a_diary_closes_the_panel() {
        let mut browser = State::default();
        browser.update(Message::Toggle);
        assert_eq!(browser.update(Message::Open(id("abc"))), Event::Open(id("abc")));
        assert!(!browser.is_open());
    }

    #[test]
    fn blank_link_is_ignored() {
        let mut browser = State::default();
        browser.update(Message::LinkInputChanged("   ".to_string()));
        assert_eq!(browser.update(Message::SubmitLink), Event::None);
    }

    #[test]
    fn submitted_link_is_forwarded_and_cleared() {
        let mut browser = State::default();
        browser.update(Message::LinkInputChanged(
            "scrapbook://open?diary=abc".to_string(),
        ));
        assert_eq!(
            browser.update(Message::SubmitLink),
            Event::OpenLink("scrapbook://open?diary=abc".to_string())
        );
        assert_eq!(browser.update(Message::SubmitLink), Event::None);
    }
}
