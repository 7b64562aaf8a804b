// SPDX-License-Identifier: MPL-2.0
//! Closed-book cover shown at startup and after closing the book.

use crate::i18n::fluent::I18n;
use crate::ui::book::Spine;
use crate::ui::design_tokens::{opacity, palette, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::widget::canvas::{self, Frame, Geometry, Path};
use iced::widget::{button, Canvas, Column, Container, Row, Stack, Text};
use iced::{alignment, mouse, Color, Element, Length, Point, Rectangle, Renderer, Theme};

/// Contextual data needed to render the cover.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub colors: &'a ColorScheme,
    /// Title from the configuration; the localized default otherwise.
    pub title: Option<&'a str>,
}

#[derive(Debug, Clone)]
pub enum Message {
    OpenBook,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    OpenBook,
}

#[must_use]
pub fn update(message: &Message) -> Event {
    match message {
        Message::OpenBook => Event::OpenBook,
    }
}

#[must_use]
#[allow(clippy::needless_pass_by_value)]
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let title = ctx
        .title
        .filter(|title| !title.trim().is_empty())
        .map_or_else(|| ctx.i18n.tr("cover-default-title"), str::to_string);

    let open = button(
        Text::new(ctx.i18n.tr("cover-open-button")).size(typography::BODY_LG),
    )
    .on_press(Message::OpenBook)
    .padding([spacing::SM, spacing::XL])
    .style(styles::button::primary);

    let label = Column::new()
        .spacing(spacing::LG)
        .align_x(alignment::Horizontal::Center)
        .push(
            Text::new(title)
                .size(typography::DISPLAY)
                .color(palette::WHITE),
        )
        .push(
            Text::new(ctx.i18n.tr("cover-subtitle"))
                .size(typography::BODY_LG)
                .color(Color {
                    a: opacity::OVERLAY_HOVER,
                    ..palette::WHITE
                }),
        )
        .push(open);

    let face = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(
            Canvas::new(CoverArt)
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .push(
            Container::new(label)
                .width(Length::Fill)
                .height(Length::Fill)
                .center_x(Length::Fill)
                .center_y(Length::Fill),
        );

    let book = Row::new()
        .push(
            Canvas::new(Spine { colors: ctx.colors })
                .width(Length::Fixed(sizing::BINDING_WIDTH))
                .height(Length::Fill),
        )
        .push(
            Container::new(face)
                .width(Length::Fill)
                .height(Length::Fill)
                .style(styles::container::paper(palette::PRIMARY_600)),
        )
        .width(Length::Fixed(sizing::COVER_WIDTH))
        .height(Length::Fixed(sizing::COVER_HEIGHT));

    Container::new(book)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .style(styles::container::desk(ctx.colors.desk))
        .into()
}

/// Decorative circles in two corners of the cover.
struct CoverArt;

impl<Message> canvas::Program<Message> for CoverArt {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let radius = bounds.width.min(bounds.height) / 5.0;

        frame.fill(
            &Path::circle(Point::new(bounds.width - radius * 0.6, radius * 0.8), radius),
            Color {
                a: opacity::OVERLAY_STRONG,
                ..palette::ACCENT_ORANGE
            },
        );
        frame.fill(
            &Path::circle(
                Point::new(radius * 0.9, bounds.height - radius * 0.7),
                radius * 0.75,
            ),
            Color {
                a: opacity::OVERLAY_STRONG,
                ..palette::ACCENT_CYAN
            },
        );

        vec![frame.into_geometry()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_button_opens_the_book() {
        assert_eq!(update(&Message::OpenBook), Event::OpenBook);
    }
}
