// SPDX-License-Identifier: MPL-2.0
//! Layout of the open book.
//!
//! The page is a stack of layers, bottom to top: paper with the header photo,
//! the element canvas, the title bar, and the turning sheet. Floating buttons
//! and the toolbar sit in a second stack above the whole book.

use super::canvas::{PageCanvas, Spine, TurnOverlay};
use super::{toolbar, Message, State};
use crate::domain::diary::Diary;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::state::Direction;
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::widget::{
    button, image, text, text_input, Canvas, Column, Container, Row, Space, Stack, Text,
};
use iced::{alignment, Color, ContentFit, Element, Length};

/// Read-only data needed to render the book.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub colors: &'a ColorScheme,
    /// The diary was opened from a share link.
    pub shared: bool,
}

pub fn render<'a>(state: &'a State, diary: &'a Diary, ctx: ViewContext<'a>) -> Element<'a, Message> {
    let book = Row::new()
        .push(
            Canvas::new(Spine { colors: ctx.colors })
                .width(Length::Fixed(sizing::BINDING_WIDTH))
                .height(Length::Fill),
        )
        .push(page_area(state, diary, &ctx))
        .height(Length::Fill);

    let book = Container::new(book)
        .max_width(sizing::BOOK_MAX_WIDTH)
        .padding(spacing::LG);

    let desk = Container::new(book)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .style(styles::container::desk(ctx.colors.desk));

    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(desk);

    if state.toolbar_visible {
        if let Some(page) = diary.page(state.current) {
            layers = layers.push(
                Container::new(toolbar::view(state, page, ctx.i18n))
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .align_x(alignment::Horizontal::Right)
                    .align_y(alignment::Vertical::Top)
                    .padding(spacing::MD),
            );
        }
    }

    layers.push(floating_buttons(state, ctx.i18n)).into()
}

fn page_area<'a>(state: &'a State, diary: &'a Diary, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let page_count = diary.page_count();
    let Some(page) = diary.page(state.base_page_index(page_count)) else {
        return Container::new(text(ctx.i18n.tr("book-empty")))
            .width(Length::Fill)
            .height(Length::Fill)
            .into();
    };

    // Paper and header photo
    let mut paper = Column::new().push(Space::new().height(Length::Fixed(sizing::PAGE_HEADER_HEIGHT)));
    if let Some(handle) = state.image(&page.id) {
        paper = paper.push(
            Container::new(
                image(handle.clone())
                    .height(Length::Fixed(sizing::PAGE_IMAGE_MAX_HEIGHT))
                    .content_fit(ContentFit::Contain),
            )
            .width(Length::Fill)
            .center_x(Length::Fill),
        );
    }
    let paper = Container::new(paper)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::paper(ctx.colors.paper));

    let turning = !state.page_turn.is_idle();
    let elements = Canvas::new(PageCanvas {
        page,
        selection: if turning {
            None
        } else {
            state.selection.as_ref()
        },
        drag: state.drag_offset(),
        pending_stroke: state.pending_stroke(),
        drawing: state.tool == Some(super::Tool::Draw),
        colors: ctx.colors,
    })
    .width(Length::Fill)
    .height(Length::Fill);

    let sheet_title = match state.page_turn.direction() {
        Some(Direction::Prev) => diary
            .page(Direction::Prev.apply(state.current, page_count))
            .map_or("", |page| page.title.as_str()),
        _ => diary
            .page(state.current)
            .map_or("", |page| page.title.as_str()),
    };
    let tool_active = state.tool.is_some();
    let overlay = Canvas::new(TurnOverlay {
        phase: state.page_turn.phase(),
        sheet_title,
        can_turn_prev: !tool_active && Direction::Prev.is_available(state.current, page_count),
        can_turn_next: !tool_active && Direction::Next.is_available(state.current, page_count),
        colors: ctx.colors,
    })
    .width(Length::Fill)
    .height(Length::Fill);

    Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(paper)
        .push(elements)
        .push(header(state, diary, ctx, turning))
        .push(overlay)
        .into()
}

fn header<'a>(
    state: &'a State,
    diary: &'a Diary,
    ctx: &ViewContext<'a>,
    turning: bool,
) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let Some(page) = diary.page(state.current) else {
        return Space::new().into();
    };

    let title: Element<'a, Message> = if turning {
        Text::new(page.title.as_str())
            .size(typography::TITLE_MD)
            .color(ctx.colors.ink)
            .width(Length::Fill)
            .into()
    } else {
        text_input(&i18n.tr("book-title-placeholder"), &page.title)
            .on_input(Message::TitleChanged)
            .size(typography::TITLE_MD)
            .width(Length::Fill)
            .into()
    };

    let indicator = i18n.tr_with_args(
        "book-page-indicator",
        &[
            ("current", &(state.current + 1).to_string()),
            ("total", &diary.page_count().to_string()),
        ],
    );

    let mut bar = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(title);

    if ctx.shared {
        bar = bar.push(
            Text::new(i18n.tr("book-shared-badge"))
                .size(typography::CAPTION)
                .color(palette::ACCENT_ORANGE),
        );
    }

    let image_key = if page.has_image() {
        "book-change-image"
    } else {
        "book-add-image"
    };
    bar = bar
        .push(
            button(Text::new(i18n.tr(image_key)).size(typography::CAPTION))
                .on_press_maybe((!turning).then_some(Message::PickImage))
                .style(styles::button::unselected),
        )
        .push(
            Text::new(indicator)
                .size(typography::CAPTION)
                .color(ctx.colors.ink),
        );

    Container::new(bar)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::PAGE_HEADER_HEIGHT))
        .padding([spacing::SM, spacing::XL])
        .align_y(alignment::Vertical::Center)
        .into()
}

fn floating_buttons<'a>(state: &'a State, i18n: &'a I18n) -> Element<'a, Message> {
    let floating = |glyph: &'a str, color: Color, message: Message| {
        button(
            Container::new(Text::new(glyph).size(typography::TITLE_SM))
                .center_x(Length::Fill)
                .center_y(Length::Fill),
        )
        .width(Length::Fixed(sizing::FLOATING_BUTTON))
        .height(Length::Fixed(sizing::FLOATING_BUTTON))
        .on_press(message)
        .style(styles::button::floating(color))
    };

    let toggle_color = if state.toolbar_visible {
        palette::PRIMARY_900
    } else {
        palette::PRIMARY_500
    };

    let column = Column::new()
        .spacing(spacing::SM)
        .align_x(alignment::Horizontal::Center)
        .push(floating("✕", palette::GRAY_700, Message::Close))
        .push(floating("+", palette::PRIMARY_600, Message::AddPage))
        .push(floating("↗", palette::ACCENT_CYAN, Message::Share))
        .push(floating("💾", palette::SUCCESS_500, Message::Save))
        .push(floating("☰", toggle_color, Message::ToggleToolbar))
        .push(Text::new(i18n.tr("book-toolbar-hint")).size(typography::CAPTION));

    Container::new(column)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Left)
        .align_y(alignment::Vertical::Bottom)
        .padding(spacing::MD)
        .into()
}
