// SPDX-License-Identifier: MPL-2.0
//! Floating toolbar: a tools tab and a properties tab for the selection.

use super::{Message, PropertiesMessage, State, Tool, ToolbarMessage, ToolbarTab};
use crate::domain::diary::newtypes::{font_size_bounds, rotation_bounds, sticker_scale_bounds};
use crate::domain::diary::{ElementRef, FontFamily, Page, Sticker, TextBox, TEXT_PALETTE};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::to_color;
use iced::widget::{button, slider, text, text_editor, Column, Container, Row, Text};
use iced::{alignment, Element, Length};

/// Swatches per palette row.
const SWATCHES_PER_ROW: usize = 9;

const TEXT_EDITOR_HEIGHT: f32 = 96.0;

impl Tool {
    fn glyph(self) -> &'static str {
        match self {
            Tool::Text => "T",
            Tool::Image => "🖼",
            Tool::Sticker => "★",
            Tool::Draw => "✎",
        }
    }

    fn label_key(self) -> &'static str {
        match self {
            Tool::Text => "toolbar-tool-text",
            Tool::Image => "toolbar-tool-image",
            Tool::Sticker => "toolbar-tool-sticker",
            Tool::Draw => "toolbar-tool-draw",
        }
    }
}

pub fn view<'a>(state: &'a State, page: &'a Page, i18n: &'a I18n) -> Element<'a, Message> {
    let tab = |tab: ToolbarTab, key: &str, enabled: bool| {
        let style = if state.toolbar_tab == tab {
            styles::button::selected
        } else {
            styles::button::unselected
        };
        button(Text::new(i18n.tr(key)).size(typography::BODY))
            .on_press_maybe(enabled.then_some(Message::Toolbar(ToolbarMessage::ShowTab(tab))))
            .width(Length::Fill)
            .style(style)
    };

    let tabs = Row::new()
        .spacing(spacing::XXS)
        .push(tab(ToolbarTab::Tools, "toolbar-tab-tools", true))
        .push(tab(
            ToolbarTab::Properties,
            "toolbar-tab-properties",
            state.selection.is_some(),
        ));

    let body = match state.toolbar_tab {
        ToolbarTab::Tools => tools(state, i18n),
        ToolbarTab::Properties => properties(state, page, i18n),
    };

    Container::new(Column::new().spacing(spacing::SM).push(tabs).push(body))
        .width(Length::Fixed(sizing::TOOLBAR_WIDTH))
        .padding(spacing::SM)
        .style(styles::container::panel)
        .into()
}

fn tools<'a>(state: &'a State, i18n: &'a I18n) -> Element<'a, Message> {
    let buttons = Tool::ALL.into_iter().map(|tool| {
        let style = if state.tool == Some(tool) {
            styles::button::selected
        } else {
            styles::button::unselected
        };
        let content = Column::new()
            .align_x(alignment::Horizontal::Center)
            .push(Text::new(tool.glyph()).size(typography::GLYPH))
            .push(Text::new(i18n.tr(tool.label_key())).size(typography::CAPTION));
        button(content)
            .on_press(Message::Toolbar(ToolbarMessage::SelectTool(tool)))
            .width(Length::Fill)
            .style(style)
            .into()
    });

    let hint = match state.tool {
        Some(Tool::Draw) => i18n.tr("toolbar-hint-draw"),
        Some(_) => i18n.tr("toolbar-hint-tool"),
        None => i18n.tr("toolbar-hint-idle"),
    };

    Column::new()
        .spacing(spacing::XS)
        .push(Row::with_children(buttons).spacing(spacing::XXS))
        .push(text(hint).size(typography::CAPTION))
        .into()
}

fn properties<'a>(state: &'a State, page: &'a Page, i18n: &'a I18n) -> Element<'a, Message> {
    let section = match state.selection.as_ref() {
        Some(ElementRef::TextBox(id)) => page
            .text_box(id)
            .map(|text_box| text_box_properties(state, text_box, i18n)),
        Some(ElementRef::Sticker(id)) => page
            .sticker(id)
            .map(|sticker| sticker_properties(sticker, i18n)),
        None => None,
    };

    let Some(section) = section else {
        return text(i18n.tr("toolbar-no-selection"))
            .size(typography::BODY)
            .into();
    };

    let delete = button(Text::new(i18n.tr("properties-delete")).size(typography::BODY))
        .on_press(Message::Properties(PropertiesMessage::Delete))
        .width(Length::Fill)
        .style(styles::button::danger);

    Column::new()
        .spacing(spacing::SM)
        .push(section)
        .push(delete)
        .into()
}

fn label<'a>(i18n: &I18n, key: &str) -> Text<'a> {
    Text::new(i18n.tr(key)).size(typography::CAPTION)
}

fn text_box_properties<'a>(
    state: &'a State,
    text_box: &'a TextBox,
    i18n: &'a I18n,
) -> Element<'a, Message> {
    let mut column = Column::new().spacing(spacing::XS);

    if let Some(content) = state.text_content() {
        column = column.push(label(i18n, "properties-text")).push(
            text_editor(content)
                .on_action(|action| Message::Properties(PropertiesMessage::TextEdited(action)))
                .height(Length::Fixed(TEXT_EDITOR_HEIGHT)),
        );
    }

    let fonts = FontFamily::ALL.into_iter().map(|family| {
        let style = if text_box.font_family == family {
            styles::button::selected
        } else {
            styles::button::unselected
        };
        button(
            Text::new(family.label())
                .size(typography::CAPTION)
                .font(iced::Font::with_name(family.family_name())),
        )
        .on_press(Message::Properties(PropertiesMessage::FontFamily(family)))
        .padding(spacing::XXS)
        .style(style)
        .into()
    });

    let size = text_box.font_size.value();
    let size_label = i18n.tr_with_args("properties-font-size", &[("size", &format!("{size:.0}"))]);

    let swatches = TEXT_PALETTE.chunks(SWATCHES_PER_ROW).map(|chunk| {
        Row::with_children(chunk.iter().map(|&color| {
            button(Text::new(""))
                .on_press(Message::Properties(PropertiesMessage::Color(color)))
                .width(Length::Fixed(sizing::SWATCH))
                .height(Length::Fixed(sizing::SWATCH))
                .style(styles::button::swatch(to_color(color), text_box.color == color))
                .into()
        }))
        .spacing(spacing::XXS)
        .into()
    });

    column
        .push(label(i18n, "properties-font"))
        .push(Row::with_children(fonts).spacing(spacing::XXS))
        .push(Text::new(size_label).size(typography::CAPTION))
        .push(
            slider(font_size_bounds::MIN..=font_size_bounds::MAX, size, |value| {
                Message::Properties(PropertiesMessage::FontSize(value))
            })
            .step(1.0),
        )
        .push(label(i18n, "properties-color"))
        .push(Column::with_children(swatches).spacing(spacing::XXS))
        .into()
}

fn sticker_properties<'a>(sticker: &'a Sticker, i18n: &'a I18n) -> Element<'a, Message> {
    let degrees = sticker.rotation.degrees();
    let scale = sticker.scale.value();

    Column::new()
        .spacing(spacing::XS)
        .push(Text::new(i18n.tr_with_args(
            "properties-rotation",
            &[("degrees", &format!("{degrees:.0}"))],
        ))
        .size(typography::CAPTION))
        .push(
            slider(rotation_bounds::MIN..=rotation_bounds::MAX, degrees, |value| {
                Message::Properties(PropertiesMessage::Rotation(value))
            })
            .step(5.0),
        )
        .push(Text::new(i18n.tr_with_args(
            "properties-size",
            &[("scale", &format!("{scale:.1}"))],
        ))
        .size(typography::CAPTION))
        .push(
            slider(
                sticker_scale_bounds::MIN..=sticker_scale_bounds::MAX,
                scale,
                |value| Message::Properties(PropertiesMessage::Scale(value)),
            )
            .step(0.1),
        )
        .into()
}
