// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, opacity, palette, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Floating panel surface (toolbar, properties, saved diaries).
///
/// Derived from the theme background with a slight transparency so it reads
/// in both light and dark modes.
pub fn panel(theme: &Theme) -> container::Style {
    let base = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::SURFACE,
            ..base
        })),
        border: Border {
            color: palette::PRIMARY_100,
            width: border::WIDTH_SM,
            radius: radius::LG.into(),
        },
        shadow: shadow::LG,
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}

/// Full-window dimming behind a modal dialog.
pub fn backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_MEDIUM,
            ..palette::BLACK
        })),
        ..Default::default()
    }
}

/// Modal card on top of the backdrop.
pub fn dialog(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(
            theme.extended_palette().background.base.color,
        )),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        shadow: shadow::LG,
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}

/// Read-only field showing the share link.
pub fn link_field(theme: &Theme) -> container::Style {
    let weak = theme.extended_palette().background.weak.color;
    container::Style {
        background: Some(Background::Color(weak)),
        border: Border {
            color: palette::PRIMARY_300,
            width: border::WIDTH_SM,
            radius: radius::SM.into(),
        },
        ..Default::default()
    }
}

/// Plain window background behind the book.
pub fn desk(color: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(color)),
        ..Default::default()
    }
}

/// Page paper.
pub fn paper(color: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(color)),
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::MD,
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panel_is_translucent() {
        match panel(&Theme::Light).background {
            Some(Background::Color(c)) => assert!(c.a < 1.0),
            other => panic!("unexpected background {other:?}"),
        }
    }

    #[test]
    fn backdrop_dims_with_black() {
        match backdrop(&Theme::Dark).background {
            Some(Background::Color(c)) => assert_eq!(c.r, 0.0),
            other => panic!("unexpected background {other:?}"),
        }
    }
}
