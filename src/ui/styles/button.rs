// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    border, opacity,
    palette::{self, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

fn rounded(color: Color, r: f32) -> Border {
    Border {
        color,
        width: border::WIDTH_SM,
        radius: r.into(),
    }
}

/// Main action (Save, Open, Copy).
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    let (bg, shadow) = match status {
        button::Status::Hovered => (palette::PRIMARY_600, shadow::MD),
        button::Status::Disabled => (palette::GRAY_200, shadow::NONE),
        button::Status::Active | button::Status::Pressed => (palette::PRIMARY_500, shadow::SM),
    };
    button::Style {
        background: Some(Background::Color(bg)),
        text_color: WHITE,
        border: rounded(palette::PRIMARY_900, radius::MD),
        shadow,
        snap: true,
    }
}

/// Toggle group member that is currently on (active tool, chosen font).
pub fn selected(_theme: &Theme, status: button::Status) -> button::Style {
    let bg = match status {
        button::Status::Hovered => palette::PRIMARY_600,
        _ => palette::PRIMARY_500,
    };
    button::Style {
        background: Some(Background::Color(bg)),
        text_color: WHITE,
        border: rounded(palette::PRIMARY_900, radius::SM),
        shadow: shadow::SM,
        snap: true,
    }
}

/// Toggle group member that is off.
pub fn unselected(theme: &Theme, status: button::Status) -> button::Style {
    let is_light = !theme.extended_palette().is_dark;
    let (bg, text_color) = if is_light {
        (palette::PRIMARY_50, palette::PRIMARY_900)
    } else {
        (palette::GRAY_700, WHITE)
    };
    let (bg, border_color) = match status {
        button::Status::Hovered => (
            if is_light {
                palette::PRIMARY_100
            } else {
                palette::GRAY_400
            },
            palette::PRIMARY_500,
        ),
        button::Status::Disabled => (
            Color {
                a: opacity::OVERLAY_MEDIUM,
                ..bg
            },
            palette::GRAY_200,
        ),
        button::Status::Active | button::Status::Pressed => (bg, palette::PRIMARY_100),
    };
    button::Style {
        background: Some(Background::Color(bg)),
        text_color,
        border: rounded(border_color, radius::SM),
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Destructive action (delete element, delete diary).
pub fn danger(_theme: &Theme, status: button::Status) -> button::Style {
    let alpha = match status {
        button::Status::Hovered => opacity::OPAQUE,
        button::Status::Pressed => opacity::OVERLAY_PRESSED,
        _ => opacity::OVERLAY_HOVER,
    };
    button::Style {
        background: Some(Background::Color(Color {
            a: alpha,
            ..palette::ERROR_500
        })),
        text_color: WHITE,
        border: rounded(palette::ERROR_500, radius::MD),
        shadow: shadow::SM,
        snap: true,
    }
}

/// Round floating button in the book corner (toolbar toggle, share).
pub fn floating(color: Color) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let shadow = match status {
            button::Status::Hovered => shadow::LG,
            _ => shadow::MD,
        };
        button::Style {
            background: Some(Background::Color(color)),
            text_color: WHITE,
            border: Border {
                radius: radius::FULL.into(),
                ..Default::default()
            },
            shadow,
            snap: true,
        }
    }
}

/// Palette swatch; `chosen` draws a thick ring.
pub fn swatch(color: Color, chosen: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let ring = if chosen || matches!(status, button::Status::Hovered) {
            border::WIDTH_MD
        } else {
            border::WIDTH_SM
        };
        button::Style {
            background: Some(Background::Color(color)),
            text_color: WHITE,
            border: Border {
                color: if chosen {
                    theme.palette().text
                } else {
                    palette::GRAY_200
                },
                width: ring,
                radius: radius::FULL.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Borderless button used for list rows and close crosses.
pub fn plain(theme: &Theme, status: button::Status) -> button::Style {
    let text_color = theme.palette().text;
    let background = match status {
        button::Status::Hovered => Some(Background::Color(Color {
            a: opacity::OVERLAY_FAINT,
            ..palette::PRIMARY_500
        })),
        button::Status::Pressed => Some(Background::Color(Color {
            a: opacity::OVERLAY_SUBTLE,
            ..palette::PRIMARY_500
        })),
        _ => None,
    };
    button::Style {
        background,
        text_color,
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_button_uses_brand_colors() {
        let style = primary(&Theme::Dark, button::Status::Active);
        assert_eq!(
            style.background,
            Some(Background::Color(palette::PRIMARY_500))
        );
    }

    #[test]
    fn swatch_marks_the_chosen_color() {
        let theme = Theme::Light;
        let chosen = swatch(palette::ERROR_500, true)(&theme, button::Status::Active);
        let other = swatch(palette::ERROR_500, false)(&theme, button::Status::Active);
        assert!(chosen.border.width > other.border.width);
    }

    #[test]
    fn plain_button_only_tints_on_interaction() {
        let theme = Theme::Light;
        assert!(plain(&theme, button::Status::Active).background.is_none());
        assert!(plain(&theme, button::Status::Hovered).background.is_some());
    }
}
