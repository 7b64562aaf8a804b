// SPDX-License-Identifier: MPL-2.0
//! Theme selection and the colors used to paint the book.

use crate::domain::diary::HexColor;
use crate::ui::design_tokens::{opacity, palette};
use iced::{Color, Theme};
use serde::{Deserialize, Serialize};

/// Colors used by the book canvas and its surroundings.
#[derive(Debug, Clone)]
pub struct ColorScheme {
    /// Window background behind the book.
    pub desk: Color,
    /// Paper of the pages.
    pub paper: Color,
    /// Dots and margin lines printed on the paper.
    pub paper_rule: Color,
    /// Spine and binding rings.
    pub binding: Color,
    pub binding_light: Color,
    /// Page titles and secondary labels on paper.
    pub ink: Color,
    /// Selection ring and hints.
    pub accent: Color,
    /// Shadow cast by a turning sheet.
    pub fold_shadow: Color,
}

impl ColorScheme {
    #[must_use]
    pub fn light() -> Self {
        Self {
            desk: Color::from_rgb(0.98, 0.95, 0.99),
            paper: palette::PRIMARY_50,
            paper_rule: Color {
                a: opacity::OVERLAY_SUBTLE,
                ..palette::PRIMARY_500
            },
            binding: palette::PRIMARY_500,
            binding_light: palette::PRIMARY_600,
            ink: palette::PRIMARY_900,
            accent: palette::PRIMARY_500,
            fold_shadow: Color {
                a: opacity::OVERLAY_SUBTLE,
                ..palette::BLACK
            },
        }
    }

    /// Dark window, same paper: pages stay readable whatever the theme.
    #[must_use]
    pub fn dark() -> Self {
        Self {
            desk: Color::from_rgb(0.11, 0.08, 0.14),
            fold_shadow: Color {
                a: opacity::OVERLAY_MEDIUM,
                ..palette::BLACK
            },
            ..Self::light()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Returns true if the effective theme is dark.
    /// For System mode, detects the actual system theme.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => matches!(dark_light::detect(), Ok(dark_light::Mode::Dark)),
        }
    }

    #[must_use]
    pub fn iced_theme(self) -> Theme {
        if self.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    #[must_use]
    pub fn colors(self) -> ColorScheme {
        if self.is_dark() {
            ColorScheme::dark()
        } else {
            ColorScheme::light()
        }
    }
}

/// Converts a stored element color for rendering.
#[must_use]
pub fn to_color(color: HexColor) -> Color {
    Color::from_rgb8(color.r, color.g, color.b)
}
