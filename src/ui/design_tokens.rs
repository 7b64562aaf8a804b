// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

All of the application's design tokens in one place.

## Organization

- **Palette**: Base colors, including the scrapbook purples
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Border**: Border width scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use scrapbook::ui::design_tokens::{palette, spacing, opacity};
use iced::Color;

let veil = Color {
    a: opacity::OVERLAY_STRONG,
    ..palette::BLACK
};

let padding = spacing::MD; // 16px
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);

    // Brand colors (purple scale)
    pub const PRIMARY_50: Color = Color::from_rgb(0.953, 0.898, 0.961); // #f3e5f5, page paper
    pub const PRIMARY_100: Color = Color::from_rgb(0.882, 0.745, 0.906); // #e1bee7
    pub const PRIMARY_300: Color = Color::from_rgb(0.808, 0.576, 0.847); // #ce93d8
    pub const PRIMARY_500: Color = Color::from_rgb(0.612, 0.153, 0.690); // #9c27b0
    pub const PRIMARY_600: Color = Color::from_rgb(0.404, 0.227, 0.718); // #673ab7
    pub const PRIMARY_900: Color = Color::from_rgb(0.290, 0.078, 0.549); // #4a148c, binding

    // Accents used on the cover
    pub const ACCENT_ORANGE: Color = Color::from_rgb(1.0, 0.596, 0.0); // #ff9800
    pub const ACCENT_CYAN: Color = Color::from_rgb(0.0, 0.737, 0.831); // #00bcd4

    // Page-turn sheet tints
    pub const SHEET_NEXT: Color = Color::from_rgb(1.0, 0.961, 0.961); // #fff5f5
    pub const SHEET_PREV: Color = Color::from_rgb(0.961, 0.961, 1.0); // #f5f5ff

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
    pub const INFO_500: Color = Color::from_rgb(0.392, 0.588, 1.0);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_FAINT: f32 = 0.1;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const OVERLAY_HOVER: f32 = 0.8;
    pub const OVERLAY_PRESSED: f32 = 0.9;
    pub const OPAQUE: f32 = 1.0;

    /// Surface background - Semi-transparent panels and containers
    pub const SURFACE: f32 = 0.95;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
    pub const XL: f32 = 32.0; // 4 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    pub const FLOATING_BUTTON: f32 = 48.0;
    pub const SWATCH: f32 = 22.0;

    // Component widths
    pub const TOOLBAR_WIDTH: f32 = 300.0;
    pub const TOAST_WIDTH: f32 = 320.0;
    pub const DIALOG_WIDTH: f32 = 440.0;

    // Book
    pub const BOOK_MAX_WIDTH: f32 = 900.0;
    pub const BINDING_WIDTH: f32 = 40.0;
    pub const PAGE_HEADER_HEIGHT: f32 = 64.0;
    pub const PAGE_IMAGE_MAX_HEIGHT: f32 = 160.0;
    pub const COVER_WIDTH: f32 = 560.0;
    pub const COVER_HEIGHT: f32 = 640.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Cover title
    pub const DISPLAY: f32 = 44.0;

    /// Large title - Dialog headings
    pub const TITLE_LG: f32 = 30.0;

    /// Medium title - Page titles
    pub const TITLE_MD: f32 = 22.0;

    /// Small title - Section headers
    pub const TITLE_SM: f32 = 18.0;

    /// Large body - Form inputs, emphasis text
    pub const BODY_LG: f32 = 16.0;

    /// Standard body - Most UI text, labels, descriptions
    pub const BODY: f32 = 14.0;

    /// Caption - Page numbers, timestamps
    pub const CAPTION: f32 = 12.0;

    /// Emoji glyph on tool buttons
    pub const GLYPH: f32 = 22.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    /// Thin border - Subtle separators, input fields
    pub const WIDTH_SM: f32 = 1.0;

    /// Medium border - Selection rings, toast accents
    pub const WIDTH_MD: f32 = 2.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Color, Shadow, Vector};

    const SHADOW_COLOR: Color = Color {
        a: 0.35,
        ..palette::BLACK
    };

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: SHADOW_COLOR,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };

    pub const MD: Shadow = Shadow {
        color: SHADOW_COLOR,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };

    pub const LG: Shadow = Shadow {
        color: SHADOW_COLOR,
        offset: Vector { x: 0.0, y: 8.0 },
        blur_radius: 16.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::OVERLAY_MEDIUM > 0.0 && opacity::OVERLAY_MEDIUM < 1.0);
    assert!(opacity::SURFACE > 0.0 && opacity::SURFACE < 1.0);

    assert!(typography::DISPLAY > typography::TITLE_LG);
    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::BODY_LG);
    assert!(typography::BODY > typography::CAPTION);

    assert!(border::WIDTH_MD > border::WIDTH_SM);
    assert!(sizing::BOOK_MAX_WIDTH > sizing::TOOLBAR_WIDTH);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::LG, spacing::MD * 1.5);
    }

    #[test]
    fn page_paper_is_lighter_than_brand() {
        let paper = palette::PRIMARY_50;
        let brand = palette::PRIMARY_500;
        assert!(paper.r + paper.g + paper.b > brand.r + brand.g + brand.b);
    }
}
