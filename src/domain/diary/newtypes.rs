// SPDX-License-Identifier: MPL-2.0
//! Diary value objects.
//!
//! Numeric properties of page elements are wrapped in newtypes that clamp to
//! their valid range on construction and on deserialization, so a stored
//! record can never carry an out-of-range size, scale or angle.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// =============================================================================
// Font Size
// =============================================================================

/// Font size bounds in points.
pub mod font_size_bounds {
    pub const MIN: f32 = 10.0;
    pub const MAX: f32 = 36.0;
    pub const DEFAULT: f32 = 16.0;
}

/// Font size of a text box, guaranteed to be within 10–36.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "f32", into = "f32")]
pub struct FontSize(f32);

impl FontSize {
    /// Creates a new font size, clamping the value to the valid range.
    #[must_use]
    pub fn new(size: f32) -> Self {
        if size.is_nan() {
            return Self::default();
        }
        Self(size.clamp(font_size_bounds::MIN, font_size_bounds::MAX))
    }

    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }
}

impl Default for FontSize {
    fn default() -> Self {
        Self(font_size_bounds::DEFAULT)
    }
}

impl From<f32> for FontSize {
    fn from(value: f32) -> Self {
        Self::new(value)
    }
}

impl From<FontSize> for f32 {
    fn from(value: FontSize) -> Self {
        value.0
    }
}

// =============================================================================
// Sticker Scale
// =============================================================================

/// Sticker scale bounds (multiplier of the base glyph size).
pub mod sticker_scale_bounds {
    pub const MIN: f32 = 0.5;
    pub const MAX: f32 = 3.0;
    pub const DEFAULT: f32 = 1.0;
    /// Slider step.
    pub const STEP: f32 = 0.1;
}

/// Sticker scale factor, guaranteed to be within 0.5–3.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "f32", into = "f32")]
pub struct StickerScale(f32);

impl StickerScale {
    #[must_use]
    pub fn new(scale: f32) -> Self {
        if scale.is_nan() {
            return Self::default();
        }
        Self(scale.clamp(sticker_scale_bounds::MIN, sticker_scale_bounds::MAX))
    }

    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }
}

impl Default for StickerScale {
    fn default() -> Self {
        Self(sticker_scale_bounds::DEFAULT)
    }
}

impl From<f32> for StickerScale {
    fn from(value: f32) -> Self {
        Self::new(value)
    }
}

impl From<StickerScale> for f32 {
    fn from(value: StickerScale) -> Self {
        value.0
    }
}

// =============================================================================
// Rotation
// =============================================================================

/// Rotation bounds in degrees.
pub mod rotation_bounds {
    pub const MIN: f32 = -180.0;
    pub const MAX: f32 = 180.0;
    pub const DEFAULT: f32 = 0.0;
    /// Slider step.
    pub const STEP: f32 = 5.0;
    /// Largest tilt given to a freshly placed sticker, either way.
    pub const NEW_STICKER_TILT: f32 = 15.0;
}

/// Sticker rotation in degrees, guaranteed to be within −180…180.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "f32", into = "f32")]
pub struct Rotation(f32);

impl Rotation {
    #[must_use]
    pub fn new(degrees: f32) -> Self {
        if degrees.is_nan() {
            return Self::default();
        }
        Self(degrees.clamp(rotation_bounds::MIN, rotation_bounds::MAX))
    }

    #[must_use]
    pub fn degrees(self) -> f32 {
        self.0
    }

    #[must_use]
    pub fn radians(self) -> f32 {
        self.0.to_radians()
    }
}

impl From<f32> for Rotation {
    fn from(value: f32) -> Self {
        Self::new(value)
    }
}

impl From<Rotation> for f32 {
    fn from(value: Rotation) -> Self {
        value.0
    }
}

// =============================================================================
// Hex Color
// =============================================================================

/// An opaque RGB color stored as `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl HexColor {
    pub const BLACK: HexColor = HexColor::rgb(0, 0, 0);

    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl FromStr for HexColor {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.trim().strip_prefix('#').unwrap_or(s.trim());
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(format!("invalid color: {s}"));
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16).map_err(|err| err.to_string())
        };
        Ok(Self {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }
}

impl TryFrom<String> for HexColor {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<HexColor> for String {
    fn from(value: HexColor) -> Self {
        value.to_string()
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

// =============================================================================
// Font Family
// =============================================================================

/// Typeface offered for text boxes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum FontFamily {
    #[default]
    #[serde(rename = "Arial")]
    Arial,
    #[serde(rename = "Times New Roman")]
    TimesNewRoman,
    #[serde(rename = "Comic Sans MS")]
    ComicSansMs,
    #[serde(rename = "Courier New")]
    CourierNew,
    #[serde(rename = "Georgia")]
    Georgia,
}

impl FontFamily {
    pub const ALL: [FontFamily; 5] = [
        FontFamily::Arial,
        FontFamily::TimesNewRoman,
        FontFamily::ComicSansMs,
        FontFamily::CourierNew,
        FontFamily::Georgia,
    ];

    /// Full family name, as installed on the system.
    #[must_use]
    pub fn family_name(self) -> &'static str {
        match self {
            FontFamily::Arial => "Arial",
            FontFamily::TimesNewRoman => "Times New Roman",
            FontFamily::ComicSansMs => "Comic Sans MS",
            FontFamily::CourierNew => "Courier New",
            FontFamily::Georgia => "Georgia",
        }
    }

    /// Short label for pickers.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            FontFamily::Arial => "Arial",
            FontFamily::TimesNewRoman => "Times",
            FontFamily::ComicSansMs => "Comic",
            FontFamily::CourierNew => "Courier",
            FontFamily::Georgia => "Georgia",
        }
    }
}

impl fmt::Display for FontFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
