// SPDX-License-Identifier: MPL-2.0
//! Diary document model.
//!
//! A [`Diary`] is an ordered list of [`Page`]s. Each page carries a title, an
//! optional embedded image and three ordered element collections: text boxes,
//! stickers and freehand strokes. Absence is always an empty value (empty
//! image bytes, empty lists), never a separate null state.
//!
//! Element operations (`add_*`, `remove`, `move_element`, `element_at`) live
//! on [`Page`] so that the book view only has to route pointer input.

pub mod image_bytes;
pub mod newtypes;

pub use newtypes::{FontFamily, FontSize, HexColor, Rotation, StickerScale};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Title given to freshly created pages.
pub const DEFAULT_PAGE_TITLE: &str = "New Memory";

/// Content given to freshly created text boxes.
pub const DEFAULT_TEXT: &str = "Click to edit text";

/// Where new text boxes land on the page.
pub const DEFAULT_TEXT_POSITION: Position = Position { x: 100.0, y: 150.0 };

/// Where new stickers land on the page.
pub const DEFAULT_STICKER_POSITION: Position = Position { x: 150.0, y: 200.0 };

/// Glyphs available as stickers.
pub const STICKER_GLYPHS: [&str; 9] = ["😊", "❤️", "🌟", "🎉", "🎁", "🌈", "🦄", "🍕", "🎵"];

/// Side of a sticker's square at scale 1.
pub const STICKER_BASE_SIZE: f32 = 48.0;

/// Colors offered for text boxes.
pub const TEXT_PALETTE: [HexColor; 17] = [
    HexColor::rgb(0x00, 0x00, 0x00),
    HexColor::rgb(0x9c, 0x27, 0xb0),
    HexColor::rgb(0x67, 0x3a, 0xb7),
    HexColor::rgb(0x3f, 0x51, 0xb5),
    HexColor::rgb(0x21, 0x96, 0xf3),
    HexColor::rgb(0x03, 0xa9, 0xf4),
    HexColor::rgb(0x00, 0xbc, 0xd4),
    HexColor::rgb(0x00, 0x96, 0x88),
    HexColor::rgb(0x4c, 0xaf, 0x50),
    HexColor::rgb(0x8b, 0xc3, 0x4a),
    HexColor::rgb(0xcd, 0xdc, 0x39),
    HexColor::rgb(0xff, 0xeb, 0x3b),
    HexColor::rgb(0xff, 0xc1, 0x07),
    HexColor::rgb(0xff, 0x98, 0x00),
    HexColor::rgb(0xff, 0x57, 0x22),
    HexColor::rgb(0xf4, 0x43, 0x36),
    HexColor::rgb(0xe9, 0x1e, 0x63),
];

/// Default ink of the drawing layer.
pub const DEFAULT_STROKE_COLOR: HexColor = HexColor::rgb(0x9c, 0x27, 0xb0);

/// Default pen width of the drawing layer.
pub const DEFAULT_STROKE_WIDTH: f32 = 3.0;

/// Longest accepted diary identifier.
const MAX_DIARY_ID_LEN: usize = 64;

/// Length of generated diary identifiers.
const GENERATED_DIARY_ID_LEN: usize = 10;

// =============================================================================
// Identifiers
// =============================================================================

/// Opaque diary token, made of `[A-Za-z0-9_-]` so it can travel in a link.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DiaryId(String);

impl DiaryId {
    /// Generates a fresh 10-character identifier.
    #[must_use]
    pub fn generate() -> Self {
        let simple = Uuid::new_v4().simple().to_string();
        Self(simple[..GENERATED_DIARY_ID_LEN].to_string())
    }

    /// Validates a user-supplied identifier.
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        let valid = !raw.is_empty()
            && raw.len() <= MAX_DIARY_ID_LEN
            && raw
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        valid.then(|| Self(raw.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for DiaryId {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value).ok_or_else(|| format!("invalid diary id: {value}"))
    }
}

impl From<DiaryId> for String {
    fn from(value: DiaryId) -> Self {
        value.0
    }
}

impl fmt::Display for DiaryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier of a text box or sticker, unique within its page.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementId(String);

impl ElementId {
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4().simple().to_string())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ElementId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Page identifier of the form `page-N`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PageId(String);

impl PageId {
    #[must_use]
    pub fn numbered(n: u32) -> Self {
        Self(format!("page-{n}"))
    }

    /// Numeric suffix, when the id follows the `page-N` scheme.
    #[must_use]
    pub fn number(&self) -> Option<u32> {
        self.0.strip_prefix("page-")?.parse().ok()
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Reference to one element on a page.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ElementRef {
    TextBox(ElementId),
    Sticker(ElementId),
}

impl ElementRef {
    #[must_use]
    pub fn id(&self) -> &ElementId {
        match self {
            ElementRef::TextBox(id) | ElementRef::Sticker(id) => id,
        }
    }
}

// =============================================================================
// Geometry
// =============================================================================

/// A point in page coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn offset(self, dx: f32, dy: f32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

/// Axis-aligned rectangle in page coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    #[must_use]
    pub fn contains(&self, point: Position) -> bool {
        point.x >= self.x
            && point.x <= self.x + self.width
            && point.y >= self.y
            && point.y <= self.y + self.height
    }

    #[must_use]
    pub fn center(&self) -> Position {
        Position::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

// =============================================================================
// Elements
// =============================================================================

/// Visual style applied to new text boxes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub color: HexColor,
    pub font_size: FontSize,
    pub font_family: FontFamily,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            color: HexColor::BLACK,
            font_size: FontSize::default(),
            font_family: FontFamily::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextBox {
    pub id: ElementId,
    pub content: String,
    pub position: Position,
    pub color: HexColor,
    pub font_size: FontSize,
    pub font_family: FontFamily,
}

impl TextBox {
    /// Minimum extent of a text box, matching its editing frame.
    const MIN_WIDTH: f32 = 150.0;
    const MIN_HEIGHT: f32 = 60.0;
    const PADDING: f32 = 8.0;

    #[must_use]
    pub fn new(style: TextStyle) -> Self {
        Self {
            id: ElementId::generate(),
            content: DEFAULT_TEXT.to_string(),
            position: DEFAULT_TEXT_POSITION,
            color: style.color,
            font_size: style.font_size,
            font_family: style.font_family,
        }
    }

    /// Approximate on-page extent, used for selection and hit testing.
    #[must_use]
    pub fn bounds(&self) -> Bounds {
        let size = self.font_size.value();
        let longest = self
            .content
            .lines()
            .map(|line| line.chars().count())
            .max()
            .unwrap_or(0);
        let lines = self.content.lines().count().max(1);

        #[allow(clippy::cast_precision_loss)]
        let text_width = longest as f32 * size * 0.6;
        #[allow(clippy::cast_precision_loss)]
        let text_height = lines as f32 * size * 1.4;

        Bounds {
            x: self.position.x,
            y: self.position.y,
            width: (text_width + 2.0 * Self::PADDING).max(Self::MIN_WIDTH),
            height: (text_height + 2.0 * Self::PADDING).max(Self::MIN_HEIGHT),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sticker {
    pub id: ElementId,
    pub content: String,
    pub position: Position,
    pub rotation: Rotation,
    pub scale: StickerScale,
}

impl Sticker {
    #[must_use]
    pub fn new(content: impl Into<String>, rotation: Rotation) -> Self {
        Self {
            id: ElementId::generate(),
            content: content.into(),
            position: DEFAULT_STICKER_POSITION,
            rotation,
            scale: StickerScale::default(),
        }
    }

    /// A sticker with a random glyph and a slight random tilt.
    #[must_use]
    pub fn random() -> Self {
        let bytes = *Uuid::new_v4().as_bytes();
        let glyph = STICKER_GLYPHS[usize::from(bytes[0]) % STICKER_GLYPHS.len()];
        let unit = f32::from(u16::from_le_bytes([bytes[1], bytes[2]])) / f32::from(u16::MAX);
        let tilt = newtypes::rotation_bounds::NEW_STICKER_TILT;
        Self::new(glyph, Rotation::new(unit * 2.0 * tilt - tilt))
    }

    /// Square occupied by the glyph, scaled around its center.
    #[must_use]
    pub fn bounds(&self) -> Bounds {
        let half = STICKER_BASE_SIZE / 2.0;
        let scaled_half = half * self.scale.value();
        let center = Position::new(self.position.x + half, self.position.y + half);
        Bounds {
            x: center.x - scaled_half,
            y: center.y - scaled_half,
            width: scaled_half * 2.0,
            height: scaled_half * 2.0,
        }
    }
}

/// A freehand line on the drawing layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    pub color: HexColor,
    pub width: f32,
    pub points: Vec<Position>,
}

impl Stroke {
    #[must_use]
    pub fn begin(start: Position, color: HexColor, width: f32) -> Self {
        Self {
            color,
            width,
            points: vec![start],
        }
    }

    pub fn extend_to(&mut self, point: Position) {
        if self.points.last() != Some(&point) {
            self.points.push(point);
        }
    }
}

// =============================================================================
// Page
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    pub id: PageId,
    pub title: String,
    /// Encoded image (PNG); empty when the page has none.
    #[serde(default, with = "image_bytes")]
    pub image: Vec<u8>,
    #[serde(default)]
    pub text_boxes: Vec<TextBox>,
    #[serde(default)]
    pub stickers: Vec<Sticker>,
    #[serde(default)]
    pub strokes: Vec<Stroke>,
}

impl Page {
    #[must_use]
    pub fn blank(id: PageId) -> Self {
        Self {
            id,
            title: DEFAULT_PAGE_TITLE.to_string(),
            image: Vec::new(),
            text_boxes: Vec::new(),
            stickers: Vec::new(),
            strokes: Vec::new(),
        }
    }

    #[must_use]
    pub fn has_image(&self) -> bool {
        !self.image.is_empty()
    }

    /// Appends a default text box and returns a reference to it.
    pub fn add_text_box(&mut self, style: TextStyle) -> ElementRef {
        let mut text_box = TextBox::new(style);
        while self.contains_id(&text_box.id) {
            text_box.id = ElementId::generate();
        }
        let element = ElementRef::TextBox(text_box.id.clone());
        self.text_boxes.push(text_box);
        element
    }

    /// Appends a sticker and returns a reference to it.
    pub fn add_sticker(&mut self, mut sticker: Sticker) -> ElementRef {
        while self.contains_id(&sticker.id) {
            sticker.id = ElementId::generate();
        }
        let element = ElementRef::Sticker(sticker.id.clone());
        self.stickers.push(sticker);
        element
    }

    fn contains_id(&self, id: &ElementId) -> bool {
        self.text_boxes.iter().any(|t| &t.id == id) || self.stickers.iter().any(|s| &s.id == id)
    }

    #[must_use]
    pub fn contains(&self, element: &ElementRef) -> bool {
        match element {
            ElementRef::TextBox(id) => self.text_box(id).is_some(),
            ElementRef::Sticker(id) => self.sticker(id).is_some(),
        }
    }

    #[must_use]
    pub fn text_box(&self, id: &ElementId) -> Option<&TextBox> {
        self.text_boxes.iter().find(|t| &t.id == id)
    }

    pub fn text_box_mut(&mut self, id: &ElementId) -> Option<&mut TextBox> {
        self.text_boxes.iter_mut().find(|t| &t.id == id)
    }

    #[must_use]
    pub fn sticker(&self, id: &ElementId) -> Option<&Sticker> {
        self.stickers.iter().find(|s| &s.id == id)
    }

    pub fn sticker_mut(&mut self, id: &ElementId) -> Option<&mut Sticker> {
        self.stickers.iter_mut().find(|s| &s.id == id)
    }

    /// Removes exactly the referenced element. Returns whether it existed.
    pub fn remove(&mut self, element: &ElementRef) -> bool {
        match element {
            ElementRef::TextBox(id) => {
                let before = self.text_boxes.len();
                self.text_boxes.retain(|t| &t.id != id);
                self.text_boxes.len() != before
            }
            ElementRef::Sticker(id) => {
                let before = self.stickers.len();
                self.stickers.retain(|s| &s.id != id);
                self.stickers.len() != before
            }
        }
    }

    /// Moves the referenced element by the given offset.
    pub fn move_element(&mut self, element: &ElementRef, dx: f32, dy: f32) -> bool {
        let position = match element {
            ElementRef::TextBox(id) => self.text_box_mut(id).map(|t| &mut t.position),
            ElementRef::Sticker(id) => self.sticker_mut(id).map(|s| &mut s.position),
        };
        match position {
            Some(position) => {
                *position = position.offset(dx, dy);
                true
            }
            None => false,
        }
    }

    /// Topmost element under `point`. Stickers render above text boxes and
    /// later elements above earlier ones.
    #[must_use]
    pub fn element_at(&self, point: Position) -> Option<ElementRef> {
        self.stickers
            .iter()
            .rev()
            .find(|s| s.bounds().contains(point))
            .map(|s| ElementRef::Sticker(s.id.clone()))
            .or_else(|| {
                self.text_boxes
                    .iter()
                    .rev()
                    .find(|t| t.bounds().contains(point))
                    .map(|t| ElementRef::TextBox(t.id.clone()))
            })
    }

    /// Bounds of the referenced element, if it is on this page.
    #[must_use]
    pub fn bounds_of(&self, element: &ElementRef) -> Option<Bounds> {
        match element {
            ElementRef::TextBox(id) => self.text_box(id).map(TextBox::bounds),
            ElementRef::Sticker(id) => self.sticker(id).map(Sticker::bounds),
        }
    }

    /// Keeps a finished stroke on the drawing layer.
    pub fn add_stroke(&mut self, stroke: Stroke) {
        if !stroke.points.is_empty() {
            self.strokes.push(stroke);
        }
    }
}

// =============================================================================
// Diary
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Diary {
    pub id: DiaryId,
    pub pages: Vec<Page>,
    pub last_updated: DateTime<Utc>,
}

impl Default for Diary {
    fn default() -> Self {
        Self::new()
    }
}

impl Diary {
    /// A fresh diary with a generated id and two blank pages.
    #[must_use]
    pub fn new() -> Self {
        Self::with_id(DiaryId::generate())
    }

    /// A fresh two-page diary under the given id.
    #[must_use]
    pub fn with_id(id: DiaryId) -> Self {
        Self {
            id,
            pages: vec![Page::blank(PageId::numbered(1)), Page::blank(PageId::numbered(2))],
            last_updated: Utc::now(),
        }
    }

    #[must_use]
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    #[must_use]
    pub fn page(&self, index: usize) -> Option<&Page> {
        self.pages.get(index)
    }

    pub fn page_mut(&mut self, index: usize) -> Option<&mut Page> {
        self.pages.get_mut(index)
    }

    /// Next free `page-N` identifier.
    #[must_use]
    pub fn next_page_id(&self) -> PageId {
        let highest = self
            .pages
            .iter()
            .filter_map(|p| p.id.number())
            .max()
            .unwrap_or(0);
        PageId::numbered(highest + 1)
    }

    /// Inserts a blank page right after `index` and returns the new page's
    /// index.
    pub fn insert_page_after(&mut self, index: usize) -> usize {
        let position = (index + 1).min(self.pages.len());
        let page = Page::blank(self.next_page_id());
        self.pages.insert(position, page);
        position
    }

    /// Records a modification time.
    pub fn touch(&mut self) {
        self.last_updated = Utc::now();
    }

    /// Gives a diary read from storage a page to open on.
    pub fn ensure_page(&mut self) {
        if self.pages.is_empty() {
            self.pages.push(Page::blank(PageId::numbered(1)));
        }
    }
}
