// SPDX-License-Identifier: MPL-2.0
//! Book message/event types re-exported by the facade.

use super::{Tool, ToolbarTab};
use crate::domain::diary::{FontFamily, HexColor, PageId};
use iced::widget::text_editor;
use iced::Point;
use std::time::Instant;

/// Floating toolbar messages.
#[derive(Debug, Clone)]
pub enum ToolbarMessage {
    SelectTool(Tool),
    ShowTab(ToolbarTab),
}

/// Edits of the selected element from the properties tab.
#[derive(Debug, Clone)]
pub enum PropertiesMessage {
    TextEdited(text_editor::Action),
    FontFamily(FontFamily),
    FontSize(f32),
    Color(HexColor),
    Rotation(f32),
    Scale(f32),
    Delete,
}

/// Pointer input on the page surface, in page coordinates.
#[derive(Debug, Clone)]
pub enum CanvasMessage {
    Pressed { position: Point, width: f32 },
    Moved(Point),
    Released,
    /// Pointer left the page; ends whatever was in progress.
    Left,
}

/// Keyboard shortcuts the application forwards when no widget consumed the
/// key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    TurnPrev,
    TurnNext,
    DeleteSelection,
    Escape,
}

#[derive(Debug, Clone)]
pub enum Message {
    Toolbar(ToolbarMessage),
    Properties(PropertiesMessage),
    Canvas(CanvasMessage),
    TitleChanged(String),
    PickImage,
    ToggleToolbar,
    AddPage,
    Save,
    Share,
    Close,
    Shortcut(Shortcut),
    /// Animation frame while a page turn runs.
    Frame(Instant),
}

impl From<ToolbarMessage> for Message {
    fn from(message: ToolbarMessage) -> Self {
        Message::Toolbar(message)
    }
}

impl From<PropertiesMessage> for Message {
    fn from(message: PropertiesMessage) -> Self {
        Message::Properties(message)
    }
}

impl From<CanvasMessage> for Message {
    fn from(message: CanvasMessage) -> Self {
        Message::Canvas(message)
    }
}

/// Events propagated to the application for side effects.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    SaveRequested,
    ShareRequested,
    PageAdded,
    /// Open a file picker; the result goes to that page.
    ImageRequested(PageId),
    CloseRequested,
}
