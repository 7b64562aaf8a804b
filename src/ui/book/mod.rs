// SPDX-License-Identifier: MPL-2.0
//! The open book: one page at a time, its elements, the floating toolbar and
//! the drag-to-flip gesture.
//!
//! This module follows a "state down, messages up" pattern. The diary itself
//! belongs to the application and is lent to [`State::update`] through an
//! [`UpdateContext`]; the book only keeps interaction state (current page,
//! selection, active tool, gestures in progress). Anything with a side effect
//! outside the diary (saving, file dialogs, the share dialog) is returned as an
//! [`Event`].

mod canvas;
mod messages;
mod toolbar;
mod view;

#[cfg(test)]
mod tests;

pub use canvas::Spine;
pub use messages::{CanvasMessage, Event, Message, PropertiesMessage, Shortcut, ToolbarMessage};
pub use view::{render, ViewContext};

use crate::config::EditorConfig;
use crate::domain::diary::{
    Diary, ElementId, ElementRef, FontSize, Page, PageId, Position, Rotation, Sticker,
    StickerScale, Stroke,
};
use crate::media::PageImage;
use crate::ui::state::{Direction, ElementDrag, PageTurn, Phase};
use iced::widget::{image, text_editor};
use iced::{Point, Subscription, Vector};
use std::collections::HashMap;
use std::time::Instant;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    Text,
    Image,
    Sticker,
    Draw,
}

impl Tool {
    pub const ALL: [Tool; 4] = [Tool::Text, Tool::Image, Tool::Sticker, Tool::Draw];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToolbarTab {
    #[default]
    Tools,
    Properties,
}

/// Mutable application data the book works on.
pub struct UpdateContext<'a> {
    pub diary: &'a mut Diary,
    pub editor: &'a EditorConfig,
}

pub struct State {
    current: usize,
    tool: Option<Tool>,
    selection: Option<ElementRef>,
    page_turn: PageTurn,
    element_drag: ElementDrag,
    /// Stroke being drawn, committed to the page on release.
    stroke: Option<Stroke>,
    toolbar_visible: bool,
    toolbar_tab: ToolbarTab,
    /// Editing buffer of the selected text box.
    text_editor: Option<(ElementId, text_editor::Content)>,
    images: HashMap<PageId, image::Handle>,
}

impl std::fmt::Debug for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("State")
            .field("current", &self.current)
            .field("tool", &self.tool)
            .field("selection", &self.selection)
            .field("page_turn", &self.page_turn)
            .field("toolbar_visible", &self.toolbar_visible)
            .field("toolbar_tab", &self.toolbar_tab)
            .finish_non_exhaustive()
    }
}

impl State {
    /// Opens `diary` on its first page.
    #[must_use]
    pub fn new(diary: &Diary) -> Self {
        let mut state = Self {
            current: 0,
            tool: None,
            selection: None,
            page_turn: PageTurn::default(),
            element_drag: ElementDrag::default(),
            stroke: None,
            toolbar_visible: false,
            toolbar_tab: ToolbarTab::Tools,
            text_editor: None,
            images: HashMap::new(),
        };
        state.sync_images(diary);
        state
    }

    #[must_use]
    pub fn current_page(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn tool(&self) -> Option<Tool> {
        self.tool
    }

    #[must_use]
    pub fn selection(&self) -> Option<&ElementRef> {
        self.selection.as_ref()
    }

    #[must_use]
    pub fn page_turn(&self) -> &PageTurn {
        &self.page_turn
    }

    #[must_use]
    pub fn toolbar_visible(&self) -> bool {
        self.toolbar_visible
    }

    #[must_use]
    pub fn toolbar_tab(&self) -> ToolbarTab {
        self.toolbar_tab
    }

    #[must_use]
    pub fn pending_stroke(&self) -> Option<&Stroke> {
        self.stroke.as_ref()
    }

    /// Offset of the element being dragged, if any.
    #[must_use]
    pub fn drag_offset(&self) -> Option<(&ElementRef, Vector)> {
        self.element_drag
            .element()
            .map(|element| (element, self.element_drag.offset()))
    }

    #[must_use]
    pub fn image(&self, page: &PageId) -> Option<&image::Handle> {
        self.images.get(page)
    }

    fn text_content(&self) -> Option<&text_editor::Content> {
        self.text_editor.as_ref().map(|(_, content)| content)
    }

    /// Page shown underneath the turning sheet: the next page while turning
    /// forward, otherwise the current one.
    #[must_use]
    pub fn base_page_index(&self, page_count: usize) -> usize {
        match self.page_turn.direction() {
            Some(Direction::Next) => Direction::Next.apply(self.current, page_count),
            _ => self.current,
        }
    }

    /// Rebuilds image handles after the diary was replaced.
    pub fn sync_images(&mut self, diary: &Diary) {
        self.images = diary
            .pages
            .iter()
            .filter(|page| page.has_image())
            .map(|page| (page.id.clone(), image::Handle::from_bytes(page.image.clone())))
            .collect();
    }

    /// Embeds a picked image into the page it was requested for.
    pub fn apply_image(&mut self, diary: &mut Diary, page_id: &PageId, image: PageImage) -> bool {
        self.image_request_finished();
        let Some(page) = diary.pages.iter_mut().find(|page| &page.id == page_id) else {
            return false;
        };
        page.image = image.png;
        self.images.insert(
            page_id.clone(),
            image::Handle::from_bytes(page.image.clone()),
        );
        true
    }

    /// The file picker closed, with or without a file.
    pub fn image_request_finished(&mut self) {
        if self.tool == Some(Tool::Image) {
            self.tool = None;
        }
    }

    pub fn subscription(&self) -> Subscription<Message> {
        if self.page_turn.is_animating() {
            iced::window::frames().map(Message::Frame)
        } else {
            Subscription::none()
        }
    }

    /// Update the state and emit an [`Event`] for the parent when needed.
    pub fn update(&mut self, message: Message, ctx: UpdateContext<'_>) -> Event {
        match message {
            Message::Toolbar(msg) => self.handle_toolbar(msg, ctx),
            Message::Properties(msg) => {
                self.handle_properties(msg, ctx.diary);
                Event::None
            }
            Message::Canvas(msg) => {
                self.handle_canvas(msg, ctx);
                Event::None
            }
            Message::TitleChanged(title) => {
                if let Some(page) = ctx.diary.page_mut(self.current) {
                    page.title = title;
                }
                Event::None
            }
            Message::PickImage => ctx
                .diary
                .page(self.current)
                .map_or(Event::None, |page| Event::ImageRequested(page.id.clone())),
            Message::ToggleToolbar => {
                self.toolbar_visible = !self.toolbar_visible;
                Event::None
            }
            Message::AddPage => {
                ctx.diary.insert_page_after(self.current);
                Event::PageAdded
            }
            Message::Save => {
                self.pointer_released(ctx.diary);
                Event::SaveRequested
            }
            Message::Share => {
                self.pointer_released(ctx.diary);
                Event::ShareRequested
            }
            Message::Close => {
                self.pointer_released(ctx.diary);
                self.page_turn.reset();
                Event::CloseRequested
            }
            Message::Shortcut(shortcut) => {
                self.handle_shortcut(shortcut, ctx.diary);
                Event::None
            }
            Message::Frame(now) => {
                self.advance(now, ctx.diary.page_count());
                Event::None
            }
        }
    }

    fn handle_toolbar(&mut self, message: ToolbarMessage, ctx: UpdateContext<'_>) -> Event {
        match message {
            ToolbarMessage::ShowTab(ToolbarTab::Properties) if self.selection.is_none() => {
                Event::None
            }
            ToolbarMessage::ShowTab(tab) => {
                self.toolbar_tab = tab;
                Event::None
            }
            ToolbarMessage::SelectTool(tool) => self.select_tool(tool, ctx),
        }
    }

    /// Tools toggle: picking the active one again puts it down. Text and
    /// sticker tools add their element right away, the image tool asks for a
    /// file.
    fn select_tool(&mut self, tool: Tool, ctx: UpdateContext<'_>) -> Event {
        if self.tool == Some(tool) {
            self.tool = None;
            return Event::None;
        }
        self.tool = Some(tool);

        let Some(page) = ctx.diary.page_mut(self.current) else {
            return Event::None;
        };
        match tool {
            Tool::Text => {
                let element = page.add_text_box(ctx.editor.text_style());
                self.select(element, page);
                Event::None
            }
            Tool::Sticker => {
                let element = page.add_sticker(Sticker::random());
                self.select(element, page);
                Event::None
            }
            Tool::Image => {
                self.clear_selection();
                Event::ImageRequested(page.id.clone())
            }
            Tool::Draw => {
                self.clear_selection();
                Event::None
            }
        }
    }

    fn select(&mut self, element: ElementRef, page: &Page) {
        self.text_editor = match &element {
            ElementRef::TextBox(id) => page
                .text_box(id)
                .map(|text_box| (id.clone(), text_editor::Content::with_text(&text_box.content))),
            ElementRef::Sticker(_) => None,
        };
        self.selection = Some(element);
    }

    fn clear_selection(&mut self) {
        self.selection = None;
        self.text_editor = None;
        if self.toolbar_tab == ToolbarTab::Properties {
            self.toolbar_tab = ToolbarTab::Tools;
        }
    }

    fn delete_selection(&mut self, diary: &mut Diary) {
        if let (Some(selected), Some(page)) = (self.selection.take(), diary.page_mut(self.current))
        {
            page.remove(&selected);
        }
        self.clear_selection();
    }

    fn handle_properties(&mut self, message: PropertiesMessage, diary: &mut Diary) {
        if let PropertiesMessage::Delete = message {
            self.delete_selection(diary);
            return;
        }
        let (Some(selected), Some(page)) = (self.selection.as_ref(), diary.page_mut(self.current))
        else {
            return;
        };

        match (message, selected) {
            (PropertiesMessage::TextEdited(action), ElementRef::TextBox(id)) => {
                let Some((editing, content)) = self.text_editor.as_mut() else {
                    return;
                };
                if editing != id {
                    return;
                }
                let is_edit = action.is_edit();
                content.perform(action);
                if is_edit {
                    if let Some(text_box) = page.text_box_mut(id) {
                        text_box.content = editor_text(content);
                    }
                }
            }
            (PropertiesMessage::FontFamily(family), ElementRef::TextBox(id)) => {
                if let Some(text_box) = page.text_box_mut(id) {
                    text_box.font_family = family;
                }
            }
            (PropertiesMessage::FontSize(size), ElementRef::TextBox(id)) => {
                if let Some(text_box) = page.text_box_mut(id) {
                    text_box.font_size = FontSize::new(size);
                }
            }
            (PropertiesMessage::Color(color), ElementRef::TextBox(id)) => {
                if let Some(text_box) = page.text_box_mut(id) {
                    text_box.color = color;
                }
            }
            (PropertiesMessage::Rotation(degrees), ElementRef::Sticker(id)) => {
                if let Some(sticker) = page.sticker_mut(id) {
                    sticker.rotation = Rotation::new(degrees);
                }
            }
            (PropertiesMessage::Scale(scale), ElementRef::Sticker(id)) => {
                if let Some(sticker) = page.sticker_mut(id) {
                    sticker.scale = StickerScale::new(scale);
                }
            }
            _ => {}
        }
    }

    fn handle_canvas(&mut self, message: CanvasMessage, ctx: UpdateContext<'_>) {
        match message {
            CanvasMessage::Pressed { position, width } => {
                self.pointer_pressed(position, width, ctx);
            }
            CanvasMessage::Moved(position) => self.pointer_moved(position),
            CanvasMessage::Released | CanvasMessage::Left => self.pointer_released(ctx.diary),
        }
    }

    /// Press priority: drawing, the delete badge of the selection, an
    /// element, a page-turn edge, and finally empty paper (deselects).
    fn pointer_pressed(&mut self, position: Point, width: f32, ctx: UpdateContext<'_>) {
        if matches!(self.page_turn.phase(), Phase::Completing { .. }) {
            return;
        }
        let page_count = ctx.diary.page_count();
        let Some(page) = ctx.diary.page_mut(self.current) else {
            return;
        };
        let point = Position::new(position.x, position.y);

        if self.tool == Some(Tool::Draw) {
            self.stroke = Some(Stroke::begin(
                point,
                ctx.editor.stroke_color(),
                ctx.editor.stroke_width(),
            ));
            return;
        }

        if let Some(selected) = self.selection.clone() {
            let on_badge = page
                .bounds_of(&selected)
                .is_some_and(|bounds| canvas::hits_delete_badge(&bounds, position));
            if on_badge {
                page.remove(&selected);
                self.clear_selection();
                return;
            }
        }

        if let Some(element) = page.element_at(point) {
            if self.selection.as_ref() != Some(&element) {
                self.select(element.clone(), page);
            }
            self.element_drag.start(element, position);
            return;
        }

        let started = self.page_turn.pointer_down(
            position.x,
            width,
            self.current,
            page_count,
            self.tool.is_some(),
        );
        if started {
            tracing::trace!(direction = ?self.page_turn.direction(), "page drag started");
        }
        self.clear_selection();
    }

    fn pointer_moved(&mut self, position: Point) {
        if let Some(stroke) = &mut self.stroke {
            stroke.extend_to(Position::new(position.x, position.y));
        }
        self.element_drag.update(position);
        self.page_turn.pointer_moved(position.x);
    }

    fn pointer_released(&mut self, diary: &mut Diary) {
        if let Some(stroke) = self.stroke.take() {
            if let Some(page) = diary.page_mut(self.current) {
                page.add_stroke(stroke);
            }
        }
        if let Some((element, offset)) = self.element_drag.finish() {
            if let Some(page) = diary.page_mut(self.current) {
                page.move_element(&element, offset.x, offset.y);
            }
        }
        self.page_turn.pointer_released(Instant::now());
    }

    fn handle_shortcut(&mut self, shortcut: Shortcut, diary: &mut Diary) {
        let direction = match shortcut {
            Shortcut::TurnPrev => Direction::Prev,
            Shortcut::TurnNext => Direction::Next,
            Shortcut::DeleteSelection => {
                self.delete_selection(diary);
                return;
            }
            Shortcut::Escape => {
                self.tool = None;
                self.stroke = None;
                self.element_drag.cancel();
                self.clear_selection();
                return;
            }
        };
        let started = self.page_turn.turn(
            direction,
            self.current,
            diary.page_count(),
            self.tool.is_some(),
            Instant::now(),
        );
        if started {
            self.clear_selection();
        }
    }

    fn advance(&mut self, now: Instant, page_count: usize) {
        if let Some(direction) = self.page_turn.tick(now) {
            self.current = direction.apply(self.current, page_count);
            self.clear_selection();
            tracing::debug!(page = self.current + 1, of = page_count, "page turned");
        }
    }
}

/// Editor text without the trailing newline the buffer always ends with.
fn editor_text(content: &text_editor::Content) -> String {
    let mut text = content.text();
    if text.ends_with('\n') {
        text.pop();
    }
    text
}
