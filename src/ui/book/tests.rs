// SPDX-License-Identifier: MPL-2.0
use super::*;
use crate::domain::diary::{DiaryId, TEXT_PALETTE};
use std::time::Duration;

const WIDTH: f32 = 800.0;

struct Harness {
    book: State,
    diary: Diary,
    editor: EditorConfig,
}

impl Harness {
    fn new() -> Self {
        let diary = Diary::with_id(DiaryId::parse("test").expect("valid id"));
        Self {
            book: State::new(&diary),
            diary,
            editor: EditorConfig::default(),
        }
    }

    fn send(&mut self, message: impl Into<Message>) -> Event {
        self.book.update(
            message.into(),
            UpdateContext {
                diary: &mut self.diary,
                editor: &self.editor,
            },
        )
    }

    fn press(&mut self, x: f32, y: f32) {
        self.send(CanvasMessage::Pressed {
            position: Point::new(x, y),
            width: WIDTH,
        });
    }

    fn drag(&mut self, from: (f32, f32), to: (f32, f32)) {
        self.press(from.0, from.1);
        self.send(CanvasMessage::Moved(Point::new(to.0, to.1)));
        self.send(CanvasMessage::Released);
    }

    fn finish_animation(&mut self) {
        self.send(Message::Frame(Instant::now() + Duration::from_secs(2)));
    }

    fn page(&self) -> &Page {
        &self.diary.pages[self.book.current_page()]
    }
}

fn tool(tool: Tool) -> ToolbarMessage {
    ToolbarMessage::SelectTool(tool)
}

#[test]
fn new_book_opens_on_first_page_with_nothing_selected() {
    let h = Harness::new();
    assert_eq!(h.book.current_page(), 0);
    assert_eq!(h.book.tool(), None);
    assert!(h.book.selection().is_none());
    assert!(!h.book.toolbar_visible());
}

#[test]
fn text_tool_adds_and_selects_a_text_box() {
    let mut h = Harness::new();
    assert_eq!(h.send(tool(Tool::Text)), Event::None);

    assert_eq!(h.page().text_boxes.len(), 1);
    let id = h.page().text_boxes[0].id.clone();
    assert_eq!(h.book.selection(), Some(&ElementRef::TextBox(id)));
    assert_eq!(h.book.tool(), Some(Tool::Text));
}

#[test]
fn sticker_tool_adds_a_sticker_from_the_glyph_set() {
    let mut h = Harness::new();
    h.send(tool(Tool::Sticker));

    assert_eq!(h.page().stickers.len(), 1);
    let glyph = h.page().stickers[0].content.as_str();
    assert!(crate::domain::diary::STICKER_GLYPHS.contains(&glyph));
    assert!(matches!(h.book.selection(), Some(ElementRef::Sticker(_))));
}

#[test]
fn selecting_the_active_tool_again_puts_it_down() {
    let mut h = Harness::new();
    h.send(tool(Tool::Draw));
    assert_eq!(h.book.tool(), Some(Tool::Draw));
    h.send(tool(Tool::Draw));
    assert_eq!(h.book.tool(), None);
}

#[test]
fn image_tool_requests_a_file_for_the_current_page() {
    let mut h = Harness::new();
    let event = h.send(tool(Tool::Image));
    assert_eq!(event, Event::ImageRequested(PageId::numbered(1)));

    h.book.image_request_finished();
    assert_eq!(h.book.tool(), None);
}

#[test]
fn applied_image_lands_on_the_requested_page() {
    let mut h = Harness::new();
    let image = PageImage {
        png: vec![1, 2, 3],
        width: 1,
        height: 1,
    };
    assert!(h
        .book
        .apply_image(&mut h.diary, &PageId::numbered(2), image));
    assert!(!h.diary.pages[0].has_image());
    assert_eq!(h.diary.pages[1].image, vec![1, 2, 3]);
    assert!(h.book.image(&PageId::numbered(2)).is_some());
}

#[test]
fn image_for_a_missing_page_is_dropped() {
    let mut h = Harness::new();
    let image = PageImage {
        png: vec![1],
        width: 1,
        height: 1,
    };
    assert!(!h
        .book
        .apply_image(&mut h.diary, &PageId::numbered(9), image));
}

#[test]
fn delete_removes_only_the_selected_element() {
    let mut h = Harness::new();
    h.send(tool(Tool::Text));
    h.send(tool(Tool::Sticker));
    h.send(PropertiesMessage::Delete);

    assert_eq!(h.page().text_boxes.len(), 1);
    assert!(h.page().stickers.is_empty());
    assert!(h.book.selection().is_none());
}

#[test]
fn delete_badge_removes_the_selected_element() {
    let mut h = Harness::new();
    h.send(tool(Tool::Text));
    h.send(tool(Tool::Text));
    let bounds = h.page().text_boxes[0].bounds();

    h.press(bounds.x + bounds.width, bounds.y);
    h.send(CanvasMessage::Released);

    assert!(h.page().text_boxes.is_empty());
    assert!(h.book.selection().is_none());
}

#[test]
fn dragging_an_element_moves_it_by_the_pointer_offset() {
    let mut h = Harness::new();
    h.send(tool(Tool::Sticker));
    h.send(tool(Tool::Sticker));
    let before = h.page().stickers[0].position;

    h.drag((174.0, 224.0), (204.0, 204.0));

    let after = h.page().stickers[0].position;
    assert_eq!(after, before.offset(30.0, -20.0));
}

#[test]
fn pressing_an_element_selects_it() {
    let mut h = Harness::new();
    h.send(tool(Tool::Text));
    h.send(tool(Tool::Text));
    h.send(Shortcut::Escape.into_message());
    assert!(h.book.selection().is_none());

    h.press(110.0, 160.0);
    assert!(matches!(h.book.selection(), Some(ElementRef::TextBox(_))));
}

#[test]
fn pressing_empty_paper_clears_the_selection() {
    let mut h = Harness::new();
    h.send(tool(Tool::Sticker));
    h.send(tool(Tool::Sticker));
    h.press(400.0, 500.0);
    assert!(h.book.selection().is_none());
}

#[test]
fn draw_tool_records_a_stroke() {
    let mut h = Harness::new();
    h.send(tool(Tool::Draw));
    h.press(300.0, 300.0);
    h.send(CanvasMessage::Moved(Point::new(310.0, 305.0)));
    h.send(CanvasMessage::Moved(Point::new(320.0, 315.0)));
    assert!(h.book.pending_stroke().is_some());
    h.send(CanvasMessage::Released);

    assert!(h.book.pending_stroke().is_none());
    assert_eq!(h.page().strokes.len(), 1);
    assert_eq!(h.page().strokes[0].points.len(), 3);
    assert_eq!(h.page().strokes[0].color, h.editor.stroke_color());
}

#[test]
fn drag_past_threshold_turns_the_page() {
    let mut h = Harness::new();
    h.drag((790.0, 400.0), (590.0, 400.0));
    assert!(h.book.page_turn().is_animating());
    assert_eq!(h.book.current_page(), 0);

    h.finish_animation();
    assert_eq!(h.book.current_page(), 1);
    assert!(h.book.page_turn().is_idle());
}

#[test]
fn short_drag_falls_back() {
    let mut h = Harness::new();
    h.drag((790.0, 400.0), (750.0, 400.0));
    h.finish_animation();
    assert_eq!(h.book.current_page(), 0);
    assert!(h.book.page_turn().is_idle());
}

#[test]
fn no_turn_before_the_first_page() {
    let mut h = Harness::new();
    h.press(10.0, 400.0);
    assert!(h.book.page_turn().is_idle());
}

#[test]
fn active_tool_blocks_page_turns() {
    let mut h = Harness::new();
    h.send(tool(Tool::Sticker));
    h.drag((790.0, 400.0), (500.0, 400.0));
    h.finish_animation();
    assert_eq!(h.book.current_page(), 0);
}

#[test]
fn keyboard_turns_one_page_at_a_time() {
    let mut h = Harness::new();
    h.send(Message::Shortcut(Shortcut::TurnNext));
    h.finish_animation();
    assert_eq!(h.book.current_page(), 1);

    h.send(Message::Shortcut(Shortcut::TurnNext));
    h.finish_animation();
    assert_eq!(h.book.current_page(), 1);

    h.send(Message::Shortcut(Shortcut::TurnPrev));
    h.finish_animation();
    assert_eq!(h.book.current_page(), 0);
}

#[test]
fn base_page_is_the_next_one_while_turning_forward() {
    let mut h = Harness::new();
    assert_eq!(h.book.base_page_index(2), 0);
    h.press(790.0, 400.0);
    assert_eq!(h.book.base_page_index(2), 1);
}

#[test]
fn add_page_inserts_after_the_current_one() {
    let mut h = Harness::new();
    assert_eq!(h.send(Message::AddPage), Event::PageAdded);
    assert_eq!(h.diary.page_count(), 3);
    assert_eq!(h.diary.pages[1].id, PageId::numbered(3));
    assert_eq!(h.book.current_page(), 0);
}

#[test]
fn title_edits_the_current_page() {
    let mut h = Harness::new();
    h.send(Message::TitleChanged("Beach day".to_string()));
    assert_eq!(h.diary.pages[0].title, "Beach day");
    assert_eq!(
        h.diary.pages[1].title,
        crate::domain::diary::DEFAULT_PAGE_TITLE
    );
}

#[test]
fn properties_style_the_selected_text_box() {
    let mut h = Harness::new();
    h.send(tool(Tool::Text));
    h.send(PropertiesMessage::FontSize(99.0));
    h.send(PropertiesMessage::Color(TEXT_PALETTE[4]));
    h.send(PropertiesMessage::FontFamily(
        crate::domain::diary::FontFamily::Georgia,
    ));

    let text_box = &h.page().text_boxes[0];
    assert_eq!(text_box.font_size.value(), 36.0);
    assert_eq!(text_box.color, TEXT_PALETTE[4]);
    assert_eq!(
        text_box.font_family,
        crate::domain::diary::FontFamily::Georgia
    );
}

#[test]
fn properties_rotate_and_scale_the_selected_sticker() {
    let mut h = Harness::new();
    h.send(tool(Tool::Sticker));
    h.send(PropertiesMessage::Rotation(45.0));
    h.send(PropertiesMessage::Scale(2.0));

    let sticker = &h.page().stickers[0];
    assert_eq!(sticker.rotation.degrees(), 45.0);
    assert_eq!(sticker.scale.value(), 2.0);
}

#[test]
fn properties_tab_needs_a_selection() {
    let mut h = Harness::new();
    h.send(ToolbarMessage::ShowTab(ToolbarTab::Properties));
    assert_eq!(h.book.toolbar_tab(), ToolbarTab::Tools);

    h.send(tool(Tool::Text));
    h.send(ToolbarMessage::ShowTab(ToolbarTab::Properties));
    assert_eq!(h.book.toolbar_tab(), ToolbarTab::Properties);

    h.send(PropertiesMessage::Delete);
    assert_eq!(h.book.toolbar_tab(), ToolbarTab::Tools);
}

#[test]
fn escape_drops_tool_and_selection() {
    let mut h = Harness::new();
    h.send(tool(Tool::Text));
    h.send(Shortcut::Escape.into_message());
    assert_eq!(h.book.tool(), None);
    assert!(h.book.selection().is_none());
}

#[test]
fn side_effects_are_reported_to_the_parent() {
    let mut h = Harness::new();
    assert_eq!(h.send(Message::Save), Event::SaveRequested);
    assert_eq!(h.send(Message::Share), Event::ShareRequested);
    assert_eq!(h.send(Message::Close), Event::CloseRequested);
    assert_eq!(h.send(Message::PickImage), Event::ImageRequested(PageId::numbered(1)));
}

#[test]
fn toolbar_toggles() {
    let mut h = Harness::new();
    h.send(Message::ToggleToolbar);
    assert!(h.book.toolbar_visible());
    h.send(Message::ToggleToolbar);
    assert!(!h.book.toolbar_visible());
}

impl Shortcut {
    fn into_message(self) -> Message {
        Message::Shortcut(self)
    }
}
