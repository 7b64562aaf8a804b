// SPDX-License-Identifier: MPL-2.0
//! Canvas programs of the open book.
//!
//! - [`PageCanvas`] draws the strokes, text boxes and stickers of one page and
//!   turns pointer input into [`CanvasMessage`]s.
//! - [`TurnOverlay`] draws the sheet that sweeps across the page while it
//!   turns. It never handles input.
//! - [`Spine`] is the ringed binding shared with the cover.

use super::{CanvasMessage, Message};
use crate::domain::diary::{Bounds, ElementRef, Page, Stroke, TextBox, STICKER_BASE_SIZE};
use crate::ui::design_tokens::{opacity, palette, typography};
use crate::ui::state::{Direction, Phase};
use crate::ui::theming::{to_color, ColorScheme};
use iced::widget::canvas::{self, Frame, Geometry, LineCap, LineJoin, Path};
use iced::widget::Action;
use iced::{mouse, Color, Font, Pixels, Point, Rectangle, Renderer, Size, Theme, Vector};

/// Radius of the round delete badge drawn on the selected element.
pub const DELETE_BADGE_RADIUS: f32 = 10.0;

/// Number of rings along the spine.
const SPINE_RINGS: usize = 20;

/// Width of the fold shadow at mid-turn.
const FOLD_SHADOW_WIDTH: f32 = 18.0;

/// Whether `position` falls on the delete badge at the top-right corner of
/// `bounds`.
#[must_use]
pub fn hits_delete_badge(bounds: &Bounds, position: Point) -> bool {
    let center = Point::new(bounds.x + bounds.width, bounds.y);
    center.distance(position) <= DELETE_BADGE_RADIUS
}

fn to_rectangle(bounds: &Bounds, offset: Vector) -> Rectangle {
    Rectangle::new(
        Point::new(bounds.x + offset.x, bounds.y + offset.y),
        Size::new(bounds.width, bounds.height),
    )
}

// =============================================================================
// Page surface
// =============================================================================

/// Elements of one page plus whatever is being drawn or dragged on it.
pub struct PageCanvas<'a> {
    pub page: &'a Page,
    pub selection: Option<&'a ElementRef>,
    pub drag: Option<(&'a ElementRef, Vector)>,
    pub pending_stroke: Option<&'a Stroke>,
    pub drawing: bool,
    pub colors: &'a ColorScheme,
}

impl PageCanvas<'_> {
    fn offset_of(&self, element: &ElementRef) -> Vector {
        match self.drag {
            Some((dragged, offset)) if dragged == element => offset,
            _ => Vector::ZERO,
        }
    }

    fn draw_stroke(frame: &mut Frame, stroke: &Stroke) {
        let color = to_color(stroke.color);
        match stroke.points.as_slice() {
            [] => {}
            [dot] => {
                frame.fill(
                    &Path::circle(Point::new(dot.x, dot.y), stroke.width / 2.0),
                    color,
                );
            }
            [first, rest @ ..] => {
                let path = Path::new(|builder| {
                    builder.move_to(Point::new(first.x, first.y));
                    for point in rest {
                        builder.line_to(Point::new(point.x, point.y));
                    }
                });
                frame.stroke(
                    &path,
                    canvas::Stroke::default()
                        .with_width(stroke.width)
                        .with_color(color)
                        .with_line_cap(LineCap::Round)
                        .with_line_join(LineJoin::Round),
                );
            }
        }
    }

    fn draw_text_box(frame: &mut Frame, text_box: &TextBox, offset: Vector) {
        frame.fill_text(canvas::Text {
            content: text_box.content.clone(),
            position: Point::new(text_box.position.x + offset.x, text_box.position.y + offset.y),
            color: to_color(text_box.color),
            size: Pixels(text_box.font_size.value()),
            font: Font::with_name(text_box.font_family.family_name()),
            ..canvas::Text::default()
        });
    }

    fn draw_selection(&self, frame: &mut Frame, bounds: &Bounds, offset: Vector) {
        let ring = to_rectangle(bounds, offset);
        frame.stroke(
            &Path::rectangle(ring.position(), ring.size()),
            canvas::Stroke::default()
                .with_width(2.0)
                .with_color(self.colors.accent),
        );

        let badge = Point::new(ring.x + ring.width, ring.y);
        frame.fill(&Path::circle(badge, DELETE_BADGE_RADIUS), palette::ERROR_500);
        frame.fill_text(canvas::Text {
            content: "×".to_string(),
            position: Point::new(badge.x - 4.0, badge.y - 9.0),
            color: palette::WHITE,
            size: Pixels(typography::BODY),
            ..canvas::Text::default()
        });
    }
}

/// Whether the left button went down on this canvas and has not been released.
#[derive(Debug, Default)]
pub struct PointerState {
    pressed: bool,
}

impl canvas::Program<Message> for PageCanvas<'_> {
    type State = PointerState;

    fn update(
        &self,
        state: &mut Self::State,
        event: &iced::Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<Action<Message>> {
        let message = match event {
            iced::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                let position = cursor.position_in(bounds)?;
                state.pressed = true;
                CanvasMessage::Pressed {
                    position,
                    width: bounds.width,
                }
            }
            iced::Event::Mouse(mouse::Event::CursorMoved { .. }) if state.pressed => {
                match cursor.position_in(bounds) {
                    Some(position) => CanvasMessage::Moved(position),
                    None => {
                        state.pressed = false;
                        CanvasMessage::Left
                    }
                }
            }
            iced::Event::Mouse(mouse::Event::CursorLeft) if state.pressed => {
                state.pressed = false;
                CanvasMessage::Left
            }
            iced::Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left))
                if state.pressed =>
            {
                state.pressed = false;
                CanvasMessage::Released
            }
            _ => return None,
        };
        Some(Action::publish(Message::Canvas(message)).and_capture())
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());

        // Margin line
        frame.stroke(
            &Path::line(Point::new(24.0, 0.0), Point::new(24.0, bounds.height)),
            canvas::Stroke::default()
                .with_width(1.0)
                .with_color(self.colors.paper_rule),
        );

        for stroke in self.page.strokes.iter().chain(self.pending_stroke) {
            Self::draw_stroke(&mut frame, stroke);
        }

        for text_box in &self.page.text_boxes {
            let element = ElementRef::TextBox(text_box.id.clone());
            Self::draw_text_box(&mut frame, text_box, self.offset_of(&element));
        }

        for sticker in &self.page.stickers {
            let element = ElementRef::Sticker(sticker.id.clone());
            let offset = self.offset_of(&element);
            let center = sticker.bounds().center();
            let size = STICKER_BASE_SIZE * sticker.scale.value();
            frame.with_save(|frame| {
                frame.translate(Vector::new(center.x + offset.x, center.y + offset.y));
                frame.rotate(sticker.rotation.radians());
                frame.fill_text(canvas::Text {
                    content: sticker.content.clone(),
                    position: Point::new(-size / 2.0, -size / 2.0),
                    size: Pixels(size),
                    ..canvas::Text::default()
                });
            });
        }

        if let Some(selected) = self.selection {
            if let Some(element_bounds) = self.page.bounds_of(selected) {
                self.draw_selection(&mut frame, &element_bounds, self.offset_of(selected));
            }
        }

        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        state: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        let Some(position) = cursor.position_in(bounds) else {
            return mouse::Interaction::default();
        };
        if self.drawing {
            return mouse::Interaction::Crosshair;
        }
        if state.pressed && self.drag.is_some() {
            return mouse::Interaction::Grabbing;
        }
        let point = crate::domain::diary::Position::new(position.x, position.y);
        if self.page.element_at(point).is_some() {
            mouse::Interaction::Grab
        } else {
            mouse::Interaction::default()
        }
    }
}

// =============================================================================
// Turning sheet
// =============================================================================

/// Paints the turning sheet over the page underneath.
pub struct TurnOverlay<'a> {
    pub phase: Phase,
    /// Title of the page printed on the sheet.
    pub sheet_title: &'a str,
    pub can_turn_prev: bool,
    pub can_turn_next: bool,
    pub colors: &'a ColorScheme,
}

impl TurnOverlay<'_> {
    /// Width of the sheet measured from the spine, and its tint.
    fn sheet(direction: Direction, progress: f32, width: f32) -> (f32, Color) {
        match direction {
            Direction::Next => (width * (1.0 - progress), palette::SHEET_NEXT),
            Direction::Prev => (width * progress, palette::SHEET_PREV),
        }
    }

    fn draw_hints(&self, frame: &mut Frame, bounds: Rectangle) {
        let color = Color {
            a: opacity::OVERLAY_MEDIUM,
            ..self.colors.accent
        };
        let y = bounds.height / 2.0 - typography::TITLE_LG / 2.0;
        let hints = [
            (self.can_turn_prev, "‹", 6.0),
            (
                self.can_turn_next,
                "›",
                bounds.width - typography::TITLE_LG / 2.0 - 6.0,
            ),
        ];
        for (available, glyph, x) in hints {
            if available {
                frame.fill_text(canvas::Text {
                    content: glyph.to_string(),
                    position: Point::new(x, y),
                    color,
                    size: Pixels(typography::TITLE_LG),
                    ..canvas::Text::default()
                });
            }
        }
    }
}

impl canvas::Program<Message> for TurnOverlay<'_> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());

        let (direction, progress) = match self.phase {
            Phase::Idle => {
                self.draw_hints(&mut frame, bounds);
                return vec![frame.into_geometry()];
            }
            Phase::Dragging {
                direction,
                progress,
                ..
            }
            | Phase::Completing {
                direction,
                progress,
                ..
            }
            | Phase::Cancelling {
                direction,
                progress,
                ..
            } => (direction, progress.clamp(0.0, 1.0)),
        };

        let (sheet_width, tint) = Self::sheet(direction, progress, bounds.width);
        if sheet_width > 0.0 {
            frame.fill_rectangle(Point::ORIGIN, Size::new(sheet_width, bounds.height), tint);

            if sheet_width > bounds.width / 3.0 {
                frame.fill_text(canvas::Text {
                    content: self.sheet_title.to_string(),
                    position: Point::new(32.0, 20.0),
                    color: self.colors.ink,
                    size: Pixels(typography::TITLE_MD),
                    ..canvas::Text::default()
                });
            }
        }

        // Fold shadow, widest halfway through the turn.
        let shadow_width = FOLD_SHADOW_WIDTH * (std::f32::consts::PI * progress).sin();
        if shadow_width > 0.5 && sheet_width < bounds.width {
            frame.fill_rectangle(
                Point::new(sheet_width, 0.0),
                Size::new(shadow_width, bounds.height),
                self.colors.fold_shadow,
            );
        }

        vec![frame.into_geometry()]
    }
}

// =============================================================================
// Spine
// =============================================================================

/// Binding strip with its rings.
pub struct Spine<'a> {
    pub colors: &'a ColorScheme,
}

impl<Message> canvas::Program<Message> for Spine<'_> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        frame.fill_rectangle(Point::ORIGIN, bounds.size(), self.colors.binding);

        #[allow(clippy::cast_precision_loss)]
        let gap = bounds.height / (SPINE_RINGS as f32 + 1.0);
        let radius = (bounds.width / 4.0).min(gap / 2.5);
        let x = bounds.width / 2.0;
        for ring in 1..=SPINE_RINGS {
            #[allow(clippy::cast_precision_loss)]
            let y = gap * ring as f32;
            frame.stroke(
                &Path::circle(Point::new(x, y), radius),
                canvas::Stroke::default()
                    .with_width(2.0)
                    .with_color(self.colors.binding_light),
            );
        }

        vec![frame.into_geometry()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds() -> Bounds {
        Bounds {
            x: 100.0,
            y: 150.0,
            width: 80.0,
            height: 20.0,
        }
    }

    #[test]
    fn badge_sits_on_the_top_right_corner() {
        assert!(hits_delete_badge(&bounds(), Point::new(180.0, 150.0)));
        assert!(hits_delete_badge(&bounds(), Point::new(186.0, 144.0)));
    }

    #[test]
    fn badge_misses_the_rest_of_the_element() {
        assert!(!hits_delete_badge(&bounds(), Point::new(100.0, 150.0)));
        assert!(!hits_delete_badge(&bounds(), Point::new(140.0, 160.0)));
        assert!(!hits_delete_badge(&bounds(), Point::new(195.0, 150.0)));
    }

    #[test]
    fn next_sheet_shrinks_toward_the_spine() {
        let (start, _) = TurnOverlay::sheet(Direction::Next, 0.0, 400.0);
        let (half, _) = TurnOverlay::sheet(Direction::Next, 0.5, 400.0);
        let (end, _) = TurnOverlay::sheet(Direction::Next, 1.0, 400.0);
        assert_eq!((start, half, end), (400.0, 200.0, 0.0));
    }

    #[test]
    fn prev_sheet_grows_from_the_spine() {
        let (start, tint) = TurnOverlay::sheet(Direction::Prev, 0.0, 400.0);
        let (end, _) = TurnOverlay::sheet(Direction::Prev, 1.0, 400.0);
        assert_eq!((start, end), (0.0, 400.0));
        assert_eq!(tint, palette::SHEET_PREV);
    }
}
