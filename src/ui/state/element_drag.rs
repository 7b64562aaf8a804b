// SPDX-License-Identifier: MPL-2.0
//! Drag state for moving a text box or sticker on the page.
//!
//! The element stays in place while the pointer moves; the page is only
//! updated once, with the total offset, when the button is released.

use crate::domain::diary::ElementRef;
use iced::{Point, Vector};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ElementDrag {
    grabbed: Option<Grab>,
}

#[derive(Debug, Clone, PartialEq)]
struct Grab {
    element: ElementRef,
    start: Point,
    current: Point,
}

impl ElementDrag {
    pub fn start(&mut self, element: ElementRef, position: Point) {
        self.grabbed = Some(Grab {
            element,
            start: position,
            current: position,
        });
    }

    pub fn update(&mut self, position: Point) {
        if let Some(grab) = &mut self.grabbed {
            grab.current = position;
        }
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.grabbed.is_some()
    }

    #[must_use]
    pub fn element(&self) -> Option<&ElementRef> {
        self.grabbed.as_ref().map(|g| &g.element)
    }

    /// Offset so far, used to draw the element where the pointer holds it.
    #[must_use]
    pub fn offset(&self) -> Vector {
        self.grabbed
            .as_ref()
            .map_or(Vector::ZERO, |g| g.current - g.start)
    }

    /// Ends the drag. Returns the element and the offset to apply, or `None`
    /// when nothing was grabbed or the pointer did not move.
    pub fn finish(&mut self) -> Option<(ElementRef, Vector)> {
        let grab = self.grabbed.take()?;
        let offset = grab.current - grab.start;
        if offset.x == 0.0 && offset.y == 0.0 {
            return None;
        }
        Some((grab.element, offset))
    }

    pub fn cancel(&mut self) {
        self.grabbed = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::diary::ElementId;

    fn sticker() -> ElementRef {
        ElementRef::Sticker(ElementId::from("s1"))
    }

    #[test]
    fn default_is_not_dragging() {
        let drag = ElementDrag::default();
        assert!(!drag.is_dragging());
        assert_eq!(drag.offset(), Vector::ZERO);
    }

    #[test]
    fn finish_reports_total_offset() {
        let mut drag = ElementDrag::default();
        drag.start(sticker(), Point::new(100.0, 50.0));
        drag.update(Point::new(120.0, 40.0));
        drag.update(Point::new(130.0, 45.0));

        assert_eq!(drag.offset(), Vector::new(30.0, -5.0));
        assert_eq!(drag.finish(), Some((sticker(), Vector::new(30.0, -5.0))));
        assert!(!drag.is_dragging());
    }

    #[test]
    fn click_without_movement_is_not_a_move() {
        let mut drag = ElementDrag::default();
        drag.start(sticker(), Point::new(10.0, 10.0));
        assert_eq!(drag.finish(), None);
        assert!(!drag.is_dragging());
    }

    #[test]
    fn cancel_forgets_the_grab() {
        let mut drag = ElementDrag::default();
        drag.start(sticker(), Point::new(10.0, 10.0));
        drag.update(Point::new(50.0, 10.0));
        drag.cancel();
        assert_eq!(drag.finish(), None);
    }
}
