// SPDX-License-Identifier: MPL-2.0
//! Drag-to-flip page turn.
//!
//! A turn is a small state machine:
//!
//! ```text
//! Idle ──press in edge zone──▶ Dragging ──release──▶ Completing ──▶ Idle (page moves)
//!                                         └─────────▶ Cancelling ──▶ Idle
//! ```
//!
//! A press inside the left or right edge zone starts a drag toward the
//! previous or next page, but only if that page exists. Horizontal movement
//! maps linearly to a progress in `[0, 1]` over half the page width. On
//! release the turn completes when progress passed the threshold, otherwise
//! it falls back. Both animations are cosine-eased and driven by frame ticks;
//! only a finished completion moves the current page, by exactly one.
//!
//! Time is passed in explicitly so the machine can be stepped in tests.

use crate::config::{
    PAGE_TURN_CANCEL_DURATION, PAGE_TURN_COMPLETE_DURATION, PAGE_TURN_DRAG_SPAN,
    PAGE_TURN_EDGE_ZONE, PAGE_TURN_THRESHOLD,
};
use std::f32::consts::PI;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Prev,
    Next,
}

impl Direction {
    /// Whether a page exists in this direction from `current`.
    #[must_use]
    pub fn is_available(self, current: usize, page_count: usize) -> bool {
        match self {
            Direction::Prev => current > 0,
            Direction::Next => current + 1 < page_count,
        }
    }

    /// Index reached by turning once from `current`; unchanged when there is
    /// no page that way.
    #[must_use]
    pub fn apply(self, current: usize, page_count: usize) -> usize {
        if !self.is_available(current, page_count) {
            return current;
        }
        match self {
            Direction::Prev => current - 1,
            Direction::Next => current + 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Phase {
    Idle,
    Dragging {
        direction: Direction,
        start_x: f32,
        width: f32,
        progress: f32,
    },
    Completing {
        direction: Direction,
        from: f32,
        started: Instant,
        progress: f32,
    },
    Cancelling {
        direction: Direction,
        from: f32,
        started: Instant,
        progress: f32,
    },
}

/// Cosine ease-in-out over `t ∈ [0, 1]`.
#[must_use]
pub fn ease(t: f32) -> f32 {
    0.5 - 0.5 * (PI * t.clamp(0.0, 1.0)).cos()
}

/// Progress of a drag from `start_x` to `x` on a page `width` wide.
#[must_use]
pub fn drag_progress(direction: Direction, start_x: f32, x: f32, width: f32) -> f32 {
    let span = PAGE_TURN_DRAG_SPAN * width;
    if span <= 0.0 || !span.is_finite() {
        return 0.0;
    }
    let displacement = match direction {
        Direction::Next => start_x - x,
        Direction::Prev => x - start_x,
    };
    (displacement / span).clamp(0.0, 1.0)
}

/// Direction a press at `x` would turn, if it lands in an edge zone.
#[must_use]
pub fn edge_direction(x: f32, width: f32) -> Option<Direction> {
    if width <= 0.0 {
        return None;
    }
    if x < PAGE_TURN_EDGE_ZONE * width {
        Some(Direction::Prev)
    } else if x > (1.0 - PAGE_TURN_EDGE_ZONE) * width {
        Some(Direction::Next)
    } else {
        None
    }
}

fn elapsed_fraction(started: Instant, now: Instant, duration: Duration) -> f32 {
    let elapsed = now.saturating_duration_since(started).as_secs_f32();
    (elapsed / duration.as_secs_f32()).min(1.0)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageTurn {
    phase: Phase,
}

impl Default for PageTurn {
    fn default() -> Self {
        Self { phase: Phase::Idle }
    }
}

impl PageTurn {
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self.phase, Phase::Idle)
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, Phase::Dragging { .. })
    }

    /// True while an animation needs frame ticks.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        matches!(
            self.phase,
            Phase::Completing { .. } | Phase::Cancelling { .. }
        )
    }

    #[must_use]
    pub fn direction(&self) -> Option<Direction> {
        match self.phase {
            Phase::Idle => None,
            Phase::Dragging { direction, .. }
            | Phase::Completing { direction, .. }
            | Phase::Cancelling { direction, .. } => Some(direction),
        }
    }

    #[must_use]
    pub fn progress(&self) -> f32 {
        match self.phase {
            Phase::Idle => 0.0,
            Phase::Dragging { progress, .. }
            | Phase::Completing { progress, .. }
            | Phase::Cancelling { progress, .. } => progress,
        }
    }

    /// Presses are ignored while a tool is active, during a drag, and while a
    /// completion runs. A press during a cancellation replaces it.
    fn accepts_new_turn(&self, tool_active: bool) -> bool {
        !tool_active && matches!(self.phase, Phase::Idle | Phase::Cancelling { .. })
    }

    /// Starts dragging if `x` is in an edge zone with a page behind it.
    /// Returns whether a drag started.
    pub fn pointer_down(
        &mut self,
        x: f32,
        width: f32,
        current: usize,
        page_count: usize,
        tool_active: bool,
    ) -> bool {
        if !self.accepts_new_turn(tool_active) {
            return false;
        }
        let Some(direction) = edge_direction(x, width) else {
            return false;
        };
        if !direction.is_available(current, page_count) {
            return false;
        }
        self.phase = Phase::Dragging {
            direction,
            start_x: x,
            width,
            progress: 0.0,
        };
        true
    }

    pub fn pointer_moved(&mut self, x: f32) {
        if let Phase::Dragging {
            direction,
            start_x,
            width,
            ref mut progress,
        } = self.phase
        {
            *progress = drag_progress(direction, start_x, x, width);
        }
    }

    /// Ends a drag: past the threshold the turn completes, otherwise it is
    /// cancelled. Also used when the pointer leaves the book.
    pub fn pointer_released(&mut self, now: Instant) {
        let Phase::Dragging {
            direction,
            progress,
            ..
        } = self.phase
        else {
            return;
        };
        self.phase = if progress > PAGE_TURN_THRESHOLD {
            Phase::Completing {
                direction,
                from: progress,
                started: now,
                progress,
            }
        } else {
            Phase::Cancelling {
                direction,
                from: progress,
                started: now,
                progress,
            }
        };
    }

    /// Keyboard turn: runs the completion animation from zero.
    pub fn turn(
        &mut self,
        direction: Direction,
        current: usize,
        page_count: usize,
        tool_active: bool,
        now: Instant,
    ) -> bool {
        if !self.accepts_new_turn(tool_active) || !direction.is_available(current, page_count) {
            return false;
        }
        self.phase = Phase::Completing {
            direction,
            from: 0.0,
            started: now,
            progress: 0.0,
        };
        true
    }

    /// Advances a running animation. Returns the direction once a completion
    /// finishes; the caller then moves the current page.
    pub fn tick(&mut self, now: Instant) -> Option<Direction> {
        match self.phase {
            Phase::Completing {
                direction,
                from,
                started,
                ref mut progress,
            } => {
                let t = elapsed_fraction(started, now, PAGE_TURN_COMPLETE_DURATION);
                *progress = from + (1.0 - from) * ease(t);
                if t >= 1.0 {
                    self.phase = Phase::Idle;
                    return Some(direction);
                }
                None
            }
            Phase::Cancelling {
                from,
                started,
                ref mut progress,
                ..
            } => {
                let t = elapsed_fraction(started, now, PAGE_TURN_CANCEL_DURATION);
                *progress = from * (1.0 - ease(t));
                if t >= 1.0 {
                    self.phase = Phase::Idle;
                }
                None
            }
            Phase::Idle | Phase::Dragging { .. } => None,
        }
    }

    /// Drops any turn in progress without moving the page.
    pub fn reset(&mut self) {
        self.phase = Phase::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WIDTH: f32 = 800.0;

    fn finish(turn: &mut PageTurn, from: Instant) -> Option<Direction> {
        turn.tick(from + Duration::from_secs(1))
    }

    #[test]
    fn ease_is_anchored_and_monotonic() {
        assert!(ease(0.0).abs() < 1e-6);
        assert!((ease(1.0) - 1.0).abs() < 1e-6);
        assert!((ease(0.5) - 0.5).abs() < 1e-6);
        let mut last = 0.0;
        for i in 1..=20 {
            let v = ease(i as f32 / 20.0);
            assert!(v >= last);
            last = v;
        }
    }

    #[test]
    fn press_outside_edge_zones_is_ignored() {
        let mut turn = PageTurn::default();
        assert!(!turn.pointer_down(400.0, WIDTH, 1, 3, false));
        assert!(turn.is_idle());
    }

    #[test]
    fn press_needs_a_page_in_that_direction() {
        let mut turn = PageTurn::default();
        assert!(!turn.pointer_down(10.0, WIDTH, 0, 3, false));
        assert!(!turn.pointer_down(790.0, WIDTH, 2, 3, false));
        assert!(turn.pointer_down(790.0, WIDTH, 1, 3, false));
        assert_eq!(turn.direction(), Some(Direction::Next));
    }

    #[test]
    fn press_is_blocked_while_tool_active() {
        let mut turn = PageTurn::default();
        assert!(!turn.pointer_down(790.0, WIDTH, 0, 2, true));
        assert!(turn.is_idle());
    }

    #[test]
    fn progress_is_monotonic_and_clamped() {
        let mut turn = PageTurn::default();
        turn.pointer_down(780.0, WIDTH, 0, 2, false);

        let mut last = 0.0;
        for x in (-400..=780).rev().step_by(20) {
            turn.pointer_moved(x as f32);
            let p = turn.progress();
            assert!((0.0..=1.0).contains(&p));
            assert!(p >= last);
            last = p;
        }
        assert_eq!(last, 1.0);

        // Moving the wrong way never goes below zero.
        turn.pointer_moved(1200.0);
        assert_eq!(turn.progress(), 0.0);
    }

    #[test]
    fn prev_drag_grows_to_the_right() {
        let mut turn = PageTurn::default();
        turn.pointer_down(20.0, WIDTH, 1, 2, false);
        turn.pointer_moved(220.0);
        assert!((turn.progress() - 0.5).abs() < 1e-6);
    }

    #[test]
    fn release_below_threshold_cancels_without_turning() {
        let now = Instant::now();
        let mut turn = PageTurn::default();
        turn.pointer_down(780.0, WIDTH, 0, 2, false);
        // Exactly at the threshold: 120 / 400.
        turn.pointer_moved(660.0);
        turn.pointer_released(now);

        assert!(matches!(turn.phase(), Phase::Cancelling { .. }));
        assert_eq!(finish(&mut turn, now), None);
        assert!(turn.is_idle());
    }

    #[test]
    fn release_above_threshold_completes_one_page() {
        let now = Instant::now();
        let mut turn = PageTurn::default();
        turn.pointer_down(780.0, WIDTH, 0, 2, false);
        turn.pointer_moved(600.0);
        turn.pointer_released(now);

        assert!(matches!(turn.phase(), Phase::Completing { .. }));
        let direction = finish(&mut turn, now);
        assert_eq!(direction, Some(Direction::Next));
        assert_eq!(Direction::Next.apply(0, 2), 1);
        assert!(turn.is_idle());
    }

    #[test]
    fn completion_interpolates_towards_one() {
        let now = Instant::now();
        let mut turn = PageTurn::default();
        turn.pointer_down(780.0, WIDTH, 0, 2, false);
        turn.pointer_moved(580.0);
        turn.pointer_released(now);
        let from = turn.progress();

        assert_eq!(turn.tick(now + Duration::from_millis(300)), None);
        let mid = turn.progress();
        assert!(mid > from && mid < 1.0);
        assert!((mid - (from + (1.0 - from) * 0.5)).abs() < 1e-3);

        assert_eq!(
            turn.tick(now + PAGE_TURN_COMPLETE_DURATION),
            Some(Direction::Next)
        );
    }

    #[test]
    fn cancellation_interpolates_towards_zero() {
        let now = Instant::now();
        let mut turn = PageTurn::default();
        turn.pointer_down(10.0, WIDTH, 1, 2, false);
        turn.pointer_moved(90.0);
        turn.pointer_released(now);
        let from = turn.progress();

        turn.tick(now + Duration::from_millis(150));
        assert!(turn.progress() < from);
        assert!(turn.progress() > 0.0);
        turn.tick(now + PAGE_TURN_CANCEL_DURATION);
        assert!(turn.is_idle());
        assert_eq!(turn.progress(), 0.0);
    }

    #[test]
    fn press_during_completion_is_ignored() {
        let now = Instant::now();
        let mut turn = PageTurn::default();
        turn.pointer_down(780.0, WIDTH, 0, 3, false);
        turn.pointer_moved(100.0);
        turn.pointer_released(now);

        assert!(!turn.pointer_down(780.0, WIDTH, 0, 3, false));
        assert!(matches!(turn.phase(), Phase::Completing { .. }));
    }

    #[test]
    fn press_during_cancellation_replaces_it() {
        let now = Instant::now();
        let mut turn = PageTurn::default();
        turn.pointer_down(780.0, WIDTH, 1, 3, false);
        turn.pointer_released(now);
        assert!(matches!(turn.phase(), Phase::Cancelling { .. }));

        assert!(turn.pointer_down(10.0, WIDTH, 1, 3, false));
        assert_eq!(turn.direction(), Some(Direction::Prev));
        assert!(turn.is_dragging());
    }

    #[test]
    fn keyboard_turn_animates_from_zero() {
        let now = Instant::now();
        let mut turn = PageTurn::default();
        assert!(!turn.turn(Direction::Prev, 0, 2, false, now));
        assert!(turn.turn(Direction::Next, 0, 2, false, now));
        assert_eq!(turn.progress(), 0.0);
        assert!(turn.is_animating());
        assert_eq!(finish(&mut turn, now), Some(Direction::Next));
    }

    #[test]
    fn apply_never_leaves_the_book() {
        assert_eq!(Direction::Prev.apply(0, 2), 0);
        assert_eq!(Direction::Next.apply(1, 2), 1);
        assert_eq!(Direction::Prev.apply(1, 2), 0);
    }

    #[test]
    fn release_without_drag_is_a_no_op() {
        let mut turn = PageTurn::default();
        turn.pointer_released(Instant::now());
        assert!(turn.is_idle());
        assert_eq!(turn.tick(Instant::now()), None);
    }
}
