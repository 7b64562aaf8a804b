// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration constants.
//!
//! # Categories
//!
//! - **Page turn**: Gesture zones, threshold and animation timings
//! - **Editor**: Drawing pen bounds
//! - **Notifications**: Tick rate of the auto-dismiss timer

use std::time::Duration;

// ==========================================================================
// Page Turn Defaults
// ==========================================================================

/// Fraction of the page width, on each side, where a drag can start a turn.
pub const PAGE_TURN_EDGE_ZONE: f32 = 0.2;

/// Progress above which a released drag completes the turn.
pub const PAGE_TURN_THRESHOLD: f32 = 0.3;

/// Fraction of the page width a drag must cover to reach full progress.
pub const PAGE_TURN_DRAG_SPAN: f32 = 0.5;

/// Duration of the completing animation.
pub const PAGE_TURN_COMPLETE_DURATION: Duration = Duration::from_millis(600);

/// Duration of the cancelling animation.
pub const PAGE_TURN_CANCEL_DURATION: Duration = Duration::from_millis(300);

// ==========================================================================
// Editor Defaults
// ==========================================================================

/// Minimum drawing pen width.
pub const MIN_STROKE_WIDTH: f32 = 1.0;

/// Maximum drawing pen width.
pub const MAX_STROKE_WIDTH: f32 = 20.0;

// ==========================================================================
// Notification Defaults
// ==========================================================================

/// Interval of the notification auto-dismiss tick.
pub const NOTIFICATION_TICK: Duration = Duration::from_millis(250);

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(PAGE_TURN_EDGE_ZONE > 0.0 && PAGE_TURN_EDGE_ZONE < 0.5);
    assert!(PAGE_TURN_THRESHOLD > 0.0 && PAGE_TURN_THRESHOLD < 1.0);
    assert!(PAGE_TURN_DRAG_SPAN > 0.0);
    assert!(PAGE_TURN_COMPLETE_DURATION.as_millis() > PAGE_TURN_CANCEL_DURATION.as_millis());
    assert!(MIN_STROKE_WIDTH > 0.0);
    assert!(MAX_STROKE_WIDTH > MIN_STROKE_WIDTH);
    assert!(crate::domain::diary::DEFAULT_STROKE_WIDTH >= MIN_STROKE_WIDTH);
    assert!(crate::domain::diary::DEFAULT_STROKE_WIDTH <= MAX_STROKE_WIDTH);
};
