// SPDX-License-Identifier: MPL-2.0
//! Interaction state kept outside the widgets: page turns and element drags.

pub mod element_drag;
pub mod page_turn;

pub use element_drag::ElementDrag;
pub use page_turn::{Direction, PageTurn, Phase};
