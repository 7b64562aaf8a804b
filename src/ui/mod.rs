// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based architecture
//! with the Elm-style "state down, messages up" pattern.
//!
//! # Screens
//!
//! - [`cover`] - Closed book with the title and an open button
//! - [`book`] - Open book: pages, elements, toolbar and page turns
//!
//! # Overlays
//!
//! - [`share_dialog`] - Share link modal
//! - [`diary_browser`] - Saved diaries panel
//! - [`notifications`] - Toast notification system for user feedback
//!
//! # Shared Infrastructure
//!
//! - [`state`] - Interaction state machines (page turn, element drag)
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode and book colors

pub mod book;
pub mod cover;
pub mod design_tokens;
pub mod diary_browser;
pub mod notifications;
pub mod share_dialog;
pub mod state;
pub mod styles;
pub mod theming;
