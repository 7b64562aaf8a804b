// SPDX-License-Identifier: MPL-2.0
//! Domain layer - the scrapbook document model and its rules.
//!
//! This module holds plain data types and value objects with no GUI
//! dependency; it only relies on `serde` for persistence, `uuid` for
//! identifiers and `chrono` for timestamps.
//!
//! # Modules
//!
//! - [`diary`]: [`Diary`](diary::Diary), [`Page`](diary::Page) and page
//!   elements ([`TextBox`](diary::TextBox), [`Sticker`](diary::Sticker),
//!   [`Stroke`](diary::Stroke)), plus clamped newtypes such as
//!   [`FontSize`](diary::FontSize) and [`Rotation`](diary::Rotation)

pub mod diary;
