// SPDX-License-Identifier: MPL-2.0
//! `scrapbook` is a diary editor built with the Iced GUI framework.
//!
//! A diary is a book of pages. Each page holds a title, an optional header
//! photo, text boxes, stickers and freehand strokes, and pages are turned by
//! dragging their edges. Diaries are stored as CBOR records in a key-value
//! store and can be reopened through `scrapbook://open?diary=<id>` links.

pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod media;
pub mod share;
pub mod storage;
pub mod ui;
