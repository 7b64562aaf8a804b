// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! Messages are Fluent (`.ftl`) files embedded from `assets/i18n/`; a
//! directory passed with `--i18n-dir` can add or replace locales at runtime.
//! The locale comes from the CLI, then the config file, then the system, and
//! falls back to `en-US`. Missing keys in the active locale fall back to
//! `en-US` as well.

pub mod fluent;
