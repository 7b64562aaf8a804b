// SPDX-License-Identifier: MPL-2.0
//! Image handling for page photos.
//!
//! A picked file is decoded with the `image` crate, shrunk to fit the page
//! header and re-encoded as PNG before it is embedded in the diary.

pub mod page_image;

pub use page_image::{load_page_image, PageImage, SUPPORTED_EXTENSIONS};
