// SPDX-License-Identifier: MPL-2.0
//! Loading a picked image into the bytes stored on a page.

use crate::error::{Error, Result};
use image_rs::{GenericImageView, ImageFormat};
use std::fs;
use std::io::Cursor;
use std::path::Path;

/// Largest size an embedded page image is kept at.
pub const MAX_WIDTH: u32 = 640;
pub const MAX_HEIGHT: u32 = 480;

/// File extensions offered by the image picker.
pub const SUPPORTED_EXTENSIONS: [&str; 6] = ["png", "jpg", "jpeg", "gif", "webp", "bmp"];

/// An image ready to be embedded in a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageImage {
    /// PNG-encoded bytes.
    pub png: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

/// Reads, bounds and re-encodes the image at `path`.
///
/// # Errors
///
/// - [`Error::Io`] if the file cannot be read
/// - [`Error::Image`] if the bytes are not a supported image
pub fn load_page_image<P: AsRef<Path>>(path: P) -> Result<PageImage> {
    let bytes = fs::read(path.as_ref())?;
    encode_page_image(&bytes)
}

/// Same as [`load_page_image`] for bytes already in memory.
pub fn encode_page_image(bytes: &[u8]) -> Result<PageImage> {
    let mut img = image_rs::load_from_memory(bytes)?;

    let (width, height) = img.dimensions();
    if width == 0 || height == 0 {
        return Err(Error::Image("image has empty dimensions".into()));
    }
    if width > MAX_WIDTH || height > MAX_HEIGHT {
        img = img.thumbnail(MAX_WIDTH, MAX_HEIGHT);
    }

    let (width, height) = img.dimensions();
    let mut png = Vec::new();
    img.write_to(&mut Cursor::new(&mut png), ImageFormat::Png)?;

    tracing::debug!(width, height, bytes = png.len(), "page image prepared");
    Ok(PageImage { png, width, height })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image_rs::{Rgba, RgbaImage};
    use tempfile::tempdir;

    #[test]
    fn small_image_keeps_its_size() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("small.png");
        RgbaImage::from_pixel(4, 2, Rgba([255, 0, 0, 255]))
            .save(&path)
            .expect("failed to write temporary png");

        let image = load_page_image(&path).expect("png should load");
        assert_eq!((image.width, image.height), (4, 2));
        assert_eq!(
            image_rs::guess_format(&image.png).unwrap(),
            ImageFormat::Png
        );
    }

    #[test]
    fn large_image_is_shrunk_keeping_aspect() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("large.jpg");
        image_rs::DynamicImage::ImageRgb8(image_rs::RgbImage::new(1280, 640))
            .save(&path)
            .expect("failed to write temporary jpeg");

        let image = load_page_image(&path).expect("jpeg should load");
        assert_eq!(image.width, MAX_WIDTH);
        assert_eq!(image.height, 320);

        let decoded = image_rs::load_from_memory(&image.png).unwrap();
        assert_eq!(decoded.dimensions(), (image.width, image.height));
    }

    #[test]
    fn missing_file_is_io_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        match load_page_image(temp_dir.path().join("absent.png")) {
            Err(Error::Io(_)) => {}
            other => panic!("expected Io error, got {other:?}"),
        }
    }

    #[test]
    fn garbage_bytes_are_image_error() {
        match encode_page_image(b"not an image at all") {
            Err(Error::Image(message)) => assert!(!message.is_empty()),
            other => panic!("expected Image error, got {other:?}"),
        }
    }
}
