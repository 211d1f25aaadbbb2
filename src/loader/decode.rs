// SPDX-License-Identifier: MPL-2.0
//! Decoding of fetched bytes into RGBA images ready for rendering.

use super::LoadError;
use iced::widget::image;
use image_rs::RgbaImage;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

static NEXT_IMAGE_ID: AtomicU64 = AtomicU64::new(1);

/// A decoded image.
///
/// The RGBA pixels are kept next to the render handle so widgets can derive
/// cropped variants (e.g. for clipped cover-fit) without decoding again.
#[derive(Debug, Clone)]
pub struct DecodedImage {
    id: u64,
    pub width: u32,
    pub height: u32,
    pub handle: image::Handle,
    pixels: Arc<RgbaImage>,
}

impl DecodedImage {
    /// Wraps an RGBA buffer.
    #[must_use]
    pub fn from_rgba(pixels: RgbaImage) -> Self {
        let (width, height) = pixels.dimensions();
        let handle = image::Handle::from_rgba(width, height, pixels.as_raw().clone());
        Self {
            id: NEXT_IMAGE_ID.fetch_add(1, Ordering::Relaxed),
            width,
            height,
            handle,
            pixels: Arc::new(pixels),
        }
    }

    /// Process-unique identifier, stable across clones.
    #[must_use]
    pub fn id(&self) -> u64 {
        self.id
    }

    #[must_use]
    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }

    /// Approximate memory footprint of the pixel buffer.
    #[must_use]
    pub fn size_bytes(&self) -> usize {
        (self.width as usize) * (self.height as usize) * 4
    }
}

impl PartialEq for DecodedImage {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

/// Decodes any format supported by the `image` crate.
pub fn decode(bytes: &[u8]) -> Result<DecodedImage, LoadError> {
    if bytes.is_empty() {
        return Err(LoadError::FetchFailed("empty response body".into()));
    }
    let decoded = image_rs::load_from_memory(bytes)?;
    Ok(DecodedImage::from_rgba(decoded.to_rgba8()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image_rs::{ImageFormat, Rgba};
    use std::io::Cursor;

    fn encode_png(width: u32, height: u32) -> Vec<u8> {
        let img = RgbaImage::from_pixel(width, height, Rgba([10, 20, 30, 255]));
        let mut bytes = Vec::new();
        img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .expect("encode png");
        bytes
    }

    #[test]
    fn decodes_png_bytes() {
        let image = decode(&encode_png(4, 3)).expect("decode");
        assert_eq!((image.width, image.height), (4, 3));
        assert_eq!(image.size_bytes(), 48);
        assert_eq!(image.pixels().get_pixel(0, 0), &Rgba([10, 20, 30, 255]));
    }

    #[test]
    fn garbage_is_a_fetch_failure() {
        let err = decode(b"definitely not an image").unwrap_err();
        assert!(matches!(err, LoadError::FetchFailed(_)));
    }

    #[test]
    fn empty_body_is_a_fetch_failure() {
        assert!(matches!(decode(&[]), Err(LoadError::FetchFailed(_))));
    }

    #[test]
    fn ids_are_unique_and_survive_clone() {
        let a = DecodedImage::from_rgba(RgbaImage::new(1, 1));
        let b = DecodedImage::from_rgba(RgbaImage::new(1, 1));
        assert_ne!(a.id(), b.id());
        assert_eq!(a.clone(), a);
    }
}
