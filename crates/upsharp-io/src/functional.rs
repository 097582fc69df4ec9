use std::path::Path;

use upsharp_image::Image;

use crate::error::IoError;
use crate::{jpeg, png, webp};

/// Supported input image formats, detected from content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    /// Portable Network Graphics.
    Png,
    /// JPEG/JFIF.
    Jpeg,
    /// WEBP (RIFF container).
    Webp,
}

impl ImageFormat {
    /// Detect the image format from the leading magic bytes.
    ///
    /// This is the content gate of the pipeline: bytes that do not look
    /// like a supported raster image are rejected before any decoder runs.
    ///
    /// # Example
    ///
    /// ```
    /// use upsharp_io::functional::ImageFormat;
    ///
    /// let header = [0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a, 0x00];
    /// assert_eq!(ImageFormat::detect(&header), Some(ImageFormat::Png));
    /// assert_eq!(ImageFormat::detect(b"not an image"), None);
    /// ```
    pub fn detect(bytes: &[u8]) -> Option<Self> {
        if bytes.starts_with(&[0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a]) {
            Some(Self::Png)
        } else if bytes.starts_with(&[0xff, 0xd8, 0xff]) {
            Some(Self::Jpeg)
        } else if bytes.len() >= 12 && &bytes[0..4] == b"RIFF" && &bytes[8..12] == b"WEBP" {
            Some(Self::Webp)
        } else {
            None
        }
    }
}

/// Decode image bytes of any supported format into an rgba8 image.
///
/// # Arguments
///
/// * `bytes` - Raw bytes of a PNG, JPEG or WEBP file.
///
/// # Errors
///
/// Returns [`IoError::UnsupportedFormat`] if the content is not recognized
/// as one of the supported formats.
pub fn decode_image_bytes_rgba8(bytes: &[u8]) -> Result<Image<u8, 4>, IoError> {
    match ImageFormat::detect(bytes).ok_or(IoError::UnsupportedFormat)? {
        ImageFormat::Png => png::decode_image_png_rgba8(bytes),
        ImageFormat::Jpeg => jpeg::decode_image_jpeg_rgba8(bytes),
        ImageFormat::Webp => webp::decode_image_webp_rgba8(bytes),
    }
}

/// Read an image file of any supported format into an rgba8 image.
///
/// The format is detected from the file content, not the extension.
///
/// # Arguments
///
/// * `file_path` - The path to a PNG, JPEG or WEBP file.
pub fn read_image_any_rgba8(file_path: impl AsRef<Path>) -> Result<Image<u8, 4>, IoError> {
    let file_path = file_path.as_ref();
    if !file_path.exists() {
        return Err(IoError::FileDoesNotExist(file_path.to_path_buf()));
    }

    let bytes = std::fs::read(file_path)?;
    decode_image_bytes_rgba8(&bytes)
}
