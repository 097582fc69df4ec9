use std::{fs, io::Cursor, path::Path};

use image_webp::WebPDecoder;
use upsharp_image::{Image, ImageSize};

use crate::conv_utils::rgba_from_rgb;
use crate::error::IoError;

/// Read a WEBP image with four channels (rgba8).
///
/// Sources without an alpha plane are expanded with an opaque alpha.
///
/// # Arguments
///
/// * `file_path` - The path to the WEBP file.
///
/// # Returns
///
/// A RGBA image with four channels (rgba8).
pub fn read_image_webp_rgba8(file_path: impl AsRef<Path>) -> Result<Image<u8, 4>, IoError> {
    let file_path = file_path.as_ref();
    if !file_path.exists() {
        return Err(IoError::FileDoesNotExist(file_path.to_path_buf()));
    }

    let bytes = fs::read(file_path)?;
    decode_image_webp_rgba8(&bytes)
}

/// Decode a WEBP image with four channels (rgba8) from raw bytes.
///
/// # Arguments
///
/// * `bytes` - Raw bytes of the webp file.
pub fn decode_image_webp_rgba8(bytes: &[u8]) -> Result<Image<u8, 4>, IoError> {
    let mut decoder = WebPDecoder::new(Cursor::new(bytes))?;

    let buf_size = decoder
        .output_buffer_size()
        .ok_or(IoError::WebpDecodingError(
            image_webp::DecodingError::ImageTooLarge,
        ))?;
    let mut image_data = vec![0u8; buf_size];
    decoder.read_image(&mut image_data)?;

    let (width, height) = decoder.dimensions();
    let image_size = ImageSize {
        width: width as usize,
        height: height as usize,
    };

    let data = if decoder.has_alpha() {
        image_data
    } else {
        rgba_from_rgb(&image_data)
    };

    Ok(Image::new(image_size, data)?)
}
