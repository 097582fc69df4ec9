use std::{fs, path::Path};

use upsharp_image::{Image, ImageSize};
use zune_core::colorspace::ColorSpace;
use zune_core::options::DecoderOptions;

use crate::error::IoError;

/// Read a JPEG image with four channels (rgba8).
///
/// JPEG has no alpha channel; the decoded pixels get an opaque alpha.
///
/// # Arguments
///
/// * `file_path` - The path to the JPEG file.
///
/// # Returns
///
/// A RGBA image with four channels (rgba8).
pub fn read_image_jpeg_rgba8(file_path: impl AsRef<Path>) -> Result<Image<u8, 4>, IoError> {
    let file_path = file_path.as_ref();
    if !file_path.exists() {
        return Err(IoError::FileDoesNotExist(file_path.to_path_buf()));
    }

    let jpeg_data = fs::read(file_path)?;
    decode_image_jpeg_rgba8(&jpeg_data)
}

/// Decode a JPEG image with four channels (rgba8) from raw bytes.
///
/// # Arguments
///
/// * `bytes` - Raw bytes of the jpeg file.
pub fn decode_image_jpeg_rgba8(bytes: &[u8]) -> Result<Image<u8, 4>, IoError> {
    let options = DecoderOptions::default().jpeg_set_out_colorspace(ColorSpace::RGBA);
    let mut decoder = zune_jpeg::JpegDecoder::new_with_options(bytes, options);
    decoder.decode_headers()?;

    let image_info = decoder.info().ok_or_else(|| {
        IoError::JpegDecodingError(zune_jpeg::errors::DecodeErrors::Format(String::from(
            "Failed to find image info from its metadata",
        )))
    })?;

    let image_size = ImageSize {
        width: image_info.width as usize,
        height: image_info.height as usize,
    };

    let img_data = decoder.decode()?;

    Ok(Image::new(image_size, img_data)?)
}
