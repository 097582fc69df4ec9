use std::{fs::File, path::Path};

use png::{BitDepth, ColorType, Decoder, Encoder};
use upsharp_image::{Image, ImageSize};

use crate::conv_utils::rgba_from_rgb;
use crate::error::IoError;

/// Read a PNG image with four channels (rgba8).
///
/// RGB sources are expanded with an opaque alpha channel.
///
/// # Arguments
///
/// * `file_path` - The path to the PNG file.
///
/// # Returns
///
/// A RGBA image with four channels (rgba8).
pub fn read_image_png_rgba8(file_path: impl AsRef<Path>) -> Result<Image<u8, 4>, IoError> {
    let file_path = file_path.as_ref();
    if !file_path.exists() {
        return Err(IoError::FileDoesNotExist(file_path.to_path_buf()));
    }

    let file = File::open(file_path)?;
    decode_png_impl(file)
}

/// Decode a PNG image with four channels (rgba8) from raw bytes.
///
/// # Arguments
///
/// * `bytes` - Raw bytes of the png file.
pub fn decode_image_png_rgba8(bytes: &[u8]) -> Result<Image<u8, 4>, IoError> {
    decode_png_impl(bytes)
}

/// Writes the given PNG _(rgba8)_ data to the given file path.
///
/// # Arguments
///
/// - `file_path` - The path to the PNG image.
/// - `image` - The image containing the PNG image data.
pub fn write_image_png_rgba8(
    file_path: impl AsRef<Path>,
    image: &Image<u8, 4>,
) -> Result<(), IoError> {
    let file = File::create(file_path)?;

    let mut encoder = Encoder::new(file, image.width() as u32, image.height() as u32);
    encoder.set_color(ColorType::Rgba);
    encoder.set_depth(BitDepth::Eight);

    let mut writer = encoder
        .write_header()
        .map_err(|e| IoError::PngEncodingError(e.to_string()))?;
    writer
        .write_image_data(image.as_slice())
        .map_err(|e| IoError::PngEncodingError(e.to_string()))?;
    Ok(())
}

// Utility function to decode png data from any reader
fn decode_png_impl<R: std::io::Read>(r: R) -> Result<Image<u8, 4>, IoError> {
    let mut reader = Decoder::new(r)
        .read_info()
        .map_err(|e| IoError::PngDecodeError(e.to_string()))?;

    let mut buf = vec![0; reader.output_buffer_size()];
    let info = reader
        .next_frame(&mut buf)
        .map_err(|e| IoError::PngDecodeError(e.to_string()))?;
    buf.truncate(info.buffer_size());

    if info.bit_depth != BitDepth::Eight {
        return Err(IoError::UnsupportedColorType);
    }

    let size = ImageSize {
        width: info.width as usize,
        height: info.height as usize,
    };

    let data = match info.color_type {
        ColorType::Rgba => buf,
        ColorType::Rgb => rgba_from_rgb(&buf),
        _ => return Err(IoError::UnsupportedColorType),
    };

    Ok(Image::new(size, data)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::create_dir_all;

    fn encode_png(data: &[u8], width: u32, height: u32, color: ColorType) -> Vec<u8> {
        let mut bytes = Vec::new();
        let mut encoder = Encoder::new(&mut bytes, width, height);
        encoder.set_color(color);
        encoder.set_depth(BitDepth::Eight);
        let mut writer = encoder.write_header().unwrap();
        writer.write_image_data(data).unwrap();
        writer.finish().unwrap();
        bytes
    }

    #[test]
    fn read_write_png_rgba8() -> Result<(), IoError> {
        let tmp_dir = tempfile::tempdir()?;
        create_dir_all(tmp_dir.path())?;

        let file_path = tmp_dir.path().join("gradient.png");
        let data = (0..4 * 3 * 4).map(|i| (i * 5) as u8).collect();
        let image = Image::<u8, 4>::new(
            ImageSize {
                width: 4,
                height: 3,
            },
            data,
        )?;
        write_image_png_rgba8(&file_path, &image)?;

        let image_back = read_image_png_rgba8(&file_path)?;
        assert!(file_path.exists(), "File does not exist: {:?}", file_path);

        assert_eq!(image_back.cols(), 4);
        assert_eq!(image_back.rows(), 3);
        assert_eq!(image_back.as_slice(), image.as_slice());

        Ok(())
    }

    #[test]
    fn decode_png_rgba() -> Result<(), IoError> {
        let data = vec![10, 20, 30, 40, 50, 60, 70, 80];
        let bytes = encode_png(&data, 2, 1, ColorType::Rgba);

        let image = decode_image_png_rgba8(&bytes)?;
        assert_eq!(image.cols(), 2);
        assert_eq!(image.rows(), 1);
        assert_eq!(image.as_slice(), &data[..]);
        Ok(())
    }

    #[test]
    fn decode_png_rgb_expands_alpha() -> Result<(), IoError> {
        let data = vec![10, 20, 30, 40, 50, 60];
        let bytes = encode_png(&data, 2, 1, ColorType::Rgb);

        let image = decode_image_png_rgba8(&bytes)?;
        assert_eq!(image.as_slice(), &[10, 20, 30, 255, 40, 50, 60, 255]);
        Ok(())
    }

    #[test]
    fn read_png_missing_file() {
        let res = read_image_png_rgba8("this/file/does/not/exist.png");
        assert!(matches!(res, Err(IoError::FileDoesNotExist(_))));
    }
}
