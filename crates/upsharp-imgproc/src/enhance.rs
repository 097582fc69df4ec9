use upsharp_image::Image;

use crate::error::EnhanceError;
use crate::resample::{upscale, ScaleFactor};
use crate::sharpen::sharpen;

/// Run the full enhancement pipeline: bilinear upscaling then sharpening.
///
/// The two stages run in strict sequence on fresh buffers; a resampling
/// error aborts the pipeline before the filter runs and no partial result
/// is returned. The pipeline is deterministic: the same input and scale
/// always produce a byte-identical output.
///
/// # Arguments
///
/// * `src` - The decoded input RGBA image.
/// * `scale` - The validated integer scale factor.
///
/// # Returns
///
/// The upscaled and sharpened RGBA image, `scale` times larger than the
/// input on each side.
///
/// # Example
///
/// ```
/// use upsharp_image::{Image, ImageSize};
/// use upsharp_imgproc::enhance::enhance;
/// use upsharp_imgproc::resample::ScaleFactor;
///
/// let image = Image::<u8, 4>::from_size_val(
///     ImageSize {
///         width: 2,
///         height: 2,
///     },
///     64,
/// )
/// .unwrap();
///
/// let enhanced = enhance(&image, ScaleFactor::new(2).unwrap()).unwrap();
///
/// assert_eq!(enhanced.size().width, 4);
/// assert_eq!(enhanced.size().height, 4);
/// ```
pub fn enhance(src: &Image<u8, 4>, scale: ScaleFactor) -> Result<Image<u8, 4>, EnhanceError> {
    let dst_size = scale.apply(src.size());

    let mut resampled = Image::from_size_val(dst_size, 0)?;
    upscale(src, &mut resampled, scale)?;

    let mut sharpened = Image::from_size_val(dst_size, 0)?;
    sharpen(&resampled, &mut sharpened)?;

    Ok(sharpened)
}
