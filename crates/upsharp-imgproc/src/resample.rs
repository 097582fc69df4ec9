use upsharp_image::{Image, ImageDtype, ImageError, ImageSize};

use crate::error::EnhanceError;
use crate::interpolation::bilinear_interpolation;
use crate::parallel;

/// An integer upscaling factor, restricted to the supported range [2, 4].
///
/// The factor is validated at construction, so the resampling operations
/// only ever see a valid value.
///
/// # Example
///
/// ```
/// use upsharp_imgproc::resample::ScaleFactor;
///
/// let scale = ScaleFactor::new(3).unwrap();
/// assert_eq!(scale.get(), 3);
///
/// assert!(ScaleFactor::new(5).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScaleFactor(u32);

impl ScaleFactor {
    /// The smallest supported scale factor.
    pub const MIN: u32 = 2;

    /// The largest supported scale factor.
    pub const MAX: u32 = 4;

    /// Create a validated scale factor.
    ///
    /// # Errors
    ///
    /// Returns [`EnhanceError::InvalidScale`] if the factor is outside
    /// [2, 4]. Out of range values are rejected, not clamped.
    pub fn new(factor: u32) -> Result<Self, EnhanceError> {
        if !(Self::MIN..=Self::MAX).contains(&factor) {
            return Err(EnhanceError::InvalidScale(factor));
        }
        Ok(Self(factor))
    }

    /// The scale factor as an integer.
    pub fn get(&self) -> u32 {
        self.0
    }

    /// The output size for a given input size.
    pub fn apply(&self, size: ImageSize) -> ImageSize {
        ImageSize {
            width: size.width * self.0 as usize,
            height: size.height * self.0 as usize,
        }
    }
}

/// Upscale an image by an integer factor using bilinear interpolation.
///
/// Each destination pixel maps back to the continuous source coordinate
/// `(x / scale, y / scale)` and is interpolated from the four nearest
/// source pixels. All channels, alpha included, are interpolated the same
/// way. Output rows are computed in parallel.
///
/// # Arguments
///
/// * `src` - The input image container.
/// * `dst` - The output image container, pre-allocated to the scaled size.
/// * `scale` - The validated integer scale factor.
///
/// # Errors
///
/// Returns [`ImageError::InvalidImageSize`] if `dst` does not have exactly
/// the scaled dimensions of `src`.
///
/// # Example
///
/// ```
/// use upsharp_image::{Image, ImageSize};
/// use upsharp_imgproc::resample::{upscale, ScaleFactor};
///
/// let image = Image::<u8, 4>::from_size_val(
///     ImageSize {
///         width: 3,
///         height: 2,
///     },
///     0,
/// )
/// .unwrap();
///
/// let scale = ScaleFactor::new(2).unwrap();
/// let mut upscaled = Image::from_size_val(scale.apply(image.size()), 0).unwrap();
///
/// upscale(&image, &mut upscaled, scale).unwrap();
///
/// assert_eq!(upscaled.size().width, 6);
/// assert_eq!(upscaled.size().height, 4);
/// ```
pub fn upscale<T, const C: usize>(
    src: &Image<T, C>,
    dst: &mut Image<T, C>,
    scale: ScaleFactor,
) -> Result<(), ImageError>
where
    T: ImageDtype,
{
    let expected = scale.apply(src.size());
    if dst.size() != expected {
        return Err(ImageError::InvalidImageSize(
            dst.width(),
            dst.height(),
            expected.width,
            expected.height,
        ));
    }

    let inv_scale = 1.0 / scale.get() as f32;

    parallel::par_iter_rows_mut(dst, |y, row| {
        let v = y as f32 * inv_scale;
        for (x, pixel) in row.chunks_exact_mut(C).enumerate() {
            let u = x as f32 * inv_scale;
            pixel.copy_from_slice(&bilinear_interpolation(src, u, v));
        }
    });

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EnhanceError;
    use upsharp_image::{Image, ImageError, ImageSize};

    #[test]
    fn scale_factor_range() {
        assert_eq!(ScaleFactor::new(1), Err(EnhanceError::InvalidScale(1)));
        assert_eq!(ScaleFactor::new(5), Err(EnhanceError::InvalidScale(5)));
        for factor in 2..=4 {
            assert_eq!(ScaleFactor::new(factor).map(|s| s.get()), Ok(factor));
        }
    }

    #[test]
    fn upscale_dimension_law() -> Result<(), EnhanceError> {
        for factor in 2..=4u32 {
            let scale = ScaleFactor::new(factor)?;
            let src = Image::<u8, 4>::from_size_val(
                ImageSize {
                    width: 3,
                    height: 5,
                },
                0,
            )?;
            let mut dst = Image::from_size_val(scale.apply(src.size()), 0)?;
            upscale(&src, &mut dst, scale)?;

            assert_eq!(dst.width(), 3 * factor as usize);
            assert_eq!(dst.height(), 5 * factor as usize);
        }
        Ok(())
    }

    #[test]
    fn upscale_rejects_wrong_dst_size() -> Result<(), EnhanceError> {
        let src = Image::<u8, 4>::from_size_val(
            ImageSize {
                width: 2,
                height: 2,
            },
            0,
        )?;
        let mut dst = Image::from_size_val(
            ImageSize {
                width: 3,
                height: 4,
            },
            0,
        )?;

        let res = upscale(&src, &mut dst, ScaleFactor::new(2)?);
        assert_eq!(res, Err(ImageError::InvalidImageSize(3, 4, 4, 4)));
        Ok(())
    }

    #[test]
    fn upscale_gradient_values() -> Result<(), EnhanceError> {
        // a 2x1 black-to-white gradient, upscaled 2x
        let src = Image::<u8, 1>::new(
            ImageSize {
                width: 2,
                height: 1,
            },
            vec![0, 255],
        )?;
        let scale = ScaleFactor::new(2)?;
        let mut dst = Image::from_size_val(scale.apply(src.size()), 0)?;
        upscale(&src, &mut dst, scale)?;

        // x=1 maps to u=0.5 (midpoint), x=3 maps to u=1.5 (clamped)
        assert_eq!(dst.as_slice(), &[0, 128, 255, 255, 0, 128, 255, 255]);
        Ok(())
    }

    #[test]
    fn upscale_interpolates_alpha() -> Result<(), EnhanceError> {
        let src = Image::<u8, 4>::new(
            ImageSize {
                width: 2,
                height: 1,
            },
            vec![0, 0, 0, 0, 0, 0, 0, 200],
        )?;
        let scale = ScaleFactor::new(2)?;
        let mut dst = Image::from_size_val(scale.apply(src.size()), 0)?;
        upscale(&src, &mut dst, scale)?;

        assert_eq!(dst.get([0, 1, 3]), Some(&100u8));
        assert_eq!(dst.get([1, 2, 3]), Some(&200u8));
        Ok(())
    }
}
