use upsharp_image::{Image, ImageError};

use crate::error::EnhanceError;
use crate::parallel;

/// The fixed 3x3 high-pass kernel used for edge sharpening.
///
/// The weights sum to 1, so uniform regions pass through unchanged.
pub const SHARPEN_KERNEL: [i32; 9] = [0, -1, 0, -1, 5, -1, 0, -1, 0];

/// Sharpen the color channels of an RGBA image with the fixed 3x3 kernel.
///
/// The kernel is applied to the R, G and B channels of every interior pixel,
/// accumulating in `i32` and clamping the result to [0, 255]. The alpha
/// channel and the border rows and columns are copied unchanged from the
/// source, so the kernel never reads outside the buffer. The output is
/// written to a separate buffer; the source keeps its pre-filter values for
/// the whole sweep.
///
/// # Arguments
///
/// * `src` - The input RGBA image.
/// * `dst` - The output image container, same size as `src`.
///
/// # Errors
///
/// Returns [`EnhanceError::ImageTooSmall`] if either dimension is below 3,
/// or [`ImageError::InvalidImageSize`] if `src` and `dst` differ in size.
///
/// # Example
///
/// ```
/// use upsharp_image::{Image, ImageSize};
/// use upsharp_imgproc::sharpen::sharpen;
///
/// let size = ImageSize {
///     width: 4,
///     height: 4,
/// };
/// let image = Image::<u8, 4>::from_size_val(size, 128).unwrap();
/// let mut sharpened = Image::from_size_val(size, 0).unwrap();
///
/// sharpen(&image, &mut sharpened).unwrap();
///
/// // a flat field is invariant under the kernel
/// assert_eq!(sharpened.as_slice(), image.as_slice());
/// ```
pub fn sharpen(src: &Image<u8, 4>, dst: &mut Image<u8, 4>) -> Result<(), EnhanceError> {
    if src.size() != dst.size() {
        return Err(EnhanceError::Image(ImageError::InvalidImageSize(
            dst.width(),
            dst.height(),
            src.width(),
            src.height(),
        )));
    }
    if src.width() < 3 || src.height() < 3 {
        return Err(EnhanceError::ImageTooSmall(src.width(), src.height()));
    }

    let (cols, rows) = (src.cols(), src.rows());
    let src_data = src.as_slice();

    parallel::par_iter_rows_mut(dst, |y, row| {
        // border rows and the alpha channel keep their source values
        row.copy_from_slice(&src_data[y * cols * 4..(y + 1) * cols * 4]);
        if y == 0 || y == rows - 1 {
            return;
        }

        for x in 1..cols - 1 {
            for c in 0..3 {
                let mut val = 0i32;
                for ky in 0..3 {
                    for kx in 0..3 {
                        let idx = ((y + ky - 1) * cols + (x + kx - 1)) * 4 + c;
                        val += src_data[idx] as i32 * SHARPEN_KERNEL[ky * 3 + kx];
                    }
                }
                row[x * 4 + c] = val.clamp(0, 255) as u8;
            }
        }
    });

    Ok(())
}
