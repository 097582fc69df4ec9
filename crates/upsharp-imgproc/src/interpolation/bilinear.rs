use upsharp_image::{Image, ImageDtype};

/// Kernel for bilinear interpolation
///
/// Computes the weighted average of the four source pixels nearest to the
/// continuous coordinate `(u, v)`. Sampling indices are clamped to the valid
/// source range at the image border.
///
/// # Arguments
///
/// * `image` - The input image container.
/// * `u` - The x coordinate of the pixel to interpolate.
/// * `v` - The y coordinate of the pixel to interpolate.
///
/// # Returns
///
/// The interpolated pixel values, one per channel.
pub fn bilinear_interpolation<T: ImageDtype, const C: usize>(
    image: &Image<T, C>,
    u: f32,
    v: f32,
) -> [T; C] {
    let (rows, cols) = (image.rows(), image.cols());

    let iu = u.trunc() as usize;
    let iv = v.trunc() as usize;

    let iu0 = iu.min(cols - 1);
    let iv0 = iv.min(rows - 1);

    let frac_u = u.fract();
    let frac_v = v.fract();

    let frac_uu = 1.0 - frac_u;
    let frac_vv = 1.0 - frac_v;

    let w00 = frac_uu * frac_vv;
    let w01 = frac_u * frac_vv;
    let w10 = frac_uu * frac_v;
    let w11 = frac_u * frac_v;

    let iu1 = if iu0 + 1 < cols { iu0 + 1 } else { iu0 };
    let iv1 = if iv0 + 1 < rows { iv0 + 1 } else { iv0 };

    let base00 = (iv0 * cols + iu0) * C;
    let base01 = (iv0 * cols + iu1) * C;
    let base10 = (iv1 * cols + iu0) * C;
    let base11 = (iv1 * cols + iu1) * C;

    let data = image.as_slice();

    let p00 = &data[base00..base00 + C];
    let p01 = &data[base01..base01 + C];
    let p10 = &data[base10..base10 + C];
    let p11 = &data[base11..base11 + C];

    let mut pixel = [T::default(); C];
    for k in 0..C {
        pixel[k] = T::from_f32(
            p00[k].into() * w00 + p01[k].into() * w01 + p10[k].into() * w10 + p11[k].into() * w11,
        );
    }

    pixel
}

#[cfg(test)]
mod tests {
    use super::*;
    use upsharp_image::{ImageError, ImageSize};

    #[test]
    fn bilinear_midpoint() -> Result<(), ImageError> {
        let image = Image::<u8, 1>::new(
            ImageSize {
                width: 2,
                height: 2,
            },
            vec![0, 100, 200, 100],
        )?;

        // center of the four pixels is their average
        assert_eq!(bilinear_interpolation(&image, 0.5, 0.5), [100]);
        // exact grid positions return the source values
        assert_eq!(bilinear_interpolation(&image, 0.0, 0.0), [0]);
        assert_eq!(bilinear_interpolation(&image, 1.0, 1.0), [100]);
        Ok(())
    }

    #[test]
    fn bilinear_clamps_at_border() -> Result<(), ImageError> {
        let image = Image::<u8, 1>::new(
            ImageSize {
                width: 2,
                height: 1,
            },
            vec![10, 250],
        )?;

        // coordinates past the last pixel resolve to the border pixel
        assert_eq!(bilinear_interpolation(&image, 1.5, 0.0), [250]);
        assert_eq!(bilinear_interpolation(&image, 1.0, 0.75), [250]);
        Ok(())
    }
}
