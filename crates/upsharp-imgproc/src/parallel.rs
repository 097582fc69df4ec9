use rayon::prelude::*;

use upsharp_image::Image;

/// Apply a function to each output row of the image in parallel.
///
/// Each worker owns a disjoint row of the destination buffer, so no locking
/// is needed. The function receives the row index and the mutable row slice
/// of `cols * C` elements.
pub fn par_iter_rows_mut<T, const C: usize>(
    dst: &mut Image<T, C>,
    f: impl Fn(usize, &mut [T]) + Send + Sync,
) where
    T: Send + Sync,
{
    let cols = dst.cols();
    dst.as_slice_mut()
        .par_chunks_exact_mut(C * cols)
        .enumerate()
        .for_each(|(r, row)| f(r, row));
}

#[cfg(test)]
mod tests {
    use super::*;
    use upsharp_image::{ImageError, ImageSize};

    #[test]
    fn par_iter_rows_disjoint() -> Result<(), ImageError> {
        let mut image = Image::<u8, 2>::from_size_val(
            ImageSize {
                width: 3,
                height: 4,
            },
            0,
        )?;

        par_iter_rows_mut(&mut image, |r, row| {
            row.iter_mut().for_each(|v| *v = r as u8);
        });

        for y in 0..4 {
            for x in 0..3 {
                assert_eq!(image.get([y, x, 0]), Some(&(y as u8)));
                assert_eq!(image.get([y, x, 1]), Some(&(y as u8)));
            }
        }
        Ok(())
    }
}
