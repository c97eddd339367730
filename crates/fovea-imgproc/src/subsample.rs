use num_traits::Float;
use rayon::prelude::*;

use fovea_image::{Image, ImageError};

/// Downsample an image by averaging rectangular blocks of pixels.
///
/// The destination size defines the target grid. Each target cell receives the
/// mean of a `block_w x block_h` source block, where `block_w = W / sub_w` and
/// `block_h = H / sub_h` with integer division. Remainder rows and columns at
/// the far edges that do not fill a whole block are ignored.
///
/// The source is traversed once in row-major order and each target row owns a
/// disjoint band of source rows, so the accumulation order per cell is fixed
/// and the result does not depend on the thread count.
///
/// # Arguments
///
/// * `src` - The input image.
/// * `dst` - The output image holding the averaged grid.
///
/// # Errors
///
/// Returns an error if the source is smaller than the target grid in either
/// dimension.
///
/// # Example
///
/// ```
/// use fovea_image::{Image, ImageSize};
/// use fovea_imgproc::subsample::block_average;
///
/// let image = Image::<f64, 3>::from_size_val(
///     ImageSize {
///         width: 64,
///         height: 64,
///     },
///     0.5,
/// )
/// .unwrap();
///
/// let mut sub = Image::<f64, 3>::from_size_val(
///     ImageSize {
///         width: 8,
///         height: 8,
///     },
///     0.0,
/// )
/// .unwrap();
///
/// block_average(&image, &mut sub).unwrap();
///
/// assert_eq!(sub.get([0, 0, 0]), Some(&0.5));
/// ```
pub fn block_average<T, const C: usize>(
    src: &Image<T, C>,
    dst: &mut Image<T, C>,
) -> Result<(), ImageError>
where
    T: Float + Send + Sync,
{
    if dst.cols() == 0 || dst.rows() == 0 {
        return Err(ImageError::InvalidImageSize(
            src.cols(),
            src.rows(),
            dst.cols(),
            dst.rows(),
        ));
    }

    let block_w = src.cols() / dst.cols();
    let block_h = src.rows() / dst.rows();
    if block_w == 0 || block_h == 0 {
        return Err(ImageError::ImageTooSmall(
            src.cols(),
            src.rows(),
            dst.cols(),
            dst.rows(),
        ));
    }

    let inv = T::one() / T::from(block_w * block_h).ok_or(ImageError::CastError)?;

    let src_row_len = src.cols() * C;
    let dst_cols = dst.cols();

    src.as_slice()
        .par_chunks_exact(block_h * src_row_len)
        .zip(dst.as_slice_mut().par_chunks_exact_mut(dst_cols * C))
        .for_each(|(src_band, dst_row)| {
            dst_row.iter_mut().for_each(|v| *v = T::zero());

            for src_row in src_band.chunks_exact(src_row_len) {
                let mut cursor = src_row;
                for sx in 0..dst_cols {
                    // sum one block-wide segment of the row, then merge it
                    let mut acc = [T::zero(); C];
                    for src_pixel in cursor[..block_w * C].chunks_exact(C) {
                        for (a, &v) in acc.iter_mut().zip(src_pixel) {
                            *a = *a + v;
                        }
                    }
                    for (d, a) in dst_row[sx * C..(sx + 1) * C].iter_mut().zip(acc) {
                        *d = *d + a;
                    }
                    cursor = &cursor[block_w * C..];
                }
            }

            dst_row.iter_mut().for_each(|v| *v = *v * inv);
        });

    Ok(())
}

#[cfg(test)]
mod tests {
    use fovea_image::{Image, ImageError, ImageSize};

    #[test]
    fn block_average_uniform_is_exact() -> Result<(), ImageError> {
        let image = Image::<f64, 3>::from_size_val(
            ImageSize {
                width: 64,
                height: 64,
            },
            0.5,
        )?;
        let mut sub = Image::<f64, 3>::from_size_val(
            ImageSize {
                width: 8,
                height: 8,
            },
            1.0,
        )?;

        super::block_average(&image, &mut sub)?;

        assert!(sub.as_slice().iter().all(|&v| v == 0.5));

        Ok(())
    }

    #[test]
    fn block_average_means() -> Result<(), ImageError> {
        let data = (1..=16).map(|v| v as f64).collect();
        let image = Image::<f64, 1>::new(
            ImageSize {
                width: 4,
                height: 4,
            },
            data,
        )?;
        let mut sub = Image::<f64, 1>::from_size_val(
            ImageSize {
                width: 2,
                height: 2,
            },
            0.0,
        )?;

        super::block_average(&image, &mut sub)?;

        assert_eq!(sub.as_slice(), &[3.5, 5.5, 11.5, 13.5]);

        Ok(())
    }

    #[test]
    fn block_average_drops_remainder() -> Result<(), ImageError> {
        // 5x5 with 2x2 target, the fifth row and column never contribute
        let data = (0..25).map(|v| v as f64).collect();
        let image = Image::<f64, 1>::new(
            ImageSize {
                width: 5,
                height: 5,
            },
            data,
        )?;
        let mut sub = Image::<f64, 1>::from_size_val(
            ImageSize {
                width: 2,
                height: 2,
            },
            0.0,
        )?;

        super::block_average(&image, &mut sub)?;

        assert_eq!(sub.as_slice(), &[3.0, 5.0, 13.0, 15.0]);

        Ok(())
    }

    #[test]
    fn block_average_too_small() -> Result<(), ImageError> {
        let image = Image::<f64, 1>::from_size_val(
            ImageSize {
                width: 4,
                height: 4,
            },
            0.0,
        )?;
        let mut sub = Image::<f64, 1>::from_size_val(
            ImageSize {
                width: 8,
                height: 8,
            },
            0.0,
        )?;

        let res = super::block_average(&image, &mut sub);
        assert!(matches!(res, Err(ImageError::ImageTooSmall(4, 4, 8, 8))));

        Ok(())
    }

    #[test]
    fn block_average_per_channel() -> Result<(), ImageError> {
        let mut data = Vec::with_capacity(16 * 16 * 3);
        for _ in 0..16 * 16 {
            data.extend_from_slice(&[0.25, 0.5, 0.75]);
        }
        let image = Image::<f64, 3>::new(
            ImageSize {
                width: 16,
                height: 16,
            },
            data,
        )?;
        let mut sub = Image::<f64, 3>::from_size_val(
            ImageSize {
                width: 8,
                height: 8,
            },
            0.0,
        )?;

        super::block_average(&image, &mut sub)?;

        for pixel in sub.as_slice().chunks_exact(3) {
            assert_eq!(pixel, &[0.25, 0.5, 0.75]);
        }

        Ok(())
    }
}
