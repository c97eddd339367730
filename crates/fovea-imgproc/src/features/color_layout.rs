use fovea_image::{Image, ImageError, ImageSize};

use crate::color::ycbcr_from_rgb;
use crate::dct::{dct_8x8, BLOCK_SIZE};
use crate::normalize::normalize_max;
use crate::subsample::block_average;
use crate::zigzag::zigzag_scan;

/// Recommended side length of the subsampling grid.
pub const DEFAULT_GRID_SIZE: usize = 8;

/// Extract the color layout descriptor of an RGB image.
///
/// The image is converted to YCbCr, block-averaged down to a
/// `grid_size x grid_size` grid, transformed per channel with the 8x8 cosine
/// transform, linearized in zigzag order, interleaved as `(Y, Cb, Cr)` per
/// coefficient position and normalized so the maximum element is 1.
///
/// # Arguments
///
/// * `src` - The input RGB image.
/// * `grid_size` - Side length of the subsampling grid. Only 8 is supported,
///   since the frequency transform defines no other block size.
///
/// # Returns
///
/// A vector of length `3 * grid_size * grid_size`.
///
/// # Errors
///
/// Returns [`ImageError::UnsupportedBlockSize`] for a grid size other than 8,
/// [`ImageError::ImageTooSmall`] when the image is smaller than the grid, and
/// [`ImageError::DegenerateVector`] when the coefficient vector has no
/// positive maximum (for example an all-black input).
///
/// # Example
///
/// ```
/// use fovea_image::{Image, ImageSize};
/// use fovea_imgproc::features::extract_color_layout;
///
/// let image = Image::<u8, 3>::from_size_val(
///     ImageSize {
///         width: 64,
///         height: 64,
///     },
///     128,
/// )
/// .unwrap();
///
/// let descriptor = extract_color_layout(&image, 8).unwrap();
///
/// assert_eq!(descriptor.len(), 192);
/// ```
pub fn extract_color_layout(src: &Image<u8, 3>, grid_size: usize) -> Result<Vec<f64>, ImageError> {
    // the frequency transform stage only defines 8x8 grids
    if grid_size != BLOCK_SIZE {
        return Err(ImageError::UnsupportedBlockSize(grid_size, grid_size));
    }

    let mut ycbcr = Image::from_size_val(src.size(), 0.0)?;
    ycbcr_from_rgb(src, &mut ycbcr)?;

    let grid = ImageSize {
        width: grid_size,
        height: grid_size,
    };
    let mut sub = Image::<f64, 3>::from_size_val(grid, 0.0)?;
    block_average(&ycbcr, &mut sub)?;

    let mut vec = vec![0.0; 3 * grid_size * grid_size];
    let mut scanned = [0.0; 64];
    for (ch, plane) in sub.split_channels()?.iter().enumerate() {
        let mut coeffs = Image::from_size_val(grid, 0.0)?;
        dct_8x8(plane, &mut coeffs)?;
        zigzag_scan(&coeffs, &mut scanned)?;

        for (i, &coeff) in scanned.iter().enumerate() {
            vec[3 * i + ch] = coeff;
        }
    }

    normalize_max(&mut vec)?;

    Ok(vec)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use fovea_image::{Image, ImageError, ImageSize};

    #[test]
    fn color_layout_length() -> Result<(), ImageError> {
        // odd dimensions, the remainder pixels are dropped by the subsampling
        let data = (0..37 * 29 * 3).map(|i| (i % 251) as u8).collect();
        let image = Image::<u8, 3>::new(
            ImageSize {
                width: 37,
                height: 29,
            },
            data,
        )?;

        let descriptor = super::extract_color_layout(&image, 8)?;
        assert_eq!(descriptor.len(), 192);

        Ok(())
    }

    #[test]
    fn color_layout_uniform_is_dc_only() -> Result<(), ImageError> {
        // pure blue: Y = 29.07, Cb = 111.18, Cr = -25.50255
        let data = [0u8, 0, 255].repeat(64 * 64);
        let image = Image::<u8, 3>::new(
            ImageSize {
                width: 64,
                height: 64,
            },
            data,
        )?;

        let descriptor = super::extract_color_layout(&image, 8)?;

        // each channel concentrates in its DC coefficient, scaled by 8 and
        // normalized by the largest of the three
        let (y, cb, cr) = (29.07 * 8.0, 111.18 * 8.0, -25.50255 * 8.0);
        assert_relative_eq!(descriptor[0], y / cb, epsilon = 1e-9);
        assert_relative_eq!(descriptor[1], 1.0, epsilon = 1e-9);
        assert_relative_eq!(descriptor[2], cr / cb, epsilon = 1e-9);

        for &v in descriptor.iter().skip(3) {
            assert!(v.abs() < 1e-9, "expected zero AC coefficient, got {v}");
        }

        Ok(())
    }

    #[test]
    fn color_layout_gray_normalizes_to_one() -> Result<(), ImageError> {
        let image = Image::<u8, 3>::from_size_val(
            ImageSize {
                width: 64,
                height: 64,
            },
            128,
        )?;

        let descriptor = super::extract_color_layout(&image, 8)?;

        // the luma DC dominates a gray image
        assert_relative_eq!(descriptor[0], 1.0, epsilon = 1e-9);
        for &v in descriptor.iter().skip(3) {
            assert!(v.abs() < 1e-4);
        }

        Ok(())
    }

    #[test]
    fn color_layout_rejects_other_grids() -> Result<(), ImageError> {
        let image = Image::<u8, 3>::from_size_val(
            ImageSize {
                width: 64,
                height: 64,
            },
            128,
        )?;

        let res = super::extract_color_layout(&image, 4);
        assert!(matches!(res, Err(ImageError::UnsupportedBlockSize(4, 4))));

        Ok(())
    }

    #[test]
    fn color_layout_image_smaller_than_grid() -> Result<(), ImageError> {
        let image = Image::<u8, 3>::from_size_val(
            ImageSize {
                width: 4,
                height: 4,
            },
            128,
        )?;

        let res = super::extract_color_layout(&image, 8);
        assert!(matches!(res, Err(ImageError::ImageTooSmall(4, 4, 8, 8))));

        Ok(())
    }

    #[test]
    fn color_layout_black_image_is_degenerate() -> Result<(), ImageError> {
        let image = Image::<u8, 3>::from_size_val(
            ImageSize {
                width: 64,
                height: 64,
            },
            0,
        )?;

        let res = super::extract_color_layout(&image, 8);
        assert!(matches!(res, Err(ImageError::DegenerateVector(_))));

        Ok(())
    }
}
