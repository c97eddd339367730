//! Discrete cosine transform over fixed 8x8 blocks.
//!
//! The forward transform follows the type-II definition evaluated as a direct
//! double sum:
//!
//! ```text
//! S[u,v] = 1/4 * C(u) * C(v) *
//!     sum over x,y of s[x,y] * cos((2x+1)*u*PI/16) * cos((2y+1)*v*PI/16)
//!
//! C(k) = 1/sqrt(2) for k = 0, otherwise 1
//! ```
//!
//! For 8-bit input planes the coefficients stay within [-1024, 1024] and are
//! intentionally left unclamped. The summation order is fixed, so repeated
//! runs produce bit-identical results.

use std::f64::consts::{PI, SQRT_2};

use fovea_image::{Image, ImageError};

/// Side length of the only supported transform block.
pub const BLOCK_SIZE: usize = 8;

fn check_block(image_cols: usize, image_rows: usize) -> Result<(), ImageError> {
    if image_cols != BLOCK_SIZE || image_rows != BLOCK_SIZE {
        return Err(ImageError::UnsupportedBlockSize(image_cols, image_rows));
    }
    Ok(())
}

/// Forward 8x8 type-II DCT of a single plane.
///
/// # Arguments
///
/// * `src` - The input 8x8 plane.
/// * `dst` - The output 8x8 coefficient grid, unclamped.
///
/// # Errors
///
/// Returns [`ImageError::UnsupportedBlockSize`] when either image is not 8x8.
///
/// # Example
///
/// ```
/// use fovea_image::{Image, ImageSize};
/// use fovea_imgproc::dct::dct_8x8;
///
/// let block = Image::<f64, 1>::from_size_val(
///     ImageSize {
///         width: 8,
///         height: 8,
///     },
///     1.0,
/// )
/// .unwrap();
/// let mut coeffs = Image::<f64, 1>::from_size_val(block.size(), 0.0).unwrap();
///
/// dct_8x8(&block, &mut coeffs).unwrap();
///
/// // a constant plane concentrates in the DC coefficient
/// assert!((coeffs.as_slice()[0] - 8.0).abs() < 1e-9);
/// ```
pub fn dct_8x8(src: &Image<f64, 1>, dst: &mut Image<f64, 1>) -> Result<(), ImageError> {
    check_block(src.cols(), src.rows())?;
    check_block(dst.cols(), dst.rows())?;

    let s = src.as_slice();
    let d = dst.as_slice_mut();

    for u in 0..BLOCK_SIZE {
        let cu = if u == 0 { 1.0 / SQRT_2 } else { 1.0 };
        for v in 0..BLOCK_SIZE {
            let cv = if v == 0 { 1.0 / SQRT_2 } else { 1.0 };
            let mut z = 0.0;
            for y in 0..BLOCK_SIZE {
                for x in 0..BLOCK_SIZE {
                    let q = s[y * BLOCK_SIZE + x]
                        * ((2 * x + 1) as f64 * u as f64 * PI / 16.0).cos()
                        * ((2 * y + 1) as f64 * v as f64 * PI / 16.0).cos();
                    z += q;
                }
            }
            d[u * BLOCK_SIZE + v] = 0.25 * cu * cv * z;
        }
    }

    Ok(())
}

/// Inverse 8x8 DCT of a coefficient grid.
///
/// The reconstruction is divided by 4 and clamped to the [0, 255] sample
/// range. This path exists for visual inspection of the transform and is not
/// part of descriptor extraction.
///
/// # Errors
///
/// Returns [`ImageError::UnsupportedBlockSize`] when either image is not 8x8.
pub fn idct_8x8(src: &Image<f64, 1>, dst: &mut Image<f64, 1>) -> Result<(), ImageError> {
    check_block(src.cols(), src.rows())?;
    check_block(dst.cols(), dst.rows())?;

    let s = src.as_slice();
    let d = dst.as_slice_mut();

    for y in 0..BLOCK_SIZE {
        for x in 0..BLOCK_SIZE {
            let mut z = 0.0;
            for v in 0..BLOCK_SIZE {
                for u in 0..BLOCK_SIZE {
                    let cu = if u == 0 { 1.0 / SQRT_2 } else { 1.0 };
                    let cv = if v == 0 { 1.0 / SQRT_2 } else { 1.0 };
                    let q = cu
                        * cv
                        * s[u * BLOCK_SIZE + v]
                        * ((2 * x + 1) as f64 * u as f64 * PI / 16.0).cos()
                        * ((2 * y + 1) as f64 * v as f64 * PI / 16.0).cos();
                    z += q;
                }
            }
            z /= 4.0;
            d[y * BLOCK_SIZE + x] = z.clamp(0.0, 255.0);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use fovea_image::{Image, ImageError, ImageSize};

    const BLOCK: ImageSize = ImageSize {
        width: 8,
        height: 8,
    };

    #[test]
    fn dct_zero_block() -> Result<(), ImageError> {
        let block = Image::<f64, 1>::from_size_val(BLOCK, 0.0)?;
        let mut coeffs = Image::<f64, 1>::from_size_val(BLOCK, 1.0)?;

        super::dct_8x8(&block, &mut coeffs)?;

        assert!(coeffs.as_slice().iter().all(|&v| v == 0.0));

        Ok(())
    }

    #[test]
    fn dct_constant_block_is_dc_only() -> Result<(), ImageError> {
        let block = Image::<f64, 1>::from_size_val(BLOCK, 3.0)?;
        let mut coeffs = Image::<f64, 1>::from_size_val(BLOCK, 0.0)?;

        super::dct_8x8(&block, &mut coeffs)?;

        // DC = 8 * mean
        assert_relative_eq!(coeffs.as_slice()[0], 24.0, epsilon = 1e-9);
        for &v in coeffs.as_slice().iter().skip(1) {
            assert!(v.abs() < 1e-9);
        }

        Ok(())
    }

    #[test]
    fn dct_ramp_orientation() -> Result<(), ImageError> {
        // s[y][x] = x, constant along rows
        let data = (0..64).map(|i| (i % 8) as f64).collect();
        let block = Image::<f64, 1>::new(BLOCK, data)?;
        let mut coeffs = Image::<f64, 1>::from_size_val(BLOCK, 0.0)?;

        super::dct_8x8(&block, &mut coeffs)?;

        // DC = 8 * mean = 8 * 3.5
        assert_relative_eq!(coeffs.as_slice()[0], 28.0, epsilon = 1e-9);

        // the horizontal variation lands in the first column of the grid
        let c10 = coeffs.as_slice()[8];
        let c01 = coeffs.as_slice()[1];
        assert!(c10 < -18.0 && c10 > -18.5);
        assert!(c01.abs() < 1e-9);

        Ok(())
    }

    #[test]
    fn dct_rejects_other_sizes() -> Result<(), ImageError> {
        let small = ImageSize {
            width: 4,
            height: 4,
        };
        let block = Image::<f64, 1>::from_size_val(small, 0.0)?;
        let mut coeffs = Image::<f64, 1>::from_size_val(small, 0.0)?;

        let res = super::dct_8x8(&block, &mut coeffs);
        assert!(matches!(res, Err(ImageError::UnsupportedBlockSize(4, 4))));

        let res = super::idct_8x8(&block, &mut coeffs);
        assert!(matches!(res, Err(ImageError::UnsupportedBlockSize(4, 4))));

        Ok(())
    }

    #[test]
    fn dct_idct_roundtrip() -> Result<(), ImageError> {
        // in-range samples so the inverse clamp stays inactive
        let data = (0..64).map(|i| 10.0 + 3.0 * i as f64).collect();
        let block = Image::<f64, 1>::new(BLOCK, data)?;
        let mut coeffs = Image::<f64, 1>::from_size_val(BLOCK, 0.0)?;
        let mut restored = Image::<f64, 1>::from_size_val(BLOCK, 0.0)?;

        super::dct_8x8(&block, &mut coeffs)?;
        super::idct_8x8(&coeffs, &mut restored)?;

        for (&a, &b) in restored.as_slice().iter().zip(block.as_slice().iter()) {
            assert_relative_eq!(a, b, epsilon = 1e-9);
        }

        Ok(())
    }

    #[test]
    fn idct_clamps_out_of_range() -> Result<(), ImageError> {
        let mut coeffs = Image::<f64, 1>::from_size_val(BLOCK, 0.0)?;
        coeffs.as_slice_mut()[0] = -100.0;
        let mut restored = Image::<f64, 1>::from_size_val(BLOCK, 1.0)?;

        super::idct_8x8(&coeffs, &mut restored)?;
        assert!(restored.as_slice().iter().all(|&v| v == 0.0));

        coeffs.as_slice_mut()[0] = 2400.0;
        super::idct_8x8(&coeffs, &mut restored)?;
        assert!(restored.as_slice().iter().all(|&v| v == 255.0));

        Ok(())
    }
}
