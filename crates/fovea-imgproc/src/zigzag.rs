use fovea_image::{Image, ImageError};

use crate::dct::BLOCK_SIZE;

/// Flat row-major indices of an 8x8 grid visited in zigzag order, low
/// frequencies first. This is the JPEG natural order.
#[rustfmt::skip]
pub const ZIGZAG_ORDER: [usize; 64] = [
    0,  1,  8,  16, 9,  2,  3,  10,
    17, 24, 32, 25, 18, 11, 4,  5,
    12, 19, 26, 33, 40, 48, 41, 34,
    27, 20, 13, 6,  7,  14, 21, 28,
    35, 42, 49, 56, 57, 50, 43, 36,
    29, 22, 15, 23, 30, 37, 44, 51,
    58, 59, 52, 45, 38, 31, 39, 46,
    53, 60, 61, 54, 47, 55, 62, 63,
];

/// Linearize an 8x8 grid into a 64-element vector in zigzag order.
///
/// # Arguments
///
/// * `src` - The input 8x8 plane, typically a DCT coefficient grid.
/// * `dst` - The output vector ordered by ascending diagonal.
///
/// # Errors
///
/// Returns [`ImageError::UnsupportedBlockSize`] when the input is not 8x8.
pub fn zigzag_scan<T>(src: &Image<T, 1>, dst: &mut [T; 64]) -> Result<(), ImageError>
where
    T: Copy,
{
    if src.cols() != BLOCK_SIZE || src.rows() != BLOCK_SIZE {
        return Err(ImageError::UnsupportedBlockSize(src.cols(), src.rows()));
    }

    let data = src.as_slice();
    for (out, &idx) in dst.iter_mut().zip(ZIGZAG_ORDER.iter()) {
        *out = data[idx];
    }

    Ok(())
}
