use rayon::prelude::*;

use fovea_image::{Image, ImageError, ImageSize};

use crate::color::gray_from_rgb_u8;
use crate::resize::{resize_fast, ResizeFilter};
use crate::threshold::threshold_binary;

/// Kernel responding to vertical edges.
pub const VERTICAL_EDGE_KERNEL: [[i32; 3]; 3] = [[1, 0, -1], [1, 0, -1], [1, 0, -1]];

/// Kernel responding to horizontal edges.
pub const HORIZONTAL_EDGE_KERNEL: [[i32; 3]; 3] = [[-1, -1, -1], [0, 0, 0], [1, 1, 1]];

/// Default number of binarization thresholds per scale.
pub const DEFAULT_THRESHOLD_STEPS: usize = 20;

/// Default rescale factors, fine to coarse.
pub const DEFAULT_SCALES: [f64; 5] = [1.0, 0.5, 0.25, 0.125, 0.0625];

/// Mean absolute 3x3 kernel response of a binary map.
///
/// The kernel is correlated against the 3x3 neighborhood of every interior
/// pixel (the 1-pixel border is skipped) and the absolute responses are
/// summed. The sum is divided by `width * height` of the full map, border
/// included; the denominator deliberately counts pixels that were never
/// summed, and downstream models depend on that scaling.
///
/// # Arguments
///
/// * `src` - The input map, typically holding {0, 1} samples.
/// * `kernel` - The 3x3 integer kernel, in row-major order.
///
/// # Errors
///
/// Returns [`ImageError::ImageTooSmall`] when either dimension is below 3 and
/// the interior is empty.
///
/// # Example
///
/// ```
/// use fovea_image::{Image, ImageSize};
/// use fovea_imgproc::features::{edge_response, VERTICAL_EDGE_KERNEL};
///
/// let map = Image::<u8, 1>::from_size_val(
///     ImageSize {
///         width: 8,
///         height: 8,
///     },
///     1,
/// )
/// .unwrap();
///
/// // the kernel is zero-sum, so a uniform map has no response
/// let response = edge_response(&map, &VERTICAL_EDGE_KERNEL).unwrap();
/// assert_eq!(response, 0.0);
/// ```
pub fn edge_response(src: &Image<u8, 1>, kernel: &[[i32; 3]; 3]) -> Result<f64, ImageError> {
    if src.cols() < 3 || src.rows() < 3 {
        return Err(ImageError::ImageTooSmall(src.cols(), src.rows(), 3, 3));
    }

    let cols = src.cols();
    let data = src.as_slice();

    // integer accumulation keeps the parallel reduction exact
    let sum: i64 = (1..src.rows() - 1)
        .into_par_iter()
        .map(|cy| {
            let px0 = &data[(cy - 1) * cols..cy * cols];
            let px1 = &data[cy * cols..(cy + 1) * cols];
            let px2 = &data[(cy + 1) * cols..(cy + 2) * cols];

            let mut row_sum = 0i64;
            for cx in 1..cols - 1 {
                let (l, m, r) = (cx - 1, cx, cx + 1);
                let val = px0[l] as i32 * kernel[0][0]
                    + px0[m] as i32 * kernel[0][1]
                    + px0[r] as i32 * kernel[0][2]
                    + px1[l] as i32 * kernel[1][0]
                    + px1[m] as i32 * kernel[1][1]
                    + px1[r] as i32 * kernel[1][2]
                    + px2[l] as i32 * kernel[2][0]
                    + px2[m] as i32 * kernel[2][1]
                    + px2[r] as i32 * kernel[2][2];
                row_sum += val.unsigned_abs() as i64;
            }

            row_sum
        })
        .sum();

    Ok(sum as f64 / (src.cols() * src.rows()) as f64)
}

/// Extract the texture descriptor of an RGB image.
///
/// For every scale the image is resampled with a Catmull-Rom filter to
/// `(width * scale, height * scale)` (truncated) and reduced to grayscale.
/// The grayscale map is then binarized at `threshold_steps` evenly spaced
/// thresholds `i * (256 / threshold_steps)` for `i` in `1..=threshold_steps`,
/// and each binary map is scored with [`edge_response`] for the vertical and
/// the horizontal edge kernel.
///
/// The output is laid out kernel-major: all vertical-kernel responses in
/// scale-major, threshold-minor order, followed by the horizontal-kernel
/// responses in the same order.
///
/// # Arguments
///
/// * `src` - The input RGB image.
/// * `threshold_steps` - Number of thresholds per scale, between 1 and 256.
/// * `scales` - The rescale factors, each positive and finite.
///
/// # Returns
///
/// A vector of length `2 * scales.len() * threshold_steps`.
///
/// # Errors
///
/// Returns [`ImageError::InvalidThresholdSteps`] or
/// [`ImageError::InvalidScaleFactor`] for out-of-range parameters, and
/// [`ImageError::ImageTooSmall`] when any scale shrinks the image below the
/// 3x3 kernel support.
///
/// # Example
///
/// ```
/// use fovea_image::{Image, ImageSize};
/// use fovea_imgproc::features::extract_texture;
///
/// let image = Image::<u8, 3>::from_size_val(
///     ImageSize {
///         width: 32,
///         height: 32,
///     },
///     128,
/// )
/// .unwrap();
///
/// let descriptor = extract_texture(&image, 5, &[1.0, 0.5]).unwrap();
///
/// assert_eq!(descriptor.len(), 2 * 2 * 5);
/// ```
pub fn extract_texture(
    src: &Image<u8, 3>,
    threshold_steps: usize,
    scales: &[f64],
) -> Result<Vec<f64>, ImageError> {
    if threshold_steps == 0 || threshold_steps > 256 {
        return Err(ImageError::InvalidThresholdSteps(threshold_steps));
    }

    // validate every scale before resampling anything
    let mut sizes = Vec::with_capacity(scales.len());
    for &scale in scales {
        if !scale.is_finite() || scale <= 0.0 {
            return Err(ImageError::InvalidScaleFactor(scale));
        }

        let size = ImageSize {
            width: (src.cols() as f64 * scale) as usize,
            height: (src.rows() as f64 * scale) as usize,
        };
        if size.width < 3 || size.height < 3 {
            return Err(ImageError::ImageTooSmall(size.width, size.height, 3, 3));
        }
        sizes.push(size);
    }

    let delta = 256 / threshold_steps;
    let kernel_len = scales.len() * threshold_steps;
    let mut vec = vec![0.0; 2 * kernel_len];

    for (s, &size) in sizes.iter().enumerate() {
        let mut rescaled = Image::from_size_val(size, 0)?;
        resize_fast(src, &mut rescaled, ResizeFilter::CatmullRom)?;

        let mut gray = Image::from_size_val(size, 0)?;
        gray_from_rgb_u8(&rescaled, &mut gray)?;

        let mut binmap = Image::from_size_val(size, 0)?;
        for i in 1..=threshold_steps {
            // i * delta reaches 256 when threshold_steps divides 256; a u8
            // sample can never exceed 255 either way, so saturating keeps
            // the comparison exact
            let threshold = (i * delta).min(255) as u8;
            threshold_binary(&gray, &mut binmap, threshold, 1)?;

            let k = s * threshold_steps + (i - 1);
            vec[k] = edge_response(&binmap, &VERTICAL_EDGE_KERNEL)?;
            vec[kernel_len + k] = edge_response(&binmap, &HORIZONTAL_EDGE_KERNEL)?;
        }
    }

    Ok(vec)
}
