use crate::parallel;
use fovea_image::{Image, ImageError};

/// Convert an RGB image to a YCbCr image.
///
/// The input image is assumed to have 3 channels in the order R, G, B, in the range [0, 255].
/// The conversion keeps the 0-255 domain and does not clamp, so the chroma planes are signed.
///
/// # Arguments
///
/// * `src` - The input RGB image assumed to have 3 channels.
/// * `dst` - The output YCbCr image.
///
/// # Returns
///
/// The YCbCr image with the following channels:
///
/// * Y: The luminance channel in the range [0, 255].
/// * Cb: The chrominance-blue channel in the range [-111.18, +111.18].
/// * Cr: The chrominance-red channel in the range [-156.83, +156.83].
///
/// Precondition: the input and output images must have the same size.
///
/// # Example
///
/// ```
/// use fovea_image::{Image, ImageSize};
/// use fovea_imgproc::color::ycbcr_from_rgb;
///
/// let image = Image::<u8, 3>::new(
///     ImageSize {
///        width: 4,
///        height: 5,
///     },
///     vec![0u8; 4 * 5 * 3],
/// )
/// .unwrap();
///
/// let mut ycbcr = Image::from_size_val(image.size(), 0.0).unwrap();
///
/// ycbcr_from_rgb(&image, &mut ycbcr).unwrap();
///
/// assert_eq!(ycbcr.num_channels(), 3);
/// assert_eq!(ycbcr.size().width, 4);
/// assert_eq!(ycbcr.size().height, 5);
/// ```
pub fn ycbcr_from_rgb(src: &Image<u8, 3>, dst: &mut Image<f64, 3>) -> Result<(), ImageError> {
    if src.size() != dst.size() {
        return Err(ImageError::InvalidImageSize(
            src.cols(),
            src.rows(),
            dst.cols(),
            dst.rows(),
        ));
    }

    // compute the YCbCr values
    parallel::par_iter_rows(src, dst, |src_pixel, dst_pixel| {
        let r = src_pixel[0] as f64;
        let g = src_pixel[1] as f64;
        let b = src_pixel[2] as f64;

        dst_pixel[0] = 0.299 * r + 0.587 * g + 0.114 * b;
        dst_pixel[1] = -0.14713 * r - 0.28886 * g + 0.436 * b;
        dst_pixel[2] = 0.615 * r - 0.51499 * g - 0.10001 * b;
    });

    Ok(())
}

/// Convert a YCbCr image back to an RGB image.
///
/// The inverse uses the usual truncated coefficients, so it does not round-trip
/// bit-exactly and the output is not clamped. It is intended for diagnostic
/// dumps of intermediate planes, not for the feature path.
///
/// # Arguments
///
/// * `src` - The input YCbCr image.
/// * `dst` - The output RGB image, nominally in the range [0, 255].
///
/// Precondition: the input and output images must have the same size.
pub fn rgb_from_ycbcr(src: &Image<f64, 3>, dst: &mut Image<f64, 3>) -> Result<(), ImageError> {
    if src.size() != dst.size() {
        return Err(ImageError::InvalidImageSize(
            src.cols(),
            src.rows(),
            dst.cols(),
            dst.rows(),
        ));
    }

    // compute the RGB values
    parallel::par_iter_rows(src, dst, |src_pixel, dst_pixel| {
        let y = src_pixel[0];
        let cb = src_pixel[1];
        let cr = src_pixel[2];

        dst_pixel[0] = y + 1.13983 * cr;
        dst_pixel[1] = y - 0.39465 * cb - 0.58060 * cr;
        dst_pixel[2] = y + 2.03211 * cb;
    });

    Ok(())
}
