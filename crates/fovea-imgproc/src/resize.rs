use fast_image_resize as fr;

use fovea_image::{Image, ImageError};

/// Resampling filters supported by [`resize_fast`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeFilter {
    /// Nearest neighbor, no interpolation.
    Nearest,
    /// Bilinear convolution.
    Bilinear,
    /// Catmull-Rom cubic convolution, the quality filter of the descriptor
    /// pipelines.
    CatmullRom,
}

impl ResizeFilter {
    fn to_alg(self) -> fr::ResizeAlg {
        match self {
            ResizeFilter::Nearest => fr::ResizeAlg::Nearest,
            ResizeFilter::Bilinear => fr::ResizeAlg::Convolution(fr::FilterType::Bilinear),
            ResizeFilter::CatmullRom => fr::ResizeAlg::Convolution(fr::FilterType::CatmullRom),
        }
    }
}

/// Resize an image using the [fast_image_resize](https://crates.io/crates/fast_image_resize) crate.
///
/// The destination image defines the target size. Only 3-channel u8 images are
/// supported, which is what the descriptor pipelines resample.
///
/// # Arguments
///
/// * `src` - The input image container with 3 channels.
/// * `dst` - The output image container with 3 channels.
/// * `filter` - The resampling filter to use.
///
/// # Errors
///
/// Returns an error if either image has a zero dimension, does not fit in
/// `u32` coordinates, or the underlying resizer rejects the operation.
///
/// # Example
///
/// ```
/// use fovea_image::{Image, ImageSize};
/// use fovea_imgproc::resize::{resize_fast, ResizeFilter};
///
/// let image = Image::<_, 3>::new(
///     ImageSize {
///         width: 4,
///         height: 5,
///     },
///     vec![0u8; 4 * 5 * 3],
/// )
/// .unwrap();
///
/// let new_size = ImageSize {
///     width: 2,
///     height: 3,
/// };
///
/// let mut image_resized = Image::<_, 3>::from_size_val(new_size, 0).unwrap();
///
/// resize_fast(&image, &mut image_resized, ResizeFilter::Nearest).unwrap();
///
/// assert_eq!(image_resized.num_channels(), 3);
/// assert_eq!(image_resized.size().width, 2);
/// assert_eq!(image_resized.size().height, 3);
/// ```
pub fn resize_fast(
    src: &Image<u8, 3>,
    dst: &mut Image<u8, 3>,
    filter: ResizeFilter,
) -> Result<(), ImageError> {
    if src.cols() == 0 || src.rows() == 0 || dst.cols() == 0 || dst.rows() == 0 {
        return Err(ImageError::InvalidImageSize(
            src.cols(),
            src.rows(),
            dst.cols(),
            dst.rows(),
        ));
    }

    // prepare the input image for the fast_image_resize crate
    let src_width = u32::try_from(src.cols()).map_err(|_| ImageError::CastError)?;
    let src_height = u32::try_from(src.rows()).map_err(|_| ImageError::CastError)?;

    let src_view =
        fr::images::ImageRef::new(src_width, src_height, src.as_slice(), fr::PixelType::U8x3)
            .map_err(|e| ImageError::ResizeError(e.to_string()))?;

    // prepare the output image for the fast_image_resize crate
    let dst_width = u32::try_from(dst.cols()).map_err(|_| ImageError::CastError)?;
    let dst_height = u32::try_from(dst.rows()).map_err(|_| ImageError::CastError)?;

    let mut dst_view = fr::images::Image::from_slice_u8(
        dst_width,
        dst_height,
        dst.as_slice_mut(),
        fr::PixelType::U8x3,
    )
    .map_err(|e| ImageError::ResizeError(e.to_string()))?;

    let options = fr::ResizeOptions::new().resize_alg(filter.to_alg());

    let mut resizer = fr::Resizer::new();
    resizer
        .resize(&src_view, &mut dst_view, &options)
        .map_err(|e| ImageError::ResizeError(e.to_string()))?;

    Ok(())
}
