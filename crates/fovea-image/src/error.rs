/// An error type for the image module and the operations built on it.
#[derive(thiserror::Error, Debug)]
pub enum ImageError {
    /// Error when the data length does not match the image size.
    #[error("Data length ({0}) does not match the image size ({1})")]
    InvalidChannelShape(usize, usize),

    /// Error when the source and destination image sizes do not match.
    #[error("Image size mismatch, expected {0}x{1} and got {2}x{3}")]
    InvalidImageSize(usize, usize, usize, usize),

    /// Error when the channel index is out of bounds.
    #[error("Channel index ({0}) is out of bounds ({1})")]
    ChannelIndexOutOfBounds(usize, usize),

    /// Error when a numeric value cannot be casted to the target type.
    #[error("Failed to cast the value")]
    CastError,

    /// Error when the image is too small for the requested operation.
    #[error("Image of {0}x{1} is too small, the operation requires at least {2}x{3}")]
    ImageTooSmall(usize, usize, usize, usize),

    /// Error when the frequency transform is invoked on a grid other than 8x8.
    #[error("The block transform supports only 8x8 grids, got {0}x{1}")]
    UnsupportedBlockSize(usize, usize),

    /// Error when a vector cannot be normalized because its maximum is not positive.
    #[error("Cannot normalize a vector whose maximum ({0}) is not positive")]
    DegenerateVector(f64),

    /// Error when the number of threshold steps is outside the supported range.
    #[error("Threshold steps must be between 1 and 256, got {0}")]
    InvalidThresholdSteps(usize),

    /// Error when a rescale factor is not a positive finite number.
    #[error("Scale factor must be positive and finite, got {0}")]
    InvalidScaleFactor(f64),

    /// Error when the underlying resizer rejects the operation.
    #[error("Failed to resize the image: {0}")]
    ResizeError(String),
}
