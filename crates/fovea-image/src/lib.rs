#![deny(missing_docs)]
//! Image container and error types for visual descriptor extraction

/// Image representation for descriptor extraction purposes.
pub mod image;

/// Error types for the image module.
pub mod error;

pub use crate::error::ImageError;
pub use crate::image::{Image, ImageSize};
