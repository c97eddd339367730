//! Visual descriptor extraction.
//!
//! This module computes the two fixed-length feature vectors consumed by the
//! downstream image classifier:
//!
//! - **Color layout**: global color and frequency structure, from a
//!   block-averaged YCbCr grid run through an 8x8 cosine transform and
//!   linearized in zigzag order.
//! - **Texture**: edge response statistics of binarized grayscale maps over
//!   several rescale factors and binarization thresholds.
//!
//! Both descriptors carry positional meaning in every element, so the layout
//! produced here is part of the contract with the classifier. The
//! [`SvmNode`] hand-off format concatenates the vectors with one-based
//! indices.

mod color_layout;
pub use color_layout::*;

mod svm;
pub use svm::*;

mod texture;
pub use texture::*;
