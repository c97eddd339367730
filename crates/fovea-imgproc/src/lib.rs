#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// color transformations module.
pub mod color;

/// block frequency transform module.
pub mod dct;

/// visual descriptor extraction module.
pub mod features;

/// operations to normalize feature vectors.
pub mod normalize;

/// module containing parallization utilities.
pub mod parallel;

/// utility functions for resizing images.
pub mod resize;

/// block average subsampling module.
pub mod subsample;

/// operations to threshold images.
pub mod threshold;

/// zigzag linearization of coefficient grids.
pub mod zigzag;
