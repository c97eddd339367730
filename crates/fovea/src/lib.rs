#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

#[doc(inline)]
pub use fovea_image as image;

#[doc(inline)]
pub use fovea_imgproc as imgproc;

#[doc(inline)]
pub use fovea_io as io;
