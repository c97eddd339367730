mod gray;
mod ycbcr;

pub use gray::gray_from_rgb_u8;
pub use ycbcr::{rgb_from_ycbcr, ycbcr_from_rgb};
