//! Rastermap Transform - Pixel-level image transforms
//!
//! This crate implements the three core transforms over a decoded image:
//!
//! - **Grayscale** ([`grayscale`]): BT.601 luma conversion, whole-image or
//!   clipped to a window along one axis
//! - **Extraction** ([`extract`]): rewrite populated (non-black) pixels from
//!   an image map
//! - **Transparency** ([`transparency`]): elliptical alpha vignette plus
//!   near-black alpha zeroing

pub mod error;
pub mod extract;
pub mod grayscale;
pub mod transparency;

pub use error::{TransformError, TransformResult};
pub use extract::extract_populated;
pub use grayscale::{Axis, grayscale, rgb_to_gray, weighted_channels};
pub use transparency::{
    MASK_BLUR_RADIUS, NEAR_BLACK_THRESHOLD, is_near_black, to_transparent,
};
