//! Rastermap - Pixel classification and transforms for raster images
//!
//! Rastermap builds a coordinate-to-color map of a decoded image,
//! partitions its pixels into "black" and "colored" classes, and applies
//! pixel-level transforms: grayscale conversion (whole-image or windowed by
//! axis), populated-area extraction, and black-to-transparent masking.
//!
//! # Example
//!
//! ```
//! use rastermap::{Channels, ColorMode, Raster};
//! use rastermap::classify::{build_image_map, partition};
//!
//! let mut img = Raster::new(2, 2, ColorMode::Rgb).unwrap();
//! img.set(0, 0, Channels::Rgb(255, 0, 0)).unwrap();
//!
//! let map = build_image_map(&img).unwrap();
//! let split = partition(&map);
//! assert_eq!(split.colored.len(), 1);
//! assert_eq!(split.black.len(), 3);
//! ```

// Re-export core types (primary data structures used everywhere)
pub use rastermap_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use rastermap_classify as classify;
pub use rastermap_io as io;
pub use rastermap_transform as transform;

pub mod cli;
