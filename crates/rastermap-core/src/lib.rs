//! Rastermap Core - Image container and mask primitives
//!
//! This crate provides the data structures shared by the rastermap
//! classification and transform crates:
//!
//! - [`Raster`] - The in-memory image container (RGB or RGBA, 8 bits per
//!   channel)
//! - [`Channels`] - A mode-tagged per-pixel channel tuple
//! - [`ColorMode`] - The channel layout of a raster
//! - [`Plane`] - A single-channel plane with mask primitives (filled
//!   ellipse, gaussian blur, pixelwise multiply)

pub mod error;
pub mod plane;
pub mod raster;

pub use error::{Error, Result};
pub use plane::Plane;
pub use raster::{Channels, ColorMode, Raster};
