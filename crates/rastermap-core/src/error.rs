//! Error types for rastermap-core
//!
//! Provides a unified error type for container and mask operations.
//! Each variant captures enough context for diagnostics without exposing
//! internal implementation details.

use crate::raster::ColorMode;
use thiserror::Error;

/// Core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid image dimensions
    #[error("invalid image dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Pixel access outside the image rectangle
    #[error("pixel access out of bounds: ({x},{y}) in {width}x{height}")]
    OutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    /// Channel tuple does not match the image's color mode
    #[error("channel tuple does not match image mode {0}")]
    ModeMismatch(ColorMode),

    /// Mode conversion not possible for this image
    #[error("unsupported mode conversion: {0}")]
    UnsupportedMode(String),

    /// Incompatible image or plane sizes
    #[error("incompatible sizes: {0}x{1} vs {2}x{3}")]
    IncompatibleSizes(u32, u32, u32, u32),

    /// Invalid parameter value
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, Error>;
