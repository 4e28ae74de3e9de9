//! Error types for rastermap-transform

use thiserror::Error;

/// Errors that can occur during image transforms
#[derive(Error, Debug)]
pub enum TransformError {
    /// Core container error (out-of-bounds access, mode mismatch,
    /// unsupported mode conversion)
    #[error("core error: {0}")]
    Core(#[from] rastermap_core::Error),
}

/// Result type for transform operations
pub type TransformResult<T> = Result<T, TransformError>;
