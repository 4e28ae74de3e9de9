//! Error types for rastermap-classify

use thiserror::Error;

/// Errors that can occur while building or partitioning image maps
#[derive(Error, Debug)]
pub enum ClassifyError {
    /// Core container error (out-of-bounds access, invalid dimensions)
    #[error("core error: {0}")]
    Core(#[from] rastermap_core::Error),
}

/// Result type for classification operations
pub type ClassifyResult<T> = Result<T, ClassifyError>;
