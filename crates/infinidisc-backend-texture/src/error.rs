//! Error types for the album art backend.

use infinidisc_core::{BackendError, FailureKind};
use thiserror::Error;

/// Result type for texture operations.
pub type TextureResult<T> = Result<T, TextureError>;

/// Errors that can occur while rendering album art.
#[derive(Debug, Error)]
pub enum TextureError {
    /// Canvas size outside the supported range.
    #[error("invalid art size {size}: must be {min}-{max} pixels")]
    InvalidSize {
        /// Requested edge length.
        size: u32,
        /// Smallest supported edge length.
        min: u32,
        /// Largest supported edge length.
        max: u32,
    },

    /// PNG encoding failed.
    #[error("PNG encoding error: {0}")]
    Encoding(#[from] png::EncodingError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl BackendError for TextureError {
    fn code(&self) -> &'static str {
        match self {
            TextureError::InvalidSize { .. } => "TEXTURE_001",
            TextureError::Encoding(_) => "TEXTURE_002",
            TextureError::Io(_) => "TEXTURE_003",
        }
    }

    fn category(&self) -> &'static str {
        "texture"
    }

    fn kind(&self) -> FailureKind {
        match self {
            TextureError::InvalidSize { .. } => FailureKind::Configuration,
            TextureError::Encoding(_) | TextureError::Io(_) => FailureKind::Upstream,
        }
    }
}
