//! Error types for the catalog backend.

use infinidisc_core::{BackendError, FailureKind, ValidationError};
use thiserror::Error;

/// Result type for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Errors that can occur while assembling catalog records.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The lexical generator failed to produce a word.
    #[error("lexicon failed to produce {word_class} for record {index}: {message}")]
    Lexicon {
        /// Record index being assembled, if known.
        index: u64,
        /// Word class that was requested.
        word_class: &'static str,
        /// Error message.
        message: String,
    },

    /// A request parameter was rejected.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl CatalogError {
    /// Creates a lexicon error for a word class.
    ///
    /// The record index is filled in by the assembler.
    pub fn lexicon(word_class: &'static str, message: impl Into<String>) -> Self {
        Self::Lexicon {
            index: 0,
            word_class,
            message: message.into(),
        }
    }

    pub(crate) fn at_index(self, record_index: u64) -> Self {
        match self {
            Self::Lexicon {
                word_class, message, ..
            } => Self::Lexicon {
                index: record_index,
                word_class,
                message,
            },
            other => other,
        }
    }
}

impl BackendError for CatalogError {
    fn code(&self) -> &'static str {
        match self {
            CatalogError::Lexicon { .. } => "CATALOG_001",
            CatalogError::Validation(err) => err.code.code(),
        }
    }

    fn category(&self) -> &'static str {
        match self {
            CatalogError::Lexicon { .. } => "catalog",
            CatalogError::Validation(_) => "validation",
        }
    }

    fn kind(&self) -> FailureKind {
        match self {
            CatalogError::Lexicon { .. } => FailureKind::Upstream,
            CatalogError::Validation(_) => FailureKind::InvalidParameter,
        }
    }
}
