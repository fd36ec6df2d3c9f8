//! Error types for parameter validation and backend reporting.

use thiserror::Error;

/// Error codes for request parameter validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// E001: Record index is not a non-negative integer
    InvalidIndex,
    /// E002: Page number is not a non-negative integer
    InvalidPage,
    /// E003: Page size is not an integer within the accepted range
    InvalidPageSize,
    /// E004: Average likes is not a finite, non-negative number
    InvalidAverageLikes,
    /// E005: Page range overflows the index space
    IndexOverflow,
}

impl ErrorCode {
    /// Returns the error code string (e.g., "E001").
    pub fn code(&self) -> &'static str {
        match self {
            ErrorCode::InvalidIndex => "E001",
            ErrorCode::InvalidPage => "E002",
            ErrorCode::InvalidPageSize => "E003",
            ErrorCode::InvalidAverageLikes => "E004",
            ErrorCode::IndexOverflow => "E005",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A rejected request parameter.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{code}: {message} (parameter '{param}')")]
pub struct ValidationError {
    /// The error code.
    pub code: ErrorCode,
    /// Name of the offending parameter as the caller spelled it.
    pub param: &'static str,
    /// Human-readable error message.
    pub message: String,
}

impl ValidationError {
    /// Creates a new validation error.
    pub fn new(code: ErrorCode, param: &'static str, message: impl Into<String>) -> Self {
        Self {
            code,
            param,
            message: message.into(),
        }
    }
}

/// Which part of the error taxonomy an error belongs to.
///
/// The transport layer uses this to decide how a failure is surfaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    /// Malformed or out-of-range caller input.
    InvalidParameter,
    /// An external capability (lexicon, renderer) failed for this item.
    Upstream,
    /// A configuration invariant was violated; fatal at startup.
    Configuration,
    /// Anything else.
    Internal,
}

/// Common trait for backend errors.
///
/// Each backend error type implements this trait so that errors from
/// different backends can be reported uniformly:
/// - Stable error codes for programmatic handling
/// - Human-readable messages for users
/// - A [`FailureKind`] for mapping onto transport responses
pub trait BackendError: std::error::Error {
    /// Get the error code for reporting.
    ///
    /// Returns a static string like "AUDIO_001" or "CATALOG_002".
    fn code(&self) -> &'static str;

    /// Get a human-readable message describing the error.
    fn message(&self) -> String {
        self.to_string()
    }

    /// Get the error category for grouping related errors.
    ///
    /// Returns a category like "audio", "texture", "catalog".
    fn category(&self) -> &'static str;

    /// Get the place of this error in the failure taxonomy.
    fn kind(&self) -> FailureKind;
}

impl BackendError for ValidationError {
    fn code(&self) -> &'static str {
        self.code.code()
    }

    fn category(&self) -> &'static str {
        "validation"
    }

    fn kind(&self) -> FailureKind {
        FailureKind::InvalidParameter
    }
}

/// A unified error type that can wrap any backend error.
///
/// This lets callers handle errors from different backends uniformly
/// without depending on every backend crate's error enum.
#[derive(Debug)]
pub struct GenerationError {
    /// The error code (e.g., "AUDIO_001", "E003").
    pub code: &'static str,
    /// The human-readable error message.
    pub message: String,
    /// The error category (e.g., "audio", "catalog").
    pub category: &'static str,
    /// Place in the failure taxonomy.
    pub kind: FailureKind,
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl GenerationError {
    /// Create a `GenerationError` from any `BackendError` implementor.
    pub fn from_backend<E: BackendError + Send + Sync + 'static>(err: E) -> Self {
        Self {
            code: err.code(),
            message: err.message(),
            category: err.category(),
            kind: err.kind(),
            source: Some(Box::new(err)),
        }
    }

    /// Create a `GenerationError` with explicit values.
    pub fn new(
        code: &'static str,
        message: impl Into<String>,
        category: &'static str,
        kind: FailureKind,
    ) -> Self {
        Self {
            code,
            message: message.into(),
            category,
            kind,
            source: None,
        }
    }
}

impl std::fmt::Display for GenerationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl std::error::Error for GenerationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

impl From<ValidationError> for GenerationError {
    fn from(err: ValidationError) -> Self {
        GenerationError::from_backend(err)
    }
}
