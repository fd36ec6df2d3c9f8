//! Machine-readable output shared by the CLI and the HTTP layer.

use infinidisc_core::GenerationError;
use serde::Serialize;

/// A single reported error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JsonError {
    /// Stable error code, e.g. `"E003"` or `"AUDIO_001"`.
    pub code: String,
    /// Human-readable message.
    pub message: String,
}

impl JsonError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

impl From<&GenerationError> for JsonError {
    fn from(err: &GenerationError) -> Self {
        Self::new(err.code, err.message.clone())
    }
}

/// Envelope for command results.
///
/// Failures serialise as `{ "success": false, "errors": [...] }`.
#[derive(Debug, Clone, Serialize)]
pub struct JsonOutput<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<JsonError>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<T>,
}

impl<T: Serialize> JsonOutput<T> {
    pub fn success(result: T) -> Self {
        Self {
            success: true,
            errors: Vec::new(),
            result: Some(result),
        }
    }

    pub fn failure(errors: Vec<JsonError>) -> Self {
        Self {
            success: false,
            errors,
            result: None,
        }
    }
}

/// Failure envelope without a result type.
pub type ErrorOutput = JsonOutput<()>;
