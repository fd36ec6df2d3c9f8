//! Mapping of generation failures onto HTTP responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use infinidisc_backend_audio::AudioError;
use infinidisc_backend_catalog::CatalogError;
use infinidisc_backend_texture::TextureError;
use infinidisc_core::{FailureKind, GenerationError, ValidationError};
use tracing::{error, warn};

use crate::json_output::{ErrorOutput, JsonError};

/// Error returned by every API handler.
#[derive(Debug)]
pub struct ApiError(GenerationError);

impl ApiError {
    /// A failure with no backend error behind it, such as a panicked worker.
    pub fn internal(message: impl Into<String>) -> Self {
        Self(GenerationError::new(
            "SERVER_001",
            message,
            "server",
            FailureKind::Internal,
        ))
    }

    pub fn status(&self) -> StatusCode {
        match self.0.kind {
            FailureKind::InvalidParameter => StatusCode::BAD_REQUEST,
            FailureKind::Upstream => StatusCode::BAD_GATEWAY,
            FailureKind::Configuration | FailureKind::Internal => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl From<GenerationError> for ApiError {
    fn from(err: GenerationError) -> Self {
        Self(err)
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self(GenerationError::from_backend(err))
    }
}

impl From<CatalogError> for ApiError {
    fn from(err: CatalogError) -> Self {
        Self(GenerationError::from_backend(err))
    }
}

impl From<AudioError> for ApiError {
    fn from(err: AudioError) -> Self {
        Self(GenerationError::from_backend(err))
    }
}

impl From<TextureError> for ApiError {
    fn from(err: TextureError) -> Self {
        Self(GenerationError::from_backend(err))
    }
}

impl From<tokio::task::JoinError> for ApiError {
    fn from(err: tokio::task::JoinError) -> Self {
        Self::internal(format!("generation task failed: {}", err))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!("{} ({})", self.0, self.0.category);
        } else {
            warn!("{}", self.0);
        }
        let body = ErrorOutput::failure(vec![JsonError::from(&self.0)]);
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use infinidisc_core::ErrorCode;

    #[test]
    fn test_status_mapping() {
        let invalid: ApiError = ValidationError::new(ErrorCode::InvalidPage, "page", "x").into();
        assert_eq!(invalid.status(), StatusCode::BAD_REQUEST);

        let upstream: ApiError = CatalogError::lexicon("noun", "down").into();
        assert_eq!(upstream.status(), StatusCode::BAD_GATEWAY);

        let render: ApiError = TextureError::Io(std::io::Error::other("x")).into();
        assert_eq!(render.status(), StatusCode::BAD_GATEWAY);

        let config: ApiError = AudioError::InvalidSampleRate { rate: 0 }.into();
        assert_eq!(config.status(), StatusCode::INTERNAL_SERVER_ERROR);

        assert_eq!(
            ApiError::internal("boom").status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
