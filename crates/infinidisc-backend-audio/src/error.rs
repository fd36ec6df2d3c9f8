//! Error types for audio backend.

use infinidisc_core::{BackendError, FailureKind};
use thiserror::Error;

/// Result type for audio operations.
pub type AudioResult<T> = Result<T, AudioError>;

/// Errors that can occur during audio generation.
#[derive(Debug, Error)]
pub enum AudioError {
    /// Invalid sample rate.
    #[error("invalid sample rate: {rate}")]
    InvalidSampleRate {
        /// The invalid sample rate.
        rate: u32,
    },

    /// Invalid duration.
    #[error("invalid duration: {duration} seconds")]
    InvalidDuration {
        /// The invalid duration.
        duration: f64,
    },

    /// Invalid parameter value.
    #[error("invalid parameter '{name}': {message}")]
    InvalidParameter {
        /// Parameter name.
        name: String,
        /// Error message.
        message: String,
    },

    /// The encoded data would not fit a RIFF chunk.
    #[error("{samples} samples do not fit in a WAV data chunk")]
    DataTooLarge {
        /// Number of samples requested.
        samples: usize,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AudioError {
    /// Creates an invalid parameter error.
    pub fn invalid_param(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            message: message.into(),
        }
    }
}

impl BackendError for AudioError {
    fn code(&self) -> &'static str {
        match self {
            AudioError::InvalidSampleRate { .. } => "AUDIO_001",
            AudioError::InvalidDuration { .. } => "AUDIO_002",
            AudioError::InvalidParameter { .. } => "AUDIO_003",
            AudioError::DataTooLarge { .. } => "AUDIO_004",
            AudioError::Io(_) => "AUDIO_005",
        }
    }

    fn category(&self) -> &'static str {
        "audio"
    }

    fn kind(&self) -> FailureKind {
        match self {
            AudioError::InvalidSampleRate { .. }
            | AudioError::InvalidDuration { .. }
            | AudioError::InvalidParameter { .. } => FailureKind::Configuration,
            AudioError::DataTooLarge { .. } | AudioError::Io(_) => FailureKind::Internal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_param_helper() {
        let err = AudioError::invalid_param("duration_seconds", "must be positive");
        assert!(err.to_string().contains("duration_seconds"));
        assert!(err.to_string().contains("must be positive"));
    }

    #[test]
    fn test_config_errors_are_configuration_failures() {
        let err = AudioError::InvalidSampleRate { rate: 0 };
        assert_eq!(err.code(), "AUDIO_001");
        assert_eq!(err.category(), "audio");
        assert_eq!(err.kind(), FailureKind::Configuration);
    }

    #[test]
    fn test_oversized_output_is_internal_failure() {
        let err = AudioError::DataTooLarge { samples: usize::MAX };
        assert_eq!(err.code(), "AUDIO_004");
        assert_eq!(err.kind(), FailureKind::Internal);
    }
}
