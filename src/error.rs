//! Abandono Error Types
//!
//! Centralized error handling for the prediction pipeline and its collaborators.

use thiserror::Error;

use crate::asr::TranscriptionError;
use crate::model::ModelError;

/// Central error type for Abandono
#[derive(Error, Debug)]
pub enum AbandonoError {
    #[error("Model error: {0}")]
    Model(#[from] ModelError),

    #[error("Transcription error: {0}")]
    Transcription(#[from] TranscriptionError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for Abandono operations
pub type AbandonoResult<T> = Result<T, AbandonoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_error_converts() {
        let err: AbandonoError = ModelError::Runtime("boom".into()).into();
        assert!(matches!(err, AbandonoError::Model(_)));
        assert_eq!(err.to_string(), "Model error: model runtime failure: boom");
    }

    #[test]
    fn test_transcription_error_converts() {
        let err: AbandonoError = TranscriptionError::Unauthorized.into();
        assert!(matches!(err, AbandonoError::Transcription(_)));
    }
}
