//! Error types for the ev-app service layer.

use std::path::PathBuf;

/// Application error type wrapping the backend crates for the CLI.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Construction error: {0}")]
    Construction(String),

    #[error("Foundation error: {0}")]
    Foundation(String),

    #[error("Failed to read envelope file: {path}")]
    EnvelopeFileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse envelope: {0}")]
    EnvelopeParse(String),

    #[error("Failed to write report: {path}")]
    ReportWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Envelope validation failed: {0}")]
    Validation(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type for ev-app operations.
pub type AppResult<T> = Result<T, AppError>;

impl From<ev_constructions::ConstructionError> for AppError {
    fn from(err: ev_constructions::ConstructionError) -> Self {
        AppError::Construction(err.to_string())
    }
}

impl From<ev_foundation::FoundationError> for AppError {
    fn from(err: ev_foundation::FoundationError) -> Self {
        AppError::Foundation(err.to_string())
    }
}
