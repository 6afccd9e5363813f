use std::io;
use thiserror::Error;

/// Application-wide error type for the layers around the classifier.
///
/// Classification itself never fails; these cover input validation,
/// configuration and the CLI's I/O.
#[derive(Debug, Error)]
pub enum AppError {
    /// Represents caller input or configuration values that failed validation.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Represents configuration-related errors (e.g., unparsable environment variables).
    #[error("Configuration error: {0}")]
    Config(String),

    /// Represents standard input/output errors.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::Validation(format!("Validation errors: {}", err))
    }
}
