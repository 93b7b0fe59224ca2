use std::io;

use thiserror::Error;

use crate::domain::AssessmentError;

/// Library-wide error type for dahej operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    /// Configuration values failed validation.
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// Explicitly requested config file does not exist.
    #[error("Config file not found: {0}")]
    ConfigMissing(String),

    /// Required environment variable is not set.
    #[error("Environment variable '{0}' is not set")]
    EnvironmentVariableMissing(String),

    /// Profile field name is not one of the eight known fields.
    #[error("Unknown profile field '{name}'. Available: {available}")]
    UnknownField { name: String, available: String },

    /// Preset not found in the catalog.
    #[error("Preset '{name}' not found. Available: {available}")]
    UnknownPreset { name: String, available: String },

    /// HTTP client could not be constructed.
    #[error("Failed to create HTTP client: {0}")]
    HttpClient(String),

    /// Prompt template failed to render.
    #[error("Failed to render template {template}: {reason}")]
    Template { template: String, reason: String },

    /// The assessment itself failed; the message is user-facing.
    #[error(transparent)]
    Assessment(#[from] AssessmentError),

    /// Interactive input was cancelled.
    #[error("Interrupted")]
    Interrupted,
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::InvalidConfig(message.into())
    }

    /// Provide an `io::ErrorKind`-like view for callers mapping errors to exit codes.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::TomlParseError(_)
            | AppError::InvalidConfig(_)
            | AppError::UnknownField { .. }
            | AppError::Template { .. } => io::ErrorKind::InvalidInput,
            AppError::ConfigMissing(_)
            | AppError::EnvironmentVariableMissing(_)
            | AppError::UnknownPreset { .. } => io::ErrorKind::NotFound,
            AppError::Interrupted => io::ErrorKind::Interrupted,
            AppError::HttpClient(_) | AppError::Assessment(_) => io::ErrorKind::Other,
        }
    }
}
