//! Error types for notes config loading and validation.

use thiserror::Error;

/// Errors returned while loading or validating config.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A config file could not be read.
    #[error("failed to read config: {0}")]
    ReadFailed(#[from] std::io::Error),
    /// A config file is not valid JSON5.
    #[error("failed to parse config: {0}")]
    ParseFailed(#[from] json5::Error),
    /// The merged value does not decode into `NotesConfig`.
    #[error("failed to decode config: {0}")]
    DecodeFailed(#[from] serde_json::Error),
    /// A field in a file, runtime layer or the merged config is invalid.
    #[error("invalid config at {path}: {message}")]
    InvalidField { path: String, message: String },
    /// An `APP_*`, `CORS_*` or `NOTES_*` environment variable holds an unusable value.
    #[error("invalid environment variable {key}: {message}")]
    InvalidEnv { key: String, message: String },
}
