//! Error types for Keel core operations

use thiserror::Error;

/// Main error type for Keel core operations
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Unknown component category: {0}")]
    UnknownCategory(String),

    #[error("Unknown log level: {0}")]
    UnknownLogLevel(String),

    #[error("Invalid configuration: {0}")]
    Configuration(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for core operations
pub type CoreResult<T> = Result<T, CoreError>;
