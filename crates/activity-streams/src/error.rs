//! Error types for the ActivityStreams layer.

use thiserror::Error;

/// Result type alias for vocabulary operations
pub type Result<T> = std::result::Result<T, StreamsError>;

#[derive(Error, Debug)]
pub enum StreamsError {
    #[error(transparent)]
    Core(#[from] activity_core::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),

    /// The `type` of a document names no vocabulary type
    #[error("no vocabulary type matches {0}")]
    UnknownType(String),
}
