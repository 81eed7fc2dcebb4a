//! Error types for phish-rs

use thiserror::Error;

/// Result type alias for service operations
pub type Result<T> = std::result::Result<T, PhishError>;

/// Service error types
#[derive(Error, Debug)]
pub enum PhishError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Artifact file missing
    #[error("Artifact file '{0}' not found")]
    ArtifactMissing(String),

    /// Artifact deserialization failure
    #[error("Failed to deserialize artifact: {0}")]
    ArtifactFormat(String),

    /// Transform/predict failure at request time
    #[error("Inference error: {0}")]
    Inference(String),
}
