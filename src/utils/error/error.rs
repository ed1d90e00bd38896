//! Error types for the moderation engine
//!
//! All errors surfaced by this crate are expected, recoverable control flow:
//! moderation failures are variants here, never panics.

use thiserror::Error;

/// Result type alias for the moderation engine
pub type Result<T> = std::result::Result<T, ModerationError>;

/// Main error type for the moderation engine
#[derive(Error, Debug)]
pub enum ModerationError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Input validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// A detector failed and could not be recovered
    #[error("Detector unavailable: {detector}")]
    DetectorUnavailable {
        /// Name of the failing detector
        detector: String,
    },

    /// A detector exceeded its time budget
    #[error("Detector timed out: {detector}")]
    Timeout {
        /// Name of the timed-out detector
        detector: String,
    },

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Internal errors
    #[error("Internal error: {0}")]
    Internal(String),
}
