//! Domain error types
//!
//! All errors are domain-specific and don't expose third-party types.

use thiserror::Error;

/// Main Cloak error type
///
/// This is the primary error type used throughout the application.
/// It wraps specific error types and provides context for error handling.
#[derive(Debug, Error)]
pub enum CloakError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Input validation errors (empty text, bad CLI arguments)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Detector construction errors (pattern compilation)
    #[error("Detection error: {0}")]
    Detection(String),

    /// Text extraction errors
    #[error("Extraction error: {0}")]
    Extraction(#[from] ExtractionError),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Generic errors with context
    #[error("{0}")]
    Other(String),
}

/// Extraction-specific errors
///
/// Errors that occur while flattening an input file to plain text.
/// These errors don't expose third-party parser types.
#[derive(Debug, Error)]
pub enum ExtractionError {
    /// File could not be read
    #[error("Failed to read file {path}: {reason}")]
    ReadFailed { path: String, reason: String },

    /// File extension is not a supported text format
    #[error("Unsupported file type: {0}")]
    UnsupportedFormat(String),

    /// JSON input could not be parsed
    #[error("Invalid JSON in {path}: {reason}")]
    InvalidJson { path: String, reason: String },

    /// File content is not valid UTF-8
    #[error("File is not valid UTF-8: {0}")]
    InvalidEncoding(String),
}

// Conversion from std::io::Error
impl From<std::io::Error> for CloakError {
    fn from(err: std::io::Error) -> Self {
        CloakError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for CloakError {
    fn from(err: serde_json::Error) -> Self {
        CloakError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for CloakError {
    fn from(err: toml::de::Error) -> Self {
        CloakError::Configuration(format!("TOML parse error: {err}"))
    }
}
