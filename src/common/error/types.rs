//! Unified error type definitions.
use thiserror::Error;

/// Main error type for strategy-deck operations.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// ZIP container error while assembling a package
    #[error("ZIP error: {0}")]
    ZipError(String),

    /// XML generation error
    #[error("XML error: {0}")]
    XmlError(String),

    /// JSON serialization or parsing error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid configuration value
    #[error("Configuration error: {0}")]
    Config(String),

    /// Impact or effort score outside 1..=5
    #[error("{field} score {value} is out of range (expected 1..=5)")]
    ScoreOutOfRange { field: &'static str, value: i64 },

    /// Wizard transition rejected
    #[error("Wizard error: {0}")]
    Wizard(String),

    /// Analysis generation collaborator failed
    #[error("Generation failed: {0}")]
    Generation(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

/// Result type for strategy-deck operations.
pub type Result<T> = std::result::Result<T, Error>;
