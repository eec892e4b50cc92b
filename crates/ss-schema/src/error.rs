//! Error types for the transcript schema boundary.

use thiserror::Error;

/// Result type for schema operations.
pub type Result<T> = std::result::Result<T, SchemaError>;

/// Errors that can occur when reading or writing a transcript document.
#[derive(Error, Debug)]
pub enum SchemaError {
    /// The document is not valid transcript JSON.
    #[error("transcript parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// The document declares a schema version this build does not understand.
    #[error("unsupported schema version `{0}`")]
    UnsupportedVersion(String),
}
