//! Error types for the redaction engine.
//!
//! Sanitization itself is total and infallible; errors can only arise while
//! constructing a pattern registry from caller-supplied rules.

use thiserror::Error;

/// Result type for redaction operations.
pub type Result<T> = std::result::Result<T, RedactError>;

/// Errors that can occur while building a pattern registry.
#[derive(Error, Debug)]
pub enum RedactError {
    /// A caller-supplied detection pattern failed to compile.
    #[error("invalid pattern for rule `{id}`: {source}")]
    InvalidPattern {
        id: String,
        #[source]
        source: regex::Error,
    },

    /// Two rules were registered under the same id.
    #[error("duplicate rule id `{id}`")]
    DuplicateRule { id: String },
}
