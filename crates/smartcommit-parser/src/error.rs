//! Parser error types.

use thiserror::Error;

/// Extraction errors.
#[derive(Debug, Error)]
pub enum ParseError {
    /// A `#time` token is present but its value is not a valid duration.
    #[error("invalid time format: {0:?} (expected components like 2h, 1d or 30m)")]
    InvalidTimeFormat(String),

    /// The project key could not be turned into a search pattern.
    #[error("invalid project key pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
}

/// Result type for extraction.
pub type ParseResult<T> = Result<T, ParseError>;
