//! Value validation errors.

use thiserror::Error;

/// Errors raised when a raw string is not a valid smart commit value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValueError {
    /// Not a `<PROJECT>-<number>` issue key.
    #[error("invalid issue key: {0:?}")]
    InvalidIssueKey(String),

    /// Not a valid duration expression.
    #[error("invalid time format: {0:?} (expected components like 2h, 1d or 30m)")]
    InvalidDuration(String),

    /// Not a member of the allowed transition set.
    #[error("unknown transition: {0:?}")]
    UnknownTransition(String),
}

/// Result type for value parsing.
pub type ValueResult<T> = Result<T, ValueError>;
