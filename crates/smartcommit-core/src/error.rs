//! Core error types.

use std::fmt;
use std::path::PathBuf;

use smartcommit_commit::{IssueKey, Transition};
use thiserror::Error;

/// Optional fields a policy can make mandatory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MandatoryField {
    /// `#comment`
    Comment,
    /// `#<transition>`
    Transition,
}

impl fmt::Display for MandatoryField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Comment => f.write_str("comment"),
            Self::Transition => f.write_str("transition"),
        }
    }
}

/// Errors that reject a commit message. Every one of them is terminal.
#[derive(Debug, Error)]
pub enum CompileError {
    /// No issue key in the message.
    #[error("issue key is mandatory: add a {project}-<number> key to the message")]
    MissingIssueKey { project: String },

    /// `#time` is absent, or present with a malformed value.
    #[error("{}", describe_time(.found))]
    InvalidOrMissingTime { found: Option<String> },

    /// A field the policy marks mandatory is absent.
    #[error("{0} is mandatory for commits in this repository")]
    MissingMandatoryField(MandatoryField),

    /// The project key cannot be searched for.
    #[error("invalid project key")]
    InvalidProjectKey(#[source] smartcommit_parser::ParseError),

    /// The tracker lookup did not succeed.
    #[error("failed to fetch issue from tracker")]
    TrackerFetchFailed(#[source] smartcommit_tracker::TrackerError),

    /// The gate applies but no tracker client was configured.
    #[error("transition #{transition} needs the issue tracker, but {reason}")]
    TrackerNotConfigured {
        transition: Transition,
        reason: String,
    },

    /// The issue still has subtasks that are not done.
    #[error("cannot transition {key}: subtasks not done: {}", .subtasks.join(", "))]
    IncompleteSubtasks { key: IssueKey, subtasks: Vec<String> },

    /// The commit message file does not exist.
    #[error("commit message file not found: {0}")]
    StoreNotFound(PathBuf),

    /// The commit message file could not be read or written.
    #[error("failed to access commit message file {path}")]
    Store {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Commits are not allowed on the current branch.
    #[error("commits to {} are not permitted (allowed: {})", display_branch(.branch), .allowed.join(", "))]
    BranchNotAllowed { branch: String, allowed: Vec<String> },
}

/// Result type for core operations.
pub type CompileResult<T> = Result<T, CompileError>;

#[allow(clippy::ref_option)] // thiserror passes fields by reference
fn describe_time(found: &Option<String>) -> String {
    match found {
        None => "time spent is mandatory: add `#time <duration>` (e.g. `#time 1h 30m`)".to_string(),
        Some(value) => format!(
            "invalid time format {value:?}: use components like 2h, 1d or 30m separated by spaces"
        ),
    }
}

fn display_branch(branch: &str) -> &str {
    if branch.is_empty() { "<unknown branch>" } else { branch }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_issue_key_display() {
        let err = CompileError::MissingIssueKey {
            project: "PROJ".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "issue key is mandatory: add a PROJ-<number> key to the message"
        );
    }

    #[test]
    fn test_missing_time_display() {
        let err = CompileError::InvalidOrMissingTime { found: None };
        assert!(err.to_string().starts_with("time spent is mandatory"));
    }

    #[test]
    fn test_invalid_time_display() {
        let err = CompileError::InvalidOrMissingTime {
            found: Some("2x".to_string()),
        };
        assert!(err.to_string().starts_with("invalid time format \"2x\""));
    }

    #[test]
    fn test_mandatory_field_display() {
        let err = CompileError::MissingMandatoryField(MandatoryField::Transition);
        assert_eq!(
            err.to_string(),
            "transition is mandatory for commits in this repository"
        );
    }

    #[test]
    fn test_incomplete_subtasks_display() {
        let err = CompileError::IncompleteSubtasks {
            key: IssueKey::parse("PROJ-45").unwrap(),
            subtasks: vec!["PROJ-46".to_string(), "PROJ-47".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "cannot transition PROJ-45: subtasks not done: PROJ-46, PROJ-47"
        );
    }

    #[test]
    fn test_branch_not_allowed_display() {
        let err = CompileError::BranchNotAllowed {
            branch: String::new(),
            allowed: vec!["main".to_string(), "staging".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "commits to <unknown branch> are not permitted (allowed: main, staging)"
        );
    }
}
