//! Accepted smart commit and its canonical composition.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{IssueKey, TimeSpent, Transition};

/// A smart commit with every field extracted and validated.
///
/// Its [`Display`](fmt::Display) output is the canonical message:
/// `<KEY> #time <time>[ #comment <comment>][ #<transition>]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedCommit {
    /// The issue key, upper-cased.
    pub issue_key: IssueKey,

    /// The time spent.
    pub time_spent: TimeSpent,

    /// The optional comment, trimmed and non-empty.
    pub comment: Option<String>,

    /// The optional workflow transition.
    pub transition: Option<Transition>,

    /// The message this commit was extracted from.
    pub raw_message: String,
}

impl ParsedCommit {
    /// Creates a new parsed commit builder.
    #[must_use]
    pub fn builder(issue_key: IssueKey, time_spent: TimeSpent) -> ParsedCommitBuilder {
        ParsedCommitBuilder::new(issue_key, time_spent)
    }

    /// Composes the canonical smart commit message.
    #[must_use]
    pub fn compose(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ParsedCommit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} #time {}", self.issue_key, self.time_spent)?;
        if let Some(comment) = &self.comment {
            write!(f, " #comment {comment}")?;
        }
        if let Some(transition) = self.transition {
            write!(f, " #{transition}")?;
        }
        Ok(())
    }
}

/// Builder for [`ParsedCommit`].
#[derive(Debug)]
pub struct ParsedCommitBuilder {
    issue_key: IssueKey,
    time_spent: TimeSpent,
    comment: Option<String>,
    transition: Option<Transition>,
    raw_message: String,
}

impl ParsedCommitBuilder {
    /// Creates a new builder with required fields.
    fn new(issue_key: IssueKey, time_spent: TimeSpent) -> Self {
        Self {
            issue_key,
            time_spent,
            comment: None,
            transition: None,
            raw_message: String::new(),
        }
    }

    /// Sets the comment. Blank comments are dropped.
    #[must_use]
    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        let comment = comment.into();
        let trimmed = comment.trim();
        self.comment = (!trimmed.is_empty()).then(|| trimmed.to_string());
        self
    }

    /// Sets the comment from an optional value.
    #[must_use]
    pub fn maybe_comment(self, comment: Option<String>) -> Self {
        match comment {
            Some(comment) => self.comment(comment),
            None => self,
        }
    }

    /// Sets the transition.
    #[must_use]
    pub fn transition(mut self, transition: Transition) -> Self {
        self.transition = Some(transition);
        self
    }

    /// Sets the transition from an optional value.
    #[must_use]
    pub fn maybe_transition(mut self, transition: Option<Transition>) -> Self {
        self.transition = transition;
        self
    }

    /// Sets the raw message.
    #[must_use]
    pub fn raw_message(mut self, raw_message: impl Into<String>) -> Self {
        self.raw_message = raw_message.into();
        self
    }

    /// Builds the [`ParsedCommit`].
    #[must_use]
    pub fn build(self) -> ParsedCommit {
        ParsedCommit {
            issue_key: self.issue_key,
            time_spent: self.time_spent,
            comment: self.comment,
            transition: self.transition,
            raw_message: self.raw_message,
        }
    }
}
