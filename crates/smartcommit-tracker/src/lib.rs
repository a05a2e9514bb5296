//! Issue tracker access for Smartcommit.
//!
//! The [`IssueTracker`] trait is the seam the subtask completion gate reads
//! through; [`JiraClient`] implements it over the Jira Cloud REST API.

mod client;
mod error;
mod issue;

use std::future::Future;

use smartcommit_commit::IssueKey;

pub use client::{Credentials, JiraClient};
pub use error::{TrackerError, TrackerResult};
pub use issue::{IssueRecord, StatusCategory, SubtaskSummary};

/// Read access to issues in an external tracker.
pub trait IssueTracker: Send + Sync {
    /// Fetches the type and subtask list of an issue.
    ///
    /// Every call is a fresh lookup.
    fn fetch_issue(
        &self,
        key: &IssueKey,
    ) -> impl Future<Output = TrackerResult<IssueRecord>> + Send;
}
