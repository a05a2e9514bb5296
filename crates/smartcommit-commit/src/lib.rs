//! Smart commit value types for Smartcommit.
//!
//! This crate provides the validated values a smart commit is built from:
//! - [`IssueKey`]: a `<PROJECT>-<number>` work item identifier
//! - [`TimeSpent`]: a duration such as `1d 2h 30m`
//! - [`Transition`]: a workflow state change from the allowed set
//! - [`ParsedCommit`]: the accepted commit, composed into canonical form

mod duration;
mod error;
mod key;
mod parsed;
mod transition;

pub use duration::{DurationUnit, TimeSpent};
pub use error::{ValueError, ValueResult};
pub use key::IssueKey;
pub use parsed::{ParsedCommit, ParsedCommitBuilder};
pub use transition::{Transition, normalize_transition};
