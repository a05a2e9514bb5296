//! Git abstraction layer for Smartcommit.
//!
//! This crate provides the little git access the hook needs:
//! - Repository discovery
//! - Current branch lookup
//! - Hooks directory location

mod error;
mod repository;

pub use error::{GitError, GitResult};
pub use repository::{Repository, current_branch};
