//! Branch restrictions.

use smartcommit_config::BranchConfig;
use tracing::debug;

use crate::{CompileError, CompileResult};

/// Branches commits are allowed on.
///
/// An empty list allows every branch, including an unknown one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BranchPolicy {
    allowed: Vec<String>,
}

impl BranchPolicy {
    /// Creates a policy allowing only the given branches.
    pub fn new<I, S>(allowed: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            allowed: allowed.into_iter().map(Into::into).collect(),
        }
    }

    /// Builds the policy from configuration.
    #[must_use]
    pub fn from_config(config: &BranchConfig) -> Self {
        Self::new(config.allowed.iter().map(|branch| branch.trim().to_string()))
    }

    /// Returns true if every branch is allowed.
    #[must_use]
    pub fn allows_all(&self) -> bool {
        self.allowed.is_empty()
    }

    /// Checks the current branch. An empty name means the branch is unknown.
    ///
    /// # Errors
    ///
    /// Returns [`CompileError::BranchNotAllowed`] if the branch is not listed.
    pub fn check(&self, branch: &str) -> CompileResult<()> {
        if self.allows_all() || self.allowed.iter().any(|allowed| allowed == branch) {
            debug!(branch, "branch allowed");
            return Ok(());
        }
        Err(CompileError::BranchNotAllowed {
            branch: branch.to_string(),
            allowed: self.allowed.clone(),
        })
    }
}
