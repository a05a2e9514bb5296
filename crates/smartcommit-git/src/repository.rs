//! Git repository wrapper.

use std::path::{Path, PathBuf};

use git2::Repository as Git2Repo;
use tracing::debug;

use crate::{GitError, GitResult};

/// A Git repository wrapper.
pub struct Repository {
    inner: Git2Repo,
}

impl Repository {
    /// Opens a repository at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the path is not a valid Git repository.
    pub fn open(path: impl AsRef<Path>) -> GitResult<Self> {
        let path = path.as_ref();
        let inner = Git2Repo::open(path).map_err(|_| GitError::NotARepo(path.to_path_buf()))?;
        Ok(Self { inner })
    }

    /// Discovers the repository from the given directory or its parents.
    ///
    /// # Errors
    ///
    /// Returns an error if no repository is found.
    pub fn discover_from(path: impl AsRef<Path>) -> GitResult<Self> {
        let path = path.as_ref();
        let inner =
            Git2Repo::discover(path).map_err(|_| GitError::NotARepo(path.to_path_buf()))?;
        Ok(Self { inner })
    }

    /// Discovers the repository from the current directory.
    ///
    /// # Errors
    ///
    /// Returns an error if no repository is found.
    pub fn discover() -> GitResult<Self> {
        Self::discover_from(".")
    }

    /// Returns the short name of the branch `HEAD` points at.
    ///
    /// Works on an unborn branch (before the first commit), like
    /// `git symbolic-ref --short HEAD`.
    ///
    /// # Errors
    ///
    /// Returns an error if `HEAD` cannot be read or is detached.
    pub fn current_branch(&self) -> GitResult<String> {
        let head = self.inner.find_reference("HEAD")?;
        let target = head.symbolic_target().ok_or(GitError::DetachedHead)?;
        let branch = target.strip_prefix("refs/heads/").unwrap_or(target);
        Ok(branch.to_string())
    }

    /// Returns the directory git runs hooks from.
    #[must_use]
    pub fn hooks_dir(&self) -> PathBuf {
        self.inner.path().join("hooks")
    }
}

/// Returns the current branch of the repository around the working
/// directory, or an empty string when it cannot be determined.
#[must_use]
pub fn current_branch() -> String {
    match Repository::discover().and_then(|repo| repo.current_branch()) {
        Ok(branch) => branch,
        Err(e) => {
            debug!(error = %e, "could not determine current branch");
            String::new()
        }
    }
}
