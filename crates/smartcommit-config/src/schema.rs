//! Configuration schema.

use serde::{Deserialize, Serialize};
use smartcommit_commit::Transition;

use crate::{ConfigError, ConfigResult};

/// Project key used when none is configured.
pub const DEFAULT_PROJECT_KEY: &str = "CCPD1";

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Project configuration.
    #[serde(default)]
    pub project: ProjectConfig,

    /// Issue tracker configuration.
    #[serde(default)]
    pub tracker: TrackerConfig,

    /// Subtask completion gate configuration.
    #[serde(default)]
    pub gate: GateConfig,

    /// Mandatory field policy.
    #[serde(default)]
    pub policy: PolicyConfig,

    /// Branch restrictions.
    #[serde(default)]
    pub branch: BranchConfig,
}

impl Config {
    /// Checks values serde cannot check on its own.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] describing the first bad value.
    pub fn validate(&self) -> ConfigResult<()> {
        let key = &self.project.key;
        if key.is_empty() {
            return Err(ConfigError::Invalid(
                "project key must not be empty".to_string(),
            ));
        }
        let starts_with_letter = key.chars().next().is_some_and(|c| c.is_ascii_alphabetic());
        if !starts_with_letter || !key.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(ConfigError::Invalid(format!(
                "project key {key:?} must be alphanumeric and start with a letter"
            )));
        }

        if let Some(url) = &self.tracker.base_url
            && !(url.starts_with("https://") || url.starts_with("http://"))
        {
            return Err(ConfigError::Invalid(format!(
                "tracker base_url {url:?} must be an http(s) URL"
            )));
        }

        if self.branch.allowed.iter().any(|branch| branch.trim().is_empty()) {
            return Err(ConfigError::Invalid(
                "allowed branch names must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}

/// Project configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// Project key literal issue keys are matched against.
    #[serde(default = "default_project_key")]
    pub key: String,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            key: default_project_key(),
        }
    }
}

fn default_project_key() -> String {
    DEFAULT_PROJECT_KEY.to_string()
}

/// Issue tracker configuration.
///
/// Credentials are never read from this file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrackerConfig {
    /// Site URL, e.g. `https://acme.atlassian.net`.
    pub base_url: Option<String>,
}

/// Subtask completion gate configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GateConfig {
    /// Whether transitions are checked against subtask status.
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Transitions the gate applies to. Empty means every transition.
    #[serde(default)]
    pub transitions: Vec<Transition>,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            transitions: Vec::new(),
        }
    }
}

fn default_true() -> bool {
    true
}

/// Which optional fields are mandatory.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PolicyConfig {
    /// Reject messages without a comment.
    #[serde(default)]
    pub require_comment: bool,

    /// Reject messages without a transition.
    #[serde(default)]
    pub require_transition: bool,
}

/// Branch restrictions.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BranchConfig {
    /// Branches commits are allowed on. Empty allows every branch.
    #[serde(default)]
    pub allowed: Vec<String>,
}
