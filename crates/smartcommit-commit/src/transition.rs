//! Workflow transitions and the transition policy.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ValueError;

/// A workflow transition the tracker integration understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Transition {
    /// `to_do`
    ToDo,
    /// `in_progress`
    InProgress,
    /// `peer_review`
    PeerReview,
    /// `review`
    Review,
    /// `testing_done`
    TestingDone,
    /// `staging_deployed`
    StagingDeployed,
    /// `staging_approved`
    StagingApproved,
    /// `production_deployed`
    ProductionDeployed,
    /// `done`
    Done,
}

impl Transition {
    /// Every allowed transition.
    pub const ALL: [Self; 9] = [
        Self::ToDo,
        Self::InProgress,
        Self::PeerReview,
        Self::Review,
        Self::TestingDone,
        Self::StagingDeployed,
        Self::StagingApproved,
        Self::ProductionDeployed,
        Self::Done,
    ];

    /// Returns the canonical snake_case name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ToDo => "to_do",
            Self::InProgress => "in_progress",
            Self::PeerReview => "peer_review",
            Self::Review => "review",
            Self::TestingDone => "testing_done",
            Self::StagingDeployed => "staging_deployed",
            Self::StagingApproved => "staging_approved",
            Self::ProductionDeployed => "production_deployed",
            Self::Done => "done",
        }
    }

    /// Resolves a raw token (with or without the leading `#`).
    ///
    /// Returns `None` for anything outside the allowed set.
    #[must_use]
    pub fn resolve(raw: &str) -> Option<Self> {
        let normalized = normalize_transition(raw.strip_prefix('#').unwrap_or(raw));
        Self::ALL
            .into_iter()
            .find(|transition| transition.as_str() == normalized)
    }
}

/// Normalizes a transition name: trimmed, lower-case, spaces to underscores.
#[must_use]
pub fn normalize_transition(raw: &str) -> String {
    raw.trim().to_lowercase().replace(' ', "_")
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Transition {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::resolve(s).ok_or_else(|| ValueError::UnknownTransition(s.to_string()))
    }
}

impl TryFrom<String> for Transition {
    type Error = ValueError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Transition> for String {
    fn from(transition: Transition) -> Self {
        transition.as_str().to_string()
    }
}
