//! Subtask completion gate.

use smartcommit_commit::{IssueKey, Transition};
use smartcommit_config::GateConfig;
use smartcommit_tracker::IssueTracker;
use tracing::{debug, info, warn};

use crate::{CompileError, CompileResult};

/// Which transitions the gate applies to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateScope {
    /// The gate never runs.
    Disabled,
    /// Every transition is gated.
    AllTransitions,
    /// Only the listed transitions are gated.
    Only(Vec<Transition>),
}

impl GateScope {
    /// Builds the scope from configuration.
    #[must_use]
    pub fn from_config(config: &GateConfig) -> Self {
        if !config.enabled {
            Self::Disabled
        } else if config.transitions.is_empty() {
            Self::AllTransitions
        } else {
            Self::Only(config.transitions.clone())
        }
    }

    /// Returns true if `transition` must pass the gate.
    #[must_use]
    pub fn applies_to(&self, transition: Transition) -> bool {
        match self {
            Self::Disabled => false,
            Self::AllTransitions => true,
            Self::Only(transitions) => transitions.contains(&transition),
        }
    }
}

/// Blocks a transition while the issue has subtasks that are not done.
#[derive(Debug, Clone)]
pub struct SubtaskGate<T> {
    tracker: T,
}

impl<T: IssueTracker> SubtaskGate<T> {
    /// Creates a gate reading from the given tracker.
    pub fn new(tracker: T) -> Self {
        Self { tracker }
    }

    /// Returns the tracker.
    pub fn tracker(&self) -> &T {
        &self.tracker
    }

    /// Checks the issue with a single fresh tracker read.
    ///
    /// Subtasks and issues without subtasks always pass.
    ///
    /// # Errors
    ///
    /// Returns [`CompileError::TrackerFetchFailed`] if the lookup fails and
    /// [`CompileError::IncompleteSubtasks`] listing every subtask whose
    /// status category is not done.
    pub async fn check(&self, key: &IssueKey) -> CompileResult<()> {
        let record = self
            .tracker
            .fetch_issue(key)
            .await
            .map_err(CompileError::TrackerFetchFailed)?;

        if record.is_subtask {
            debug!(key = %key, "issue is a subtask, gate passes");
            return Ok(());
        }
        if record.subtasks.is_empty() {
            debug!(key = %key, "issue has no subtasks, gate passes");
            return Ok(());
        }

        let incomplete = record.incomplete_subtasks();
        if incomplete.is_empty() {
            info!(key = %key, subtasks = record.subtasks.len(), "all subtasks done");
            return Ok(());
        }

        warn!(key = %key, incomplete = ?incomplete, "subtasks not done");
        Err(CompileError::IncompleteSubtasks {
            key: key.clone(),
            subtasks: incomplete,
        })
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use smartcommit_tracker::{
        IssueRecord, StatusCategory, SubtaskSummary, TrackerError, TrackerResult,
    };

    /// In-memory tracker answering every lookup with the same record.
    pub(crate) struct FakeTracker {
        record: Option<IssueRecord>,
        pub(crate) calls: AtomicUsize,
    }

    impl FakeTracker {
        pub(crate) fn with_subtasks(subtasks: &[(&str, StatusCategory)]) -> Self {
            Self {
                record: Some(IssueRecord {
                    is_subtask: false,
                    subtasks: subtasks
                        .iter()
                        .map(|(key, status_category)| SubtaskSummary {
                            key: (*key).to_string(),
                            status_category: *status_category,
                        })
                        .collect(),
                }),
                calls: AtomicUsize::new(0),
            }
        }

        pub(crate) fn subtask_issue() -> Self {
            Self {
                record: Some(IssueRecord {
                    is_subtask: true,
                    subtasks: Vec::new(),
                }),
                calls: AtomicUsize::new(0),
            }
        }

        pub(crate) fn failing() -> Self {
            Self {
                record: None,
                calls: AtomicUsize::new(0),
            }
        }
    }

    impl IssueTracker for FakeTracker {
        async fn fetch_issue(&self, key: &IssueKey) -> TrackerResult<IssueRecord> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.record.clone().ok_or_else(|| TrackerError::Status {
                key: key.to_string(),
                status: 404,
            })
        }
    }

    fn key() -> IssueKey {
        IssueKey::parse("PROJ-45").unwrap()
    }

    #[tokio::test]
    async fn test_no_subtasks_passes() {
        let gate = SubtaskGate::new(FakeTracker::with_subtasks(&[]));
        assert!(gate.check(&key()).await.is_ok());
        assert_eq!(gate.tracker().calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_subtask_issue_passes() {
        let gate = SubtaskGate::new(FakeTracker::subtask_issue());
        assert!(gate.check(&key()).await.is_ok());
    }

    #[tokio::test]
    async fn test_all_done_passes() {
        let gate = SubtaskGate::new(FakeTracker::with_subtasks(&[
            ("PROJ-46", StatusCategory::Done),
            ("PROJ-47", StatusCategory::Done),
        ]));
        assert!(gate.check(&key()).await.is_ok());
    }

    #[tokio::test]
    async fn test_incomplete_subtasks_rejected() {
        let gate = SubtaskGate::new(FakeTracker::with_subtasks(&[
            ("PROJ-46", StatusCategory::Indeterminate),
            ("PROJ-47", StatusCategory::Done),
            ("PROJ-48", StatusCategory::New),
        ]));

        match gate.check(&key()).await {
            Err(CompileError::IncompleteSubtasks { key, subtasks }) => {
                assert_eq!(key.as_str(), "PROJ-45");
                assert_eq!(subtasks, vec!["PROJ-46".to_string(), "PROJ-48".to_string()]);
            }
            other => panic!("Expected IncompleteSubtasks, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_fetch_failure_is_fatal() {
        let gate = SubtaskGate::new(FakeTracker::failing());
        let result = gate.check(&key()).await;
        assert!(matches!(result, Err(CompileError::TrackerFetchFailed(_))));
    }

    #[test]
    fn test_scope_from_config() {
        let disabled = GateConfig {
            enabled: false,
            transitions: vec![Transition::Done],
        };
        assert_eq!(GateScope::from_config(&disabled), GateScope::Disabled);

        assert_eq!(
            GateScope::from_config(&GateConfig::default()),
            GateScope::AllTransitions
        );

        let narrowed = GateConfig {
            enabled: true,
            transitions: vec![Transition::Done, Transition::ProductionDeployed],
        };
        let scope = GateScope::from_config(&narrowed);
        assert!(scope.applies_to(Transition::Done));
        assert!(scope.applies_to(Transition::ProductionDeployed));
        assert!(!scope.applies_to(Transition::InProgress));
    }

    #[test]
    fn test_scope_applies_to() {
        for transition in Transition::ALL {
            assert!(GateScope::AllTransitions.applies_to(transition));
            assert!(!GateScope::Disabled.applies_to(transition));
        }
    }
}
