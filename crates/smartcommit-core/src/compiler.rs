//! Commit compiler.

use smartcommit_commit::ParsedCommit;
use smartcommit_config::{Config, PolicyConfig};
use smartcommit_parser::{
    CommentExtractor, IssueKeyExtractor, ParseError, TimeExtractor, TransitionExtractor, scan,
    strip_git_comments,
};
use smartcommit_tracker::IssueTracker;
use tracing::{debug, info};

use crate::{
    CommitMessageStore, CompileError, CompileResult, GateScope, MandatoryField, SubtaskGate,
};

/// Which optional fields must be present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldPolicy {
    /// Reject messages without a comment.
    pub require_comment: bool,
    /// Reject messages without a transition.
    pub require_transition: bool,
}

impl From<&PolicyConfig> for FieldPolicy {
    fn from(config: &PolicyConfig) -> Self {
        Self {
            require_comment: config.require_comment,
            require_transition: config.require_transition,
        }
    }
}

const NO_TRACKER: &str = "no issue tracker is configured";

/// Turns a free-form commit message into a canonical smart commit.
///
/// The pipeline is fail-fast: issue key, time, comment, transition, then the
/// subtask gate when a gated transition is present. Nothing is written
/// unless every step succeeds.
pub struct CommitCompiler<T> {
    project_key: String,
    keys: IssueKeyExtractor,
    times: TimeExtractor,
    comments: CommentExtractor,
    transitions: TransitionExtractor,
    policy: FieldPolicy,
    scope: GateScope,
    gate: Option<SubtaskGate<T>>,
    no_gate_reason: String,
}

impl<T: IssueTracker> CommitCompiler<T> {
    /// Creates a compiler for the given project key with the default policy,
    /// every transition gated and no tracker.
    ///
    /// # Errors
    ///
    /// Returns [`CompileError::InvalidProjectKey`] if the key cannot be
    /// searched for.
    pub fn new(project_key: &str) -> CompileResult<Self> {
        let keys = IssueKeyExtractor::new(project_key).map_err(CompileError::InvalidProjectKey)?;
        Ok(Self {
            project_key: project_key.to_string(),
            keys,
            times: TimeExtractor::new(),
            comments: CommentExtractor::new(),
            transitions: TransitionExtractor::new(),
            policy: FieldPolicy::default(),
            scope: GateScope::AllTransitions,
            gate: None,
            no_gate_reason: NO_TRACKER.to_string(),
        })
    }

    /// Creates a compiler from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`CompileError::InvalidProjectKey`] if the configured key
    /// cannot be searched for.
    pub fn from_config(config: &Config) -> CompileResult<Self> {
        Ok(Self::new(&config.project.key)?
            .with_policy(FieldPolicy::from(&config.policy))
            .with_gate_scope(GateScope::from_config(&config.gate)))
    }

    /// Sets the mandatory field policy.
    #[must_use]
    pub fn with_policy(mut self, policy: FieldPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Sets which transitions the gate applies to.
    #[must_use]
    pub fn with_gate_scope(mut self, scope: GateScope) -> Self {
        self.scope = scope;
        self
    }

    /// Sets the subtask gate.
    #[must_use]
    pub fn with_gate(mut self, gate: SubtaskGate<T>) -> Self {
        self.gate = Some(gate);
        self
    }

    /// Removes the gate, recording why no tracker is available.
    ///
    /// A gated transition is then rejected with `reason`.
    #[must_use]
    pub fn without_gate(mut self, reason: impl Into<String>) -> Self {
        self.gate = None;
        self.no_gate_reason = reason.into();
        self
    }

    /// Returns the project key.
    #[must_use]
    pub fn project_key(&self) -> &str {
        &self.project_key
    }

    /// Returns the gate scope.
    #[must_use]
    pub fn gate_scope(&self) -> &GateScope {
        &self.scope
    }

    /// Extracts and validates every field without consulting the tracker.
    ///
    /// # Errors
    ///
    /// Returns the first failing step: [`CompileError::MissingIssueKey`],
    /// [`CompileError::InvalidOrMissingTime`] or
    /// [`CompileError::MissingMandatoryField`].
    pub fn extract(&self, raw: &str) -> CompileResult<ParsedCommit> {
        let cleaned = strip_git_comments(raw);
        let scanned = scan(&cleaned);
        debug!(tokens = scanned.tokens().len(), "scanned message");

        let key = self
            .keys
            .extract(&scanned)
            .ok_or_else(|| CompileError::MissingIssueKey {
                project: self.project_key.clone(),
            })?;

        let time = self
            .times
            .extract(&scanned)
            .map_err(|e| match e {
                ParseError::InvalidTimeFormat(found) => {
                    CompileError::InvalidOrMissingTime { found: Some(found) }
                }
                other => CompileError::InvalidProjectKey(other),
            })?
            .ok_or(CompileError::InvalidOrMissingTime { found: None })?;

        let comment = self
            .comments
            .extract(&scanned, &[key.span.clone(), time.span.clone()]);
        if self.policy.require_comment && comment.is_none() {
            return Err(CompileError::MissingMandatoryField(MandatoryField::Comment));
        }

        let transition = self.transitions.extract(&scanned);
        if self.policy.require_transition && transition.is_none() {
            return Err(CompileError::MissingMandatoryField(
                MandatoryField::Transition,
            ));
        }

        Ok(ParsedCommit::builder(key.key, time.time)
            .maybe_comment(comment)
            .maybe_transition(transition)
            .raw_message(raw)
            .build())
    }

    /// Extracts every field, then runs the subtask gate if the transition is
    /// gated.
    ///
    /// # Errors
    ///
    /// Returns any [`extract`](Self::extract) error, or a gate failure:
    /// [`CompileError::TrackerNotConfigured`],
    /// [`CompileError::TrackerFetchFailed`] or
    /// [`CompileError::IncompleteSubtasks`].
    pub async fn compile(&self, raw: &str) -> CompileResult<ParsedCommit> {
        let commit = self.extract(raw)?;

        if let Some(transition) = commit.transition {
            if self.scope.applies_to(transition) {
                let gate = self.gate.as_ref().ok_or_else(|| {
                    CompileError::TrackerNotConfigured {
                        transition,
                        reason: self.no_gate_reason.clone(),
                    }
                })?;
                debug!(key = %commit.issue_key, transition = %transition, "running subtask gate");
                gate.check(&commit.issue_key).await?;
            } else {
                debug!(transition = %transition, "transition not gated");
            }
        }

        Ok(commit)
    }

    /// Compiles the message in `store` and overwrites it with the canonical
    /// smart commit.
    ///
    /// The store is left untouched on any failure.
    ///
    /// # Errors
    ///
    /// Returns any [`compile`](Self::compile) error, or
    /// [`CompileError::Store`] if the file cannot be read or written.
    pub async fn rewrite(&self, store: &CommitMessageStore) -> CompileResult<ParsedCommit> {
        let raw = store.read()?;
        let commit = self.compile(&raw).await?;

        let composed = commit.compose();
        store.write(&format!("{composed}\n"))?;
        info!(path = ?store.path(), message = %composed, "commit message rewritten");

        Ok(commit)
    }
}
