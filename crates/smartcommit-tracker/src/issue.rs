//! Issue records fetched from the tracker.

use serde::Deserialize;

/// Coarse-grained status bucket of a workflow status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusCategory {
    /// Not started.
    New,
    /// In progress.
    Indeterminate,
    /// Finished.
    Done,
    /// Anything else the tracker reports.
    #[serde(other)]
    Unknown,
}

impl StatusCategory {
    /// Returns true for the "done" category.
    #[must_use]
    pub fn is_done(self) -> bool {
        self == Self::Done
    }
}

/// A child work item as listed on its parent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubtaskSummary {
    /// The subtask key.
    pub key: String,
    /// The subtask status category.
    pub status_category: StatusCategory,
}

/// The part of an issue the subtask completion gate needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueRecord {
    /// Whether the issue is itself a subtask.
    pub is_subtask: bool,
    /// Subtasks in tracker order.
    pub subtasks: Vec<SubtaskSummary>,
}

impl IssueRecord {
    /// Returns the keys of subtasks whose status category is not done.
    #[must_use]
    pub fn incomplete_subtasks(&self) -> Vec<String> {
        self.subtasks
            .iter()
            .filter(|subtask| !subtask.status_category.is_done())
            .map(|subtask| subtask.key.clone())
            .collect()
    }
}

/// `GET /rest/api/3/issue/{key}` response body.
#[derive(Debug, Deserialize)]
pub(crate) struct IssueResponse {
    fields: IssueFields,
}

#[derive(Debug, Deserialize)]
struct IssueFields {
    issuetype: IssueTypeField,
    #[serde(default)]
    subtasks: Vec<SubtaskResponse>,
}

#[derive(Debug, Deserialize)]
struct IssueTypeField {
    subtask: bool,
}

#[derive(Debug, Deserialize)]
struct SubtaskResponse {
    key: String,
    fields: SubtaskFields,
}

#[derive(Debug, Deserialize)]
struct SubtaskFields {
    status: StatusField,
}

#[derive(Debug, Deserialize)]
struct StatusField {
    #[serde(rename = "statusCategory")]
    status_category: StatusCategoryField,
}

#[derive(Debug, Deserialize)]
struct StatusCategoryField {
    key: StatusCategory,
}

impl From<IssueResponse> for IssueRecord {
    fn from(response: IssueResponse) -> Self {
        Self {
            is_subtask: response.fields.issuetype.subtask,
            subtasks: response
                .fields
                .subtasks
                .into_iter()
                .map(|subtask| SubtaskSummary {
                    key: subtask.key,
                    status_category: subtask.fields.status.status_category.key,
                })
                .collect(),
        }
    }
}
