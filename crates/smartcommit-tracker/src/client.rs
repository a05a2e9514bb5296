//! Jira Cloud REST client.

use std::fmt;

use reqwest::header::ACCEPT;
use smartcommit_commit::IssueKey;
use tracing::{debug, warn};

use crate::issue::IssueResponse;
use crate::{IssueRecord, IssueTracker, TrackerError, TrackerResult};

/// Basic-auth identity for the tracker API.
#[derive(Clone)]
pub struct Credentials {
    email: String,
    api_token: String,
}

impl Credentials {
    /// Creates credentials from an account email and API token.
    #[must_use]
    pub fn new(email: impl Into<String>, api_token: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            api_token: api_token.into(),
        }
    }

    /// Returns the account email.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("api_token", &"<redacted>")
            .finish()
    }
}

/// Reads issues from a Jira Cloud site.
#[derive(Debug, Clone)]
pub struct JiraClient {
    client: reqwest::Client,
    base_url: String,
    credentials: Credentials,
}

impl JiraClient {
    /// Creates a client for the site at `base_url` (e.g. `https://acme.atlassian.net`).
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(base_url: impl Into<String>, credentials: Credentials) -> TrackerResult<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()
            .map_err(TrackerError::Client)?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            credentials,
        })
    }

    /// Returns the issue endpoint for a key.
    fn issue_url(&self, key: &IssueKey) -> String {
        format!(
            "{}/rest/api/3/issue/{key}?fields=issuetype,subtasks",
            self.base_url
        )
    }
}

impl IssueTracker for JiraClient {
    async fn fetch_issue(&self, key: &IssueKey) -> TrackerResult<IssueRecord> {
        let url = self.issue_url(key);
        debug!(%url, "fetching issue");

        let request_error = |source| TrackerError::Request {
            key: key.to_string(),
            source,
        };

        let response = self
            .client
            .get(&url)
            .basic_auth(&self.credentials.email, Some(&self.credentials.api_token))
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(request_error)?;

        let status = response.status();
        if !status.is_success() {
            warn!(key = %key, status = status.as_u16(), "issue fetch rejected");
            return Err(TrackerError::Status {
                key: key.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(request_error)?;
        let issue: IssueResponse =
            serde_json::from_slice(&body).map_err(|source| TrackerError::Decode {
                key: key.to_string(),
                source,
            })?;

        let record = IssueRecord::from(issue);
        debug!(
            key = %key,
            is_subtask = record.is_subtask,
            subtasks = record.subtasks.len(),
            "fetched issue"
        );
        Ok(record)
    }
}
