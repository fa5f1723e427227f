//! GitHub events wire models

use chrono::{DateTime, Utc};
use serde::Deserialize;

use pulse_core::{IssueRef, PullRequestRef};

/// One element of `GET /users/{user}/events/public`
#[derive(Debug, Clone, Deserialize)]
pub struct EventModel {
    pub id: String,
    #[serde(rename = "type", default)]
    pub event_type: Option<String>,
    pub repo: RepoModel,
    pub created_at: DateTime<Utc>,
    /// Shape depends on `type`; decoded lazily by the mapper
    #[serde(default)]
    pub payload: serde_json::Value,
}

/// Repository an event happened in
#[derive(Debug, Clone, Deserialize)]
pub struct RepoModel {
    /// `owner/repo`
    pub name: String,
}

/// Union of the payload fields any event kind reads
///
/// Which fields matter depends on the event type. All are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PayloadModel {
    #[serde(default)]
    pub commits: Vec<CommitModel>,
    pub ref_type: Option<String>,
    #[serde(rename = "ref")]
    pub git_ref: Option<String>,
    pub action: Option<String>,
    pub pull_request: Option<PullRequestRef>,
    pub issue: Option<IssueRef>,
}

impl PayloadModel {
    /// Decode a raw payload, degrading to an empty one when the shape is unexpected
    pub fn from_value(value: serde_json::Value) -> Self {
        serde_json::from_value(value).unwrap_or_default()
    }
}

/// Commit listed in a push payload
#[derive(Debug, Clone, Deserialize)]
pub struct CommitModel {
    #[serde(default)]
    pub message: Option<String>,
    pub url: Option<String>,
}
