//! GitHub public event entity
//!
//! Events arrive as a `type` string plus a payload whose shape depends on that type.
//! They are resolved once into [`EventKind`] and pattern matched from then on.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Wire type name of push events
pub const PUSH_EVENT: &str = "PushEvent";
/// Wire type name of branch/tag/repository creation events
pub const CREATE_EVENT: &str = "CreateEvent";
/// Wire type name of pull request events
pub const PULL_REQUEST_EVENT: &str = "PullRequestEvent";
/// Wire type name of issue events
pub const ISSUES_EVENT: &str = "IssuesEvent";

/// Commit listed in a push payload
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitRef {
    pub message: String,
    /// API URL of the commit (`.../repos/{owner}/{repo}/commits/{sha}`)
    pub url: Option<String>,
}

/// Pull request referenced by a payload
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullRequestRef {
    pub title: Option<String>,
    pub html_url: Option<String>,
}

/// Issue referenced by a payload
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueRef {
    pub title: Option<String>,
    pub html_url: Option<String>,
}

/// Event kind with its type-dependent payload
///
/// Every payload field is optional upstream, so every field is optional here too.
/// `Other` keeps any pull request or issue reference because the link policy
/// consults them regardless of event type (review and comment events carry them).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventKind {
    Push {
        commits: Vec<CommitRef>,
    },
    Create {
        ref_type: Option<String>,
        ref_name: Option<String>,
    },
    PullRequest {
        action: Option<String>,
        pull_request: Option<PullRequestRef>,
    },
    Issues {
        action: Option<String>,
        issue: Option<IssueRef>,
    },
    Other {
        type_name: String,
        pull_request: Option<PullRequestRef>,
        issue: Option<IssueRef>,
    },
}

impl EventKind {
    /// Wire type name of this kind
    #[must_use]
    pub fn type_name(&self) -> &str {
        match self {
            Self::Push { .. } => PUSH_EVENT,
            Self::Create { .. } => CREATE_EVENT,
            Self::PullRequest { .. } => PULL_REQUEST_EVENT,
            Self::Issues { .. } => ISSUES_EVENT,
            Self::Other { type_name, .. } => type_name,
        }
    }

    /// First commit of a push, if any
    #[must_use]
    pub fn first_commit(&self) -> Option<&CommitRef> {
        match self {
            Self::Push { commits } => commits.first(),
            _ => None,
        }
    }

    /// Pull request referenced by the payload, if any
    #[must_use]
    pub fn pull_request(&self) -> Option<&PullRequestRef> {
        match self {
            Self::PullRequest { pull_request, .. } | Self::Other { pull_request, .. } => {
                pull_request.as_ref()
            }
            _ => None,
        }
    }

    /// Issue referenced by the payload, if any
    #[must_use]
    pub fn issue(&self) -> Option<&IssueRef> {
        match self {
            Self::Issues { issue, .. } | Self::Other { issue, .. } => issue.as_ref(),
            _ => None,
        }
    }

    /// Display title for this event
    ///
    /// Never empty: kinds missing the fields their specific title needs fall back
    /// to the humanized type name.
    #[must_use]
    pub fn title(&self) -> String {
        if let Some(title) = self.specific_title() {
            return title;
        }

        let fallback = humanize_event_type(self.type_name());
        if fallback.is_empty() {
            "Activity".to_string()
        } else {
            fallback
        }
    }

    fn specific_title(&self) -> Option<String> {
        match self {
            Self::Push { commits } => commits
                .first()
                .map(|commit| format!("Commit: {}", commit.message).trim().to_string()),
            Self::Create { ref_type, ref_name } => {
                let ref_type = present(ref_type.as_deref())?;
                Some(match present(ref_name.as_deref()) {
                    Some(name) => format!("Created {ref_type}: {name}"),
                    None => format!("Created {ref_type}"),
                })
            }
            Self::PullRequest {
                action,
                pull_request,
            } => {
                let action = present(action.as_deref())?;
                let title = present(pull_request.as_ref()?.title.as_deref())?;
                Some(format!("PR {action}: {title}"))
            }
            Self::Issues { action, issue } => {
                let action = present(action.as_deref())?;
                let title = present(issue.as_ref()?.title.as_deref())?;
                Some(format!("Issue {action}: {title}"))
            }
            Self::Other { .. } => None,
        }
    }
}

/// A single public event from a GitHub account's activity stream
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GithubEvent {
    pub id: String,
    pub kind: EventKind,
    /// `owner/repo`
    pub repo_name: String,
    pub created_at: DateTime<Utc>,
}

/// Insert a space before each internal capital letter
///
/// `"WatchEvent"` becomes `"Watch Event"`.
#[must_use]
pub fn humanize_event_type(type_name: &str) -> String {
    let mut out = String::with_capacity(type_name.len() + 4);
    for ch in type_name.chars() {
        if ch.is_ascii_uppercase() && !out.is_empty() {
            out.push(' ');
        }
        out.push(ch);
    }
    out.trim().to_string()
}

/// Treat empty strings like missing values
pub(crate) fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}
