//! GitHub event model -> entity mapper

use pulse_core::entities::{CREATE_EVENT, ISSUES_EVENT, PULL_REQUEST_EVENT, PUSH_EVENT};
use pulse_core::{CommitRef, EventKind, GithubEvent};

use super::models::{CommitModel, EventModel, PayloadModel};

/// Convert EventModel to GithubEvent entity
impl From<EventModel> for GithubEvent {
    fn from(model: EventModel) -> Self {
        let type_name = model.event_type.unwrap_or_default();
        let payload = PayloadModel::from_value(model.payload);

        GithubEvent {
            id: model.id,
            kind: event_kind(type_name, payload),
            repo_name: model.repo.name,
            created_at: model.created_at,
        }
    }
}

/// Convert CommitModel to CommitRef
impl From<CommitModel> for CommitRef {
    fn from(model: CommitModel) -> Self {
        CommitRef {
            message: model.message.unwrap_or_default(),
            url: model.url,
        }
    }
}

/// Resolve the wire type name and its payload into an EventKind
pub(crate) fn event_kind(type_name: String, payload: PayloadModel) -> EventKind {
    match type_name.as_str() {
        PUSH_EVENT => EventKind::Push {
            commits: payload.commits.into_iter().map(CommitRef::from).collect(),
        },
        CREATE_EVENT => EventKind::Create {
            ref_type: payload.ref_type,
            ref_name: payload.git_ref,
        },
        PULL_REQUEST_EVENT => EventKind::PullRequest {
            action: payload.action,
            pull_request: payload.pull_request,
        },
        ISSUES_EVENT => EventKind::Issues {
            action: payload.action,
            issue: payload.issue,
        },
        _ => EventKind::Other {
            type_name,
            pull_request: payload.pull_request,
            issue: payload.issue,
        },
    }
}
