//! Domain entities

mod feed_item;
mod github_event;
mod presence;

pub use feed_item::{FeedItem, GithubHosts, MAX_EVENTS};
pub use github_event::{
    humanize_event_type, CommitRef, EventKind, GithubEvent, IssueRef, PullRequestRef,
    CREATE_EVENT, ISSUES_EVENT, PULL_REQUEST_EVENT, PUSH_EVENT,
};
pub use presence::{ActivityType, PresenceActivity, PresenceSnapshot, PresenceStatus};
