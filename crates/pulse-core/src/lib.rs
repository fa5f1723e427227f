//! # pulse-core
//!
//! Domain layer containing the normalized feed and presence entities, the GitHub
//! event-kind sum type, and the source traits implemented by the HTTP clients.
//! This crate has zero dependencies on infrastructure (HTTP stack, runtime, etc.).

pub mod entities;
pub mod error;
pub mod traits;

// Re-export commonly used types at crate root
pub use entities::{
    humanize_event_type, ActivityType, CommitRef, EventKind, FeedItem, GithubEvent,
    GithubHosts, IssueRef, PresenceActivity, PresenceSnapshot, PresenceStatus, PullRequestRef,
    MAX_EVENTS,
};
pub use error::{SourceError, SourceResult};
pub use traits::{EventSource, PresenceSource};
