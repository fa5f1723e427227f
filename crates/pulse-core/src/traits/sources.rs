//! Upstream source traits
//!
//! The service layer only sees these traits, so tests can swap in fakes.

use async_trait::async_trait;

use crate::entities::{GithubEvent, PresenceSnapshot};
use crate::error::SourceResult;

/// Public activity stream of a source control account
#[async_trait]
pub trait EventSource: Send + Sync {
    /// Fetch up to [`MAX_EVENTS`](crate::MAX_EVENTS) most recent public events, newest first
    async fn recent_events(&self, user: &str) -> SourceResult<Vec<GithubEvent>>;
}

/// Live presence of a single user
#[async_trait]
pub trait PresenceSource: Send + Sync {
    /// Fetch the current presence of `user_id`
    ///
    /// Only well-formed, successful reports produce `Ok`.
    async fn fetch_presence(&self, user_id: &str) -> SourceResult<PresenceSnapshot>;
}
