//! Activity feed service
//!
//! [`FeedService`] performs one fetch-normalize-truncate pass. [`ActivityFeed`] is the
//! mounted widget: it owns the background load, publishes [`FeedState`] over a watch
//! channel, and guarantees that a cancelled load never publishes.

use std::sync::Arc;
use std::time::Instant;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, instrument, warn};
use validator::Validate;

use pulse_core::{FeedItem, GithubEvent, GithubHosts, MAX_EVENTS};

use crate::dto::FeedQuery;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Prefix of every user-visible feed error
pub const FEED_ERROR_PREFIX: &str = "GitHub API error: ";

/// Feed service
pub struct FeedService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> FeedService<'a> {
    /// Create a new FeedService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Fetch, normalize and truncate a user's recent public activity
    #[instrument(skip(self, query), fields(user = %query.user, limit = query.limit))]
    pub async fn fetch_feed(&self, query: &FeedQuery) -> ServiceResult<Vec<FeedItem>> {
        query.validate()?;

        let started = Instant::now();
        let events = self.ctx.event_source().recent_events(&query.user).await?;
        let items = build_feed(&events, self.ctx.hosts(), query.limit);

        info!(
            events = events.len(),
            items = items.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Feed loaded"
        );

        Ok(items)
    }
}

/// Map the first [`MAX_EVENTS`] events in source order, then keep `limit` of them
pub fn build_feed(events: &[GithubEvent], hosts: &GithubHosts, limit: usize) -> Vec<FeedItem> {
    events
        .iter()
        .take(MAX_EVENTS)
        .map(|event| FeedItem::from_event(event, hosts))
        .take(limit)
        .collect()
}

/// Observable state of a mounted feed
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FeedState {
    /// Request in flight
    #[default]
    Loading,
    /// Load failed; user-visible message
    Error(String),
    /// Load finished; possibly empty
    Ready(Vec<FeedItem>),
}

impl FeedState {
    #[inline]
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Items of a ready feed, empty otherwise
    pub fn items(&self) -> &[FeedItem] {
        match self {
            Self::Ready(items) => items,
            _ => &[],
        }
    }
}

/// In-flight load owned by a mounted feed
struct Mount {
    token: CancellationToken,
    task: JoinHandle<()>,
}

impl Mount {
    fn cancel(self) {
        self.token.cancel();
        self.task.abort();
    }
}

/// A mounted activity feed widget
///
/// At most one load is outstanding. Calling [`load`](Self::load) again, calling
/// [`unmount`](Self::unmount), or dropping the feed cancels the previous load, and a
/// cancelled load never publishes a state.
pub struct ActivityFeed {
    ctx: ServiceContext,
    limit: usize,
    state: Arc<watch::Sender<FeedState>>,
    mount: Option<Mount>,
}

impl ActivityFeed {
    /// Create an unmounted feed using the context's default limit
    pub fn new(ctx: &ServiceContext) -> Self {
        let (state, _) = watch::channel(FeedState::Loading);

        Self {
            ctx: ctx.clone(),
            limit: ctx.feed_limit(),
            state: Arc::new(state),
            mount: None,
        }
    }

    /// Override the number of items displayed
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Receive every published state
    pub fn subscribe(&self) -> watch::Receiver<FeedState> {
        self.state.subscribe()
    }

    /// Current state
    pub fn state(&self) -> FeedState {
        self.state.borrow().clone()
    }

    /// Whether a load is outstanding
    pub fn is_loading(&self) -> bool {
        self.mount.as_ref().is_some_and(|m| !m.task.is_finished())
    }

    /// Start loading `user`'s feed, replacing any outstanding load
    ///
    /// Must be called from within a Tokio runtime.
    pub fn load(&mut self, user: impl Into<String>) {
        self.cancel_outstanding();

        self.state.send_if_modified(|state| {
            if state.is_loading() {
                false
            } else {
                *state = FeedState::Loading;
                true
            }
        });

        let query = FeedQuery::new(user, self.limit);
        let token = CancellationToken::new();
        let task = tokio::spawn(run_load(
            self.ctx.clone(),
            query,
            Arc::clone(&self.state),
            token.clone(),
        ));

        self.mount = Some(Mount { token, task });
    }

    /// Cancel any outstanding load; the last published state stays as it is
    pub fn unmount(&mut self) {
        if self.cancel_outstanding() {
            debug!("Feed unmounted with a load in flight");
        }
    }

    fn cancel_outstanding(&mut self) -> bool {
        match self.mount.take() {
            Some(mount) => {
                let in_flight = !mount.task.is_finished();
                mount.cancel();
                // Wait out a publish that passed its token check before the cancel
                self.state.send_if_modified(|_| false);
                in_flight
            }
            None => false,
        }
    }
}

impl Drop for ActivityFeed {
    fn drop(&mut self) {
        self.cancel_outstanding();
    }
}

impl std::fmt::Debug for ActivityFeed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActivityFeed")
            .field("limit", &self.limit)
            .field("mounted", &self.mount.is_some())
            .finish()
    }
}

async fn run_load(
    ctx: ServiceContext,
    query: FeedQuery,
    state: Arc<watch::Sender<FeedState>>,
    token: CancellationToken,
) {
    let service = FeedService::new(&ctx);
    let result = tokio::select! {
        biased;
        () = token.cancelled() => return,
        result = service.fetch_feed(&query) => result,
    };

    if token.is_cancelled() {
        return;
    }

    let next = match result {
        Ok(items) => FeedState::Ready(items),
        Err(e) => {
            warn!(user = %query.user, error = %e, code = e.error_code(), "Feed load failed");
            FeedState::Error(format!("{FEED_ERROR_PREFIX}{e}"))
        }
    };

    // Checked under the channel lock so teardown cannot slip in before the write
    state.send_if_modified(|current| {
        if token.is_cancelled() {
            return false;
        }
        *current = next;
        true
    });
}
