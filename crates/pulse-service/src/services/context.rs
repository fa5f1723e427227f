//! Service context - dependency container for services
//!
//! Holds the upstream sources and display settings the services need.

use std::sync::Arc;
use std::time::Duration;

use pulse_core::{EventSource, GithubHosts, PresenceSource};

use crate::dto::DEFAULT_FEED_LIMIT;

use super::error::{ServiceError, ServiceResult};

/// Default presence poll period
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(30);

/// Service context containing all dependencies
///
/// Cheap to clone: sources are shared behind `Arc`.
#[derive(Clone)]
pub struct ServiceContext {
    // Sources
    event_source: Arc<dyn EventSource>,
    presence_source: Arc<dyn PresenceSource>,

    // Settings
    hosts: GithubHosts,
    feed_limit: usize,
    poll_interval: Duration,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        event_source: Arc<dyn EventSource>,
        presence_source: Arc<dyn PresenceSource>,
        hosts: GithubHosts,
        feed_limit: usize,
        poll_interval: Duration,
    ) -> Self {
        Self {
            event_source,
            presence_source,
            hosts,
            feed_limit,
            poll_interval,
        }
    }

    /// Start building a context
    pub fn builder() -> ServiceContextBuilder {
        ServiceContextBuilder::new()
    }

    /// Get the event source
    pub fn event_source(&self) -> &Arc<dyn EventSource> {
        &self.event_source
    }

    /// Get the presence source
    pub fn presence_source(&self) -> &Arc<dyn PresenceSource> {
        &self.presence_source
    }

    /// Get the API and web hosts used to build links
    pub fn hosts(&self) -> &GithubHosts {
        &self.hosts
    }

    /// Get the default number of feed items
    pub fn feed_limit(&self) -> usize {
        self.feed_limit
    }

    /// Get the presence poll period
    pub fn poll_interval(&self) -> Duration {
        self.poll_interval
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("sources", &"...")
            .field("hosts", &self.hosts)
            .field("feed_limit", &self.feed_limit)
            .field("poll_interval", &self.poll_interval)
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
pub struct ServiceContextBuilder {
    event_source: Option<Arc<dyn EventSource>>,
    presence_source: Option<Arc<dyn PresenceSource>>,
    hosts: GithubHosts,
    feed_limit: usize,
    poll_interval: Duration,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self {
            event_source: None,
            presence_source: None,
            hosts: GithubHosts::default(),
            feed_limit: DEFAULT_FEED_LIMIT,
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }

    pub fn event_source(mut self, source: Arc<dyn EventSource>) -> Self {
        self.event_source = Some(source);
        self
    }

    pub fn presence_source(mut self, source: Arc<dyn PresenceSource>) -> Self {
        self.presence_source = Some(source);
        self
    }

    pub fn hosts(mut self, hosts: GithubHosts) -> Self {
        self.hosts = hosts;
        self
    }

    pub fn feed_limit(mut self, limit: usize) -> Self {
        self.feed_limit = limit;
        self
    }

    pub fn poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if a source is missing or the poll interval is zero
    pub fn build(self) -> ServiceResult<ServiceContext> {
        if self.poll_interval.is_zero() {
            return Err(ServiceError::validation("poll_interval must be non-zero"));
        }

        Ok(ServiceContext::new(
            self.event_source
                .ok_or_else(|| ServiceError::validation("event_source is required"))?,
            self.presence_source
                .ok_or_else(|| ServiceError::validation("presence_source is required"))?,
            self.hosts,
            self.feed_limit,
            self.poll_interval,
        ))
    }
}

impl Default for ServiceContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
