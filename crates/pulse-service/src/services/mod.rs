//! Application services
//!
//! The feed aggregator and the presence poller, plus the dependency context they share.

pub mod context;
pub mod error;
pub mod feed;
pub mod presence;

pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use feed::{ActivityFeed, FeedService, FeedState};
pub use presence::{PollOutcome, PresenceHandle, PresencePoller};
