//! # pulse-service
//!
//! Application layer: the activity feed aggregator, the presence poller, and their DTOs.

pub mod dto;
pub mod services;

pub use dto::FeedQuery;
pub use services::{
    ActivityFeed, FeedService, FeedState, PollOutcome, PresenceHandle, PresencePoller,
    ServiceContext, ServiceContextBuilder, ServiceError, ServiceResult,
};
