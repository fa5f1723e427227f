//! Data transfer objects
//!
//! Request DTOs carry validation for inputs handed to the services.

pub mod requests;

pub use requests::{FeedQuery, DEFAULT_FEED_LIMIT};
