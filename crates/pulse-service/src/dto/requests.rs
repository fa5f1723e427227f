//! Request DTOs
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.

use serde::Deserialize;
use validator::Validate;

/// Default number of feed items displayed
pub const DEFAULT_FEED_LIMIT: usize = 8;

/// Activity feed request
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Validate)]
pub struct FeedQuery {
    /// GitHub login; logins are at most 39 characters
    #[validate(length(min = 1, max = 39, message = "User must be 1-39 characters"))]
    pub user: String,

    /// Items kept after mapping; 0 yields an empty feed
    #[serde(default = "default_limit")]
    pub limit: usize,
}

fn default_limit() -> usize {
    DEFAULT_FEED_LIMIT
}

impl FeedQuery {
    /// Create a query, trimming surrounding whitespace from the user
    pub fn new(user: impl Into<String>, limit: usize) -> Self {
        Self {
            user: user.into().trim().to_string(),
            limit,
        }
    }
}
