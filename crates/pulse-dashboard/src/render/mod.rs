//! Plain-text renderers for the dashboard widgets

mod feed;
mod presence;
mod time_ago;

pub use feed::{render_feed, SKELETON_ROWS};
pub use presence::{render_presence, MAX_ACTIVITY_CHARS};
pub use time_ago::time_ago;

use chrono::{DateTime, Utc};
use pulse_core::PresenceSnapshot;
use pulse_service::FeedState;

/// One full dashboard frame: presence badge above the feed
pub fn render_frame(
    feed: &FeedState,
    presence: &PresenceSnapshot,
    presence_user_id: &str,
    now: DateTime<Utc>,
) -> String {
    format!(
        "{}\n\n{}",
        render_presence(presence, presence_user_id),
        render_feed(feed, now)
    )
}
