//! Activity feed widget

use chrono::{DateTime, Utc};
use pulse_service::FeedState;

use super::time_ago::time_ago;

/// Placeholder rows shown while loading
pub const SKELETON_ROWS: usize = 5;

const HEADER: &str = "Recent Activity · GitHub";
const SKELETON: &str = "  ░░░░░░░░░░░░░░░░░░░░░░░░░░░░";
const EMPTY: &str = "  No recent activity.";

/// Render a feed state as text
pub fn render_feed(state: &FeedState, now: DateTime<Utc>) -> String {
    let mut out = String::from(HEADER);
    out.push('\n');

    match state {
        FeedState::Loading => {
            for _ in 0..SKELETON_ROWS {
                out.push('\n');
                out.push_str(SKELETON);
            }
        }
        FeedState::Error(message) => {
            out.push_str(&format!("\n  ! {message}"));
        }
        FeedState::Ready(items) if items.is_empty() => {
            out.push('\n');
            out.push_str(EMPTY);
        }
        FeedState::Ready(items) => {
            for item in items {
                out.push_str(&format!(
                    "\n  • {}\n    {} · {}\n    {}",
                    item.title,
                    item.repo_name,
                    time_ago(item.created_at, now),
                    item.target_url
                ));
            }
        }
    }

    out
}
