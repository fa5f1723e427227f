//! Presence badge widget

use pulse_core::PresenceSnapshot;

/// Activity text longer than this is cut with an ellipsis
pub const MAX_ACTIVITY_CHARS: usize = 32;

/// Render the presence badge, e.g. `● Discord • octo · Online • Coding`
pub fn render_presence(snapshot: &PresenceSnapshot, user_id: &str) -> String {
    let mut line = format!(
        "{} {} · {}",
        snapshot.status.indicator(),
        snapshot.badge_title(),
        snapshot.status.label()
    );

    if let Some(activity) = snapshot.activity_text.as_deref() {
        line.push_str(" • ");
        line.push_str(&truncate(activity, MAX_ACTIVITY_CHARS));
    }

    format!("{line}\n  {}", PresenceSnapshot::profile_url(user_id))
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    cut.push('…');
    cut
}
