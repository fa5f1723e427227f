//! Presence entities
//!
//! A best-effort snapshot of a Discord user's live status as reported by a
//! presence service.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::github_event::present;

/// Discord profile page prefix
const PROFILE_URL_PREFIX: &str = "https://discord.com/users/";

/// User online status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PresenceStatus {
    /// User is online and active
    Online,
    /// User is idle (away from keyboard)
    Idle,
    /// Do not disturb
    #[serde(rename = "dnd")]
    DoNotDisturb,
    /// User is offline (or invisible)
    #[default]
    Offline,
}

impl PresenceStatus {
    /// Wire representation
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Online => "online",
            Self::Idle => "idle",
            Self::DoNotDisturb => "dnd",
            Self::Offline => "offline",
        }
    }

    /// Human-readable label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Online => "Online",
            Self::Idle => "Idle",
            Self::DoNotDisturb => "Do Not Disturb",
            Self::Offline => "Offline",
        }
    }

    /// Single-glyph status dot for text rendering
    #[must_use]
    pub const fn indicator(self) -> char {
        match self {
            Self::Online => '●',
            Self::Idle => '◐',
            Self::DoNotDisturb => '⊖',
            Self::Offline => '○',
        }
    }
}

impl fmt::Display for PresenceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for PresenceStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "online" => Ok(Self::Online),
            "idle" => Ok(Self::Idle),
            "dnd" => Ok(Self::DoNotDisturb),
            "offline" => Ok(Self::Offline),
            _ => Err(format!("Invalid status: {s}")),
        }
    }
}

/// Discord activity type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActivityType {
    Playing,
    Streaming,
    Listening,
    Watching,
    Custom,
    Competing,
    Unknown(u8),
}

impl ActivityType {
    /// Whether this activity describes what the user is doing right now
    #[must_use]
    pub const fn is_preferred(self) -> bool {
        matches!(
            self,
            Self::Playing | Self::Listening | Self::Custom | Self::Competing
        )
    }
}

impl From<u8> for ActivityType {
    fn from(value: u8) -> Self {
        match value {
            0 => Self::Playing,
            1 => Self::Streaming,
            2 => Self::Listening,
            3 => Self::Watching,
            4 => Self::Custom,
            5 => Self::Competing,
            other => Self::Unknown(other),
        }
    }
}

/// One entry of the user's activity list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresenceActivity {
    pub name: String,
    pub kind: ActivityType,
    pub state: Option<String>,
    pub details: Option<String>,
}

impl PresenceActivity {
    /// First non-empty of `state`, `details`, `name`
    #[must_use]
    pub fn display_text(&self) -> Option<&str> {
        present(self.state.as_deref())
            .or_else(|| present(self.details.as_deref()))
            .or_else(|| present(Some(self.name.as_str())))
    }

    /// Pick the activity to show: a preferred type first, else the first entry
    #[must_use]
    pub fn select(activities: &[Self]) -> Option<&Self> {
        activities
            .iter()
            .find(|activity| activity.kind.is_preferred())
            .or_else(|| activities.first())
    }
}

/// Latest successfully fetched presence
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresenceSnapshot {
    pub username: Option<String>,
    pub status: PresenceStatus,
    pub activity_text: Option<String>,
}

impl PresenceSnapshot {
    /// Build a snapshot from a status report and its activity list
    #[must_use]
    pub fn new(
        username: Option<String>,
        status: PresenceStatus,
        activities: &[PresenceActivity],
    ) -> Self {
        let activity_text = PresenceActivity::select(activities)
            .and_then(PresenceActivity::display_text)
            .map(str::to_string);

        Self {
            username,
            status,
            activity_text,
        }
    }

    /// Badge title, e.g. `Discord • octocat`
    #[must_use]
    pub fn badge_title(&self) -> String {
        match self.username.as_deref() {
            Some(name) if !name.is_empty() => format!("Discord • {name}"),
            _ => "Discord".to_string(),
        }
    }

    /// Public profile page for a Discord user id
    #[must_use]
    pub fn profile_url(user_id: &str) -> String {
        format!("{PROFILE_URL_PREFIX}{user_id}")
    }
}
