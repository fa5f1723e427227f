//! Lanyard REST wire models

use serde::Deserialize;

/// Envelope of `GET /v1/users/{user_id}`
#[derive(Debug, Clone, Deserialize)]
pub struct LanyardResponseModel {
    #[serde(default)]
    pub success: bool,
    pub data: Option<PresenceDataModel>,
    pub error: Option<LanyardErrorModel>,
}

/// Error body sent with `success: false`
#[derive(Debug, Clone, Deserialize)]
pub struct LanyardErrorModel {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub message: String,
}

/// Presence data of a monitored user
#[derive(Debug, Clone, Deserialize)]
pub struct PresenceDataModel {
    /// `online`, `idle`, `dnd` or `offline`
    pub discord_status: String,
    pub discord_user: Option<DiscordUserModel>,
    #[serde(default)]
    pub activities: Vec<ActivityModel>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DiscordUserModel {
    pub username: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ActivityModel {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: u8,
    pub state: Option<String>,
    pub details: Option<String>,
}
