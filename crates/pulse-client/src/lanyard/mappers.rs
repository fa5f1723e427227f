//! Lanyard model -> presence entity mapper

use pulse_core::{ActivityType, PresenceActivity, PresenceSnapshot, PresenceStatus, SourceError};

use super::models::{ActivityModel, LanyardResponseModel};

/// Convert ActivityModel to PresenceActivity entity
impl From<ActivityModel> for PresenceActivity {
    fn from(model: ActivityModel) -> Self {
        PresenceActivity {
            name: model.name,
            kind: ActivityType::from(model.kind),
            state: model.state,
            details: model.details,
        }
    }
}

/// Only a successful envelope with data and a known status yields a snapshot
impl TryFrom<LanyardResponseModel> for PresenceSnapshot {
    type Error = SourceError;

    fn try_from(model: LanyardResponseModel) -> Result<Self, Self::Error> {
        if !model.success {
            let reason = model
                .error
                .map_or_else(|| "unknown".to_string(), |e| format!("{}: {}", e.code, e.message));
            return Err(SourceError::malformed(format!("presence lookup failed ({reason})")));
        }

        let data = model
            .data
            .ok_or_else(|| SourceError::malformed("presence response has no data"))?;

        let status: PresenceStatus = data
            .discord_status
            .parse()
            .map_err(SourceError::malformed)?;

        let activities: Vec<PresenceActivity> = data
            .activities
            .into_iter()
            .map(PresenceActivity::from)
            .collect();

        Ok(PresenceSnapshot::new(
            data.discord_user.and_then(|user| user.username),
            status,
            &activities,
        ))
    }
}
