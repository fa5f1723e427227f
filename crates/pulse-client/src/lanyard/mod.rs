//! Lanyard (Discord presence) client

mod mappers;
mod models;
mod source;

pub use models::{ActivityModel, DiscordUserModel, LanyardErrorModel, LanyardResponseModel, PresenceDataModel};
pub use source::{LanyardClient, LanyardClientConfig};
