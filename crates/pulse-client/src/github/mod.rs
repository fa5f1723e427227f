//! GitHub public events client

mod mappers;
mod models;
mod source;

pub use models::{CommitModel, EventModel, PayloadModel, RepoModel};
pub use source::{GithubClient, GithubClientConfig};
