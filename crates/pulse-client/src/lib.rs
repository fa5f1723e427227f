//! # pulse-client
//!
//! HTTP layer implementing the source traits defined in `pulse-core` with reqwest.
//!
//! ## Overview
//!
//! - Shared HTTP client construction and response handling
//! - Wire models with serde derives
//! - Model → entity mappers
//! - [`GithubClient`] (`EventSource`) and [`LanyardClient`] (`PresenceSource`)
//!
//! ## Usage
//!
//! ```rust,ignore
//! use pulse_client::{GithubClient, GithubClientConfig};
//! use pulse_core::EventSource;
//!
//! async fn example(config: &pulse_common::AppConfig) -> Result<(), Box<dyn std::error::Error>> {
//!     let client = GithubClient::new(GithubClientConfig::from(config))?;
//!     let events = client.recent_events("octocat").await?;
//!     println!("{} events", events.len());
//!     Ok(())
//! }
//! ```

pub mod github;
pub mod http;
pub mod lanyard;

// Re-export commonly used types
pub use github::{GithubClient, GithubClientConfig};
pub use http::{build_http_client, ClientError, ClientResult, HttpClientConfig};
pub use lanyard::{LanyardClient, LanyardClientConfig};
