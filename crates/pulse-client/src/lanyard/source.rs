//! reqwest implementation of PresenceSource

use async_trait::async_trait;
use reqwest::header::{CACHE_CONTROL, PRAGMA};
use reqwest::{Client, Url};
use tracing::{debug, instrument};

use pulse_core::{PresenceSnapshot, PresenceSource, SourceResult};

use crate::http::{
    build_http_client, endpoint, map_transport_error, parse_base_url, read_json, ClientResult,
    HttpClientConfig,
};

use super::models::LanyardResponseModel;

/// Lanyard client configuration
#[derive(Debug, Clone)]
pub struct LanyardClientConfig {
    /// API host (e.g., `https://api.lanyard.rest`)
    pub api_url: String,
    pub http: HttpClientConfig,
}

impl Default for LanyardClientConfig {
    fn default() -> Self {
        Self {
            api_url: "https://api.lanyard.rest".to_string(),
            http: HttpClientConfig::default(),
        }
    }
}

impl From<&pulse_common::AppConfig> for LanyardClientConfig {
    fn from(config: &pulse_common::AppConfig) -> Self {
        Self {
            api_url: config.presence.api_url.clone(),
            http: HttpClientConfig::from(config),
        }
    }
}

/// Lanyard REST implementation of PresenceSource
#[derive(Debug, Clone)]
pub struct LanyardClient {
    http: Client,
    api_base: Url,
}

impl LanyardClient {
    /// Create a new LanyardClient
    pub fn new(config: LanyardClientConfig) -> ClientResult<Self> {
        let http = build_http_client(&config.http)?;
        Self::with_client(http, config)
    }

    /// Create a LanyardClient sharing an existing reqwest client
    pub fn with_client(http: Client, config: LanyardClientConfig) -> ClientResult<Self> {
        Ok(Self {
            http,
            api_base: parse_base_url(&config.api_url)?,
        })
    }
}

#[async_trait]
impl PresenceSource for LanyardClient {
    #[instrument(skip(self))]
    async fn fetch_presence(&self, user_id: &str) -> SourceResult<PresenceSnapshot> {
        let url = endpoint(&self.api_base, &["v1", "users", user_id])?;

        // Presence must never be served from an intermediate cache
        let response = self
            .http
            .get(url)
            .header(CACHE_CONTROL, "no-cache, no-store")
            .header(PRAGMA, "no-cache")
            .send()
            .await
            .map_err(map_transport_error)?;
        debug!(status = response.status().as_u16(), "presence response");

        let model: LanyardResponseModel = read_json(response).await?;
        PresenceSnapshot::try_from(model)
    }
}
