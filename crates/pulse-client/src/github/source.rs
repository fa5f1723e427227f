//! reqwest implementation of EventSource

use async_trait::async_trait;
use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::{Client, Url};
use tracing::{debug, instrument};

use pulse_core::{EventSource, GithubEvent, SourceResult, MAX_EVENTS};

use crate::http::{
    build_http_client, endpoint, map_transport_error, parse_base_url, read_json, ClientResult,
    HttpClientConfig,
};

use super::models::EventModel;

const GITHUB_JSON: &str = "application/vnd.github+json";

/// GitHub client configuration
#[derive(Clone)]
pub struct GithubClientConfig {
    /// API host (e.g., `https://api.github.com`)
    pub api_url: String,
    /// Optional bearer credential
    pub token: Option<String>,
    pub http: HttpClientConfig,
}

impl std::fmt::Debug for GithubClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GithubClientConfig")
            .field("api_url", &self.api_url)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("http", &self.http)
            .finish()
    }
}

impl Default for GithubClientConfig {
    fn default() -> Self {
        Self {
            api_url: "https://api.github.com".to_string(),
            token: None,
            http: HttpClientConfig::default(),
        }
    }
}

impl From<&pulse_common::AppConfig> for GithubClientConfig {
    fn from(config: &pulse_common::AppConfig) -> Self {
        Self {
            api_url: config.github.api_url.clone(),
            token: config.github.token.clone(),
            http: HttpClientConfig::from(config),
        }
    }
}

/// GitHub REST implementation of EventSource
#[derive(Clone)]
pub struct GithubClient {
    http: Client,
    api_base: Url,
    token: Option<String>,
}

impl std::fmt::Debug for GithubClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GithubClient")
            .field("api_base", &self.api_base.as_str())
            .field("authenticated", &self.token.is_some())
            .finish()
    }
}

impl GithubClient {
    /// Create a new GithubClient
    pub fn new(config: GithubClientConfig) -> ClientResult<Self> {
        let http = build_http_client(&config.http)?;
        Self::with_client(http, config)
    }

    /// Create a GithubClient sharing an existing reqwest client
    pub fn with_client(http: Client, config: GithubClientConfig) -> ClientResult<Self> {
        Ok(Self {
            http,
            api_base: parse_base_url(&config.api_url)?,
            token: config.token.filter(|t| !t.is_empty()),
        })
    }
}

#[async_trait]
impl EventSource for GithubClient {
    #[instrument(skip(self))]
    async fn recent_events(&self, user: &str) -> SourceResult<Vec<GithubEvent>> {
        let url = endpoint(&self.api_base, &["users", user, "events", "public"])?;

        let mut request = self
            .http
            .get(url)
            .query(&[("per_page", MAX_EVENTS)])
            .header(ACCEPT, GITHUB_JSON);
        if let Some(token) = &self.token {
            request = request.header(AUTHORIZATION, format!("Bearer {token}"));
        }

        let response = request.send().await.map_err(map_transport_error)?;
        debug!(status = response.status().as_u16(), "events response");

        let models: Vec<EventModel> = read_json(response).await?;

        Ok(models
            .into_iter()
            .take(MAX_EVENTS)
            .map(GithubEvent::from)
            .collect())
    }
}
