//! reqwest client construction

use std::time::Duration;

use reqwest::{Client, Url};

/// Outbound HTTP client configuration
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Per-request timeout, connect included
    pub timeout: Duration,
    /// `User-Agent` header (GitHub rejects requests without one)
    pub user_agent: String,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(10),
            user_agent: format!("pulse/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl From<&pulse_common::AppConfig> for HttpClientConfig {
    fn from(config: &pulse_common::AppConfig) -> Self {
        Self {
            timeout: config.http.timeout(),
            user_agent: format!("{}/{}", config.app.name, env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Error type for client construction
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("Failed to build HTTP client: {0}")]
    Build(#[from] reqwest::Error),

    #[error("Invalid base URL {0}")]
    InvalidUrl(String),
}

/// Result type for client construction
pub type ClientResult<T> = Result<T, ClientError>;

/// Build a reqwest client from the given configuration
pub fn build_http_client(config: &HttpClientConfig) -> ClientResult<Client> {
    let client = Client::builder()
        .timeout(config.timeout)
        .user_agent(config.user_agent.clone())
        .build()?;

    Ok(client)
}

/// Parse an API host into a base URL that paths can be appended to
pub fn parse_base_url(raw: &str) -> ClientResult<Url> {
    let url = Url::parse(raw).map_err(|e| ClientError::InvalidUrl(format!("{raw}: {e}")))?;

    if url.cannot_be_a_base() || !matches!(url.scheme(), "http" | "https") {
        return Err(ClientError::InvalidUrl(raw.to_string()));
    }

    Ok(url)
}
