//! Application configuration structs
//!
//! Loads configuration from environment variables (and a `.env` file if present).

use std::env;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Main application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub app: AppSettings,
    pub github: GithubConfig,
    pub presence: PresenceConfig,
    pub http: HttpConfig,
    pub dashboard: DashboardConfig,
}

/// General application settings
#[derive(Debug, Clone)]
pub struct AppSettings {
    pub name: String,
    pub env: Environment,
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }
}

impl FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "production" => Ok(Self::Production),
            "staging" => Ok(Self::Staging),
            "development" => Ok(Self::Development),
            _ => Err(format!("unknown environment: {s}")),
        }
    }
}

/// GitHub activity feed configuration
#[derive(Clone)]
pub struct GithubConfig {
    /// Account whose public events are shown
    pub user: String,
    /// Optional bearer credential
    pub token: Option<String>,
    pub api_url: String,
    pub web_url: String,
    /// Number of items displayed
    pub feed_limit: usize,
}

impl fmt::Debug for GithubConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GithubConfig")
            .field("user", &self.user)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("api_url", &self.api_url)
            .field("web_url", &self.web_url)
            .field("feed_limit", &self.feed_limit)
            .finish()
    }
}

/// Presence polling configuration
#[derive(Debug, Clone)]
pub struct PresenceConfig {
    pub api_url: String,
    /// Discord user id whose presence is shown
    pub user_id: String,
    pub poll_interval_secs: u64,
}

impl PresenceConfig {
    #[must_use]
    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs)
    }
}

/// Outbound HTTP settings
#[derive(Debug, Clone)]
pub struct HttpConfig {
    pub timeout_secs: u64,
}

impl HttpConfig {
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Terminal dashboard settings
#[derive(Debug, Clone, Default)]
pub struct DashboardConfig {
    /// Render one settled frame and exit
    pub once: bool,
}

// Default value functions
fn default_app_name() -> String {
    "pulse".to_string()
}

fn default_github_api_url() -> String {
    "https://api.github.com".to_string()
}

fn default_github_web_url() -> String {
    "https://github.com".to_string()
}

fn default_feed_limit() -> usize {
    8
}

fn default_lanyard_api_url() -> String {
    "https://api.lanyard.rest".to_string()
}

fn default_poll_interval_secs() -> u64 {
    30
}

fn default_timeout_secs() -> u64 {
    10
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if required environment variables are missing or invalid
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup
    ///
    /// # Errors
    /// Returns an error if required variables are missing or invalid
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let required = |key: &'static str| var(key).ok_or(ConfigError::MissingVar(key));

        let feed_limit = parse_or(var("FEED_LIMIT"), "FEED_LIMIT", default_feed_limit)?;

        let poll_interval_secs = parse_or(
            var("PRESENCE_POLL_INTERVAL_SECS"),
            "PRESENCE_POLL_INTERVAL_SECS",
            default_poll_interval_secs,
        )?;
        if poll_interval_secs == 0 {
            return Err(ConfigError::InvalidValue(
                "PRESENCE_POLL_INTERVAL_SECS",
                "0 (expected at least 1)".to_string(),
            ));
        }

        Ok(Self {
            app: AppSettings {
                name: var("APP_NAME").unwrap_or_else(default_app_name),
                env: parse_or(var("APP_ENV"), "APP_ENV", Environment::default)?,
            },
            github: GithubConfig {
                user: required("GITHUB_USER")?,
                token: var("GITHUB_TOKEN"),
                api_url: var("GITHUB_API_URL").unwrap_or_else(default_github_api_url),
                web_url: var("GITHUB_WEB_URL").unwrap_or_else(default_github_web_url),
                feed_limit,
            },
            presence: PresenceConfig {
                api_url: var("LANYARD_API_URL").unwrap_or_else(default_lanyard_api_url),
                user_id: required("LANYARD_USER_ID")?,
                poll_interval_secs,
            },
            http: HttpConfig {
                timeout_secs: parse_or(
                    var("HTTP_TIMEOUT_SECS"),
                    "HTTP_TIMEOUT_SECS",
                    default_timeout_secs,
                )?,
            },
            dashboard: DashboardConfig {
                once: var("PULSE_ONCE").is_some_and(|v| is_truthy(&v)),
            },
        })
    }
}

fn parse_or<T, D>(value: Option<String>, key: &'static str, default: D) -> Result<T, ConfigError>
where
    T: FromStr,
    D: FnOnce() -> T,
{
    match value {
        Some(raw) => raw
            .parse()
            .map_err(|_| ConfigError::InvalidValue(key, raw)),
        None => Ok(default()),
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(value.to_lowercase().as_str(), "1" | "true" | "yes" | "on")
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}
