//! Pulse dashboard entry point
//!
//! Run with:
//! ```bash
//! GITHUB_USER=octocat LANYARD_USER_ID=94490510688792576 cargo run -p pulse-dashboard
//! ```
//!
//! Configuration is loaded from environment variables.

use pulse_common::{try_init_tracing_with_config, AppConfig, AppError, TracingConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    let config = AppConfig::from_env();

    // Initialize tracing
    let tracing_config = config
        .as_ref()
        .map_or_else(|_| TracingConfig::default(), |c| TracingConfig::for_environment(c.app.env));
    if let Err(e) = try_init_tracing_with_config(tracing_config) {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    // Run the dashboard
    if let Err(e) = run(config).await {
        error!(error = %e, code = e.error_code(), "Dashboard failed");
        std::process::exit(e.exit_code());
    }
}

async fn run(config: Result<AppConfig, pulse_common::ConfigError>) -> Result<(), AppError> {
    let config = config.map_err(|e| {
        error!(error = %e, "Failed to load configuration");
        e
    })?;

    info!(
        env = ?config.app.env,
        user = %config.github.user,
        feed_limit = config.github.feed_limit,
        poll_interval_secs = config.presence.poll_interval_secs,
        "Configuration loaded"
    );

    pulse_dashboard::run(config).await
}
