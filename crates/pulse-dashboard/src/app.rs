//! Dashboard wiring and run loop

use std::io::{self, Write};
use std::sync::Arc;

use chrono::Utc;
use tracing::{info, instrument};

use pulse_client::{
    build_http_client, GithubClient, GithubClientConfig, HttpClientConfig, LanyardClient,
    LanyardClientConfig,
};
use pulse_common::{AppConfig, AppError, AppResult};
use pulse_core::{GithubHosts, PresenceSnapshot};
use pulse_service::{ActivityFeed, FeedState, PresencePoller, ServiceContext};

use crate::render::render_frame;

const FRAME_RULE: &str = "────────────────────────────────────────";

/// Initialize the HTTP clients and build the `ServiceContext`
pub fn create_context(config: &AppConfig) -> AppResult<ServiceContext> {
    let http = build_http_client(&HttpClientConfig::from(config))
        .map_err(|e| AppError::Config(e.to_string()))?;

    let github = GithubClient::with_client(http.clone(), GithubClientConfig::from(config))
        .map_err(|e| AppError::Config(e.to_string()))?;
    let lanyard = LanyardClient::with_client(http, LanyardClientConfig::from(config))
        .map_err(|e| AppError::Config(e.to_string()))?;

    ServiceContext::builder()
        .event_source(Arc::new(github))
        .presence_source(Arc::new(lanyard))
        .hosts(GithubHosts::new(
            &config.github.api_url,
            &config.github.web_url,
        ))
        .feed_limit(config.github.feed_limit)
        .poll_interval(config.presence.poll_interval())
        .build()
        .map_err(AppError::from)
}

/// Run the dashboard until Ctrl-C, or for a single settled frame in once mode
#[instrument(skip_all, fields(user = %config.github.user, once = config.dashboard.once))]
pub async fn run(config: AppConfig) -> AppResult<()> {
    let ctx = create_context(&config)?;
    let presence_user_id = config.presence.user_id.clone();

    let mut feed = ActivityFeed::new(&ctx);
    let mut feed_rx = feed.subscribe();
    feed.load(config.github.user.clone());

    let poller = PresencePoller::new(&ctx, presence_user_id.clone());

    if config.dashboard.once {
        poller.poll_once().await;
        let state = {
            let settled = feed_rx
                .wait_for(|state| !state.is_loading())
                .await
                .map_err(AppError::internal)?;
            (*settled).clone()
        };

        return draw(&state, &poller.snapshot(), &presence_user_id);
    }

    let mut presence_rx = poller.subscribe();
    let mut presence = poller.start();
    info!("Dashboard running, press Ctrl-C to exit");

    let shutdown = tokio::signal::ctrl_c();
    tokio::pin!(shutdown);

    loop {
        draw(&feed_rx.borrow_and_update(), &presence_rx.borrow_and_update(), &presence_user_id)?;

        tokio::select! {
            result = &mut shutdown => {
                result.map_err(AppError::internal)?;
                info!("Shutdown signal received");
                break;
            }
            changed = feed_rx.changed() => {
                if changed.is_err() {
                    break;
                }
            }
            changed = presence_rx.changed() => {
                if changed.is_err() {
                    break;
                }
            }
        }
    }

    presence.stop();
    feed.unmount();

    Ok(())
}

fn draw(feed: &FeedState, presence: &PresenceSnapshot, presence_user_id: &str) -> AppResult<()> {
    let frame = render_frame(feed, presence, presence_user_id, Utc::now());

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{FRAME_RULE}\n{frame}")
        .and_then(|()| stdout.flush())
        .map_err(AppError::internal)
}
