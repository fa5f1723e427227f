//! Presence poller integration tests
//!
//! Runs the Lanyard client and the poller against a local mock API.
//!
//! Run with: cargo test -p integration-tests --test presence_tests

use std::time::Duration;

use axum::http::StatusCode;
use integration_tests::{eventually, fixtures::*, MockApiServer, MockResponse};
use pulse_core::{PresenceSnapshot, PresenceSource, PresenceStatus};
use pulse_service::{PollOutcome, PresencePoller};
use serde_json::json;

const USER_ID: &str = "94490510688792576";

// ============================================================================
// Lanyard Client Tests
// ============================================================================

#[tokio::test]
async fn test_presence_request_bypasses_caches() {
    let server = MockApiServer::start().await.unwrap();
    server.set_presence(MockResponse::ok(lanyard_ok("octo", "online", json!([]))));

    let client = server.lanyard_client().unwrap();
    client.fetch_presence(USER_ID).await.unwrap();

    let requests = server.requests_to("/v1/users/");
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].path, format!("/v1/users/{USER_ID}"));
    assert_eq!(requests[0].header("cache-control"), Some("no-cache, no-store"));
    assert_eq!(requests[0].header("pragma"), Some("no-cache"));
}

#[tokio::test]
async fn test_idle_without_activities() {
    let server = MockApiServer::start().await.unwrap();
    server.set_presence(MockResponse::ok(lanyard_ok("octo", "idle", json!([]))));

    let client = server.lanyard_client().unwrap();
    let snapshot = client.fetch_presence(USER_ID).await.unwrap();

    assert_eq!(snapshot.status, PresenceStatus::Idle);
    assert_eq!(snapshot.username.as_deref(), Some("octo"));
    assert!(snapshot.activity_text.is_none());
}

#[tokio::test]
async fn test_preferred_activity_is_selected() {
    let server = MockApiServer::start().await.unwrap();
    server.set_presence(MockResponse::ok(lanyard_ok(
        "octo",
        "dnd",
        json!([
            activity(3, "YouTube", None, Some("Watching a talk")),
            activity(0, "Visual Studio Code", None, Some("Editing main.rs")),
        ]),
    )));

    let client = server.lanyard_client().unwrap();
    let snapshot = client.fetch_presence(USER_ID).await.unwrap();

    assert_eq!(snapshot.status, PresenceStatus::DoNotDisturb);
    assert_eq!(snapshot.activity_text.as_deref(), Some("Editing main.rs"));
}

#[tokio::test]
async fn test_failure_envelope_is_an_error() {
    let server = MockApiServer::start().await.unwrap();
    server.set_presence(MockResponse::with_status(
        StatusCode::NOT_FOUND,
        lanyard_error("user_not_monitored", "User is not being monitored by Lanyard").to_string(),
    ));

    let client = server.lanyard_client().unwrap();
    let err = client.fetch_presence(USER_ID).await.unwrap_err();
    assert_eq!(err.status(), Some(404));
}

// ============================================================================
// Presence Poller Tests
// ============================================================================

#[tokio::test]
async fn test_failed_polls_keep_last_snapshot() {
    let server = MockApiServer::start().await.unwrap();
    let ctx = server.context(Duration::from_secs(30)).unwrap();
    let poller = PresencePoller::new(&ctx, USER_ID);

    server.set_presence(MockResponse::ok(lanyard_ok(
        "octo",
        "online",
        json!([activity(4, "Custom Status", Some("Coding"), None)]),
    )));
    assert_eq!(poller.poll_once().await, PollOutcome::Updated);
    let expected = poller.snapshot();
    assert_eq!(expected.activity_text.as_deref(), Some("Coding"));

    server.set_presence(MockResponse::ok(lanyard_error("rate_limited", "slow down")));
    assert_eq!(poller.poll_once().await, PollOutcome::Unchanged);

    server.set_presence(MockResponse::with_status(StatusCode::BAD_GATEWAY, ""));
    assert_eq!(poller.poll_once().await, PollOutcome::Unchanged);

    server.set_presence(MockResponse::ok(lanyard_ok("octo", "sleeping", json!([]))));
    assert_eq!(poller.poll_once().await, PollOutcome::Unchanged);

    assert_eq!(poller.snapshot(), expected);
}

#[tokio::test]
async fn test_started_poller_repeats_until_stopped() {
    let server = MockApiServer::start().await.unwrap();
    server.set_presence(MockResponse::ok(lanyard_ok("octo", "online", json!([]))));

    let ctx = server.context(Duration::from_millis(50)).unwrap();
    let mut handle = PresencePoller::new(&ctx, USER_ID).start();

    assert!(eventually(|| server.requests_to("/v1/users/").len() >= 3).await);
    assert_eq!(handle.snapshot().status, PresenceStatus::Online);

    handle.stop();
    // A request sent just before stopping may still be arriving
    tokio::time::sleep(Duration::from_millis(100)).await;
    let polled = server.requests_to("/v1/users/").len();
    tokio::time::sleep(Duration::from_millis(300)).await;

    assert!(!handle.is_running());
    assert_eq!(server.requests_to("/v1/users/").len(), polled);
}

#[tokio::test]
async fn test_stop_discards_in_flight_poll() {
    let server = MockApiServer::start().await.unwrap();
    server.set_presence(
        MockResponse::ok(lanyard_ok("octo", "online", json!([])))
            .delayed(Duration::from_millis(200)),
    );

    let ctx = server.context(Duration::from_secs(30)).unwrap();
    let mut handle = PresencePoller::new(&ctx, USER_ID).start();

    assert!(eventually(|| !server.requests_to("/v1/users/").is_empty()).await);
    handle.stop();
    tokio::time::sleep(Duration::from_millis(400)).await;

    assert_eq!(handle.snapshot(), PresenceSnapshot::default());
}
