//! Activity feed integration tests
//!
//! Runs the GitHub client and the feed widget against a local mock API.
//!
//! Run with: cargo test -p integration-tests --test feed_tests

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::http::StatusCode;
use integration_tests::{fixtures::*, MockApiServer, MockResponse};
use pulse_client::{GithubClient, GithubClientConfig};
use pulse_core::{EventSource, GithubHosts};
use pulse_service::{ActivityFeed, FeedState, ServiceContext};
use serde_json::json;
use tokio::sync::watch;

const API_BASE: &str = "https://api.github.com";

async fn settled(rx: &mut watch::Receiver<FeedState>) -> FeedState {
    let state = tokio::time::timeout(Duration::from_secs(5), rx.wait_for(|s| !s.is_loading()))
        .await
        .expect("feed did not settle")
        .expect("feed dropped");
    (*state).clone()
}

// ============================================================================
// GitHub Client Tests
// ============================================================================

#[tokio::test]
async fn test_events_request_shape() {
    let server = MockApiServer::start().await.unwrap();
    server.set_events(MockResponse::ok(json!([watch_event("1", "octocat/hello")])));

    let client = server.github_client(None).unwrap();
    let events = client.recent_events("octocat").await.unwrap();
    assert_eq!(events.len(), 1);

    let requests = server.requests_to("/users/");
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].path, "/users/octocat/events/public");
    assert_eq!(requests[0].query.get("per_page").map(String::as_str), Some("30"));
    assert_eq!(requests[0].header("accept"), Some("application/vnd.github+json"));
    assert!(requests[0].header("authorization").is_none());
    assert!(requests[0].header("user-agent").is_some());
}

#[tokio::test]
async fn test_token_is_sent_as_bearer() {
    let server = MockApiServer::start().await.unwrap();

    let client = server.github_client(Some("t0ken")).unwrap();
    client.recent_events("octocat").await.unwrap();

    let requests = server.requests_to("/users/");
    assert_eq!(requests[0].header("authorization"), Some("Bearer t0ken"));
}

#[tokio::test]
async fn test_events_are_decoded() {
    let server = MockApiServer::start().await.unwrap();
    server.set_events(MockResponse::ok(json!([
        push_event("2", "octocat/hello", "fix bug", API_BASE),
        create_event("1", "octocat/hello", "branch", "feature-x"),
    ])));

    let client = server.github_client(None).unwrap();
    let events = client.recent_events("octocat").await.unwrap();

    assert_eq!(events.len(), 2);
    assert_eq!(events[0].id, "2");
    assert_eq!(events[0].repo_name, "octocat/hello");
    assert_eq!(events[0].kind.title(), "Commit: fix bug");
    assert_eq!(events[1].kind.title(), "Created branch: feature-x");
}

// ============================================================================
// Activity Feed Tests
// ============================================================================

#[tokio::test]
async fn test_feed_titles_and_links() {
    let server = MockApiServer::start().await.unwrap();
    server.set_events(MockResponse::ok(json!([
        push_event("4", "octocat/hello", "fix bug", API_BASE),
        watch_event("3", "octocat/hello"),
        pull_request_event("2", "octocat/hello", "opened", 7),
        create_event("1", "octocat/tools", "tag", "v1.0.0"),
    ])));

    let ctx = server.context(Duration::from_secs(30)).unwrap();
    let mut feed = ActivityFeed::new(&ctx);
    let mut rx = feed.subscribe();
    feed.load("octocat");

    let state = settled(&mut rx).await;
    let items = state.items();
    assert_eq!(items.len(), 4);

    assert_eq!(items[0].title, "Commit: fix bug");
    assert_eq!(
        items[0].target_url,
        "https://github.com/octocat/hello/commit/abc123"
    );

    assert_eq!(items[1].title, "Watch Event");
    assert_eq!(items[1].target_url, "https://github.com/octocat/hello");

    assert_eq!(items[2].title, "PR opened: Add feature");
    assert_eq!(items[2].target_url, "https://github.com/octocat/hello/pull/7");

    assert_eq!(items[3].title, "Created tag: v1.0.0");
    assert_eq!(items[3].repo_url, "https://github.com/octocat/tools");
}

#[tokio::test]
async fn test_feed_limit_truncates() {
    let server = MockApiServer::start().await.unwrap();
    server.set_events(MockResponse::ok(many_events(30)));

    let ctx = server.context(Duration::from_secs(30)).unwrap();
    let mut feed = ActivityFeed::new(&ctx).with_limit(5);
    let mut rx = feed.subscribe();
    feed.load("octocat");

    let state = settled(&mut rx).await;
    let ids: Vec<&str> = state.items().iter().map(|i| i.id.as_str()).collect();
    assert_eq!(ids, ["1", "2", "3", "4", "5"]);
}

#[tokio::test]
async fn test_empty_stream_is_ready() {
    let server = MockApiServer::start().await.unwrap();

    let ctx = server.context(Duration::from_secs(30)).unwrap();
    let mut feed = ActivityFeed::new(&ctx);
    let mut rx = feed.subscribe();
    feed.load("octocat");

    assert_eq!(settled(&mut rx).await, FeedState::Ready(Vec::new()));
}

#[tokio::test]
async fn test_not_found_is_reported() {
    let server = MockApiServer::start().await.unwrap();
    server.set_events(MockResponse::with_status(
        StatusCode::NOT_FOUND,
        r#"{"message":"Not Found"}"#,
    ));

    let ctx = server.context(Duration::from_secs(30)).unwrap();
    let mut feed = ActivityFeed::new(&ctx);
    let mut rx = feed.subscribe();
    feed.load("nobody-here");

    match settled(&mut rx).await {
        FeedState::Error(message) => {
            assert!(
                message.starts_with("GitHub API error: 404 Not Found"),
                "unexpected message: {message}"
            );
            assert!(message.contains("Not Found\"}"));
        }
        other => panic!("expected error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_malformed_body_is_reported() {
    let server = MockApiServer::start().await.unwrap();
    server.set_events(MockResponse::with_status(StatusCode::OK, "not json"));

    let ctx = server.context(Duration::from_secs(30)).unwrap();
    let mut feed = ActivityFeed::new(&ctx);
    let mut rx = feed.subscribe();
    feed.load("octocat");

    match settled(&mut rx).await {
        FeedState::Error(message) => {
            assert!(message.starts_with("GitHub API error: malformed payload"));
        }
        other => panic!("expected error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_unreachable_host_is_reported() {
    // Bind and release a port so nothing is listening on it
    let listener = std::net::TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = GithubClient::new(GithubClientConfig {
        api_url: format!("http://{addr}"),
        ..GithubClientConfig::default()
    })
    .unwrap();

    let server = MockApiServer::start().await.unwrap();
    let ctx = ServiceContext::builder()
        .event_source(Arc::new(client))
        .presence_source(Arc::new(server.lanyard_client().unwrap()))
        .hosts(GithubHosts::default())
        .build()
        .unwrap();

    let mut feed = ActivityFeed::new(&ctx);
    let mut rx = feed.subscribe();
    feed.load("octocat");

    match settled(&mut rx).await {
        FeedState::Error(message) => {
            assert!(message.starts_with("GitHub API error: network failure"));
        }
        other => panic!("expected error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_reload_discards_slow_response() {
    let server = MockApiServer::start().await.unwrap();
    server.set_events(
        MockResponse::ok(json!([push_event("1", "octocat/slow", "stale", API_BASE)]))
            .delayed(Duration::from_millis(500)),
    );

    let ctx = server.context(Duration::from_secs(30)).unwrap();
    let mut feed = ActivityFeed::new(&ctx);
    let mut rx = feed.subscribe();
    feed.load("octocat");

    // Let the first request reach the server before replacing the response
    assert!(integration_tests::eventually(|| !server.requests_to("/users/").is_empty()).await);
    server.set_events(MockResponse::ok(json!([watch_event("2", "octocat/fast")])));
    feed.load("octocat");

    let state = settled(&mut rx).await;
    assert_eq!(state.items()[0].repo_name, "octocat/fast");

    tokio::time::sleep(Duration::from_millis(700)).await;
    assert_eq!(feed.state().items()[0].repo_name, "octocat/fast");
}

#[tokio::test]
async fn test_unmount_discards_response() {
    let server = MockApiServer::start().await.unwrap();
    server.set_events(
        MockResponse::ok(json!([watch_event("1", "octocat/hello")]))
            .delayed(Duration::from_millis(200)),
    );

    let ctx = server.context(Duration::from_secs(30)).unwrap();
    let mut feed = ActivityFeed::new(&ctx);
    feed.load("octocat");

    assert!(integration_tests::eventually(|| !server.requests_to("/users/").is_empty()).await);
    feed.unmount();

    tokio::time::sleep(Duration::from_millis(400)).await;
    assert!(!feed.is_loading());
    assert_eq!(feed.state(), FeedState::Loading);
}
