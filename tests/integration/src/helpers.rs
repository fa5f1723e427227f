//! Test helpers for integration tests
//!
//! Provides a mock GitHub/Lanyard API server that serves canned responses and
//! records the requests it receives.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use anyhow::Result;
use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use pulse_client::{GithubClient, GithubClientConfig, LanyardClient, LanyardClientConfig};
use pulse_core::GithubHosts;
use pulse_service::ServiceContext;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Canned response for one route
#[derive(Debug, Clone)]
pub struct MockResponse {
    pub status: StatusCode,
    pub body: String,
    /// Delay before answering
    pub delay: Duration,
}

impl MockResponse {
    /// 200 with a JSON body
    pub fn ok(body: serde_json::Value) -> Self {
        Self::with_status(StatusCode::OK, body.to_string())
    }

    /// Arbitrary status and raw body
    pub fn with_status(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
            delay: Duration::ZERO,
        }
    }

    /// Answer only after `delay`
    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

impl Default for MockResponse {
    fn default() -> Self {
        Self::ok(serde_json::json!([]))
    }
}

/// A request seen by the mock server
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub path: String,
    pub query: HashMap<String, String>,
    pub headers: HeaderMap,
}

impl RecordedRequest {
    /// Header value as a string
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

#[derive(Default)]
struct MockState {
    events: Mutex<MockResponse>,
    presence: Mutex<MockResponse>,
    requests: Mutex<Vec<RecordedRequest>>,
}

type SharedState = Arc<MockState>;

/// Mock upstream API server bound to an ephemeral local port
pub struct MockApiServer {
    pub addr: SocketAddr,
    state: SharedState,
    _handle: JoinHandle<()>,
}

impl MockApiServer {
    /// Start a new mock server
    pub async fn start() -> Result<Self> {
        let state = SharedState::default();

        let app = Router::new()
            .route("/users/:user/events/public", get(events_handler))
            .route("/v1/users/:id", get(presence_handler))
            .with_state(Arc::clone(&state));

        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = listener.local_addr()?;

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        Ok(Self {
            addr,
            state,
            _handle: handle,
        })
    }

    /// Get base URL for the server
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Set the response for the public events route
    pub fn set_events(&self, response: MockResponse) {
        *lock(&self.state.events) = response;
    }

    /// Set the response for the presence route
    pub fn set_presence(&self, response: MockResponse) {
        *lock(&self.state.presence) = response;
    }

    /// Requests received so far, oldest first
    pub fn requests(&self) -> Vec<RecordedRequest> {
        lock(&self.state.requests).clone()
    }

    /// Requests whose path starts with `prefix`
    pub fn requests_to(&self, prefix: &str) -> Vec<RecordedRequest> {
        self.requests()
            .into_iter()
            .filter(|r| r.path.starts_with(prefix))
            .collect()
    }

    /// GitHub client pointed at this server
    pub fn github_client(&self, token: Option<&str>) -> Result<GithubClient> {
        let config = GithubClientConfig {
            api_url: self.base_url(),
            token: token.map(str::to_string),
            ..GithubClientConfig::default()
        };
        Ok(GithubClient::new(config)?)
    }

    /// Lanyard client pointed at this server
    pub fn lanyard_client(&self) -> Result<LanyardClient> {
        let config = LanyardClientConfig {
            api_url: self.base_url(),
            ..LanyardClientConfig::default()
        };
        Ok(LanyardClient::new(config)?)
    }

    /// Service context wired to both clients
    pub fn context(&self, poll_interval: Duration) -> Result<ServiceContext> {
        let ctx = ServiceContext::builder()
            .event_source(Arc::new(self.github_client(None)?))
            .presence_source(Arc::new(self.lanyard_client()?))
            .hosts(GithubHosts::default())
            .poll_interval(poll_interval)
            .build()?;
        Ok(ctx)
    }
}

fn lock<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
}

fn record(state: &MockState, path: String, query: HashMap<String, String>, headers: HeaderMap) {
    lock(&state.requests).push(RecordedRequest {
        path,
        query,
        headers,
    });
}

async fn respond(response: MockResponse) -> Response {
    if !response.delay.is_zero() {
        tokio::time::sleep(response.delay).await;
    }
    (
        response.status,
        [("content-type", "application/json")],
        response.body,
    )
        .into_response()
}

async fn events_handler(
    State(state): State<SharedState>,
    Path(user): Path<String>,
    Query(query): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> Response {
    record(&state, format!("/users/{user}/events/public"), query, headers);
    let response = lock(&state.events).clone();
    respond(response).await
}

async fn presence_handler(
    State(state): State<SharedState>,
    Path(id): Path<String>,
    Query(query): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> Response {
    record(&state, format!("/v1/users/{id}"), query, headers);
    let response = lock(&state.presence).clone();
    respond(response).await
}

/// Wait until `check` holds, polling every 10ms for up to 5 seconds
pub async fn eventually<F: FnMut() -> bool>(mut check: F) -> bool {
    for _ in 0..500 {
        if check() {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    check()
}
