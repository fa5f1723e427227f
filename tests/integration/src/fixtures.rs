//! Test fixtures and payload builders
//!
//! JSON shaped like the GitHub public events stream and the Lanyard user envelope.

use chrono::{DateTime, Duration, Utc};
use serde_json::{json, Value};

/// Timestamp `hours` before now, in the upstream wire format
pub fn hours_ago(hours: i64) -> String {
    to_wire(Utc::now() - Duration::hours(hours))
}

fn to_wire(at: DateTime<Utc>) -> String {
    at.format("%Y-%m-%dT%H:%M:%SZ").to_string()
}

/// A raw event with an arbitrary payload
pub fn event(id: &str, event_type: &str, repo: &str, payload: Value) -> Value {
    json!({
        "id": id,
        "type": event_type,
        "actor": { "login": "octocat" },
        "repo": {
            "name": repo,
            "url": format!("https://api.github.com/repos/{repo}"),
        },
        "payload": payload,
        "public": true,
        "created_at": hours_ago(1),
    })
}

/// PushEvent with one commit whose API URL lives under `api_base`
pub fn push_event(id: &str, repo: &str, message: &str, api_base: &str) -> Value {
    event(
        id,
        "PushEvent",
        repo,
        json!({
            "ref": "refs/heads/main",
            "commits": [{
                "sha": "abc123",
                "message": message,
                "url": format!("{api_base}/repos/{repo}/commits/abc123"),
            }],
        }),
    )
}

/// WatchEvent (a star)
pub fn watch_event(id: &str, repo: &str) -> Value {
    event(id, "WatchEvent", repo, json!({ "action": "started" }))
}

/// PullRequestEvent carrying a web link
pub fn pull_request_event(id: &str, repo: &str, action: &str, number: u64) -> Value {
    event(
        id,
        "PullRequestEvent",
        repo,
        json!({
            "action": action,
            "number": number,
            "pull_request": {
                "title": "Add feature",
                "html_url": format!("https://github.com/{repo}/pull/{number}"),
            },
        }),
    )
}

/// CreateEvent for a branch or tag
pub fn create_event(id: &str, repo: &str, ref_type: &str, git_ref: &str) -> Value {
    event(
        id,
        "CreateEvent",
        repo,
        json!({ "ref_type": ref_type, "ref": git_ref }),
    )
}

/// `count` WatchEvents with ids `1..=count`
pub fn many_events(count: usize) -> Value {
    Value::Array(
        (1..=count)
            .map(|i| watch_event(&i.to_string(), "octocat/hello"))
            .collect(),
    )
}

/// Successful Lanyard envelope
pub fn lanyard_ok(username: &str, status: &str, activities: Value) -> Value {
    json!({
        "success": true,
        "data": {
            "discord_user": { "id": "94490510688792576", "username": username },
            "discord_status": status,
            "activities": activities,
            "listening_to_spotify": false,
        },
    })
}

/// Failed Lanyard envelope
pub fn lanyard_error(code: &str, message: &str) -> Value {
    json!({
        "success": false,
        "error": { "code": code, "message": message },
    })
}

/// One activity entry
pub fn activity(kind: u8, name: &str, state: Option<&str>, details: Option<&str>) -> Value {
    json!({
        "type": kind,
        "name": name,
        "state": state,
        "details": details,
    })
}
