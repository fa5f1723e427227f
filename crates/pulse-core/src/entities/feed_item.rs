//! Normalized feed item

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::github_event::{present, EventKind, GithubEvent};

/// Number of events requested from the upstream stream and mapped per load
pub const MAX_EVENTS: usize = 30;

const DEFAULT_API_BASE: &str = "https://api.github.com";
const DEFAULT_WEB_BASE: &str = "https://github.com";

/// API and web base URLs used to build human-facing links
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GithubHosts {
    api_base: String,
    web_base: String,
}

impl Default for GithubHosts {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE, DEFAULT_WEB_BASE)
    }
}

impl GithubHosts {
    /// Create hosts from base URLs (trailing slashes are ignored)
    #[must_use]
    pub fn new(api_base: impl Into<String>, web_base: impl Into<String>) -> Self {
        Self {
            api_base: api_base.into().trim_end_matches('/').to_string(),
            web_base: web_base.into().trim_end_matches('/').to_string(),
        }
    }

    /// API base URL, e.g. `https://api.github.com`
    #[must_use]
    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    /// Web base URL, e.g. `https://github.com`
    #[must_use]
    pub fn web_base(&self) -> &str {
        &self.web_base
    }

    /// Web page of a repository
    #[must_use]
    pub fn repo_url(&self, repo_name: &str) -> String {
        format!("{}/{repo_name}", self.web_base)
    }

    /// Rewrite a commit API URL into its web URL
    ///
    /// `api.github.com/repos/o/r/commits/sha` becomes `github.com/o/r/commit/sha`.
    #[must_use]
    pub fn commit_web_url(&self, api_url: &str) -> String {
        let api_repos = format!("{}/repos", strip_scheme(&self.api_base));
        api_url
            .replacen(&api_repos, strip_scheme(&self.web_base), 1)
            .replacen("/commits/", "/commit/", 1)
    }

    /// Best navigable link for an event
    ///
    /// Priority: push commit, pull request, issue, repository page.
    #[must_use]
    pub fn target_url(&self, event: &GithubEvent) -> String {
        if let EventKind::Push { .. } = event.kind {
            if let Some(url) = event
                .kind
                .first_commit()
                .and_then(|commit| present(commit.url.as_deref()))
            {
                return self.commit_web_url(url);
            }
        }

        if let Some(url) = event
            .kind
            .pull_request()
            .and_then(|pr| present(pr.html_url.as_deref()))
        {
            return url.to_string();
        }

        if let Some(url) = event
            .kind
            .issue()
            .and_then(|issue| present(issue.html_url.as_deref()))
        {
            return url.to_string();
        }

        self.repo_url(&event.repo_name)
    }
}

fn strip_scheme(url: &str) -> &str {
    url.split_once("://").map_or(url, |(_, rest)| rest)
}

/// Uniform display record for one event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedItem {
    pub id: String,
    pub title: String,
    pub repo_name: String,
    pub repo_url: String,
    pub created_at: DateTime<Utc>,
    pub target_url: String,
}

impl FeedItem {
    /// Normalize an event into a feed item
    #[must_use]
    pub fn from_event(event: &GithubEvent, hosts: &GithubHosts) -> Self {
        Self {
            id: event.id.clone(),
            title: event.kind.title(),
            repo_name: event.repo_name.clone(),
            repo_url: hosts.repo_url(&event.repo_name),
            created_at: event.created_at,
            target_url: hosts.target_url(event),
        }
    }
}
