//! Source errors - failures reading an upstream API

use thiserror::Error;

/// Failure fetching from an upstream source
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SourceError {
    /// The request could not complete (connect, timeout, body read)
    #[error("network failure: {0}")]
    Network(String),

    /// Upstream answered with a non-2xx status
    #[error("{status} {reason}{}", body_suffix(.body))]
    Http {
        status: u16,
        reason: String,
        body: String,
    },

    /// Upstream answered with JSON of an unexpected shape
    #[error("malformed payload: {0}")]
    MalformedPayload(String),
}

fn body_suffix(body: &str) -> String {
    let body = body.trim();
    if body.is_empty() {
        String::new()
    } else {
        format!(" - {body}")
    }
}

impl SourceError {
    /// Create a network error
    pub fn network(msg: impl Into<String>) -> Self {
        Self::Network(msg.into())
    }

    /// Create an HTTP status error
    pub fn http(status: u16, reason: impl Into<String>, body: impl Into<String>) -> Self {
        Self::Http {
            status,
            reason: reason.into(),
            body: body.into(),
        }
    }

    /// Create a malformed payload error
    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedPayload(msg.into())
    }

    /// Get an error code string for logs
    pub fn code(&self) -> &'static str {
        match self {
            Self::Network(_) => "NETWORK_FAILURE",
            Self::Http { .. } => "HTTP_ERROR",
            Self::MalformedPayload(_) => "MALFORMED_PAYLOAD",
        }
    }

    /// HTTP status, when upstream answered
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Result type for source reads
pub type SourceResult<T> = Result<T, SourceError>;
