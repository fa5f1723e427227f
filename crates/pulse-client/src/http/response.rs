//! Request URL building and response decoding shared by both clients

use reqwest::{Response, Url};
use serde::de::DeserializeOwned;

use pulse_core::{SourceError, SourceResult};

/// Append percent-encoded path segments to a base URL
pub(crate) fn endpoint(base: &Url, segments: &[&str]) -> SourceResult<Url> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|()| SourceError::network(format!("cannot append a path to {base}")))?
        .pop_if_empty()
        .extend(segments);

    Ok(url)
}

/// Convert a transport failure (connect, timeout, body read) to a SourceError
pub(crate) fn map_transport_error(e: reqwest::Error) -> SourceError {
    SourceError::network(e.to_string())
}

/// Check the status and decode a JSON body
///
/// Non-2xx responses keep their status, reason phrase and body text.
pub(crate) async fn read_json<T: DeserializeOwned>(response: Response) -> SourceResult<T> {
    let status = response.status();

    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(SourceError::http(
            status.as_u16(),
            status.canonical_reason().unwrap_or_default(),
            body,
        ));
    }

    let bytes = response.bytes().await.map_err(map_transport_error)?;
    serde_json::from_slice(&bytes).map_err(|e| SourceError::malformed(e.to_string()))
}
