//! Shared HTTP plumbing

mod client;
mod response;

pub use client::{build_http_client, parse_base_url, ClientError, ClientResult, HttpClientConfig};
pub(crate) use response::{endpoint, map_transport_error, read_json};
