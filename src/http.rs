//! Shared HTTP client construction.
//!
//! One `reqwest::Client` is built at startup and cloned into every API client
//! (clones share the connection pool). Every request carries the configured
//! timeout so a stalled provider can't hold a resolution pass forever.

use std::time::Duration;

/// User agent sent to every remote service. Discogs rejects requests without one.
pub const USER_AGENT: &str = concat!(
    "WxycLive/",
    env!("CARGO_PKG_VERSION"),
    " (+https://wxyc.org)"
);

/// Build the shared HTTP client with a per-request timeout.
pub fn build_client(timeout: Duration) -> Result<reqwest::Client, reqwest::Error> {
    reqwest::Client::builder()
        .gzip(true)
        .user_agent(USER_AGENT)
        .timeout(timeout)
        .build()
}

/// Describe a non-success status the way all our clients report it.
pub(crate) fn status_message(status: reqwest::StatusCode) -> String {
    format!(
        "HTTP {}: {}",
        status.as_u16(),
        status.canonical_reason().unwrap_or("Unknown")
    )
}
