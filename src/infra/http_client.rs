//! HTTP client factory with consistent timeout configuration.
//!
//! Outbound clients (store REST API, Bento) share one `reqwest::Client`
//! built here rather than constructing their own.

use reqwest::Client;
use std::time::Duration;
use url::Url;

/// Default connect timeout (TCP handshake + TLS).
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Default request timeout (total request/response time).
///
/// Notifications are handled inside the store's webhook request, which gives
/// up on its own after a while, so outbound calls must finish well before that.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

pub fn try_build_client() -> Result<Client, reqwest::Error> {
    Client::builder()
        .connect_timeout(DEFAULT_CONNECT_TIMEOUT)
        .timeout(DEFAULT_REQUEST_TIMEOUT)
        .build()
}

/// `Url::join` replaces the last path segment unless the base ends in `/`.
pub fn with_trailing_slash(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}
