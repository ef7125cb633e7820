//! Source address extraction from HTTP request metadata.

use axum::http::{HeaderMap, HeaderName};
use std::net::SocketAddr;

/// Resolves the originating client address for a request.
///
/// When `proxy_header` is set the service is assumed to run behind a trusted
/// reverse proxy and the first comma-separated entry of that header is used
/// (e.g. `X-Forwarded-For: client, proxy1, proxy2` yields `client`).
/// Otherwise the socket peer address is used when known.
///
/// Returns an empty string when no address is available.
///
/// # Examples
///
/// ```ignore
/// let mut headers = HeaderMap::new();
/// headers.insert("cf-connecting-ip", "203.0.113.7".parse().unwrap());
///
/// let name = HeaderName::from_static("cf-connecting-ip");
/// assert_eq!(extract_client_ip(&headers, Some(&name), None), "203.0.113.7");
/// ```
pub fn extract_client_ip(
    headers: &HeaderMap,
    proxy_header: Option<&HeaderName>,
    peer: Option<SocketAddr>,
) -> String {
    match proxy_header {
        Some(name) => headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.split(',').next())
            .map(|v| v.trim().to_string())
            .unwrap_or_default(),
        None => peer.map(|addr| addr.ip().to_string()).unwrap_or_default(),
    }
}
