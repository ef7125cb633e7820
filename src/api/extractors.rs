//! Request extractors shared by the redirect handlers.

use axum::{
    extract::{ConnectInfo, FromRequestParts},
    http::{header, request::Parts},
};
use std::convert::Infallible;
use std::net::SocketAddr;

use crate::state::AppState;
use crate::utils::client_ip::extract_client_ip;

/// Client signals recorded with a click event.
///
/// - `user_agent`: the `User-Agent` header, or `""` when absent or not UTF-8
/// - `ip`: see [`extract_client_ip`]; the proxy header is only consulted when
///   one is configured in [`crate::state::HttpSettings`]
///
/// Both values are kept verbatim. The extractor never rejects a request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientInfo {
    pub user_agent: String,
    pub ip: String,
}

impl FromRequestParts<AppState> for ClientInfo {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user_agent = parts
            .headers
            .get(header::USER_AGENT)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();

        let peer = ConnectInfo::<SocketAddr>::from_request_parts(parts, state)
            .await
            .ok()
            .map(|ConnectInfo(addr)| addr);

        let ip = extract_client_ip(
            &parts.headers,
            state.settings.client_ip_header.as_ref(),
            peer,
        );

        Ok(Self { user_agent, ip })
    }
}
