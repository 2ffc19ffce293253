//! `/api/*` forwarding to the remote backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser client only knows relative `/api/...` paths. The host forwards
//! method, query string, body, and end-to-end headers to the configured
//! upstream and relays the upstream status, headers, and body unchanged.
//!
//! ERROR HANDLING
//! ==============
//! Oversized or unreadable request bodies answer `413`; upstream timeouts
//! answer `504`; any other transport failure answers `502`. Upstream error
//! statuses are relayed as-is, not treated as proxy failures.

#[cfg(test)]
#[path = "proxy_test.rs"]
mod proxy_test;

use axum::body::{Body, to_bytes};
use axum::extract::{Path, State};
use axum::http::{HeaderMap, HeaderName, Method, StatusCode, Uri, header};
use axum::response::{IntoResponse, Response};

use crate::state::AppState;

/// Headers scoped to a single connection, never forwarded in either direction.
const HOP_BY_HOP: [HeaderName; 9] = [
    header::CONNECTION,
    header::HOST,
    header::CONTENT_LENGTH,
    header::PROXY_AUTHENTICATE,
    header::PROXY_AUTHORIZATION,
    header::TE,
    header::TRAILER,
    header::TRANSFER_ENCODING,
    header::UPGRADE,
];

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("request body rejected: {0}")]
    Body(String),

    #[error("upstream request failed: {0}")]
    Upstream(#[from] reqwest::Error),
}

impl ProxyError {
    fn status(&self) -> StatusCode {
        match self {
            Self::Body(_) => StatusCode::PAYLOAD_TOO_LARGE,
            Self::Upstream(e) if e.is_timeout() => StatusCode::GATEWAY_TIMEOUT,
            Self::Upstream(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        tracing::warn!(error = %self, "api proxy failed");
        (self.status(), self.to_string()).into_response()
    }
}

/// Join the upstream base with the captured `path` and raw `query`.
pub fn upstream_url(base: &str, path: &str, query: Option<&str>) -> String {
    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    match query.filter(|q| !q.is_empty()) {
        Some(q) => format!("{base}/{path}?{q}"),
        None => format!("{base}/{path}"),
    }
}

pub fn is_hop_by_hop(name: &HeaderName) -> bool {
    HOP_BY_HOP.contains(name) || name.as_str() == "keep-alive"
}

/// Copy `headers` minus hop-by-hop entries.
pub fn forwardable_headers(headers: &HeaderMap) -> HeaderMap {
    headers
        .iter()
        .filter(|(name, _)| !is_hop_by_hop(name))
        .map(|(name, value)| (name.clone(), value.clone()))
        .collect()
}

/// Handler for `/api/{*path}`.
///
/// # Errors
///
/// Returns a [`ProxyError`] when the body cannot be read or the upstream is
/// unreachable.
pub async fn forward(
    State(state): State<AppState>,
    Path(path): Path<String>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Body,
) -> Result<Response, ProxyError> {
    let url = upstream_url(&state.config.api_upstream, &path, uri.query());
    let bytes = to_bytes(body, state.config.max_body_bytes)
        .await
        .map_err(|e| ProxyError::Body(e.to_string()))?;

    let upstream = state
        .http
        .request(method.clone(), &url)
        .headers(forwardable_headers(&headers))
        .body(bytes)
        .send()
        .await?;

    let status = upstream.status();
    let response_headers = forwardable_headers(upstream.headers());
    let payload = upstream.bytes().await?;
    tracing::debug!(%method, %url, status = status.as_u16(), "proxied api request");

    let mut response = Response::new(Body::from(payload));
    *response.status_mut() = status;
    *response.headers_mut() = response_headers;
    Ok(response)
}
