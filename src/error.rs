//! Error taxonomy for the proxy pipeline.
//!
//! Every pipeline stage returns `Result<_, ProxyError>`; the handler is
//! the single place a tag becomes an HTTP response. All failures are
//! terminal for the request, never retried, and surface to the caller as
//! a 500 with a JSON error envelope.

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProxyError {
    /// Outbound fetch failed: DNS, connect, TLS or transport-level.
    #[error("upstream request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// Redirect response carried a missing or unparseable `Location`.
    #[error("invalid redirect location: {0}")]
    InvalidLocation(String),

    /// Any other pipeline failure (body read, malformed header value).
    #[error("{0}")]
    Internal(String),
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let message = self.to_string();
        tracing::error!(error = %message, "Request failed");

        let body = json!({ "error": message }).to_string();
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            [(header::CONTENT_TYPE, "application/json; charset=utf-8")],
            body,
        )
            .into_response()
    }
}
