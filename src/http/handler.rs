//! Main proxy handler.
//!
//! Orchestrates the request pipeline:
//! classify the path, forward to the target, rewrite the response,
//! finalize headers. Every failure at any step collapses into a single
//! 500 JSON error envelope; there are no retries and no partial
//! responses.

use std::time::Instant;

use axum::{
    body::Body,
    extract::State,
    http::{
        header::{self, HeaderMap, HeaderValue},
        request::Parts,
        Request, StatusCode,
    },
    response::{Html, IntoResponse, Response},
};

use crate::error::ProxyError;
use crate::http::response::finalize_headers;
use crate::http::server::AppState;
use crate::observability::metrics;
use crate::rewrite;
use crate::routing::{self, RequestRoute, TargetUrl};
use crate::security;

/// The bundled landing page, served only at the root path.
const LANDING_PAGE: &str = include_str!("landing.html");

/// Handle one inbound request end to end.
pub async fn proxy_handler(State(state): State<AppState>, request: Request<Body>) -> Response {
    let start_time = Instant::now();
    let (parts, body) = request.into_parts();

    let method = parts.method.to_string();
    let path = parts.uri.path().to_string();
    let scheme = inbound_scheme(&parts.headers);
    let proxy_base = format!("{scheme}://{}", inbound_host(&parts));

    let route = routing::classify(&path, parts.uri.query(), scheme);
    let route_label = match &route {
        RequestRoute::Landing => "landing",
        RequestRoute::Search { .. } => "search",
        RequestRoute::Proxy(_) => "proxy",
    };

    tracing::debug!(
        method = %method,
        path = %path,
        route = route_label,
        "Handling request"
    );

    let result = match route {
        RequestRoute::Landing => Ok(Html(LANDING_PAGE).into_response()),
        RequestRoute::Search { tail } => search_redirect(&proxy_base, &tail),
        RequestRoute::Proxy(target) => {
            proxy_request(&state, parts, body, target, &proxy_base).await
        }
    };

    let mut response = match result {
        Ok(response) => response,
        Err(error) => error.into_response(),
    };

    finalize_headers(response.headers_mut());
    metrics::record_request(&method, response.status().as_u16(), route_label, start_time);

    response
}

/// Redirect a non-target path to a web search for its raw tail, routed
/// back through the proxy.
fn search_redirect(proxy_base: &str, tail: &str) -> Result<Response, ProxyError> {
    let location = format!("{proxy_base}/{}{}", routing::target::SEARCH_BASE, tail);
    let location = HeaderValue::try_from(location)
        .map_err(|e| ProxyError::Internal(format!("search location: {e}")))?;

    let mut response = StatusCode::FOUND.into_response();
    response.headers_mut().insert(header::LOCATION, location);
    Ok(response)
}

/// Forward to the target and rewrite the response for the client.
async fn proxy_request(
    state: &AppState,
    parts: Parts,
    body: Body,
    target: TargetUrl,
    proxy_base: &str,
) -> Result<Response, ProxyError> {
    // 1. Derive outbound headers and buffer the inbound body.
    let outbound_headers = security::filter_headers(&parts.headers, security::is_forwardable);
    let body = axum::body::to_bytes(body, usize::MAX)
        .await
        .map_err(|e| ProxyError::Internal(format!("request body: {e}")))?;

    // 2. Forward with redirect following disabled.
    let upstream = state
        .forwarder
        .send(parts.method, &target, outbound_headers, body)
        .await?;

    let status = upstream.status();
    let mut headers = upstream.headers().clone();
    security::strip_hop_by_hop(&mut headers);

    // 3. Redirects: rewrite Location back into proxy-relative form.
    if rewrite::is_redirect(status) {
        let location = headers
            .get(header::LOCATION)
            .and_then(|value| value.to_str().ok());
        let rewritten = rewrite::rewrite_location(location)?;
        let rewritten = HeaderValue::try_from(rewritten)
            .map_err(|e| ProxyError::Internal(format!("rewritten location: {e}")))?;
        headers.insert(header::LOCATION, rewritten);

        let body = upstream.bytes().await?;
        return Ok(assemble(status, headers, Body::from(body)));
    }

    // 4. HTML: buffer fully, decode and rewrite embedded links.
    if is_html(&headers) {
        let raw = upstream.bytes().await?;
        let rewritten = rewrite::rewrite_html(&raw, proxy_base, target.origin());

        // The body length changed; let the server recompute framing.
        headers.remove(header::CONTENT_LENGTH);
        return Ok(assemble(status, headers, Body::from(rewritten)));
    }

    // 5. Everything else streams through untouched.
    let stream = upstream.bytes_stream();
    Ok(assemble(status, headers, Body::from_stream(stream)))
}

fn is_html(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.contains("text/html"))
        .unwrap_or(false)
}

fn assemble(status: StatusCode, headers: HeaderMap, body: Body) -> Response {
    let mut response = Response::new(body);
    *response.status_mut() = status;
    *response.headers_mut() = headers;
    response
}

/// Scheme the client reached the proxy on. Trusts the edge's
/// `x-forwarded-proto` when present; plain listeners are `http`.
fn inbound_scheme(headers: &HeaderMap) -> &str {
    headers
        .get("x-forwarded-proto")
        .and_then(|value| value.to_str().ok())
        .unwrap_or("http")
}

/// Host the client addressed, from the Host header or the authority.
fn inbound_host(parts: &Parts) -> &str {
    parts
        .headers
        .get(header::HOST)
        .and_then(|value| value.to_str().ok())
        .or_else(|| parts.uri.authority().map(|authority| authority.as_str()))
        .unwrap_or("localhost")
}
