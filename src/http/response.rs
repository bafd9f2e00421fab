//! Response finalization.
//!
//! # Responsibilities
//! - Disable caching on every response the proxy emits
//! - Open up CORS so proxied content can be embedded anywhere
//!
//! # Design Decisions
//! - Applied unconditionally, success and error paths alike
//! - Idempotent: prior values for these names are overwritten

use axum::http::header::{
    HeaderMap, HeaderValue, ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS,
    ACCESS_CONTROL_ALLOW_ORIGIN, CACHE_CONTROL,
};

/// Set the cache-disabling and CORS headers on an outgoing response.
pub fn finalize_headers(headers: &mut HeaderMap) {
    headers.insert(CACHE_CONTROL, HeaderValue::from_static("no-store"));
    headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*"));
    headers.insert(
        ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static("GET, POST, PUT, DELETE"),
    );
    headers.insert(ACCESS_CONTROL_ALLOW_HEADERS, HeaderValue::from_static("*"));
}
