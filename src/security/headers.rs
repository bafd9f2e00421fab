//! Header manipulation.
//!
//! # Responsibilities
//! - Strip edge-network (`cf-`) headers from the outbound request
//! - Strip hop-by-hop headers when re-emitting an upstream response
//!
//! # Design Decisions
//! - Filtering takes a predicate so the policy stays separate from the
//!   mechanism
//! - Header names are already lowercase in the typed header map, so the
//!   prefix check is case-insensitive by construction

use axum::http::header::HeaderMap;

/// Header names added by the hosting edge network. These must not be
/// forwarded to the origin target.
pub const EDGE_HEADER_PREFIX: &str = "cf-";

/// Hop-by-hop headers that describe the client↔proxy connection and must
/// not be copied onto the proxy↔client response.
const HOP_BY_HOP: [&str; 8] = [
    "connection",
    "keep-alive",
    "proxy-authenticate",
    "proxy-authorization",
    "te",
    "trailer",
    "transfer-encoding",
    "upgrade",
];

/// Return a new header map containing only entries for which the
/// predicate holds. Pure function, no side effects.
pub fn filter_headers<F>(headers: &HeaderMap, predicate: F) -> HeaderMap
where
    F: Fn(&str) -> bool,
{
    let mut filtered = HeaderMap::new();
    for (name, value) in headers {
        if predicate(name.as_str()) {
            filtered.append(name.clone(), value.clone());
        }
    }
    filtered
}

/// The concrete forwarding policy: everything except edge-reserved
/// headers passes through.
pub fn is_forwardable(name: &str) -> bool {
    !name.starts_with(EDGE_HEADER_PREFIX)
}

/// Remove hop-by-hop headers in place.
pub fn strip_hop_by_hop(headers: &mut HeaderMap) {
    for name in HOP_BY_HOP {
        headers.remove(name);
    }
}
