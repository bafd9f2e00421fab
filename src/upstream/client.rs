//! Outbound HTTP client.
//!
//! # Responsibilities
//! - Dispatch the outbound request to the target URL
//! - Keep redirect following disabled so raw 3xx responses are observed
//! - Surface transport failures as `ProxyError::Network`
//!
//! # Design Decisions
//! - Only the filtered header set is attached; the unfiltered inbound
//!   set is never supplied to the transport
//! - The client owns content negotiation: the inbound `Accept-Encoding`
//!   is dropped and responses arrive already decompressed
//! - No explicit timeout; the transport's defaults apply and overruns
//!   surface through the normal network-error path

use axum::http::{HeaderMap, Method};
use bytes::Bytes;

use crate::error::ProxyError;
use crate::routing::TargetUrl;
use crate::security;

/// Forwarder for outbound requests.
///
/// Cheap to clone; the inner client shares its connection pool.
#[derive(Clone)]
pub struct Forwarder {
    client: reqwest::Client,
}

impl Forwarder {
    /// Create a forwarder with redirect following disabled.
    pub fn new() -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .build()?;
        Ok(Self { client })
    }

    /// Issue the outbound request and return the raw upstream response.
    pub async fn send(
        &self,
        method: Method,
        target: &TargetUrl,
        mut headers: HeaderMap,
        body: Bytes,
    ) -> Result<reqwest::Response, ProxyError> {
        // Connection-level headers belong to the inbound exchange, and
        // the transport derives Host and Accept-Encoding itself.
        security::strip_hop_by_hop(&mut headers);
        headers.remove("accept-encoding");
        headers.remove("host");

        tracing::debug!(url = %target, method = %method, "Forwarding request");

        let response = self
            .client
            .request(method, target.as_str())
            .headers(headers)
            .body(body)
            .send()
            .await?;

        tracing::debug!(url = %target, status = %response.status(), "Upstream responded");

        Ok(response)
    }
}
