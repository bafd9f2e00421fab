//! Target URL extraction from the request path.
//!
//! # Responsibilities
//! - Recognize the root path (landing page) and non-target paths
//!   (search redirect)
//! - Decode a raw or percent-encoded target URL embedded in the path
//! - Default the scheme from the inbound request when absent
//!
//! # Design Decisions
//! - Matching is done on the raw path; decoding happens after the match
//! - No validation beyond the scheme gate: malformed targets surface as
//!   fetch failures later

use std::sync::LazyLock;

use percent_encoding::percent_decode_str;
use regex::Regex;

/// Search engine the proxy redirects to for paths that are not target
/// URLs. The search URL itself is addressed through the proxy.
pub const SEARCH_BASE: &str = "https://www.bing.com/search?q=";

/// Matches paths carrying a target URL, raw or percent-encoded.
static TARGET_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^/https?(://|%3A%2F%2F)").unwrap());

/// A validated absolute target URL derived from the request path.
///
/// Always carries an `http://` or `https://` scheme and is used verbatim
/// for forwarding, with the original query string already appended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetUrl(String);

impl TargetUrl {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Scheme and host of the target, without a trailing slash.
    ///
    /// Used by the HTML rewriter to resolve root-relative links. Falls
    /// back to the full target string if it has no path separator.
    pub fn origin(&self) -> &str {
        let rest = match self.0.find("://") {
            Some(idx) => idx + 3,
            None => 0,
        };
        match self.0[rest..].find('/') {
            Some(idx) => &self.0[..rest + idx],
            None => &self.0,
        }
    }
}

impl std::fmt::Display for TargetUrl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Where a request path routes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestRoute {
    /// Root path: serve the bundled landing page.
    Landing,
    /// Path is not a target URL: redirect to a web search for the raw
    /// path tail.
    Search { tail: String },
    /// Path embeds a target URL: proxy to it.
    Proxy(TargetUrl),
}

/// Classify a request path.
///
/// `fallback_scheme` is the scheme of the inbound request ("http" or
/// "https"), used when the decoded target lacks one. `query` is the raw
/// query string without the leading `?`.
pub fn classify(path: &str, query: Option<&str>, fallback_scheme: &str) -> RequestRoute {
    if path == "/" {
        return RequestRoute::Landing;
    }
    if !TARGET_PATTERN.is_match(path) {
        let tail = path.strip_prefix('/').unwrap_or(path).to_string();
        return RequestRoute::Search { tail };
    }
    RequestRoute::Proxy(extract_target(path, query, fallback_scheme))
}

/// Decode the target URL embedded in `path`.
///
/// Strips the leading slash, percent-decodes the remainder, prepends
/// `{fallback_scheme}://` if the result has no scheme, and appends the
/// original query string unmodified.
pub fn extract_target(path: &str, query: Option<&str>, fallback_scheme: &str) -> TargetUrl {
    let raw = path.strip_prefix('/').unwrap_or(path);
    let mut url = percent_decode_str(raw).decode_utf8_lossy().into_owned();

    if !url.starts_with("http://") && !url.starts_with("https://") {
        url = format!("{fallback_scheme}://{url}");
    }
    if let Some(q) = query {
        url.push('?');
        url.push_str(q);
    }

    TargetUrl(url)
}
