//! Location rewriting for redirect responses.
//!
//! # Responsibilities
//! - Recognize the redirect status set {301, 302, 303, 307, 308}
//! - Re-encode the upstream `Location` as a proxy-relative path
//!
//! # Design Decisions
//! - Status and body pass through verbatim; only `Location` changes
//! - A missing, empty or relative `Location` is an error; it propagates
//!   as a 500 from the handler

use axum::http::StatusCode;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use url::Url;

use crate::error::ProxyError;

/// Characters left intact by the percent-encoding applied to rewritten
/// locations. Mirrors JavaScript's `encodeURIComponent`, so clients that
/// decode the path component recover the original URL exactly.
const URL_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Redirect statuses whose `Location` is rewritten. 304 is a
/// redirection-class status but carries no `Location`.
pub fn is_redirect(status: StatusCode) -> bool {
    matches!(status.as_u16(), 301 | 302 | 303 | 307 | 308)
}

/// Rewrite an upstream `Location` value into proxy-relative form:
/// `/` followed by the percent-encoded absolute URL.
pub fn rewrite_location(location: Option<&str>) -> Result<String, ProxyError> {
    let raw = location
        .filter(|value| !value.is_empty())
        .ok_or_else(|| ProxyError::InvalidLocation("missing Location header".to_string()))?;

    let url = Url::parse(raw)
        .map_err(|e| ProxyError::InvalidLocation(format!("{raw}: {e}")))?;

    Ok(format!("/{}", utf8_percent_encode(url.as_str(), URL_COMPONENT)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use percent_encoding::percent_decode_str;

    #[test]
    fn test_redirect_status_set() {
        for code in [301, 302, 303, 307, 308] {
            assert!(is_redirect(StatusCode::from_u16(code).unwrap()));
        }
        for code in [200, 300, 304, 404, 500] {
            assert!(!is_redirect(StatusCode::from_u16(code).unwrap()));
        }
    }

    #[test]
    fn test_location_round_trips_through_percent_encoding() {
        let rewritten = rewrite_location(Some("https://example.com/bar")).unwrap();
        assert_eq!(rewritten, "/https%3A%2F%2Fexample.com%2Fbar");

        let decoded = percent_decode_str(rewritten.strip_prefix('/').unwrap())
            .decode_utf8()
            .unwrap();
        assert_eq!(decoded, "https://example.com/bar");
    }

    #[test]
    fn test_query_survives_round_trip() {
        let original = "https://example.com/search?q=a+b&lang=en";
        let rewritten = rewrite_location(Some(original)).unwrap();

        let decoded = percent_decode_str(rewritten.strip_prefix('/').unwrap())
            .decode_utf8()
            .unwrap();
        assert_eq!(decoded, original);
    }

    #[test]
    fn test_missing_location_is_an_error() {
        assert!(matches!(
            rewrite_location(None),
            Err(ProxyError::InvalidLocation(_))
        ));
        assert!(matches!(
            rewrite_location(Some("")),
            Err(ProxyError::InvalidLocation(_))
        ));
    }

    #[test]
    fn test_relative_location_is_an_error() {
        assert!(matches!(
            rewrite_location(Some("/relative/path")),
            Err(ProxyError::InvalidLocation(_))
        ));
    }
}
