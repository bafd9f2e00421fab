//! HTML body rewriting.
//!
//! # Responsibilities
//! - Decode the buffered body, sniffing the `charset=gb2312` marker
//! - Point absolute `href`/`src` links back through the proxy
//! - Point root-relative `href`/`src`/`action` links at the proxied
//!   target origin
//!
//! # Design Decisions
//! - Charset sniffing is marker-based on the decoded text, not
//!   header-based; gb2312 is the only alternate codec
//! - Absolute links get a prefix insertion, not a re-encoding of the
//!   embedded URL
//! - Root-relative rewriting keeps the original leading slash, so the
//!   output contains `{origin}//` (observed behavior, kept verbatim)
//! - Inline CSS `url()`, script string literals and `<base>` tags are
//!   not touched

use std::sync::LazyLock;

use regex::Regex;

const GB2312_MARKER: &str = "charset=gb2312";

/// `href="http://...` and `src="https://...`.
static ABSOLUTE_LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(href|src)="(https?://)"#).unwrap());

/// `href="/...`, `src="/...` and `action="/...` where the path is
/// root-relative; the `[^/]` excludes protocol-relative `//host` forms.
static ROOT_RELATIVE_LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(href|src|action)="/([^/])"#).unwrap());

/// Decode a buffered HTML body and rewrite its links.
///
/// `proxy_base` is the scheme and host the proxy is reached on;
/// `target_origin` is the scheme and host of the target being rendered.
pub fn rewrite_html(raw: &[u8], proxy_base: &str, target_origin: &str) -> String {
    let text = decode_body(raw);
    rewrite_links(&text, proxy_base, target_origin)
}

/// Decode as UTF-8 with replacement characters, dropping a leading BOM.
/// If the decoded text carries the gb2312 marker, re-decode the same raw
/// bytes with that codec and rewrite the marker to utf-8.
fn decode_body(raw: &[u8]) -> String {
    let (text, _, _) = encoding_rs::UTF_8.decode(raw);

    if text.contains(GB2312_MARKER) {
        if let Some(encoding) = encoding_rs::Encoding::for_label(b"gb2312") {
            let (decoded, _, _) = encoding.decode(raw);
            return decoded.replace(GB2312_MARKER, "charset=utf-8");
        }
    }

    text.into_owned()
}

fn rewrite_links(html: &str, proxy_base: &str, target_origin: &str) -> String {
    // Absolute links first: the inserted proxy prefix starts with a
    // scheme, so the root-relative pass cannot match it again.
    let absolute = ABSOLUTE_LINK.replace_all(html, format!(r#"${{1}}="{proxy_base}/${{2}}"#));

    ROOT_RELATIVE_LINK
        .replace_all(
            &absolute,
            format!(r#"${{1}}="{proxy_base}/{target_origin}//${{2}}"#),
        )
        .into_owned()
}
