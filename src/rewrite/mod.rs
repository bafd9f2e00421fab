//! Response rewriting subsystem.
//!
//! # Data Flow
//! ```text
//! Upstream response:
//!     3xx → redirect.rs (Location → proxy-relative, percent-encoded)
//!     text/html → html.rs (decode, charset sniff, rewrite links)
//!     anything else → passed through untouched
//! ```
//!
//! # Design Decisions
//! - Rewrite patterns are compiled-once regexes in module-level statics
//! - HTML bodies are buffered fully before rewriting; no streaming

pub mod html;
pub mod redirect;

pub use html::rewrite_html;
pub use redirect::{is_redirect, rewrite_location};
