//! Security subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming request:
//!     → headers.rs (strip edge-network headers before forwarding)
//!
//! Upstream response:
//!     → headers.rs (strip hop-by-hop headers before re-emitting)
//! ```
//!
//! # Design Decisions
//! - Header filtering is a pure function over an explicit header map
//! - Edge-reserved headers never reach the origin target

pub mod headers;

pub use headers::{filter_headers, is_forwardable, strip_hop_by_hop, EDGE_HEADER_PREFIX};
