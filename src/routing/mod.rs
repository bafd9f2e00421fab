//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming Request (path, query, inbound scheme)
//!     → target.rs (classify path)
//!     → Return: Landing | Search | Proxy(TargetUrl)
//! ```
//!
//! # Design Decisions
//! - The path pattern is a compiled-once regex held in a module-level
//!   static; no mutable global state
//! - Classification is a pure function of the request line
//! - Deterministic: same input always yields the same route

pub mod target;

pub use target::{classify, RequestRoute, TargetUrl};
