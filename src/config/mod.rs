//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional)
//!     → loader.rs (parse & deserialize)
//!     → ProxyConfig (validated, immutable)
//!     → consumed once at startup
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; changes require restart
//! - All fields have defaults so the proxy runs with no config file
//! - The request pipeline itself takes no configuration; only the
//!   listener, timeouts and observability are tunable

pub mod loader;
pub mod schema;

pub use schema::ProxyConfig;
