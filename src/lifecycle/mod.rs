//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Shutdown (shutdown.rs):
//!     Signal received → Stop accepting → Drain connections → Exit
//! ```
//!
//! # Design Decisions
//! - A broadcast channel lets tests and signal handlers trigger the
//!   same graceful-shutdown path

pub mod shutdown;

pub use shutdown::Shutdown;
