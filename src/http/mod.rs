//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware)
//!     → handler.rs (classify path, forward, rewrite)
//!     → response.rs (cache and CORS headers)
//!     → Send to client
//! ```

pub mod handler;
pub mod request;
pub mod response;
pub mod server;

pub use request::{MakeProxyRequestId, X_REQUEST_ID};
pub use server::HttpServer;
