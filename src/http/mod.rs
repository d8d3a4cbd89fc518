//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP/TLS connection
//!     → server.rs (lifecycle manager, axum setup, serve task)
//!     → middleware.rs (logging, then metrics)
//!     → routes.rs (fixed exact-path handlers)
//!     → Send to client
//! ```

pub mod middleware;
pub mod routes;
pub mod server;

pub use server::RestServer;
