//! Minimal REST service shell.
//!
//! Composes an HTTP server with two fixed endpoints, a logging/metrics
//! middleware chain, and a lifecycle contract consumed by an external
//! service supervisor.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod net;
pub mod observability;

pub use config::schema::RestConfig;
pub use http::RestServer;
pub use lifecycle::{Service, ServiceError};
