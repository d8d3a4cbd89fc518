//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Supervisor:
//!     initialize() → load config, build router, prepare TLS
//!     start()      → bind listener, spawn serve task, return immediately
//!     stop()       → stop accepting, drain within deadline, join task
//!
//! State machine:
//!     Unconfigured → Initialized → Running → Stopped
//! ```
//!
//! # Design Decisions
//! - A single polymorphic `Service` trait is the only management surface
//! - start never blocks the caller; serving runs as a detached task
//! - stop is idempotent and safe to call in any state

pub mod service;

pub use service::{Service, ServiceError};
