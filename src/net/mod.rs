//! Network layer subsystem.
//!
//! # Data Flow
//! ```text
//! start():
//!     bind TCP listener (synchronous, surfaces bind errors)
//!     → tls.rs (optional certificate/key loading)
//!     → hand off to the HTTP serve task
//! ```
//!
//! # Design Decisions
//! - The listener is owned exclusively by the server lifecycle manager
//! - TLS is optional; missing material falls back to plaintext with a log

pub mod tls;
