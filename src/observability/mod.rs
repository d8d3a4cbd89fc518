//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Request passes through middleware:
//!     → structured log events (tracing, stdout)
//!     → duration histogram (metrics crate, Prometheus recorder)
//!
//! Label values pass through scrub.rs before reaching the recorder.
//! ```
//!
//! # Design Decisions
//! - The Prometheus recorder is process-global and installed exactly once;
//!   this crate only writes observations, it never resets the registry
//! - Metric labels are scrubbed to bound cardinality and avoid leaking
//!   path parameters into the metrics registry

pub mod metrics;
pub mod scrub;
