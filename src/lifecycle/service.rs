//! Service contract consumed by an external supervisor.

use async_trait::async_trait;
use thiserror::Error;

/// Errors surfaced through the lifecycle contract.
///
/// Config and TLS problems are recovered inside `initialize` (defaults and
/// plaintext fallback respectively) and never reach the supervisor.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The listener could not be bound; fatal for the owning process to decide.
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        source: std::io::Error,
    },

    /// `start` was called before `initialize`.
    #[error("service not initialized")]
    NotInitialized,

    /// The serve task failed to join cleanly during shutdown.
    #[error("shutdown failed: {0}")]
    Shutdown(String),
}

/// Uniform lifecycle contract for services managed by a supervisor.
///
/// The supervisor registers services by `name` and drives them through
/// `initialize`, `start`, and `stop`. `start` returns as soon as the service
/// is serving in the background; `stop` drains within a bounded deadline.
#[async_trait]
pub trait Service: Send {
    /// Static identifier used for supervisor registration.
    fn name(&self) -> &str;

    /// Prepare the service: load configuration and build internal state.
    async fn initialize(&mut self) -> Result<(), ServiceError>;

    /// Begin serving in the background. Must not block the caller.
    async fn start(&mut self) -> Result<(), ServiceError>;

    /// Gracefully shut down. Idempotent; a no-op when not running.
    async fn stop(&mut self) -> Result<(), ServiceError>;
}
