//! Configuration subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (read file, extract named section, deserialize)
//!     → RestConfig (validated by serde, immutable)
//!     → owned by the server instance for its whole lifetime
//!
//! On load failure:
//!     loader returns an error
//!     → server logs a warning and keeps its defaults
//! ```
//!
//! # Design Decisions
//! - Config is loaded once at initialize time; no hot reload
//! - All fields have defaults so an empty or missing file still works
//! - The config value is owned by the server, not process-global state

pub mod loader;
pub mod schema;

pub use schema::RestConfig;
