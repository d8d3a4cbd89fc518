//! Configuration schema for the REST server.
//!
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// REST server configuration, loaded from the `[Rest]` section.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RestConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub address: String,

    /// Read timeout in seconds.
    pub read_timeout: u64,

    /// Write timeout in seconds.
    pub write_timeout: u64,

    /// Idle connection timeout in seconds.
    pub idle_timeout: u64,

    /// Serve with TLS when certificate material is available.
    pub enable_tls: bool,

    /// Path to the certificate file (PEM).
    pub cert_file_path: Option<String>,

    /// Path to the private key file (PEM).
    pub key_file_path: Option<String>,
}

impl Default for RestConfig {
    fn default() -> Self {
        Self {
            address: "0.0.0.0:8080".to_string(),
            read_timeout: 5,
            write_timeout: 5,
            idle_timeout: 60,
            enable_tls: false,
            cert_file_path: None,
            key_file_path: None,
        }
    }
}

impl RestConfig {
    pub fn read_timeout(&self) -> Duration {
        Duration::from_secs(self.read_timeout)
    }

    pub fn write_timeout(&self) -> Duration {
        Duration::from_secs(self.write_timeout)
    }

    pub fn idle_timeout(&self) -> Duration {
        Duration::from_secs(self.idle_timeout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RestConfig::default();
        assert_eq!(config.address, "0.0.0.0:8080");
        assert_eq!(config.read_timeout(), Duration::from_secs(5));
        assert_eq!(config.write_timeout(), Duration::from_secs(5));
        assert_eq!(config.idle_timeout(), Duration::from_secs(60));
        assert!(!config.enable_tls);
        assert!(config.cert_file_path.is_none());
        assert!(config.key_file_path.is_none());
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: RestConfig = toml::from_str(
            r#"
            address = "127.0.0.1:9000"
            read_timeout = 10
            "#,
        )
        .unwrap();

        assert_eq!(config.address, "127.0.0.1:9000");
        assert_eq!(config.read_timeout, 10);
        assert_eq!(config.write_timeout, 5);
        assert_eq!(config.idle_timeout, 60);
        assert!(!config.enable_tls);
    }

    #[test]
    fn test_tls_fields() {
        let config: RestConfig = toml::from_str(
            r#"
            enable_tls = true
            cert_file_path = "/etc/certs/server.crt"
            key_file_path = "/etc/certs/server.key"
            "#,
        )
        .unwrap();

        assert!(config.enable_tls);
        assert_eq!(config.cert_file_path.as_deref(), Some("/etc/certs/server.crt"));
        assert_eq!(config.key_file_path.as_deref(), Some("/etc/certs/server.key"));
    }
}
