//! TLS material loading.

use axum_server::tls_rustls::RustlsConfig;
use std::path::Path;

use crate::config::schema::RestConfig;

/// Error type for TLS setup.
#[derive(Debug)]
pub enum TlsError {
    /// `enable_tls` is set but a path is missing from the config.
    MissingPath(&'static str),
    /// Certificate or key file does not exist or is not readable.
    Unreadable(std::path::PathBuf, std::io::Error),
    /// PEM material failed to parse.
    Pem(std::io::Error),
}

impl std::fmt::Display for TlsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TlsError::MissingPath(key) => write!(f, "TLS enabled but {} is not set", key),
            TlsError::Unreadable(path, e) => write!(f, "Cannot read {:?}: {}", path, e),
            TlsError::Pem(e) => write!(f, "Failed to load PEM material: {}", e),
        }
    }
}

impl std::error::Error for TlsError {}

/// Load rustls material from the certificate and key paths in the config.
///
/// The caller treats failure as non-fatal: the server logs an error and
/// serves plaintext instead.
pub async fn load_tls_material(config: &RestConfig) -> Result<RustlsConfig, TlsError> {
    let cert_path = config
        .cert_file_path
        .as_deref()
        .ok_or(TlsError::MissingPath("cert_file_path"))?;
    let key_path = config
        .key_file_path
        .as_deref()
        .ok_or(TlsError::MissingPath("key_file_path"))?;

    check_readable(Path::new(cert_path))?;
    check_readable(Path::new(key_path))?;

    RustlsConfig::from_pem_file(cert_path, key_path)
        .await
        .map_err(TlsError::Pem)
}

fn check_readable(path: &Path) -> Result<(), TlsError> {
    std::fs::metadata(path)
        .map(|_| ())
        .map_err(|e| TlsError::Unreadable(path.to_path_buf(), e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_paths() {
        let config = RestConfig {
            enable_tls: true,
            ..RestConfig::default()
        };
        let result = load_tls_material(&config).await;
        assert!(matches!(result, Err(TlsError::MissingPath("cert_file_path"))));
    }

    #[tokio::test]
    async fn test_unreadable_files() {
        let config = RestConfig {
            enable_tls: true,
            cert_file_path: Some("/nonexistent/server.crt".into()),
            key_file_path: Some("/nonexistent/server.key".into()),
            ..RestConfig::default()
        };
        let result = load_tls_material(&config).await;
        assert!(matches!(result, Err(TlsError::Unreadable(_, _))));
    }
}
