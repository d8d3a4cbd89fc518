//! Configuration loading from disk.

use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

/// Error type for configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    MissingSection(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
            ConfigError::MissingSection(name) => write!(f, "Missing section: [{}]", name),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Load a named section from a TOML file and deserialize it.
///
/// Failure here is non-fatal to the caller: the server falls back to
/// built-in defaults and logs a warning.
pub fn load_section<T: DeserializeOwned>(path: &Path, section: &str) -> Result<T, ConfigError> {
    let content = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let document: toml::Value = toml::from_str(&content).map_err(ConfigError::Parse)?;

    let value = document
        .get(section)
        .cloned()
        .ok_or_else(|| ConfigError::MissingSection(section.to_string()))?;

    value.try_into().map_err(ConfigError::Parse)
}
