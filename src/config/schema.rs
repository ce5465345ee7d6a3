//! Configuration schema definitions.
//!
//! All fields have defaults so that an empty or absent config file yields a
//! working configuration. Types derive Serde traits for deserialization
//! from the config file.

use std::path::PathBuf;

use serde::Deserialize;

/// Resolved gateway configuration.
///
/// Constructed once by [`crate::config::resolve`] and shared read-only with
/// every later startup stage.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GatewayConfig {
    /// Address of the shop backend service.
    pub shop_address: String,

    /// Address of the auth backend service.
    pub auth_address: String,

    /// Address the gateway listens on.
    pub bind_address: String,

    /// Optional log file path; unset or empty means no file sink.
    pub log_file: Option<String>,

    /// Where the configuration came from. Filled in by the loader.
    #[serde(skip)]
    pub source: ConfigSource,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            shop_address: ":7780".to_string(),
            auth_address: ":7781".to_string(),
            bind_address: ":7782".to_string(),
            log_file: None,
            source: ConfigSource::default(),
        }
    }
}

impl GatewayConfig {
    /// Log file path, treating an empty string the same as unset.
    pub fn log_file(&self) -> Option<&str> {
        self.log_file.as_deref().filter(|p| !p.is_empty())
    }
}

/// Provenance of the resolved configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ConfigSource {
    /// Loaded from a config file at this path (then env-overridden).
    File(PathBuf),
    /// No config file found; environment overrides and defaults only.
    #[default]
    EnvAndDefaults,
}

/// Expand an address that omits its host part (`:7780`) to a concrete
/// `host:port`. Addresses that already carry a host pass through unchanged.
pub fn expand_host(address: &str, host: &str) -> String {
    if address.starts_with(':') {
        format!("{host}{address}")
    } else {
        address.to_string()
    }
}
