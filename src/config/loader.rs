//! Configuration resolution from layered sources.

use std::fs;
use std::io;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::{ConfigSource, GatewayConfig};

/// Config file name looked up in the working directory.
pub const CONFIG_FILE: &str = "gw.toml";

const ENV_SHOP_ADDRESS: &str = "GW_SHOP_ADDRESS";
const ENV_AUTH_ADDRESS: &str = "GW_AUTH_ADDRESS";
const ENV_BIND_ADDRESS: &str = "GW_BIND_ADDRESS";
const ENV_LOG_FILE: &str = "GW_LOG_FILE";

/// Error type for configuration resolution.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {CONFIG_FILE}: {0}")]
    Io(#[source] io::Error),

    #[error("failed to parse {CONFIG_FILE}: {0}")]
    Parse(#[source] toml::de::Error),

    #[error("resolved {0} is empty")]
    EmptyAddress(&'static str),
}

/// Resolve the effective configuration from the process environment and an
/// optional `gw.toml` in the working directory.
pub fn resolve() -> Result<GatewayConfig, ConfigError> {
    resolve_from(Path::new("."), |name| std::env::var(name).ok())
}

/// Resolution against an explicit directory and environment lookup.
///
/// Precedence per field, highest first: environment override, config file
/// value, built-in default. A missing config file is a supported mode; any
/// other read or parse failure aborts resolution.
pub fn resolve_from(
    dir: &Path,
    env: impl Fn(&str) -> Option<String>,
) -> Result<GatewayConfig, ConfigError> {
    let path = dir.join(CONFIG_FILE);
    let mut config = match fs::read_to_string(&path) {
        Ok(content) => {
            let mut config: GatewayConfig =
                toml::from_str(&content).map_err(ConfigError::Parse)?;
            config.source = ConfigSource::File(path);
            config
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            tracing::warn!(file = CONFIG_FILE, "config file not found");
            GatewayConfig::default()
        }
        Err(e) => return Err(ConfigError::Io(e)),
    };

    if let Some(value) = env(ENV_SHOP_ADDRESS) {
        config.shop_address = value;
    }
    if let Some(value) = env(ENV_AUTH_ADDRESS) {
        config.auth_address = value;
    }
    if let Some(value) = env(ENV_BIND_ADDRESS) {
        config.bind_address = value;
    }
    if let Some(value) = env(ENV_LOG_FILE) {
        config.log_file = Some(value);
    }

    // Cannot happen with the built-in defaults, but an explicit empty
    // override must not survive resolution.
    for (name, value) in [
        ("shop_address", &config.shop_address),
        ("auth_address", &config.auth_address),
        ("bind_address", &config.bind_address),
    ] {
        if value.is_empty() {
            return Err(ConfigError::EmptyAddress(name));
        }
    }

    Ok(config)
}
