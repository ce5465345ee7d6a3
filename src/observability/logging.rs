//! Process-wide logging initialization.
//!
//! # Responsibilities
//! - Install the global tracing subscriber exactly once
//! - Always write to stderr with timestamp and call-site
//! - When a log file is configured, open it in append mode and add it as a
//!   second sink, so every line reaches both stderr and the file
//!
//! # Design Decisions
//! - A log file that cannot be opened is fatal: nothing later in startup
//!   can be trusted to report failures until sinks are established
//! - Subscriber construction is separate from installation so tests can
//!   scope a subscriber without touching global state

use std::fs::{File, OpenOptions};
use std::io;
use std::sync::Arc;

use thiserror::Error;
use tracing::Subscriber;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::EnvFilter;

use crate::config::GatewayConfig;

/// Error type for logging setup.
#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("failed to open log file {path}: {source}")]
    OpenLogFile {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("failed to install global subscriber: {0}")]
    Install(#[from] tracing::subscriber::SetGlobalDefaultError),
}

/// Install the global subscriber for the lifetime of the process.
///
/// Fatal if the configured log file cannot be opened for append.
pub fn init(config: &GatewayConfig) -> Result<(), LoggingError> {
    let subscriber = subscriber_for(config)?;
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

/// Build the subscriber described by the configuration without installing
/// it. Used by [`init`] and scoped in tests via `with_default`.
pub fn subscriber_for(
    config: &GatewayConfig,
) -> Result<Box<dyn Subscriber + Send + Sync>, LoggingError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into());

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(io::stderr)
        .with_target(false)
        .with_file(true)
        .with_line_number(true);

    let registry = tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer);

    match config.log_file() {
        Some(path) => {
            let file = open_log_file(path)?;
            let file_layer = tracing_subscriber::fmt::layer()
                .with_writer(Arc::new(file))
                .with_ansi(false)
                .with_target(false)
                .with_file(true)
                .with_line_number(true);
            Ok(Box::new(registry.with(file_layer)))
        }
        None => Ok(Box::new(registry)),
    }
}

fn open_log_file(path: &str) -> Result<File, LoggingError> {
    OpenOptions::new()
        .append(true)
        .create(true)
        .open(path)
        .map_err(|source| LoggingError::OpenLogFile {
            path: path.to_string(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_sink_receives_log_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gw.log");
        let config = GatewayConfig {
            log_file: Some(path.to_string_lossy().into_owned()),
            ..GatewayConfig::default()
        };

        let subscriber = subscriber_for(&config).unwrap();
        tracing::subscriber::with_default(subscriber, || {
            tracing::info!("file sink marker");
        });

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("file sink marker"));
    }

    #[test]
    fn file_sink_appends_across_setups() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gw.log");
        std::fs::write(&path, "earlier line\n").unwrap();
        let config = GatewayConfig {
            log_file: Some(path.to_string_lossy().into_owned()),
            ..GatewayConfig::default()
        };

        let subscriber = subscriber_for(&config).unwrap();
        tracing::subscriber::with_default(subscriber, || {
            tracing::info!("appended marker");
        });

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("earlier line\n"));
        assert!(written.contains("appended marker"));
    }

    #[test]
    fn unopenable_log_file_is_fatal() {
        let config = GatewayConfig {
            log_file: Some("/nonexistent-dir/gw.log".to_string()),
            ..GatewayConfig::default()
        };
        let err = subscriber_for(&config).err().unwrap();
        assert!(matches!(err, LoggingError::OpenLogFile { .. }));
    }

    #[test]
    fn no_log_file_builds_stderr_only() {
        let config = GatewayConfig::default();
        assert!(subscriber_for(&config).is_ok());
    }
}
