//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! built-in defaults
//!     → gw.toml in the working directory (if present)
//!     → GW_* environment overrides
//!     → GatewayConfig (merged, guarded, immutable)
//!     → shared read-only by logging and registry
//! ```
//!
//! # Design Decisions
//! - Precedence is env > file > default, per field
//! - A missing config file is a supported mode (warning, not error)
//! - Any other read/parse failure is fatal: a gateway running on a config
//!   it could not fully read is worse than one that refuses to start
//! - Config is resolved exactly once at startup and never mutated

pub mod loader;
pub mod schema;

pub use loader::{resolve, ConfigError, CONFIG_FILE};
pub use schema::{expand_host, ConfigSource, GatewayConfig};
