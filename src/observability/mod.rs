//! Observability subsystem.
//!
//! # Design Decisions
//! - Structured logging via the tracing ecosystem
//! - Sinks are established once at startup, before any request traffic,
//!   and torn down implicitly at process exit
//! - Every line carries a timestamp and the emitting file:line so output
//!   from both sinks can be correlated

pub mod logging;
