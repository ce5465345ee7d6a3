//! HTTP/JSON gateway for the shop platform.
//!
//! Exposes a single HTTP front door and forwards each request to one of the
//! backend RPC services (auth, shop) whose route set matches it. Clients
//! never see backend addresses or the RPC wire format.
//!
//! # Startup pipeline
//! ```text
//! config (env > gw.toml > defaults)
//!     → logging (stderr + optional append-mode file)
//!     → registry (mount each backend's route set, fixed order, fail fast)
//!     → server (bind + accept loop, runs until killed)
//! ```
//! Each stage fully completes or fatally aborts before the next begins.

pub mod config;
pub mod http;
pub mod observability;
pub mod registry;
pub mod routing;

pub use config::GatewayConfig;
pub use http::GatewayServer;
pub use routing::RoutingSurface;
