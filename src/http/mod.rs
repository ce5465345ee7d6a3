//! HTTP serving subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (bind, accept loop)
//!     → RoutingSurface handler (matched route set or 404)
//!     → forwarded backend response to client
//! ```

pub mod server;

pub use server::{GatewayServer, ServeError};
