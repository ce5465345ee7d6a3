//! Routing surface subsystem.
//!
//! # Data Flow
//! ```text
//! Registration (at startup):
//!     backend route sets
//!     → SurfaceBuilder::mount (sequential, single writer)
//!     → SurfaceBuilder::freeze
//!     → RoutingSurface (immutable)
//!
//! Serving:
//!     request → RoutingSurface handler → matched route or 404
//! ```
//!
//! # Design Decisions
//! - Write phase and read phase are split by ownership transfer: freezing
//!   consumes the builder, so no registration can happen while serving
//! - Mount order is the registration order; later mounts would shadow
//!   earlier ones on overlapping paths, so registration must be stable
//! - Unmatched requests get an explicit 404 with a warning log

pub mod surface;

pub use surface::{RoutingSurface, SurfaceBuilder};
