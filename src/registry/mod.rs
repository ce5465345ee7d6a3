//! Backend service registration.
//!
//! # Data Flow
//! ```text
//! GatewayConfig
//!     → for each backend, in fixed order (auth, then shop):
//!         resolve target address
//!         → dial-probe the backend (connect timeout = dial options)
//!         → mount its route set onto the shared SurfaceBuilder
//!     → freeze into the RoutingSurface handed to the server
//! ```
//!
//! # Design Decisions
//! - First registration failure aborts the whole startup; remaining
//!   backends are not attempted and no partial surface escapes. A gateway
//!   serving only some of its backends would turn one misconfigured
//!   service into silent 404s for every client
//! - Registration order is fixed and stable across runs
//! - Errors name the offending backend and address

pub mod backends;
mod forward;

use std::io;
use std::sync::Arc;
use std::time::Duration;

use axum::http::uri::Authority;
use thiserror::Error;
use tokio::net::TcpStream;

use crate::config::{expand_host, GatewayConfig};
use crate::registry::backends::Backend;
use crate::registry::forward::BackendTarget;
use crate::routing::{RoutingSurface, SurfaceBuilder};

/// Error type for backend registration.
#[derive(Debug, Error)]
pub enum RegistrationError {
    #[error("backend {backend} unreachable at {address}: {source}")]
    Unreachable {
        backend: &'static str,
        address: String,
        #[source]
        source: io::Error,
    },

    #[error("backend {backend} dial timed out after {timeout:?} at {address}")]
    DialTimeout {
        backend: &'static str,
        address: String,
        timeout: Duration,
    },

    #[error("backend {backend} address {address} is not a valid authority")]
    InvalidAddress {
        backend: &'static str,
        address: String,
    },
}

/// Options applied when dialing a backend during registration.
#[derive(Debug, Clone)]
pub struct DialOptions {
    pub connect_timeout: Duration,
}

impl Default for DialOptions {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(2),
        }
    }
}

/// Register every backend's route set and freeze the result.
///
/// Aborts on the first failing backend; the partially-built surface is
/// dropped and never observable outside this function.
pub async fn build_routing_surface(
    config: &GatewayConfig,
) -> Result<RoutingSurface, RegistrationError> {
    let opts = DialOptions::default();
    let mut builder = SurfaceBuilder::new();
    // Fixed order: auth before shop. Later mounts shadow earlier ones on
    // overlapping paths, so the order must be stable across runs.
    builder = register(builder, backends::AUTH, &config.auth_address, &opts).await?;
    builder = register(builder, backends::SHOP, &config.shop_address, &opts).await?;
    Ok(builder.freeze())
}

/// Register one backend's route set onto the surface under construction.
async fn register(
    builder: SurfaceBuilder,
    backend: &Backend,
    address: &str,
    opts: &DialOptions,
) -> Result<SurfaceBuilder, RegistrationError> {
    let dial_address = expand_host(address, "127.0.0.1");
    let authority = dial_address.parse::<Authority>().map_err(|_| {
        RegistrationError::InvalidAddress {
            backend: backend.name,
            address: dial_address.clone(),
        }
    })?;

    probe(backend.name, &dial_address, opts).await?;

    let target = Arc::new(BackendTarget::new(backend.name, authority));
    tracing::info!(
        backend = backend.name,
        address = %dial_address,
        "registered backend route set"
    );
    Ok(builder.mount(backend.route_set(target)))
}

/// Verify the backend accepts connections before its routes go live.
async fn probe(
    backend: &'static str,
    address: &str,
    opts: &DialOptions,
) -> Result<(), RegistrationError> {
    match tokio::time::timeout(opts.connect_timeout, TcpStream::connect(address)).await {
        Ok(Ok(_stream)) => Ok(()),
        Ok(Err(source)) => Err(RegistrationError::Unreachable {
            backend,
            address: address.to_string(),
            source,
        }),
        Err(_) => Err(RegistrationError::DialTimeout {
            backend,
            address: address.to_string(),
            timeout: opts.connect_timeout,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn unreachable_backend_fails_registration() {
        // Port from the ephemeral range with nothing listening.
        let config = GatewayConfig {
            auth_address: "127.0.0.1:1".to_string(),
            ..GatewayConfig::default()
        };
        let err = build_routing_surface(&config).await.unwrap_err();
        assert!(err.to_string().contains("auth"));
        assert!(matches!(err, RegistrationError::Unreachable { backend: "auth", .. }));
    }

    #[tokio::test]
    async fn invalid_address_fails_registration() {
        let config = GatewayConfig {
            auth_address: "not a host:port".to_string(),
            ..GatewayConfig::default()
        };
        let err = build_routing_surface(&config).await.unwrap_err();
        assert!(matches!(err, RegistrationError::InvalidAddress { backend: "auth", .. }));
    }
}
