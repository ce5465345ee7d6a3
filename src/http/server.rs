//! Gateway accept loop.
//!
//! # Responsibilities
//! - Bind the listener on the configured address
//! - Dispatch every accepted connection into the frozen routing surface
//! - Run until the process is killed or the listener fails fatally
//!
//! # Design Decisions
//! - No graceful-shutdown or hot-reload path: any return from the loop is
//!   fatal and the process exits non-zero
//! - No gateway-level request timeouts; a wedged backend is bounded by the
//!   client's own disconnect, which cancels the forwarded call

use std::io;

use thiserror::Error;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::config::expand_host;
use crate::routing::RoutingSurface;

/// Error type for the serving stage.
#[derive(Debug, Error)]
pub enum ServeError {
    #[error("failed to bind {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: io::Error,
    },

    #[error("server accept loop failed: {0}")]
    Accept(#[source] io::Error),
}

/// The gateway's HTTP front door.
pub struct GatewayServer {
    bind_address: String,
}

impl GatewayServer {
    pub fn new(bind_address: impl Into<String>) -> Self {
        Self {
            bind_address: bind_address.into(),
        }
    }

    /// Bind and serve the frozen surface. Returns only on fatal error.
    pub async fn serve(self, surface: RoutingSurface) -> Result<(), ServeError> {
        let address = expand_host(&self.bind_address, "0.0.0.0");
        let listener = TcpListener::bind(&address)
            .await
            .map_err(|source| ServeError::Bind {
                address: address.clone(),
                source,
            })?;
        let local_addr = listener.local_addr().map_err(ServeError::Accept)?;
        tracing::info!(address = %local_addr, "gateway server starting");

        let app = surface.into_router().layer(TraceLayer::new_for_http());
        axum::serve(listener, app)
            .await
            .map_err(ServeError::Accept)
    }
}
