//! Gateway entry point.
//!
//! Straight-line fail-fast pipeline: resolve config, establish log sinks,
//! register backend route sets, serve. Any stage failure exits non-zero;
//! the serving loop never exits zero.

use std::process;

use shop_gateway::config::{self, ConfigSource};
use shop_gateway::observability::logging;
use shop_gateway::registry;
use shop_gateway::GatewayServer;

#[tokio::main]
async fn main() {
    // No log sinks exist yet; config failures can only go to bare stderr.
    let config = match config::resolve() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("shop-gateway: failed to resolve configuration: {e}");
            process::exit(1);
        }
    };

    if let Err(e) = logging::init(&config) {
        eprintln!("shop-gateway: failed to initialize logging: {e}");
        process::exit(1);
    }

    match &config.source {
        ConfigSource::File(path) => {
            tracing::info!(file = %path.display(), "configuration loaded")
        }
        ConfigSource::EnvAndDefaults => {
            tracing::warn!("config file not found, using environment and defaults")
        }
    }
    tracing::info!(
        bind_address = %config.bind_address,
        auth_address = %config.auth_address,
        shop_address = %config.shop_address,
        log_file = config.log_file().unwrap_or("<none>"),
        "configuration resolved"
    );

    let surface = match registry::build_routing_surface(&config).await {
        Ok(surface) => surface,
        Err(e) => {
            tracing::error!(error = %e, "failed to register backend routes");
            process::exit(1);
        }
    };

    let server = GatewayServer::new(config.bind_address.clone());
    match server.serve(surface).await {
        Ok(()) => {
            tracing::error!("gateway server stopped unexpectedly");
            process::exit(1);
        }
        Err(e) => {
            tracing::error!(error = %e, "gateway server failed");
            process::exit(1);
        }
    }
}
