//! Backend route-set descriptions.
//!
//! Each backend owns the HTTP/JSON surface for its RPC methods; the
//! gateway only mounts these route sets, it never inspects or rewrites
//! them. Payload transcoding happens inside the forwarded-to service.

use std::sync::Arc;

use axum::routing::{get, post, put};
use axum::Router;

use crate::registry::forward::{forward, BackendTarget};

/// A registrable backend: a stable name plus its owned route set.
pub struct Backend {
    pub name: &'static str,
    build: fn(Arc<BackendTarget>) -> Router,
}

impl Backend {
    /// Build this backend's route set, forwarding to the given target.
    pub(crate) fn route_set(&self, target: Arc<BackendTarget>) -> Router {
        (self.build)(target)
    }
}

/// Auth service: accounts, sessions, tokens.
pub static AUTH: &Backend = &Backend {
    name: "auth",
    build: auth_route_set,
};

/// Shop service: product catalog.
pub static SHOP: &Backend = &Backend {
    name: "shop",
    build: shop_route_set,
};

fn auth_route_set(target: Arc<BackendTarget>) -> Router {
    Router::new()
        .route("/v1/auth/register", post(forward))
        .route("/v1/auth/login", post(forward))
        .route("/v1/auth/confirm", post(forward))
        .route("/v1/auth/refresh", post(forward))
        .route("/v1/auth/validate", post(forward))
        .route("/v1/auth/users", get(forward))
        .route("/v1/auth/users/{login}", put(forward))
        .with_state(target)
}

fn shop_route_set(target: Arc<BackendTarget>) -> Router {
    Router::new()
        .route("/v1/shop/products", post(forward).get(forward))
        .route(
            "/v1/shop/products/{id}",
            get(forward).put(forward).delete(forward),
        )
        .with_state(target)
}
