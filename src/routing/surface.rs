//! Unified routing surface built from backend route sets.

use axum::http::{Method, StatusCode, Uri};
use axum::response::IntoResponse;
use axum::Router;

/// Write-phase aggregate for backend route sets.
///
/// Mutated only by sequential [`mount`](Self::mount) calls during startup;
/// [`freeze`](Self::freeze) consumes it into the read-only surface.
#[derive(Default)]
pub struct SurfaceBuilder {
    router: Router,
}

impl SurfaceBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mount one backend's route set onto the surface.
    pub fn mount(mut self, route_set: Router) -> Self {
        self.router = self.router.merge(route_set);
        self
    }

    /// Finish the write phase and produce the immutable surface.
    pub fn freeze(self) -> RoutingSurface {
        RoutingSurface {
            router: self.router.fallback(no_route),
        }
    }
}

/// The frozen request-dispatch surface; safe for unsynchronized concurrent
/// reads since no writes occur after construction.
#[derive(Debug)]
pub struct RoutingSurface {
    router: Router,
}

impl RoutingSurface {
    /// Hand the composed handler to the server.
    pub fn into_router(self) -> Router {
        self.router
    }
}

async fn no_route(method: Method, uri: Uri) -> impl IntoResponse {
    tracing::warn!(method = %method, path = %uri.path(), "no route matched");
    (StatusCode::NOT_FOUND, "no matching route")
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use axum::routing::get;
    use tower::ServiceExt;

    fn route_set(path: &str, body: &'static str) -> Router {
        Router::new().route(path, get(move || async move { body }))
    }

    #[tokio::test]
    async fn frozen_surface_serves_all_mounted_sets() {
        let surface = SurfaceBuilder::new()
            .mount(route_set("/auth", "auth"))
            .mount(route_set("/shop", "shop"))
            .freeze();
        let router = surface.into_router();

        for (path, expected) in [("/auth", "auth"), ("/shop", "shop")] {
            let response = router
                .clone()
                .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK);
            let bytes = axum::body::to_bytes(response.into_body(), 1024).await.unwrap();
            assert_eq!(&bytes[..], expected.as_bytes());
        }
    }

    #[tokio::test]
    async fn unmatched_request_gets_404() {
        let surface = SurfaceBuilder::new()
            .mount(route_set("/auth", "auth"))
            .freeze();

        let response = surface
            .into_router()
            .oneshot(Request::builder().uri("/missing").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn empty_surface_404s_everything() {
        let response = SurfaceBuilder::new()
            .freeze()
            .into_router()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
