//! Request forwarding to a registered backend.
//!
//! This is the hosting side of the transcoding collaborator: requests that
//! matched a backend's route set are relayed to that backend's address
//! with method, headers, and body intact. If the client disconnects, the
//! handler future is dropped and the in-flight backend call is abandoned
//! with it, so cancellation propagates without gateway-level timeouts.

use std::sync::Arc;

use axum::body::Body;
use axum::extract::State;
use axum::http::uri::{Authority, Scheme};
use axum::http::{Request, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use hyper_util::client::legacy::connect::HttpConnector;
use hyper_util::client::legacy::Client;
use hyper_util::rt::TokioExecutor;

/// Forwarding target for one registered backend.
pub(crate) struct BackendTarget {
    pub name: &'static str,
    pub authority: Authority,
    pub client: Client<HttpConnector, Body>,
}

impl BackendTarget {
    pub fn new(name: &'static str, authority: Authority) -> Self {
        Self {
            name,
            authority,
            client: Client::builder(TokioExecutor::new()).build(HttpConnector::new()),
        }
    }
}

/// Relay the matched request to the backend and return its response.
pub(crate) async fn forward(
    State(target): State<Arc<BackendTarget>>,
    request: Request<Body>,
) -> Response {
    let (mut parts, body) = request.into_parts();

    let mut uri_parts = parts.uri.clone().into_parts();
    uri_parts.scheme = Some(Scheme::HTTP);
    uri_parts.authority = Some(target.authority.clone());
    parts.uri = match Uri::from_parts(uri_parts) {
        Ok(uri) => uri,
        Err(e) => {
            tracing::error!(backend = target.name, error = %e, "failed to build upstream uri");
            return (StatusCode::BAD_GATEWAY, "invalid upstream uri").into_response();
        }
    };

    match target.client.request(Request::from_parts(parts, body)).await {
        Ok(response) => {
            let (parts, body) = response.into_parts();
            Response::from_parts(parts, Body::new(body))
        }
        Err(e) => {
            tracing::error!(backend = target.name, error = %e, "upstream request failed");
            (StatusCode::BAD_GATEWAY, "upstream request failed").into_response()
        }
    }
}
