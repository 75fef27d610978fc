//! Pipeline tests for the Gatekeeper middleware.
//!
//! Tests are organized by pipeline stage in separate modules; each drives a
//! real `Router` through `tower::ServiceExt::oneshot`. The `pipeline` module
//! tests the stages working together.

mod pipeline;
mod prefixing;

use std::sync::Arc;

use async_trait::async_trait;
use axum::{Router, body::Body, routing::get};
use http::{HeaderMap, Request};

use crate::{Config, Gatekeeper, Result, SessionOracle, SessionState};

/// Oracle double that always reports the given state.
pub(crate) struct FixedOracle(pub SessionState);

#[async_trait]
impl SessionOracle for FixedOracle {
    async fn session_state(&self, _path: &str, _headers: &HeaderMap) -> Result<SessionState> {
        Ok(self.0)
    }
}

/// Oracle double that always fails, for exercising the fail-open policy.
pub(crate) struct FailingOracle;

#[async_trait]
impl SessionOracle for FailingOracle {
    async fn session_state(&self, _path: &str, _headers: &HeaderMap) -> Result<SessionState> {
        Err(crate::Error::oracle("session backend unavailable"))
    }
}

/// Builds a gated app with a couple of representative routes.
pub(crate) fn app(config: Config, oracle: Arc<dyn SessionOracle>) -> Router {
    let gate = Arc::new(Gatekeeper::new(config, oracle).expect("valid test config"));
    gate.apply(
        Router::new()
            .route("/", get(|| async { "home" }))
            .route("/login", get(|| async { "login" }))
            .route("/settings", get(|| async { "settings" }))
            .route("/app/dashboard", get(|| async { "dashboard" }))
            .route("/_next/static/chunks/x.js", get(|| async { "asset" })),
    )
}

pub(crate) fn get_request(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub(crate) fn authed(oracle_state: SessionState) -> Arc<dyn SessionOracle> {
    Arc::new(FixedOracle(oracle_state))
}
