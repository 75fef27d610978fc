//! Tests for base-path prefix handling through the full middleware.

use super::{app, authed, get_request};
use crate::{Config, SessionState};
use http::{StatusCode, header};
use tower::ServiceExt;

fn prefixed_config() -> Config {
    Config::default().with_base_path("/app")
}

#[tokio::test]
async fn test_unprefixed_request_redirects_to_prefixed_path() {
    let app = app(prefixed_config(), authed(SessionState::Authenticated));

    let response = app.oneshot(get_request("/dashboard")).await.unwrap();

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(response.headers()[header::LOCATION], "/app/dashboard");
}

#[tokio::test]
async fn test_unprefixed_redirect_preserves_query() {
    let app = app(prefixed_config(), authed(SessionState::Authenticated));

    let response = app.oneshot(get_request("/dashboard?tab=2")).await.unwrap();

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(response.headers()[header::LOCATION], "/app/dashboard?tab=2");
}

#[tokio::test]
async fn test_prefixed_request_passes_through() {
    let app = app(prefixed_config(), authed(SessionState::Authenticated));

    // /app/dashboard is canonical /dashboard: protected, authenticated, allowed.
    let response = app.oneshot(get_request("/app/dashboard")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_auth_redirect_location_is_rewritten_with_prefix() {
    let app = app(prefixed_config(), authed(SessionState::Unauthenticated));

    let response = app.oneshot(get_request("/app/dashboard")).await.unwrap();

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    // The configured login route is canonical; the Location carries the
    // prefix exactly once.
    assert_eq!(response.headers()[header::LOCATION], "/app/login");
}

#[tokio::test]
async fn test_no_double_prefixing_when_route_already_external() {
    let config = prefixed_config().with_login_route("/app/login");
    let app = app(config, authed(SessionState::Unauthenticated));

    let response = app.oneshot(get_request("/app/dashboard")).await.unwrap();

    assert_eq!(response.headers()[header::LOCATION], "/app/login");
}

#[tokio::test]
async fn test_static_assets_are_not_prefix_redirected() {
    let app = app(prefixed_config(), authed(SessionState::Unauthenticated));

    let response = app
        .oneshot(get_request("/_next/static/chunks/x.js"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}
