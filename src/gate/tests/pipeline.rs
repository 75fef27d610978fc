//! Tests for the stages working together: ordering and short-circuits.

use super::{app, authed, get_request};
use crate::{Config, SessionState};
use axum::body::Body;
use http::{Request, StatusCode, header};
use tower::ServiceExt;

#[tokio::test]
async fn test_asset_bypass_precedes_auth() {
    // Anonymous caller, protected-looking asset path: the classifier runs
    // first, so no login redirect happens.
    let app = app(
        Config::default().with_base_path(""),
        authed(SessionState::Unauthenticated),
    );

    let response = app
        .oneshot(get_request("/_next/static/chunks/x.js"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_prefix_redirect_precedes_auth() {
    // Un-prefixed path from an anonymous caller: the answer is the prefix
    // redirect, not the login redirect — one hop at a time.
    let app = app(
        Config::default().with_base_path("/app"),
        authed(SessionState::Unauthenticated),
    );

    let response = app.oneshot(get_request("/dashboard")).await.unwrap();

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(response.headers()[header::LOCATION], "/app/dashboard");
}

#[tokio::test]
async fn test_at_most_one_redirect_and_no_cookie_on_it() {
    // Auth redirect and locale change in the same request: the redirect
    // wins, the cookie write is deferred to the next request.
    let app = app(
        Config::default().with_base_path(""),
        authed(SessionState::Unauthenticated),
    );

    let request = Request::builder()
        .uri("/settings")
        .header(header::ACCEPT_LANGUAGE, "es")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(response.headers()[header::LOCATION], "/login");
    assert!(response.headers().get(header::SET_COOKIE).is_none());
}

#[tokio::test]
async fn test_passthrough_attaches_cookie_exactly_once() {
    let app = app(
        Config::default().with_base_path(""),
        authed(SessionState::Authenticated),
    );

    let request = Request::builder()
        .uri("/settings")
        .header(header::ACCEPT_LANGUAGE, "es")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let cookies: Vec<_> = response.headers().get_all(header::SET_COOKIE).iter().collect();
    assert_eq!(cookies.len(), 1);
}

#[tokio::test]
async fn test_locale_resolution_runs_under_prefix() {
    let app = app(
        Config::default().with_base_path("/app"),
        authed(SessionState::Authenticated),
    );

    let request = Request::builder()
        .uri("/app/dashboard")
        .header(header::ACCEPT_LANGUAGE, "ja")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let set_cookie = response.headers()[header::SET_COOKIE].to_str().unwrap();
    assert!(set_cookie.starts_with("NEXT_LOCALE=ja;"));
}
