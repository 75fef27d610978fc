//! # axum-gate
//!
//! A request-gatekeeping middleware for Axum applications that serve a
//! multi-locale site, optionally under a deployment base path.
//!
//! Every inbound request passes through a short pipeline before it reaches
//! application routes:
//!
//! 1. **Static-asset bypass** — build output and files with extensions skip
//!    everything below.
//! 2. **Base-path normalization** — the externally visible path is mapped to
//!    the canonical, prefix-free path used by routing; stale un-prefixed
//!    requests get a single redirect instead of a 404.
//! 3. **Authorization gate** — guarded-route policy: authenticated callers
//!    are kept out of the login/register pages, anonymous callers are kept
//!    out of everything else.
//! 4. **Locale resolution** — cookie first, then weighted `Accept-Language`
//!    negotiation, then a best-effort matcher, then the default.
//! 5. **Finalization** — at most one redirect per response, and a locale
//!    cookie only on pass-through responses where the locale changed.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use axum::{Router, routing::get};
//! use axum_gate::{Config, Gatekeeper, Result, SessionOracle, SessionState};
//! use http::HeaderMap;
//! use std::sync::Arc;
//!
//! struct MyOracle;
//!
//! #[async_trait::async_trait]
//! impl SessionOracle for MyOracle {
//!     async fn session_state(&self, _path: &str, headers: &HeaderMap) -> Result<SessionState> {
//!         Ok(if headers.contains_key("authorization") {
//!             SessionState::Authenticated
//!         } else {
//!             SessionState::Unauthenticated
//!         })
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let config = Config::default();  // Loads from config/{RUST_ENV}.toml
//!     config.setup_tracing();
//!
//!     let gate = Arc::new(Gatekeeper::new(config, Arc::new(MyOracle))?);
//!     let app: Router = gate.apply(Router::new().route("/", get(|| async { "home" })));
//!
//!     let listener = tokio::net::TcpListener::bind("127.0.0.1:3000").await?;
//!     axum::serve(listener, app).await?;
//!     Ok(())
//! }
//! ```
//!
//! With `config/dev.toml`:
//! ```toml
//! base_path = "{{ PATH_PRE }}"
//!
//! [routes]
//! home = "/"
//! login = "/login"
//! register = "/register"
//!
//! [locale]
//! supported = ["en", "zh", "es", "ja"]
//! default = "en"
//! ```
//!
//! Run with `RUST_ENV=dev cargo run`.
//!
//! # What You Get
//!
//! | Behavior | Description |
//! |----------|-------------|
//! | Guarded routes | Login/register redirect home when authenticated; everything else redirects to login when anonymous |
//! | Fail-open oracle | A session-oracle outage degrades to anonymous, never to a 5xx |
//! | Sticky locale | Once negotiated, the locale is persisted in a cookie and wins on later requests |
//! | Base-path handling | Un-prefixed requests redirect once; redirect `Location`s carry the prefix exactly once |
//! | Asset safety | Build output and binary assets never receive cookies or redirects |
//!
//! # Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | `config` | Configuration loading and validation ([`Config`]) |
//! | `gate` | The pipeline stages and middleware ([`Gatekeeper`]) |
//! | `error` | Error types and handling ([`Error`]) |
mod config;
mod error;
mod gate;
mod utils;

pub use config::*;
pub use error::*;
pub use gate::*;
pub use utils::*;

pub type Result<T> = std::result::Result<T, Error>;
