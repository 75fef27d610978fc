//! The gatekeeping middleware: pipeline orchestration and response
//! finalization.
//!
//! Stages run strictly in order and short-circuit at the asset classifier
//! and the authorization gate. The finalizer guarantees at most one redirect
//! per response and writes the locale cookie only on pass-through responses
//! where the locale actually changed, so a redirect and a cookie write never
//! compound into two round trips.

use std::sync::Arc;

use axum::{
    Router,
    extract::Request,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use http::{HeaderValue, header};

use crate::{Config, LocaleConfig, Result, RoutesConfig};

use super::{
    assets,
    authz::{self, AuthzDecision},
    locale,
    oracle::{SessionOracle, SessionState},
    prefix::DeploymentPrefix,
};

/// The request gatekeeper.
///
/// Holds the validated configuration, the prefix normalized once at
/// creation, and the session oracle. Shared read-only across requests via
/// `Arc`; all other pipeline state is request-scoped.
pub struct Gatekeeper {
    routes: RoutesConfig,
    locale: LocaleConfig,
    prefix: DeploymentPrefix,
    oracle: Arc<dyn SessionOracle>,
}

impl Gatekeeper {
    /// Creates a gatekeeper from a configuration and a session oracle.
    ///
    /// Validates the configuration and normalizes the deployment prefix
    /// once. When the configuration carries no `base_path`, the `PATH_PRE`
    /// environment variable is consulted instead.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration validation fails.
    pub fn new(config: Config, oracle: Arc<dyn SessionOracle>) -> Result<Self> {
        config.validate()?;
        let prefix = match &config.base_path {
            Some(raw) => DeploymentPrefix::normalize(raw),
            None => DeploymentPrefix::from_env(),
        };
        Ok(Self {
            routes: config.routes,
            locale: config.locale,
            prefix,
            oracle,
        })
    }

    /// Returns the normalized deployment prefix.
    pub fn prefix(&self) -> &DeploymentPrefix {
        &self.prefix
    }

    /// Wraps a router so every request passes through the gate.
    ///
    /// Routes should be registered under their external (prefixed) paths;
    /// the gate redirects un-prefixed requests rather than rewriting them,
    /// so stale bookmarks recover with a single hop instead of a 404.
    pub fn apply<S>(self: Arc<Self>, router: Router<S>) -> Router<S>
    where
        S: Clone + Send + Sync + 'static,
    {
        router.layer(axum::middleware::from_fn(
            move |request: Request, next: Next| {
                let gate = Arc::clone(&self);
                async move { gate.handle(request, next).await }
            },
        ))
    }

    /// Runs the full pipeline for one request.
    ///
    /// Use this directly with `axum::middleware::from_fn` when [`Gatekeeper::apply`]
    /// does not fit (e.g. applying the gate to a sub-router only).
    pub async fn handle(&self, request: Request, next: Next) -> Response {
        let path = request.uri().path().to_string();

        // 1. Build artifacts and binary assets bypass everything below:
        //    no cookie writes, no redirects.
        if assets::is_static_asset(&path) {
            return next.run(request).await;
        }

        // 2. A configured prefix that the external path does not carry is a
        //    deployment misconfiguration or a stale bookmark. Answer with a
        //    single redirect to the prefixed path, never a 404.
        if !self.prefix.has_prefix(&path) {
            let mut location = self.prefix.to_external(&path);
            if let Some(query) = request.uri().query() {
                location = format!("{location}?{query}");
            }
            tracing::debug!(%path, %location, "redirecting to prefixed path");
            return redirect(&location);
        }
        let canonical = self.prefix.to_canonical(&path);

        // 3. Authorization gate. The oracle call is the single suspension
        //    point of the pipeline; a failing oracle degrades to the
        //    anonymous path instead of blocking the site.
        let session = match self
            .oracle
            .session_state(&canonical, request.headers())
            .await
        {
            Ok(state) => state,
            Err(error) => {
                tracing::warn!(
                    %error,
                    path = %canonical,
                    "session oracle failed, treating request as unauthenticated"
                );
                SessionState::Unauthenticated
            }
        };

        let class = authz::classify_route(&canonical, &self.routes);
        match authz::decide(class, session) {
            AuthzDecision::Allow => {}
            AuthzDecision::RedirectToHome => {
                let location = self.prefix.rewrite_redirect_location(&self.routes.home);
                tracing::debug!(path = %canonical, %location, "authenticated caller on auth entry page");
                return redirect(&location);
            }
            AuthzDecision::RedirectToLogin => {
                let location = self.prefix.rewrite_redirect_location(&self.routes.login);
                tracing::debug!(path = %canonical, %location, "anonymous caller on protected route");
                return redirect(&location);
            }
        }

        // 4. Locale resolution, independent of the auth outcome.
        let cookie = locale::cookie_value(request.headers(), &self.locale.cookie_name);
        let header = request
            .headers()
            .get(header::ACCEPT_LANGUAGE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);
        let resolved = locale::resolve_locale(
            cookie.as_deref(),
            header.as_deref(),
            &self.locale.supported,
            &self.locale.default_locale,
        );

        // 5. Pass through and persist the locale only when it changed.
        let mut response = next.run(request).await;
        if cookie.as_deref() != Some(resolved.as_str()) {
            let set_cookie =
                locale::set_cookie_value(&self.locale.cookie_name, &resolved, self.locale.cookie_max_age);
            if let Ok(value) = HeaderValue::from_str(&set_cookie) {
                response.headers_mut().append(header::SET_COOKIE, value);
            }
        }
        response
    }
}

/// A single 307 redirect, the only redirect shape this layer ever emits.
fn redirect(location: &str) -> Response {
    Redirect::temporary(location).into_response()
}
