//! Guarded-route authorization policy.
//!
//! Routes are classified from the canonical path against a small fixed
//! table, then combined with the session state in a pure decision function.
//! The decision never depends on route content, only on its classification:
//! authenticated users are kept out of the auth entry pages, anonymous
//! users are kept out of everything protected.

use crate::RoutesConfig;

use super::oracle::SessionState;

/// Classification of a canonical path for authorization purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteClass {
    /// Reachable regardless of session state.
    Public,
    /// Login and register pages: entry points into authentication.
    AuthEntryOnly,
    /// Everything else. The catch-all default.
    Protected,
}

/// Outcome of the authorization gate for one request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthzDecision {
    Allow,
    RedirectToHome,
    RedirectToLogin,
}

/// Classifies a canonical path against the configured route table.
///
/// Matching is by prefix, so `/login/reset` classifies like `/login`.
/// Every path outside the login/register prefixes defaults to Protected.
pub fn classify_route(canonical_path: &str, routes: &RoutesConfig) -> RouteClass {
    if canonical_path.starts_with(&routes.login) || canonical_path.starts_with(&routes.register) {
        RouteClass::AuthEntryOnly
    } else {
        RouteClass::Protected
    }
}

/// The guarded-route decision table.
pub fn decide(class: RouteClass, session: SessionState) -> AuthzDecision {
    match (class, session) {
        (RouteClass::AuthEntryOnly, SessionState::Authenticated) => AuthzDecision::RedirectToHome,
        (RouteClass::AuthEntryOnly, SessionState::Unauthenticated) => AuthzDecision::Allow,
        (RouteClass::Protected, SessionState::Authenticated) => AuthzDecision::Allow,
        (RouteClass::Protected, SessionState::Unauthenticated) => AuthzDecision::RedirectToLogin,
        (RouteClass::Public, _) => AuthzDecision::Allow,
    }
}
