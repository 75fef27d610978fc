//! The session oracle seam.
//!
//! The gatekeeper never inspects credentials itself. It asks an external
//! collaborator, once per request, whether the caller has a valid session,
//! and treats any failure of that collaborator as "unauthenticated"
//! (fail-open) so an auth subsystem outage never becomes a full site outage.

use async_trait::async_trait;
use http::HeaderMap;

use crate::Result;

/// The caller's authentication state as reported by the oracle.
///
/// Obtained fresh for every request; never cached across requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Authenticated,
    Unauthenticated,
}

impl SessionState {
    pub fn is_authenticated(self) -> bool {
        matches!(self, SessionState::Authenticated)
    }
}

/// External collaborator that knows whether the caller has a valid session.
///
/// Implementations typically look at a session cookie or bearer token and
/// consult whatever backend issued it. The oracle call is the only point in
/// the pipeline that may perform I/O or suspend.
///
/// # Errors
///
/// Errors are treated as transient by the gate: they are logged and the
/// request proceeds as unauthenticated. Retries, if any, belong to the
/// oracle's own contract, not to the gate.
#[async_trait]
pub trait SessionOracle: Send + Sync {
    /// Returns the caller's session state for the canonical request.
    async fn session_state(
        &self,
        canonical_path: &str,
        headers: &HeaderMap,
    ) -> Result<SessionState>;
}
