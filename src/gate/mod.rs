//! The gatekeeping pipeline.
//!
//! Evaluated once per inbound request, each stage a pure function of the
//! request plus the read-only configuration; the only suspension point is
//! the session-oracle call. The functionality is split across submodules:
//!
//! - [`assets`] - Static-asset classification (bypasses everything else)
//! - [`prefix`] - Deployment base-path normalization
//! - [`authz`] - Route classification and the guarded-route decision table
//! - [`oracle`] - The session oracle seam
//! - [`locale`] - Locale resolution and the locale cookie
//! - [`middleware`] - Pipeline orchestration and response finalization

mod assets;
mod authz;
mod locale;
mod middleware;
mod oracle;
mod prefix;

pub use assets::is_static_asset;
pub use authz::{AuthzDecision, RouteClass, classify_route, decide};
pub use locale::resolve_locale;
pub use middleware::Gatekeeper;
pub use oracle::{SessionOracle, SessionState};
pub use prefix::DeploymentPrefix;

#[cfg(test)]
mod tests;
