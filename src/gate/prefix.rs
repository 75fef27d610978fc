//! Deployment base-path normalization.
//!
//! When the application is served under a base path (e.g. `/app` behind a
//! shared gateway), every externally visible path carries the prefix while
//! route classification works on the canonical, prefix-free path. This
//! module owns the mapping in both directions and the rewriting of outgoing
//! redirect locations so they stay prefix-consistent.

use url::Url;

/// A normalized deployment path prefix.
///
/// Invariant: the inner value is either empty (no prefix configured) or
/// starts with `/` and never ends with `/`. Established once at process
/// start and read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeploymentPrefix(String);

impl DeploymentPrefix {
    /// Environment variable holding the raw deployment prefix.
    pub const ENV_VAR: &'static str = "PATH_PRE";

    /// Normalizes a raw prefix value: all leading and trailing `/` are
    /// trimmed, an empty result stays empty, anything else gets a single
    /// leading `/`. Idempotent.
    pub fn normalize(raw: &str) -> Self {
        let trimmed = raw.trim_matches('/');
        if trimmed.is_empty() {
            Self(String::new())
        } else {
            Self(format!("/{trimmed}"))
        }
    }

    /// Reads and normalizes the prefix from the `PATH_PRE` environment
    /// variable. A missing variable means no prefix.
    pub fn from_env() -> Self {
        Self::normalize(&std::env::var(Self::ENV_VAR).unwrap_or_default())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true when no prefix is configured or the path carries it.
    pub fn has_prefix(&self, path: &str) -> bool {
        self.0.is_empty() || path.starts_with(&self.0)
    }

    /// Maps an externally visible path to the canonical path used by route
    /// classification. Strips the prefix when present; the result always
    /// starts with `/`.
    pub fn to_canonical(&self, external: &str) -> String {
        if self.0.is_empty() || !external.starts_with(&self.0) {
            return ensure_leading_slash(external);
        }
        let rest = &external[self.0.len()..];
        if rest.starts_with('/') {
            rest.to_string()
        } else {
            format!("/{rest}")
        }
    }

    /// Maps a canonical path back to its externally visible form. Guards
    /// against double-prefixing: a path that already carries the prefix is
    /// returned as-is.
    pub fn to_external(&self, canonical: &str) -> String {
        let path = ensure_leading_slash(canonical);
        if self.0.is_empty() || path.starts_with(&self.0) {
            path
        } else {
            format!("{}{path}", self.0)
        }
    }

    /// Rewrites an outgoing redirect location so its path carries the
    /// prefix exactly once. Accepts both absolute URLs and path-only
    /// locations; anything already prefixed is returned unchanged.
    pub fn rewrite_redirect_location(&self, location: &str) -> String {
        if self.0.is_empty() {
            return location.to_string();
        }
        match Url::parse(location) {
            Ok(mut url) => {
                if !url.path().starts_with(&self.0) {
                    let prefixed = format!("{}{}", self.0, url.path());
                    url.set_path(&prefixed);
                }
                url.to_string()
            }
            // Not an absolute URL, treat it as a path.
            Err(_) => self.to_external(location),
        }
    }
}

fn ensure_leading_slash(path: &str) -> String {
    if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{path}")
    }
}
