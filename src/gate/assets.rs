//! Static-asset classification.
//!
//! Build artifacts and binary assets must never be subject to locale-cookie
//! writes or prefix redirects: both would corrupt caching and break asset
//! loading. Paths classified here bypass the rest of the pipeline entirely.

/// Reserved internal prefix for framework build output. Covers static chunks
/// and the image optimization endpoint.
pub(crate) const BUILD_OUTPUT_PREFIX: &str = "/_next/";

/// Returns true when the path is build output or looks like a file.
///
/// A path "looks like a file" when its final segment contains a `.` and the
/// path does not end in `/` (a directory route may legitimately contain dots
/// in earlier segments).
pub fn is_static_asset(path: &str) -> bool {
    if path.starts_with(BUILD_OUTPUT_PREFIX) || path == "/favicon.ico" {
        return true;
    }
    if path.ends_with('/') {
        return false;
    }
    match path.rsplit('/').next() {
        Some(last_segment) => last_segment.contains('.'),
        None => false,
    }
}
