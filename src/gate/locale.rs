//! Locale resolution.
//!
//! Resolution is a pure function over explicit inputs (cookie value, header
//! value, configuration) with a strict priority order: a persisted cookie
//! wins outright, then weighted `Accept-Language` negotiation, then a
//! best-effort matcher over the full tag list, then the default. Once
//! negotiated, the finalizer persists the result as a cookie so later
//! requests resolve from step one — the "sticky" contract.

use std::time::Duration;

use http::{HeaderMap, header::COOKIE};

/// Resolves the response locale for one request.
///
/// Priority order, first match wins:
/// 1. `cookie` when it is a supported locale (no further negotiation);
/// 2. the highest-weighted supported primary subtag from `header`;
/// 3. a best-effort match over the full requested tag list;
/// 4. `default_locale`.
///
/// Malformed header entries are skipped, never fatal. The result is always
/// a member of `supported`, assuming `default_locale` is (validated at
/// configuration time).
pub fn resolve_locale(
    cookie: Option<&str>,
    header: Option<&str>,
    supported: &[String],
    default_locale: &str,
) -> String {
    if let Some(cookie) = cookie
        && supported.iter().any(|s| s == cookie)
    {
        return cookie.to_string();
    }

    let Some(header) = header else {
        return default_locale.to_string();
    };

    let requested = parse_accept_language(header);

    for (tag, _weight) in &requested {
        let primary = primary_subtag(tag);
        if supported.iter().any(|s| s == primary) {
            return primary.to_string();
        }
    }

    match_locale(&requested, supported).unwrap_or_else(|| default_locale.to_string())
}

/// Parse an `Accept-Language` header value into (tag, weight) pairs,
/// sorted by weight descending (stable sort preserves original order for
/// ties). Tags are lower-cased; weights default to 1.0 when absent and are
/// clamped to the RFC 7231 0.0–1.0 range. Entries with an empty tag or an
/// unparsable weight are skipped.
pub(crate) fn parse_accept_language(header: &str) -> Vec<(String, f32)> {
    let mut requested: Vec<(String, f32)> = header
        .split(',')
        .filter_map(|entry| {
            let entry = entry.trim();
            if entry.is_empty() {
                return None;
            }

            let (tag, weight) = match entry.split_once(";q=") {
                Some((tag, weight)) => (tag.trim(), weight.trim().parse::<f32>().ok()?),
                None => (entry, 1.0),
            };

            if tag.is_empty() {
                return None;
            }

            Some((tag.to_lowercase(), weight.clamp(0.0, 1.0)))
        })
        .collect();

    requested.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    requested
}

/// Best-effort fallback matching over the full requested tag list.
///
/// Walks the tags in negotiated order and accepts a supported locale that
/// equals the tag or relates to it by subtag prefix in either direction
/// (`zh-hans` matches supported `zh`, `zh` matches supported `zh-hans`).
fn match_locale(requested: &[(String, f32)], supported: &[String]) -> Option<String> {
    for (tag, _weight) in requested {
        if let Some(found) = supported.iter().find(|s| {
            *s == tag
                || tag.starts_with(&format!("{s}-"))
                || s.starts_with(&format!("{tag}-"))
        }) {
            return Some(found.clone());
        }
    }
    None
}

fn primary_subtag(tag: &str) -> &str {
    tag.split('-').next().unwrap_or(tag)
}

/// Reads a cookie value by name from the request headers.
///
/// Cookie names are unique per request; the first occurrence wins.
pub(crate) fn cookie_value(headers: &HeaderMap, name: &str) -> Option<String> {
    for header in headers.get_all(COOKIE) {
        let Ok(header) = header.to_str() else {
            continue;
        };
        for pair in header.split(';') {
            if let Some((key, value)) = pair.trim().split_once('=')
                && key.trim() == name
            {
                return Some(value.trim().to_string());
            }
        }
    }
    None
}

/// Serializes the locale cookie: site-wide path, Lax same-site policy.
pub(crate) fn set_cookie_value(name: &str, locale: &str, max_age: Duration) -> String {
    format!(
        "{name}={locale}; Max-Age={}; Path=/; SameSite=Lax",
        max_age.as_secs()
    )
}
