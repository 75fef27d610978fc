//!
//! Utility functions shared across the crate.
//!
//! Currently this is just [`replace_handlebars_with_env`], the template
//! substitution used when parsing TOML configuration.
//!

use {
    regex::{Captures, Regex},
    std::{env, sync::LazyLock},
};

/// Regular expression pattern for matching handlebars-style environment variable references.
/// Matches patterns like `{{ VAR_NAME }}` with optional whitespace around the variable name.
/// Variable names must be uppercase letters, digits, or underscores (standard env var naming).
static HANDLEBAR_REGEXP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{\s*([A-Z0-9_]+)\s*\}\}").unwrap());

/// Replaces handlebars-style `{{ VAR_NAME }}` references with the value of
/// the corresponding environment variable.
///
/// This keeps deployment-specific values (such as the base path behind a
/// shared gateway) out of the TOML files themselves. Missing variables are
/// substituted with an empty string and logged.
///
/// # Examples
///
/// ```
/// use axum_gate::replace_handlebars_with_env;
///
/// // Missing variables become empty strings
/// let template = "base_path = \"{{ MISSING_VAR }}\"";
/// let result = replace_handlebars_with_env(template);
/// assert_eq!(result, "base_path = \"\"");
/// ```
pub fn replace_handlebars_with_env(input: &str) -> String {
    HANDLEBAR_REGEXP
        .replace_all(input, |caps: &Captures| {
            let var_name = &caps[1];
            env::var(var_name).unwrap_or_else(|_| {
                tracing::warn!(
                    variable = %var_name,
                    "Environment variable not found, substituting with empty string"
                );
                String::new()
            })
        })
        .to_string()
}
