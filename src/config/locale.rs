use {crate::Result, serde::Deserialize, std::time::Duration};

///
/// Configuration for locale resolution and the locale cookie.
///
/// The supported set is closed: resolution always produces exactly one of
/// these codes, collapsing anything unsupported to the default.
///
#[derive(Debug, Clone, Deserialize)]
pub struct LocaleConfig {
    /// Locale codes the application can serve, as lower-case primary
    /// subtags. The default `supported` is `["en", "zh", "es", "ja"]`.
    #[serde(default = "LocaleConfig::default_supported")]
    pub supported: Vec<String>,

    /// Locale used when nothing else matches. Must be a member of
    /// `supported`. The default is "en".
    #[serde(rename = "default", default = "LocaleConfig::default_default_locale")]
    pub default_locale: String,

    /// Name of the cookie that persists the resolved locale.
    /// The default `cookie_name` is "NEXT_LOCALE".
    #[serde(default = "LocaleConfig::default_cookie_name")]
    pub cookie_name: String,

    /// Max-Age of the locale cookie. The default `cookie_max_age` is one
    /// year (365 days).
    #[serde(
        default = "LocaleConfig::default_cookie_max_age",
        with = "humantime_serde"
    )]
    pub cookie_max_age: Duration,
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self {
            supported: Self::default_supported(),
            default_locale: Self::default_default_locale(),
            cookie_name: Self::default_cookie_name(),
            cookie_max_age: Self::default_cookie_max_age(),
        }
    }
}

impl LocaleConfig {
    fn default_supported() -> Vec<String> {
        ["en", "zh", "es", "ja"].map(String::from).to_vec()
    }

    fn default_default_locale() -> String {
        "en".into()
    }

    fn default_cookie_name() -> String {
        "NEXT_LOCALE".into()
    }

    fn default_cookie_max_age() -> Duration {
        Duration::from_secs(365 * 24 * 60 * 60)
    }

    pub fn validate(&self) -> Result<()> {
        if self.supported.is_empty() {
            return Err(crate::Error::invalid_input(
                "At least one supported locale is required. Set [locale] supported = [\"en\"] in config.",
            ));
        }
        if !self.supported.contains(&self.default_locale) {
            return Err(crate::Error::invalid_input(format!(
                "Default locale {:?} is not in the supported set {:?}",
                self.default_locale, self.supported,
            )));
        }
        if self.cookie_name.trim().is_empty() {
            return Err(crate::Error::invalid_input(
                "Locale cookie_name must not be empty",
            ));
        }
        Ok(())
    }
}
