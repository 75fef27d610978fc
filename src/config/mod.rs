//!
//! Configuration structures and utilities for wiring up the gatekeeper.
//!
//! A configuration can be created in many ways:
//! - From an environment-specific TOML file via `Config::from_rust_env` or `Config::from_toml_file`
//! - From a TOML string via `Config::from_toml`
//! - Constructed programmatically via the builder methods on `Config`
//!
//! In both TOML-based methods, environment variables can be referenced in the TOML
//! using the {{ VAR_NAME }} syntax, and they will be substituted with the corresponding
//! environment variable value. This is done via the `replace_handlebars_with_env`
//! function and keeps deployment-specific values out of the TOML files.
//!
//! Configuration is split into logical sections, each represented by their own struct:
//!
//! - `RoutesConfig` for the route classification table
//! - `LocaleConfig` for locale resolution and the locale cookie
//! - `LoggingConfig` for logging and tracing settings
//!
mod locale;
mod logging;
mod routes;

pub use locale::*;
pub use logging::*;
pub use routes::*;

use {
    crate::{Error, Result, utils::replace_handlebars_with_env},
    serde::Deserialize,
    std::{env, fs, str::FromStr, time::Duration},
};

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Raw deployment path prefix under which the whole application is
    /// served (e.g. `/app` behind a shared gateway). When absent, the
    /// `PATH_PRE` environment variable is consulted at gatekeeper creation.
    /// Normalized once; an empty string means no prefix.
    #[serde(default)]
    pub base_path: Option<String>,

    #[serde(default)]
    pub routes: RoutesConfig,

    #[serde(default)]
    pub locale: LocaleConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for Config {
    ///
    /// Creates a default configuration.
    /// This will attempt to load configuration from the file based on the RUST_ENV
    /// environment variable falling back to a default configuration if the environment
    /// variable is not set. Configuration files should be located in the "config/"
    /// directory of your project.
    ///
    fn default() -> Self {
        match Self::from_rust_env() {
            Ok(config) => config,
            Err(_) => Config {
                base_path: None,
                routes: RoutesConfig::default(),
                locale: LocaleConfig::default(),
                logging: LoggingConfig::default(),
            },
        }
    }
}

impl Config {
    ///
    /// Loads the configuration from a file based on the RUST_ENV environment variable.
    ///
    pub fn from_rust_env() -> Result<Config> {
        Self::from_toml_file(env::var("RUST_ENV")?)
    }

    ///
    /// Given an environment name, loads the corresponding configuration file,
    /// substitutes any environment variables, and returns a Config struct.
    /// The configuration file is expected to be located at "config/{env}.toml"
    /// where {env} is the provided environment name (e.g., "dev", "prod").
    ///
    pub fn from_toml_file(env: impl AsRef<str>) -> Result<Config> {
        let path = format!("config/{}.toml", env.as_ref());
        let text = fs::read_to_string(path)?;
        Self::from_toml(&text)
    }

    ///
    /// Parses a configuration string in TOML format into a Config struct.
    ///
    pub fn from_toml(toml_str: &str) -> Result<Config> {
        toml_str.parse()
    }

    /// Sets the raw deployment base path.
    pub fn with_base_path<S: AsRef<str>>(mut self, base_path: S) -> Self {
        self.base_path = Some(base_path.as_ref().into());
        self
    }

    /// Sets the canonical home route of the RoutesConfig.
    pub fn with_home_route(mut self, route: &str) -> Self {
        self.routes.home = route.into();
        self
    }

    /// Sets the canonical login route of the RoutesConfig.
    pub fn with_login_route(mut self, route: &str) -> Self {
        self.routes.login = route.into();
        self
    }

    /// Sets the canonical register route of the RoutesConfig.
    pub fn with_register_route(mut self, route: &str) -> Self {
        self.routes.register = route.into();
        self
    }

    /// Sets the supported locales of the LocaleConfig.
    pub fn with_supported_locales<I, S>(mut self, locales: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.locale.supported = locales.into_iter().map(|l| l.as_ref().into()).collect();
        self
    }

    /// Sets the default locale of the LocaleConfig.
    pub fn with_default_locale(mut self, locale: &str) -> Self {
        self.locale.default_locale = locale.into();
        self
    }

    /// Sets the locale cookie name of the LocaleConfig.
    pub fn with_locale_cookie_name(mut self, name: &str) -> Self {
        self.locale.cookie_name = name.into();
        self
    }

    /// Sets the locale cookie Max-Age of the LocaleConfig.
    pub fn with_locale_cookie_max_age(mut self, max_age: Duration) -> Self {
        self.locale.cookie_max_age = max_age;
        self
    }

    /// Ensures that the configuration is valid.
    /// Most configuration values are either optional or have sensible defaults.
    /// Some invariants (canonical route paths, a supported default locale)
    /// are checked here so the pipeline never has to re-validate per request.
    pub fn validate(&self) -> Result<()> {
        self.routes.validate()?;
        self.locale.validate()?;
        self.logging.validate()?;
        Ok(())
    }

    ///
    /// Sets up the tracing subscriber for logging based on the LoggingConfig.
    ///
    /// NOTE: This should be called early during startup to ensure logging is configured
    ///       before any log messages are emitted.
    ///
    pub fn setup_tracing(&self) {
        use tracing_subscriber::{EnvFilter, prelude::*};
        let env_filter = EnvFilter::from_default_env();
        match self.logging.format {
            LogFormat::Json => {
                let _ = tracing_subscriber::registry()
                    .with(tracing_subscriber::fmt::layer().json())
                    .with(env_filter)
                    .try_init();
            }
            LogFormat::Default => {
                let _ = tracing_subscriber::registry()
                    .with(tracing_subscriber::fmt::layer())
                    .with(env_filter)
                    .try_init();
            }
            LogFormat::Compact => {
                let _ = tracing_subscriber::registry()
                    .with(tracing_subscriber::fmt::layer().compact())
                    .with(env_filter)
                    .try_init();
            }
            LogFormat::Pretty => {
                let _ = tracing_subscriber::registry()
                    .with(tracing_subscriber::fmt::layer().pretty())
                    .with(env_filter)
                    .try_init();
            }
        }
    }
}

///
/// Parses a configuration string with references to environment variables
/// into a Config struct by substituting the environment variables and then
/// parsing the resulting TOML.
///
impl FromStr for Config {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self> {
        let config_file = replace_handlebars_with_env(s);
        let config = toml::from_str::<Config>(&config_file)?;
        Ok(config)
    }
}
