use {crate::Result, serde::Deserialize};

///
/// Route classification table for the authorization gate.
///
/// Three named canonical routes are supplied here; every canonical path that
/// does not match the login or register routes is treated as protected.
/// Paths are matched by prefix, so `/login/reset` classifies like `/login`.
///
#[derive(Debug, Clone, Deserialize)]
pub struct RoutesConfig {
    /// Canonical home route. Target of the "already authenticated" redirect
    /// away from the auth entry pages. The default `home` is "/".
    #[serde(default = "RoutesConfig::default_home")]
    pub home: String,

    /// Canonical login route. Target of the "authentication required"
    /// redirect. The default `login` is "/login".
    #[serde(default = "RoutesConfig::default_login")]
    pub login: String,

    /// Canonical register route. Classified together with the login route.
    /// The default `register` is "/register".
    #[serde(default = "RoutesConfig::default_register")]
    pub register: String,
}

impl Default for RoutesConfig {
    fn default() -> Self {
        Self {
            home: Self::default_home(),
            login: Self::default_login(),
            register: Self::default_register(),
        }
    }
}

impl RoutesConfig {
    fn default_home() -> String {
        "/".into()
    }

    fn default_login() -> String {
        "/login".into()
    }

    fn default_register() -> String {
        "/register".into()
    }

    pub fn validate(&self) -> Result<()> {
        for (name, route) in [
            ("home", &self.home),
            ("login", &self.login),
            ("register", &self.register),
        ] {
            if !route.starts_with('/') {
                return Err(crate::Error::invalid_input(format!(
                    "Route '{name}' must be a canonical path starting with '/', got {route:?}",
                )));
            }
        }
        Ok(())
    }
}
