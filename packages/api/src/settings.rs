//! # Application settings
//!
//! Built with the `config` crate from three layers, last one wins:
//!
//! 1. defaults (the API URL can be baked in at compile time through the
//!    `API_URL` environment variable, which is how the WASM bundle is
//!    pointed at a deployment),
//! 2. an optional `config.toml` next to the binary,
//! 3. environment variables with `_` as the nesting separator
//!    (`API_URL`, `REDIRECTS_REGISTERED`, `REDIRECTS_DASHBOARD`,
//!    `REGISTRATION_GENDER`). Native builds also read a `.env` file.
//!
//! ```toml
//! [api]
//! url = "https://login-be-n80f.onrender.com"
//!
//! [redirects]
//! registered = "login.html?registered=true"
//! dashboard = "dashboard.html"
//!
//! [registration]
//! gender = true   # reject an empty gender selection
//! ```

use config::{Config, ConfigError, Environment, File, FileFormat};
use forms::{FormConfig, Redirects, RegistrationRules};
use serde::Deserialize;

const DEFAULT_API_URL: &str = "https://login-be-n80f.onrender.com";

fn default_api_url() -> &'static str {
    option_env!("API_URL").unwrap_or(DEFAULT_API_URL)
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Api {
    pub url: String,
}

impl Default for Api {
    fn default() -> Self {
        Self {
            url: default_api_url().into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RedirectSettings {
    pub registered: String,
    pub dashboard: String,
}

impl Default for RedirectSettings {
    fn default() -> Self {
        let redirects = Redirects::default();
        Self {
            registered: redirects.registered,
            dashboard: redirects.dashboard,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Registration {
    /// Require a gender selection.
    pub gender: bool,
}

impl Default for Registration {
    fn default() -> Self {
        Self { gender: true }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Settings {
    pub api: Api,
    pub redirects: RedirectSettings,
    pub registration: Registration,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        #[cfg(not(target_arch = "wasm32"))]
        dotenvy::dotenv().ok();

        let defaults = Self::default();
        let config = Config::builder()
            .set_default("api.url", defaults.api.url)?
            .set_default("redirects.registered", defaults.redirects.registered)?
            .set_default("redirects.dashboard", defaults.redirects.dashboard)?
            .set_default("registration.gender", defaults.registration.gender)?
            .add_source(
                File::with_name("config.toml")
                    .format(FileFormat::Toml)
                    .required(false),
            )
            .add_source(Environment::default().separator("_"))
            .build()?;

        config.try_deserialize()
    }

    /// Load settings, falling back to the defaults when a source is broken.
    pub fn load() -> Self {
        Self::new().unwrap_or_else(|err| {
            tracing::warn!("invalid settings, using defaults: {}", err);
            Self::default()
        })
    }

    /// The part of the settings the form controllers consume.
    pub fn form_config(&self) -> FormConfig {
        FormConfig {
            redirects: Redirects {
                registered: self.redirects.registered.clone(),
                dashboard: self.redirects.dashboard.clone(),
            },
            registration: RegistrationRules {
                require_gender: self.registration.gender,
            },
        }
    }
}
