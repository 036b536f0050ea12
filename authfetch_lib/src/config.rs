//! Client settings loaded from the environment.

use std::path::PathBuf;
use std::time::Duration;

use authfetch_api::{ClientConfig, Locale, Platform, DEFAULT_TIMEOUT};
use thiserror::Error;

pub const ENV_BASE_URL: &str = "AUTHFETCH_BASE_URL";
pub const ENV_TIMEOUT_MS: &str = "AUTHFETCH_TIMEOUT_MS";
pub const ENV_WITH_CREDENTIALS: &str = "AUTHFETCH_WITH_CREDENTIALS";
pub const ENV_PLATFORM: &str = "AUTHFETCH_PLATFORM";
pub const ENV_LOCALE: &str = "AUTHFETCH_LOCALE";
pub const ENV_TOKEN: &str = "AUTHFETCH_TOKEN";
pub const ENV_TOKEN_FILE: &str = "AUTHFETCH_TOKEN_FILE";
pub const ENV_TOKEN_ENV: &str = "AUTHFETCH_TOKEN_ENV";

/// Errors from malformed settings values.
#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("{var} must be a positive number of milliseconds, got {value:?}")]
    InvalidTimeout { var: String, value: String },
    #[error("{var} must be true or false, got {value:?}")]
    InvalidBool { var: String, value: String },
    #[error("{0}")]
    InvalidPlatform(String),
    #[error("{0}")]
    InvalidLocale(String),
}

/// Where the access token comes from.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum TokenSource {
    #[default]
    None,
    /// A literal token.
    Literal(String),
    /// A file holding the token, read on every request.
    File(PathBuf),
    /// The name of an environment variable holding the token, read on
    /// every request.
    Env(String),
}

/// Everything needed to build a client.
#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    pub base_url: String,
    pub timeout: Duration,
    pub with_credentials: bool,
    pub platform: Platform,
    pub locale: Locale,
    pub token: TokenSource,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            timeout: DEFAULT_TIMEOUT,
            with_credentials: true,
            platform: Platform::default(),
            locale: Locale::default(),
            token: TokenSource::None,
        }
    }
}

impl Settings {
    /// Loads settings from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads settings through `lookup`, which maps a variable name to its
    /// value. Unset or empty variables keep their defaults. For the token a
    /// literal wins over a file, and a file over a variable name.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut settings = Self::default();

        if let Some(base_url) = get(ENV_BASE_URL) {
            settings.base_url = base_url.trim().to_string();
        }
        if let Some(raw) = get(ENV_TIMEOUT_MS) {
            settings.timeout = parse_timeout_ms(ENV_TIMEOUT_MS, &raw)?;
        }
        if let Some(raw) = get(ENV_WITH_CREDENTIALS) {
            settings.with_credentials = parse_bool(ENV_WITH_CREDENTIALS, &raw)?;
        }
        if let Some(raw) = get(ENV_PLATFORM) {
            settings.platform = raw.parse().map_err(ConfigError::InvalidPlatform)?;
        }
        if let Some(raw) = get(ENV_LOCALE) {
            settings.locale = raw.parse().map_err(ConfigError::InvalidLocale)?;
        }
        if let Some(token) = get(ENV_TOKEN) {
            settings.token = TokenSource::Literal(token.trim().to_string());
        } else if let Some(path) = get(ENV_TOKEN_FILE) {
            settings.token = TokenSource::File(PathBuf::from(path.trim()));
        } else if let Some(var) = get(ENV_TOKEN_ENV) {
            settings.token = TokenSource::Env(var.trim().to_string());
        }

        tracing::debug!(
            "Loaded settings: base_url={:?} timeout={:?} platform={} locale={}",
            settings.base_url,
            settings.timeout,
            settings.platform,
            settings.locale
        );
        Ok(settings)
    }

    /// Transport settings for [`authfetch_api::Client`].
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::default()
            .with_base_url(&self.base_url)
            .with_timeout(self.timeout)
            .with_credentials(self.with_credentials)
    }
}

pub fn parse_timeout_ms(var: &str, raw: &str) -> Result<Duration, ConfigError> {
    match raw.trim().parse::<u64>() {
        Ok(ms) if ms > 0 => Ok(Duration::from_millis(ms)),
        _ => Err(ConfigError::InvalidTimeout {
            var: var.to_string(),
            value: raw.to_string(),
        }),
    }
}

fn parse_bool(var: &str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(ConfigError::InvalidBool {
            var: var.to_string(),
            value: raw.to_string(),
        }),
    }
}
