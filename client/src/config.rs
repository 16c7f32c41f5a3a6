//! Client configuration loaded via OrthoConfig.

use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use url::Url;

const DEFAULT_BASE_URL: &str = "https://api.saltline.example";
const DEFAULT_TIMEOUT_SECONDS: u64 = 30;
const DEFAULT_LOGIN_PATH: &str = "/login";

/// Configuration values for the access layer and its transports.
///
/// The base URL is the single configured host: the primary and fallback
/// transports both resolve request paths against it.
#[derive(Debug, Clone, Default, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "SALTLINE")]
pub struct ClientSettings {
    /// Base URL of the booking backend.
    pub base_url: Option<String>,
    /// Request timeout in seconds, applied to both transports.
    pub timeout_seconds: Option<u64>,
    /// Path the host shell redirects to once a session is rejected.
    pub login_path: Option<String>,
}

/// Errors produced while validating settings.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    /// The configured base URL is not a valid absolute URL.
    #[error("invalid base URL {value:?}: {message}")]
    InvalidBaseUrl {
        /// The rejected value.
        value: String,
        /// Parser diagnostic.
        message: String,
    },
}

impl ClientSettings {
    /// Return the configured base URL, falling back to the default host.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::InvalidBaseUrl`] when the configured value
    /// does not parse as an absolute URL.
    pub fn base_url(&self) -> Result<Url, SettingsError> {
        let raw = self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL);
        Url::parse(raw).map_err(|error| SettingsError::InvalidBaseUrl {
            value: raw.to_owned(),
            message: error.to_string(),
        })
    }

    /// Return the configured request timeout, falling back to 30 seconds.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds.unwrap_or(DEFAULT_TIMEOUT_SECONDS))
    }

    /// Return the configured login path, falling back to the default.
    pub fn login_path(&self) -> &str {
        self.login_path.as_deref().unwrap_or(DEFAULT_LOGIN_PATH)
    }
}
