//! Fetcher settings loaded via OrthoConfig.
//!
//! Every field is optional. Running without flags, environment variables, or
//! a configuration file targets the public JSONPlaceholder and Reqres APIs.

use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use url::Url;

use crate::domain::DEFAULT_PREVIEW_LIMIT;
use crate::outbound::http::{DEFAULT_TIMEOUT, JSONPLACEHOLDER_BASE_URL, REQRES_BASE_URL};

/// Errors raised while resolving settings into runtime values.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// A configured base URL could not be parsed.
    #[error("invalid {field} '{value}': {source}")]
    InvalidUrl {
        /// Setting name.
        field: &'static str,
        /// Raw configured value.
        value: String,
        /// Parser failure.
        #[source]
        source: url::ParseError,
    },
}

/// Configuration values for the fetcher binary.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "FETCHER")]
pub struct FetcherSettings {
    /// Override for the JSONPlaceholder base URL.
    pub jsonplaceholder_base_url: Option<String>,
    /// Override for the Reqres base URL.
    pub reqres_base_url: Option<String>,
    /// Request timeout in seconds.
    pub timeout_secs: Option<u64>,
    /// Number of todos kept from the JSONPlaceholder listing.
    pub preview_limit: Option<usize>,
    /// Emit logs as JSON lines instead of compact text.
    #[ortho_config(default = false)]
    pub log_json: bool,
}

impl FetcherSettings {
    /// Return the JSONPlaceholder base URL, falling back to the public API.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::InvalidUrl`] when the override does not parse.
    pub fn jsonplaceholder_base_url(&self) -> Result<Url, SettingsError> {
        parse_base_url(
            "jsonplaceholder_base_url",
            self.jsonplaceholder_base_url
                .as_deref()
                .unwrap_or(JSONPLACEHOLDER_BASE_URL),
        )
    }

    /// Return the Reqres base URL, falling back to the public API.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::InvalidUrl`] when the override does not parse.
    pub fn reqres_base_url(&self) -> Result<Url, SettingsError> {
        parse_base_url(
            "reqres_base_url",
            self.reqres_base_url.as_deref().unwrap_or(REQRES_BASE_URL),
        )
    }

    /// Return the request timeout, never shorter than one second.
    pub fn timeout(&self) -> Duration {
        self.timeout_secs
            .map_or(DEFAULT_TIMEOUT, |secs| Duration::from_secs(secs.max(1)))
    }

    /// Return the configured todo preview size, falling back to the default.
    pub fn preview_limit(&self) -> usize {
        self.preview_limit.unwrap_or(DEFAULT_PREVIEW_LIMIT)
    }
}

fn parse_base_url(field: &'static str, value: &str) -> Result<Url, SettingsError> {
    Url::parse(value.trim()).map_err(|source| SettingsError::InvalidUrl {
        field,
        value: value.to_owned(),
        source,
    })
}
