//! Builds the showcase service from resolved settings.

use std::sync::Arc;

use crate::config::{FetcherSettings, SettingsError};
use crate::domain::ShowcaseService;
use crate::domain::ports::FetchError;
use crate::outbound::http::{JsonPlaceholderHttpSource, JsonResourceClient, ReqresHttpSource};

/// Showcase service wired to the reqwest adapters.
pub type HttpShowcaseService = ShowcaseService<JsonPlaceholderHttpSource, ReqresHttpSource>;

/// Failures raised while wiring adapters at startup.
#[derive(Debug, thiserror::Error)]
pub enum BootstrapError {
    /// Settings could not be resolved.
    #[error(transparent)]
    Settings(#[from] SettingsError),
    /// The HTTP client could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
    /// An endpoint URL could not be derived from its base URL.
    #[error("failed to resolve endpoint: {0}")]
    Endpoint(#[from] FetchError),
}

/// Build the HTTP-backed showcase service described by `settings`.
///
/// Both adapters share one connection pool.
///
/// # Errors
///
/// Returns [`BootstrapError`] when a base URL is invalid or the client cannot
/// be constructed.
pub fn build_showcase(settings: &FetcherSettings) -> Result<HttpShowcaseService, BootstrapError> {
    let client = JsonResourceClient::new(settings.timeout())?;
    let todos = JsonPlaceholderHttpSource::with_preview_limit(
        client.clone(),
        &settings.jsonplaceholder_base_url()?,
        settings.preview_limit(),
    )?;
    let reqres = ReqresHttpSource::new(client, &settings.reqres_base_url()?)?;
    Ok(ShowcaseService::new(Arc::new(todos), Arc::new(reqres)))
}
