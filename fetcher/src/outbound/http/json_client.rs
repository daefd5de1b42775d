//! Reqwest-backed JSON fetcher shared by the endpoint adapters.
//!
//! This client owns transport details only: one GET per call, timeout and
//! transport error mapping, and classification of the body into the success
//! shape or the server's error message. It never retries and never logs.

use std::time::Duration;

use reqwest::{Client, Url, header};
use serde::de::DeserializeOwned;

use super::dto::decode_outcome;
use crate::domain::ports::FetchError;

/// Request timeout applied when no override is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
const DEFAULT_USER_AGENT: &str = concat!("fetcher/", env!("CARGO_PKG_VERSION"));

/// Typed GET client classifying every response as success or [`FetchError`].
#[derive(Debug, Clone)]
pub struct JsonResourceClient {
    client: Client,
}

impl JsonResourceClient {
    /// Build a client with an explicit request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(DEFAULT_USER_AGENT)
            .build()?;
        Ok(Self { client })
    }

    /// Fetch `url` and decode the body as `T`.
    ///
    /// A non-success status whose body carries a `message` field becomes
    /// [`FetchError::Application`]. Any other body is decoded as `T`.
    ///
    /// ```rust,ignore
    /// let todos: Vec<Todo> = client.get_json(url).await?;
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Transport`] or [`FetchError::Timeout`] when no
    /// complete response arrives, [`FetchError::Application`] for server error
    /// bodies, and [`FetchError::Decode`] when the body does not fit `T`.
    pub async fn get_json<T>(&self, url: Url) -> Result<T, FetchError>
    where
        T: DeserializeOwned,
    {
        let response = self
            .client
            .get(url)
            .header(header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;
        decode_outcome(status, body.as_ref())?.into_result()
    }
}

/// Resolve `path` beneath `base`, treating `base` as a directory.
pub(super) fn endpoint_url(base: &Url, path: &str) -> Result<Url, FetchError> {
    if !matches!(base.scheme(), "http" | "https") {
        return Err(FetchError::invalid_request(format!(
            "base URL '{base}' must use http or https"
        )));
    }

    let mut directory = base.clone();
    if !directory.path().ends_with('/') {
        let with_slash = format!("{}/", directory.path());
        directory.set_path(&with_slash);
    }
    directory.join(path).map_err(|error| {
        FetchError::invalid_request(format!("cannot resolve '{path}' against '{base}': {error}"))
    })
}

fn map_transport_error(error: reqwest::Error) -> FetchError {
    if error.is_timeout() {
        FetchError::timeout(error.to_string())
    } else {
        FetchError::transport(error.to_string())
    }
}
