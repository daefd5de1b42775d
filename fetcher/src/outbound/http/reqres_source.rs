//! Reqres users and colours adapter.

use async_trait::async_trait;
use reqwest::Url;

use super::json_client::{JsonResourceClient, endpoint_url};
use crate::domain::ports::{FetchError, ReqresSource};
use crate::domain::{ColorPage, UserPage};

/// Public Reqres base URL.
pub const REQRES_BASE_URL: &str = "https://reqres.in/";
const USERS_PATH: &str = "api/users";
const COLORS_PATH: &str = "api/colors";

/// Reqres source reading `GET {base}/api/users` and `GET {base}/api/colors`.
#[derive(Debug, Clone)]
pub struct ReqresHttpSource {
    client: JsonResourceClient,
    users_url: Url,
    colors_url: Url,
}

impl ReqresHttpSource {
    /// Build an adapter for the Reqres instance at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::InvalidRequest`] when either endpoint cannot be
    /// resolved against `base_url`.
    pub fn new(client: JsonResourceClient, base_url: &Url) -> Result<Self, FetchError> {
        Ok(Self {
            client,
            users_url: endpoint_url(base_url, USERS_PATH)?,
            colors_url: endpoint_url(base_url, COLORS_PATH)?,
        })
    }

    /// Resolved users endpoint.
    pub fn users_url(&self) -> &Url {
        &self.users_url
    }

    /// Resolved colours endpoint.
    pub fn colors_url(&self) -> &Url {
        &self.colors_url
    }
}

#[async_trait]
impl ReqresSource for ReqresHttpSource {
    async fn fetch_users(&self) -> Result<UserPage, FetchError> {
        self.client.get_json(self.users_url.clone()).await
    }

    async fn fetch_colors(&self) -> Result<ColorPage, FetchError> {
        self.client.get_json(self.colors_url.clone()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outbound::http::DEFAULT_TIMEOUT;

    #[test]
    fn resolves_both_endpoints_from_the_public_base() {
        let client = JsonResourceClient::new(DEFAULT_TIMEOUT).expect("client should build");
        let base = Url::parse(REQRES_BASE_URL).expect("constant base URL");
        let source = ReqresHttpSource::new(client, &base).expect("endpoints should resolve");

        assert_eq!(source.users_url().as_str(), "https://reqres.in/api/users");
        assert_eq!(source.colors_url().as_str(), "https://reqres.in/api/colors");
    }
}
