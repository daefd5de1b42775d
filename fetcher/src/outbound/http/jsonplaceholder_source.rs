//! JSONPlaceholder todo adapter.

use async_trait::async_trait;
use reqwest::Url;

use super::json_client::{JsonResourceClient, endpoint_url};
use crate::domain::ports::{FetchError, TodoSource};
use crate::domain::{DEFAULT_PREVIEW_LIMIT, Todo, truncate_preview};

/// Public JSONPlaceholder base URL.
pub const JSONPLACEHOLDER_BASE_URL: &str = "https://jsonplaceholder.typicode.com/";
const TODOS_PATH: &str = "todos";

/// Todo source reading `GET {base}/todos` and keeping a short preview.
#[derive(Debug, Clone)]
pub struct JsonPlaceholderHttpSource {
    client: JsonResourceClient,
    todos_url: Url,
    preview_limit: usize,
}

impl JsonPlaceholderHttpSource {
    /// Build an adapter keeping the default number of todos.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::InvalidRequest`] when the todo endpoint cannot be
    /// resolved against `base_url`.
    pub fn new(client: JsonResourceClient, base_url: &Url) -> Result<Self, FetchError> {
        Self::with_preview_limit(client, base_url, DEFAULT_PREVIEW_LIMIT)
    }

    /// Build an adapter keeping at most `preview_limit` todos.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::InvalidRequest`] when the todo endpoint cannot be
    /// resolved against `base_url`.
    pub fn with_preview_limit(
        client: JsonResourceClient,
        base_url: &Url,
        preview_limit: usize,
    ) -> Result<Self, FetchError> {
        Ok(Self {
            client,
            todos_url: endpoint_url(base_url, TODOS_PATH)?,
            preview_limit,
        })
    }

    /// Resolved todo endpoint.
    pub fn todos_url(&self) -> &Url {
        &self.todos_url
    }
}

#[async_trait]
impl TodoSource for JsonPlaceholderHttpSource {
    async fn fetch_todo_preview(&self) -> Result<Vec<Todo>, FetchError> {
        let todos: Vec<Todo> = self.client.get_json(self.todos_url.clone()).await?;
        Ok(truncate_preview(todos, self.preview_limit))
    }
}
