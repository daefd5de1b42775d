//! Driven port for the JSONPlaceholder todo listing.

use async_trait::async_trait;

use super::FetchError;
use crate::domain::Todo;

/// Port for fetching a short preview of the todo listing.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TodoSource: Send + Sync {
    /// Fetch the first few todos in server order.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use fetcher::domain::ports::{FixtureTodoSource, TodoSource};
    ///
    /// let todos = FixtureTodoSource.fetch_todo_preview().await?;
    /// assert!(todos.is_empty());
    /// # Ok::<(), fetcher::domain::ports::FetchError>(())
    /// ```
    async fn fetch_todo_preview(&self) -> Result<Vec<Todo>, FetchError>;
}

/// Fixture implementation returning no todos.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureTodoSource;

#[async_trait]
impl TodoSource for FixtureTodoSource {
    async fn fetch_todo_preview(&self) -> Result<Vec<Todo>, FetchError> {
        Ok(Vec::new())
    }
}
