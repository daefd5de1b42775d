//! Showcase service running the three sample fetches.
//!
//! The todo preview runs alongside the Reqres pair. Within the pair, colours
//! are requested only after the users request resolves. Each result is kept
//! independently so one failure never hides the others.

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::ports::{FetchError, ReqresSource, TodoSource};
use crate::domain::{ColorPage, Todo, UserPage};

/// Independent outcomes of the three sample fetches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowcaseReport {
    /// JSONPlaceholder todo preview.
    pub todos: Result<Vec<Todo>, FetchError>,
    /// First page of Reqres users.
    pub users: Result<UserPage, FetchError>,
    /// First page of Reqres colours.
    pub colors: Result<ColorPage, FetchError>,
}

/// Service wiring the todo and Reqres sources together.
#[derive(Clone)]
pub struct ShowcaseService<T, R> {
    todos: Arc<T>,
    reqres: Arc<R>,
}

impl<T, R> ShowcaseService<T, R> {
    /// Create a new service with the given sources.
    pub fn new(todos: Arc<T>, reqres: Arc<R>) -> Self {
        Self { todos, reqres }
    }
}

impl<T, R> ShowcaseService<T, R>
where
    T: TodoSource,
    R: ReqresSource,
{
    /// Run all fetches and collect their outcomes.
    pub async fn run(&self) -> ShowcaseReport {
        let (todos, (users, colors)) = tokio::join!(self.todo_preview(), self.reqres_pages());
        ShowcaseReport {
            todos,
            users,
            colors,
        }
    }

    async fn todo_preview(&self) -> Result<Vec<Todo>, FetchError> {
        let result = self.todos.fetch_todo_preview().await;
        match &result {
            Ok(todos) => info!(resource = "todos", count = todos.len(), "fetched todo preview"),
            Err(error) => warn!(resource = "todos", error = %error, "todo preview failed"),
        }
        result
    }

    async fn reqres_pages(
        &self,
    ) -> (Result<UserPage, FetchError>, Result<ColorPage, FetchError>) {
        let users = self.reqres.fetch_users().await;
        log_page("users", &users);
        let colors = self.reqres.fetch_colors().await;
        log_page("colors", &colors);
        (users, colors)
    }
}

fn log_page<P>(resource: &'static str, result: &Result<pagination::Paged<P>, FetchError>) {
    match result {
        Ok(page) => info!(
            resource,
            page = page.page,
            total = page.total,
            count = page.len(),
            last_page = page.is_last_page(),
            "fetched page"
        ),
        Err(error) => warn!(resource, error = %error, "page fetch failed"),
    }
}

#[cfg(test)]
#[path = "showcase_tests.rs"]
mod tests;
