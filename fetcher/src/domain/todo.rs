//! JSONPlaceholder todo records.

use serde::{Deserialize, Serialize};

/// Number of todos kept from the JSONPlaceholder listing.
pub const DEFAULT_PREVIEW_LIMIT: usize = 3;

/// One todo item as served by JSONPlaceholder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    /// Owning user.
    #[serde(rename = "userId")]
    pub user_id: i64,
    /// Todo identifier.
    pub id: i64,
    /// Free-form title.
    pub title: String,
    /// Completion flag.
    pub completed: bool,
}

/// Keep the first `limit` todos in server order.
///
/// Shorter listings are returned unchanged.
///
/// # Examples
///
/// ```
/// use fetcher::domain::{Todo, truncate_preview};
///
/// let todos: Vec<Todo> = Vec::new();
/// assert!(truncate_preview(todos, 3).is_empty());
/// ```
#[must_use]
pub fn truncate_preview(mut todos: Vec<Todo>, limit: usize) -> Vec<Todo> {
    todos.truncate(limit);
    todos
}
