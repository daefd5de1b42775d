//! Driven ports for the remote sample APIs.

mod fetch_error;
mod reqres_source;
mod todo_source;

pub use fetch_error::FetchError;
#[cfg(test)]
pub use reqres_source::MockReqresSource;
pub use reqres_source::{FixtureReqresSource, ReqresSource};
#[cfg(test)]
pub use todo_source::MockTodoSource;
pub use todo_source::{FixtureTodoSource, TodoSource};
