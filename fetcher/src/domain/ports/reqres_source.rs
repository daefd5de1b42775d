//! Driven port for the Reqres user and colour listings.

use async_trait::async_trait;

use super::FetchError;
use crate::domain::{ColorPage, UserPage};

/// Port for fetching the first page of Reqres users and colours.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReqresSource: Send + Sync {
    /// Fetch the first page of users.
    async fn fetch_users(&self) -> Result<UserPage, FetchError>;

    /// Fetch the first page of colours.
    async fn fetch_colors(&self) -> Result<ColorPage, FetchError>;
}

/// Fixture implementation returning empty first pages.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureReqresSource;

fn empty_page<T>() -> pagination::Paged<T> {
    pagination::Paged {
        page: 1,
        per_page: 0,
        total: 0,
        total_pages: 0,
        data: Vec::new(),
    }
}

#[async_trait]
impl ReqresSource for FixtureReqresSource {
    async fn fetch_users(&self) -> Result<UserPage, FetchError> {
        Ok(empty_page())
    }

    async fn fetch_colors(&self) -> Result<ColorPage, FetchError> {
        Ok(empty_page())
    }
}
