//! Shared helpers for fetcher integration tests.

pub mod mock_api;
