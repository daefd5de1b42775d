//! Typed fetcher for the JSONPlaceholder and Reqres sample APIs.
//!
//! Responses are decoded into typed records at the HTTP boundary and every
//! outcome is classified as success or [`domain::ports::FetchError`] before it
//! reaches the caller. The binary renders the results line by line.

pub mod bootstrap;
pub mod config;
pub mod domain;
pub mod inbound;
pub mod outbound;
