//! Reqwest adapters for JSONPlaceholder and Reqres.
//!
//! [`JsonResourceClient`] owns the shared fetch-and-classify step; the
//! endpoint adapters bind it to concrete URLs and implement the domain ports.

mod dto;
mod json_client;
mod jsonplaceholder_source;
mod reqres_source;

pub use json_client::{DEFAULT_TIMEOUT, JsonResourceClient};
pub use jsonplaceholder_source::{JSONPLACEHOLDER_BASE_URL, JsonPlaceholderHttpSource};
pub use reqres_source::{REQRES_BASE_URL, ReqresHttpSource};
