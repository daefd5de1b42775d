//! Outbound adapters for the remote sample APIs.

pub mod http;
