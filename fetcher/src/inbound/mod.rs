//! Inbound adapters driving the domain from the process entry point.

pub mod console;
