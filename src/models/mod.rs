//! Database models shared across the client registry repository.

pub mod client;
pub mod client_event;
#[cfg(feature = "server")]
pub mod config;
