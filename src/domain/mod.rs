//! Domain records exposed by the client registry service layer.

pub mod client;
pub mod types;
