//! Database models shared across the client repository.

pub mod client;
pub mod config;
