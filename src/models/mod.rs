//! Database models backing the dashboard repository.

pub mod backup;
#[cfg(feature = "server")]
pub mod config;
pub mod database;
pub mod destination;
pub mod execution;
