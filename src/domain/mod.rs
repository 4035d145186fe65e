//! Domain aggregates exposed by the dashboard service layer.

pub mod backup;
pub mod database;
pub mod destination;
pub mod execution;
pub mod types;
