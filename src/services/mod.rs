//! Business logic invoked by the HTTP handlers.

pub mod backups;
pub mod errors;
pub mod executions;

pub use errors::{ServiceError, ServiceResult};
