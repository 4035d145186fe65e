//! DTO modules that bridge services with templates.

pub mod backups;
pub mod executions;
