//! Form and query-string definitions backing the dashboard routes.

use thiserror::Error;
use validator::ValidationErrors;

use crate::domain::types::TypeConstraintError;

pub mod backups;
pub mod executions;

#[derive(Debug, Error)]
/// Errors that can occur when processing form data.
pub enum FormError {
    #[error("validation errors: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("invalid database id")]
    InvalidDatabaseId,

    #[error("invalid destination id")]
    InvalidDestinationId,

    #[error("invalid backup id")]
    InvalidBackupId,

    #[error("destination is required for remote backups")]
    MissingDestination,

    #[error("page is required and must be a positive number")]
    InvalidPage,

    #[error("{0}")]
    TypeConstraint(#[from] TypeConstraintError),
}

/// Treats absent and blank parameters the same way.
pub(crate) fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|value| !value.is_empty())
}
