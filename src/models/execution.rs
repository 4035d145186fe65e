//! Diesel models for backup executions.

use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::execution::{ExecutionStatus, ExecutionSummary as DomainExecutionSummary};
use crate::domain::types::{BackupId, ExecutionId, TypeConstraintError};

#[derive(Insertable)]
#[diesel(table_name = crate::schema::executions)]
/// Insertable execution record, written by the backup runner.
pub struct NewExecution<'a> {
    pub id: &'a [u8],
    pub backup_id: &'a [u8],
    pub status: &'a str,
    pub message: Option<&'a str>,
    pub path: Option<&'a str>,
    pub file_size: Option<i64>,
    pub started_at: NaiveDateTime,
    pub finished_at: Option<NaiveDateTime>,
}

/// Row produced by the executions listing join.
#[derive(Debug, Clone, Queryable)]
pub struct ExecutionSummary {
    pub id: Vec<u8>,
    pub backup_id: Vec<u8>,
    pub status: String,
    pub message: Option<String>,
    pub file_size: Option<i64>,
    pub started_at: NaiveDateTime,
    pub finished_at: Option<NaiveDateTime>,
    pub backup_name: String,
    pub backup_is_local: bool,
    pub database_name: String,
    pub destination_name: Option<String>,
}

impl TryFrom<ExecutionSummary> for DomainExecutionSummary {
    type Error = TypeConstraintError;

    fn try_from(row: ExecutionSummary) -> Result<Self, Self::Error> {
        Ok(Self {
            id: ExecutionId::from_bytes(&row.id)?,
            backup_id: BackupId::from_bytes(&row.backup_id)?,
            status: row.status.parse::<ExecutionStatus>()?,
            message: row.message,
            backup_name: row.backup_name,
            backup_is_local: row.backup_is_local,
            database_name: row.database_name,
            destination_name: row.destination_name,
            file_size: row.file_size,
            started_at: row.started_at,
            finished_at: row.finished_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    #[test]
    fn summary_row_into_domain() {
        let now = Utc::now().naive_utc();
        let id = ExecutionId::new();
        let backup_id = BackupId::new();
        let row = ExecutionSummary {
            id: id.as_bytes().to_vec(),
            backup_id: backup_id.as_bytes().to_vec(),
            status: "success".to_string(),
            message: None,
            file_size: Some(2048),
            started_at: now,
            finished_at: Some(now),
            backup_name: "Nightly".to_string(),
            backup_is_local: false,
            database_name: "app".to_string(),
            destination_name: Some("s3".to_string()),
        };

        let domain = DomainExecutionSummary::try_from(row).expect("valid row");

        assert_eq!(domain.id, id);
        assert_eq!(domain.backup_id, backup_id);
        assert_eq!(domain.status, ExecutionStatus::Success);
        assert_eq!(domain.destination_name.as_deref(), Some("s3"));
    }

    #[test]
    fn unknown_status_is_rejected() {
        let now = Utc::now().naive_utc();
        let row = ExecutionSummary {
            id: ExecutionId::new().as_bytes().to_vec(),
            backup_id: BackupId::new().as_bytes().to_vec(),
            status: "queued".to_string(),
            message: None,
            file_size: None,
            started_at: now,
            finished_at: None,
            backup_name: "Nightly".to_string(),
            backup_is_local: true,
            database_name: "app".to_string(),
            destination_name: None,
        };

        assert!(DomainExecutionSummary::try_from(row).is_err());
    }
}
