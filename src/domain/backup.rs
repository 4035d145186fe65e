use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{
    BackupId, BackupName, CronExpression, DatabaseId, DestinationDir, DestinationId,
    RetentionDays, TimeZoneName,
};

/// Flags forwarded to `pg_dump` when the task runs.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PgDumpOptions {
    pub data_only: bool,
    pub schema_only: bool,
    pub clean: bool,
    pub if_exists: bool,
    pub create: bool,
    pub no_comments: bool,
}

/// Where the dump file is written.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", content = "destination_id", rename_all = "snake_case")]
pub enum BackupTarget {
    /// Kept on the server's local filesystem.
    Local,
    /// Uploaded to a configured destination.
    Remote(DestinationId),
}

impl BackupTarget {
    pub fn is_local(&self) -> bool {
        matches!(self, BackupTarget::Local)
    }

    pub fn destination_id(&self) -> Option<DestinationId> {
        match self {
            BackupTarget::Local => None,
            BackupTarget::Remote(id) => Some(*id),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Backup {
    pub id: BackupId,
    pub database_id: DatabaseId,
    pub target: BackupTarget,
    pub name: BackupName,
    pub cron_expression: CronExpression,
    pub time_zone: TimeZoneName,
    pub is_active: bool,
    pub dest_dir: DestinationDir,
    pub retention_days: RetentionDays,
    pub options: PgDumpOptions,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Backup task that has not been persisted yet.
#[derive(Clone, Debug, PartialEq)]
pub struct NewBackup {
    pub database_id: DatabaseId,
    pub target: BackupTarget,
    pub name: BackupName,
    pub cron_expression: CronExpression,
    pub time_zone: TimeZoneName,
    pub is_active: bool,
    pub dest_dir: DestinationDir,
    pub retention_days: RetentionDays,
    pub options: PgDumpOptions,
}
