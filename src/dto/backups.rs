//! View models for the backup task pages and forms.

use serde::Serialize;

use crate::domain::backup::{Backup, PgDumpOptions};
use crate::domain::database::Database;
use crate::domain::destination::Destination;

/// Values the backup task form is rendered with.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct BackupFormValues {
    pub database_id: Option<String>,
    pub destination_id: Option<String>,
    pub is_local: bool,
    pub name: String,
    pub cron_expression: String,
    pub time_zone: String,
    pub is_active: bool,
    pub dest_dir: String,
    pub retention_days: Option<i16>,
    pub options: PgDumpOptions,
}

impl BackupFormValues {
    /// Blank form for a new task.
    pub fn new_task(default_time_zone: &str) -> Self {
        Self {
            database_id: None,
            destination_id: None,
            is_local: false,
            name: String::new(),
            cron_expression: String::new(),
            time_zone: default_time_zone.to_string(),
            is_active: true,
            dest_dir: String::new(),
            retention_days: None,
            options: PgDumpOptions::default(),
        }
    }

    /// Form prefilled from `backup`. The copy starts inactive.
    pub fn duplicate_of(backup: &Backup) -> Self {
        Self {
            database_id: Some(backup.database_id.to_string()),
            destination_id: backup.target.destination_id().map(|id| id.to_string()),
            is_local: backup.target.is_local(),
            name: backup.name.copy_name(),
            cron_expression: backup.cron_expression.to_string(),
            time_zone: backup.time_zone.to_string(),
            is_active: false,
            dest_dir: backup.dest_dir.to_string(),
            retention_days: Some(backup.retention_days.get()),
            options: backup.options,
        }
    }
}

/// Data required to render the backup task form partial.
#[derive(Debug)]
pub struct BackupFormData {
    pub databases: Vec<Database>,
    pub destinations: Vec<Destination>,
    pub time_zones: Vec<&'static str>,
    pub values: BackupFormValues,
}

/// Every IANA zone name offered in the time zone select.
pub fn time_zone_options() -> Vec<&'static str> {
    chrono_tz::TZ_VARIANTS.iter().map(|tz| tz.name()).collect()
}

/// One row of the backup tasks table.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct BackupRow {
    pub id: String,
    pub name: String,
    pub database_name: String,
    pub destination: String,
    pub cron_expression: String,
    pub time_zone: String,
    pub is_active: bool,
    pub retention_days: i16,
}

/// Data required to render the backup tasks page.
#[derive(Debug)]
pub struct BackupsPageData {
    pub backups: Vec<BackupRow>,
}
