//! Diesel models for backup tasks.

use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::backup::{
    Backup as DomainBackup, BackupTarget, NewBackup as DomainNewBackup, PgDumpOptions,
};
use crate::domain::types::{
    BackupId, BackupName, CronExpression, DatabaseId, DestinationDir, DestinationId,
    RetentionDays, TimeZoneName, TypeConstraintError,
};

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = crate::schema::backups)]
/// Diesel model for [`crate::domain::backup::Backup`].
pub struct Backup {
    pub id: Vec<u8>,
    pub database_id: Vec<u8>,
    pub destination_id: Option<Vec<u8>>,
    pub is_local: bool,
    pub name: String,
    pub cron_expression: String,
    pub time_zone: String,
    pub is_active: bool,
    pub dest_dir: String,
    pub retention_days: i16,
    pub opt_data_only: bool,
    pub opt_schema_only: bool,
    pub opt_clean: bool,
    pub opt_if_exists: bool,
    pub opt_create: bool,
    pub opt_no_comments: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::backups)]
/// Insertable form of [`Backup`].
pub struct NewBackup<'a> {
    pub id: &'a [u8],
    pub database_id: &'a [u8],
    pub destination_id: Option<&'a [u8]>,
    pub is_local: bool,
    pub name: &'a str,
    pub cron_expression: &'a str,
    pub time_zone: &'a str,
    pub is_active: bool,
    pub dest_dir: &'a str,
    pub retention_days: i16,
    pub opt_data_only: bool,
    pub opt_schema_only: bool,
    pub opt_clean: bool,
    pub opt_if_exists: bool,
    pub opt_create: bool,
    pub opt_no_comments: bool,
}

impl<'a> NewBackup<'a> {
    /// Borrows the domain value, storing it under `id`.
    pub fn new(
        id: &'a BackupId,
        backup: &'a DomainNewBackup,
        destination: Option<&'a DestinationId>,
    ) -> Self {
        Self {
            id: id.as_bytes(),
            database_id: backup.database_id.as_bytes(),
            destination_id: destination.map(|id| id.as_bytes().as_slice()),
            is_local: backup.target.is_local(),
            name: backup.name.as_str(),
            cron_expression: backup.cron_expression.as_str(),
            time_zone: backup.time_zone.as_str(),
            is_active: backup.is_active,
            dest_dir: backup.dest_dir.as_str(),
            retention_days: backup.retention_days.get(),
            opt_data_only: backup.options.data_only,
            opt_schema_only: backup.options.schema_only,
            opt_clean: backup.options.clean,
            opt_if_exists: backup.options.if_exists,
            opt_create: backup.options.create,
            opt_no_comments: backup.options.no_comments,
        }
    }
}

impl TryFrom<Backup> for DomainBackup {
    type Error = TypeConstraintError;

    fn try_from(backup: Backup) -> Result<Self, Self::Error> {
        let target = match (backup.is_local, backup.destination_id) {
            (true, _) => BackupTarget::Local,
            (false, Some(id)) => BackupTarget::Remote(DestinationId::from_bytes(&id)?),
            (false, None) => {
                return Err(TypeConstraintError::InvalidValue(
                    "remote backup without destination".to_string(),
                ));
            }
        };

        Ok(Self {
            id: BackupId::from_bytes(&backup.id)?,
            database_id: DatabaseId::from_bytes(&backup.database_id)?,
            target,
            name: BackupName::new(backup.name)?,
            cron_expression: CronExpression::new(backup.cron_expression)?,
            time_zone: TimeZoneName::new(backup.time_zone)?,
            is_active: backup.is_active,
            dest_dir: DestinationDir::new(backup.dest_dir)?,
            retention_days: RetentionDays::new(backup.retention_days)?,
            options: PgDumpOptions {
                data_only: backup.opt_data_only,
                schema_only: backup.opt_schema_only,
                clean: backup.opt_clean,
                if_exists: backup.opt_if_exists,
                create: backup.opt_create,
                no_comments: backup.opt_no_comments,
            },
            created_at: backup.created_at,
            updated_at: backup.updated_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    fn sample_row(is_local: bool, destination_id: Option<Vec<u8>>) -> Backup {
        let now = Utc::now().naive_utc();
        Backup {
            id: BackupId::new().as_bytes().to_vec(),
            database_id: DatabaseId::new().as_bytes().to_vec(),
            destination_id,
            is_local,
            name: "Nightly".to_string(),
            cron_expression: "0 3 * * *".to_string(),
            time_zone: "UTC".to_string(),
            is_active: true,
            dest_dir: "/nightly".to_string(),
            retention_days: 30,
            opt_data_only: false,
            opt_schema_only: true,
            opt_clean: false,
            opt_if_exists: false,
            opt_create: true,
            opt_no_comments: false,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn remote_row_converts_to_remote_target() {
        let destination = DestinationId::new();
        let row = sample_row(false, Some(destination.as_bytes().to_vec()));

        let domain = DomainBackup::try_from(row).expect("valid row");

        assert_eq!(domain.target, BackupTarget::Remote(destination));
        assert!(domain.options.schema_only);
        assert!(domain.options.create);
        assert_eq!(domain.retention_days.get(), 30);
    }

    #[test]
    fn local_row_ignores_destination() {
        let domain = DomainBackup::try_from(sample_row(true, None)).expect("valid row");
        assert_eq!(domain.target, BackupTarget::Local);
    }

    #[test]
    fn remote_row_without_destination_is_rejected() {
        assert!(DomainBackup::try_from(sample_row(false, None)).is_err());
    }

    #[test]
    fn insertable_borrows_domain_values() {
        let id = BackupId::new();
        let destination = DestinationId::new();
        let domain = DomainNewBackup {
            database_id: DatabaseId::new(),
            target: BackupTarget::Remote(destination),
            name: BackupName::new("Weekly").expect("valid name"),
            cron_expression: CronExpression::new("0 0 * * 0").expect("valid cron"),
            time_zone: TimeZoneName::new("UTC").expect("valid tz"),
            is_active: false,
            dest_dir: DestinationDir::new("/weekly").expect("valid dir"),
            retention_days: RetentionDays::new(7).expect("valid retention"),
            options: PgDumpOptions {
                clean: true,
                ..PgDumpOptions::default()
            },
        };
        let destination_id = domain.target.destination_id();

        let insertable = NewBackup::new(&id, &domain, destination_id.as_ref());

        assert_eq!(insertable.id, id.as_bytes());
        assert_eq!(insertable.destination_id, Some(destination.as_bytes().as_slice()));
        assert!(!insertable.is_local);
        assert_eq!(insertable.name, "Weekly");
        assert!(insertable.opt_clean);
        assert!(!insertable.opt_create);
    }
}
