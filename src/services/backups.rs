//! Services handling backup task listing, creation and duplication.

use std::collections::HashMap;

use crate::domain::backup::{Backup, NewBackup};
use crate::domain::types::{BackupId, TimeZoneName};
use crate::dto::backups::{
    BackupFormData, BackupFormValues, BackupRow, BackupsPageData, time_zone_options,
};
use crate::dto::executions::destination_label;
use crate::forms::backups::CreateBackupForm;
use crate::repository::{BackupReader, BackupWriter, DatabaseReader, DestinationReader};
use crate::services::{ServiceError, ServiceResult};

/// Loads every backup task with the names of its database and destination.
pub fn list_backups<R>(repo: &R) -> ServiceResult<BackupsPageData>
where
    R: BackupReader + DatabaseReader + DestinationReader + ?Sized,
{
    let backups = repo.list_backups().map_err(|err| {
        log::error!("Failed to list backups: {err}");
        err
    })?;

    let databases: HashMap<_, _> = repo
        .list_databases()?
        .into_iter()
        .map(|db| (db.id, db.name.into_inner()))
        .collect();
    let destinations: HashMap<_, _> = repo
        .list_destinations()?
        .into_iter()
        .map(|dest| (dest.id, dest.name.into_inner()))
        .collect();

    let backups = backups
        .into_iter()
        .map(|backup| {
            let destination_name = backup
                .target
                .destination_id()
                .and_then(|id| destinations.get(&id))
                .map(String::as_str);
            BackupRow {
                id: backup.id.to_string(),
                database_name: databases
                    .get(&backup.database_id)
                    .cloned()
                    .unwrap_or_default(),
                destination: destination_label(backup.target.is_local(), destination_name),
                name: backup.name.into_inner(),
                cron_expression: backup.cron_expression.into_inner(),
                time_zone: backup.time_zone.into_inner(),
                is_active: backup.is_active,
                retention_days: backup.retention_days.get(),
            }
        })
        .collect();

    Ok(BackupsPageData { backups })
}

fn load_form<R>(repo: &R, values: BackupFormValues) -> ServiceResult<BackupFormData>
where
    R: DatabaseReader + DestinationReader + ?Sized,
{
    let databases = repo.list_databases().map_err(|err| {
        log::error!("Failed to list databases: {err}");
        err
    })?;
    let destinations = repo.list_destinations().map_err(|err| {
        log::error!("Failed to list destinations: {err}");
        err
    })?;

    Ok(BackupFormData {
        databases,
        destinations,
        time_zones: time_zone_options(),
        values,
    })
}

/// Loads the options of a blank backup task form.
pub fn load_create_form<R>(repo: &R, default_time_zone: &str) -> ServiceResult<BackupFormData>
where
    R: DatabaseReader + DestinationReader + ?Sized,
{
    let time_zone = TimeZoneName::new(default_time_zone)?;
    load_form(repo, BackupFormValues::new_task(time_zone.as_str()))
}

/// Loads the backup task form prefilled from an existing task.
///
/// A malformed id yields [`ServiceError::TypeConstraint`] and an unknown one
/// [`ServiceError::NotFound`].
pub fn load_duplicate_form<R>(repo: &R, backup_id: &str) -> ServiceResult<BackupFormData>
where
    R: BackupReader + DatabaseReader + DestinationReader + ?Sized,
{
    let backup_id = backup_id.parse::<BackupId>()?;

    let original = repo
        .get_backup_by_id(backup_id)
        .map_err(|err| {
            log::error!("Failed to fetch backup {backup_id}: {err}");
            err
        })?
        .ok_or(ServiceError::NotFound)?;

    load_form(repo, BackupFormValues::duplicate_of(&original))
}

/// Validates the submitted form and persists the new backup task.
pub fn create_backup<R>(repo: &R, form: CreateBackupForm) -> ServiceResult<Backup>
where
    R: BackupWriter + ?Sized,
{
    let new_backup = NewBackup::try_from(form)?;

    let backup = repo.create_backup(&new_backup).map_err(|err| {
        log::error!("Failed to create backup task: {err}");
        err
    })?;

    log::info!("Created backup task {} ({})", backup.name, backup.id);

    Ok(backup)
}
