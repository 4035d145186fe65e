use serde::Deserialize;
use validator::Validate;

use crate::domain::backup::{BackupTarget, NewBackup, PgDumpOptions};
use crate::domain::types::{
    BackupName, CronExpression, DatabaseId, DestinationDir, DestinationId, MAX_RETENTION_DAYS,
    RetentionDays, TimeZoneName,
};
use crate::forms::{FormError, non_blank};

#[derive(Debug, Deserialize, Validate)]
/// Form posted by the create and duplicate backup task modals.
///
/// Boolean selects submit `"true"` or `"false"`; anything else is rejected
/// when the form is extracted.
pub struct CreateBackupForm {
    pub database_id: String,
    /// Only read when `is_local` is false.
    #[serde(default)]
    pub destination_id: Option<String>,
    pub is_local: bool,
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    #[validate(length(min = 1))]
    pub cron_expression: String,
    #[validate(length(min = 1))]
    pub time_zone: String,
    pub is_active: bool,
    #[validate(length(min = 2))]
    pub dest_dir: String,
    #[validate(range(min = 0, max = MAX_RETENTION_DAYS))]
    pub retention_days: i16,
    pub opt_data_only: bool,
    pub opt_schema_only: bool,
    pub opt_clean: bool,
    pub opt_if_exists: bool,
    pub opt_create: bool,
    pub opt_no_comments: bool,
}

impl TryFrom<CreateBackupForm> for NewBackup {
    type Error = FormError;

    fn try_from(form: CreateBackupForm) -> Result<Self, Self::Error> {
        form.validate()?;

        let database_id = form
            .database_id
            .trim()
            .parse::<DatabaseId>()
            .map_err(|_| FormError::InvalidDatabaseId)?;

        let target = if form.is_local {
            BackupTarget::Local
        } else {
            let raw = non_blank(form.destination_id.as_deref())
                .ok_or(FormError::MissingDestination)?;
            BackupTarget::Remote(
                raw.parse::<DestinationId>()
                    .map_err(|_| FormError::InvalidDestinationId)?,
            )
        };

        Ok(NewBackup {
            database_id,
            target,
            name: BackupName::new(form.name)?,
            cron_expression: CronExpression::new(form.cron_expression)?,
            time_zone: TimeZoneName::new(form.time_zone)?,
            is_active: form.is_active,
            dest_dir: DestinationDir::new(form.dest_dir)?,
            retention_days: RetentionDays::new(form.retention_days)?,
            options: PgDumpOptions {
                data_only: form.opt_data_only,
                schema_only: form.opt_schema_only,
                clean: form.opt_clean,
                if_exists: form.opt_if_exists,
                create: form.opt_create,
                no_comments: form.opt_no_comments,
            },
        })
    }
}
