use diesel::prelude::*;

use crate::domain::backup::{Backup, NewBackup};
use crate::domain::types::BackupId;
use crate::models::backup::{Backup as DbBackup, NewBackup as DbNewBackup};
use crate::repository::{BackupReader, BackupWriter, DieselRepository, errors::RepositoryResult};

impl BackupReader for DieselRepository {
    fn get_backup_by_id(&self, id: BackupId) -> RepositoryResult<Option<Backup>> {
        use crate::schema::backups;

        let mut conn = self.conn()?;

        let row = backups::table
            .filter(backups::id.eq(id.as_bytes().to_vec()))
            .select(DbBackup::as_select())
            .first::<DbBackup>(&mut conn)
            .optional()?;

        match row {
            Some(row) => Ok(Some(Backup::try_from(row)?)),
            None => Ok(None),
        }
    }

    fn list_backups(&self) -> RepositoryResult<Vec<Backup>> {
        use crate::schema::backups;

        let mut conn = self.conn()?;

        let rows = backups::table
            .order((backups::name.asc(), backups::created_at.desc()))
            .select(DbBackup::as_select())
            .load::<DbBackup>(&mut conn)?;

        rows.into_iter()
            .map(|row| Backup::try_from(row).map_err(Into::into))
            .collect()
    }
}

impl BackupWriter for DieselRepository {
    fn create_backup(&self, new_backup: &NewBackup) -> RepositoryResult<Backup> {
        use crate::schema::backups;

        let mut conn = self.conn()?;

        let id = BackupId::new();
        let destination_id = new_backup.target.destination_id();
        let row = DbNewBackup::new(&id, new_backup, destination_id.as_ref());

        let created = diesel::insert_into(backups::table)
            .values(&row)
            .returning(DbBackup::as_returning())
            .get_result::<DbBackup>(&mut conn)?;

        Ok(Backup::try_from(created)?)
    }
}
