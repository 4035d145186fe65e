use diesel::prelude::*;

use crate::domain::database::Database;
use crate::models::database::Database as DbDatabase;
use crate::repository::{DatabaseReader, DieselRepository, errors::RepositoryResult};

impl DatabaseReader for DieselRepository {
    fn list_databases(&self) -> RepositoryResult<Vec<Database>> {
        use crate::schema::databases;

        let mut conn = self.conn()?;

        let rows = databases::table
            .order(databases::name.asc())
            .select(DbDatabase::as_select())
            .load::<DbDatabase>(&mut conn)?;

        rows.into_iter()
            .map(|row| Database::try_from(row).map_err(Into::into))
            .collect()
    }
}
