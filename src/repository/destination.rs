use diesel::prelude::*;

use crate::domain::destination::Destination;
use crate::models::destination::Destination as DbDestination;
use crate::repository::{DestinationReader, DieselRepository, errors::RepositoryResult};

impl DestinationReader for DieselRepository {
    fn list_destinations(&self) -> RepositoryResult<Vec<Destination>> {
        use crate::schema::destinations;

        let mut conn = self.conn()?;

        let rows = destinations::table
            .order(destinations::name.asc())
            .select(DbDestination::as_select())
            .load::<DbDestination>(&mut conn)?;

        rows.into_iter()
            .map(|row| Destination::try_from(row).map_err(Into::into))
            .collect()
    }
}
