//! Diesel models for registered databases.

use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::database::Database as DomainDatabase;
use crate::domain::types::{DatabaseId, DatabaseName, TypeConstraintError};

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = crate::schema::databases)]
/// Diesel model for [`crate::domain::database::Database`].
pub struct Database {
    pub id: Vec<u8>,
    pub name: String,
    pub pg_version: String,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::databases)]
/// Insertable form of [`Database`].
pub struct NewDatabase<'a> {
    pub id: &'a [u8],
    pub name: &'a str,
    pub pg_version: &'a str,
}

impl TryFrom<Database> for DomainDatabase {
    type Error = TypeConstraintError;

    fn try_from(db: Database) -> Result<Self, Self::Error> {
        Ok(Self {
            id: DatabaseId::from_bytes(&db.id)?,
            name: DatabaseName::new(db.name)?,
            pg_version: db.pg_version,
        })
    }
}

impl<'a> From<&'a DomainDatabase> for NewDatabase<'a> {
    fn from(db: &'a DomainDatabase) -> Self {
        Self {
            id: db.id.as_bytes(),
            name: db.name.as_str(),
            pg_version: db.pg_version.as_str(),
        }
    }
}
