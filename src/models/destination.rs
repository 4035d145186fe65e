//! Diesel models for storage destinations.

use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::destination::Destination as DomainDestination;
use crate::domain::types::{DestinationId, DestinationName, TypeConstraintError};

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = crate::schema::destinations)]
/// Diesel model for [`crate::domain::destination::Destination`].
pub struct Destination {
    pub id: Vec<u8>,
    pub name: String,
    pub bucket_name: String,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::destinations)]
/// Insertable form of [`Destination`].
pub struct NewDestination<'a> {
    pub id: &'a [u8],
    pub name: &'a str,
    pub bucket_name: &'a str,
}

impl TryFrom<Destination> for DomainDestination {
    type Error = TypeConstraintError;

    fn try_from(destination: Destination) -> Result<Self, Self::Error> {
        Ok(Self {
            id: DestinationId::from_bytes(&destination.id)?,
            name: DestinationName::new(destination.name)?,
            bucket_name: destination.bucket_name,
        })
    }
}

impl<'a> From<&'a DomainDestination> for NewDestination<'a> {
    fn from(destination: &'a DomainDestination) -> Self {
        Self {
            id: destination.id.as_bytes(),
            name: destination.name.as_str(),
            bucket_name: destination.bucket_name.as_str(),
        }
    }
}
