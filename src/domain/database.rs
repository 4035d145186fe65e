use serde::{Deserialize, Serialize};

use crate::domain::types::{DatabaseId, DatabaseName};

/// PostgreSQL database registered for backups.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Database {
    pub id: DatabaseId,
    pub name: DatabaseName,
    pub pg_version: String,
}
