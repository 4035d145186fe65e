use crate::db::{DbConnection, DbPool};
use crate::domain::backup::{Backup, NewBackup};
use crate::domain::database::Database;
use crate::domain::destination::Destination;
use crate::domain::execution::ExecutionSummary;
use crate::domain::types::{BackupId, DatabaseId, DestinationId};
use crate::repository::errors::RepositoryResult;

pub mod backup;
pub mod database;
pub mod destination;
pub mod errors;
pub mod execution;
#[cfg(feature = "test-mocks")]
pub mod mock;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pagination {
    pub page: usize,
    pub per_page: usize,
}

impl Pagination {
    /// Row offset of the first item on the page. Page `0` is treated as `1`.
    /// Saturates at `usize::MAX`, which lies past any stored row.
    pub fn offset(&self) -> usize {
        (self.page.max(1) - 1).saturating_mul(self.per_page)
    }
}

/// Filters accepted by [`ExecutionReader::list_executions`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExecutionListQuery {
    pub database_id: Option<DatabaseId>,
    pub destination_id: Option<DestinationId>,
    pub backup_id: Option<BackupId>,
    pub pagination: Option<Pagination>,
}

impl ExecutionListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn database(mut self, id: DatabaseId) -> Self {
        self.database_id = Some(id);
        self
    }

    pub fn destination(mut self, id: DestinationId) -> Self {
        self.destination_id = Some(id);
        self
    }

    pub fn backup(mut self, id: BackupId) -> Self {
        self.backup_id = Some(id);
        self
    }

    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}

pub trait DatabaseReader {
    fn list_databases(&self) -> RepositoryResult<Vec<Database>>;
}

pub trait DestinationReader {
    fn list_destinations(&self) -> RepositoryResult<Vec<Destination>>;
}

pub trait BackupReader {
    fn get_backup_by_id(&self, id: BackupId) -> RepositoryResult<Option<Backup>>;
    fn list_backups(&self) -> RepositoryResult<Vec<Backup>>;
}

pub trait BackupWriter {
    fn create_backup(&self, new_backup: &NewBackup) -> RepositoryResult<Backup>;
}

pub trait ExecutionReader {
    /// Returns the total number of matches and the requested page, newest first.
    fn list_executions(
        &self,
        query: ExecutionListQuery,
    ) -> RepositoryResult<(usize, Vec<ExecutionSummary>)>;
}

/// Diesel-backed implementation of every repository trait.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        self.pool.get().map_err(|err| {
            log::error!("Failed to get connection from pool: {err}");
            err.into()
        })
    }
}
