//! Mock repository implementation for isolating services in tests.

use mockall::mock;

use crate::domain::backup::{Backup, NewBackup};
use crate::domain::database::Database;
use crate::domain::destination::Destination;
use crate::domain::execution::ExecutionSummary;
use crate::domain::types::BackupId;
use crate::repository::errors::RepositoryResult;
use crate::repository::{
    BackupReader, BackupWriter, DatabaseReader, DestinationReader, ExecutionListQuery,
    ExecutionReader,
};

mock! {
    pub Repository {}

    impl DatabaseReader for Repository {
        fn list_databases(&self) -> RepositoryResult<Vec<Database>>;
    }

    impl DestinationReader for Repository {
        fn list_destinations(&self) -> RepositoryResult<Vec<Destination>>;
    }

    impl BackupReader for Repository {
        fn get_backup_by_id(&self, id: BackupId) -> RepositoryResult<Option<Backup>>;
        fn list_backups(&self) -> RepositoryResult<Vec<Backup>>;
    }

    impl BackupWriter for Repository {
        fn create_backup(&self, new_backup: &NewBackup) -> RepositoryResult<Backup>;
    }

    impl ExecutionReader for Repository {
        fn list_executions(
            &self,
            query: ExecutionListQuery,
        ) -> RepositoryResult<(usize, Vec<ExecutionSummary>)>;
    }
}
