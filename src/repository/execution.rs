use diesel::prelude::*;
use diesel::sqlite::Sqlite;

use crate::domain::execution::ExecutionSummary;
use crate::models::execution::ExecutionSummary as DbExecutionSummary;
use crate::repository::{
    DieselRepository, ExecutionListQuery, ExecutionReader,
    errors::{RepositoryError, RepositoryResult},
};

fn to_sql_int(value: usize) -> RepositoryResult<i64> {
    i64::try_from(value)
        .map_err(|_| RepositoryError::Unexpected(format!("{value} does not fit a SQL integer")))
}

impl ExecutionReader for DieselRepository {
    fn list_executions(
        &self,
        query: ExecutionListQuery,
    ) -> RepositoryResult<(usize, Vec<ExecutionSummary>)> {
        use crate::schema::{backups, databases, destinations, executions};

        let mut conn = self.conn()?;

        let query_builder = || {
            let mut items = executions::table
                .inner_join(backups::table.inner_join(databases::table))
                .left_join(
                    destinations::table
                        .on(backups::destination_id.eq(destinations::id.nullable())),
                )
                .into_boxed::<Sqlite>();

            if let Some(database_id) = &query.database_id {
                items = items.filter(backups::database_id.eq(database_id.as_bytes().to_vec()));
            }
            if let Some(destination_id) = &query.destination_id {
                items = items.filter(
                    backups::destination_id.eq(destination_id.as_bytes().to_vec()),
                );
            }
            if let Some(backup_id) = &query.backup_id {
                items = items.filter(executions::backup_id.eq(backup_id.as_bytes().to_vec()));
            }
            items
        };

        let total = query_builder().count().get_result::<i64>(&mut conn)?;
        let total = usize::try_from(total).map_err(|_| {
            RepositoryError::Unexpected(format!("negative execution count {total}"))
        })?;

        // Pages past the end have no rows to load.
        if query
            .pagination
            .as_ref()
            .is_some_and(|pagination| pagination.offset() >= total)
        {
            return Ok((total, vec![]));
        }

        let mut items = query_builder()
            .select((
                executions::id,
                executions::backup_id,
                executions::status,
                executions::message,
                executions::file_size,
                executions::started_at,
                executions::finished_at,
                backups::name,
                backups::is_local,
                databases::name,
                destinations::name.nullable(),
            ))
            .order_by(executions::started_at.desc())
            .then_order_by(executions::id.desc());

        if let Some(pagination) = &query.pagination {
            items = items
                .offset(to_sql_int(pagination.offset())?)
                .limit(to_sql_int(pagination.per_page).unwrap_or(i64::MAX));
        }

        let rows = items.load::<DbExecutionSummary>(&mut conn)?;

        let summaries = rows
            .into_iter()
            .map(ExecutionSummary::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((total, summaries))
    }
}
