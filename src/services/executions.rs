//! Services backing the backup executions table.

use crate::domain::types::TimeZoneName;
use crate::dto::executions::{ExecutionRow, ExecutionsPageData, ExecutionsShellData};
use crate::forms::executions::{ListExecutionsPayload, ListExecutionsQuery};
use crate::models::config::ServerConfig;
use crate::pagination::{PageQuery, Paginated, page_link};
use crate::repository::ExecutionReader;
use crate::services::ServiceResult;

/// Rows shown on each page of the executions table.
pub const EXECUTIONS_PER_PAGE: usize = 20;

/// Endpoint returning the executions table body.
pub const EXECUTIONS_LIST_PATH: &str = "/dashboard/executions/list";

/// Loads one page of executions together with its pagination widget.
pub fn list_executions<R>(
    repo: &R,
    query: ListExecutionsQuery,
    config: &ServerConfig,
) -> ServiceResult<ExecutionsPageData>
where
    R: ExecutionReader + ?Sized,
{
    let payload = ListExecutionsPayload::try_from(query)?;
    let tz = TimeZoneName::new(config.default_time_zone.as_str())?.tz();

    let (total, summaries) = repo
        .list_executions(
            payload
                .filters
                .to_list_query(payload.page, EXECUTIONS_PER_PAGE),
        )
        .map_err(|err| {
            log::error!("Failed to list executions: {err}");
            err
        })?;

    let page_query = PageQuery {
        current_page: payload.page,
        total_pages: total.div_ceil(EXECUTIONS_PER_PAGE),
        filters: payload.filters.pairs(),
    };

    let rows = summaries
        .iter()
        .map(|summary| ExecutionRow::new(summary, tz))
        .collect();

    Ok(ExecutionsPageData {
        executions: Paginated::new(
            rows,
            &page_query,
            config.pagination_window,
            EXECUTIONS_LIST_PATH,
        ),
    })
}

/// Validates the filters of the executions page and builds the URL its
/// table body is loaded from.
pub fn load_executions_page(query: &ListExecutionsQuery) -> ServiceResult<ExecutionsShellData> {
    let filters = query.filters()?;

    Ok(ExecutionsShellData {
        list_url: page_link(EXECUTIONS_LIST_PATH, 1, &filters.pairs()),
    })
}
