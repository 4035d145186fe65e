use serde::Deserialize;

use crate::domain::types::{BackupId, DatabaseId, DestinationId};
use crate::forms::{FormError, non_blank};
use crate::repository::ExecutionListQuery;

/// Raw query string of the executions table.
///
/// Values are kept as strings so that malformed input reaches the handler and
/// can be reported to the user instead of failing extraction.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct ListExecutionsQuery {
    pub database: Option<String>,
    pub destination: Option<String>,
    pub backup: Option<String>,
    pub page: Option<String>,
}

/// Parsed filters of the executions table.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ExecutionFilters {
    pub database: Option<DatabaseId>,
    pub destination: Option<DestinationId>,
    pub backup: Option<BackupId>,
}

impl ExecutionFilters {
    /// Filter pairs in the order they are appended to links.
    pub fn pairs(&self) -> Vec<(String, String)> {
        [
            ("database", self.database.map(|id| id.to_string())),
            ("destination", self.destination.map(|id| id.to_string())),
            ("backup", self.backup.map(|id| id.to_string())),
        ]
        .into_iter()
        .filter_map(|(key, value)| value.map(|value| (key.to_string(), value)))
        .collect()
    }

    /// Repository query for the given page.
    pub fn to_list_query(&self, page: usize, per_page: usize) -> ExecutionListQuery {
        let mut query = ExecutionListQuery::new().paginate(page, per_page);
        if let Some(id) = self.database {
            query = query.database(id);
        }
        if let Some(id) = self.destination {
            query = query.destination(id);
        }
        if let Some(id) = self.backup {
            query = query.backup(id);
        }
        query
    }
}

/// Validated request for one page of executions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListExecutionsPayload {
    pub filters: ExecutionFilters,
    pub page: usize,
}

impl ListExecutionsQuery {
    /// Parses only the filters, ignoring the page.
    pub fn filters(&self) -> Result<ExecutionFilters, FormError> {
        Ok(ExecutionFilters {
            database: non_blank(self.database.as_deref())
                .map(|raw| raw.parse::<DatabaseId>())
                .transpose()
                .map_err(|_| FormError::InvalidDatabaseId)?,
            destination: non_blank(self.destination.as_deref())
                .map(|raw| raw.parse::<DestinationId>())
                .transpose()
                .map_err(|_| FormError::InvalidDestinationId)?,
            backup: non_blank(self.backup.as_deref())
                .map(|raw| raw.parse::<BackupId>())
                .transpose()
                .map_err(|_| FormError::InvalidBackupId)?,
        })
    }
}

impl TryFrom<ListExecutionsQuery> for ListExecutionsPayload {
    type Error = FormError;

    fn try_from(query: ListExecutionsQuery) -> Result<Self, Self::Error> {
        let page = non_blank(query.page.as_deref())
            .and_then(|raw| raw.parse::<usize>().ok())
            .filter(|page| *page >= 1)
            .ok_or(FormError::InvalidPage)?;

        Ok(Self {
            filters: query.filters()?,
            page,
        })
    }
}
