use std::fmt::Display;
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{BackupId, ExecutionId, TypeConstraintError};

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ExecutionStatus {
    Running,
    Success,
    Failed,
    Deleted,
}

impl ExecutionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExecutionStatus::Running => "running",
            ExecutionStatus::Success => "success",
            ExecutionStatus::Failed => "failed",
            ExecutionStatus::Deleted => "deleted",
        }
    }
}

impl Display for ExecutionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ExecutionStatus {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "running" => Ok(ExecutionStatus::Running),
            "success" => Ok(ExecutionStatus::Success),
            "failed" => Ok(ExecutionStatus::Failed),
            "deleted" => Ok(ExecutionStatus::Deleted),
            other => Err(TypeConstraintError::InvalidValue(format!(
                "unknown execution status {other}"
            ))),
        }
    }
}

/// Execution joined with the names of the task, database and destination it
/// belongs to, as shown in the executions table.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ExecutionSummary {
    pub id: ExecutionId,
    pub backup_id: BackupId,
    pub status: ExecutionStatus,
    pub message: Option<String>,
    pub backup_name: String,
    pub backup_is_local: bool,
    pub database_name: String,
    pub destination_name: Option<String>,
    pub file_size: Option<i64>,
    pub started_at: NaiveDateTime,
    pub finished_at: Option<NaiveDateTime>,
}
