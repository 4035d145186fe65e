//! View models for the executions table.

use chrono::{NaiveDateTime, TimeZone};
use chrono_tz::Tz;
use serde::Serialize;

use crate::domain::execution::{ExecutionStatus, ExecutionSummary};
use crate::pagination::Paginated;

/// `YYYY-MM-DD HH:MM:SS`, the layout of every timestamp in the dashboard.
pub const TIMESTAMP_LAYOUT: &str = "%Y-%m-%d %H:%M:%S";

/// One row of the executions table, already formatted for display.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ExecutionRow {
    pub id: String,
    pub status: &'static str,
    pub status_class: &'static str,
    pub backup_name: String,
    pub database_name: String,
    pub destination: String,
    pub started_at: String,
    pub finished_at: Option<String>,
    pub duration: Option<String>,
    pub file_size: Option<String>,
}

impl ExecutionRow {
    /// Formats `summary`, rendering timestamps in `tz`.
    pub fn new(summary: &ExecutionSummary, tz: Tz) -> Self {
        Self {
            id: summary.id.to_string(),
            status: summary.status.as_str(),
            status_class: status_badge_class(summary.status),
            backup_name: summary.backup_name.clone(),
            database_name: summary.database_name.clone(),
            destination: destination_label(
                summary.backup_is_local,
                summary.destination_name.as_deref(),
            ),
            started_at: format_timestamp(summary.started_at, tz),
            finished_at: summary.finished_at.map(|ts| format_timestamp(ts, tz)),
            duration: summary
                .finished_at
                .map(|finished| format_duration(summary.started_at, finished)),
            file_size: summary.file_size.map(format_file_size),
        }
    }
}

/// Data required to render the executions table body.
#[derive(Debug)]
pub struct ExecutionsPageData {
    pub executions: Paginated<ExecutionRow>,
}

/// Data required to render the executions page shell.
#[derive(Debug)]
pub struct ExecutionsShellData {
    /// URL of the first table page, carrying the active filters.
    pub list_url: String,
}

pub fn status_badge_class(status: ExecutionStatus) -> &'static str {
    match status {
        ExecutionStatus::Running => "badge badge-info",
        ExecutionStatus::Success => "badge badge-success",
        ExecutionStatus::Failed => "badge badge-error",
        ExecutionStatus::Deleted => "badge badge-neutral",
    }
}

pub fn destination_label(is_local: bool, destination_name: Option<&str>) -> String {
    if is_local {
        return "Local".to_string();
    }
    destination_name.unwrap_or("Unknown").to_string()
}

/// Renders a UTC timestamp in the given zone.
pub fn format_timestamp(utc: NaiveDateTime, tz: Tz) -> String {
    tz.from_utc_datetime(&utc).format(TIMESTAMP_LAYOUT).to_string()
}

/// Elapsed time as `1h2m3s`, dropping leading zero units.
pub fn format_duration(started_at: NaiveDateTime, finished_at: NaiveDateTime) -> String {
    let total = (finished_at - started_at).num_seconds().max(0);
    let (hours, minutes, seconds) = (total / 3600, (total % 3600) / 60, total % 60);

    if hours > 0 {
        format!("{hours}h{minutes}m{seconds}s")
    } else if minutes > 0 {
        format!("{minutes}m{seconds}s")
    } else {
        format!("{seconds}s")
    }
}

/// Human readable size with one decimal for anything above bytes.
pub fn format_file_size(bytes: i64) -> String {
    const UNITS: [&str; 4] = ["KB", "MB", "GB", "TB"];

    let bytes = bytes.max(0);
    if bytes < 1024 {
        return format!("{bytes} B");
    }

    let mut size = bytes as f64 / 1024.0;
    let mut unit = 0;
    while size >= 1024.0 && unit < UNITS.len() - 1 {
        size /= 1024.0;
        unit += 1;
    }
    format!("{size:.1} {}", UNITS[unit])
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, NaiveDate};

    use super::*;
    use crate::domain::types::{BackupId, ExecutionId};

    fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 3, 9)
            .and_then(|d| d.and_hms_opt(h, m, s))
            .unwrap()
    }

    #[test]
    fn file_sizes() {
        assert_eq!(format_file_size(0), "0 B");
        assert_eq!(format_file_size(1023), "1023 B");
        assert_eq!(format_file_size(1536), "1.5 KB");
        assert_eq!(format_file_size(1024 * 1024), "1.0 MB");
        assert_eq!(format_file_size(5 * 1024 * 1024 * 1024), "5.0 GB");
        assert_eq!(format_file_size(3 * 1024_i64.pow(5)), "3072.0 TB");
        assert_eq!(format_file_size(-10), "0 B");
    }

    #[test]
    fn durations() {
        let start = at(10, 0, 0);
        assert_eq!(format_duration(start, start), "0s");
        assert_eq!(format_duration(start, start + Duration::seconds(42)), "42s");
        assert_eq!(format_duration(start, at(10, 2, 5)), "2m5s");
        assert_eq!(format_duration(start, at(11, 0, 3)), "1h0m3s");
        assert_eq!(format_duration(at(11, 0, 0), start), "0s");
    }

    #[test]
    fn timestamps_use_the_configured_zone() {
        assert_eq!(format_timestamp(at(10, 5, 7), Tz::UTC), "2025-03-09 10:05:07");
        assert_eq!(
            format_timestamp(at(10, 5, 7), Tz::America__Bogota),
            "2025-03-09 05:05:07"
        );
    }

    #[test]
    fn row_formats_summary() {
        let summary = ExecutionSummary {
            id: ExecutionId::new(),
            backup_id: BackupId::new(),
            status: ExecutionStatus::Success,
            message: None,
            backup_name: "Nightly".to_string(),
            backup_is_local: true,
            database_name: "app".to_string(),
            destination_name: Some("ignored".to_string()),
            file_size: Some(2048),
            started_at: at(1, 0, 0),
            finished_at: Some(at(1, 1, 30)),
        };

        let row = ExecutionRow::new(&summary, Tz::UTC);

        assert_eq!(row.status, "success");
        assert_eq!(row.status_class, "badge badge-success");
        assert_eq!(row.destination, "Local");
        assert_eq!(row.finished_at.as_deref(), Some("2025-03-09 01:01:30"));
        assert_eq!(row.duration.as_deref(), Some("1m30s"));
        assert_eq!(row.file_size.as_deref(), Some("2.0 KB"));
    }

    #[test]
    fn running_row_has_no_end() {
        let summary = ExecutionSummary {
            id: ExecutionId::new(),
            backup_id: BackupId::new(),
            status: ExecutionStatus::Running,
            message: None,
            backup_name: "Nightly".to_string(),
            backup_is_local: false,
            database_name: "app".to_string(),
            destination_name: Some("s3-eu".to_string()),
            file_size: None,
            started_at: at(1, 0, 0),
            finished_at: None,
        };

        let row = ExecutionRow::new(&summary, Tz::UTC);

        assert_eq!(row.destination, "s3-eu");
        assert!(row.finished_at.is_none());
        assert!(row.duration.is_none());
        assert!(row.file_size.is_none());
    }
}
