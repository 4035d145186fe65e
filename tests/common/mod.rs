#![allow(dead_code)]

use chrono::{Duration, NaiveDate, NaiveDateTime};
use diesel::prelude::*;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tempfile::TempDir;

use pgbackup_web::db::{DbPool, establish_connection_pool};
use pgbackup_web::domain::backup::{Backup, BackupTarget, NewBackup, PgDumpOptions};
use pgbackup_web::domain::database::Database;
use pgbackup_web::domain::destination::Destination;
use pgbackup_web::domain::execution::ExecutionStatus;
use pgbackup_web::domain::types::{
    BackupId, BackupName, CronExpression, DatabaseId, DatabaseName, DestinationDir,
    DestinationId, DestinationName, ExecutionId, RetentionDays, TimeZoneName,
};
use pgbackup_web::models::database::NewDatabase;
use pgbackup_web::models::destination::NewDestination;
use pgbackup_web::models::execution::NewExecution;
use pgbackup_web::repository::{BackupWriter, DieselRepository};
use pgbackup_web::schema::{databases, destinations, executions};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// SQLite database living in a temporary directory with all migrations applied.
pub struct TestDb {
    _dir: TempDir,
    pool: DbPool,
}

impl TestDb {
    pub fn new(name: &str) -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join(name);
        let url = path.to_str().expect("utf-8 temp path").to_string();

        let pool = establish_connection_pool(&url).expect("create pool");
        let mut conn = pool.get().expect("get connection");
        conn.run_pending_migrations(MIGRATIONS)
            .expect("run migrations");

        Self { _dir: dir, pool }
    }

    pub fn pool(&self) -> DbPool {
        self.pool.clone()
    }

    pub fn repo(&self) -> DieselRepository {
        DieselRepository::new(self.pool())
    }

    pub fn insert_database(&self, name: &str) -> Database {
        let database = Database {
            id: DatabaseId::new(),
            name: DatabaseName::new(name).expect("valid name"),
            pg_version: "16".to_string(),
        };
        let mut conn = self.pool.get().expect("get connection");
        diesel::insert_into(databases::table)
            .values(NewDatabase::from(&database))
            .execute(&mut conn)
            .expect("insert database");
        database
    }

    pub fn insert_destination(&self, name: &str) -> Destination {
        let destination = Destination {
            id: DestinationId::new(),
            name: DestinationName::new(name).expect("valid name"),
            bucket_name: format!("{name}-bucket"),
        };
        let mut conn = self.pool.get().expect("get connection");
        diesel::insert_into(destinations::table)
            .values(NewDestination::from(&destination))
            .execute(&mut conn)
            .expect("insert destination");
        destination
    }

    pub fn insert_backup(&self, name: &str, database_id: DatabaseId, target: BackupTarget) -> Backup {
        self.repo()
            .create_backup(&new_backup(name, database_id, target))
            .expect("insert backup")
    }

    /// Inserts `count` finished executions for `backup_id`, one minute apart
    /// starting at `first_start`.
    pub fn insert_executions(
        &self,
        backup_id: BackupId,
        count: usize,
        first_start: NaiveDateTime,
    ) -> Vec<ExecutionId> {
        let mut conn = self.pool.get().expect("get connection");
        (0..count)
            .map(|i| {
                let id = ExecutionId::new();
                let started_at = first_start + Duration::minutes(i as i64);
                diesel::insert_into(executions::table)
                    .values(NewExecution {
                        id: id.as_bytes(),
                        backup_id: backup_id.as_bytes(),
                        status: ExecutionStatus::Success.as_str(),
                        message: None,
                        path: Some("/backups/dump.zip"),
                        file_size: Some(2048),
                        started_at,
                        finished_at: Some(started_at + Duration::seconds(75)),
                    })
                    .execute(&mut conn)
                    .expect("insert execution");
                id
            })
            .collect()
    }
}

pub fn new_backup(name: &str, database_id: DatabaseId, target: BackupTarget) -> NewBackup {
    NewBackup {
        database_id,
        target,
        name: BackupName::new(name).expect("valid name"),
        cron_expression: CronExpression::new("0 3 * * *").expect("valid cron"),
        time_zone: TimeZoneName::new("UTC").expect("valid tz"),
        is_active: true,
        dest_dir: DestinationDir::new("/nightly").expect("valid dir"),
        retention_days: RetentionDays::new(30).expect("valid retention"),
        options: PgDumpOptions {
            clean: true,
            ..PgDumpOptions::default()
        },
    }
}

pub fn day(d: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 5, d)
        .and_then(|date| date.and_hms_opt(2, 0, 0))
        .expect("valid date")
}
