use crate::{
    db::{DatabaseConfig, create_connection},
    services::report::{ColumnInfo, HOTEL_TABLE, ReportService},
};
use log::{info, warn};
use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr, Statement};
use std::{path::Path, time::Duration};

/// What the startup check found out about the hotel table
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaStatus {
    Present(Vec<ColumnInfo>),
    Missing,
    /// The database could not be opened or read
    Unreachable(String),
}

pub struct SchemaGuard;

impl SchemaGuard {
    /// Checks that the hotel table exists in the database at `path` and logs its columns
    ///
    /// This only observes: it opens its own short-lived connection, never
    /// touches the schema and never fails. The outcome is returned for callers
    /// that want more than the log lines.
    pub async fn validate(path: &Path, busy_timeout: Duration) -> SchemaStatus {
        let config = DatabaseConfig::for_file(path, busy_timeout);

        let status = match create_connection(&config).await {
            Ok(db) => {
                let status = Self::inspect(&db).await;
                if let Err(e) = db.close().await {
                    warn!("Failed to close schema check connection: {e}");
                }
                status
            }
            Err(e) => SchemaStatus::Unreachable(e.to_string()),
        };

        Self::report(path, &status);
        status
    }

    /// Looks the hotel table up on an open connection
    pub async fn inspect(db: &DatabaseConnection) -> SchemaStatus {
        match Self::lookup(db).await {
            Ok(status) => status,
            Err(e) => SchemaStatus::Unreachable(e.to_string()),
        }
    }

    async fn lookup(db: &DatabaseConnection) -> Result<SchemaStatus, DbErr> {
        let exists = db
            .query_one(Statement::from_sql_and_values(
                db.get_database_backend(),
                "SELECT name FROM sqlite_master WHERE type = 'table' AND name = ?",
                [HOTEL_TABLE.into()],
            ))
            .await?
            .is_some();

        if !exists {
            return Ok(SchemaStatus::Missing);
        }

        let columns = ReportService::table_columns(db, HOTEL_TABLE).await?;
        Ok(SchemaStatus::Present(columns))
    }

    fn report(path: &Path, status: &SchemaStatus) {
        match status {
            SchemaStatus::Present(columns) => {
                info!("{HOTEL_TABLE} table exists.");
                info!("Columns in {HOTEL_TABLE} table:");
                for column in columns {
                    info!("- {} (type: {})", column.name, column.declared_type);
                }
            }
            SchemaStatus::Missing => {
                warn!("{HOTEL_TABLE} table does not exist in the database.");
            }
            SchemaStatus::Unreachable(reason) => {
                warn!(
                    "Could not check for the {HOTEL_TABLE} table in {}: {reason}",
                    path.display()
                );
            }
        }
    }
}
