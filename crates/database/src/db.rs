use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use std::{path::Path, time::Duration};

/// Where the hotel database lives and how long to wait on a locked file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    pub url: String,
    pub busy_timeout: Duration,
}

impl DatabaseConfig {
    pub fn for_file(path: impl AsRef<Path>, busy_timeout: Duration) -> Self {
        Self {
            url: format!("sqlite://{}", path.as_ref().display()),
            busy_timeout,
        }
    }

    /// A private in-memory database, useful for tests
    pub fn in_memory() -> Self {
        Self {
            url: "sqlite::memory:".to_string(),
            busy_timeout: Duration::from_secs(5),
        }
    }
}

/// Creates a database connection
///
/// The pool is capped at a single connection, so every request shares one
/// SQLite session. The file is never created if it is missing.
pub async fn create_connection(config: &DatabaseConfig) -> Result<DatabaseConnection, DbErr> {
    let busy_timeout = config.busy_timeout;

    let mut options = ConnectOptions::new(config.url.clone());
    options
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false)
        .map_sqlx_sqlite_opts(move |opts| opts.busy_timeout(busy_timeout));

    Database::connect(options).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_url_keeps_relative_paths() {
        let config = DatabaseConfig::for_file("backend/Hotelek.db", Duration::from_secs(30));
        assert_eq!(config.url, "sqlite://backend/Hotelek.db");
        assert_eq!(config.busy_timeout, Duration::from_secs(30));
    }

    #[test]
    fn file_url_keeps_absolute_paths() {
        let config = DatabaseConfig::for_file("/srv/hotel/Hotelek.db", Duration::from_secs(1));
        assert_eq!(config.url, "sqlite:///srv/hotel/Hotelek.db");
    }

    #[tokio::test]
    async fn missing_file_is_an_error() {
        let config = DatabaseConfig::for_file(
            "this-directory-does-not-exist/Hotelek.db",
            Duration::from_millis(100),
        );
        assert!(create_connection(&config).await.is_err());
    }
}
