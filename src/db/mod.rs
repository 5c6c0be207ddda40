//! Database access layer.
//!
//! All queries live in `impl DbPool` blocks, one module per entity.

pub mod appointments;
pub mod billing;
pub mod customers;
pub mod dashboard;
pub mod jobs;
pub mod reminders;
pub mod tune_revisions;
pub mod users;
pub mod vehicles;

use std::sync::Arc;
use std::time::Duration;

use sea_orm::{ConnectOptions, Database, DatabaseConnection};

use crate::error::{AppError, AppResult};

/// Shared handle to the SeaORM connection pool.
///
/// The connection is kept behind an `Arc` because `DatabaseConnection` is not
/// `Clone` when sea-orm's `mock` feature is enabled (as it is for tests).
#[derive(Clone)]
pub struct DbPool {
    connection: Arc<DatabaseConnection>,
}

impl DbPool {
    pub fn new(connection: DatabaseConnection) -> Self {
        Self {
            connection: Arc::new(connection),
        }
    }

    pub fn connection(&self) -> &DatabaseConnection {
        &self.connection
    }
}

/// Open the Postgres connection pool.
pub async fn connect(database_url: &str) -> AppResult<DatabaseConnection> {
    let mut opts = ConnectOptions::new(database_url.to_string());
    opts.max_connections(10)
        .min_connections(1)
        .connect_timeout(Duration::from_secs(10))
        .acquire_timeout(Duration::from_secs(10))
        .sqlx_logging(false);

    Database::connect(opts)
        .await
        .map_err(|e| AppError::Database(format!("Failed to connect to database: {}", e)))
}

/// Escape LIKE wildcards so user input matches literally.
///
/// Search terms become `%term%` patterns; without this, `%` or `_` in the
/// term would match everything.
pub(crate) fn escape_like(term: &str) -> String {
    term.replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_like_passes_plain_terms() {
        assert_eq!(escape_like("GTI"), "GTI");
    }

    #[test]
    fn test_escape_like_escapes_wildcards() {
        assert_eq!(escape_like("100%_done"), "100\\%\\_done");
        assert_eq!(escape_like("a\\b"), "a\\\\b");
    }
}
