//! Database connection helpers.
//!
//! Pooled SQLite connections for the client registry. Every connection handed
//! out has `foreign_keys = ON`: a client referenced from `client_events` can
//! then only be deleted by failing with a foreign-key violation, which the
//! services report as a conflict. SQLite leaves the check off by default.

use std::time::Duration;

use diesel::connection::SimpleConnection;
use diesel::r2d2::{ConnectionManager, CustomizeConnection, Pool, PoolError, PooledConnection};
use diesel::sqlite::SqliteConnection;
use log::error;

pub type DbPool = Pool<ConnectionManager<SqliteConnection>>;
pub type DbConnection = PooledConnection<ConnectionManager<SqliteConnection>>;

#[derive(Debug)]
/// Options that are applied each time a connection is acquired from the pool.
pub struct ConnectionOptions {
    /// Enable Write Ahead Logging mode for SQLite.
    pub enable_wal: bool,
    /// Reject deletes of clients that still have events.
    pub enable_foreign_keys: bool,
    /// Timeout to wait for a locked database.
    pub busy_timeout: Option<Duration>,
}

impl Default for ConnectionOptions {
    fn default() -> Self {
        Self {
            enable_wal: true,
            enable_foreign_keys: true,
            busy_timeout: Some(Duration::from_secs(30)),
        }
    }
}

impl ConnectionOptions {
    fn pragmas(&self) -> String {
        let mut pragmas = String::new();
        if self.enable_wal {
            pragmas.push_str("PRAGMA journal_mode = WAL; PRAGMA synchronous = NORMAL;");
        }
        if self.enable_foreign_keys {
            pragmas.push_str("PRAGMA foreign_keys = ON;");
        }
        if let Some(timeout) = self.busy_timeout {
            pragmas.push_str(&format!("PRAGMA busy_timeout = {};", timeout.as_millis()));
        }
        pragmas
    }
}

impl CustomizeConnection<SqliteConnection, diesel::r2d2::Error> for ConnectionOptions {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> Result<(), diesel::r2d2::Error> {
        conn.batch_execute(&self.pragmas())
            .map_err(diesel::r2d2::Error::QueryError)
    }
}

/// Builds the registry pool for `database_url` with [`ConnectionOptions::default`].
pub fn establish_connection_pool(database_url: &str) -> Result<DbPool, PoolError> {
    let manager = ConnectionManager::<SqliteConnection>::new(database_url);
    Pool::builder()
        .connection_customizer(Box::new(ConnectionOptions::default()))
        .build(manager)
        .inspect_err(|e| error!("Failed to open client database {database_url}: {e}"))
}

/// Checks a connection out of the pool, logging exhaustion or timeouts.
pub fn get_connection(pool: &DbPool) -> Result<DbConnection, PoolError> {
    pool.get()
        .inspect_err(|e| error!("Failed to get connection from pool: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options_enforce_foreign_keys() {
        let pragmas = ConnectionOptions::default().pragmas();

        assert!(pragmas.contains("PRAGMA foreign_keys = ON;"));
        assert!(pragmas.contains("PRAGMA busy_timeout = 30000;"));
    }

    #[test]
    fn disabled_options_issue_no_pragmas() {
        let options = ConnectionOptions {
            enable_wal: false,
            enable_foreign_keys: false,
            busy_timeout: None,
        };

        assert!(options.pragmas().is_empty());
    }
}
