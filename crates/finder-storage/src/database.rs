// SPDX-FileCopyrightText: 2026 Finder Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Database connection management with PRAGMA setup and table creation.
//!
//! Every statement runs on tokio-rusqlite's single background thread.
//! The [`Worker`](crate::worker::Worker) owns the only `Database` the data
//! source uses; do not open a second connection for writes.

use std::path::Path;
use std::time::Duration;

use finder_config::StorageConfig;
use finder_core::FinderError;
use tokio_rusqlite::Connection;
use tracing::debug;

/// Creates the history table on first open. Re-running it is a no-op.
const SCHEMA: &str = "
    CREATE TABLE IF NOT EXISTS search_history_entry (
        _id INTEGER PRIMARY KEY,
        search_query TEXT NOT NULL UNIQUE
    );
";

/// Convert tokio-rusqlite errors into [`FinderError::Storage`].
pub(crate) fn map_tr_err(e: tokio_rusqlite::Error<rusqlite::Error>) -> FinderError {
    FinderError::storage(e)
}

/// Handle to the search history database.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Opens (creating if needed) the database described by `config`.
    ///
    /// Missing parent directories are created. The table is created if absent.
    pub async fn open(config: &StorageConfig) -> Result<Self, FinderError> {
        let conn = if config.is_in_memory() {
            Connection::open_in_memory()
                .await
                .map_err(FinderError::storage)?
        } else {
            let path = Path::new(&config.database_path);
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                let parent = parent.to_path_buf();
                tokio::task::spawn_blocking(move || std::fs::create_dir_all(parent))
                    .await
                    .map_err(|e| FinderError::Internal(format!("directory setup task failed: {e}")))?
                    .map_err(FinderError::storage)?;
            }
            Connection::open(path).await.map_err(FinderError::storage)?
        };

        let wal_mode = config.wal_mode;
        let busy_timeout = Duration::from_millis(config.busy_timeout_ms.into());
        let journal_mode = conn
            .call(move |conn| -> Result<String, rusqlite::Error> {
                conn.busy_timeout(busy_timeout)?;
                let pragma = if wal_mode {
                    "PRAGMA journal_mode = WAL"
                } else {
                    "PRAGMA journal_mode"
                };
                let journal_mode: String = conn.query_row(pragma, [], |row| row.get(0))?;
                conn.execute_batch("PRAGMA synchronous = NORMAL;")?;
                conn.execute_batch(SCHEMA)?;
                Ok(journal_mode)
            })
            .await
            .map_err(map_tr_err)?;

        debug!(
            path = %config.database_path,
            journal_mode = %journal_mode,
            "search history database opened"
        );
        Ok(Self { conn })
    }

    /// Opens a private in-memory database with the table created.
    pub async fn open_in_memory() -> Result<Self, FinderError> {
        Self::open(&StorageConfig::in_memory()).await
    }

    /// The tokio-rusqlite handle. Closures passed to `call` run on the
    /// database thread in submission order.
    pub fn connection(&self) -> &Connection {
        &self.conn
    }
}
