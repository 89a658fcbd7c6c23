// SPDX-FileCopyrightText: 2026 Finder Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! SQLite implementation of the SearchHistoryDataSource trait.

use async_trait::async_trait;
use tracing::debug;

use finder_config::StorageConfig;
use finder_core::observable::{self, Observable};
use finder_core::{FinderError, SearchHistoryDataSource};

use crate::models::{HealthStatus, Resource, SearchHistoryItem};
use crate::queries::search_history;
use crate::worker::Worker;

/// SQLite-backed search history.
///
/// Construct one at startup and share it (for example behind an `Arc`)
/// with the presentation layer. All calls go through a single FIFO
/// [`Worker`]; the database file is opened on the first call.
pub struct SqliteSearchHistory {
    worker: Worker,
}

impl SqliteSearchHistory {
    /// Create a data source for the database described by `config`.
    ///
    /// Must be called from within a tokio runtime. The database is not
    /// opened until the first request runs.
    pub fn new(config: StorageConfig) -> Result<Self, FinderError> {
        debug!(path = %config.database_path, "creating search history data source");
        Ok(Self {
            worker: Worker::spawn(config)?,
        })
    }
}

#[async_trait]
impl SearchHistoryDataSource for SqliteSearchHistory {
    fn get_all(&self) -> Observable<Vec<SearchHistoryItem>> {
        let (emitter, observable) = observable::channel();
        emitter.emit(Resource::Loading);
        debug!("queued search history read");
        self.worker.submit(emitter, |conn| search_history::select_all(conn));
        observable
    }

    fn add(&self, item: SearchHistoryItem) -> Observable<()> {
        let (emitter, observable) = observable::channel();
        debug!(query_len = item.query.len(), "queued search history upsert");
        self.worker.submit(emitter, move |conn| {
            search_history::upsert(conn, &item.query).map(|_| ())
        });
        observable
    }

    async fn health_check(&self) -> Result<HealthStatus, FinderError> {
        let (emitter, observable) = observable::channel();
        self.worker.submit(emitter, |conn| search_history::count(conn));
        // `settled` only yields `Success` or `Error`.
        let status = match observable.settled().await.cause() {
            None => {
                debug!("search history health check passed");
                HealthStatus::Healthy
            }
            Some(cause) => HealthStatus::Unhealthy(cause.to_string()),
        };
        Ok(status)
    }
}
