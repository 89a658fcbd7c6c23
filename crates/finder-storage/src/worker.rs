// SPDX-FileCopyrightText: 2026 Finder Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Single-worker FIFO queue in front of the database.
//!
//! Every read and write is pushed onto one unbounded queue at call time and
//! executed one at a time, in queue order, on tokio-rusqlite's background
//! thread. The queue is drained by a single tokio task that awaits each job
//! before taking the next, so no two jobs ever overlap.
//!
//! The database is opened when the first job arrives. If opening fails,
//! that job receives the error and the next job tries again.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use finder_config::StorageConfig;
use finder_core::observable::Emitter;
use finder_core::{FinderError, Resource};
use tokio::runtime::Handle;
use tokio::sync::{mpsc, OnceCell};
use tracing::{debug, error, warn};

use crate::database::{map_tr_err, Database};

/// A queued unit of work. It receives the open connection, or the reason
/// there is none, and must report its own outcome.
type Job = Box<dyn FnOnce(Result<&mut rusqlite::Connection, FinderError>) + Send + 'static>;

/// Handle to the storage worker. Dropping it lets the worker drain the
/// queue and exit, which closes the database.
pub struct Worker {
    queue: mpsc::UnboundedSender<Job>,
}

impl Worker {
    /// Starts the worker task on the current tokio runtime.
    ///
    /// Fails with [`FinderError::Internal`] when called outside a runtime.
    pub fn spawn(config: StorageConfig) -> Result<Self, FinderError> {
        let handle = Handle::try_current().map_err(|e| {
            FinderError::Internal(format!("storage worker needs a tokio runtime: {e}"))
        })?;
        let (queue, jobs) = mpsc::unbounded_channel();
        handle.spawn(run(config, jobs));
        Ok(Self { queue })
    }

    /// Queues `op` behind every previously submitted job.
    ///
    /// The outcome is emitted as a terminal `Success` or `Error` state. A
    /// panic inside `op` is caught and emitted as `Error(Internal)`.
    pub fn submit<T, F>(&self, emitter: Emitter<T>, op: F)
    where
        T: Send + 'static,
        F: FnOnce(&mut rusqlite::Connection) -> Result<T, rusqlite::Error> + Send + 'static,
    {
        let job: Job = Box::new(move |conn| {
            let outcome = conn.and_then(|conn| run_caught(op, conn));
            emitter.emit(Resource::from_result(outcome));
        });
        if let Err(mpsc::error::SendError(job)) = self.queue.send(job) {
            job(Err(FinderError::WorkerClosed));
        }
    }
}

async fn run(config: StorageConfig, mut jobs: mpsc::UnboundedReceiver<Job>) {
    let db = OnceCell::new();

    while let Some(job) = jobs.recv().await {
        let database = match db.get_or_try_init(|| Database::open(&config)).await {
            Ok(database) => database,
            Err(e) => {
                warn!(
                    path = %config.database_path,
                    error = %e,
                    "failed to open search history database"
                );
                job(Err(e));
                continue;
            }
        };

        let result = database
            .connection()
            .call(move |conn| -> Result<(), rusqlite::Error> {
                job(Ok(conn));
                Ok(())
            })
            .await
            .map_err(map_tr_err);
        if let Err(e) = result {
            error!(error = %e, "storage job was dropped before it ran");
        }
    }

    debug!("storage worker queue closed");
}

fn run_caught<T, F>(op: F, conn: &mut rusqlite::Connection) -> Result<T, FinderError>
where
    F: FnOnce(&mut rusqlite::Connection) -> Result<T, rusqlite::Error>,
{
    match panic::catch_unwind(AssertUnwindSafe(|| op(conn))) {
        Ok(result) => result.map_err(FinderError::storage),
        Err(payload) => Err(FinderError::Internal(format!(
            "storage job panicked: {}",
            panic_message(payload.as_ref())
        ))),
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s
    } else {
        "non-string panic payload"
    }
}
