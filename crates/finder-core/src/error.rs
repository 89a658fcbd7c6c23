// SPDX-FileCopyrightText: 2026 Finder Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Finder search history store.

use thiserror::Error;

/// The primary error type used across the data source trait and storage operations.
#[derive(Debug, Error)]
pub enum FinderError {
    /// Configuration errors (invalid TOML, missing required fields, type mismatches).
    #[error("configuration error: {0}")]
    Config(String),

    /// Storage backend errors (database open, query failure, constraint violation).
    #[error("storage error: {source}")]
    Storage {
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The background worker stopped before the operation could run.
    #[error("storage worker is no longer running")]
    WorkerClosed,

    /// Internal or unexpected errors, including panics caught on the worker.
    #[error("internal error: {0}")]
    Internal(String),
}

impl FinderError {
    /// Wraps any error as a [`FinderError::Storage`].
    pub fn storage<E>(source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Storage {
            source: Box::new(source),
        }
    }
}
