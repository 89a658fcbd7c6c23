// SPDX-FileCopyrightText: 2026 Finder Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for the Finder search history store.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup, providing actionable error messages.

use serde::{Deserialize, Serialize};

/// Path value that selects a private in-memory database instead of a file.
pub const IN_MEMORY_PATH: &str = ":memory:";

/// Top-level Finder configuration.
///
/// Loaded from TOML files following XDG hierarchy, with environment variable overrides.
/// All sections are optional and default to sensible values.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct FinderConfig {
    /// Storage backend settings.
    #[serde(default)]
    pub storage: StorageConfig,
}

/// Storage backend configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct StorageConfig {
    /// Path to the SQLite database file, or `:memory:`.
    #[serde(default = "default_database_path")]
    pub database_path: String,

    /// Enable WAL (Write-Ahead Logging) mode for SQLite.
    #[serde(default = "default_wal_mode")]
    pub wal_mode: bool,

    /// How long SQLite waits on a locked database file before failing, in milliseconds.
    #[serde(default = "default_busy_timeout_ms")]
    pub busy_timeout_ms: u32,
}

impl StorageConfig {
    /// Configuration for a private in-memory database.
    pub fn in_memory() -> Self {
        Self {
            database_path: IN_MEMORY_PATH.to_string(),
            ..Self::default()
        }
    }

    /// Whether `database_path` selects an in-memory database.
    pub fn is_in_memory(&self) -> bool {
        self.database_path == IN_MEMORY_PATH
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            database_path: default_database_path(),
            wal_mode: default_wal_mode(),
            busy_timeout_ms: default_busy_timeout_ms(),
        }
    }
}

fn default_database_path() -> String {
    dirs::data_dir()
        .map(|p| p.join("finder").join("search_history.db"))
        .unwrap_or_else(|| std::path::PathBuf::from("search_history.db"))
        .to_string_lossy()
        .into_owned()
}

fn default_wal_mode() -> bool {
    true
}

fn default_busy_timeout_ms() -> u32 {
    5000
}
