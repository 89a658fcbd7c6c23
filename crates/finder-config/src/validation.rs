// SPDX-FileCopyrightText: 2026 Finder Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Validates semantic constraints that cannot be expressed via serde attributes,
//! such as non-empty paths.

use std::path::Path;

use crate::diagnostic::ConfigError;
use crate::model::FinderConfig;

/// Validate a deserialized configuration for semantic correctness.
///
/// Returns `Ok(())` if all validations pass, or `Err(Vec<ConfigError>)` with
/// all collected validation errors (does not fail fast).
pub fn validate_config(config: &FinderConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    let database_path = config.storage.database_path.trim();
    if database_path.is_empty() {
        errors.push(ConfigError::Validation {
            message: "storage.database_path must not be empty".to_string(),
        });
    } else if !config.storage.is_in_memory() && Path::new(database_path).is_dir() {
        errors.push(ConfigError::Validation {
            message: format!(
                "storage.database_path `{database_path}` is a directory, expected a file path"
            ),
        });
    }

    if config.storage.is_in_memory() && config.storage.wal_mode {
        // SQLite silently keeps in-memory databases in MEMORY journal mode.
        tracing::debug!("storage.wal_mode has no effect on an in-memory database");
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
