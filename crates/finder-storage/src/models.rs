// SPDX-FileCopyrightText: 2026 Finder Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain model types for storage entities.
//!
//! The canonical types live in `finder-core::types` so the data source trait
//! can name them. This module re-exports them for use within the storage crate.

pub use finder_core::types::{HealthStatus, Resource, SearchHistoryItem};
