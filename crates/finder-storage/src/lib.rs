// SPDX-FileCopyrightText: 2026 Finder Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! SQLite persistence for the Finder search history.
//!
//! Provides the `search_history_entry` table, a single FIFO worker that
//! serializes every read and write onto `tokio-rusqlite`'s background
//! thread, and [`SqliteSearchHistory`], which delivers results through
//! observables.

pub mod data_source;
pub mod database;
pub mod models;
pub mod queries;
pub mod worker;

pub use data_source::SqliteSearchHistory;
pub use database::Database;
pub use models::*;
