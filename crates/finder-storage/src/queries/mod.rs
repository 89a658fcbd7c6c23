// SPDX-FileCopyrightText: 2026 Finder Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Query modules for storage entities.
//!
//! Query functions are synchronous and take a plain `rusqlite::Connection`;
//! they are meant to run inside a job on the storage worker.

pub mod search_history;
