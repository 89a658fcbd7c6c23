// SPDX-FileCopyrightText: 2026 Finder Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Trait definitions implemented by storage backends.
//!
//! Traits with async methods use `#[async_trait]` so implementations stay
//! usable behind `dyn`.

pub mod storage;

pub use storage::SearchHistoryDataSource;
