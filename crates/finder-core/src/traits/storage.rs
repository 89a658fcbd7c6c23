// SPDX-FileCopyrightText: 2026 Finder Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Data source trait for the search history.

use async_trait::async_trait;

use crate::error::FinderError;
use crate::observable::Observable;
use crate::types::{HealthStatus, SearchHistoryItem};

/// Observable access to the persisted search history.
///
/// Both operations return immediately. The work is queued behind every
/// previously issued call and its outcome is delivered through the returned
/// [`Observable`], on whichever task polls it.
#[async_trait]
pub trait SearchHistoryDataSource: Send + Sync + 'static {
    /// Lists every stored item in insertion order.
    ///
    /// Delivers `Loading`, then `Success(items)` or `Error(cause)`.
    fn get_all(&self) -> Observable<Vec<SearchHistoryItem>>;

    /// Stores `item.query`, replacing any existing row with the same query.
    ///
    /// Delivers a single `Success(())` or `Error(cause)`, with no `Loading`
    /// state first.
    fn add(&self, item: SearchHistoryItem) -> Observable<()>;

    /// Performs a round trip through the work queue and reports whether the
    /// database answered.
    async fn health_check(&self) -> Result<HealthStatus, FinderError>;
}
