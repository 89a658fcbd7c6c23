// SPDX-FileCopyrightText: 2026 Finder Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Common types shared between the data source trait and its implementations.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::error::FinderError;

/// A single remembered search.
///
/// `id` is assigned by storage. Items built by callers for insertion carry
/// `0`, which the storage layer ignores.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SearchHistoryItem {
    pub id: i64,
    pub query: String,
}

impl SearchHistoryItem {
    /// Creates an item for insertion. The row identity is assigned on write.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            id: 0,
            query: query.into(),
        }
    }
}

/// State of an asynchronous request as seen by an observer.
///
/// Reads deliver `Loading` followed by one terminal state. Writes deliver
/// only the terminal state.
#[derive(Debug, Clone)]
pub enum Resource<T> {
    /// The request has been queued and has not finished yet.
    Loading,
    /// The request finished with a value.
    Success(T),
    /// The request failed. The cause is shared so the state stays cloneable.
    Error(Arc<FinderError>),
}

impl<T> Resource<T> {
    /// Wraps an error as a terminal `Error` state.
    pub fn error(cause: FinderError) -> Self {
        Resource::Error(Arc::new(cause))
    }

    /// Converts an operation outcome into a terminal state.
    pub fn from_result(result: Result<T, FinderError>) -> Self {
        match result {
            Ok(value) => Resource::Success(value),
            Err(e) => Resource::error(e),
        }
    }

    pub fn status(&self) -> ResourceStatus {
        match self {
            Resource::Loading => ResourceStatus::Loading,
            Resource::Success(_) => ResourceStatus::Success,
            Resource::Error(_) => ResourceStatus::Error,
        }
    }

    /// True for `Success` and `Error`.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Resource::Loading)
    }

    /// Returns the value of a `Success` state.
    pub fn into_success(self) -> Option<T> {
        match self {
            Resource::Success(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the cause of an `Error` state.
    pub fn cause(&self) -> Option<&FinderError> {
        match self {
            Resource::Error(cause) => Some(cause),
            _ => None,
        }
    }
}

/// Fieldless tag of a [`Resource`], used in log fields and assertions.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ResourceStatus {
    Loading,
    Success,
    Error,
}

/// Health status reported by data source health checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HealthStatus {
    /// Storage is fully operational.
    Healthy,
    /// Storage is not operational.
    Unhealthy(String),
}
