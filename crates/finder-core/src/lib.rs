// SPDX-FileCopyrightText: 2026 Finder Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Finder search history store.
//!
//! This crate provides the error type, the search history model, the
//! tri-state [`Resource`] and the [`Observable`] through which storage
//! results reach the presentation layer. Storage backends implement
//! [`SearchHistoryDataSource`].

pub mod error;
pub mod observable;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::FinderError;
pub use observable::{Emitter, Observable};
pub use traits::SearchHistoryDataSource;
pub use types::{HealthStatus, Resource, ResourceStatus, SearchHistoryItem};
