// SPDX-FileCopyrightText: 2026 Finder Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Observable result delivery.
//!
//! An [`Emitter`] pushes [`Resource`] states into an unbounded channel and
//! never blocks, so it can be used from the database thread. The matching
//! [`Observable`] hands the states to whoever polls it: observer code runs
//! on the polling task (or on the runtime passed to
//! [`Observable::observe_on`]) and never on the thread that produced the
//! state.

use std::pin::Pin;
use std::task::{Context, Poll};

use futures_core::Stream;
use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::trace;

use crate::error::FinderError;
use crate::types::Resource;

/// Creates a connected emitter/observable pair for one request.
pub fn channel<T>() -> (Emitter<T>, Observable<T>) {
    let (tx, rx) = mpsc::unbounded_channel();
    (Emitter { tx }, Observable { rx })
}

/// Producer half of a request's state stream.
#[derive(Debug)]
pub struct Emitter<T> {
    tx: mpsc::UnboundedSender<Resource<T>>,
}

impl<T> Emitter<T> {
    /// Queues a state for the observer.
    ///
    /// Returns `false` when the observer has already been dropped, in which
    /// case the state is discarded.
    pub fn emit(&self, resource: Resource<T>) -> bool {
        let status = resource.status();
        match self.tx.send(resource) {
            Ok(()) => true,
            Err(_) => {
                trace!(%status, "observer dropped, discarding state");
                false
            }
        }
    }
}

/// Consumer half of a request's state stream.
#[derive(Debug)]
pub struct Observable<T> {
    rx: mpsc::UnboundedReceiver<Resource<T>>,
}

impl<T> Observable<T> {
    /// Waits for the next state.
    ///
    /// Returns `None` once the emitter is gone and every queued state has
    /// been delivered.
    pub async fn next(&mut self) -> Option<Resource<T>> {
        self.rx.recv().await
    }

    /// Returns the next state if one is already queued.
    pub fn try_next(&mut self) -> Option<Resource<T>> {
        self.rx.try_recv().ok()
    }

    /// Waits for the terminal state, skipping `Loading`.
    ///
    /// If the producer went away without a terminal state the result is
    /// `Error(WorkerClosed)`.
    pub async fn settled(mut self) -> Resource<T> {
        while let Some(resource) = self.next().await {
            if resource.is_terminal() {
                return resource;
            }
        }
        Resource::error(FinderError::WorkerClosed)
    }

    /// Delivers every state, in order, to `observer` on a task spawned on
    /// `handle`.
    ///
    /// The task ends after the producer is gone and the stream is drained.
    pub fn observe_on<F>(mut self, handle: &Handle, mut observer: F) -> JoinHandle<()>
    where
        T: Send + 'static,
        F: FnMut(Resource<T>) + Send + 'static,
    {
        handle.spawn(async move {
            while let Some(resource) = self.next().await {
                observer(resource);
            }
        })
    }
}

impl<T> Stream for Observable<T> {
    type Item = Resource<T>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.get_mut().rx.poll_recv(cx)
    }
}
