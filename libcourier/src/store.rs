//! Centralized application store
//!
//! The store owns the `AppState` snapshot and applies `Change` values
//! through the pure reducer. Applied batches are broadcast to subscribers
//! over a `tokio::sync::broadcast` channel.
//!
//! # Atomic batches
//!
//! `dispatch_batch` folds the whole batch into state under one lock
//! acquisition and then emits it as a single `StoreUpdate` message, so
//! subscribers never observe a partial batch and concurrent dispatchers
//! never interleave within one. Emission with no subscribers drops the
//! update without blocking.

use std::sync::Mutex;

use tokio::sync::broadcast;

use crate::change::Change;
use crate::reducer::reduce;
use crate::state::AppState;

/// Update receiver type alias
pub type UpdateReceiver = broadcast::Receiver<StoreUpdate>;

/// One applied dispatch: the changes folded into state without interleaving.
#[derive(Debug, Clone)]
pub struct StoreUpdate {
    pub changes: Vec<Change>,
}

pub struct Store {
    state: Mutex<AppState>,
    updates: broadcast::Sender<StoreUpdate>,
}

impl Store {
    pub fn new() -> Self {
        Self::with_capacity(100)
    }

    /// Create a store with the given per-subscriber update buffer capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        let (updates, _) = broadcast::channel(capacity);
        Self {
            state: Mutex::new(AppState::default()),
            updates,
        }
    }

    /// Apply a single change.
    pub fn dispatch(&self, change: Change) {
        self.dispatch_batch(vec![change]);
    }

    /// Apply an ordered sequence of changes as one indivisible update.
    pub fn dispatch_batch(&self, changes: Vec<Change>) {
        if changes.is_empty() {
            return;
        }

        tracing::trace!(count = changes.len(), "applying change batch");

        {
            let mut state = self.state.lock().unwrap();
            let mut next = state.clone();
            for change in &changes {
                next = reduce(next, change);
            }
            *state = next;
        }

        // send() errs when nobody is listening, which is fine
        let _ = self.updates.send(StoreUpdate { changes });
    }

    /// Clone of the current state.
    pub fn snapshot(&self) -> AppState {
        self.state.lock().unwrap().clone()
    }

    /// Subscribe to applied updates.
    ///
    /// The receiver sees every batch applied after subscription, one
    /// message per `dispatch`/`dispatch_batch` call.
    pub fn subscribe(&self) -> UpdateReceiver {
        self.updates.subscribe()
    }

    /// Number of active subscribers, for debugging and metrics.
    pub fn subscriber_count(&self) -> usize {
        self.updates.receiver_count()
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}
