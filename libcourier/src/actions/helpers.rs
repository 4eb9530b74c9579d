//! Shared plumbing for action functions
//!
//! `dispatch_request` is the request→outcome→changes translation every
//! straightforward action goes through. Actions whose success payload
//! needs extra context (see `files.rs`) inline the same sequence instead.

use std::future::Future;

use tracing::warn;

use crate::change::Change;
use crate::error::{ClientError, UserFacingError};
use crate::store::Store;

use super::errors::log_error_change;

/// Run one network-backed request against the store.
///
/// Dispatches `started` immediately, awaits `op`, then dispatches exactly
/// one terminal batch: `on_success(data)` (one or two changes, dispatched
/// atomically) when the request succeeds, or the failure change plus a
/// log entry when it fails. Session-expired failures additionally force a
/// logout before the failure batch. The failure is absorbed into store
/// state, never returned.
pub(crate) async fn dispatch_request<T, Fut>(
    store: &Store,
    started: Change,
    op: Fut,
    on_success: impl FnOnce(T) -> Vec<Change>,
    on_failure: impl FnOnce(UserFacingError) -> Change,
) where
    Fut: Future<Output = Result<T, ClientError>>,
{
    store.dispatch(started);

    match op.await {
        Ok(data) => store.dispatch_batch(on_success(data)),
        Err(error) => {
            force_logout_if_necessary(&error, store);

            let record = UserFacingError::from_client(error);
            warn!(error = %record, "request failed");
            store.dispatch_batch(vec![on_failure(record.clone()), log_error_change(&record)]);
        }
    }
}

/// Session-expiry collaborator: force a logout when the server no longer
/// accepts the session token. No-op for every other failure.
pub(crate) fn force_logout_if_necessary(error: &ClientError, store: &Store) {
    if error.is_session_expired() {
        warn!("session rejected by server, forcing logout");
        store.dispatch(Change::ForcedLogout);
    }
}
