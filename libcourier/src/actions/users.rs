//! Identity actions

use crate::change::Change;
use crate::client::ServerApi;
use crate::store::Store;

use super::helpers::dispatch_request;

/// Load the identity the current session belongs to.
pub async fn load_me(client: &impl ServerApi, store: &Store) {
    dispatch_request(
        store,
        Change::MeRequest,
        client.get_me(),
        |user| vec![Change::ReceivedMe { user }, Change::MeSuccess],
        |error| Change::MeFailure { error },
    )
    .await;
}
