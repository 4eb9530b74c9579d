//! File metadata actions

use crate::change::Change;
use crate::client::ServerApi;
use crate::error::UserFacingError;
use crate::store::Store;

use super::errors::log_error_change;
use super::helpers::force_logout_if_necessary;

/// Fetch the metadata of the files attached to a post.
///
/// Inlined rather than routed through the shared request plumbing: the
/// success payload pairs the file list with the post it belongs to.
pub async fn get_files_for_post(
    client: &impl ServerApi,
    store: &Store,
    team_id: &str,
    channel_id: &str,
    post_id: &str,
) {
    store.dispatch(Change::FetchFilesForPostRequest);

    let files = match client
        .get_file_infos_for_post(team_id, channel_id, post_id)
        .await
    {
        Ok(files) => files,
        Err(error) => {
            force_logout_if_necessary(&error, store);

            let record = UserFacingError::from_client(error);
            store.dispatch_batch(vec![
                Change::FetchFilesForPostFailure {
                    error: record.clone(),
                },
                log_error_change(&record),
            ]);
            return;
        }
    };

    store.dispatch_batch(vec![
        Change::ReceivedFilesForPost {
            post_id: post_id.to_string(),
            files,
        },
        Change::FetchFilesForPostSuccess,
    ]);
}
