//! Channel membership actions

use crate::change::Change;
use crate::client::ServerApi;
use crate::store::Store;

use super::helpers::dispatch_request;

/// Fetch the current user's channel memberships in a team.
pub async fn get_my_channel_members(client: &impl ServerApi, store: &Store, team_id: &str) {
    dispatch_request(
        store,
        Change::ChannelMembersRequest,
        client.get_my_channel_members(team_id),
        |members| {
            vec![
                Change::ReceivedChannelMembers { members },
                Change::ChannelMembersSuccess,
            ]
        },
        |error| Change::ChannelMembersFailure { error },
    )
    .await;
}
