//! General server actions: connectivity, configuration and app lifecycle

use tracing::debug;

use crate::change::Change;
use crate::client::ServerApi;
use crate::error::{ClientError, UserFacingError};
use crate::store::Store;
use crate::types::{Credentials, LogLevel};

use super::channels::get_my_channel_members;
use super::errors::log_error_change;
use super::helpers::dispatch_request;
use super::users::load_me;

/// Probe the server and record the outcome.
///
/// A reachable server that does not report a version is treated as a failed
/// probe: the fixed connectivity error is dispatched as the failure, while
/// the malformed payload is logged as the underlying cause. Transport
/// failures surface the same fixed error.
pub async fn get_ping(client: &impl ServerApi, store: &Store) {
    store.dispatch(Change::PingRequest);

    let ping_error = UserFacingError::new(
        "server.ping_failed",
        "Cannot connect to the server. Please check your server URL and internet connection.",
    );

    match client.get_ping().await {
        Ok(data) if data.version.is_some() => {
            store.dispatch(Change::PingSuccess { data });
        }
        Ok(data) => {
            // reachable, but not answering as a Courier server
            let payload = serde_json::to_string(&data).unwrap_or_default();
            let underlying = ping_error
                .clone()
                .with_cause(ClientError::MalformedResponse(payload));

            store.dispatch_batch(vec![
                Change::PingFailure { error: ping_error },
                log_error_change(&underlying),
            ]);
        }
        Err(error) => {
            let underlying = UserFacingError::from_client(error);

            store.dispatch_batch(vec![
                Change::PingFailure { error: ping_error },
                log_error_change(&underlying),
            ]);
        }
    }
}

/// Clear any recorded connectivity outcome.
pub fn reset_ping(store: &Store) {
    store.dispatch(Change::PingReset);
}

/// Fetch the client-visible server configuration.
pub async fn get_client_config(client: &impl ServerApi, store: &Store) {
    dispatch_request(
        store,
        Change::ClientConfigRequest,
        client.get_client_config(),
        |data| {
            vec![
                Change::ReceivedClientConfig { data },
                Change::ClientConfigSuccess,
            ]
        },
        |error| Change::ClientConfigFailure { error },
    )
    .await;
}

/// Fetch the server's license capabilities.
pub async fn get_license_config(client: &impl ServerApi, store: &Store) {
    dispatch_request(
        store,
        Change::LicenseRequest,
        client.get_license_config(),
        |data| vec![Change::ReceivedLicense { data }, Change::LicenseSuccess],
        |error| Change::LicenseFailure { error },
    )
    .await;
}

/// Report a client-side error to the server log.
pub async fn log_client_error(
    client: &impl ServerApi,
    store: &Store,
    message: &str,
    level: LogLevel,
) {
    dispatch_request(
        store,
        Change::LogClientErrorRequest,
        client.log_client_error(message, level),
        |_| vec![Change::LogClientErrorSuccess],
        |error| Change::LogClientErrorFailure { error },
    )
    .await;
}

/// Record the app moving between foreground and background.
///
/// Returning to the foreground refreshes the channel memberships of the
/// currently selected team, when one is selected, as a continuation of the
/// same call.
pub async fn set_app_state(client: &impl ServerApi, store: &Store, active: bool) {
    store.dispatch(Change::ReceivedAppState { active });

    if active {
        if let Some(team_id) = store.snapshot().session.current_team_id {
            debug!(team_id = %team_id, "app foregrounded, refreshing channel memberships");
            get_my_channel_members(client, store, &team_id).await;
        }
    }
}

/// Record the device's push notification token.
pub fn set_device_token(store: &Store, token: &str) {
    store.dispatch(Change::ReceivedDeviceToken {
        token: token.to_string(),
    });
}

/// Record the version announced by the server.
pub fn set_server_version(store: &Store, version: &str) {
    store.dispatch(Change::ReceivedServerVersion {
        version: version.to_string(),
    });
}

/// Record the team the user is working in.
pub fn select_team(store: &Store, team_id: &str) {
    store.dispatch(Change::SelectedTeam {
        team_id: team_id.to_string(),
    });
}

/// Point the client at locally stored credentials, then load the identity
/// they belong to as a continuation.
pub async fn set_store_from_credentials(
    client: &impl ServerApi,
    store: &Store,
    credentials: &Credentials,
) {
    client.set_token(&credentials.token);
    client.set_url(&credentials.server_url);

    load_me(client, store).await
}
