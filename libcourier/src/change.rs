//! Store changes
//!
//! All store state transitions are described by `Change` values. Action
//! functions build changes and hand them to the store; the reducer (see
//! `reducer.rs`) is responsible for applying them. A change is immutable
//! once created and consumed exactly once by the store.

use serde::{Deserialize, Serialize};

use crate::error::UserFacingError;
use crate::types::{ChannelMember, ClientConfig, FileInfo, LicenseConfig, PingResponse, User};

/// One state transition to apply to the store.
///
/// Network-backed operations follow a request/terminal pattern: a `*Request`
/// change when the call is issued, then either a received+success pair or a
/// failure carrying the user-presentable error. The remaining variants record
/// local facts and have no request phase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Change {
    // === Connectivity ===
    PingRequest,
    PingSuccess { data: PingResponse },
    PingFailure { error: UserFacingError },
    PingReset,

    // === Server configuration ===
    ClientConfigRequest,
    ReceivedClientConfig { data: ClientConfig },
    ClientConfigSuccess,
    ClientConfigFailure { error: UserFacingError },

    LicenseRequest,
    ReceivedLicense { data: LicenseConfig },
    LicenseSuccess,
    LicenseFailure { error: UserFacingError },

    // === Client-side error reporting ===
    LogClientErrorRequest,
    LogClientErrorSuccess,
    LogClientErrorFailure { error: UserFacingError },

    // === Files ===
    FetchFilesForPostRequest,
    ReceivedFilesForPost { post_id: String, files: Vec<FileInfo> },
    FetchFilesForPostSuccess,
    FetchFilesForPostFailure { error: UserFacingError },

    // === Identity ===
    MeRequest,
    ReceivedMe { user: User },
    MeSuccess,
    MeFailure { error: UserFacingError },

    // === Channel memberships ===
    ChannelMembersRequest,
    ReceivedChannelMembers { members: Vec<ChannelMember> },
    ChannelMembersSuccess,
    ChannelMembersFailure { error: UserFacingError },

    // === Device and app lifecycle ===
    ReceivedAppState { active: bool },
    ReceivedDeviceToken { token: String },
    ReceivedServerVersion { version: String },
    SelectedTeam { team_id: String },

    // === Session ===
    ForcedLogout,

    // === Error log ===
    LogError {
        error: UserFacingError,
        logged_at: i64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_change_serialization_is_tagged() {
        let change = Change::ReceivedServerVersion {
            version: "9.4.0".to_string(),
        };

        let json = serde_json::to_string(&change).unwrap();
        assert!(json.contains("received_server_version"));
        assert!(json.contains("9.4.0"));

        let back: Change = serde_json::from_str(&json).unwrap();
        assert_eq!(back, change);
    }

    #[test]
    fn test_failure_change_carries_error_record() {
        let change = Change::PingFailure {
            error: UserFacingError::new("server.ping_failed", "Cannot connect to the server."),
        };

        let json = serde_json::to_string(&change).unwrap();
        let back: Change = serde_json::from_str(&json).unwrap();
        assert_eq!(back, change);
    }
}
