//! Application state
//!
//! Immutable state snapshot held by the store. All transitions happen
//! through the reducer (see `reducer.rs`).

use std::collections::HashMap;

use crate::error::UserFacingError;
use crate::types::{ChannelMember, ClientConfig, FileInfo, LicenseConfig, PingResponse, User};

/// Lifecycle of one network-backed operation family.
///
/// Every invocation moves `NotStarted | Success | Failure -> Started` and
/// then to exactly one terminal value.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum RequestStatus {
    #[default]
    NotStarted,
    Started,
    Success,
    Failure(UserFacingError),
}

impl RequestStatus {
    pub fn is_started(&self) -> bool {
        matches!(self, RequestStatus::Started)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, RequestStatus::Success)
    }

    /// The recorded error, when the last invocation failed.
    pub fn failure(&self) -> Option<&UserFacingError> {
        match self {
            RequestStatus::Failure(error) => Some(error),
            _ => None,
        }
    }
}

/// Root application state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    /// Status of each operation family
    pub requests: RequestsState,

    /// Data received from the server
    pub server: ServerState,

    /// File metadata keyed by post
    pub files: FilesState,

    /// Identity and team context of the current session
    pub session: SessionState,

    /// Device-local facts
    pub device: DeviceState,

    /// Errors recorded for later inspection
    pub errors: ErrorLogState,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestsState {
    pub ping: RequestStatus,
    pub client_config: RequestStatus,
    pub license: RequestStatus,
    pub log_client_error: RequestStatus,
    pub files_for_post: RequestStatus,
    pub me: RequestStatus,
    pub channel_members: RequestStatus,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ServerState {
    /// Last successful connectivity probe
    pub ping: Option<PingResponse>,

    /// Client-visible configuration
    pub client_config: ClientConfig,

    /// License capabilities
    pub license: LicenseConfig,

    /// Server version, as announced by the server
    pub version: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilesState {
    pub by_post: HashMap<String, Vec<FileInfo>>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    /// Identity the session belongs to, once loaded
    pub me: Option<User>,

    /// Team the user is currently working in
    pub current_team_id: Option<String>,

    /// Channel memberships of the current team
    pub channel_members: Vec<ChannelMember>,

    /// Set when the server rejected the session token
    pub expired: bool,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeviceState {
    /// Is the app in the foreground?
    pub app_active: bool,

    /// Push notification token
    pub token: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ErrorLogState {
    pub entries: Vec<LoggedError>,
}

/// One recorded error, timestamped at the failure site.
#[derive(Debug, Clone, PartialEq)]
pub struct LoggedError {
    pub error: UserFacingError,
    pub logged_at: i64,
}
