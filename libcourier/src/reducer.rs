//! Pure reducer function for state transitions
//!
//! The reducer is a pure function `(State, &Change) -> State`: no I/O, no
//! side effects, deterministic. All business logic and network calls happen
//! in the action functions; the reducer only computes new state values.

use crate::change::Change;
use crate::error::UserFacingError;
use crate::state::{
    AppState, DeviceState, ErrorLogState, FilesState, LoggedError, RequestStatus, RequestsState,
    ServerState, SessionState,
};

/// Apply one change to the state, returning the new state.
pub fn reduce(state: AppState, change: &Change) -> AppState {
    match change {
        // === Connectivity ===
        Change::PingRequest => AppState {
            requests: RequestsState {
                ping: RequestStatus::Started,
                ..state.requests
            },
            ..state
        },

        Change::PingSuccess { data } => AppState {
            requests: RequestsState {
                ping: RequestStatus::Success,
                ..state.requests
            },
            server: ServerState {
                ping: Some(data.clone()),
                ..state.server
            },
            ..state
        },

        Change::PingFailure { error } => fail(state, error, |requests, status| RequestsState {
            ping: status,
            ..requests
        }),

        Change::PingReset => AppState {
            requests: RequestsState {
                ping: RequestStatus::NotStarted,
                ..state.requests
            },
            server: ServerState {
                ping: None,
                ..state.server
            },
            ..state
        },

        // === Server configuration ===
        Change::ClientConfigRequest => AppState {
            requests: RequestsState {
                client_config: RequestStatus::Started,
                ..state.requests
            },
            ..state
        },

        Change::ReceivedClientConfig { data } => AppState {
            server: ServerState {
                client_config: data.clone(),
                ..state.server
            },
            ..state
        },

        Change::ClientConfigSuccess => AppState {
            requests: RequestsState {
                client_config: RequestStatus::Success,
                ..state.requests
            },
            ..state
        },

        Change::ClientConfigFailure { error } => {
            fail(state, error, |requests, status| RequestsState {
                client_config: status,
                ..requests
            })
        }

        Change::LicenseRequest => AppState {
            requests: RequestsState {
                license: RequestStatus::Started,
                ..state.requests
            },
            ..state
        },

        Change::ReceivedLicense { data } => AppState {
            server: ServerState {
                license: data.clone(),
                ..state.server
            },
            ..state
        },

        Change::LicenseSuccess => AppState {
            requests: RequestsState {
                license: RequestStatus::Success,
                ..state.requests
            },
            ..state
        },

        Change::LicenseFailure { error } => fail(state, error, |requests, status| RequestsState {
            license: status,
            ..requests
        }),

        // === Client-side error reporting ===
        Change::LogClientErrorRequest => AppState {
            requests: RequestsState {
                log_client_error: RequestStatus::Started,
                ..state.requests
            },
            ..state
        },

        Change::LogClientErrorSuccess => AppState {
            requests: RequestsState {
                log_client_error: RequestStatus::Success,
                ..state.requests
            },
            ..state
        },

        Change::LogClientErrorFailure { error } => {
            fail(state, error, |requests, status| RequestsState {
                log_client_error: status,
                ..requests
            })
        }

        // === Files ===
        Change::FetchFilesForPostRequest => AppState {
            requests: RequestsState {
                files_for_post: RequestStatus::Started,
                ..state.requests
            },
            ..state
        },

        Change::ReceivedFilesForPost { post_id, files } => {
            let mut by_post = state.files.by_post.clone();
            by_post.insert(post_id.clone(), files.clone());

            AppState {
                files: FilesState { by_post },
                ..state
            }
        }

        Change::FetchFilesForPostSuccess => AppState {
            requests: RequestsState {
                files_for_post: RequestStatus::Success,
                ..state.requests
            },
            ..state
        },

        Change::FetchFilesForPostFailure { error } => {
            fail(state, error, |requests, status| RequestsState {
                files_for_post: status,
                ..requests
            })
        }

        // === Identity ===
        Change::MeRequest => AppState {
            requests: RequestsState {
                me: RequestStatus::Started,
                ..state.requests
            },
            ..state
        },

        Change::ReceivedMe { user } => AppState {
            session: SessionState {
                me: Some(user.clone()),
                // a freshly loaded identity means the session is valid again
                expired: false,
                ..state.session
            },
            ..state
        },

        Change::MeSuccess => AppState {
            requests: RequestsState {
                me: RequestStatus::Success,
                ..state.requests
            },
            ..state
        },

        Change::MeFailure { error } => fail(state, error, |requests, status| RequestsState {
            me: status,
            ..requests
        }),

        // === Channel memberships ===
        Change::ChannelMembersRequest => AppState {
            requests: RequestsState {
                channel_members: RequestStatus::Started,
                ..state.requests
            },
            ..state
        },

        Change::ReceivedChannelMembers { members } => AppState {
            session: SessionState {
                channel_members: members.clone(),
                ..state.session
            },
            ..state
        },

        Change::ChannelMembersSuccess => AppState {
            requests: RequestsState {
                channel_members: RequestStatus::Success,
                ..state.requests
            },
            ..state
        },

        Change::ChannelMembersFailure { error } => {
            fail(state, error, |requests, status| RequestsState {
                channel_members: status,
                ..requests
            })
        }

        // === Device and app lifecycle ===
        Change::ReceivedAppState { active } => AppState {
            device: DeviceState {
                app_active: *active,
                ..state.device
            },
            ..state
        },

        Change::ReceivedDeviceToken { token } => AppState {
            device: DeviceState {
                token: Some(token.clone()),
                ..state.device
            },
            ..state
        },

        Change::ReceivedServerVersion { version } => AppState {
            server: ServerState {
                version: Some(version.clone()),
                ..state.server
            },
            ..state
        },

        Change::SelectedTeam { team_id } => AppState {
            session: SessionState {
                current_team_id: Some(team_id.clone()),
                ..state.session
            },
            ..state
        },

        // === Session ===
        Change::ForcedLogout => AppState {
            session: SessionState {
                me: None,
                current_team_id: None,
                channel_members: Vec::new(),
                expired: true,
            },
            ..state
        },

        // === Error log ===
        Change::LogError { error, logged_at } => {
            let mut entries = state.errors.entries.clone();
            entries.push(LoggedError {
                error: error.clone(),
                logged_at: *logged_at,
            });

            AppState {
                errors: ErrorLogState { entries },
                ..state
            }
        }
    }
}

fn fail(
    state: AppState,
    error: &UserFacingError,
    set: impl FnOnce(RequestsState, RequestStatus) -> RequestsState,
) -> AppState {
    AppState {
        requests: set(state.requests, RequestStatus::Failure(error.clone())),
        ..state
    }
}
