//! Server API client abstraction and implementations
//!
//! This module defines the slice of the Courier server API the state layer
//! consumes. Action functions are generic over [`ServerApi`], so the REST
//! adapter and the scripted mock are interchangeable.

use async_trait::async_trait;

use crate::error::ClientResult;
use crate::types::{ChannelMember, ClientConfig, FileInfo, LicenseConfig, LogLevel, PingResponse, User};

pub mod http;

// Mock client is available for all builds (not just tests) to support integration tests
pub mod mock;

/// The server API surface consumed by the action layer.
///
/// All request methods are asynchronous and return the raw
/// [`ClientResult`]; translating outcomes into store changes is the action
/// layer's job. Implementations hold the session token and base URL behind
/// interior mutability so they can be reconfigured through a shared
/// reference.
#[async_trait]
pub trait ServerApi: Send + Sync {
    /// Probe the server.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Network` when the server cannot be reached.
    async fn get_ping(&self) -> ClientResult<PingResponse>;

    /// Fetch the client-visible server configuration.
    async fn get_client_config(&self) -> ClientResult<ClientConfig>;

    /// Fetch the server's license capabilities.
    async fn get_license_config(&self) -> ClientResult<LicenseConfig>;

    /// Submit a client-side error report to the server log.
    async fn log_client_error(&self, message: &str, level: LogLevel) -> ClientResult<()>;

    /// List the metadata of the files attached to a post.
    async fn get_file_infos_for_post(
        &self,
        team_id: &str,
        channel_id: &str,
        post_id: &str,
    ) -> ClientResult<Vec<FileInfo>>;

    /// Fetch the identity the current session belongs to.
    async fn get_me(&self) -> ClientResult<User>;

    /// List the current user's channel memberships in a team.
    async fn get_my_channel_members(&self, team_id: &str) -> ClientResult<Vec<ChannelMember>>;

    /// Replace the session token used for subsequent requests.
    fn set_token(&self, token: &str);

    /// Replace the base URL used for subsequent requests.
    fn set_url(&self, url: &str);
}
