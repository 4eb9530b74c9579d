//! Mock server client for testing
//!
//! A scripted [`ServerApi`] implementation: every method returns a
//! preconfigured result, records the call, and optionally sleeps to
//! simulate network latency. Used by the integration tests to verify the
//! action layer without a server.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use tokio::time::sleep;

use crate::client::ServerApi;
use crate::error::{ClientError, ClientResult};
use crate::types::{ChannelMember, ClientConfig, FileInfo, LicenseConfig, LogLevel, PingResponse, User};

/// One recorded request, in invocation order.
#[derive(Debug, Clone, PartialEq)]
pub enum RecordedCall {
    GetPing,
    GetClientConfig,
    GetLicenseConfig,
    LogClientError { message: String, level: LogLevel },
    GetFileInfosForPost {
        team_id: String,
        channel_id: String,
        post_id: String,
    },
    GetMe,
    GetMyChannelMembers { team_id: String },
}

/// Scripted mock server.
pub struct MockServer {
    ping: Mutex<ClientResult<PingResponse>>,
    client_config: Mutex<ClientResult<ClientConfig>>,
    license: Mutex<ClientResult<LicenseConfig>>,
    log_client_error: Mutex<ClientResult<()>>,
    files: Mutex<ClientResult<Vec<FileInfo>>>,
    me: Mutex<ClientResult<User>>,
    channel_members: Mutex<ClientResult<Vec<ChannelMember>>>,
    latency: Duration,
    calls: Mutex<Vec<RecordedCall>>,
    token: Mutex<Option<String>>,
    url: Mutex<Option<String>>,
}

impl MockServer {
    /// A mock where every request succeeds with plausible data.
    pub fn new() -> Self {
        Self {
            ping: Mutex::new(Ok(PingResponse {
                version: Some("1.0.0".to_string()),
                status: Some("OK".to_string()),
            })),
            client_config: Mutex::new(Ok(HashMap::new())),
            license: Mutex::new(Ok(HashMap::new())),
            log_client_error: Mutex::new(Ok(())),
            files: Mutex::new(Ok(Vec::new())),
            me: Mutex::new(Ok(User {
                id: "user-1".to_string(),
                username: "ada".to_string(),
                email: "ada@example.com".to_string(),
            })),
            channel_members: Mutex::new(Ok(Vec::new())),
            latency: Duration::ZERO,
            calls: Mutex::new(Vec::new()),
            token: Mutex::new(None),
            url: Mutex::new(None),
        }
    }

    /// A mock where every request fails with the given error.
    pub fn failing(error: ClientError) -> Self {
        let mock = Self::new();
        *mock.ping.lock().unwrap() = Err(error.clone());
        *mock.client_config.lock().unwrap() = Err(error.clone());
        *mock.license.lock().unwrap() = Err(error.clone());
        *mock.log_client_error.lock().unwrap() = Err(error.clone());
        *mock.files.lock().unwrap() = Err(error.clone());
        *mock.me.lock().unwrap() = Err(error.clone());
        *mock.channel_members.lock().unwrap() = Err(error);
        mock
    }

    pub fn with_ping(self, result: ClientResult<PingResponse>) -> Self {
        *self.ping.lock().unwrap() = result;
        self
    }

    pub fn with_client_config(self, result: ClientResult<ClientConfig>) -> Self {
        *self.client_config.lock().unwrap() = result;
        self
    }

    pub fn with_license(self, result: ClientResult<LicenseConfig>) -> Self {
        *self.license.lock().unwrap() = result;
        self
    }

    pub fn with_log_client_error(self, result: ClientResult<()>) -> Self {
        *self.log_client_error.lock().unwrap() = result;
        self
    }

    pub fn with_files(self, result: ClientResult<Vec<FileInfo>>) -> Self {
        *self.files.lock().unwrap() = result;
        self
    }

    pub fn with_me(self, result: ClientResult<User>) -> Self {
        *self.me.lock().unwrap() = result;
        self
    }

    pub fn with_channel_members(self, result: ClientResult<Vec<ChannelMember>>) -> Self {
        *self.channel_members.lock().unwrap() = result;
        self
    }

    /// Add artificial latency before every response.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// All requests received so far, in order.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Total number of requests received.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// The session token last installed via `set_token`.
    pub fn token(&self) -> Option<String> {
        self.token.lock().unwrap().clone()
    }

    /// The base URL last installed via `set_url`.
    pub fn url(&self) -> Option<String> {
        self.url.lock().unwrap().clone()
    }

    async fn respond<T: Clone>(&self, call: RecordedCall, scripted: &Mutex<ClientResult<T>>) -> ClientResult<T> {
        self.calls.lock().unwrap().push(call);

        if !self.latency.is_zero() {
            sleep(self.latency).await;
        }

        scripted.lock().unwrap().clone()
    }
}

impl Default for MockServer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ServerApi for MockServer {
    async fn get_ping(&self) -> ClientResult<PingResponse> {
        self.respond(RecordedCall::GetPing, &self.ping).await
    }

    async fn get_client_config(&self) -> ClientResult<ClientConfig> {
        self.respond(RecordedCall::GetClientConfig, &self.client_config)
            .await
    }

    async fn get_license_config(&self) -> ClientResult<LicenseConfig> {
        self.respond(RecordedCall::GetLicenseConfig, &self.license)
            .await
    }

    async fn log_client_error(&self, message: &str, level: LogLevel) -> ClientResult<()> {
        self.respond(
            RecordedCall::LogClientError {
                message: message.to_string(),
                level,
            },
            &self.log_client_error,
        )
        .await
    }

    async fn get_file_infos_for_post(
        &self,
        team_id: &str,
        channel_id: &str,
        post_id: &str,
    ) -> ClientResult<Vec<FileInfo>> {
        self.respond(
            RecordedCall::GetFileInfosForPost {
                team_id: team_id.to_string(),
                channel_id: channel_id.to_string(),
                post_id: post_id.to_string(),
            },
            &self.files,
        )
        .await
    }

    async fn get_me(&self) -> ClientResult<User> {
        self.respond(RecordedCall::GetMe, &self.me).await
    }

    async fn get_my_channel_members(&self, team_id: &str) -> ClientResult<Vec<ChannelMember>> {
        self.respond(
            RecordedCall::GetMyChannelMembers {
                team_id: team_id.to_string(),
            },
            &self.channel_members,
        )
        .await
    }

    fn set_token(&self, token: &str) {
        *self.token.lock().unwrap() = Some(token.to_string());
    }

    fn set_url(&self, url: &str) {
        *self.url.lock().unwrap() = Some(url.to_string());
    }
}
