//! REST adapter for the Courier server API
//!
//! A thin binding: path construction, bearer auth and JSON decoding.
//! Transport behavior (timeouts, TLS, proxies) is `reqwest`'s.

use std::sync::RwLock;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::client::ServerApi;
use crate::error::{ClientError, ClientResult};
use crate::types::{ChannelMember, ClientConfig, FileInfo, LicenseConfig, LogLevel, PingResponse, User};

const API_PREFIX: &str = "/api/v1";

/// HTTP implementation of [`ServerApi`].
///
/// Token and base URL live behind locks so `set_token`/`set_url` work
/// through a shared reference, matching the trait contract.
pub struct RestServer {
    http: reqwest::Client,
    base_url: RwLock<String>,
    token: RwLock<Option<String>>,
}

impl RestServer {
    pub fn new(base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: RwLock::new(base_url.to_string()),
            token: RwLock::new(None),
        }
    }

    pub fn with_token(base_url: &str, token: &str) -> Self {
        let server = Self::new(base_url);
        server.set_token(token);
        server
    }

    fn endpoint(&self, path: &str) -> String {
        let base = self.base_url.read().unwrap();
        format!("{}{}{}", base.trim_end_matches('/'), API_PREFIX, path)
    }

    fn bearer(&self) -> Option<String> {
        self.token.read().unwrap().clone()
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let mut request = self.http.get(self.endpoint(path));
        if let Some(token) = self.bearer() {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;
        decode(response).await
    }

    async fn post<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<reqwest::Response> {
        let mut request = self.http.post(self.endpoint(path)).json(body);
        if let Some(token) = self.bearer() {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;
        check(response).await
    }
}

#[async_trait]
impl ServerApi for RestServer {
    async fn get_ping(&self) -> ClientResult<PingResponse> {
        self.get("/system/ping").await
    }

    async fn get_client_config(&self) -> ClientResult<ClientConfig> {
        self.get("/config/client").await
    }

    async fn get_license_config(&self) -> ClientResult<LicenseConfig> {
        self.get("/license/client").await
    }

    async fn log_client_error(&self, message: &str, level: LogLevel) -> ClientResult<()> {
        let entry = LogEntryBody {
            message,
            level: level.as_str(),
        };
        self.post("/logs", &entry).await.map(|_| ())
    }

    async fn get_file_infos_for_post(
        &self,
        team_id: &str,
        channel_id: &str,
        post_id: &str,
    ) -> ClientResult<Vec<FileInfo>> {
        self.get(&format!(
            "/teams/{team_id}/channels/{channel_id}/posts/{post_id}/files/info"
        ))
        .await
    }

    async fn get_me(&self) -> ClientResult<User> {
        self.get("/users/me").await
    }

    async fn get_my_channel_members(&self, team_id: &str) -> ClientResult<Vec<ChannelMember>> {
        self.get(&format!("/teams/{team_id}/channels/members/me"))
            .await
    }

    fn set_token(&self, token: &str) {
        *self.token.write().unwrap() = Some(token.to_string());
    }

    fn set_url(&self, url: &str) {
        *self.base_url.write().unwrap() = url.to_string();
    }
}

#[derive(Serialize)]
struct LogEntryBody<'a> {
    message: &'a str,
    level: &'a str,
}

/// Error payload the server attaches to non-2xx responses.
#[derive(Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    message: Option<String>,
}

async fn check(response: reqwest::Response) -> ClientResult<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ApiErrorBody>(&body)
        .ok()
        .and_then(|b| b.message)
        .unwrap_or(body);

    Err(ClientError::Api {
        status: status.as_u16(),
        message,
    })
}

async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
    check(response)
        .await?
        .json()
        .await
        .map_err(|e| ClientError::MalformedResponse(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_base_and_path() {
        let server = RestServer::new("https://chat.example.com");
        assert_eq!(
            server.endpoint("/system/ping"),
            "https://chat.example.com/api/v1/system/ping"
        );
    }

    #[test]
    fn test_endpoint_trims_trailing_slash() {
        let server = RestServer::new("https://chat.example.com/");
        assert_eq!(
            server.endpoint("/users/me"),
            "https://chat.example.com/api/v1/users/me"
        );
    }

    #[test]
    fn test_set_url_replaces_base() {
        let server = RestServer::new("https://old.example.com");
        server.set_url("https://new.example.com");
        assert_eq!(
            server.endpoint("/system/ping"),
            "https://new.example.com/api/v1/system/ping"
        );
    }

    #[test]
    fn test_token_round_trip() {
        let server = RestServer::with_token("https://chat.example.com", "abc123");
        assert_eq!(server.bearer().as_deref(), Some("abc123"));

        server.set_token("def456");
        assert_eq!(server.bearer().as_deref(), Some("def456"));
    }
}
