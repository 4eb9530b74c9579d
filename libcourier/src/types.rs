//! Core types for Courier

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Response of the server connectivity probe.
///
/// A healthy server always reports its version; a reverse proxy or captive
/// portal answering in its place usually does not.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PingResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// Client-visible server configuration, as the server reports it.
pub type ClientConfig = HashMap<String, String>;

/// License capabilities, as the server reports them.
pub type LicenseConfig = HashMap<String, String>;

/// Metadata of one file attached to a post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileInfo {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub extension: String,
    #[serde(default)]
    pub size: u64,
    #[serde(default)]
    pub mime_type: String,
}

/// The identity the current session belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub email: String,
}

/// Membership of the current user in one channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelMember {
    pub channel_id: String,
    pub user_id: String,
    #[serde(default)]
    pub roles: String,
}

/// Transient token + server URL pair read from local storage by the caller.
///
/// This layer only forwards the bundle; it never stores it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub token: String,
    pub server_url: String,
}

/// Severity attached to a client-side error report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    Error,
    Warning,
    Info,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "ERROR",
            LogLevel::Warning => "WARNING",
            LogLevel::Info => "INFO",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ping_response_without_version() {
        let ping: PingResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(ping.version, None);
        assert_eq!(ping.status, None);
    }

    #[test]
    fn test_ping_response_with_version() {
        let ping: PingResponse =
            serde_json::from_str(r#"{"version": "5.0", "status": "OK"}"#).unwrap();
        assert_eq!(ping.version.as_deref(), Some("5.0"));
        assert_eq!(ping.status.as_deref(), Some("OK"));
    }

    #[test]
    fn test_file_info_defaults_optional_fields() {
        let file: FileInfo =
            serde_json::from_str(r#"{"id": "f1", "name": "notes.txt"}"#).unwrap();
        assert_eq!(file.extension, "");
        assert_eq!(file.size, 0);
    }

    #[test]
    fn test_log_level_as_str() {
        assert_eq!(LogLevel::Error.as_str(), "ERROR");
        assert_eq!(LogLevel::Warning.as_str(), "WARNING");
        assert_eq!(LogLevel::Info.as_str(), "INFO");
    }
}
