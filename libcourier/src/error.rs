//! Error types for Courier

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CourierError>;

/// Result of a server API call, before the action layer absorbs it.
pub type ClientResult<T> = std::result::Result<T, ClientError>;

#[derive(Error, Debug)]
pub enum CourierError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Client error: {0}")]
    Client(#[from] ClientError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl CourierError {
    /// Returns the appropriate exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            CourierError::InvalidInput(_) => 3,
            CourierError::Client(e) if e.is_session_expired() => 2,
            CourierError::Client(_) => 1,
            CourierError::Config(_) => 1,
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Read(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Missing required field: {0}")]
    MissingField(String),
}

/// Failure reported by the server API client.
///
/// `Clone` so the same failure can ride inside both a failure change and a
/// log-entry change.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClientError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Server returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

impl ClientError {
    /// True when the server no longer accepts the session token.
    pub fn is_session_expired(&self) -> bool {
        matches!(self, ClientError::Api { status: 401, .. })
    }
}

/// A user-presentable error paired with the raw failure for logging.
///
/// `message_id` is the localization key; `default_message` is the fallback
/// text shown when no translation is available. Created at the failure site
/// and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserFacingError {
    pub message_id: String,
    pub default_message: String,
    pub cause: Option<ClientError>,
}

impl UserFacingError {
    pub fn new(message_id: &str, default_message: &str) -> Self {
        Self {
            message_id: message_id.to_string(),
            default_message: default_message.to_string(),
            cause: None,
        }
    }

    /// Attach the raw failure that produced this error.
    pub fn with_cause(mut self, cause: ClientError) -> Self {
        self.cause = Some(cause);
        self
    }

    /// Wrap a client failure in its user-presentable form.
    pub fn from_client(error: ClientError) -> Self {
        let (message_id, default_message) = match &error {
            ClientError::Api { message, .. } if !message.is_empty() => {
                ("server.request_failed", message.clone())
            }
            ClientError::Api { status, .. } => (
                "server.request_failed",
                format!("The server rejected the request (status {status})."),
            ),
            ClientError::Network(_) => (
                "server.unreachable",
                "Cannot reach the server. Please check your connection.".to_string(),
            ),
            ClientError::MalformedResponse(_) => (
                "server.bad_response",
                "The server returned an unexpected response.".to_string(),
            ),
        };

        Self {
            message_id: message_id.to_string(),
            default_message,
            cause: Some(error),
        }
    }
}

impl std::fmt::Display for UserFacingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.default_message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_invalid_input() {
        let error = CourierError::InvalidInput("empty message".to_string());
        assert_eq!(error.exit_code(), 3);
    }

    #[test]
    fn test_exit_code_session_expired() {
        let error = CourierError::Client(ClientError::Api {
            status: 401,
            message: "Invalid or expired session".to_string(),
        });
        assert_eq!(error.exit_code(), 2);
    }

    #[test]
    fn test_exit_code_other_client_errors() {
        let network = CourierError::Client(ClientError::Network("connection refused".to_string()));
        assert_eq!(network.exit_code(), 1);

        let server = CourierError::Client(ClientError::Api {
            status: 500,
            message: "internal error".to_string(),
        });
        assert_eq!(server.exit_code(), 1);
    }

    #[test]
    fn test_exit_code_config_error() {
        let error = CourierError::Config(ConfigError::MissingField("server.url".to_string()));
        assert_eq!(error.exit_code(), 1);
    }

    #[test]
    fn test_session_expiry_detection() {
        let expired = ClientError::Api {
            status: 401,
            message: "token revoked".to_string(),
        };
        assert!(expired.is_session_expired());

        let forbidden = ClientError::Api {
            status: 403,
            message: "no permission".to_string(),
        };
        assert!(!forbidden.is_session_expired());

        let network = ClientError::Network("timeout".to_string());
        assert!(!network.is_session_expired());
    }

    #[test]
    fn test_error_message_formatting() {
        let error = ClientError::Api {
            status: 500,
            message: "internal error".to_string(),
        };
        assert_eq!(format!("{}", error), "Server returned 500: internal error");

        let error = CourierError::Client(ClientError::Network("refused".to_string()));
        assert_eq!(format!("{}", error), "Client error: Network error: refused");
    }

    #[test]
    fn test_from_client_uses_server_message() {
        let record = UserFacingError::from_client(ClientError::Api {
            status: 404,
            message: "Post not found".to_string(),
        });
        assert_eq!(record.message_id, "server.request_failed");
        assert_eq!(record.default_message, "Post not found");
        assert!(record.cause.is_some());
    }

    #[test]
    fn test_from_client_network_fallback() {
        let record = UserFacingError::from_client(ClientError::Network("refused".to_string()));
        assert_eq!(record.message_id, "server.unreachable");
        assert_eq!(
            record.cause,
            Some(ClientError::Network("refused".to_string()))
        );
    }

    #[test]
    fn test_with_cause_preserves_message() {
        let record = UserFacingError::new("server.ping_failed", "Cannot connect to the server.")
            .with_cause(ClientError::MalformedResponse("{}".to_string()));
        assert_eq!(record.message_id, "server.ping_failed");
        assert_eq!(record.default_message, "Cannot connect to the server.");
        assert_eq!(
            record.cause,
            Some(ClientError::MalformedResponse("{}".to_string()))
        );
    }

    #[test]
    fn test_user_facing_error_display() {
        let record = UserFacingError::new("server.ping_failed", "Cannot connect to the server.");
        assert_eq!(format!("{}", record), "Cannot connect to the server.");
    }
}
