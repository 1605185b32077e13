//! Request and response bodies of the authentication and send endpoints.

use serde::{Deserialize, Serialize};

/// Body of `POST /api/auth/login`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub key: String,
}

/// Successful answer of `POST /api/auth/login`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub username: String,
    pub key: String,
    #[serde(default)]
    pub message: String,
}

/// Body of `POST /api/messages/send`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendMessageRequest {
    pub recipient: String,
    pub message: String,
    /// RFC 3339 timestamp of when the user submitted the message.
    pub dt_store: String,
}

/// Answer of `POST /api/messages/send`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendMessageResponse {
    pub message_id: i64,
    #[serde(default)]
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dt_queue: Option<String>,
    #[serde(default)]
    pub info: String,
}

/// Body of `POST /api/messages/send-bulk`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendBulkRequest {
    pub recipients: Vec<String>,
    pub message: String,
    pub dt_store: String,
}

/// Answer of `POST /api/messages/send-bulk`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendBulkResponse {
    pub bulk_message_id: i64,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub info: String,
}

/// Error envelope used by every non-2xx JSON answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}
