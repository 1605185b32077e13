//! Read-only views returned by the `/api/ui` endpoints.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Delivery status of a single message.
///
/// Statuses the client does not know about are kept verbatim in
/// [`MessageStatus::Other`] so they still render.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum MessageStatus {
    /// Stored, waiting for the worker.
    Pending,
    /// Handed to the queue.
    Queued,
    /// Picked up by a worker.
    Processing,
    /// Delivered to the external gateway.
    Sent,
    /// Delivery failed.
    Failed,
    /// Any other status string.
    Other(String),
}

impl MessageStatus {
    pub fn as_str(&self) -> &str {
        match self {
            MessageStatus::Pending => "PENDING",
            MessageStatus::Queued => "QUEUED",
            MessageStatus::Processing => "PROCESSING",
            MessageStatus::Sent => "SENT",
            MessageStatus::Failed => "FAILED",
            MessageStatus::Other(s) => s,
        }
    }
}

impl From<String> for MessageStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "PENDING" => MessageStatus::Pending,
            "QUEUED" => MessageStatus::Queued,
            "PROCESSING" => MessageStatus::Processing,
            "SENT" => MessageStatus::Sent,
            "FAILED" => MessageStatus::Failed,
            _ => MessageStatus::Other(value),
        }
    }
}

impl From<MessageStatus> for String {
    fn from(value: MessageStatus) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for MessageStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Conversion status of a broadcast.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum BroadcastStatus {
    /// Still being expanded into per-recipient messages.
    Process,
    /// Fully expanded.
    Done,
    /// Expansion failed.
    Failed,
    /// Any other status string.
    Other(String),
}

impl BroadcastStatus {
    pub fn as_str(&self) -> &str {
        match self {
            BroadcastStatus::Process => "PROCESS",
            BroadcastStatus::Done => "DONE",
            BroadcastStatus::Failed => "FAILED",
            BroadcastStatus::Other(s) => s,
        }
    }
}

impl From<String> for BroadcastStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "PROCESS" => BroadcastStatus::Process,
            "DONE" => BroadcastStatus::Done,
            "FAILED" => BroadcastStatus::Failed,
            _ => BroadcastStatus::Other(value),
        }
    }
}

impl From<BroadcastStatus> for String {
    fn from(value: BroadcastStatus) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for BroadcastStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A message as shown in the message and broadcast-details tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: i64,
    pub recipient: String,
    pub status: MessageStatus,
    /// `"YES"` when the message was produced by a broadcast, `"NO"` otherwise.
    #[serde(default)]
    pub broadcast_message: String,
    /// Formatted by the server, e.g. `15-05-24 10:31:07`.
    pub dt_store: String,
    pub dt_queue: String,
    /// Absent until the message is actually dispatched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dt_send: Option<String>,
    #[serde(default)]
    pub message: String,
}

impl Message {
    pub fn is_broadcast(&self) -> bool {
        self.broadcast_message.eq_ignore_ascii_case("YES")
    }
}

/// A send-to-many operation as listed on the broadcasts page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Broadcast {
    pub id: i64,
    #[serde(default)]
    pub sender: String,
    pub status: BroadcastStatus,
    pub dt_store: String,
    /// Set once the broadcast has been expanded into messages.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dt_convert: Option<String>,
}
