use thiserror::Error;

/// Failures surfaced by the session/request layer.
///
/// `SessionExpired` is only produced after the session has already been torn
/// down, so callers never need to log out themselves.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("{message}")]
    Api { message: String },
    #[error("Session expired. Please login again.")]
    SessionExpired,
    #[error("{0}")]
    InvalidInput(String),
    #[error("Invalid response from server: {0}")]
    InvalidResponse(String),
    #[error("{0}")]
    InvalidState(String),
}

impl ClientError {
    pub fn api(message: &str) -> ClientError {
        return ClientError::Api {
            message: message.to_string(),
        };
    }
}
