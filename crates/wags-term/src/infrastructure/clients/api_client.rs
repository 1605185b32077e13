#[cfg(test)]
#[path = "api_client_test.rs"]
mod tests;

use reqwest::header::CONTENT_TYPE;
use reqwest::Method;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use wags_types::Broadcast;
use wags_types::ErrorResponse;
use wags_types::LoginRequest;
use wags_types::LoginResponse;
use wags_types::Message;
use wags_types::SendBulkRequest;
use wags_types::SendBulkResponse;
use wags_types::SendMessageRequest;
use wags_types::SendMessageResponse;

use crate::domain::models::ClientError;
use crate::domain::models::Credential;
use crate::domain::models::Period;
use crate::domain::services::SessionState;

pub const API_KEY_HEADER: &str = "X-Api-Key";
const API_FALLBACK_ERROR: &str = "API request failed";
const LOGIN_FALLBACK_ERROR: &str = "Login failed. Please check your credentials.";

fn network_error(err: reqwest::Error) -> ClientError {
    tracing::error!(error = ?err, "WAGS server is not reachable");
    ClientError::Network(err.to_string())
}

fn error_from_body(body: &[u8], fallback: &str) -> ClientError {
    match serde_json::from_slice::<ErrorResponse>(body) {
        Ok(res) if !res.error.is_empty() => ClientError::api(&res.error),
        _ => ClientError::api(fallback),
    }
}

fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T, ClientError> {
    serde_json::from_slice::<T>(body).map_err(|err| ClientError::InvalidResponse(err.to_string()))
}

/// HTTP client for the WAGS server.
///
/// Every call is attempted exactly once. A 401 on an authenticated endpoint
/// ends the session before `SessionExpired` is returned.
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    client: reqwest::Client,
}

impl ApiClient {
    pub fn new(server_url: &str) -> ApiClient {
        return ApiClient {
            base_url: server_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        };
    }

    /// Exchanges a username and key for the credential used by later calls.
    /// A rejected login is reported as `Api`, never as `SessionExpired`.
    pub async fn login(&self, username: &str, key: &str) -> Result<Credential, ClientError> {
        let url = format!("{}/api/auth/login", self.base_url);
        let body = LoginRequest {
            username: username.to_string(),
            key: key.to_string(),
        };

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(network_error)?;

        let status = response.status();
        let bytes = response.bytes().await.map_err(network_error)?;
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), username, "login rejected");
            return Err(error_from_body(&bytes, LOGIN_FALLBACK_ERROR));
        }

        let login = decode::<LoginResponse>(&bytes)?;
        if login.username.is_empty() || login.key.is_empty() {
            return Err(ClientError::InvalidResponse(
                "login response is missing the username or key".to_string(),
            ));
        }

        return Ok(Credential::new(&login.username, &login.key));
    }

    /// Sends one request to `/api{endpoint}` with the session's credential.
    pub async fn request<T: DeserializeOwned>(
        &self,
        session: &mut SessionState,
        method: Method,
        endpoint: &str,
        body: Option<&Value>,
    ) -> Result<T, ClientError> {
        let url = format!("{}/api{}", self.base_url, endpoint);
        let mut builder = self
            .client
            .request(method.clone(), &url)
            .header(CONTENT_TYPE, "application/json");

        if let Some(credential) = session.credential() {
            builder = builder.header(API_KEY_HEADER, credential.api_key.as_str());
        }

        if let Some(body) = body {
            builder = builder.json(body);
        }

        tracing::debug!(method = %method, endpoint, "api request");
        let response = builder.send().await.map_err(network_error)?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            tracing::warn!(endpoint, "api key rejected, ending session");
            session.end_session();
            return Err(ClientError::SessionExpired);
        }

        let bytes = response.bytes().await.map_err(network_error)?;
        if !status.is_success() {
            let err = error_from_body(&bytes, API_FALLBACK_ERROR);
            tracing::error!(status = status.as_u16(), endpoint, error = %err, "api request failed");
            return Err(err);
        }

        decode::<T>(&bytes)
    }

    pub async fn get<T: DeserializeOwned>(
        &self,
        session: &mut SessionState,
        endpoint: &str,
    ) -> Result<T, ClientError> {
        self.request(session, Method::GET, endpoint, None).await
    }

    pub async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        session: &mut SessionState,
        endpoint: &str,
        body: &B,
    ) -> Result<T, ClientError> {
        let body =
            serde_json::to_value(body).map_err(|err| ClientError::InvalidInput(err.to_string()))?;
        self.request(session, Method::POST, endpoint, Some(&body))
            .await
    }

    // The server encodes an empty listing as `null`.
    pub async fn messages(
        &self,
        session: &mut SessionState,
        period: Period,
    ) -> Result<Vec<Message>, ClientError> {
        let endpoint = format!("/ui/messages?{}", period.query());
        let list = self.get::<Option<Vec<Message>>>(session, &endpoint).await?;
        Ok(list.unwrap_or_default())
    }

    pub async fn broadcasts(
        &self,
        session: &mut SessionState,
        period: Period,
    ) -> Result<Vec<Broadcast>, ClientError> {
        let endpoint = format!("/ui/broadcasts?{}", period.query());
        let list = self.get::<Option<Vec<Broadcast>>>(session, &endpoint).await?;
        Ok(list.unwrap_or_default())
    }

    pub async fn broadcast_details(
        &self,
        session: &mut SessionState,
        broadcast_id: i64,
    ) -> Result<Vec<Message>, ClientError> {
        let endpoint = format!("/ui/broadcasts/{broadcast_id}/details");
        let list = self.get::<Option<Vec<Message>>>(session, &endpoint).await?;
        Ok(list.unwrap_or_default())
    }

    pub async fn years(&self, session: &mut SessionState) -> Result<Vec<i32>, ClientError> {
        let list = self.get::<Option<Vec<i32>>>(session, "/ui/years").await?;
        Ok(list.unwrap_or_default())
    }

    pub async fn send_message(
        &self,
        session: &mut SessionState,
        request: &SendMessageRequest,
    ) -> Result<SendMessageResponse, ClientError> {
        self.post(session, "/messages/send", request).await
    }

    pub async fn send_bulk(
        &self,
        session: &mut SessionState,
        request: &SendBulkRequest,
    ) -> Result<SendBulkResponse, ClientError> {
        self.post(session, "/messages/send-bulk", request).await
    }
}
