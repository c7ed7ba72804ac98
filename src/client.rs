//! Async HTTP client for the relay's device-facing protocol.
//!
//! [`RelayClient`] issues exactly the calls a polling microcontroller or
//! the control page makes: queue a command, poll for the pending command,
//! and report status.

use reqwest::{StatusCode, Url};
use serde_json::Value;

use crate::api::dto::{DEVICE_ID_FIELD, QueueCommandResponse, StatusAckResponse};
use crate::domain::{Command, DeviceId};
use crate::error::ErrorResponse;

/// Errors returned by [`RelayClient`].
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Transport failure or undecodable response body.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The base URL could not be joined with an endpoint path.
    #[error("invalid relay url: {0}")]
    InvalidUrl(String),

    /// The relay answered with a non-success status.
    #[error("relay rejected request ({status}): {message}")]
    Rejected {
        /// HTTP status returned by the relay.
        status: StatusCode,
        /// `error` field of the response body, if any.
        message: String,
    },
}

/// Client for a single relay base URL.
#[derive(Debug, Clone)]
pub struct RelayClient {
    http: reqwest::Client,
    base_url: String,
}

impl RelayClient {
    /// Creates a client for `base_url` (e.g. `http://127.0.0.1:3000`).
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Returns the base URL with any trailing `/` removed.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `POST /device/command` — queues `command` for `device_id`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport failure or a non-2xx answer.
    pub async fn queue_command(
        &self,
        device_id: &DeviceId,
        command: &Command,
    ) -> Result<QueueCommandResponse, ClientError> {
        let body = serde_json::json!({
            "deviceId": device_id,
            "command": command,
        });
        let response = self
            .http
            .post(self.endpoint("/device/command")?)
            .json(&body)
            .send()
            .await?;
        Ok(check(response).await?.json().await?)
    }

    /// `GET /device/commands?deviceId=...` — takes the pending command.
    ///
    /// Returns `None` when nothing is queued. A returned command has been
    /// removed from the relay.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport failure or a non-2xx answer.
    pub async fn poll_command(&self, device_id: &DeviceId) -> Result<Option<Command>, ClientError> {
        let url = Url::parse_with_params(
            self.endpoint("/device/commands")?.as_str(),
            [(DEVICE_ID_FIELD, device_id.as_str())],
        )
        .map_err(|e| ClientError::InvalidUrl(e.to_string()))?;
        let response = self.http.get(url).send().await?;
        Ok(check(response).await?.json().await?)
    }

    /// `POST /device/status` — reports an arbitrary status payload.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport failure or a non-2xx answer.
    pub async fn report_status(&self, status: &Value) -> Result<StatusAckResponse, ClientError> {
        let response = self
            .http
            .post(self.endpoint("/device/status")?)
            .json(status)
            .send()
            .await?;
        Ok(check(response).await?.json().await?)
    }

    fn endpoint(&self, path: &str) -> Result<Url, ClientError> {
        Url::parse(&format!("{}{path}", self.base_url))
            .map_err(|e| ClientError::InvalidUrl(e.to_string()))
    }
}

/// Turns a non-2xx response into [`ClientError::Rejected`].
async fn check(response: reqwest::Response) -> Result<reqwest::Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let message = response
        .json::<ErrorResponse>()
        .await
        .map(|body| body.error)
        .unwrap_or_default();
    Err(ClientError::Rejected { status, message })
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_trimmed() {
        let client = RelayClient::new("http://relay.local:3000/");
        assert_eq!(client.base_url(), "http://relay.local:3000");
    }

    #[test]
    fn endpoint_joins_path() {
        let client = RelayClient::new("http://relay.local:3000/prod");
        let Ok(url) = client.endpoint("/device/command") else {
            panic!("valid url");
        };
        assert_eq!(url.as_str(), "http://relay.local:3000/prod/device/command");
    }

    #[test]
    fn invalid_base_url_is_reported() {
        let client = RelayClient::new("not a url");
        assert!(matches!(
            client.endpoint("/device/command"),
            Err(ClientError::InvalidUrl(_))
        ));
    }
}
