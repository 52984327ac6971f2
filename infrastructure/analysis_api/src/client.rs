use std::time::Duration;

use reqwest::Client;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, error};
use url::Url;

use business::domain::errors::AnalysisError;
use business::domain::shared::value_objects::AuthToken;

/// Shared HTTP configuration for the product analysis API.
#[derive(Debug, Clone)]
pub struct AnalysisApiClient {
    pub client: Client,
    pub base_url: Url,
}

impl AnalysisApiClient {
    /// Builds a client for `base_url`. Without a `timeout` a call waits as
    /// long as the server takes.
    pub fn new(base_url: Url, timeout: Option<Duration>) -> Self {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().unwrap_or_default();

        Self { client, base_url }
    }

    /// Absolute URL for an API path such as `api/v1/analyzeBarcode`.
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.as_str().trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Sends one authenticated JSON POST and returns the parsed success body.
    ///
    /// Non-2xx responses become [`AnalysisError::Server`] with the body's
    /// `message`, or `default_message` when the body carries none. A body
    /// that is not JSON is an [`AnalysisError::Transport`] whatever the status.
    pub async fn post_json<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
        token: &AuthToken,
        default_message: &str,
    ) -> Result<Value, AnalysisError> {
        let url = self.endpoint(path);
        debug!(%url, "Sending analysis request");

        let response = self
            .client
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .header(AUTHORIZATION, token.bearer())
            .json(body)
            .send()
            .await
            .map_err(|e| {
                error!(%url, "Analysis request failed: {}", e);
                AnalysisError::transport(e.to_string())
            })?;

        let status = response.status();
        let data: Value = response.json().await.map_err(|e| {
            error!(%url, status = status.as_u16(), "Failed to parse analysis response: {}", e);
            AnalysisError::transport(e.to_string())
        })?;

        if !status.is_success() {
            let message = server_message(&data).unwrap_or_else(|| default_message.to_string());
            error!(%url, status = status.as_u16(), "Analysis endpoint error: {}", message);
            return Err(AnalysisError::server(status.as_u16(), message));
        }

        debug!(%url, status = status.as_u16(), "Analysis response received");
        Ok(data)
    }
}

/// Reads `message` from an error body. Absent, `null`, `false`, `0` and
/// empty strings count as no message.
fn server_message(body: &Value) -> Option<String> {
    match body.get("message")? {
        Value::Null | Value::Bool(false) => None,
        Value::String(message) if message.is_empty() => None,
        Value::String(message) => Some(message.clone()),
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        other => Some(other.to_string()),
    }
}
