//! Chat-completion API client
//!
//! Sends one request per invocation and hands the raw status and body back for
//! validation. No retries, and redirects are not followed.

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::redirect::Policy;
use tracing::{debug, info};
use url::Url;

use super::request::ChatRequest;
use super::response::RawResponse;
use crate::core::config::AppConfig;
use crate::errors::ToolError;

/// Delivers a chat request and returns the endpoint's raw answer.
#[async_trait]
pub trait ChatTransport: Send + Sync {
    /// # Errors
    ///
    /// Returns `ToolError::Transport` when no HTTP response was received.
    async fn send(&self, request: &ChatRequest) -> Result<RawResponse, ToolError>;
}

/// `reqwest` transport posting JSON with a bearer token.
pub struct HttpChatClient {
    client: Client,
    endpoint: Url,
    api_key: String,
}

impl HttpChatClient {
    /// # Errors
    ///
    /// Returns `ToolError::Transport` if the HTTP client cannot be built.
    pub fn new(config: &AppConfig) -> Result<Self, ToolError> {
        // A 3xx must reach validation as-is, not turn into a second request.
        let mut builder = Client::builder().redirect(Policy::none());
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| ToolError::Transport(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            api_key: config.api_key.clone(),
        })
    }

    /// Build the POST without sending it.
    ///
    /// # Errors
    ///
    /// Returns `ToolError::Config` if the credential is not a valid header value.
    pub fn build_http_request(&self, request: &ChatRequest) -> Result<reqwest::Request, ToolError> {
        let mut headers = HeaderMap::new();
        let mut auth_value = HeaderValue::from_str(&format!("Bearer {}", self.api_key))
            .map_err(|e| ToolError::Config(format!("Invalid Authorization header: {e}")))?;
        auth_value.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth_value);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        self.client
            .post(self.endpoint.clone())
            .headers(headers)
            .body(request.to_json()?)
            .build()
            .map_err(|e| ToolError::Transport(format!("Failed to build request: {e}")))
    }
}

#[async_trait]
impl ChatTransport for HttpChatClient {
    async fn send(&self, request: &ChatRequest) -> Result<RawResponse, ToolError> {
        #[cfg(feature = "debug-logs")]
        info!("Sending chat request:\n{:?}", request);

        #[cfg(not(feature = "debug-logs"))]
        info!(
            model = %request.model,
            temperature = request.temperature,
            payload_bytes = request.user_content().map_or(0, str::len),
            "Sending chat request"
        );

        let http_request = self.build_http_request(request)?;
        let response = self.client.execute(http_request).await.map_err(|e| {
            if e.is_timeout() {
                ToolError::Transport(format!("Chat API request timed out: {e}"))
            } else {
                ToolError::Transport(format!("Chat API request failed: {e}"))
            }
        })?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| {
            ToolError::Transport(format!(
                "Failed to read chat API response body (status {status}): {e}"
            ))
        })?;
        debug!(status, body_bytes = body.len(), "Received chat response");

        Ok(RawResponse { status, body })
    }
}
