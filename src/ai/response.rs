//! Chat-completion response validation

use serde_json::Value;
use tracing::debug;

use crate::errors::ToolError;

/// Status and body exactly as received from the endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    #[must_use]
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Extract `choices[0].message.content` from a chat-completion response.
///
/// Checks run in order: transport status, JSON syntax, top-level `error`, content.
/// A non-2xx status fails before the body is looked at.
///
/// # Errors
///
/// `Http` for status >= 300, `MalformedResponse` for a body that is not JSON,
/// `Api` when the body carries an `error` object, `EmptyResult` when the content is
/// missing, null or empty.
pub fn validate_response(status: u16, body: &str) -> Result<String, ToolError> {
    if status >= 300 {
        return Err(ToolError::Http {
            status,
            body: body.to_string(),
        });
    }

    let json: Value = serde_json::from_str(body)?;

    if let Some(details) = json.get("error").filter(|e| !e.is_null()) {
        debug!(error = %details, "Chat API returned an error object");
        return Err(ToolError::Api {
            details: details.clone(),
        });
    }

    json.pointer("/choices/0/message/content")
        .and_then(Value::as_str)
        .filter(|content| !content.is_empty())
        .map(str::to_string)
        .ok_or(ToolError::EmptyResult)
}
