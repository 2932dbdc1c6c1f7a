//! Chat-completion request construction

use serde::{Deserialize, Serialize};

use crate::core::config::TemperaturePolicy;
use crate::errors::ToolError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

/// A role-tagged message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

/// Body of a chat-completion POST.
///
/// Always one system message followed by one user message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub model: String,
    pub temperature: f64,
    pub messages: Vec<ChatMessage>,
}

impl ChatRequest {
    #[must_use]
    pub fn user_content(&self) -> Option<&str> {
        self.messages
            .iter()
            .find(|m| m.role == Role::User)
            .map(|m| m.content.as_str())
    }

    /// Serialized request body. The serializer escapes quotes, backslashes and
    /// control characters in every content field.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String, ToolError> {
        serde_json::to_string(self).map_err(|e| ToolError::Config(format!("request body: {e}")))
    }
}

/// Build the request for `payload`.
///
/// # Errors
///
/// Returns `ToolError::EmptyInput` for a blank payload and `ToolError::Config` for a
/// blank model or system prompt.
pub fn build_request(
    payload: &str,
    model: &str,
    temperatures: &TemperaturePolicy,
    system_prompt: &str,
) -> Result<ChatRequest, ToolError> {
    if payload.trim().is_empty() {
        return Err(ToolError::EmptyInput("payload is empty".to_string()));
    }
    if model.trim().is_empty() {
        return Err(ToolError::Config("model identifier is empty".to_string()));
    }
    if system_prompt.trim().is_empty() {
        return Err(ToolError::Config("system prompt is empty".to_string()));
    }

    Ok(ChatRequest {
        model: model.to_string(),
        temperature: temperatures.temperature_for(model),
        messages: vec![
            ChatMessage {
                role: Role::System,
                content: system_prompt.to_string(),
            },
            ChatMessage {
                role: Role::User,
                content: payload.to_string(),
            },
        ],
    })
}
