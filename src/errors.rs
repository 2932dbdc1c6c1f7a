use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ToolError {
    #[error("Missing credential or configuration: {0}")]
    MissingCredential(String),

    #[error("Nothing to send: {0}")]
    EmptyInput(String),

    #[error("Required local tool unavailable: {0}")]
    ToolUnavailable(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Chat API returned HTTP {status}: {body}")]
    Http { status: u16, body: String },

    #[error("Failed to send HTTP request: {0}")]
    Transport(String),

    #[error("Malformed chat API response: {0}")]
    MalformedResponse(String),

    #[error("Chat API reported an error: {details}")]
    Api { details: Value },

    #[error("Chat API returned no content")]
    EmptyResult,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ToolError {
    /// Stable snake-case name of the failure category, used as a log field.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::MissingCredential(_) => "missing_credential",
            Self::EmptyInput(_) => "empty_input",
            Self::ToolUnavailable(_) => "tool_unavailable",
            Self::Config(_) => "config",
            Self::Http { .. } => "http",
            Self::Transport(_) => "transport",
            Self::MalformedResponse(_) => "malformed_response",
            Self::Api { .. } => "api",
            Self::EmptyResult => "empty_result",
            Self::Io(_) => "io",
        }
    }

    /// Process exit code for this failure. Every category is terminal.
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        1
    }
}

impl From<reqwest::Error> for ToolError {
    fn from(error: reqwest::Error) -> Self {
        ToolError::Transport(error.to_string())
    }
}

impl From<serde_json::Error> for ToolError {
    fn from(error: serde_json::Error) -> Self {
        ToolError::MalformedResponse(error.to_string())
    }
}

impl From<arboard::Error> for ToolError {
    fn from(error: arboard::Error) -> Self {
        ToolError::ToolUnavailable(format!("clipboard: {error}"))
    }
}
