//! All chat-completion API functionality

pub mod client;
pub mod request;
pub mod response;

// Re-export main types for convenience
pub use client::{ChatTransport, HttpChatClient};
pub use request::{ChatMessage, ChatRequest, Role, build_request};
pub use response::{RawResponse, validate_response};
