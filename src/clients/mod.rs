//! Capabilities backed by the local system: credential store, clipboard and git

pub mod clipboard;
pub mod git;
pub mod secrets;

pub use clipboard::{ClipboardReader, ClipboardWriter, SystemClipboard};
pub use git::{DiffSource, GitDiffSource};
pub use secrets::{CommandSecretProvider, SecretProvider, StaticSecret};
