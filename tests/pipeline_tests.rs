use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use gptools::ai::{ChatRequest, ChatTransport, RawResponse, Role};
use gptools::clients::{ClipboardReader, ClipboardWriter, DiffSource};
use gptools::core::config::{AppConfig, DEFAULT_MODEL};
use gptools::core::models::ToolKind;
use gptools::errors::ToolError;
use gptools::features::{run_commit_message, run_file_naming};
use gptools::prompt::{COMMIT_MESSAGE_PROMPT, FILE_NAME_PROMPT, TRUNCATION_NOTICE};

/// Transport that answers with a fixed response and records what it was sent.
struct FakeTransport {
    response: RawResponse,
    calls: AtomicUsize,
    last_request: Mutex<Option<ChatRequest>>,
}

impl FakeTransport {
    fn replying(status: u16, body: &str) -> Self {
        Self {
            response: RawResponse::new(status, body),
            calls: AtomicUsize::new(0),
            last_request: Mutex::new(None),
        }
    }

    fn with_content(content: &str) -> Self {
        let body = serde_json::json!({
            "choices": [{"message": {"role": "assistant", "content": content}}]
        });
        Self::replying(200, &body.to_string())
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn last_request(&self) -> ChatRequest {
        self.last_request.lock().unwrap().clone().expect("no request sent")
    }
}

#[async_trait]
impl ChatTransport for FakeTransport {
    async fn send(&self, request: &ChatRequest) -> Result<RawResponse, ToolError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_request.lock().unwrap() = Some(request.clone());
        Ok(self.response.clone())
    }
}

struct FakeDiff(String);

impl DiffSource for FakeDiff {
    fn staged_diff(&self) -> Result<String, ToolError> {
        Ok(self.0.clone())
    }
}

struct MissingGit;

impl DiffSource for MissingGit {
    fn staged_diff(&self) -> Result<String, ToolError> {
        Err(ToolError::ToolUnavailable("git is not installed".to_string()))
    }
}

#[derive(Default)]
struct FakeClipboard {
    contents: String,
    writes: Vec<String>,
}

impl FakeClipboard {
    fn holding(text: &str) -> Self {
        Self {
            contents: text.to_string(),
            writes: Vec::new(),
        }
    }
}

impl ClipboardReader for FakeClipboard {
    fn read_text(&mut self) -> Result<String, ToolError> {
        Ok(self.contents.clone())
    }
}

impl ClipboardWriter for FakeClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ToolError> {
        self.writes.push(text.to_string());
        Ok(())
    }
}

/// Clipboard that exists but rejects every write.
struct FailingClipboard;

impl ClipboardWriter for FailingClipboard {
    fn write_text(&mut self, _text: &str) -> Result<(), ToolError> {
        Err(ToolError::ToolUnavailable("clipboard: owner went away".to_string()))
    }
}

fn config(kind: ToolKind, model: Option<&str>, extra: &[(&str, &str)]) -> AppConfig {
    let extra: Vec<(String, String)> = extra
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect();
    AppConfig::from_lookup(kind, model.map(str::to_string), move |name| match name {
        "OPENAI_API_KEY" => Some("sk-test".to_string()),
        "GPT_FILENAME_ENDPOINT" => Some("http://localhost:1234/v1/chat/completions".to_string()),
        other => extra
            .iter()
            .find(|(k, _)| k == other)
            .map(|(_, v)| v.clone()),
    })
    .unwrap()
}

#[tokio::test]
async fn test_commit_message_happy_path() {
    let config = config(ToolKind::CommitMessage, None, &[]);
    let transport = FakeTransport::with_content("Fix off-by-one in pager\n\nThe last page was skipped.");
    let mut clipboard = FakeClipboard::default();
    let mut out: Vec<u8> = Vec::new();

    let message = run_commit_message(
        &config,
        &FakeDiff("diff --git a/pager.rs b/pager.rs\n+fixed".to_string()),
        &transport,
        &mut clipboard,
        &mut out,
    )
    .await
    .unwrap();

    assert_eq!(message, "Fix off-by-one in pager\n\nThe last page was skipped.");
    assert_eq!(String::from_utf8(out).unwrap(), format!("{message}\n"));
    assert_eq!(clipboard.writes, vec![message.clone()]);

    let request = transport.last_request();
    assert_eq!(transport.calls(), 1);
    assert_eq!(request.model, DEFAULT_MODEL);
    assert_eq!(request.temperature, 1.0);
    assert_eq!(request.messages[0].content, COMMIT_MESSAGE_PROMPT);
    assert_eq!(
        request.user_content(),
        Some("diff --git a/pager.rs b/pager.rs\n+fixed")
    );
}

#[tokio::test]
async fn test_clipboard_write_failure_after_message_printed() {
    let config = config(ToolKind::CommitMessage, None, &[]);
    let transport = FakeTransport::with_content("Add retry-free HTTP client");
    let mut out: Vec<u8> = Vec::new();

    let err = run_commit_message(
        &config,
        &FakeDiff("+client".to_string()),
        &transport,
        &mut FailingClipboard,
        &mut out,
    )
    .await
    .unwrap_err();

    assert!(matches!(err, ToolError::ToolUnavailable(_)));
    assert_eq!(String::from_utf8(out).unwrap(), "Add retry-free HTTP client\n");
    assert_eq!(transport.calls(), 1);
}

#[tokio::test]
async fn test_empty_diff_never_calls_transport() {
    let config = config(ToolKind::CommitMessage, None, &[]);
    let transport = FakeTransport::with_content("unused");
    let mut clipboard = FakeClipboard::default();
    let mut out: Vec<u8> = Vec::new();

    let err = run_commit_message(
        &config,
        &FakeDiff("  \n".to_string()),
        &transport,
        &mut clipboard,
        &mut out,
    )
    .await
    .unwrap_err();

    assert!(matches!(err, ToolError::EmptyInput(_)));
    assert_eq!(transport.calls(), 0);
    assert!(out.is_empty());
    assert!(clipboard.writes.is_empty());
}

#[tokio::test]
async fn test_missing_git_is_tool_unavailable() {
    let config = config(ToolKind::CommitMessage, None, &[]);
    let transport = FakeTransport::with_content("unused");
    let mut clipboard = FakeClipboard::default();

    let err = run_commit_message(&config, &MissingGit, &transport, &mut clipboard, &mut std::io::sink())
        .await
        .unwrap_err();

    assert!(matches!(err, ToolError::ToolUnavailable(_)));
    assert_eq!(transport.calls(), 0);
}

#[tokio::test]
async fn test_large_diff_is_truncated() {
    let config = config(
        ToolKind::CommitMessage,
        Some("gpt-4o"),
        &[("GPTOOLS_MAX_DIFF_BYTES", "10")],
    );
    let transport = FakeTransport::with_content("Update data");
    let mut clipboard = FakeClipboard::default();

    run_commit_message(
        &config,
        &FakeDiff("0123456789abcdef".to_string()),
        &transport,
        &mut clipboard,
        &mut std::io::sink(),
    )
    .await
    .unwrap();

    let request = transport.last_request();
    assert_eq!(request.temperature, 0.3);
    assert_eq!(
        request.user_content().unwrap(),
        format!("0123456789{TRUNCATION_NOTICE}")
    );
}

#[tokio::test]
async fn test_api_failure_emits_nothing() {
    let config = config(ToolKind::CommitMessage, None, &[]);
    let transport = FakeTransport::replying(401, r#"{"error":{"message":"bad key"}}"#);
    let mut clipboard = FakeClipboard::default();
    let mut out: Vec<u8> = Vec::new();

    let err = run_commit_message(
        &config,
        &FakeDiff("+x".to_string()),
        &transport,
        &mut clipboard,
        &mut out,
    )
    .await
    .unwrap_err();

    assert!(matches!(err, ToolError::Http { status: 401, .. }));
    assert!(out.is_empty());
    assert!(clipboard.writes.is_empty());
}

#[tokio::test]
async fn test_file_naming_happy_path() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("grocery-list.txt"), "older").unwrap();

    let config = config(ToolKind::FileName, Some("gpt-4o-mini"), &[]);
    let transport = FakeTransport::with_content("\"grocery-list\"\n");
    let mut clipboard = FakeClipboard::holding("eggs\nmilk\n");
    let mut out: Vec<u8> = Vec::new();

    let path = run_file_naming(&config, &mut clipboard, &transport, dir.path(), &mut out)
        .await
        .unwrap();

    assert_eq!(path, dir.path().join("grocery-list-1.txt"));
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "eggs\nmilk\n");
    assert!(
        String::from_utf8(out)
            .unwrap()
            .contains(&path.display().to_string())
    );

    let request = transport.last_request();
    assert_eq!(request.messages[0].role, Role::System);
    assert_eq!(request.messages[0].content, FILE_NAME_PROMPT);
    assert_eq!(request.user_content(), Some("eggs\nmilk\n"));
    assert_eq!(request.temperature, 0.3);
}

#[tokio::test]
async fn test_empty_clipboard_never_calls_transport() {
    let dir = tempfile::tempdir().unwrap();
    let config = config(ToolKind::FileName, None, &[]);
    let transport = FakeTransport::with_content("unused");
    let mut clipboard = FakeClipboard::holding("");

    let err = run_file_naming(&config, &mut clipboard, &transport, dir.path(), &mut std::io::sink())
        .await
        .unwrap_err();

    assert!(matches!(err, ToolError::EmptyInput(_)));
    assert_eq!(transport.calls(), 0);
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[tokio::test]
async fn test_blank_name_writes_no_file() {
    let dir = tempfile::tempdir().unwrap();
    let config = config(ToolKind::FileName, None, &[]);
    let transport = FakeTransport::with_content("  \"\"  ");
    let mut clipboard = FakeClipboard::holding("some text");

    let err = run_file_naming(&config, &mut clipboard, &transport, dir.path(), &mut std::io::sink())
        .await
        .unwrap_err();

    assert!(matches!(err, ToolError::EmptyResult));
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[tokio::test]
async fn test_file_naming_api_error() {
    let dir = tempfile::tempdir().unwrap();
    let config = config(ToolKind::FileName, None, &[]);
    let transport = FakeTransport::replying(200, r#"{"error":{"message":"x"}}"#);
    let mut clipboard = FakeClipboard::holding("some text");

    let err = run_file_naming(&config, &mut clipboard, &transport, dir.path(), &mut std::io::sink())
        .await
        .unwrap_err();

    assert!(matches!(err, ToolError::Api { .. }));
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}
