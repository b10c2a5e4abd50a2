use std::sync::Arc;

use bytes::Bytes;
use serde_json::Value;

use crate::config::Config;
use crate::llm::LLMAdapter;
use crate::types::{AppError, AppResult, Role};

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub llm: Arc<dyn LLMAdapter>,
}

impl AppState {
    pub fn new(config: Config, llm: Arc<dyn LLMAdapter>) -> Self {
        Self { config, llm }
    }
}

pub const MESSAGES_REQUIRED: &str = "messages[] is required";

/// An uploaded file as it arrived in the multipart body.
#[derive(Debug)]
pub struct DocumentPayload {
    pub bytes: Bytes,
    pub declared_media_type: Option<String>,
    pub filename: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConversationTurn {
    pub role: Role,
    pub content: String,
}

impl ConversationTurn {
    /// Lenient conversion of one `messages[]` entry. Unknown roles become
    /// `user`, a null or missing content becomes the empty string.
    pub fn from_value(entry: &Value) -> Self {
        match entry {
            Value::Object(fields) => Self {
                role: Role::coerce(fields.get("role").and_then(Value::as_str)),
                content: stringify_content(fields.get("content")),
            },
            other => Self {
                role: Role::User,
                content: stringify_content(Some(other)),
            },
        }
    }
}

fn stringify_content(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// Ordered, non-empty chat history, oldest turn first.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversationHistory(Vec<ConversationTurn>);

impl ConversationHistory {
    /// Parse the `messages` field of a JSON request body.
    pub fn from_body(body: &Value) -> AppResult<Self> {
        let entries = body
            .get("messages")
            .and_then(Value::as_array)
            .filter(|entries| !entries.is_empty())
            .ok_or_else(|| AppError::InvalidRequest(MESSAGES_REQUIRED.to_string()))?;

        Ok(Self(entries.iter().map(ConversationTurn::from_value).collect()))
    }

    pub fn turns(&self) -> &[ConversationTurn] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

// API Request/Response types

#[derive(Debug, Default, serde::Deserialize)]
pub struct SummarizeRequest {
    #[serde(default)]
    pub text: Option<Value>,
}

#[derive(Debug, serde::Serialize)]
pub struct SummaryResponse {
    pub summary: String,
}

#[derive(Debug, serde::Serialize)]
pub struct ReplyResponse {
    pub reply: String,
}

#[derive(Debug, serde::Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, serde::Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    pub backend_configured: bool,
    pub model: String,
}
