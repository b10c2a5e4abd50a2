// Type definitions and enums

use axum::http::StatusCode;

/// Speaker of a chat turn as the backend sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

impl Role {
    /// Coerce a client-supplied role. Only `assistant` survives; everything
    /// else (including `system` and missing roles) is treated as the user.
    pub fn coerce(raw: Option<&str>) -> Self {
        match raw {
            Some("assistant") => Role::Assistant,
            _ => Role::User,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::System => write!(f, "system"),
            Role::User => write!(f, "user"),
            Role::Assistant => write!(f, "assistant"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LLMMessage {
    pub role: Role,
    pub content: String,
}

impl LLMMessage {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    /// Create a user message
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    /// Create an assistant message
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }

    /// Create a system message
    pub fn system(content: impl Into<String>) -> Self {
        Self::new(Role::System, content)
    }
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct LLMRequest {
    pub model: String,
    pub messages: Vec<LLMMessage>,
    pub max_tokens: Option<u32>,
    pub temperature: Option<f32>,
    pub system_instruction: Option<String>,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct LLMResponse {
    pub content: String,
    pub finish_reason: String,
    pub usage: Option<TokenUsage>,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct TokenUsage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

/// Stable classification of a failed request, independent of its message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidRequest,
    UnsupportedFormat,
    NoReadableText,
    ExtractionError,
    BackendError,
    Unclassified,
}

/// Every failure a request can end in. The display string is what the
/// client receives in the `error` field.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    InvalidRequest(String),

    #[error("{0}")]
    UnsupportedFormat(String),

    #[error("{0}")]
    NoReadableText(String),

    #[error("{0}")]
    Extraction(String),

    #[error("{0}")]
    Backend(String),

    #[error("{0}")]
    Internal(String),
}

pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong";

impl AppError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::InvalidRequest(_) => ErrorKind::InvalidRequest,
            AppError::UnsupportedFormat(_) => ErrorKind::UnsupportedFormat,
            AppError::NoReadableText(_) => ErrorKind::NoReadableText,
            AppError::Extraction(_) => ErrorKind::ExtractionError,
            AppError::Backend(_) => ErrorKind::BackendError,
            AppError::Internal(_) => ErrorKind::Unclassified,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self.kind() {
            ErrorKind::InvalidRequest | ErrorKind::UnsupportedFormat | ErrorKind::NoReadableText => {
                StatusCode::BAD_REQUEST
            }
            ErrorKind::ExtractionError | ErrorKind::BackendError | ErrorKind::Unclassified => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Message exposed to the client. Unclassified failures never leak
    /// their internal detail.
    pub fn client_message(&self) -> String {
        let message = match self {
            AppError::Internal(_) => "",
            other => other.message(),
        };
        if message.trim().is_empty() {
            GENERIC_ERROR_MESSAGE.to_string()
        } else {
            message.to_string()
        }
    }

    fn message(&self) -> &str {
        match self {
            AppError::InvalidRequest(m)
            | AppError::UnsupportedFormat(m)
            | AppError::NoReadableText(m)
            | AppError::Extraction(m)
            | AppError::Backend(m)
            | AppError::Internal(m) => m,
        }
    }
}

pub type AppResult<T> = std::result::Result<T, AppError>;
