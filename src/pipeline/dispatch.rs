//! Mode Dispatcher
//!
//! Every `/chat` request resolves to exactly one of Document mode,
//! Conversation mode, or a rejection.

use axum::body::Bytes;
use axum::extract::{FromRequest, Multipart, Request};
use axum::http::{header::CONTENT_TYPE, HeaderMap};
use serde_json::Value;

use crate::models::{ConversationHistory, MESSAGES_REQUIRED};
use crate::types::{AppError, AppResult};

/// What the transport metadata says about the body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvelopeKind {
    Multipart,
    Other,
}

impl EnvelopeKind {
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let is_form_data = headers
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.parse::<mime::Mime>().ok())
            .map(|m| m.type_() == mime::MULTIPART && m.subtype() == mime::FORM_DATA)
            .unwrap_or(false);

        if is_form_data {
            EnvelopeKind::Multipart
        } else {
            EnvelopeKind::Other
        }
    }
}

pub enum RequestMode {
    Document(Multipart),
    Conversation(ConversationHistory),
}

impl RequestMode {
    pub fn name(&self) -> &'static str {
        match self {
            RequestMode::Document(_) => "document",
            RequestMode::Conversation(_) => "conversation",
        }
    }
}

pub async fn dispatch(request: Request) -> AppResult<RequestMode> {
    match EnvelopeKind::from_headers(request.headers()) {
        EnvelopeKind::Multipart => {
            let multipart = Multipart::from_request(request, &())
                .await
                .map_err(|rejection| AppError::InvalidRequest(rejection.body_text()))?;
            Ok(RequestMode::Document(multipart))
        }
        EnvelopeKind::Other => {
            let body = Bytes::from_request(request, &())
                .await
                .map_err(|rejection| AppError::InvalidRequest(rejection.body_text()))?;
            let json: Value = serde_json::from_slice(&body)
                .map_err(|_| AppError::InvalidRequest(MESSAGES_REQUIRED.to_string()))?;
            Ok(RequestMode::Conversation(ConversationHistory::from_body(&json)?))
        }
    }
}
