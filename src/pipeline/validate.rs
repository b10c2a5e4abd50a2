//! Request Validator
//!
//! Structural checks that run before any extraction or backend work.

use axum::extract::Multipart;
use serde_json::Value;
use tracing::debug;

use crate::documents::DocumentFormat;
use crate::models::{DocumentPayload, SummarizeRequest};
use crate::types::{AppError, AppResult};

pub const FILE_FIELD: &str = "file";
pub const NO_FILE_UPLOADED: &str = "No file uploaded";
pub const UNSUPPORTED_FORMAT: &str = "Only PDF and DOCX supported";
pub const TEXT_REQUIRED: &str = "Text is required";
pub const INVALID_REQUEST: &str = "Invalid request";

/// Pull the `file` part out of a multipart body.
///
/// Other fields are skipped. An empty part without a filename is what a
/// browser submits when no file was picked, so it counts as missing.
pub async fn read_document(mut multipart: Multipart) -> AppResult<DocumentPayload> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::InvalidRequest(format!("Failed to read multipart body: {}", e.body_text())))?
    {
        if field.name() != Some(FILE_FIELD) {
            debug!(field = ?field.name(), "Skipping multipart field");
            continue;
        }

        let filename = field
            .file_name()
            .map(str::to_string)
            .filter(|name| !name.trim().is_empty());
        let declared_media_type = field.content_type().map(str::to_string);
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::InvalidRequest(format!("Failed to read uploaded file: {}", e.body_text())))?;

        if bytes.is_empty() && filename.is_none() {
            continue;
        }

        return Ok(DocumentPayload {
            bytes,
            declared_media_type,
            filename,
        });
    }

    Err(AppError::InvalidRequest(NO_FILE_UPLOADED.to_string()))
}

pub fn validate_document(payload: &DocumentPayload) -> AppResult<DocumentFormat> {
    DocumentFormat::detect(payload.declared_media_type.as_deref(), payload.filename.as_deref())
        .ok_or_else(|| AppError::UnsupportedFormat(UNSUPPORTED_FORMAT.to_string()))
}

/// Body of `POST /summarize`: a JSON object with a non-empty `text` string.
pub fn validate_summarize(body: &[u8]) -> AppResult<String> {
    let request: SummarizeRequest = serde_json::from_slice::<Value>(body)
        .ok()
        .filter(Value::is_object)
        .map(|value| serde_json::from_value(value).unwrap_or_default())
        .ok_or_else(|| AppError::InvalidRequest(INVALID_REQUEST.to_string()))?;

    match request.text {
        Some(Value::String(text)) if !text.is_empty() => Ok(text),
        _ => Err(AppError::InvalidRequest(TEXT_REQUIRED.to_string())),
    }
}
