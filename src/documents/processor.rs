use tracing::{info, warn};

use crate::documents::{extract_from_docx, extract_from_pdf, DocumentFormat};
use crate::models::DocumentPayload;
use crate::types::{AppError, AppResult};

pub const NO_READABLE_TEXT: &str = "No readable text found (scanned PDF needs OCR)";

/// Plain text pulled out of an uploaded document. Never empty.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractedText {
    pub content: String,
    pub source_format: DocumentFormat,
}

pub struct DocumentProcessor;

impl DocumentProcessor {
    /// Consume the upload and return its trimmed text.
    ///
    /// Parsing runs on the blocking pool; format libraries are synchronous
    /// and a large PDF can take a while.
    pub async fn extract(payload: DocumentPayload, format: DocumentFormat) -> AppResult<ExtractedText> {
        let size = payload.bytes.len();
        let bytes = payload.bytes;

        let raw = tokio::task::spawn_blocking(move || match format {
            DocumentFormat::Pdf => extract_from_pdf(&bytes),
            DocumentFormat::Docx => extract_from_docx(&bytes),
        })
        .await
        .map_err(|e| AppError::Internal(format!("Extraction task failed: {}", e)))??;

        let content = raw.trim();
        if content.is_empty() {
            warn!(format = %format, bytes = size, "Document has no text layer");
            return Err(AppError::NoReadableText(NO_READABLE_TEXT.to_string()));
        }

        info!(
            format = %format,
            bytes = size,
            chars = content.chars().count(),
            "Extracted document text"
        );

        Ok(ExtractedText {
            content: content.to_string(),
            source_format: format,
        })
    }
}
