use lopdf::Document;
use tracing::{debug, warn};

use crate::types::{AppError, AppResult};

/// Extract the text layer of every page, in page order.
///
/// Pages whose content cannot be decoded are skipped; the document only
/// fails if no page could be read at all.
pub fn extract_from_pdf(bytes: &[u8]) -> AppResult<String> {
    let document = Document::load_mem(bytes)
        .map_err(|e| AppError::Extraction(format!("Failed to read PDF: {}", e)))?;

    let page_numbers: Vec<u32> = document.get_pages().keys().copied().collect();
    debug!(pages = page_numbers.len(), "Extracting PDF text");

    let mut text = String::new();
    let mut last_error = None;
    let mut pages_read = 0usize;

    for page in &page_numbers {
        match document.extract_text(&[*page]) {
            Ok(page_text) => {
                pages_read += 1;
                text.push_str(&page_text);
                if !page_text.ends_with('\n') {
                    text.push('\n');
                }
            }
            Err(e) => {
                warn!(page = *page, error = %e, "Skipping unreadable PDF page");
                last_error = Some(e);
            }
        }
    }

    match last_error {
        Some(e) if pages_read == 0 => Err(AppError::Extraction(format!(
            "Failed to extract PDF text: {}",
            e
        ))),
        _ => Ok(text),
    }
}
