use std::io::Cursor;

use docx_rust::DocxFile;

use crate::types::{AppError, AppResult};

/// Extract the body text of a Word document (paragraphs and tables).
pub fn extract_from_docx(bytes: &[u8]) -> AppResult<String> {
    let file = DocxFile::from_reader(Cursor::new(bytes))
        .map_err(|e| AppError::Extraction(format!("Failed to open DOCX: {:?}", e)))?;
    let docx = file
        .parse()
        .map_err(|e| AppError::Extraction(format!("Failed to parse DOCX: {:?}", e)))?;

    Ok(docx.document.body.text())
}
