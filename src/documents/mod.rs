//! Document text extraction for uploaded PDF and DOCX files.

pub mod docx;
pub mod format;
pub mod pdf;
pub mod processor;

pub use docx::extract_from_docx;
pub use format::{DocumentFormat, DOCX_MIME, PDF_MIME};
pub use pdf::extract_from_pdf;
pub use processor::{DocumentProcessor, ExtractedText, NO_READABLE_TEXT};
