//! Document format detection from the declared media type and filename.

pub const PDF_MIME: &str = "application/pdf";
pub const DOCX_MIME: &str = "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Pdf,
    Docx,
}

impl DocumentFormat {
    pub fn mime_type(&self) -> &'static str {
        match self {
            DocumentFormat::Pdf => PDF_MIME,
            DocumentFormat::Docx => DOCX_MIME,
        }
    }

    /// Identify the format. Either signal is enough: clients often send
    /// `application/octet-stream` for a perfectly good `.docx`. PDF wins
    /// whenever it matches, so a `.pdf` file never takes the DOCX path.
    pub fn detect(declared_media_type: Option<&str>, filename: Option<&str>) -> Option<Self> {
        let declared = declared_media_type.and_then(essence);
        let guessed = filename.and_then(guess_from_filename);

        [DocumentFormat::Pdf, DocumentFormat::Docx]
            .into_iter()
            .find(|format| {
                let mime = format.mime_type();
                declared.as_deref() == Some(mime) || guessed.as_deref() == Some(mime)
            })
    }
}

impl std::fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DocumentFormat::Pdf => write!(f, "pdf"),
            DocumentFormat::Docx => write!(f, "docx"),
        }
    }
}

/// `type/subtype` without parameters, lowercased.
fn essence(raw: &str) -> Option<String> {
    raw.trim()
        .parse::<mime::Mime>()
        .ok()
        .map(|m| m.essence_str().to_ascii_lowercase())
}

fn guess_from_filename(filename: &str) -> Option<String> {
    let lowered = filename.trim().to_ascii_lowercase();
    mime_guess::from_path(lowered)
        .iter()
        .map(|m| m.essence_str().to_string())
        .find(|m| m == PDF_MIME || m == DOCX_MIME)
}
