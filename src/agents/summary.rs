//! Summary Agent
//!
//! Turns the text of an uploaded document into a bullet-point summary.

use tracing::{info, warn};

use crate::agents::invoker::invoke_backend;
use crate::agents::prompt::{document_prompt, MAX_DOCUMENT_CHARS};
use crate::config::LLMConfig;
use crate::documents::ExtractedText;
use crate::llm::LLMAdapter;
use crate::types::AppResult;

pub struct SummaryAgent;

impl SummaryAgent {
    pub async fn summarize_document(
        extracted: &ExtractedText,
        llm: &dyn LLMAdapter,
        config: &LLMConfig,
    ) -> AppResult<String> {
        let chars = extracted.content.chars().count();
        if chars > MAX_DOCUMENT_CHARS {
            warn!(
                chars,
                limit = MAX_DOCUMENT_CHARS,
                "Document exceeds prompt ceiling, summarizing the beginning only"
            );
        }

        let summary = invoke_backend(llm, config, document_prompt(extracted)).await?;
        info!(format = %extracted.source_format, summary_len = summary.len(), "Document summarized");
        Ok(summary)
    }

    /// The literal contract of the plain-text endpoint: echo with a prefix.
    pub fn summarize_text(text: &str) -> String {
        format!("Summary: {}", text)
    }
}
