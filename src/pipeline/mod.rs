//! Request pipeline
//!
//! ```text
//! Request ─▶ dispatch ─┬─ Document:     validate ─▶ extract ─▶ SummaryAgent ─┐
//!                      └─ Conversation: validate ───────────▶ ReplyAgent ────┴─▶ outcome
//! ```
//!
//! Stages run strictly in order and the first failure short-circuits to the
//! response mapper. Nothing is shared between requests except the
//! read-only `AppState`.

pub mod dispatch;
pub mod outcome;
pub mod validate;

pub use dispatch::{dispatch, EnvelopeKind, RequestMode};
pub use outcome::PipelineOutcome;

use axum::extract::{Multipart, Request};
use tracing::{info, info_span, Instrument};
use uuid::Uuid;

use crate::agents::{ReplyAgent, SummaryAgent};
use crate::documents::DocumentProcessor;
use crate::models::{AppState, ConversationHistory};
use crate::types::AppResult;

/// Run `POST /chat` end to end.
pub async fn handle_chat(state: &AppState, request: Request) -> PipelineOutcome {
    let span = info_span!("chat", request_id = %Uuid::new_v4(), mode = tracing::field::Empty);

    async move {
        let mode = match dispatch(request).await {
            Ok(mode) => mode,
            Err(e) => return PipelineOutcome::Failure(e),
        };
        tracing::Span::current().record("mode", mode.name());

        match mode {
            RequestMode::Document(multipart) => PipelineOutcome::summary(run_document(state, multipart).await),
            RequestMode::Conversation(history) => PipelineOutcome::reply(run_conversation(state, &history).await),
        }
    }
    .instrument(span)
    .await
}

async fn run_document(state: &AppState, multipart: Multipart) -> AppResult<String> {
    let payload = validate::read_document(multipart).await?;
    let format = validate::validate_document(&payload)?;
    info!(
        format = %format,
        bytes = payload.bytes.len(),
        filename = ?payload.filename,
        declared_media_type = ?payload.declared_media_type,
        "Document accepted"
    );

    let extracted = DocumentProcessor::extract(payload, format).await?;
    SummaryAgent::summarize_document(&extracted, state.llm.as_ref(), &state.config.llm).await
}

async fn run_conversation(state: &AppState, history: &ConversationHistory) -> AppResult<String> {
    ReplyAgent::generate_reply(history, state.llm.as_ref(), &state.config.llm).await
}

/// Run `POST /summarize`. No backend involved.
pub fn handle_summarize(body: &[u8]) -> PipelineOutcome {
    let _span = info_span!("summarize", request_id = %Uuid::new_v4()).entered();
    PipelineOutcome::summary(validate::validate_summarize(body).map(|text| {
        info!(text_len = text.len(), "Summarizing text");
        SummaryAgent::summarize_text(&text)
    }))
}
