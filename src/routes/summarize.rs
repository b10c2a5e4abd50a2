use axum::{
    body::Bytes,
    extract::rejection::BytesRejection,
    routing::post,
    Router,
};

use crate::pipeline::{handle_summarize, PipelineOutcome};
use crate::types::AppError;

pub fn router() -> Router {
    Router::new().route("/summarize", post(post_summarize))
}

/// POST /summarize - `{ "text": ... }` in, `{ "summary": ... }` out
pub async fn post_summarize(body: Result<Bytes, BytesRejection>) -> PipelineOutcome {
    match body {
        Ok(body) => handle_summarize(&body),
        Err(rejection) => PipelineOutcome::Failure(AppError::InvalidRequest(rejection.body_text())),
    }
}
