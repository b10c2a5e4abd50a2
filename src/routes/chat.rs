use axum::{
    extract::{Request, State},
    routing::post,
    Router,
};
use tracing::info;

use crate::models::AppState;
use crate::pipeline::{handle_chat, PipelineOutcome};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/chat", post(post_chat))
        .with_state(state)
}

/// POST /chat - document upload (multipart) or conversation (JSON)
pub async fn post_chat(State(state): State<AppState>, request: Request) -> PipelineOutcome {
    info!(
        content_type = ?request.headers().get(axum::http::header::CONTENT_TYPE),
        "Received chat request"
    );
    handle_chat(&state, request).await
}
