//! API Routes
//!
//! - `/chat` - document summary (multipart) or conversation reply (JSON)
//! - `/summarize` - plain text summary
//! - `/health` - liveness probe

pub mod chat;
pub mod health;
pub mod summarize;

use axum::extract::DefaultBodyLimit;
use axum::Router;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::middleware::{apply_cors, catch_panic_layer};
use crate::models::AppState;

/// Create the main application router
pub fn create_router(state: AppState) -> Router {
    info!(
        max_upload_bytes = state.config.server.max_upload_bytes,
        "Creating application router"
    );

    let max_upload_bytes = state.config.server.max_upload_bytes;
    let allowed_origins = state.config.server.cors_allowed_origins.clone();

    let router = Router::new()
        .merge(chat::router(state.clone()))
        .merge(summarize::router())
        .merge(health::router(state))
        .layer(DefaultBodyLimit::max(max_upload_bytes));

    apply_cors(router, &allowed_origins)
        .layer(catch_panic_layer())
        .layer(TraceLayer::new_for_http())
}
