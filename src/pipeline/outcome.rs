//! Response Mapper
//!
//! The single place where pipeline results become HTTP responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use tracing::{error, warn};

use crate::models::{ErrorResponse, ReplyResponse, SummaryResponse};
use crate::types::{AppError, AppResult};

#[derive(Debug)]
pub enum PipelineOutcome {
    Summary(String),
    Reply(String),
    Failure(AppError),
}

impl PipelineOutcome {
    pub fn summary(result: AppResult<String>) -> Self {
        result.map_or_else(PipelineOutcome::Failure, PipelineOutcome::Summary)
    }

    pub fn reply(result: AppResult<String>) -> Self {
        result.map_or_else(PipelineOutcome::Failure, PipelineOutcome::Reply)
    }

    pub fn status(&self) -> StatusCode {
        match self {
            PipelineOutcome::Summary(_) | PipelineOutcome::Reply(_) => StatusCode::OK,
            PipelineOutcome::Failure(e) => e.status(),
        }
    }
}

impl IntoResponse for PipelineOutcome {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            PipelineOutcome::Summary(summary) => (status, Json(SummaryResponse { summary })).into_response(),
            PipelineOutcome::Reply(reply) => (status, Json(ReplyResponse { reply })).into_response(),
            PipelineOutcome::Failure(e) => {
                if status.is_server_error() {
                    error!(kind = ?e.kind(), status = status.as_u16(), error = %e, "Request failed");
                } else {
                    warn!(kind = ?e.kind(), status = status.as_u16(), error = %e, "Request rejected");
                }
                (status, Json(ErrorResponse { error: e.client_message() })).into_response()
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        PipelineOutcome::Failure(self).into_response()
    }
}
