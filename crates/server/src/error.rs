use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use db::validation::TitleError;
use thiserror::Error;
use utils::response::{ErrorResponse, MessageResponse};

/// Everything a task handler can fail with.
///
/// Client-input errors (malformed body, malformed id, validation) map to
/// 400/422; a lookup miss is a domain condition and maps to 404, never 500;
/// store failures map to 500 with the underlying message surfaced.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Database(#[from] sqlx::Error),

    #[error("invalid task id: {0}")]
    InvalidId(#[from] uuid::Error),

    #[error("invalid json")]
    InvalidPayload,

    #[error(transparent)]
    Validation(#[from] TitleError),

    #[error("Task not found")]
    TaskNotFound,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::Database(e) => {
                tracing::error!(error = %e, "store operation failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse::new(self.to_string())),
                )
                    .into_response()
            }
            ApiError::InvalidId(_) | ApiError::InvalidPayload => (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::new(self.to_string())),
            )
                .into_response(),
            ApiError::Validation(_) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(MessageResponse::new(self.to_string())),
            )
                .into_response(),
            ApiError::TaskNotFound => (
                StatusCode::NOT_FOUND,
                Json(MessageResponse::new(self.to_string())),
            )
                .into_response(),
        }
    }
}
