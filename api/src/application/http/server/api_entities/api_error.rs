use axum::Json;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;
use thiserror::Error;
use tradebook_core::domain::common::entities::app_errors::CoreError;

/// Transport-level rendering of a [`CoreError`].
#[derive(Debug, Error)]
#[error("{message}")]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        let status = match &err {
            CoreError::NotFound => StatusCode::NOT_FOUND,
            CoreError::ConcurrencyConflict => StatusCode::CONFLICT,
            CoreError::InvalidSortSpec(_)
            | CoreError::InvalidFilterSpec(_)
            | CoreError::InvalidPageSpec(_)
            | CoreError::Invalid(_) => StatusCode::BAD_REQUEST,
            CoreError::InternalServerError => StatusCode::INTERNAL_SERVER_ERROR,
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}
