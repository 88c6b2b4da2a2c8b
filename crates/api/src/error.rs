use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use cinema_core::error::CoreError;
use serde_json::json;

/// Everything a handler can fail with.
///
/// The `#[from]` conversions let handlers propagate domain and database
/// errors with `?`; `IntoResponse` turns each variant into its wire shape.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal error: {0}")]
    InternalError(String),
}

pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            // Validation answers with the bare field-error map, e.g.
            // {"last_name": ["This field is required."]}. Every other
            // variant gets the {"error", "code"} envelope below.
            AppError::Core(CoreError::Validation(errors)) => {
                return (StatusCode::BAD_REQUEST, Json(errors)).into_response();
            }
            AppError::Core(CoreError::NotFound { entity, id }) => (
                StatusCode::NOT_FOUND,
                "NOT_FOUND",
                format!("{entity} with id {id} not found"),
            ),
            AppError::Core(CoreError::Internal(detail)) => internal(&detail),
            AppError::Database(err) => classify_sqlx_error(&err),
            AppError::InternalError(detail) => internal(&detail),
        };

        (status, Json(json!({ "error": message, "code": code }))).into_response()
    }
}

/// Log the real failure, answer with a sanitized 500.
fn internal(detail: &str) -> (StatusCode, &'static str, String) {
    tracing::error!(error = %detail, "Internal error");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "INTERNAL_ERROR",
        "An internal error occurred".to_string(),
    )
}

/// Map a sqlx failure onto a response: a missing row is a 404, anything
/// else a sanitized 500.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, &'static str, String) {
    match err {
        sqlx::Error::RowNotFound => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            "Resource not found".to_string(),
        ),
        other => internal(&other.to_string()),
    }
}
