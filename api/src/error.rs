use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use blog_service::sea_orm::DbErr;
use serde_json::json;
use thiserror::Error;

/// Everything a handler can fail with, mapped onto distinct status codes
/// instead of a catch-all 500. Clients get a JSON body naming the
/// condition; infrastructure detail goes to the log only.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("blog post {0} not found")]
    PostNotFound(i32),
    #[error("user not found")]
    UserNotFound,
    #[error("database error: {0}")]
    Database(#[from] DbErr),
    #[error("template error: {0}")]
    Template(#[from] tera::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::PostNotFound(_) | ApiError::UserNotFound => {
                (StatusCode::NOT_FOUND, self.to_string())
            }
            ApiError::Database(err) => {
                tracing::error!(error = %err, "data access failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_owned(),
                )
            }
            ApiError::Template(err) => {
                tracing::error!(error = %err, "template rendering failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_owned(),
                )
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
