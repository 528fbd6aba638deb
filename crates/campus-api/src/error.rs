use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use campus_core::DomainError;
use thiserror::Error;

use crate::response::{ErrorResponse, MessageResponse};

#[derive(Error, Debug)]
pub enum ApiError {
    /// Rendered as `{message}` with 404.
    #[error("{0}")]
    NotFound(String),

    /// Raw driver message, rendered as `{error}` with 500.
    #[error("{0}")]
    DatabaseError(String),
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::DatabaseError(msg) => ApiError::DatabaseError(msg),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound(msg) => {
                tracing::warn!("Not found: {}", msg);
                (StatusCode::NOT_FOUND, Json(MessageResponse::new(msg))).into_response()
            }
            ApiError::DatabaseError(msg) => {
                tracing::error!("Database error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, Json(ErrorResponse { error: msg })).into_response()
            }
        }
    }
}
