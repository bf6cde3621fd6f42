use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use site_core::ValidationError;
use site_storage::StorageError;
use thiserror::Error;
use tracing::error;

/// Failures surfaced by the content endpoints
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Unauthorized")]
    Unauthorized,

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Site content not found")]
    NotFound,

    #[error(transparent)]
    Storage(StorageError),
}

impl From<StorageError> for ApiError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::NotFound(_) => ApiError::NotFound,
            other => ApiError::Storage(other),
        }
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            ApiError::Validation(err) => (status, Json(err)).into_response(),
            ApiError::Storage(err) => {
                error!("Storage failure: {}", err);
                (status, Json(json!({ "message": "Internal server error" }))).into_response()
            }
            other => (status, Json(json!({ "message": other.to_string() }))).into_response(),
        }
    }
}
