//! Error types for the HTTP layer.
//!
//! ## Mapping
//! ```text
//! malformed request body ──► 400 Bad Request
//! any stage failure      ──► 500 Internal Server Error
//! ```
//! Error responses carry a small JSON body: `{"error": "..."}`. For 500s
//! the body is a fixed generic message; the detail (which can include
//! filesystem paths) goes to the log only.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;
use tracing::error;

use crate::pipeline::PipelineError;
use kassa_db::DbError;

/// What the HTTP client sees when a request fails.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The client sent a malformed or invalid request.
    #[error("{0}")]
    BadRequest(String),

    /// A pipeline stage or the catalog failed server-side.
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError::BadRequest(message.into())
    }
}

/// JSON error body shape.
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
            ApiError::Internal(message) => {
                // The detail may name filesystem paths; keep it out of the
                // client-visible body.
                error!(%message, "Request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

/// Every pipeline stage runs on state the client cannot influence, so all
/// stage failures are server faults. Client faults (malformed bodies) are
/// rejected by the extractor before the pipeline runs.
impl From<PipelineError> for ApiError {
    fn from(err: PipelineError) -> Self {
        ApiError::Internal(err.to_string())
    }
}

impl From<DbError> for ApiError {
    fn from(err: DbError) -> Self {
        ApiError::Internal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pipeline_maps_to_internal() {
        let err: ApiError = PipelineError::Catalog(DbError::PoolExhausted).into();
        assert!(matches!(err, ApiError::Internal(_)));
    }

    #[test]
    fn test_db_maps_to_internal() {
        let err: ApiError = DbError::PoolExhausted.into();
        assert!(matches!(err, ApiError::Internal(_)));
    }

    #[tokio::test]
    async fn test_internal_body_hides_detail() {
        let response = ApiError::Internal("write failed: /srv/media/receipt.pdf".to_string())
            .into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(!body.contains("/srv/media"));
        assert!(body.contains("Internal server error"));
    }

    #[tokio::test]
    async fn test_bad_request_body_carries_reason() {
        let response = ApiError::bad_request("missing field `items`").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert!(String::from_utf8(bytes.to_vec())
            .unwrap()
            .contains("missing field `items`"));
    }
}
