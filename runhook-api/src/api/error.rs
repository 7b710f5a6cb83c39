//! API Error Handling
//!
//! Unified error types and conversion for API responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use runhook_client::ClientError;

/// API error type
#[derive(Debug)]
pub enum ApiError {
    /// Metadata server unreachable or answered with an error
    ResolverUnavailable(ClientError),
    /// Token document could not be parsed
    MalformedToken(ClientError),
    /// Job-run API unreachable
    JobApiUnavailable(ClientError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::ResolverUnavailable(err) => {
                tracing::error!("Token resolution failed: {}", err);
                (StatusCode::BAD_GATEWAY, "Token resolver unavailable")
            }
            ApiError::MalformedToken(err) => {
                tracing::error!("Token parsing failed: {}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
            ApiError::JobApiUnavailable(err) => {
                tracing::error!("Job trigger failed: {}", err);
                (StatusCode::BAD_GATEWAY, "Job API unavailable")
            }
        };

        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}

impl From<ClientError> for ApiError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::ResolverUnreachable(_) | ClientError::ResolverStatus { .. } => {
                ApiError::ResolverUnavailable(err)
            }
            ClientError::MalformedToken(_) => ApiError::MalformedToken(err),
            ClientError::JobApiUnreachable(_) => ApiError::JobApiUnavailable(err),
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
