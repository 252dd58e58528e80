use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::telemetry::TelemetryError;
use crate::tracking::TrackError;
use crate::wspr::RequestError;

#[derive(Debug)]
pub enum ApiError {
    Request(RequestError),
    Upstream(String),
}

impl From<RequestError> for ApiError {
    fn from(e: RequestError) -> Self {
        ApiError::Request(e)
    }
}

impl From<TelemetryError> for ApiError {
    fn from(e: TelemetryError) -> Self {
        ApiError::Upstream(e.to_string())
    }
}

impl From<TrackError> for ApiError {
    fn from(e: TrackError) -> Self {
        ApiError::Upstream(e.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Request(e) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::with_message("invalid_request", &e.to_string())),
            )
                .into_response(),
            ApiError::Upstream(msg) => {
                log::warn!("Upstream query failed: {}", msg);
                (
                    StatusCode::BAD_GATEWAY,
                    Json(ErrorResponse::with_message("upstream_failed", &msg)),
                )
                    .into_response()
            }
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ErrorResponse {
    pub fn with_message(error: &str, message: &str) -> Self {
        ErrorResponse {
            error: error.to_string(),
            message: Some(message.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::QueryError;

    #[test]
    fn request_errors_are_client_errors() {
        let response = ApiError::from(RequestError::InvalidChannel(700)).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn query_failures_are_bad_gateway() {
        let err = TelemetryError::from(QueryError::Database("timeout".to_string()));
        let response = ApiError::from(err).into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

        let err = TrackError::from(QueryError::InvalidResponse);
        assert_eq!(
            ApiError::from(err).into_response().status(),
            StatusCode::BAD_GATEWAY
        );
    }
}
