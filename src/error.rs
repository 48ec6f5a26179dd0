use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// Error response type
///
/// Shares its shape with the failure variant of the navigate response so
/// that page clients render every error the same way.
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Custom error type for service endpoints
///
/// Maps each failure to an HTTP status code and formats it as a JSON body.
#[derive(Debug)]
pub enum ApiError {
    /// Request body could not be read as JSON
    InvalidRequest(String),
    /// Map page could not be rendered
    MapRender(anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ApiError::InvalidRequest(msg) => (
                StatusCode::BAD_REQUEST,
                format!("Invalid request: {}", msg),
            ),
            ApiError::MapRender(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Map rendering error: {:#}", err),
            ),
        };

        let body = Json(ErrorResponse {
            error: error_message,
        });

        (status, body).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::InvalidRequest(rejection.body_text())
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::MapRender(err)
    }
}
