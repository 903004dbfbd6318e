use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

/// Error reply for every JSON route: `{"error": "..."}`.
#[derive(Debug)]
pub enum ApiError {
    /// Missing or unusable input; the message names the field.
    Validation(String),
    /// An upstream service failed; the message is safe to show.
    Upstream(String),
}

impl ApiError {
    pub fn validation(msg: impl Into<String>) -> Self {
        ApiError::Validation(msg.into())
    }

    pub fn upstream(msg: impl Into<String>) -> Self {
        ApiError::Upstream(msg.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            ApiError::Validation(m) | ApiError::Upstream(m) => m,
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}
