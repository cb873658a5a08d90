use axum::Json;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

#[derive(Debug)]
pub enum AppError {
    InternalServerError(String),
    MissingUserId,
    InvalidTimezone(String),
}

pub fn internal_error<E: std::fmt::Display>(err: E) -> AppError {
    tracing::error!("Internal error: {}", err);
    AppError::InternalServerError(err.to_string())
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, detail) = match self {
            Self::InternalServerError(message) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Internal Server Error: {}", message),
            ),
            Self::MissingUserId => (
                StatusCode::BAD_REQUEST,
                String::from("X-User-Id header is required and cannot be empty."),
            ),
            Self::InvalidTimezone(tz) => (
                StatusCode::BAD_REQUEST,
                format!(
                    "Invalid timezone: '{tz}'. Use IANA format (e.g., America/New_York, Europe/London)."
                ),
            ),
        };
        (status, Json(json!({ "detail": detail }))).into_response()
    }
}
