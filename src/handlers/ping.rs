use axum::{Json, extract::State};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::debug;
use utoipa::{IntoResponses, ToSchema};

use crate::errors::{AppError, internal_error};
use crate::extractors::PingHeaders;
use crate::repositories::UserRepository;
use crate::services::time::{format_in_zone, validate_timezone};
use crate::state::AppState;

// ============================================================================
// Response DTOs
// ============================================================================

#[derive(Debug, Serialize, Deserialize, ToSchema, IntoResponses)]
#[response(status = 200)]
pub struct PingResponse {
    /// `Pong @ <current time in the requested timezone>`
    pub message: String,
    pub views: i64,
    pub updated_at: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorDetail {
    pub detail: String,
}

#[derive(Debug, Serialize, ToSchema, IntoResponses)]
#[response(status = 400)]
pub struct BadRequest(pub ErrorDetail);

#[derive(Debug, Serialize, ToSchema, IntoResponses)]
#[response(status = 500)]
pub struct InternalError(pub ErrorDetail);

// ============================================================================
// Handlers
// ============================================================================

/// Health check with timestamp and view tracking
///
/// Returns 'Pong' with the current datetime in the user's timezone and
/// increments that user's view counter.
#[utoipa::path(
    get,
    path = "/ping",
    params(
        ("X-User-Id" = String, Header, description = "Unique user identifier"),
        ("X-Timezone" = Option<String>, Header, description = "IANA timezone (e.g., America/New_York)"),
    ),
    responses(
        (status = 200, body = PingResponse),
        (status = 400, body = BadRequest),
        (status = 500, body = InternalError),
    ),
    tag = "ping",
)]
pub async fn ping(
    State(state): State<AppState>,
    headers: PingHeaders,
) -> Result<Json<PingResponse>, AppError> {
    let user_id = headers.user_id.as_deref().map(str::trim).unwrap_or("");
    if user_id.is_empty() {
        return Err(AppError::MissingUserId);
    }

    let tz = validate_timezone(headers.timezone.as_deref().unwrap_or(""))?;

    debug!("Incrementing view counter for user: {}", user_id);

    let user = UserRepository::increment_views(&state.db, user_id)
        .await
        .map_err(internal_error)?;

    let now = Utc::now();

    Ok(Json(PingResponse {
        message: format!("Pong @ {}", format_in_zone(now, tz)),
        views: user.views,
        updated_at: format_in_zone(user.updated_at, tz),
    }))
}
