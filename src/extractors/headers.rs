use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::errors::AppError;

pub const USER_ID_HEADER: &str = "x-user-id";
pub const TIMEZONE_HEADER: &str = "x-timezone";

/// Raw `X-User-Id` / `X-Timezone` header values.
///
/// Extraction never rejects: validation (trimming, defaulting, IANA lookup)
/// is the handler's job, so an absent header arrives here as `None` and a
/// non-UTF-8 value is treated the same way.
pub struct PingHeaders {
    pub user_id: Option<String>,
    pub timezone: Option<String>,
}

impl<S> FromRequestParts<S> for PingHeaders
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let header = |name: &str| {
            parts
                .headers
                .get(name)
                .and_then(|value| value.to_str().ok())
                .map(str::to_owned)
        };

        Ok(Self {
            user_id: header(USER_ID_HEADER),
            timezone: header(TIMEZONE_HEADER),
        })
    }
}
