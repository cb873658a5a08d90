//! Timezone validation and timestamp formatting.
//!
//! Deliberately store-free: these functions only touch the IANA database
//! shipped with chrono-tz, so they are usable on their own.

use chrono::{DateTime, Utc};
use chrono_tz::Tz;

use crate::errors::AppError;

/// Local wall-clock time plus the zone's abbreviation, e.g.
/// `2024-06-15 14:30:45 UTC`.
const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S %Z";

/// Resolve a caller-supplied timezone name against the IANA database.
///
/// Empty or whitespace-only input means UTC rather than an error; anything
/// else must be an exact IANA name (e.g., `America/New_York`).
pub fn validate_timezone(raw: &str) -> Result<Tz, AppError> {
    let name = raw.trim();
    if name.is_empty() {
        return Ok(Tz::UTC);
    }

    name.parse::<Tz>()
        .map_err(|_| AppError::InvalidTimezone(name.to_owned()))
}

/// Render a UTC instant as local time in `tz`.
///
/// The abbreviation reflects the zone's offset at that instant, so
/// daylight-saving transitions show up as e.g. EST vs EDT.
pub fn format_in_zone(instant: DateTime<Utc>, tz: Tz) -> String {
    instant.with_timezone(&tz).format(TIME_FORMAT).to_string()
}
