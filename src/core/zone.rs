use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use tracing::warn;

/// Parses an IANA timezone name, falling back to UTC when unrecognized.
#[must_use]
pub fn resolve_zone(id: &str) -> Tz {
    match id.parse::<Tz>() {
        Ok(tz) => tz,
        Err(_) => {
            warn!(zone = id, "unrecognized timezone, falling back to UTC");
            Tz::UTC
        }
    }
}

/// Short zone name in effect at `at`, e.g. `EDT` or `CET`.
#[must_use]
pub fn zone_abbreviation(id: &str, at: DateTime<Utc>) -> String {
    at.with_timezone(&resolve_zone(id)).format("%Z").to_string()
}
