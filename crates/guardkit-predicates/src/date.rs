//! # Date Guards
//!
//! - [`date`] accepts date values that denote an instant. The invalid-date
//!   state is rejected.
//! - [`date_string`] accepts strings that parse into a valid instant.
//!
//! ## Accepted String Forms
//!
//! - RFC 3339 (`2026-01-15T12:00:00Z`, `2026-01-15T12:00:00.5+05:30`)
//! - RFC 2822 (`Thu, 15 Jan 2026 12:00:00 +0000`)
//! - Calendar date (`2026-01-15`), read as midnight UTC
//! - Offset-less date-time (`2026-01-15T12:00:00`, `2026-01-15 12:00:00.250`),
//!   read as UTC
//!
//! Out-of-range components (`2026-02-30`, `25:00`) do not parse.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use guardkit_core::{Guard, Value};

const NAIVE_DATE_TIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

pub fn date() -> Guard {
    Guard::new("date", |v: &Value| v.as_date().is_some())
}

pub fn date_string() -> Guard {
    Guard::new("date-string", |v: &Value| {
        v.as_str().and_then(parse_date_string).is_some()
    })
}

/// Parse `s` into an instant, trying each accepted form in turn.
pub fn parse_date_string(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(s) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(day) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return day.and_hms_opt(0, 0, 0).map(|naive| naive.and_utc());
    }
    let parsed = NAIVE_DATE_TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .map(|naive| naive.and_utc());
    if parsed.is_none() {
        tracing::trace!(input = s, "string is not a recognized date form");
    }
    parsed
}
