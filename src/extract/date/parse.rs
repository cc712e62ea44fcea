//! Lenient date-string parsing for structured metadata values.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Attempts to parse a metadata date string in various formats.
///
/// Tries RFC 3339 and RFC 2822 first (the formats most meta tags carry), then
/// falls back to a list of common human-readable formats. Strings with an
/// explicit offset are converted to UTC; offset-free strings are taken as UTC.
///
/// Returns `None` for anything unparseable; callers treat that as a
/// non-match, not an error.
pub fn parse_datetime_lenient(date_str: &str) -> Option<DateTime<Utc>> {
    let trimmed = date_str.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(trimmed) {
        return Some(dt.with_timezone(&Utc));
    }

    // Common offset-free formats seen in publish-date/date meta tags
    let formats = [
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%d %H:%M",
        "%Y-%m-%d",
        "%d.%m.%Y %H:%M",
        "%d.%m.%Y",
        "%d/%m/%Y",
        "%B %d, %Y",
        "%d %B %Y",
    ];

    for format in &formats {
        if let Ok(naive_dt) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Some(naive_dt.and_utc());
        }
        if let Ok(naive_date) = NaiveDate::parse_from_str(trimmed, format) {
            return Some(naive_date.and_hms_opt(0, 0, 0)?.and_utc());
        }
    }

    None
}
