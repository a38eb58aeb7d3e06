//! Time related utils.

use chrono::Utc;

/// DateTime is the alias for `chrono::DateTime<Utc>`.
pub type DateTime = chrono::DateTime<Utc>;

/// Create datetime of now.
pub fn now() -> DateTime {
    Utc::now()
}

/// Format time into date: `20220301`
pub fn format_date(t: DateTime) -> String {
    t.format("%Y%m%d").to_string()
}

/// Format time into ISO8601 basic format: `20220313T072004Z`
pub fn format_iso8601(t: DateTime) -> String {
    t.format("%Y%m%dT%H%M%SZ").to_string()
}

/// Parse time from RFC3339: `2022-03-13T07:20:04Z`
pub fn parse_rfc3339(s: &str) -> crate::Result<DateTime> {
    chrono::DateTime::parse_from_rfc3339(s)
        .map(|v| v.with_timezone(&Utc))
        .map_err(|e| {
            crate::Error::unexpected(format!("parse {s} into rfc3339 failed")).with_source(e)
        })
}
