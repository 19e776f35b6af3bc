//! Timestamp rendering for HTTP headers and JSON bodies.

use chrono::{DateTime, SecondsFormat, Utc};

/// Last instant an IMF-fixdate can carry: `9999-12-31T23:59:59.999Z`.
pub const MAX_HTTP_DATE_MILLIS: i64 = 253_402_300_799_999;

/// Formats an instant as an IMF-fixdate, the form used by the `Expires` header.
///
/// ```ignore
/// // Thu, 01 Jan 1970 00:01:40 GMT
/// format_http_date(DateTime::from_timestamp_millis(100_000).unwrap());
/// ```
pub fn format_http_date(instant: DateTime<Utc>) -> String {
    instant.format("%a, %d %b %Y %H:%M:%S GMT").to_string()
}

/// Formats an instant as ISO-8601 with millisecond precision and a `Z` suffix.
pub fn format_iso_millis(instant: DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Millis, true)
}
