//! Timestamp normalization to UTC.

use chrono::{DateTime, SecondsFormat, Utc};
use lrw_core::errors::{ConversionError, ConversionResult};

use crate::text::non_blank;

/// Normalize an optional statement timestamp. Absent or blank means now.
pub fn normalize_timestamp(value: Option<&str>) -> ConversionResult<DateTime<Utc>> {
    match non_blank(value) {
        Some(value) => parse_timestamp(value.trim()),
        None => Ok(Utc::now()),
    }
}

/// Parse `2021-05-01T12:00:00Z` or `2021-05-01T14:00:00+02:00` (optionally
/// followed by a bracketed region such as `[Europe/Paris]`, which is ignored
/// in favor of the explicit offset) and convert to UTC.
pub fn parse_timestamp(value: &str) -> ConversionResult<DateTime<Utc>> {
    let zoned = strip_region(value);
    DateTime::parse_from_rfc3339(zoned)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| ConversionError::InvalidTimestamp {
            value: value.to_string(),
            reason: e.to_string(),
        })
}

/// Render a UTC instant the way statements carry it: RFC 3339 with a `Z`.
pub fn format_timestamp(instant: &DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

fn strip_region(value: &str) -> &str {
    match (value.ends_with(']'), value.find('[')) {
        (true, Some(open)) => &value[..open],
        _ => value,
    }
}
