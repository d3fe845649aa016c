//! Time and timestamp helpers.

use chrono::{DateTime, Local, TimeZone, Utc};

/// UTC timestamp used for `lastChange`, `lastSegmentTime`, etc.
pub type Timestamp = DateTime<Utc>;

/// Build a timestamp from milliseconds since the Unix epoch.
///
/// Returns `None` when the value is outside chrono's representable range.
#[must_use]
pub fn from_epoch_millis(millis: i64) -> Option<Timestamp> {
    DateTime::from_timestamp_millis(millis)
}

/// Parse an RFC 3339 timestamp (`2024-05-01T12:30:00Z`, with optional offset).
#[must_use]
pub fn parse_rfc3339(text: &str) -> Option<Timestamp> {
    DateTime::parse_from_rfc3339(text.trim())
        .ok()
        .map(|ts| ts.with_timezone(&Utc))
}

/// Format a timestamp as a wall-clock time (`HH:MM:SS`) in the given zone.
#[must_use]
pub fn format_time_in<Tz>(ts: &Timestamp, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    ts.with_timezone(tz).format("%H:%M:%S").to_string()
}

/// Format a timestamp as a wall-clock time in the viewer's local zone.
#[must_use]
pub fn format_local_time(ts: &Timestamp) -> String {
    format_time_in(ts, &Local)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    #[test]
    fn should_build_timestamp_from_epoch_millis() {
        let ts = from_epoch_millis(1_700_000_000_123).unwrap();
        assert_eq!(ts.timestamp_millis(), 1_700_000_000_123);
    }

    #[test]
    fn should_parse_rfc3339_with_offset() {
        let ts = parse_rfc3339("2024-05-01T14:30:00+02:00").unwrap();
        assert_eq!(ts, parse_rfc3339("2024-05-01T12:30:00Z").unwrap());
    }

    #[test]
    fn should_reject_garbage_timestamp() {
        assert!(parse_rfc3339("yesterday").is_none());
    }

    #[test]
    fn should_format_wall_clock_time_in_zone() {
        let ts = parse_rfc3339("2024-05-01T12:30:05Z").unwrap();
        let cet = FixedOffset::east_opt(3600).unwrap();
        assert_eq!(format_time_in(&ts, &Utc), "12:30:05");
        assert_eq!(format_time_in(&ts, &cet), "13:30:05");
    }
}
