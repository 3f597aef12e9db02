//! Utility functions for date parsing and log formatting.
//!
//! Feeds publish dates in their own formats. The helpers here turn those
//! strings into instants and swallow the failure: a date that does not parse
//! becomes `None` and the record is still emitted.

use chrono::{DateTime, FixedOffset, NaiveDateTime};
use tracing::debug;

const WEEKDAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Drop a leading abbreviated weekday name (`Thu` or `Thu,`) from a date.
///
/// Feeds get the weekday wrong often enough that it is read and discarded
/// rather than checked against the calendar date.
///
/// # Arguments
///
/// * `raw` - The date string as published by the feed
///
/// # Returns
///
/// The remainder after the weekday, its optional comma and the following
/// whitespace, or `None` when `raw` does not start with a weekday name.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(skip_weekday("Fri, 19 Mar 2020 15:29:02 Z"), Some("19 Mar 2020 15:29:02 Z"));
/// assert_eq!(skip_weekday("19 Mar 2020"), None);
/// ```
pub fn skip_weekday(raw: &str) -> Option<&str> {
    let head = raw.get(..3)?;
    if !WEEKDAYS.iter().any(|d| d.eq_ignore_ascii_case(head)) {
        debug!(raw, "Date does not start with a weekday name");
        return None;
    }
    let rest = &raw[3..];
    Some(rest.strip_prefix(',').unwrap_or(rest).trim_start())
}

/// Parse a date that carries no offset of its own and is known to be UTC.
///
/// Used for feeds whose format spells the zone as a literal (`UTC`, `Z`).
///
/// # Arguments
///
/// * `raw` - The date string, already stripped of any weekday name
/// * `fmt` - A `chrono` strftime layout describing `raw`
///
/// # Returns
///
/// The instant with a zero offset, or `None` when `raw` does not match `fmt`.
/// The failure is logged at debug level and never propagated.
pub fn parse_utc_date(raw: &str, fmt: &str) -> Option<DateTime<FixedOffset>> {
    match NaiveDateTime::parse_from_str(raw, fmt) {
        Ok(naive) => Some(naive.and_utc().fixed_offset()),
        Err(e) => {
            debug!(raw, fmt, error = %e, "Unparseable date; leaving timestamp empty");
            None
        }
    }
}

/// Parse a date that carries an explicit numeric offset.
///
/// # Arguments
///
/// * `raw` - The date string as published by the feed
/// * `fmt` - A `chrono` strftime layout describing `raw`, including `%:z`
///
/// # Returns
///
/// The instant with the feed's own offset kept, so it serializes the way the
/// feed wrote it, or `None` when `raw` does not match `fmt`.
pub fn parse_offset_date(raw: &str, fmt: &str) -> Option<DateTime<FixedOffset>> {
    match DateTime::parse_from_str(raw, fmt) {
        Ok(dt) => Some(dt),
        Err(e) => {
            debug!(raw, fmt, error = %e, "Unparseable date; leaving timestamp empty");
            None
        }
    }
}

/// Truncate a string for logging purposes.
///
/// Long strings are cut to at most `max` bytes, backing off to the nearest
/// character boundary, with an ellipsis and byte count appended.
///
/// # Arguments
///
/// * `s` - The string to potentially truncate
/// * `max` - Maximum number of bytes to keep
///
/// # Returns
///
/// The original string if it fits, otherwise a truncated version with
/// `"…(+N bytes)"` appended.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(truncate_for_log("short", 100), "short");
/// assert_eq!(truncate_for_log(&"a".repeat(500), 10), "aaaaaaaaaa…(+490 bytes)");
/// ```
pub fn truncate_for_log(s: &str, max: usize) -> String {
    if s.len() <= max {
        return s.to_string();
    }
    let mut cut = max;
    while !s.is_char_boundary(cut) {
        cut -= 1;
    }
    format!("{}…(+{} bytes)", &s[..cut], s.len() - cut)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_skip_weekday() {
        assert_eq!(
            skip_weekday("Thu, 19 Mar 2020 15:29:02 Z"),
            Some("19 Mar 2020 15:29:02 Z")
        );
        assert_eq!(
            skip_weekday("Mon Mar  2 09:00:00 UTC 2020"),
            Some("Mar  2 09:00:00 UTC 2020")
        );
        assert_eq!(skip_weekday("fri, 1 Jan 2021"), Some("1 Jan 2021"));
        assert_eq!(skip_weekday("19 Mar 2020"), None);
        assert_eq!(skip_weekday("Xyz 19 Mar 2020"), None);
        assert_eq!(skip_weekday("Mo"), None);
        assert_eq!(skip_weekday("Mé 19"), None);
    }

    #[test]
    fn test_mismatched_weekday_still_parses() {
        // 2020-03-19 is a Thursday
        let rest = skip_weekday("Fri, 19 Mar 2020 15:29:02 Z").unwrap();
        let dt = parse_utc_date(rest, "%e %b %Y %H:%M:%S Z");
        let expected = Utc.with_ymd_and_hms(2020, 3, 19, 15, 29, 2).unwrap();
        assert_eq!(dt, Some(expected.fixed_offset()));
    }

    #[test]
    fn test_parse_utc_date_with_literal_zone() {
        let dt = parse_utc_date("Mar 13 18:22:15 UTC 2020", "%b %e %H:%M:%S UTC %Y");
        let expected = Utc.with_ymd_and_hms(2020, 3, 13, 18, 22, 15).unwrap();
        assert_eq!(dt, Some(expected.fixed_offset()));
    }

    #[test]
    fn test_parse_utc_date_rejects_garbage() {
        assert_eq!(parse_utc_date("yesterday", "%b %e %H:%M:%S UTC %Y"), None);
        assert_eq!(parse_utc_date("", "%b %e %H:%M:%S UTC %Y"), None);
    }

    #[test]
    fn test_parse_offset_date_keeps_offset() {
        let dt = parse_offset_date("2020-03-19T10:02:04-07:00", "%Y-%m-%dT%H:%M:%S%.f%:z").unwrap();
        assert_eq!(dt.offset().local_minus_utc(), -7 * 3600);
        assert_eq!(
            dt.with_timezone(&Utc),
            Utc.with_ymd_and_hms(2020, 3, 19, 17, 2, 4).unwrap()
        );
    }

    #[test]
    fn test_parse_offset_date_requires_offset() {
        assert_eq!(
            parse_offset_date("2020-03-19T10:02:04", "%Y-%m-%dT%H:%M:%S%.f%:z"),
            None
        );
    }

    #[test]
    fn test_truncate_for_log_short_string() {
        let s = "Hello, world!";
        assert_eq!(truncate_for_log(s, 100), "Hello, world!");
    }

    #[test]
    fn test_truncate_for_log_long_string() {
        let s = "a".repeat(500);
        let result = truncate_for_log(&s, 100);
        assert!(result.starts_with(&"a".repeat(100)));
        assert!(result.contains("…(+400 bytes)"));
    }

    #[test]
    fn test_truncate_for_log_respects_char_boundaries() {
        let s = "é".repeat(10);
        let result = truncate_for_log(&s, 3);
        assert!(result.starts_with('é'));
        assert!(result.contains("…(+18 bytes)"));
    }
}
