//! Commit timestamps.
//!
//! Timestamps are second-precision local time without a zone offset, written
//! as `YYYY-MM-DDTHH:MM:SS`. Stored values are kept as text and only parsed on
//! demand.

use chrono::{Local, NaiveDateTime};

/// `strftime` pattern for commit timestamps.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// The current local time in commit timestamp form.
pub fn now_timestamp() -> String {
    Local::now().format(TIMESTAMP_FORMAT).to_string()
}

/// Parse a commit timestamp. Returns `None` if it is not in the expected form.
pub fn parse_timestamp(text: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(text, TIMESTAMP_FORMAT).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn now_has_fixed_shape() {
        let ts = now_timestamp();
        assert_eq!(ts.len(), 19);
        assert_eq!(&ts[10..11], "T");
        assert!(parse_timestamp(&ts).is_some());
    }

    #[test]
    fn parse_known_value() {
        let dt = parse_timestamp("2024-03-09T07:05:01").unwrap();
        assert_eq!((dt.year(), dt.month(), dt.day()), (2024, 3, 9));
        assert_eq!((dt.hour(), dt.minute(), dt.second()), (7, 5, 1));
    }

    #[test]
    fn parse_rejects_other_forms() {
        assert!(parse_timestamp("").is_none());
        assert!(parse_timestamp("2024-03-09 07:05:01").is_none());
        assert!(parse_timestamp("2024-03-09T07:05:01+01:00").is_none());
        assert!(parse_timestamp("yesterday").is_none());
    }
}
