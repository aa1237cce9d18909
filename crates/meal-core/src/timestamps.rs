use chrono::{DateTime, NaiveDate, NaiveDateTime};
use tracing::debug;

/// Output format for meal timestamps. `%.f` prints nothing for whole seconds.
pub const OUTPUT_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.f";

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%Y/%m/%d %H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"];

// ── TimestampProcessor ────────────────────────────────────────────────────────

/// Parses the timestamp cells found in food-log exports.
///
/// Food logs record wall-clock times. When a cell carries a UTC offset the
/// offset is dropped and the local reading is kept, so two rows logged at
/// the same clock time always land in the same meal.
pub struct TimestampProcessor;

impl TimestampProcessor {
    /// Attempt to parse `s` into a [`NaiveDateTime`].
    ///
    /// Handles RFC 3339 (`2020-02-13T18:00:00Z`, `...+01:00`), ISO-like
    /// date-times with a `T` or space separator, slash-separated dates and
    /// bare dates (midnight). Returns `None` for blank or unrecognised input.
    pub fn parse(s: &str) -> Option<NaiveDateTime> {
        let s = s.trim();
        if s.is_empty() {
            return None;
        }

        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Some(dt.naive_local());
        }

        for fmt in DATETIME_FORMATS {
            if let Ok(naive) = NaiveDateTime::parse_from_str(s, fmt) {
                return Some(naive);
            }
        }

        for fmt in DATE_FORMATS {
            if let Ok(date) = NaiveDate::parse_from_str(s, fmt) {
                return date.and_hms_opt(0, 0, 0);
            }
        }

        debug!("TimestampProcessor: could not parse timestamp string {:?}", s);
        None
    }

    /// Parse separate date and time cells, e.g. `"2020-02-13"` + `"18:00:00"`.
    pub fn parse_parts(date: &str, time: &str) -> Option<NaiveDateTime> {
        Self::parse(&format!("{} {}", date.trim(), time.trim()))
    }

    /// Render a timestamp the way the aggregated CSV stores it.
    pub fn format(ts: &NaiveDateTime) -> String {
        ts.format(OUTPUT_FORMAT).to_string()
    }
}
