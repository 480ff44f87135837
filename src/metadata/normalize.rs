use chrono::{DateTime, NaiveDate, Utc};
use once_cell::sync::Lazy;
use regex::Regex;

static DURATION_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^P(?:(\d+)W)?(?:(\d+)D)?(?:T(?:(\d+)H)?(?:(\d+)M)?(?:(\d+)S)?)?$")
        .expect("Failed to compile duration regex")
});

/// Parse an ISO-8601 duration as returned by the videos endpoint into whole seconds.
///
/// Accepts the week/day/time designators YouTube actually emits:
/// - `PT23M2S` for regular uploads
/// - `P1DT2H3M4S` for very long streams
/// - `P0D` for upcoming premieres and live streams
///
/// Returns `None` for anything else, including the bare `P` and `PT` forms
/// and fractional seconds.
pub fn parse_iso8601_duration(value: &str) -> Option<u64> {
    let value = value.trim();
    if value == "P" || value.ends_with('T') {
        return None;
    }

    let caps = DURATION_REGEX.captures(value)?;

    let field = |idx: usize| -> Option<u64> {
        match caps.get(idx) {
            Some(m) => m.as_str().parse::<u64>().ok(),
            None => Some(0),
        }
    };

    let weeks = field(1)?;
    let days = field(2)?;
    let hours = field(3)?;
    let minutes = field(4)?;
    let seconds = field(5)?;

    weeks
        .checked_mul(7 * 24 * 3600)?
        .checked_add(days.checked_mul(24 * 3600)?)?
        .checked_add(hours.checked_mul(3600)?)?
        .checked_add(minutes.checked_mul(60)?)?
        .checked_add(seconds)
}

/// Parse an RFC 3339 timestamp (`2009-10-25T06:57:33Z`) into its UTC calendar date.
pub fn parse_published_date(value: &str) -> Option<NaiveDate> {
    DateTime::parse_from_rfc3339(value.trim())
        .ok()
        .map(|dt| dt.with_timezone(&Utc).date_naive())
}
