//! Display helpers for the long listing: grouped sizes and calendar dates

use chrono::{DateTime, Local, TimeZone, Utc};
use std::time::{SystemTime, UNIX_EPOCH};

/// strftime layout producing e.g. `Sep  5, 2019 14:03:09`.
const DATE_LAYOUT: &str = "%b %e, %Y %H:%M:%S";

/// Shown for times chrono cannot represent; same width as a real date.
pub const UNKNOWN_DATE: &str = "??? ??, ???? ??:??:??";

/// Group decimal digits in runs of three from the right: `1234567` -> `1,234,567`.
#[must_use]
pub fn format_with_commas(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }

    out
}

/// Render a modification time in local time.
#[must_use]
pub fn format_timestamp(time: SystemTime) -> String {
    format_timestamp_in(time, &Local)
}

/// Render a modification time in an explicit timezone.
pub fn format_timestamp_in<Tz>(time: SystemTime, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    match to_utc(time) {
        Some(utc) => utc.with_timezone(tz).format(DATE_LAYOUT).to_string(),
        None => UNKNOWN_DATE.to_string(),
    }
}

/// `None` when the time lies outside chrono's supported range.
fn to_utc(time: SystemTime) -> Option<DateTime<Utc>> {
    let (secs, nanos) = match time.duration_since(UNIX_EPOCH) {
        Ok(after) => (i64::try_from(after.as_secs()).ok()?, after.subsec_nanos()),
        Err(err) => {
            let before = err.duration();
            let secs = i64::try_from(before.as_secs()).ok()?;
            match before.subsec_nanos() {
                0 => (-secs, 0),
                nanos => (-secs - 1, 1_000_000_000 - nanos),
            }
        }
    };
    DateTime::<Utc>::from_timestamp(secs, nanos)
}
