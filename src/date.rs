//! Date and date-time formatting for page display.
//!
//! Defaults render the Russian locale: `15.01.2024` and
//! `15.01.2024, 14:30:00`. Unparseable input renders as `Invalid Date`,
//! which is what page scripts already expect from the browser.

#[cfg(test)]
#[path = "date_test.rs"]
mod date_test;

use std::fmt::{Display, Write as _};

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};

use crate::config::{DEFAULT_DATE_FORMAT, DEFAULT_DATE_TIME_FORMAT, DateConfig};

pub const INVALID_DATE: &str = "Invalid Date";

/// Local date-time layouts accepted without an offset.
const NAIVE_LAYOUTS: [&str; 4] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M"];

/// Anything a page script may hand over as a date.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DateInput<'a> {
    /// ISO 8601 / RFC 3339, `YYYY-MM-DD`, local `YYYY-MM-DD[T ]HH:MM[:SS]`, or RFC 2822.
    Text(&'a str),
    /// Milliseconds since the Unix epoch.
    Millis(i64),
    Instant(DateTime<Utc>),
}

impl<'a> From<&'a str> for DateInput<'a> {
    fn from(value: &'a str) -> Self {
        Self::Text(value)
    }
}

impl<'a> From<&'a String> for DateInput<'a> {
    fn from(value: &'a String) -> Self {
        Self::Text(value.as_str())
    }
}

impl From<i64> for DateInput<'_> {
    fn from(value: i64) -> Self {
        Self::Millis(value)
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for DateInput<'_> {
    fn from(value: DateTime<Tz>) -> Self {
        Self::Instant(value.with_timezone(&Utc))
    }
}

/// Resolve `input` to an instant viewed in `tz`.
///
/// Date-only text is UTC midnight and offset-less date-times are wall-clock
/// time in `tz`, matching how browsers read the same strings.
pub fn parse<Tz: TimeZone>(input: DateInput<'_>, tz: &Tz) -> Option<DateTime<Tz>> {
    match input {
        DateInput::Millis(ms) => DateTime::from_timestamp_millis(ms).map(|dt| dt.with_timezone(tz)),
        DateInput::Instant(dt) => Some(dt.with_timezone(tz)),
        DateInput::Text(raw) => parse_text(raw.trim(), tz),
    }
}

fn parse_text<Tz: TimeZone>(raw: &str, tz: &Tz) -> Option<DateTime<Tz>> {
    if raw.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(tz));
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN)).with_timezone(tz));
    }
    for layout in NAIVE_LAYOUTS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, layout) {
            return tz.from_local_datetime(&naive).earliest();
        }
    }
    DateTime::parse_from_rfc2822(raw).ok().map(|dt| dt.with_timezone(tz))
}

/// Format `value` in `tz` with a strftime `pattern`.
///
/// Both unparseable input and a malformed pattern yield [`INVALID_DATE`].
pub fn format_in<'a, Tz>(value: impl Into<DateInput<'a>>, tz: &Tz, pattern: &str) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let Some(dt) = parse(value.into(), tz) else {
        return INVALID_DATE.to_owned();
    };
    let mut out = String::new();
    if write!(out, "{}", dt.format(pattern)).is_err() {
        log::warn!("invalid date pattern {pattern:?}");
        return INVALID_DATE.to_owned();
    }
    out
}

/// Calendar date in local time, e.g. `15.01.2024`.
pub fn format_date<'a>(value: impl Into<DateInput<'a>>) -> String {
    format_in(value, &Local, DEFAULT_DATE_FORMAT)
}

/// Date and time in local time, e.g. `15.01.2024, 14:30:00`.
pub fn format_date_time<'a>(value: impl Into<DateInput<'a>>) -> String {
    format_in(value, &Local, DEFAULT_DATE_TIME_FORMAT)
}

/// [`format_date`] with configured patterns.
pub fn format_date_with<'a>(value: impl Into<DateInput<'a>>, config: &DateConfig) -> String {
    format_in(value, &Local, &config.date_format)
}

/// [`format_date_time`] with configured patterns.
pub fn format_date_time_with<'a>(value: impl Into<DateInput<'a>>, config: &DateConfig) -> String {
    format_in(value, &Local, &config.date_time_format)
}
