use chrono::{FixedOffset, Utc};

use super::*;

const DATE: &str = DEFAULT_DATE_FORMAT;
const DATE_TIME: &str = DEFAULT_DATE_TIME_FORMAT;

fn moscow() -> FixedOffset {
    FixedOffset::east_opt(3 * 3600).unwrap()
}

fn new_york_winter() -> FixedOffset {
    FixedOffset::west_opt(5 * 3600).unwrap()
}

fn is_day_month_year(s: &str) -> bool {
    let parts: Vec<&str> = s.split('.').collect();
    parts.len() == 3
        && parts[0].len() == 2
        && parts[1].len() == 2
        && parts[2].len() == 4
        && parts.iter().all(|p| p.chars().all(|c| c.is_ascii_digit()))
}

// =============================================================
// Accepted inputs
// =============================================================

#[test]
fn date_only_renders_day_month_year() {
    assert_eq!(format_in("2024-01-15", &Utc, DATE), "15.01.2024");
}

#[test]
fn date_only_is_utc_midnight() {
    // West of UTC, midnight UTC is still the previous local day.
    assert_eq!(format_in("2024-01-15", &new_york_winter(), DATE), "14.01.2024");
    assert_eq!(format_in("2024-01-15", &moscow(), DATE_TIME), "15.01.2024, 03:00:00");
}

#[test]
fn offsetless_date_time_is_wall_clock() {
    assert_eq!(format_in("2024-01-15T14:30:00", &moscow(), DATE_TIME), "15.01.2024, 14:30:00");
    assert_eq!(format_in("2024-01-15 14:30", &moscow(), DATE_TIME), "15.01.2024, 14:30:00");
    assert_eq!(format_in("2024-01-15T09:05:07.250", &Utc, DATE_TIME), "15.01.2024, 09:05:07");
}

#[test]
fn zoned_date_time_is_converted() {
    assert_eq!(format_in("2024-01-15T14:30:00Z", &moscow(), DATE_TIME), "15.01.2024, 17:30:00");
    assert_eq!(format_in("2024-01-15T23:30:00+00:00", &moscow(), DATE), "16.01.2024");
}

#[test]
fn rfc2822_is_accepted() {
    assert_eq!(format_in("Mon, 15 Jan 2024 14:30:00 +0000", &Utc, DATE_TIME), "15.01.2024, 14:30:00");
}

#[test]
fn epoch_millis_are_accepted() {
    assert_eq!(format_in(0_i64, &Utc, DATE_TIME), "01.01.1970, 00:00:00");
    assert_eq!(format_in(1_705_329_000_000_i64, &Utc, DATE_TIME), "15.01.2024, 14:30:00");
}

#[test]
fn typed_instants_are_accepted() {
    let dt = moscow().with_ymd_and_hms(2024, 1, 15, 14, 30, 0).unwrap();
    assert_eq!(format_in(dt, &Utc, DATE_TIME), "15.01.2024, 11:30:00");
}

#[test]
fn surrounding_whitespace_is_ignored() {
    assert_eq!(format_in("  2024-01-15 ", &Utc, DATE), "15.01.2024");
}

// =============================================================
// Invalid inputs
// =============================================================

#[test]
fn garbage_is_invalid_date() {
    assert_eq!(format_in("not a date", &Utc, DATE), INVALID_DATE);
    assert_eq!(format_in("", &Utc, DATE), INVALID_DATE);
    assert_eq!(format_in("2024-13-40", &Utc, DATE), INVALID_DATE);
}

#[test]
fn out_of_range_millis_are_invalid_date() {
    assert_eq!(format_in(i64::MAX, &Utc, DATE), INVALID_DATE);
}

#[test]
fn malformed_pattern_is_invalid_date() {
    assert_eq!(format_in("2024-01-15", &Utc, "%Q"), INVALID_DATE);
}

// =============================================================
// Local-time entry points
// =============================================================

#[test]
fn format_date_matches_day_month_year_pattern() {
    assert!(is_day_month_year(&format_date("2024-06-15T12:00:00")));
    assert!(is_day_month_year(&format_date(1_718_452_800_000_i64)));
}

#[test]
fn format_date_time_is_a_superset_of_format_date() {
    let input = "2024-06-15T12:00:00Z";
    let date = format_date(input);
    let date_time = format_date_time(input);
    assert!(date_time.starts_with(&date));
    assert!(date_time.len() > date.len());
    let time = &date_time[date.len()..];
    assert_eq!(time.len(), ", HH:MM:SS".len());
}

#[test]
fn configured_patterns_are_used() {
    let config = DateConfig { date_format: "%Y/%m/%d".into(), date_time_format: "%Y/%m/%d %H:%M".into() };
    assert_eq!(format_date_with("2024-06-15T12:00:00", &config), "2024/06/15");
    assert_eq!(format_date_time_with("2024-06-15T12:00:00", &config), "2024/06/15 12:00");
}

#[test]
fn owned_strings_convert() {
    let owned = String::from("bogus");
    assert_eq!(format_date(&owned), INVALID_DATE);
}
