//! Date utilities: parsing YYYY-MM-DD, iterating ranges, weekday names.

use chrono::{Datelike, NaiveDate, Weekday};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT).ok()
}

/// All days from `start` to `end`, both included. Empty if `start > end`.
pub fn days_between(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    start.iter_days().take_while(|d| *d <= end).collect()
}

/// Accepts full English names and the usual three-letter forms, any case.
pub fn parse_weekday(s: &str) -> Option<Weekday> {
    s.trim().parse::<Weekday>().ok()
}

pub fn weekday_name(w: Weekday) -> &'static str {
    match w {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

pub fn is_weekend(d: NaiveDate) -> bool {
    matches!(d.weekday(), Weekday::Sat | Weekday::Sun)
}

/// e.g. `2023-01-02 Monday`
pub fn describe_day(d: NaiveDate) -> String {
    format!("{} {}", d.format(DATE_FORMAT), weekday_name(d.weekday()))
}
