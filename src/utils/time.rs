//! Time utilities: parsing time-of-day strings and resolving them on a day.

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Duration, NaiveDate, NaiveTime, TimeZone};

/// Accepted time-of-day layouts, tried in order.
/// `HH:MM.SS` is the historic config layout, kept for existing files.
const TIME_FORMATS: [&str; 3] = ["%H:%M.%S", "%H:%M:%S", "%H:%M"];

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    let t = t.trim();
    TIME_FORMATS
        .iter()
        .find_map(|f| NaiveTime::parse_from_str(t, f).ok())
}

/// Pin a wall-clock time on `day` in `tz`.
///
/// Ambiguous times (DST fall back) take the earlier instant; times inside
/// a DST gap are pushed forward one hour.
pub fn resolve_local<Tz: TimeZone>(
    tz: &Tz,
    day: NaiveDate,
    time: NaiveTime,
) -> AppResult<DateTime<Tz>> {
    let naive = day.and_time(time);
    tz.from_local_datetime(&naive)
        .earliest()
        .or_else(|| {
            naive
                .checked_add_signed(Duration::hours(1))
                .and_then(|shifted| tz.from_local_datetime(&shifted).earliest())
        })
        .ok_or_else(|| AppError::Timezone(format!("cannot resolve local time {naive}")))
}

/// Local midnight of `day` in `tz`.
pub fn start_of_day<Tz: TimeZone>(tz: &Tz, day: NaiveDate) -> AppResult<DateTime<Tz>> {
    resolve_local(tz, day, NaiveTime::MIN)
}

/// Seconds rounded to the nearest whole minute, halves away from zero.
pub fn round_to_minutes(secs: i64) -> i64 {
    let rounded = (secs.abs() + 30) / 60;
    if secs < 0 { -rounded } else { rounded }
}
