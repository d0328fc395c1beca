//! Configuration sanity checks.
//!
//! `validate` is the only way to obtain a [`Plan`], so the generator always
//! works on parsed, ordered values.

use crate::config::Configuration;
use crate::errors::{AppResult, ConfigError};
use crate::utils::date::{days_between, is_weekend, parse_date, parse_weekday, weekday_name};
use crate::utils::time::parse_time;
use chrono::{Datelike, NaiveDate, NaiveTime, Weekday};
use std::collections::HashMap;

/// Begin/end time of day for one workday.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub begin: NaiveTime,
    pub end: NaiveTime,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkingDays {
    /// Every day except Saturday and Sunday.
    ExcludeWeekend,
    /// Only the listed weekdays.
    Only(Vec<Weekday>),
}

impl WorkingDays {
    pub fn contains(&self, day: NaiveDate) -> bool {
        match self {
            WorkingDays::ExcludeWeekend => !is_weekend(day),
            WorkingDays::Only(days) => days.contains(&day.weekday()),
        }
    }
}

/// Validated generator input.
#[derive(Debug, Clone)]
pub struct Plan {
    pub start_id: i64,
    pub pause_minutes: i64,
    pub userid: String,
    pub client_id: String,
    pub from: NaiveDate,
    pub until: NaiveDate,
    pub window: Window,
    pub day_windows: HashMap<Weekday, Window>,
    pub working_days: WorkingDays,
    pub begin_delta_s: u64,
    pub end_delta_s: u64,
}

impl Plan {
    pub fn window_for(&self, day: NaiveDate) -> Window {
        self.day_windows
            .get(&day.weekday())
            .copied()
            .unwrap_or(self.window)
    }

    pub fn is_working_day(&self, day: NaiveDate) -> bool {
        self.working_days.contains(day)
    }

    /// Working days of the range, in calendar order.
    pub fn working_dates(&self) -> Vec<NaiveDate> {
        days_between(self.from, self.until)
            .into_iter()
            .filter(|d| self.is_working_day(*d))
            .collect()
    }
}

fn unparseable(what: &str, value: &str) -> ConfigError {
    ConfigError::new(
        ConfigError::UNPARSEABLE,
        format!("Can't parse {what} {value:?}"),
    )
}

fn date_field(what: &str, value: &str) -> Result<NaiveDate, ConfigError> {
    parse_date(value).ok_or_else(|| unparseable(what, value))
}

fn time_field(what: &str, value: &str) -> Result<NaiveTime, ConfigError> {
    parse_time(value).ok_or_else(|| unparseable(what, value))
}

fn weekday_field(what: &str, value: &str) -> Result<Weekday, ConfigError> {
    parse_weekday(value).ok_or_else(|| unparseable(what, value))
}

/// Largest accepted random delta: one day.
pub const MAX_DELTA_S: i64 = 86_400;
/// Largest accepted pause: one day.
pub const MAX_PAUSE_MINUTES: i64 = 1_440;

fn bounded(what: &str, value: i64, max: i64) -> Result<u64, ConfigError> {
    if value < 0 {
        return Err(ConfigError::new(
            ConfigError::INVALID_AMOUNT,
            format!("negative {what} not allowed {value}"),
        ));
    }
    if value > max {
        return Err(ConfigError::new(
            ConfigError::INVALID_AMOUNT,
            format!("{what} {value} exceeds the maximum of {max}"),
        ));
    }
    Ok(value as u64)
}

fn ordered(label: &str, window: Window) -> Result<Window, ConfigError> {
    if window.begin >= window.end {
        return Err(ConfigError::new(
            ConfigError::BEGIN_AFTER_END,
            format!(
                "Daily begin after daily end{label}. {} can't be after {}",
                window.begin, window.end
            ),
        ));
    }
    Ok(window)
}

/// Check the configuration and build the generation plan.
///
/// Fails on the first broken constraint.
pub fn validate(cfg: &Configuration) -> AppResult<Plan> {
    Ok(build_plan(cfg)?)
}

fn build_plan(cfg: &Configuration) -> Result<Plan, ConfigError> {
    if cfg.start_id < 0 {
        return Err(ConfigError::new(
            ConfigError::INVALID_ID,
            format!("negative id not allowed {}", cfg.start_id),
        ));
    }

    let from = date_field("From date", &cfg.from)?;
    let until = date_field("Until date", &cfg.until)?;

    let window = Window {
        begin: time_field("DailyBegin time", &cfg.daily_begin)?,
        end: time_field("DailyEnd time", &cfg.daily_end)?,
    };

    let mut day_windows = HashMap::new();
    for (name, w) in &cfg.day_windows {
        let day = weekday_field("day window weekday", name)?;
        let parsed = Window {
            begin: time_field("DailyBegin time", &w.daily_begin)?,
            end: time_field("DailyEnd time", &w.daily_end)?,
        };
        day_windows.insert(day, parsed);
    }

    let working_days = match &cfg.working_days {
        None => WorkingDays::ExcludeWeekend,
        Some(names) => {
            let mut days = Vec::with_capacity(names.len());
            for name in names {
                let day = weekday_field("working day", name)?;
                if !days.contains(&day) {
                    days.push(day);
                }
            }
            WorkingDays::Only(days)
        }
    };

    let begin_delta_s = bounded("beginDeltaS", cfg.begin_delta_s, MAX_DELTA_S)?;
    let end_delta_s = bounded("endDeltaS", cfg.end_delta_s, MAX_DELTA_S)?;
    bounded("pauseMinutes", cfg.pause_minutes, MAX_PAUSE_MINUTES)?;

    if from > until {
        return Err(ConfigError::new(
            ConfigError::FROM_AFTER_UNTIL,
            format!("From after Until. {from} can't be after {until}"),
        ));
    }

    let window = ordered("", window)?;
    for (day, w) in &day_windows {
        ordered(&format!(" on {}", weekday_name(*day)), *w)?;
    }

    let plan = Plan {
        start_id: cfg.start_id,
        pause_minutes: cfg.pause_minutes,
        userid: cfg.userid.clone(),
        client_id: cfg.client_id.clone(),
        from,
        until,
        window,
        day_windows,
        working_days,
        begin_delta_s,
        end_delta_s,
    };

    // The last id handed out is start_id + rows - 1.
    let rows = plan.working_dates().len() as i64;
    if cfg.start_id.checked_add(rows).is_none() {
        return Err(ConfigError::new(
            ConfigError::INVALID_ID,
            format!("start id {} too large for {rows} rows", cfg.start_id),
        ));
    }

    Ok(plan)
}
