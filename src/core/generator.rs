//! Row generation: one SQL VALUES tuple per working day.

use crate::config::Configuration;
use crate::core::validate::{Plan, validate};
use crate::errors::{AppError, AppResult};
use crate::utils::date::describe_day;
use crate::utils::formatting::{format_minutes, rfc822, sql_quote};
use crate::utils::time::{resolve_local, round_to_minutes, start_of_day};
use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use rand::Rng;
use std::io::Write;

pub const INSERT_HEADER: &str = "INSERT INTO `user_times` (`id`, `crdate`, `cruser_id`, `modified`, `user_id`, `date`, `starttime`, `endtime`, `calctime`, `client`, `project`, `task`, `description`, `time_type_id`, `deducted`, `clearable`, `disabled`, `deleted`) VALUES";

const DESCRIPTION: &str = "Arbeitszeit";

#[derive(Debug, Clone, Copy, Default)]
pub struct GenerateOptions {
    /// Prefix every row with a `--Day: ...` comment line.
    pub with_comment: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GenerationSummary {
    pub rows: usize,
    pub first_id: Option<i64>,
    pub last_id: Option<i64>,
}

/// One simulated workday.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeEntry {
    pub id: i64,
    pub day: NaiveDate,
    /// Epoch seconds of the day's local midnight.
    pub day_epoch: i64,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    /// Worked time minus the pause, rounded to whole minutes.
    pub worked_minutes: i64,
}

impl TimeEntry {
    pub fn worktime(&self) -> String {
        format_minutes(self.worked_minutes)
    }

    pub fn comment(&self) -> String {
        format!(
            "--Day: {}: from: {} until:{}",
            describe_day(self.day),
            rfc822(&self.start),
            rfc822(&self.end)
        )
    }

    /// The tuple for this entry, terminated by `;` when `last`, `,` otherwise.
    pub fn values_row(&self, userid: &str, client_id: &str, last: bool) -> String {
        let start = self.start.timestamp();
        let end = self.end.timestamp();
        let row = format!(
            "({}, {}, 0, {}, {}, {}, {}, {}, {}, {}, 0, 1, {}, 0, 0, 1, 0, 0)",
            self.id,
            start,
            end,
            userid,
            self.day_epoch,
            start,
            end,
            sql_quote(&self.worktime()),
            client_id,
            sql_quote(DESCRIPTION),
        );
        format!("{row}{}", if last { ";" } else { "," })
    }
}

fn jitter<R: Rng>(rng: &mut R, delta_s: u64) -> i64 {
    if delta_s == 0 {
        return 0;
    }
    rng.gen_range(0..delta_s) as i64
}

fn shift<Tz: TimeZone>(t: DateTime<Tz>, secs: i64) -> AppResult<DateTime<Tz>> {
    Duration::try_seconds(secs)
        .and_then(|d| t.checked_add_signed(d))
        .ok_or_else(|| AppError::Overflow(format!("offset of {secs} seconds")))
}

/// Draw the entries for every working day of the plan.
///
/// Ids are consecutive over the emitted days, starting at `start_id`.
/// Skipped days do not consume an id, unlike the older gapped numbering
/// that advanced the id on every calendar day.
pub fn plan_entries<R: Rng, Tz: TimeZone>(
    plan: &Plan,
    rng: &mut R,
    tz: &Tz,
) -> AppResult<Vec<TimeEntry>> {
    let mut entries = Vec::new();

    for (idx, day) in plan.working_dates().into_iter().enumerate() {
        let window = plan.window_for(day);

        let begin_offset = jitter(rng, plan.begin_delta_s);
        let start = shift(resolve_local(tz, day, window.begin)?, begin_offset)?;
        let end_offset = jitter(rng, plan.end_delta_s);
        let end = shift(resolve_local(tz, day, window.end)?, end_offset)?;

        let worked = plan
            .pause_minutes
            .checked_mul(60)
            .and_then(|pause| (end.timestamp() - start.timestamp()).checked_sub(pause))
            .ok_or_else(|| AppError::Overflow(format!("pause of {} minutes", plan.pause_minutes)))?;
        let id = i64::try_from(idx)
            .ok()
            .and_then(|i| plan.start_id.checked_add(i))
            .ok_or_else(|| AppError::Overflow(format!("row id {} + {idx}", plan.start_id)))?;

        entries.push(TimeEntry {
            id,
            day,
            day_epoch: start_of_day(tz, day)?.timestamp(),
            start: start.with_timezone(&Utc),
            end: end.with_timezone(&Utc),
            worked_minutes: round_to_minutes(worked),
        });
    }

    Ok(entries)
}

/// Write the INSERT statement for `entries`.
///
/// Nothing at all is written when `entries` is empty.
pub fn write_statement<W: Write>(
    writer: &mut W,
    entries: &[TimeEntry],
    userid: &str,
    client_id: &str,
    opts: GenerateOptions,
) -> AppResult<GenerationSummary> {
    if entries.is_empty() {
        return Ok(GenerationSummary::default());
    }

    writeln!(writer, "{INSERT_HEADER}")?;
    let last_idx = entries.len() - 1;
    for (idx, entry) in entries.iter().enumerate() {
        if opts.with_comment {
            writeln!(writer, "{}", entry.comment())?;
        }
        writeln!(
            writer,
            "{}",
            entry.values_row(userid, client_id, idx == last_idx)
        )?;
    }
    writer.flush()?;

    Ok(GenerationSummary {
        rows: entries.len(),
        first_id: entries.first().map(|e| e.id),
        last_id: entries.last().map(|e| e.id),
    })
}

/// Validate `cfg`, then write one row per working day to `writer`.
///
/// Validation and time resolution complete before the first byte is
/// written; a failing writer aborts mid-stream.
pub fn generate<W: Write, R: Rng, Tz: TimeZone>(
    cfg: &Configuration,
    writer: &mut W,
    opts: GenerateOptions,
    rng: &mut R,
    tz: &Tz,
) -> AppResult<GenerationSummary> {
    let plan = validate(cfg)?;
    let entries = plan_entries(&plan, rng, tz)?;
    write_statement(writer, &entries, &plan.userid, &plan.client_id, opts)
}
