//! Formatting utilities used for generated SQL and status output.

use chrono::{DateTime, Utc};

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// `HH:MM`, with a leading `-` for negative amounts.
pub fn format_minutes(mins: i64) -> String {
    let sign = if mins < 0 { "-" } else { "" };
    let m = mins.abs();
    format!("{}{:02}:{:02}", sign, m / 60, m % 60)
}

/// RFC 822 layout, e.g. `02 Jan 23 08:00 UTC`.
pub fn rfc822(t: &DateTime<Utc>) -> String {
    t.format("%d %b %y %H:%M UTC").to_string()
}

/// Escape a value for use inside a single-quoted SQL literal.
pub fn sql_quote(s: &str) -> String {
    format!("'{}'", s.replace('\'', "''"))
}
