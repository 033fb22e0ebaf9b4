// crates/todo_commands/src/dates.rs

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};

/// Parses `YYYY`, `YYYY-MM` or `YYYY-MM-DD` into the first calendar day it
/// denotes. Every segment must be ASCII digits naming a real month/day.
pub fn parse_calendar_point(text: &str) -> Option<NaiveDate> {
    let segments: Vec<&str> = text.split('-').collect();
    if segments.len() > 3 {
        return None;
    }
    if !segments
        .iter()
        .all(|s| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()))
    {
        return None;
    }

    let year: i32 = segments[0].parse().ok()?;
    let month: u32 = match segments.get(1) {
        Some(s) => s.parse().ok()?,
        None => 1,
    };
    let day: u32 = match segments.get(2) {
        Some(s) => s.parse().ok()?,
        None => 1,
    };
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Interprets the raw `date` field of a todo.
///
/// Accepts everything `parse_calendar_point` does (at midnight), plus RFC 3339
/// timestamps converted to UTC. Returns `None` for empty or unparsable text.
pub fn parse_todo_date(text: &str) -> Option<NaiveDateTime> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    parse_calendar_point(text)
        .map(start_of_day)
        .or_else(|| {
            DateTime::parse_from_rfc3339(text)
                .ok()
                .map(|dt| dt.naive_utc())
        })
}

/// Midnight at the start of `date`.
pub fn start_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}
